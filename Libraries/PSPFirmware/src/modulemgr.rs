// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Loading, starting and stopping PRX modules.
//!
//! Every `flags` parameter is unused by the firmware and should be 0.

use core::ffi::{c_char, c_void};

use crate::types::{SceSize, SceUID};

pub const PSP_MEMORY_PARTITION_KERNEL: SceUID = 1;
pub const PSP_MEMORY_PARTITION_USER: SceUID = 2;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceKernelLMOption {
    pub size: SceSize,
    pub mpidtext: SceUID,
    pub mpiddata: SceUID,
    pub flags: u32,
    pub position: u8,
    pub access: u8,
    pub creserved: [u8; 2],
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceKernelSMOption {
    pub size: SceSize,
    pub mpidstack: SceUID,
    pub stacksize: SceSize,
    pub priority: i32,
    pub attribute: u32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceKernelModuleInfo {
    pub size: SceSize,
    pub nsegment: u8,
    pub reserved: [u8; 3],
    pub segmentaddr: [i32; 4],
    pub segmentsize: [i32; 4],
    pub entry_addr: u32,
    pub gp_value: u32,
    pub text_addr: u32,
    pub text_size: u32,
    pub data_size: u32,
    pub bss_size: u32,
    pub attribute: u16,
    pub version: [u8; 2],
    pub name: [u8; 28],
}

sized_params!(SceKernelLMOption, SceKernelSMOption, SceKernelModuleInfo);
named_objects!(SceKernelModuleInfo);

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspmodulemgr_user"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspmodulemgr_kernel"))]
extern "C" {
    /// Load a module from a file path. `option` may be null.
    pub fn sceKernelLoadModule(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleByID(
        fid: SceUID,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferUsbWlan(
        buf_size: SceSize,
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    /// Start a loaded module. `status` receives the result of its `module_start`.
    pub fn sceKernelStartModule(
        modid: SceUID,
        argsize: SceSize,
        argp: *mut c_void,
        status: *mut i32,
        option: *mut SceKernelSMOption,
    ) -> i32;
    /// Stop a running module. `status` receives the result of its `module_stop`.
    pub fn sceKernelStopModule(
        modid: SceUID,
        argsize: SceSize,
        argp: *mut c_void,
        status: *mut i32,
        option: *mut SceKernelSMOption,
    ) -> i32;
    pub fn sceKernelUnloadModule(modid: SceUID) -> i32;
    pub fn sceKernelSelfStopUnloadModule(unknown: i32, argsize: SceSize, argp: *mut c_void) -> i32;
    /// Fails on 1.0 firmware.
    pub fn sceKernelQueryModuleInfo(modid: SceUID, info: *mut SceKernelModuleInfo) -> i32;
    pub fn sceKernelGetModuleIdList(
        readbuf: *mut SceUID,
        readbufsize: i32,
        idcount: *mut i32,
    ) -> i32;
}

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "pspmodulemgr_user"))]
extern "C" {
    /// Refuses plain executables.
    pub fn sceKernelLoadModuleMs(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleDNAS(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelStopUnloadSelfModule(
        exitcode: i32,
        argsize: SceSize,
        argp: *mut c_void,
        status: *mut i32,
        option: *mut SceKernelSMOption,
    ) -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspmodulemgr_kernel"))]
extern "C" {
    pub fn sceKernelStopUnloadSelfModule(
        argsize: SceSize,
        argp: *mut c_void,
        status: *mut i32,
        option: *mut SceKernelSMOption,
    ) -> i32;
    #[cfg(psp_fw_lt_103)]
    pub fn sceKernelGetModuleList(readbufsize: i32, readbuf: *mut SceUID) -> i32;
    #[cfg(psp_fw_lt_103)]
    pub fn sceKernelModuleCount() -> i32;
    pub fn sceKernelLoadModuleBufferForKernel(
        buf: *mut c_void,
        bufsize: SceSize,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBuffer(
        buf: *mut c_void,
        bufsize: SceSize,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferForLoadExecBufferVSHUsbWlan(
        bufsize: SceSize,
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferForLoadExecBufferVSHUsbWlanDebug(
        bufsize: SceSize,
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferUsbWlanDebug(
        bufsize: SceSize,
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferForExitVSHKernel(
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
        unk: i32,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferForExitGame(
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
        unk: i32,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferForExitVSHVSH(
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
        unk: i32,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferForRebootKernel(
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
        unk: i32,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferVSH(
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferBootInitBtcnf(
        bufsize: i32,
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleBufferBootInitConfig(
        bufsize: i32,
        buf: *mut c_void,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleDeci(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleVSH(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHDisc(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleDisc(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHDiscUpdater(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleDiscUpdater(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHDiscDebug(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleDiscDebug(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHDiscEmu(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleDiscEmu(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHMs1(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleMs1(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHMs2(
        apitype: i32,
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleMs2(
        apitype: i32,
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHMs3(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleMs3(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHMs4(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleMs4(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHMs5(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleMs5(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecVSHMs6(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleMs6(
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleForLoadExecForUser(
        apitype: i32,
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelLoadModuleWithApitype2(
        apitype: i32,
        path: *const c_char,
        flags: i32,
        option: *mut SceKernelLMOption,
    ) -> SceUID;
    pub fn sceKernelStopUnloadSelfModuleWithStatus(
        exitcode: i32,
        argsize: SceSize,
        argp: *mut c_void,
        status: *mut i32,
        option: *mut SceKernelSMOption,
    ) -> i32;
}
