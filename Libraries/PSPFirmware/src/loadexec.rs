// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::{c_char, c_void};

use crate::types::SceSize;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelLoadExecParam {
    pub size: SceSize,
    /// Length of the argument string at `argp`.
    pub args: SceSize,
    pub argp: *mut c_void,
    pub key: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelLoadExecVSHParam {
    pub size: SceSize,
    pub args: SceSize,
    pub argp: *mut c_void,
    /// Usually "game", "updater" or "vsh".
    pub key: *const c_char,
    pub vshmain_args_size: u32,
    /// Handed to vshmain once the program exits.
    pub vshmain_args: *mut c_void,
    /// Boot config path, `/kd/pspbtcnf.txt` when null.
    pub configfile: *mut c_char,
    pub unk4: u32,
    /// Usually 0x10000.
    pub unk5: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RunExecParams {
    pub api_type: u32,
    pub args: i32,
    /// Sometimes the file name, with `args` set to 0.
    pub argp: *mut c_void,
    pub vsh_param: *mut SceKernelLoadExecVSHParam,
    pub opt4: *mut c_void,
    pub np_drm1: *mut c_char,
    pub np_drm2_1: i32,
    pub np_drm2_2: i32,
    pub np_drm_arg: *mut c_void,
}

sized_params!(SceKernelLoadExecParam, SceKernelLoadExecVSHParam);

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "psploadexec_user"))]
extern "C" {
    /// Installing an exit callback enables the HOME button. The callback must call [`sceKernelExitGame`].
    pub fn sceKernelRegisterExitCallback(cbid: i32) -> i32;
    pub fn sceKernelExitGame();
    pub fn sceKernelExitGameWithStatus(status: i32);
    pub fn sceKernelLoadExec(file: *const c_char, param: *mut SceKernelLoadExecParam) -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "psploadexec_kernel"))]
extern "C" {
    #[cfg(psp_fw_le_151)]
    pub fn sceKernelLoadExecBufferPlain(
        bufsize: SceSize,
        buf: *mut c_void,
        param: *mut SceKernelLoadExecParam,
    ) -> i32;
    /// Restart the VSH.
    pub fn sceKernelExitVSHVSH(param: *mut SceKernelLoadExecVSHParam) -> i32;
    #[cfg(psp_fw_ge_200)]
    pub fn sceKernelExitVSHKernel(param: *mut SceKernelLoadExecVSHParam) -> i32;
    pub fn sceKernelLoadExecVSHDisc(
        file: *const c_char,
        param: *mut SceKernelLoadExecVSHParam,
    ) -> i32;
    pub fn sceKernelLoadExecVSHDiscUpdater(
        file: *const c_char,
        param: *mut SceKernelLoadExecVSHParam,
    ) -> i32;
    pub fn sceKernelLoadExecVSHMs1(
        file: *const c_char,
        param: *mut SceKernelLoadExecVSHParam,
    ) -> i32;
    pub fn sceKernelLoadExecVSHMs2(
        file: *const c_char,
        param: *mut SceKernelLoadExecVSHParam,
    ) -> i32;
    pub fn sceKernelLoadExecVSHMs3(
        file: *const c_char,
        param: *mut SceKernelLoadExecVSHParam,
    ) -> i32;
    #[cfg(psp_fw_ge_300)]
    pub fn sceKernelLoadExecVSHMs4(
        file: *const c_char,
        param: *mut SceKernelLoadExecVSHParam,
    ) -> i32;
    #[cfg(psp_fw_ge_300)]
    pub fn sceKernelLoadExecVSHMs5(
        file: *const c_char,
        param: *mut SceKernelLoadExecVSHParam,
    ) -> i32;
}
