// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Request channel between the emulated PSP and the host Vita.

#[cfg(feature = "kernel")]
use core::ffi::c_void;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::SceUID;

pub const KERMIT_MAX_ARGC: usize = 14;
pub const KERMIT_CALLBACK_DISABLE: u32 = 0;

/// 1 when `x` is a kernel-space address.
#[must_use]
pub const fn KERNEL(x: u32) -> u32 {
    if x & 0x8000_0000 != 0 {
        1
    } else {
        0
    }
}

/// Rebase a packet address into the segment Kermit expects.
#[must_use]
pub const fn KERMIT_PACKET(x: u32) -> u32 {
    x | (2 - KERNEL(x)) * 0x2000_0000
}

#[must_use]
pub const fn ALIGN_64(x: u32) -> u32 {
    x & !63
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitModes {
    None,
    Unk1,
    Unk2,
    Msfs,
    FlashFs,
    AudioOut,
    Me,
    LowIo,
    PocsUsbPspCm,
    Peripheral,
    Wlan,
    AudioIn,
    Usb,
    Utility,
    Extra1,
    Extra2,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitPeripheralCmd {
    RtcGetCurrentTick = 0x0,
    IdStorageLookup = 0x1,
    PowerFrequency = 0x2,
    AudioRouting = 0x3,
    GetCameraDirection = 0x5,
    GetIdpscEnable = 0x6,
    DisableMultitasking = 0x7,
    ErrorExit = 0x8,
    ErrorExit2 = 0x422,
    EnableMultitasking = 0x9,
    ResumeDevice = 0xA,
    RequestSuspend = 0xB,
    IsFirstBoot = 0xC,
    GetPrefixSsid = 0xD,
    SetPsButtonState = 0x10,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitMsfsCmd {
    InitMs = 0x0,
    ExitMs = 0x1,
    OpenMs = 0x2,
    CloseMs = 0x3,
    ReadMs = 0x4,
    WriteMs = 0x5,
    SeekMs = 0x6,
    IoctlMs = 0x7,
    RemoveMs = 0x8,
    MkdirMs = 0x9,
    RmdirMs = 0xA,
    DopenMs = 0xB,
    DcloseMs = 0xC,
    DreadMs = 0xD,
    GetstatMs = 0xE,
    ChstatMs = 0xF,
    RenameMs = 0x10,
    ChdirMs = 0x11,
    Devctl = 0x14,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitAudioCmd {
    InitAudioIn = 0x0,
    Output1 = 0x1,
    Output2 = 0x2,
    SuspendAudio = 0x3,
    Resume = 0x4,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitMeCmd {
    Unk0 = 0x0,
    SetAvcTimestampInternal = 0x1,
    BootStart = 0x2,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitLowIoCmd {
    Unk9 = 0x9,
    UnkA = 0xA,
    UnkB = 0xB,
    UnkC = 0xC,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitWlanCmd {
    Init = 0x0,
    GetSwitchInternalState = 0x2,
    GetEtherAddr = 0x3,
    AdhocCtlInit = 0x6,
    AdhocCtlTerm = 0x7,
    AdhocScan = 0x8,
    AdhocJoin = 0x9,
    AdhocCreate = 0xA,
    AdhocLeave = 0xB,
    AdhocTxData = 0xC,
    AdhocRxData = 0xD,
    InetInit = 0xE,
    InetStart = 0xF,
    InetTerm = 0x10,
    InetSocket = 0x11,
    InetClose = 0x12,
    InetBind = 0x13,
    InetListen = 0x14,
    InetConnect = 0x15,
    InetShutdown = 0x16,
    InetPoll = 0x17,
    InetAccept = 0x18,
    InetGetPeerName = 0x19,
    InetGetSockName = 0x1A,
    InetGetOpt = 0x1B,
    InetSetOpt = 0x1C,
    InetRecvFrom = 0x1D,
    InetSendtoInternal = 0x1E,
    InetSoIoctl = 0x1F,
    SuspendWlan = 0x20,
    SetWolParam = 0x22,
    GetWolInfo = 0x23,
    SetHostDiscover = 0x24,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitUtilityCmd {
    OskStart = 0x0,
    OskShutdown = 0x1,
    OskUpdate = 0x3,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitUsbCmd {
    Init = 0x0,
    Activate = 0x15,
    Deactivate = 0x16,
    SetOp = 0x19,
    SetOpBis = 0x1A,
    Unk1B = 0x1B,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitVirtualInterrupts {
    None,
    AudioCh1,
    AudioCh2,
    AudioCh3,
    MeDmaCh1,
    MeDmaCh2,
    MeDmaCh3,
    WlanCh1,
    WlanCh2,
    ImposeCh1,
    PowerCh1,
    UnknownCh1,
    UsbGpsCh1,
    UsbPspCmCh1,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum KermitArgumentModes {
    Input = 0x1,
    Output = 0x2,
}

/// A request as it sits in shared memory. 0x80 bytes on the PSP.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKermitRequest {
    pub cmd: u32,
    pub sema_id: SceUID,
    pub response: *mut u64,
    pub padding: u32,
    pub args: [u64; KERMIT_MAX_ARGC],
}

impl Default for SceKermitRequest {
    fn default() -> Self {
        Self {
            cmd: 0,
            sema_id: 0,
            response: core::ptr::null_mut(),
            padding: 0,
            args: [0; KERMIT_MAX_ARGC],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKermitCommand {
    pub cmd: u32,
    pub request: *mut SceKermitRequest,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKermitResponse {
    pub result: u64,
    pub sema_id: SceUID,
    pub unk_C: i32,
    pub response: *mut u64,
    pub unk_1C: u64,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceKermitInterrupt {
    pub unk_0: i32,
    pub unk_4: i32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct KermitPacket {
    pub cmd: u32,
    pub sema: SceUID,
    pub this: *mut KermitPacket,
    pub unk_C: u32,
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspkermit_driver"))]
extern "C" {
    pub fn sceKermitRegisterVirtualIntrHandler(interrupt_id: u32, handler: *mut c_void) -> i32;
    /// Send `request` to the host and block on its semaphore until it answers.
    pub fn sceKermitSendRequest(
        request: *mut SceKermitRequest,
        mode: u32,
        cmd: u32,
        argc: i32,
        allow_callback: u32,
        response: *mut u64,
    ) -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspkermitmemory_driver"))]
extern "C" {
    pub fn sceKermitMemorySetArgument(
        packet: *mut KermitPacket,
        argc: u32,
        buffer: *const c_void,
        buffer_size: u32,
        io_mode: u32,
    );
}

#[cfg(all(feature = "kernel", not(feature = "pspsdk-stubs")))]
#[cfg_attr(target_os = "psp", link(name = "pspkermitmemory_driver"))]
extern "C" {
    pub fn sceKermitMemorySendData(data: *const c_void, len: u32);
    pub fn sceKermitMemoryReceiveData(data: *mut u8, data_size: u32);
}

#[cfg(all(feature = "kernel", not(feature = "pspsdk-stubs")))]
pub use self::{
    sceKermitMemoryReceiveData as sceKermitMemory_driver_90B662D0,
    sceKermitMemorySendData as sceKermitMemory_driver_80E1240A,
};

#[cfg(all(feature = "kernel", feature = "pspsdk-stubs"))]
#[cfg_attr(target_os = "psp", link(name = "pspkermitmemory_driver"))]
extern "C" {
    pub fn sceKermitMemory_driver_80E1240A(data: *const c_void, len: u32);
    pub fn sceKermitMemory_driver_90B662D0(data: *mut u8, data_size: u32);
}

#[cfg(all(feature = "kernel", feature = "pspsdk-stubs"))]
pub use self::{
    sceKermitMemory_driver_80E1240A as sceKermitMemorySendData,
    sceKermitMemory_driver_90B662D0 as sceKermitMemoryReceiveData,
};
