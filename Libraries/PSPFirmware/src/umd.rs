// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::c_char;

use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceUmdInfo {
    pub size: u32,
    /// A [`SceUmdTypes`] value.
    pub r#type: u32,
}

pub type pspUmdInfo = SceUmdInfo;

sized_params!(SceUmdInfo);

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceUmdTypes {
    Game = 0x10,
    Video = 0x20,
    Audio = 0x40,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SceUmdState: i32 {
        const NOT_PRESENT = 0x01;
        const PRESENT = 0x02;
        const CHANGED = 0x04;
        const INITING = 0x08;
        const INITED = 0x10;
        const READY = 0x20;
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum UmdDriveStat {
    WaitForDisc = 0x02,
    WaitForInit = 0x20,
}

pub type UmdCallback = Option<unsafe extern "C" fn(unknown: i32, event: i32) -> i32>;

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspumd"))]
#[cfg_attr(
    all(target_os = "psp", feature = "kernel", not(feature = "adrenaline")),
    link(name = "pspumd_driver")
)]
#[cfg_attr(
    all(target_os = "psp", feature = "kernel", feature = "adrenaline"),
    link(name = "pspumd_kernel")
)]
extern "C" {
    /// Non-zero when a disc is in the drive.
    pub fn sceUmdCheckMedium() -> i32;
    /// `info.size` must be set before the call.
    pub fn sceUmdGetDiscInfo(info: *mut SceUmdInfo) -> i32;
    /// Mount the disc. `drive` is normally `disc0:`.
    pub fn sceUmdActivate(unit: i32, drive: *const c_char) -> i32;
    pub fn sceUmdDeactivate(unit: i32, drive: *const c_char) -> i32;
    /// Wait until the drive reaches any of the [`SceUmdState`] bits in `stat`.
    pub fn sceUmdWaitDriveStat(stat: i32) -> i32;
    pub fn sceUmdWaitDriveStatWithTimer(stat: i32, timeout: u32) -> i32;
    pub fn sceUmdWaitDriveStatCB(stat: i32, timeout: u32) -> i32;
    pub fn sceUmdCancelWaitDriveStat() -> i32;
    pub fn sceUmdGetDriveStat() -> i32;
    pub fn sceUmdGetErrorStat() -> i32;
    pub fn sceUmdRegisterUMDCallBack(cb_id: i32) -> i32;
    pub fn sceUmdUnRegisterUMDCallBack(cbid: i32) -> i32;
    pub fn sceUmdReplacePermit() -> i32;
    pub fn sceUmdReplaceProhibit() -> i32;
}
