// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Headphone remote.

use bitflags::bitflags;

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SceHprmKeys: u32 {
        const PLAYPAUSE = 0x01;
        const FORWARD = 0x04;
        const BACK = 0x08;
        const VOL_UP = 0x10;
        const VOL_DOWN = 0x20;
        const HOLD = 0x80;
    }
}

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "psphprm"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "psphprm_driver"))]
extern "C" {
    /// Currently held [`SceHprmKeys`].
    pub fn sceHprmPeekCurrentKey(key: *mut u32) -> i32;
    pub fn sceHprmPeekLatch(latch: *mut u32) -> i32;
    pub fn sceHprmReadLatch(latch: *mut u32) -> i32;
    pub fn sceHprmIsHeadphoneExist() -> i32;
    pub fn sceHprmIsRemoteExist() -> i32;
    pub fn sceHprmIsMicrophoneExist() -> i32;
}
