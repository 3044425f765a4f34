// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::c_void;

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceDisplayPixelFormats {
    /// 16-bit RGB 5:6:5.
    Format565 = 0,
    /// 16-bit RGBA 5:5:5:1.
    Format5551 = 1,
    /// 16-bit RGBA 4:4:4:4.
    Format4444 = 2,
    /// 32-bit RGBA 8:8:8:8.
    Format8888 = 3,
}

pub type PspDisplayPixelFormats = SceDisplayPixelFormats;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceDisplaySetBufSync {
    /// Swap at the next horizontal sync.
    NextHsync = 0,
    /// Swap at the next vertical sync.
    NextVsync = 1,
}

pub type PspDisplaySetBufSync = SceDisplaySetBufSync;

pub const PSP_DISPLAY_SETBUF_IMMEDIATE: SceDisplaySetBufSync = SceDisplaySetBufSync::NextHsync;
pub const PSP_DISPLAY_SETBUF_NEXTFRAME: SceDisplaySetBufSync = SceDisplaySetBufSync::NextVsync;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceDisplayMode {
    Lcd = 0,
    Vesa1A = 0x1A,
    PseudoVga = 0x60,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceDisplayErrorCode {
    Ok = 0,
    Pointer = 0x8000_0103,
    Argument = 0x8000_0107,
}

pub type PspDisplayErrorCodes = SceDisplayErrorCode;

#[cfg_attr(
    all(target_os = "psp", not(feature = "kernel"), not(feature = "adrenaline")),
    link(name = "pspdisplay")
)]
#[cfg_attr(
    all(target_os = "psp", not(feature = "kernel"), feature = "adrenaline"),
    link(name = "pspdisplay_user")
)]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspdisplay_driver"))]
extern "C" {
    /// Set the display mode. Only [`SceDisplayMode::Lcd`] at 480x272 is usable on the LCD.
    pub fn sceDisplaySetMode(mode: i32, width: i32, height: i32) -> i32;
    pub fn sceDisplayGetMode(mode: *mut i32, width: *mut i32, height: *mut i32) -> i32;
    /// Point the display at a framebuffer. `buf_width` is in pixels and must be a power of two.
    pub fn sceDisplaySetFrameBuf(
        buf_addr: *mut c_void,
        buf_width: i32,
        pixel_format: i32,
        sync: i32,
    ) -> i32;
    pub fn sceDisplayGetFrameBuf(
        buf_addr: *mut *mut c_void,
        buf_width: *mut i32,
        pixel_format: *mut i32,
        sync: i32,
    ) -> i32;
    /// Number of vertical blank pulses since power on.
    pub fn sceDisplayGetVcount() -> u32;
    pub fn sceDisplayWaitVblankStart() -> i32;
    pub fn sceDisplayWaitVblankStartCB() -> i32;
    pub fn sceDisplayWaitVblank() -> i32;
    pub fn sceDisplayWaitVblankCB() -> i32;
    pub fn sceDisplayGetAccumulatedHcount() -> i32;
    pub fn sceDisplayGetCurrentHcount() -> i32;
    pub fn sceDisplayGetFramePerSec() -> f32;
    pub fn sceDisplayIsForeground() -> i32;
    pub fn sceDisplayIsVblank() -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspdisplay_driver"))]
extern "C" {
    /// Set the backlight level, 0 to 100.
    pub fn sceDisplaySetBrightness(level: i32, unk1: i32);
    pub fn sceDisplayGetBrightness(level: *mut i32, unk1: *mut i32);
}

#[cfg(all(feature = "kernel", feature = "pspsdk-stubs"))]
#[cfg_attr(target_os = "psp", link(name = "pspdisplay_driver"))]
extern "C" {
    pub fn sceDisplay_driver_63E22A26(
        priority: i32,
        buf_addr: *mut c_void,
        buf_width: i32,
        pixel_format: i32,
        sync: i32,
    ) -> i32;
    pub fn sceDisplay_driver_5B5AEFAD(
        priority: i32,
        buf_addr: *mut *mut c_void,
        buf_width: *mut i32,
        pixel_format: *mut i32,
        sync: *mut i32,
    ) -> i32;
}

#[cfg(all(feature = "kernel", feature = "pspsdk-stubs"))]
pub use self::{
    sceDisplay_driver_5B5AEFAD as sceDisplay_driver_F338AAE0,
    sceDisplay_driver_5B5AEFAD as sceDisplayGetFrameBufferInternal,
    sceDisplay_driver_63E22A26 as sceDisplay_driver_3E17FE8D,
    sceDisplay_driver_63E22A26 as sceDisplaySetFrameBufferInternal,
};

#[cfg(all(feature = "kernel", not(feature = "pspsdk-stubs")))]
#[cfg_attr(target_os = "psp", link(name = "pspdisplay_driver"))]
extern "C" {
    pub fn sceDisplay_driver_3E17FE8D(
        priority: i32,
        buf_addr: *mut c_void,
        buf_width: i32,
        pixel_format: i32,
        sync: i32,
    ) -> i32;
    pub fn sceDisplay_driver_F338AAE0(
        priority: i32,
        buf_addr: *mut *mut c_void,
        buf_width: *mut i32,
        pixel_format: *mut i32,
        sync: *mut i32,
    ) -> i32;
}

#[cfg(all(feature = "kernel", not(feature = "pspsdk-stubs")))]
pub use self::{
    sceDisplay_driver_3E17FE8D as sceDisplay_driver_63E22A26,
    sceDisplay_driver_3E17FE8D as sceDisplaySetFrameBufferInternal,
    sceDisplay_driver_F338AAE0 as sceDisplay_driver_5B5AEFAD,
    sceDisplay_driver_F338AAE0 as sceDisplayGetFrameBufferInternal,
};
