// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Settings owned by the impose (home-screen overlay) driver.

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceImposeParam {
    MainVolume = 0x1,
    BacklightBrightness = 0x2,
    EqualizerMode = 0x4,
    Mute = 0x8,
    Avls = 0x10,
    TimeFormat = 0x20,
    DateFormat = 0x40,
    Language = 0x80,
    BacklightOffInterval = 0x200,
    SoundReduction = 0x400,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceImposeUmdStatus {
    PopupDisabled = 0,
    PopupEnabled = 1,
}

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspimpose"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspimpose_driver"))]
extern "C" {
    pub fn sceImposeGetBacklightOffTime() -> i32;
    pub fn sceImposeSetBacklightOffTime(value: i32) -> i32;
    pub fn sceImposeGetLanguageMode(lang: *mut i32, button: *mut i32) -> i32;
    pub fn sceImposeSetLanguageMode(lang: i32, button: i32) -> i32;
    /// A [`SceImposeUmdStatus`] value.
    pub fn sceImposeGetUMDPopup() -> i32;
    pub fn sceImposeSetUMDPopup(value: i32) -> i32;
    pub fn sceImposeGetHomePopup() -> i32;
    pub fn sceImposeSetHomePopup(value: i32) -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspimpose_driver"))]
extern "C" {
    pub fn sceImposeGetParam(param: SceImposeParam) -> i32;
    pub fn sceImposeSetParam(param: SceImposeParam, value: i32) -> i32;
    pub fn sceImposeCheckVideoOut(value: *mut i32) -> i32;
}
