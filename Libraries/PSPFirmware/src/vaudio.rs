// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::c_void;

use num_enum::{IntoPrimitive, TryFromPrimitive};

pub const PSP_VAUDIO_VOLUME_MAX: i32 = 0x8000;
pub const PSP_VAUDIO_SAMPLE_MAX: i32 = 2048;
pub const PSP_VAUDIO_SAMPLE_MIN: i32 = 256;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceVaudioFormat {
    Mono = 1,
    Stereo = 2,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceEffectType {
    Off = 0,
    Heavy = 1,
    Pops = 2,
    Jazz = 3,
    Unique = 4,
    Max = 5,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceAlcMode {
    Off = 0,
    Mode1 = 1,
    ModeMax = 2,
}

#[cfg_attr(target_os = "psp", link(name = "pspvaudio"))]
extern "C" {
    pub fn sceVaudioOutputBlocking(volume: i32, buffer: *mut c_void) -> i32;
    pub fn sceVaudioChReserve(sample_count: i32, frequency: i32, format: i32) -> i32;
    pub fn sceVaudioChRelease() -> i32;
    pub fn sceVaudioSetEffectType(effect: i32, volume: i32) -> i32;
    /// Automatic level control.
    pub fn sceVaudioSetAlcMode(mode: i32) -> i32;
}
