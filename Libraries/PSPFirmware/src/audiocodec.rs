// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(not(feature = "kernel"))]
use core::ffi::c_ulong;

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceCodecKind {
    At3Plus = 0x1000,
    At3 = 0x1001,
    Mp3 = 0x1002,
    Aac = 0x1003,
}

/// Size of the codec control block the `sceAudiocodec*` calls operate on, in words.
pub const AUDIOCODEC_BUFFER_WORDS: usize = 65;

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "pspaudiocodec"))]
extern "C" {
    pub fn sceAudiocodecCheckNeedMem(buffer: *mut c_ulong, kind: i32) -> i32;
    pub fn sceAudiocodecInit(buffer: *mut c_ulong, kind: i32) -> i32;
    pub fn sceAudiocodecDecode(buffer: *mut c_ulong, kind: i32) -> i32;
    pub fn sceAudiocodecGetEDRAM(buffer: *mut c_ulong, kind: i32) -> i32;
    pub fn sceAudiocodecReleaseEDRAM(buffer: *mut c_ulong) -> i32;
}
