// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::c_void;

use num_enum::{IntoPrimitive, TryFromPrimitive};

pub const PSP_AUDIO_VOLUME_MAX: i32 = 0x8000;
pub const PSP_AUDIO_CHANNEL_MAX: i32 = 8;
/// Pass as the channel to reserve the next free one.
pub const PSP_AUDIO_NEXT_CHANNEL: i32 = -1;
pub const PSP_AUDIO_SAMPLE_MIN: i32 = 64;
pub const PSP_AUDIO_SAMPLE_MAX: i32 = 65472;

/// Round a sample count up to the 64-sample granularity the hardware expects.
#[inline]
#[must_use]
pub const fn PSP_AUDIO_SAMPLE_ALIGN(samples: i32) -> i32 {
    samples.wrapping_add(63) & !63
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceAudioErrorCode {
    NotInitialized = 0x8026_0001,
    OutputBusy = 0x8026_0002,
    InvalidCh = 0x8026_0003,
    PrivRequired = 0x8026_0004,
    NotFound = 0x8026_0005,
    InvalidSize = 0x8026_0006,
    InvalidFormat = 0x8026_0007,
    NotReserved = 0x8026_0008,
    NotOutput = 0x8026_0009,
    InvalidFrequency = 0x8026_000A,
    InvalidVolume = 0x8026_000B,
    InputBusy = 0x8026_0010,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum PspAudioFormats {
    Stereo = 0,
    Mono = 0x10,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceFrequencies {
    Freq48000 = 48000,
    Freq44100 = 44100,
    Freq32000 = 32000,
    Freq24000 = 24000,
    Freq22050 = 22050,
    Freq16000 = 16000,
    Freq12000 = 12000,
    Freq11050 = 11050,
    Freq8000 = 8000,
}

/// Microphone input parameters for `sceAudioInputInitEx`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceAudioInputParams {
    pub unk1: i32,
    pub gain: i32,
    pub unk2: i32,
    pub unk3: i32,
    pub unk4: i32,
    pub unk5: i32,
}

pub type pspAudioInputParams = SceAudioInputParams;

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspaudio"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspaudio_driver"))]
extern "C" {
    /// Reserve an output channel. Returns the channel number, `< 0` on error.
    pub fn sceAudioChReserve(channel: i32, sample_count: i32, format: i32) -> i32;
    pub fn sceAudioChRelease(channel: i32) -> i32;
    pub fn sceAudioOutput(channel: i32, vol: i32, buf: *mut c_void) -> i32;
    /// Output audio and block until the channel accepts the buffer.
    pub fn sceAudioOutputBlocking(channel: i32, vol: i32, buf: *mut c_void) -> i32;
    pub fn sceAudioOutputPanned(
        channel: i32,
        left_vol: i32,
        right_vol: i32,
        buf: *mut c_void,
    ) -> i32;
    pub fn sceAudioOutputPannedBlocking(
        channel: i32,
        left_vol: i32,
        right_vol: i32,
        buf: *mut c_void,
    ) -> i32;
    /// Number of samples not yet played.
    pub fn sceAudioGetChannelRestLen(channel: i32) -> i32;
    pub fn sceAudioGetChannelRestLength(channel: i32) -> i32;
    pub fn sceAudioSetChannelDataLen(channel: i32, sample_count: i32) -> i32;
    pub fn sceAudioChangeChannelConfig(channel: i32, format: i32) -> i32;
    pub fn sceAudioChangeChannelVolume(channel: i32, leftvol: i32, right_vol: i32) -> i32;
    /// Reserve the sample-rate-converting channel.
    pub fn sceAudioSRCChReserve(sample_count: i32, freq: i32, channels: i32) -> i32;
    pub fn sceAudioSRCChRelease() -> i32;
    pub fn sceAudioSRCOutputBlocking(vol: i32, buf: *mut c_void) -> i32;
    pub fn sceAudioInputInit(unk1: i32, gain: i32, unk2: i32) -> i32;
    pub fn sceAudioInputInitEx(params: *mut SceAudioInputParams) -> i32;
    pub fn sceAudioInputBlocking(sample_count: i32, freq: i32, buf: *mut c_void) -> i32;
    pub fn sceAudioInput(sample_count: i32, freq: i32, buf: *mut c_void) -> i32;
    pub fn sceAudioGetInputLength() -> i32;
    pub fn sceAudioWaitInputEnd() -> i32;
    pub fn sceAudioPollInputEnd() -> i32;
    pub fn sceAudioOutput2GetRestSample() -> i32;
}

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "pspaudio"))]
extern "C" {
    pub fn sceAudioOutput2Reserve(sample_count: i32) -> i32;
    pub fn sceAudioOutput2Release() -> i32;
    pub fn sceAudioOutput2ChangeLength(sample_count: i32) -> i32;
    pub fn sceAudioOutput2OutputBlocking(vol: i32, buf: *mut c_void) -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspaudio_driver"))]
extern "C" {
    /// Change the output frequency. Only 44100 and 48000 are accepted.
    pub fn sceAudioSetFrequency(frequency: i32) -> i32;
}
