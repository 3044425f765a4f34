// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use crate::types::{SceInt32, SceOff, SceUChar};
#[cfg(not(feature = "kernel"))]
use crate::types::{SceShort16, SceUInt32};

/// Stream window and buffers handed to `sceMp3ReserveMp3Handle`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceMp3InitArg {
    /// Offset of the first byte of MP3 data in the stream.
    pub mp3_stream_start: SceOff,
    pub mp3_stream_end: SceOff,
    pub mp3_buf: *mut SceUChar,
    pub mp3_buf_size: SceInt32,
    pub pcm_buf: *mut SceUChar,
    pub pcm_buf_size: SceInt32,
}

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "pspmp3"))]
extern "C" {
    /// Returns a handle id, `< 0` on error.
    pub fn sceMp3ReserveMp3Handle(args: *mut SceMp3InitArg) -> SceInt32;
    pub fn sceMp3ReleaseMp3Handle(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3InitResource() -> SceInt32;
    pub fn sceMp3TermResource() -> SceInt32;
    pub fn sceMp3Init(handle_id: SceInt32) -> SceInt32;
    /// Decode a frame. Returns the number of PCM bytes written to `*pcm_buf`.
    pub fn sceMp3Decode(handle_id: SceInt32, pcm_buf: *mut *mut SceShort16) -> SceInt32;
    pub fn sceMp3GetInfoToAddStreamData(
        handle_id: SceInt32,
        stream_buf: *mut *mut SceUChar,
        to_write: *mut SceInt32,
        src_pos: *mut SceInt32,
    ) -> SceInt32;
    pub fn sceMp3NotifyAddStreamData(handle_id: SceInt32, size: SceInt32) -> SceInt32;
    /// Returns 1 when more stream data must be fed.
    pub fn sceMp3CheckStreamDataNeeded(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3SetLoopNum(handle_id: SceInt32, r#loop: SceInt32) -> SceInt32;
    pub fn sceMp3GetLoopNum(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3GetSumDecodedSample(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3GetMaxOutputSample(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3GetSamplingRate(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3GetBitRate(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3GetMp3ChannelNum(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3ResetPlayPosition(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3GetFrameNum(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3ResetPlayPositionByFrame(handle_id: SceInt32, frame: SceUInt32) -> SceInt32;
    pub fn sceMp3GetMPEGVersion(handle_id: SceInt32) -> SceInt32;
    pub fn sceMp3LowLevelInit(handle_id: SceInt32, raw_buf: *mut SceUChar) -> SceInt32;
    pub fn sceMp3LowLevelDecode(
        handle_id: SceInt32,
        mp3_src: *mut SceUChar,
        mp3_src_used: *mut SceUInt32,
        pcm_dst: *mut SceShort16,
        pcm_dst_size: *mut SceUInt32,
    ) -> SceInt32;
}
