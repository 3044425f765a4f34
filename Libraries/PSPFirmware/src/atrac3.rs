// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! ATRAC3 and ATRAC3plus decoder (`libatrac3plus`).

#[cfg(not(feature = "kernel"))]
use core::ffi::c_void;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::audiocodec::SceCodecKind;
#[cfg(not(feature = "kernel"))]
use crate::types::SceSize;

pub const PSP_ATRAC_SUCCESS: i32 = 0;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceAtracErrorCode {
    ParamFail = 0x8063_0001,
    ApiFail = 0x8063_0002,
    NoAtracId = 0x8063_0003,
    BadCodecType = 0x8063_0004,
    BadAtracId = 0x8063_0005,
    UnknownFormat = 0x8063_0006,
    UnmatchFormat = 0x8063_0007,
    BadData = 0x8063_0008,
    AllDataIsOnMemory = 0x8063_0009,
    UnsetData = 0x8063_0010,
    ReadSizeIsTooSmall = 0x8063_0011,
    NeedSecondBuffer = 0x8063_0012,
    ReadSizeOverBuffer = 0x8063_0013,
    Not4ByteAlignment = 0x8063_0014,
    BadSample = 0x8063_0015,
    WriteByteFirstBuffer = 0x8063_0016,
    WriteByteSecondBuffer = 0x8063_0017,
    AddDataIsTooBig = 0x8063_0018,
    UnsetParam = 0x8063_0021,
    NoNeedSecondBuffer = 0x8063_0022,
    NoDataInBuffer = 0x8063_0023,
    AllDataWasDecoded = 0x8063_0024,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceAtracCodecType {
    At3Plus = SceCodecKind::At3Plus as u32,
    At3 = SceCodecKind::At3 as u32,
}

/// Negative `remain_frame` values reported once the whole stream is buffered.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceAtracRemainFrameStatus {
    AllDataIsOnMemory = -1,
    NonLoopStreamDataIsOnMemory = -2,
    LoopStreamDataIsOnMemory = -3,
}

/// Streaming buffer positions for `sceAtracGetBufferInfoForReseting`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceBufferInfo {
    pub write_pos_first_buf: *mut u8,
    pub writable_size_first_buf: u32,
    pub min_write_size_first_buf: u32,
    pub read_pos_first_buf: u32,
    pub write_pos_second_buf: *mut u8,
    pub writable_size_second_buf: u32,
    pub min_write_size_second_buf: u32,
    pub read_pos_second_buf: u32,
}

pub type PspBufferInfo = SceBufferInfo;

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "pspatrac3plus"))]
extern "C" {
    /// Allocate a decoder id for `codec_type` without attaching data.
    pub fn sceAtracGetAtracID(codec_type: u32) -> i32;
    /// Parse a RIFF/AT3 header and allocate a decoder id for it.
    pub fn sceAtracSetDataAndGetID(buf: *mut c_void, buf_size: SceSize) -> i32;
    /// Decode one frame. `samples_buf` receives interleaved 16-bit stereo.
    pub fn sceAtracDecodeData(
        atrac_id: i32,
        samples_buf: *mut u16,
        num_samples: *mut i32,
        is_last_frame: *mut i32,
        remain_frame: *mut i32,
    ) -> i32;
    pub fn sceAtracGetRemainFrame(atrac_id: i32, remain_frame: *mut i32) -> i32;
    pub fn sceAtracGetStreamDataInfo(
        atrac_id: i32,
        write_ptr: *mut *mut u8,
        writable_bytes: *mut u32,
        read_offset: *mut u32,
    ) -> i32;
    pub fn sceAtracAddStreamData(atrac_id: i32, bytes_to_add: u32) -> i32;
    pub fn sceAtracGetBitrate(atrac_id: i32, out_bitrate: *mut i32) -> i32;
    /// -1 loops forever.
    pub fn sceAtracSetLoopNum(atrac_id: i32, num_loops: i32) -> i32;
    pub fn sceAtracReleaseAtracID(atrac_id: i32) -> i32;
    pub fn sceAtracGetNextSample(atrac_id: i32, num_samples: *mut i32) -> i32;
    pub fn sceAtracGetMaxSample(atrac_id: i32, max_samples: *mut i32) -> i32;
    pub fn sceAtracGetBufferInfoForReseting(
        atrac_id: i32,
        sample: u32,
        buffer_info: *mut SceBufferInfo,
    ) -> i32;
    pub fn sceAtracGetChannel(atrac_id: i32, channel: *mut u32) -> i32;
    pub fn sceAtracGetInternalErrorInfo(atrac_id: i32, result: *mut i32) -> i32;
    pub fn sceAtracGetLoopStatus(atrac_id: i32, loop_num: *mut i32, loop_status: *mut u32) -> i32;
    pub fn sceAtracGetNextDecodePosition(atrac_id: i32, sample_position: *mut u32) -> i32;
    pub fn sceAtracGetSecondBufferInfo(
        atrac_id: i32,
        position: *mut u32,
        data_byte: *mut u32,
    ) -> i32;
    pub fn sceAtracGetSoundSample(
        atrac_id: i32,
        end_sample: *mut i32,
        loop_start_sample: *mut i32,
        loop_end_sample: *mut i32,
    ) -> i32;
    pub fn sceAtracResetPlayPosition(
        atrac_id: i32,
        sample: u32,
        write_byte_first_buf: u32,
        write_byte_second_buf: u32,
    ) -> i32;
    pub fn sceAtracSetData(atrac_id: i32, buffer_addr: *mut u8, buffer_byte: u32) -> i32;
    pub fn sceAtracSetHalfwayBuffer(
        atrac_id: i32,
        buffer_addr: *mut u8,
        read_byte: u32,
        buffer_byte: u32,
    ) -> i32;
    pub fn sceAtracSetHalfwayBufferAndGetID(
        buffer_addr: *mut u8,
        read_byte: u32,
        buffer_byte: u32,
    ) -> i32;
    pub fn sceAtracSetSecondBuffer(
        atrac_id: i32,
        second_buff_addr: *mut u8,
        second_buff_byte: u32,
    ) -> i32;
}
