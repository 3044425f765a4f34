// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! PSMF/MPEG demuxer and AVC/ATRAC decoders (`libmpeg`).

use core::ffi::c_void;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::ScePVoid;

/// Opaque decoder handle.
pub type SceMpeg = ScePVoid;
pub type SceMpegStream = c_void;

/// Refills the ringbuffer. Returns the number of packets written, `< 0` on error.
pub type sceMpegRingbufferCB =
    Option<unsafe extern "C" fn(data: *mut c_void, num_packets: i32, param: *mut c_void) -> i32>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceMpegRingbuffer {
    pub packets: i32,
    pub unk0: u32,
    pub unk1: u32,
    pub unk2: u32,
    pub unk3: u32,
    pub data: *mut c_void,
    pub callback: sceMpegRingbufferCB,
    pub cp_param: *mut c_void,
    pub unk4: u32,
    pub unk5: u32,
    pub mpeg_handler: SceMpeg,
}

/// Access unit: one elementary-stream frame with its timestamps.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceMpegAu {
    pub pts_msb: u32,
    pub pts: u32,
    pub dts_msb: u32,
    pub dts: u32,
    pub es_buffer: u32,
    pub au_size: u32,
}

impl SceMpegAu {
    /// 33-bit presentation timestamp.
    #[inline]
    #[must_use]
    pub const fn presentation_timestamp(&self) -> u64 {
        ((self.pts_msb as u64) << 32) | self.pts as u64
    }

    /// 33-bit decode timestamp.
    #[inline]
    #[must_use]
    pub const fn decode_timestamp(&self) -> u64 {
        ((self.dts_msb as u64) << 32) | self.dts as u64
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceMpegFormatKind {
    Default = -1,
    Format5650 = 0,
    Format5551 = 1,
    Format4444 = 2,
    Format8888 = 3,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceMpegAvcMode {
    /// -1 keeps the decoder default.
    pub unk0: i32,
    /// A [`SceMpegFormatKind`] value.
    pub pixel_format: i32,
}

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "pspmpeg"))]
extern "C" {
    pub fn sceMpegInit() -> i32;
    pub fn sceMpegFinish();
    /// Memory needed for a ringbuffer of `num_packets` 2048-byte packets.
    pub fn sceMpegRingbufferQueryMemSize(num_packets: u32) -> i32;
    pub fn sceMpegRingbufferConstruct(
        ringbuffer: *mut SceMpegRingbuffer,
        packets: u32,
        data: *mut c_void,
        data_size: u32,
        callback: sceMpegRingbufferCB,
        cb_param: *mut c_void,
    ) -> i32;
    pub fn sceMpegRingbufferDestruct(ringbuffer: *mut SceMpegRingbuffer);
    pub fn sceMpegRingbufferAvailableSize(ringbuffer: *mut SceMpegRingbuffer) -> i32;
    pub fn sceMpegRingbufferPut(
        ringbuffer: *mut SceMpegRingbuffer,
        num_packets: u32,
        available_packets: u32,
    ) -> i32;
    pub fn sceMpegQueryMemSize(unk: i32) -> i32;
    pub fn sceMpegCreate(
        mpeg: *mut SceMpeg,
        data: *mut c_void,
        data_size: u32,
        ringbuffer: *mut SceMpegRingbuffer,
        frame_width: u32,
        unk1: i32,
        unk2: i32,
    ) -> i32;
    pub fn sceMpegDelete(mpeg: *mut SceMpeg);
    pub fn sceMpegQueryStreamOffset(
        mpeg: *mut SceMpeg,
        buffer: *mut c_void,
        offset: *mut i32,
    ) -> i32;
    pub fn sceMpegQueryStreamSize(buffer: *mut c_void, size: *mut u32) -> i32;
    /// Register a stream. `stream_id` is 0 for AVC video and 1 for ATRAC audio.
    pub fn sceMpegRegistStream(mpeg: *mut SceMpeg, stream_id: i32, unk: i32) -> *mut SceMpegStream;
    pub fn sceMpegUnRegistStream(mpeg: SceMpeg, stream: *mut SceMpegStream);
    pub fn sceMpegFlushAllStream(mpeg: *mut SceMpeg) -> i32;
    pub fn sceMpegMallocAvcEsBuf(mpeg: *mut SceMpeg) -> *mut c_void;
    pub fn sceMpegFreeAvcEsBuf(mpeg: *mut SceMpeg, buf: *mut c_void);
    pub fn sceMpegQueryAtracEsSize(
        mpeg: *mut SceMpeg,
        es_size: *mut u32,
        out_size: *mut u32,
    ) -> i32;
    pub fn sceMpegInitAu(mpeg: *mut SceMpeg, es_buffer: *mut c_void, au: *mut SceMpegAu) -> i32;
    pub fn sceMpegGetAvcAu(
        mpeg: *mut SceMpeg,
        stream: *mut SceMpegStream,
        au: *mut SceMpegAu,
        unk: *mut i32,
    ) -> i32;
    pub fn sceMpegAvcDecodeMode(mpeg: *mut SceMpeg, mode: *mut SceMpegAvcMode) -> i32;
    pub fn sceMpegAvcDecode(
        mpeg: *mut SceMpeg,
        au: *mut SceMpegAu,
        frame_width: u32,
        buffer: *mut c_void,
        is_init: *mut u32,
    ) -> i32;
    pub fn sceMpegAvcDecodeStop(
        mpeg: *mut SceMpeg,
        frame_width: i32,
        buffer: ScePVoid,
        status: *mut i32,
    ) -> i32;
    pub fn sceMpegGetAtracAu(
        mpeg: *mut SceMpeg,
        stream: *mut SceMpegStream,
        au: *mut SceMpegAu,
        unk: *mut c_void,
    ) -> i32;
    pub fn sceMpegAtracDecode(
        mpeg: *mut SceMpeg,
        au: *mut SceMpegAu,
        buffer: *mut c_void,
        is_init: i32,
    ) -> i32;
}
