// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::c_void;

/// DMA linked-list item for `sceMpegBasePESpacketCopy`.
#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct SceMpegLLI {
    pub src: *mut c_void,
    pub dst: *mut c_void,
    pub next: *mut c_void,
    pub size: u32,
}

#[repr(C, align(64))]
#[derive(Debug, Clone, Copy)]
pub struct SceMpegYCrCbBuffer {
    pub frame_buf_height16: i32,
    pub frame_buf_width16: i32,
    pub unk1: i32,
    pub unk2: i32,
    pub y_buf: *mut c_void,
    pub y_buf2: *mut c_void,
    pub cr_buf: *mut c_void,
    pub cb_buf: *mut c_void,
    pub cr_buf2: *mut c_void,
    pub cb_buf2: *mut c_void,
    pub frame_height: i32,
    pub frame_width: i32,
    pub frame_buf_width: i32,
    pub unk3: [i32; 11],
}

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspmpegbase"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspmpegbase_driver"))]
extern "C" {
    pub fn sceMpegBaseYCrCbCopyVme(yuv_buffer: *mut c_void, buffer: *mut i32, r#type: i32) -> i32;
    pub fn sceMpegBaseCscInit(width: i32) -> i32;
    /// Convert a YCrCb frame into one or two RGB buffers on the VME.
    pub fn sceMpegBaseCscVme(
        rgb_buffer: *mut c_void,
        rgb_buffer2: *mut c_void,
        width: u32,
        ycrcb_buffer: *mut SceMpegYCrCbBuffer,
    ) -> i32;
    pub fn sceMpegBasePESpacketCopy(lli: *mut SceMpegLLI) -> i32;
}
