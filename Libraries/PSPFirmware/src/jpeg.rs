// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(not(feature = "kernel"))]
use crate::types::SceSize;

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "pspjpeg"))]
extern "C" {
    pub fn sceJpegInitMJpeg() -> i32;
    pub fn sceJpegFinishMJpeg() -> i32;
    /// Create the decoder for images up to `width` x `height`.
    pub fn sceJpegCreateMJpeg(width: i32, height: i32) -> i32;
    pub fn sceJpegDeleteMJpeg() -> i32;
    /// Decode into a 32-bit RGBA buffer. Returns `(width << 16) | height`.
    pub fn sceJpegDecodeMJpeg(jpeg_buf: *mut u8, size: SceSize, rgba: *mut u8, unk: u32) -> i32;
    pub fn sceJpegGetOutputInfo(
        jpeg_buf: *mut u8,
        size: SceSize,
        color_info: *mut i32,
        unk: i32,
    ) -> i32;
    pub fn sceJpegDecodeMJpegYCbCr(
        jpeg_buf: *mut u8,
        size: SceSize,
        ycbcr_buf: *mut u8,
        ycbcr_size: SceSize,
        unk: u32,
    ) -> i32;
    /// Convert a YCbCr image into RGBA.
    pub fn sceJpegCsc(
        rgba_buf: *mut u8,
        ycbcr_buf: *mut u8,
        width_height: i32,
        buf_width: i32,
        colour_info: i32,
    ) -> i32;
}
