// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(feature = "kernel")]
use core::ffi::c_void;

#[cfg(feature = "kernel")]
use crate::types::SceSize;

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspsemaphore"))]
extern "C" {
    /// Run KIRK command `cmd` on `inbuf`.
    pub fn sceUtilsBufferCopy(inbuf: *mut u8, outbuf: *mut u8, cmd: i32) -> i32;
    pub fn sceUtilsBufferCopyByPolling(inbuf: *mut u8, outbuf: *mut u8, cmd: i32) -> i32;
    pub fn sceUtilsBufferCopyWithRange(
        inbuf: *mut c_void,
        insize: SceSize,
        outbuf: *mut c_void,
        outsize: i32,
        cmd: i32,
    ) -> i32;
    pub fn sceUtilsBufferCopyByPollingWithRange(
        inbuf: *mut c_void,
        insize: SceSize,
        outbuf: *mut c_void,
        outsize: i32,
        cmd: i32,
    ) -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspnwman_driver"))]
extern "C" {
    pub fn sceNwman_driver_9555D68D(buf: *mut c_void, bufsize: SceSize, ret_size: *mut i32) -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspmesgd_driver"))]
extern "C" {
    pub fn sceMesgd_driver_102DC8AF(buf: *mut c_void, bufsize: SceSize, ret_size: *mut i32) -> i32;
}
