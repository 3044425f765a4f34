// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(not(feature = "kernel"))]
use core::ffi::c_void;

#[cfg(not(feature = "kernel"))]
use crate::types::SceSize;

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "pspdmac"))]
extern "C" {
    /// Copy through the DMA controller, waiting for it to become free.
    pub fn sceDmacMemcpy(dst: *mut c_void, src: *const c_void, size: SceSize) -> i32;
    /// Like [`sceDmacMemcpy`] but fails instead of waiting when the controller is busy.
    pub fn sceDmacTryMemcpy(dst: *mut c_void, src: *const c_void, size: SceSize) -> i32;
}
