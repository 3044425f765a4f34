// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(feature = "kernel")]
use core::ffi::c_char;

#[cfg(feature = "kernel")]
use crate::types::SceMode;
use crate::types::SceUID;

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspstdio_user"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspstdio_kernel"))]
extern "C" {
    pub fn sceKernelStdin() -> SceUID;
    pub fn sceKernelStdout() -> SceUID;
    pub fn sceKernelStderr() -> SceUID;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspstdio_kernel"))]
extern "C" {
    pub fn sceKernelStdoutReopen(file: *const c_char, flags: i32, mode: SceMode) -> i32;
    pub fn sceKernelStderrReopen(file: *const c_char, flags: i32, mode: SceMode) -> i32;
    pub fn fdprintf(fd: i32, format: *const c_char, ...) -> i32;
}
