// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(feature = "kernel")]
use core::ffi::c_void;

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspexceptionmanager_kernel"))]
extern "C" {
    pub fn sceKernelRegisterDefaultExceptionHandler(func: *mut c_void) -> i32;
    pub fn sceKernelRegisterExceptionHandler(exno: i32, func: *mut c_void) -> i32;
    /// Register a handler for exception `exno` at the given priority.
    pub fn sceKernelRegisterPriorityExceptionHandler(
        exno: i32,
        priority: i32,
        func: *mut c_void,
    ) -> i32;
}
