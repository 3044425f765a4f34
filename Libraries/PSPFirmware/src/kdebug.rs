// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(feature = "kernel")]
use core::ffi::c_char;

/// Debug character sink. `args` is the first parameter of the registered putchar.
pub type PspDebugPutChar = Option<unsafe extern "C" fn(args: *mut u16, ch: u32)>;

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspkdebug_kernel"))]
extern "C" {
    pub fn sceKernelRegisterDebugPutchar(func: PspDebugPutChar);
    pub fn sceKernelGetDebugPutchar() -> PspDebugPutChar;
    /// Kernel printf. Output goes to the registered debug putchar.
    pub fn Kprintf(format: *const c_char, ...);
}
