// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(feature = "kernel")]
use core::ffi::c_char;
use core::ffi::c_void;

/// Receives each formatted character in turn.
pub type prnt_callback = Option<unsafe extern "C" fn(ctx: *mut c_void, ch: i32)>;

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspsysclib_kernel"))]
extern "C" {
    /// Format `fmt` with the C `va_list` at `args`, feeding the output to `cb`.
    pub fn prnt(cb: prnt_callback, ctx: *mut c_void, fmt: *const c_char, args: *mut c_void);
}
