// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::c_void;

use crate::types::{clock_t, time_t, timezone};

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceKernelTimeval {
    pub tv_sec: u32,
    pub tv_usec: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelUtilsMt19937Context {
    pub count: u32,
    pub state: [u32; 624],
}

impl Default for SceKernelUtilsMt19937Context {
    fn default() -> Self {
        Self {
            count: 0,
            state: [0; 624],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceKernelUtilsMd5Context {
    pub h: [u32; 4],
    pub pad: u32,
    pub us_remains: u16,
    pub us_computed: u16,
    pub ull_total_len: u64,
    pub buf: [u8; 64],
}

impl Default for SceKernelUtilsMd5Context {
    fn default() -> Self {
        Self {
            h: [0; 4],
            pad: 0,
            us_remains: 0,
            us_computed: 0,
            ull_total_len: 0,
            buf: [0; 64],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceKernelUtilsSha1Context {
    pub h: [u32; 5],
    pub us_remains: u16,
    pub us_computed: u16,
    pub ull_total_len: u64,
    pub buf: [u8; 64],
}

impl Default for SceKernelUtilsSha1Context {
    fn default() -> Self {
        Self {
            h: [0; 5],
            us_remains: 0,
            us_computed: 0,
            ull_total_len: 0,
            buf: [0; 64],
        }
    }
}

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "psputils_user"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "psputils_kernel"))]
extern "C" {
    pub fn sceKernelLibcTime(t: *mut time_t) -> time_t;
    pub fn sceKernelLibcClock() -> clock_t;
    pub fn sceKernelLibcGettimeofday(tp: *mut SceKernelTimeval, tzp: *mut timezone) -> i32;
    pub fn sceKernelDcacheWritebackAll();
    pub fn sceKernelDcacheWritebackInvalidateAll();
    pub fn sceKernelDcacheWritebackRange(p: *const c_void, size: u32);
    pub fn sceKernelDcacheWritebackInvalidateRange(p: *const c_void, size: u32);
    pub fn sceKernelDcacheInvalidateRange(p: *const c_void, size: u32);
    pub fn sceKernelIcacheInvalidateAll();
    pub fn sceKernelIcacheInvalidateRange(p: *const c_void, size: u32);
    pub fn sceKernelUtilsMt19937Init(ctx: *mut SceKernelUtilsMt19937Context, seed: u32) -> i32;
    pub fn sceKernelUtilsMt19937UInt(ctx: *mut SceKernelUtilsMt19937Context) -> u32;
    /// One-shot MD5. `digest` must hold 16 bytes.
    pub fn sceKernelUtilsMd5Digest(data: *mut u8, size: u32, digest: *mut u8) -> i32;
    pub fn sceKernelUtilsMd5BlockInit(ctx: *mut SceKernelUtilsMd5Context) -> i32;
    pub fn sceKernelUtilsMd5BlockUpdate(
        ctx: *mut SceKernelUtilsMd5Context,
        data: *mut u8,
        size: u32,
    ) -> i32;
    pub fn sceKernelUtilsMd5BlockResult(ctx: *mut SceKernelUtilsMd5Context, digest: *mut u8) -> i32;
    /// One-shot SHA-1. `digest` must hold 20 bytes.
    pub fn sceKernelUtilsSha1Digest(data: *mut u8, size: u32, digest: *mut u8) -> i32;
    pub fn sceKernelUtilsSha1BlockInit(ctx: *mut SceKernelUtilsSha1Context) -> i32;
    pub fn sceKernelUtilsSha1BlockUpdate(
        ctx: *mut SceKernelUtilsSha1Context,
        data: *mut u8,
        size: u32,
    ) -> i32;
    pub fn sceKernelUtilsSha1BlockResult(
        ctx: *mut SceKernelUtilsSha1Context,
        digest: *mut u8,
    ) -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "psputils_kernel"))]
extern "C" {
    pub fn sceKernelGzipDecompress(
        dest: *mut u8,
        dest_size: u32,
        src: *const u8,
        unknown: *mut c_void,
    ) -> i32;
    pub fn sceKernelLzrcDecode(
        dest: *mut u8,
        dest_size: u32,
        src: *const u8,
        unknown: *mut c_void,
    ) -> i32;
    pub fn sceKernelDeflateDecompress(
        dest: *mut u8,
        dest_size: u32,
        src: *const u8,
        unknown: *mut c_void,
    ) -> i32;
    pub fn sceKernelDcacheInvalidateAll();
    pub fn sceKernelDcacheProbe(addr: *mut c_void) -> i32;
    pub fn sceKernelIcacheProbe(addr: *const c_void) -> i32;
}
