// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(feature = "kernel")]
use core::ffi::c_void;

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspidstorage_driver"))]
extern "C" {
    /// Read `len` bytes at `offset` within the leaf for `key`.
    pub fn sceIdStorageLookup(key: u16, offset: u32, buf: *mut c_void, len: u32) -> i32;
    /// Read a whole 512-byte leaf.
    pub fn sceIdStorageReadLeaf(key: u16, buf: *mut c_void) -> i32;
    pub fn sceIdStorageWriteLeaf(key: u16, buf: *mut c_void) -> i32;
    pub fn sceIdStorageIsReadOnly() -> i32;
    pub fn sceIdStorageFlush() -> i32;
    pub fn sceIdStorageCreateLeaf(leafid: u32) -> i32;
    pub fn sceIdStorageCreateAtomicLeaves(leaves: *mut u16, n: i32) -> i32;
    pub fn sceIdStorageFormat() -> i32;
    pub fn sceIdStorageUnformat() -> i32;
}
