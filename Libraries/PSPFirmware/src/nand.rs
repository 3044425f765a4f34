// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Raw access to the internal NAND flash.

#[cfg(feature = "kernel")]
use core::ffi::c_void;

#[cfg(feature = "kernel")]
use crate::types::SceSize;

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspnand_driver"))]
extern "C" {
    pub fn sceNandSetWriteProtect(protect_flag: i32) -> i32;
    pub fn sceNandLock(write_flag: i32) -> i32;
    pub fn sceNandUnlock();
    pub fn sceNandReadStatus() -> i32;
    pub fn sceNandReset(flag: i32) -> i32;
    pub fn sceNandReadId(buf: *mut c_void, size: SceSize) -> i32;
    /// Read `count` pages starting at physical page `ppn`. Either buffer may be null.
    pub fn sceNandReadPages(ppn: u32, buf: *mut c_void, buf2: *mut c_void, count: u32) -> i32;
    pub fn sceNandReadPagesRawAll(
        ppn: u32,
        buf: *mut c_void,
        spare: *mut c_void,
        count: u32,
    ) -> i32;
    pub fn sceNandEraseBlock(ppn: u32) -> i32;
    pub fn sceNandWriteAccess(
        ppn: u32,
        buf: *mut c_void,
        spare: *mut c_void,
        unk: i32,
        unk2: u32,
    ) -> i32;
    pub fn sceNandReadExtraOnly(ppn: u32, buf: *mut c_void, unk: i32) -> i32;
    pub fn sceNandGetPageSize() -> i32;
    pub fn sceNandGetPagesPerBlock() -> i32;
    pub fn sceNandGetTotalBlocks() -> i32;
    pub fn sceNandWriteBlockWithVerify(ppn: u32, buf: *mut c_void, spare: *mut c_void) -> i32;
    pub fn sceNandReadBlockWithRetry(ppn: u32, buf: *mut c_void, buf2: *mut c_void) -> i32;
    pub fn sceNandEraseBlockWithRetry(ppn: u32) -> i32;
    pub fn sceNandIsBadBlock(ppn: u32) -> i32;
}
