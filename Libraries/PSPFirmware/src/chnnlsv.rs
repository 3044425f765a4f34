// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Savedata hashing and encryption.

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceSdContext1 {
    pub mode: i32,
    pub data: [u8; 16],
    pub key: [u8; 16],
    pub size: u32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceSdContext2 {
    pub mode: u32,
    pub unk4: u32,
    pub data: [u8; 16],
}

pub type pspChnnlsvContext1 = SceSdContext1;
pub type pspChnnlsvContext2 = SceSdContext2;

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspchnnlsv"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspchnnlsv_driver"))]
extern "C" {
    pub fn sceSdSetIndex(ctx: *mut SceSdContext1, mode: i32) -> i32;
    pub fn sceSdRemoveValue(ctx: *mut SceSdContext1, data: *mut u8, len: i32) -> i32;
    /// Finish the hash. `crypt_key` may be null.
    pub fn sceSdGetLastIndex(ctx: *mut SceSdContext1, hash: *mut u8, crypt_key: *mut u8) -> i32;
    pub fn sceSdCreateList(
        ctx: *mut SceSdContext2,
        mode: i32,
        encrypt_mode: i32,
        data: *mut u8,
        priv_key: *mut u8,
    ) -> i32;
    pub fn sceSdSetMember(ctx: *mut SceSdContext2, data: *mut u8, size: i32) -> i32;
    pub fn sceSdCleanList(ctx: *mut SceSdContext2) -> i32;
}

pub use self::{
    sceSdCleanList as sceChnnlsv_21BE78B4,
    sceSdCreateList as sceChnnlsv_ABFDFC8B,
    sceSdGetLastIndex as sceChnnlsv_C4C494F8,
    sceSdRemoveValue as sceChnnlsv_F21A1FCA,
    sceSdSetIndex as sceChnnlsv_E7833020,
    sceSdSetMember as sceChnnlsv_850A7FA1,
};
