// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! System registry access.

use core::ffi::{c_char, c_void};

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::SceSize;

pub const SYSTEM_REGISTRY: &str = "/system";
/// Longest key name the registry stores.
pub const REG_KEYNAME_SIZE: usize = 27;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum RegKeyTypes {
    Dir = 1,
    Int = 2,
    Str = 3,
    Bin = 4,
}

pub type REGHANDLE = u32;
pub type RegisterHandle = u32;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceRegParam {
    pub regtype: u32,
    pub name: [u8; 256],
    pub namelen: u32,
    pub unk2: u32,
    pub unk3: u32,
}

pub type RegParam = SceRegParam;

impl SceRegParam {
    /// Parameters for opening the registry rooted at `name`, e.g. [`SYSTEM_REGISTRY`].
    ///
    /// Names longer than 255 bytes are truncated so the buffer stays NUL-terminated.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut param = Self {
            regtype: 1,
            name: [0; 256],
            namelen: 0,
            unk2: 1,
            unk3: 1,
        };
        let len = name.len().min(param.name.len() - 1);
        param.name[..len].copy_from_slice(&name.as_bytes()[..len]);
        param.namelen = len as u32;
        param
    }
}

named_objects!(SceRegParam);

#[cfg_attr(
    all(target_os = "psp", not(feature = "kernel"), not(feature = "adrenaline")),
    link(name = "pspreg")
)]
#[cfg_attr(
    all(target_os = "psp", not(feature = "kernel"), feature = "adrenaline"),
    link(name = "pspreg_user")
)]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspreg_driver"))]
extern "C" {
    /// Open the registry. `mode` should be 1.
    pub fn sceRegOpenRegistry(
        reg_param: *mut SceRegParam,
        mode: i32,
        handle: *mut RegisterHandle,
    ) -> i32;
    pub fn sceRegFlushRegistry(handle: RegisterHandle) -> i32;
    pub fn sceRegCloseRegistry(handle: RegisterHandle) -> i32;
    /// Open a category such as `/CONFIG/SYSTEM`.
    pub fn sceRegOpenCategory(
        handle: RegisterHandle,
        name: *const c_char,
        mode: i32,
        dir_handle: *mut RegisterHandle,
    ) -> i32;
    pub fn sceRegRemoveCategory(dir_handle: RegisterHandle, name: *const c_char) -> i32;
    pub fn sceRegCloseCategory(dir_handle: RegisterHandle) -> i32;
    pub fn sceRegFlushCategory(dir_handle: RegisterHandle) -> i32;
    pub fn sceRegGetKeyInfo(
        dir_handle: RegisterHandle,
        name: *const c_char,
        key_handle: *mut RegisterHandle,
        r#type: *mut u32,
        size: *mut SceSize,
    ) -> i32;
    pub fn sceRegGetKeyInfoByName(
        dir_handle: RegisterHandle,
        name: *const c_char,
        r#type: *mut u32,
        size: *mut SceSize,
    ) -> i32;
    pub fn sceRegGetKeyValue(
        dir_handle: RegisterHandle,
        key_handle: RegisterHandle,
        buf: *mut c_void,
        size: SceSize,
    ) -> i32;
    pub fn sceRegGetKeyValueByName(
        dir_handle: RegisterHandle,
        name: *const c_char,
        buf: *mut c_void,
        size: SceSize,
    ) -> i32;
    pub fn sceRegSetKeyValue(
        dir_handle: RegisterHandle,
        name: *const c_char,
        buf: *const c_void,
        size: SceSize,
    ) -> i32;
    pub fn sceRegGetKeysNum(dir_handle: RegisterHandle, num: *mut i32) -> i32;
    /// Fill `buf` with `num` key names of [`REG_KEYNAME_SIZE`] bytes each.
    pub fn sceRegGetKeys(hd: RegisterHandle, buf: *mut c_char, num: i32) -> i32;
    pub fn sceRegCreateKey(
        dir_handle: RegisterHandle,
        name: *const c_char,
        r#type: i32,
        size: SceSize,
    ) -> i32;
    pub fn sceRegRemoveRegistry(reg: *mut SceRegParam) -> i32;
}
