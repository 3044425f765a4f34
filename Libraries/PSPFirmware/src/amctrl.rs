// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! BB MAC and cipher primitives used for DRM-protected content.

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceMacKey {
    /// A [`SceMacKeyType`] value.
    pub r#type: i32,
    pub key: [u8; 16],
    pub pad: [u8; 16],
    pub pad_size: i32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceCipherKey {
    /// A [`SceCipherKeyType`] value.
    pub r#type: u32,
    pub seed: u32,
    pub key: [u8; 16],
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceMacKeyType {
    Unk0 = 0,
    Unk1 = 1,
    FuseId = 2,
    Fixed = 3,
    Unk6 = 6,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceCipherKeyType {
    Fixed = 1,
    FuseId = 2,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceCipherKeyMode {
    Encrypt = 1,
    Decrypt = 2,
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspamctrl_driver"))]
extern "C" {
    pub fn sceDrmBBMacInit(mac_key: *mut SceMacKey, r#type: i32) -> i32;
    pub fn sceDrmBBMacUpdate(mac_key: *mut SceMacKey, buf: *mut u8, size: i32) -> i32;
    pub fn sceAmctrl_driver_9227EA79(mac_key: *mut SceMacKey, buf: *mut u8, size: i32) -> i32;
    pub fn sceDrmBBMacFinal(mac_key: *mut SceMacKey, buf: *mut u8, version_key: *mut u8) -> i32;
    pub fn sceDrmBBMacFinal2(mac_key: *mut SceMacKey, buf: *mut u8, version_key: *mut u8) -> i32;
    pub fn sceDrmBBCipherInit(
        cipher_key: *mut SceCipherKey,
        r#type: i32,
        mode: i32,
        header_key: *mut u8,
        version_key: *mut u8,
        seed: i32,
    ) -> i32;
    pub fn sceDrmBBCipherUpdate(cipher_key: *mut SceCipherKey, buf: *mut u8, size: i32) -> i32;
    pub fn sceAmctrl_driver_E04ADD4C(cipher_key: *mut SceCipherKey, buf: *mut u8, size: i32) -> i32;
    pub fn sceDrmBBCipherFinal(cipher_key: *mut SceCipherKey) -> i32;
}
