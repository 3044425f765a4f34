// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceOpenPSID {
    pub data: [u8; 16],
}

pub type PspOpenPSID = SceOpenPSID;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceProductCode {
    pub unk: [u8; 2],
}

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspopenpsid"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspopenpsid_driver"))]
extern "C" {
    pub fn sceOpenPSIDGetOpenPSID(openpsid: *mut SceOpenPSID) -> i32;
}

#[cfg(not(feature = "kernel"))]
#[cfg_attr(all(target_os = "psp", not(feature = "adrenaline")), link(name = "pspopenpsid"))]
#[cfg_attr(all(target_os = "psp", feature = "adrenaline"), link(name = "pspopenpsid_user"))]
extern "C" {
    pub fn sceOpenPSIDGetProductCode(prod_code: *mut SceProductCode) -> i32;
}
