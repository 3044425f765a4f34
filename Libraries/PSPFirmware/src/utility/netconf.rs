// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::pspUtilityDialogCommon;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum pspUtilityNetconfActions {
    ConnectAp,
    DisplayStatus,
    ConnectAdhoc,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct pspUtilityNetconfAdhoc {
    pub name: [u8; 8],
    pub timeout: u32,
}

named_objects!(pspUtilityNetconfAdhoc);

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct pspUtilityNetconfData {
    pub base: pspUtilityDialogCommon,
    /// A [`pspUtilityNetconfActions`] value.
    pub action: i32,
    /// Ad hoc connection parameters.
    pub adhocparam: *mut pspUtilityNetconfAdhoc,
    /// 1 allows hotspot connections.
    pub hotspot: i32,
    /// Set to 1 once connected to a hotspot.
    pub hotspot_connected: i32,
    /// 1 allows connections to wifi service providers.
    pub wifisp: i32,
}

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "psputility"))]
extern "C" {
    pub fn sceUtilityNetconfInitStart(data: *mut pspUtilityNetconfData) -> i32;
    pub fn sceUtilityNetconfShutdownStart() -> i32;
    pub fn sceUtilityNetconfUpdate(unknown: i32) -> i32;
    pub fn sceUtilityNetconfGetStatus() -> i32;
}
