// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspsysreg_driver"))]
extern "C" {
    pub fn sceSysregMeResetEnable() -> i32;
    pub fn sceSysregMeResetDisable() -> i32;
    pub fn sceSysregVmeResetEnable() -> i32;
    pub fn sceSysregVmeResetDisable() -> i32;
    pub fn sceSysregMeBusClockEnable() -> i32;
    pub fn sceSysregMeBusClockDisable() -> i32;
    pub fn sceSysregGetTachyonVersion() -> i32;
    pub fn sceSysregKirkBusClockEnable() -> i32;
    pub fn sceSysregAtaBusClockEnable() -> i32;
}
