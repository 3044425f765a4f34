// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::{c_char, c_void};

use bitflags::bitflags;

pub const PSP_USBBUS_DRIVERNAME: &str = "USBBusDriver";

bitflags! {
    /// Bits returned by `sceUsbGetState`.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SceUsbStatus: u32 {
        const ACTIVATED = 0x200;
        const CABLE_CONNECTED = 0x020;
        const CONNECTION_ESTABLISHED = 0x002;
    }
}

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspusb"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspusb_driver"))]
extern "C" {
    /// Start a USB driver. The driver's module must already be loaded.
    pub fn sceUsbStart(driver_name: *const c_char, size: i32, args: *mut c_void) -> i32;
    pub fn sceUsbStop(driver_name: *const c_char, size: i32, args: *mut c_void) -> i32;
    /// Activate a started driver under the given USB product id.
    pub fn sceUsbActivate(pid: u32) -> i32;
    pub fn sceUsbDeactivate(pid: u32) -> i32;
    /// Current [`SceUsbStatus`] bits.
    pub fn sceUsbGetState() -> i32;
    pub fn sceUsbGetDrvState(driver_name: *const c_char) -> i32;
}
