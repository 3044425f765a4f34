// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "pspwlan"))]
extern "C" {
    pub fn sceWlanDevIsPowerOn() -> i32;
    /// 1 when the WLAN switch is on.
    pub fn sceWlanGetSwitchState() -> i32;
    /// Writes 6 bytes but the firmware asks for 8, so pass an 8-byte buffer.
    pub fn sceWlanGetEtherAddr(ether_addr: *mut u8) -> i32;
    pub fn sceWlanDevAttach() -> i32;
    pub fn sceWlanDevDetach() -> i32;
}
