// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::{c_char, c_void};

use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::pspUtilityDialogCommon;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum pspUtilityHtmlViewerDisconnectModes {
    Enable = 0,
    Disable,
    Confirm,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum pspUtilityHtmlViewerInterfaceModes {
    Full = 0,
    Limited,
    None,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum pspUtilityHtmlViewerCookieModes {
    Disabled = 0,
    Enabled,
    Confirm,
    Default,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum pspUtilityHtmlViewerTextSizes {
    Large = 0,
    Normal,
    Small,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum pspUtilityHtmlViewerDisplayModes {
    Normal = 0,
    Fit,
    SmartFit,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum pspUtilityHtmlViewerConnectModes {
    Last = 0,
    ManualOnce,
    ManualAll,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct pspUtilityHtmlViewerOptions: u32 {
        const OPEN_SCE_START_PAGE = 0x000001;
        const DISABLE_STARTUP_LIMITS = 0x000002;
        const DISABLE_EXIT_DIALOG = 0x000004;
        const DISABLE_CURSOR = 0x000008;
        const DISABLE_DOWNLOAD_COMPLETE_DIALOG = 0x000010;
        const DISABLE_DOWNLOAD_START_DIALOG = 0x000020;
        const DISABLE_DOWNLOAD_DESTINATION_DIALOG = 0x000040;
        const LOCK_DOWNLOAD_DESTINATION_DIALOG = 0x000080;
        const DISABLE_TAB_DISPLAY = 0x000100;
        const ENABLE_ANALOG_HOLD = 0x000200;
        const ENABLE_FLASH = 0x000400;
        const DISABLE_LRTRIGGER = 0x000800;
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct pspUtilityHtmlViewerParam {
    pub base: pspUtilityDialogCommon,
    /// Memory pool handed to the browser.
    pub memaddr: *mut c_void,
    pub memsize: u32,
    pub unknown1: i32,
    pub unknown2: i32,
    pub initialurl: *mut c_char,
    pub numtabs: u32,
    /// A [`pspUtilityHtmlViewerInterfaceModes`] value.
    pub interfacemode: u32,
    /// [`pspUtilityHtmlViewerOptions`] bits.
    pub options: u32,
    pub dldirname: *mut c_char,
    pub dlfilename: *mut c_char,
    pub uldirname: *mut c_char,
    pub ulfilename: *mut c_char,
    pub cookiemode: u32,
    pub unknown3: u32,
    pub homeurl: *mut c_char,
    pub textsize: u32,
    pub displaymode: u32,
    pub connectmode: u32,
    pub disconnectmode: u32,
    /// Peak memory the browser used.
    pub memused: u32,
    pub unknown4: [i32; 10],
}

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "psputility"))]
extern "C" {
    pub fn sceUtilityHtmlViewerInitStart(params: *mut pspUtilityHtmlViewerParam) -> i32;
    pub fn sceUtilityHtmlViewerShutdownStart() -> i32;
    /// Refresh the dialog. Pass 1 for `n`.
    pub fn sceUtilityHtmlViewerUpdate(n: i32) -> i32;
    pub fn sceUtilityHtmlViewerGetStatus() -> i32;
}
