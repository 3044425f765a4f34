// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Handler chain notified of system events such as suspend and resume.

use core::ffi::{c_char, c_void};

pub type PspSysEventHandlerFunc =
    Option<unsafe extern "C" fn(ev_id: i32, ev_name: *mut c_char, param: *mut c_void, result: *mut i32) -> i32>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PspSysEventHandler {
    pub size: i32,
    pub name: *mut c_char,
    pub type_mask: i32,
    pub handler: PspSysEventHandlerFunc,
    pub r28: i32,
    pub busy: i32,
    pub next: *mut PspSysEventHandler,
    pub reserved: [i32; 9],
}

impl Default for PspSysEventHandler {
    fn default() -> Self {
        Self {
            size: 0,
            name: core::ptr::null_mut(),
            type_mask: 0,
            handler: None,
            r28: 0,
            busy: 0,
            next: core::ptr::null_mut(),
            reserved: [0; 9],
        }
    }
}

sized_params!(PspSysEventHandler);

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspsysevent_kernel"))]
extern "C" {
    /// Deliver an event to every handler whose `type_mask` matches.
    pub fn sceKernelSysEventDispatch(
        ev_type_mask: i32,
        ev_id: i32,
        ev_name: *mut c_char,
        param: *mut c_void,
        result: *mut i32,
        break_nonzero: i32,
        break_handler: *mut PspSysEventHandler,
    ) -> i32;
    /// Head of the registered handler list.
    pub fn sceKernelReferSysEventHandler() -> *mut PspSysEventHandler;
    pub fn sceKernelIsRegisterSysEventHandler(handler: *mut PspSysEventHandler) -> i32;
    pub fn sceKernelRegisterSysEventHandler(handler: *mut PspSysEventHandler) -> i32;
    pub fn sceKernelUnregisterSysEventHandler(handler: *mut PspSysEventHandler) -> i32;
}
