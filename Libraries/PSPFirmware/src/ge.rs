// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::c_void;

use bitfield_struct::bitfield;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Saved GE register state.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PspGeContext {
    pub context: [u32; 512],
}

impl Default for PspGeContext {
    fn default() -> Self {
        Self { context: [0; 512] }
    }
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceGeStack {
    pub stack: [u32; 8],
}

pub type PspGeStack = SceGeStack;

pub type PspGeCallback = Option<unsafe extern "C" fn(id: i32, arg: *mut c_void)>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PspGeCallbackData {
    /// Invoked on a SIGNAL command.
    pub signal_func: PspGeCallback,
    pub signal_arg: *mut c_void,
    /// Invoked on a FINISH command.
    pub finish_func: PspGeCallback,
    pub finish_arg: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PspGeListArgs {
    pub size: u32,
    pub context: *mut PspGeContext,
    pub num_stacks: u32,
    pub stacks: *mut SceGeStack,
}

sized_params!(PspGeListArgs);

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PspGeBreakParam {
    pub buf: [u32; 4],
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum PspGeMatrixTypes {
    Bone0 = 0,
    Bone1,
    Bone2,
    Bone3,
    Bone4,
    Bone5,
    Bone6,
    Bone7,
    World,
    View,
    Projection,
    TexGen,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum PspGeListState {
    Done = 0,
    Queued,
    DrawingDone,
    StallReached,
    CancelDone,
}

/// A raw display-list word as returned by `sceGeGetCmd`.
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct GeCommand {
    #[bits(24)]
    pub argument: u32,
    pub command: u8,
}

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspge_user"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspge_driver"))]
extern "C" {
    /// Size of VRAM in bytes.
    pub fn sceGeEdramGetSize() -> u32;
    pub fn sceGeEdramSetSize(size: i32) -> i32;
    pub fn sceGeEdramGetAddr() -> *mut c_void;
    /// Current value of a GE command register, see [`GeCommand`].
    pub fn sceGeGetCmd(cmd: i32) -> u32;
    /// Read a matrix of the given [`PspGeMatrixTypes`] kind.
    pub fn sceGeGetMtx(r#type: i32, matrix: *mut c_void) -> i32;
    pub fn sceGeGetStack(stack_id: i32, stack: *mut PspGeStack) -> i32;
    pub fn sceGeSaveContext(context: *mut PspGeContext) -> i32;
    pub fn sceGeRestoreContext(context: *const PspGeContext) -> i32;
    /// Enqueue a display list at the tail. Returns the queue id.
    pub fn sceGeListEnQueue(
        list: *const c_void,
        stall: *mut c_void,
        cb_id: i32,
        arg: *mut PspGeListArgs,
    ) -> i32;
    pub fn sceGeListEnQueueHead(
        list: *const c_void,
        stall: *mut c_void,
        cb_id: i32,
        arg: *mut PspGeListArgs,
    ) -> i32;
    pub fn sceGeListDeQueue(queue_id: i32) -> i32;
    pub fn sceGeListUpdateStallAddr(queue_id: i32, stall: *mut c_void) -> i32;
    /// Wait for a list. `sync_kind` 0 waits for completion, 1 peeks at the state.
    pub fn sceGeListSync(queue_id: i32, sync_kind: i32) -> i32;
    pub fn sceGeDrawSync(sync_kind: i32) -> i32;
    pub fn sceGeSetCallback(callback: *mut PspGeCallbackData) -> i32;
    pub fn sceGeUnsetCallback(cb_id: i32) -> i32;
    pub fn sceGeBreak(mode: i32, param: *mut PspGeBreakParam) -> i32;
    pub fn sceGeContinue() -> i32;
    pub fn sceGeEdramSetAddrTranslation(width: i32) -> i32;
}
