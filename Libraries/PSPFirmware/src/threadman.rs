// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Thread manager: threads, semaphores, event flags, message boxes and pipes,
//! memory pools, alarms, callbacks and virtual timers.

use core::ffi::{c_char, c_void};

use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::{PspDebugProfilerRegs, SceInt64, SceKernelThreadEntry, SceSize, SceUID, SceUInt, SceUInt32};

/// 64-bit system clock split into two words.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceKernelSysClock {
    pub low: SceUInt32,
    pub hi: SceUInt32,
}

impl SceKernelSysClock {
    #[inline]
    #[must_use]
    pub const fn from_u64(v: u64) -> Self {
        Self {
            low: v as u32,
            hi: (v >> 32) as u32,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        ((self.hi as u64) << 32) | self.low as u64
    }
}

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PspThreadAttributes: u32 {
        /// Enable VFPU access for the thread.
        const VFPU = 0x0000_4000;
        /// Start the thread in user mode.
        const USER = 0x8000_0000;
        /// Thread is part of the USB/WLAN API.
        const USBWLAN = 0xA000_0000;
        /// Thread is part of the VSH API.
        const VSH = 0xC000_0000;
        /// Allow using scratchpad memory for a thread.
        const SCRATCH_SRAM = 0x0000_8000;
        /// Disables filling the stack with 0xFF on creation.
        const NO_FILLSTACK = 0x0010_0000;
        /// Clear the stack when the thread is deleted.
        const CLEAR_STACK = 0x0020_0000;
    }
}

pub const THREAD_ATTR_VFPU: PspThreadAttributes = PspThreadAttributes::VFPU;
pub const THREAD_ATTR_USER: PspThreadAttributes = PspThreadAttributes::USER;

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PspThreadStatus: u32 {
        const RUNNING = 1;
        const READY = 2;
        const WAITING = 4;
        const SUSPEND = 8;
        const STOPPED = 16;
        const KILLED = 32;
    }
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelThreadOptParam {
    pub size: SceSize,
    pub stack_mpid: SceUID,
}

/// Status block filled in by `sceKernelReferThreadStatus`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelThreadInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub attr: SceUInt,
    pub status: i32,
    pub entry: SceKernelThreadEntry,
    pub stack: *mut c_void,
    pub stack_size: i32,
    pub gp_reg: *mut c_void,
    pub init_priority: i32,
    pub current_priority: i32,
    pub wait_type: i32,
    pub wait_id: SceUID,
    pub wakeup_count: i32,
    pub exit_status: i32,
    pub run_clocks: SceKernelSysClock,
    pub intr_preempt_count: SceUInt,
    pub thread_preempt_count: SceUInt,
    pub release_count: SceUInt,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelThreadRunStatus {
    pub size: SceSize,
    pub status: i32,
    pub current_priority: i32,
    pub wait_type: i32,
    pub wait_id: i32,
    pub wakeup_count: i32,
    pub run_clocks: SceKernelSysClock,
    pub intr_preempt_count: SceUInt,
    pub thread_preempt_count: SceUInt,
    pub release_count: SceUInt,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelSemaOptParam {
    pub size: SceSize,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelSemaInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub attr: SceUInt,
    pub init_count: i32,
    pub current_count: i32,
    pub max_count: i32,
    pub num_wait_threads: i32,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PspLwMutexAttributes: u32 {
        /// Waiting threads queue in FIFO order. The empty set.
        const THFIFO = 0x0000;
        /// Waiting threads queue by priority.
        const THPRI = 0x0100;
        /// The owner may lock the mutex recursively.
        const RECURSIVE = 0x0200;
    }
}

/// Work area backing a lightweight mutex. Lives in user memory.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceLwMutexWorkarea {
    pub lock_level: i32,
    pub lock_thread: SceUID,
    pub attr: i32,
    pub num_wait_threads: i32,
    pub uid: SceUID,
    pub pad: [i32; 3],
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelEventFlagInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub attr: SceUInt,
    pub init_pattern: SceUInt,
    pub current_pattern: SceUInt,
    pub num_wait_threads: i32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelEventFlagOptParam {
    pub size: SceSize,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PspEventFlagAttributes: u32 {
        /// Only one thread may wait on the flag. The empty set.
        const WAITSINGLE = 0x000;
        /// Several threads may wait on the flag.
        const WAITMULTIPLE = 0x200;
    }
}

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PspEventFlagWaitTypes: u32 {
        /// Wait for every bit in the pattern. The empty set.
        const WAITAND = 0;
        /// Wait for any bit in the pattern.
        const WAITOR = 1;
        /// Clear the matched bits once the wait completes.
        const WAITCLEAR = 0x20;
    }
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelMbxOptParam {
    pub size: SceSize,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelMbxInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub attr: SceUInt,
    pub num_wait_threads: i32,
    pub num_messages: i32,
    pub first_message: *mut c_void,
}

/// Header every message posted to a message box has to start with.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelMsgPacket {
    pub next: *mut SceKernelMsgPacket,
    pub msg_priority: u8,
    pub dummy: [u8; 3],
}

pub type SceKernelAlarmHandler = Option<unsafe extern "C" fn(common: *mut c_void) -> SceUInt>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelAlarmInfo {
    pub size: SceSize,
    pub schedule: SceKernelSysClock,
    pub handler: SceKernelAlarmHandler,
    pub common: *mut c_void,
}

pub type SceKernelCallbackFunction =
    Option<unsafe extern "C" fn(arg1: i32, arg2: i32, arg: *mut c_void) -> i32>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelCallbackInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub thread_id: SceUID,
    pub callback: SceKernelCallbackFunction,
    pub common: *mut c_void,
    pub notify_count: i32,
    pub notify_arg: i32,
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceKernelIdListType {
    Thread = 1,
    Semaphore = 2,
    EventFlag = 3,
    Mbox = 4,
    Vpl = 5,
    Fpl = 6,
    Mpipe = 7,
    Callback = 8,
    ThreadEventHandler = 9,
    Alarm = 10,
    VTimer = 11,
    SleepThread = 64,
    DelayThread = 65,
    SuspendThread = 66,
    DormantThread = 67,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelSystemStatus {
    pub size: SceSize,
    pub status: SceUInt,
    pub idle_clocks: SceKernelSysClock,
    pub comes_out_of_idle_count: SceUInt,
    pub thread_switch_count: SceUInt,
    pub vfpu_switch_count: SceUInt,
}

/// Message pipe status.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelMppInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub attr: SceUInt,
    pub buf_size: i32,
    pub free_size: i32,
    pub num_send_wait_threads: i32,
    pub num_receive_wait_threads: i32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelVplOptParam {
    pub size: SceSize,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelVplInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub attr: SceUInt,
    pub pool_size: i32,
    pub free_size: i32,
    pub num_wait_threads: i32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelFplOptParam {
    pub size: SceSize,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelFplInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub attr: SceUInt,
    pub block_size: i32,
    pub num_blocks: i32,
    pub free_blocks: i32,
    pub num_wait_threads: i32,
}

pub type SceKernelVTimerHandler = Option<
    unsafe extern "C" fn(
        uid: SceUID,
        schedule: *mut SceKernelSysClock,
        current: *mut SceKernelSysClock,
        common: *mut c_void,
    ) -> SceUInt,
>;

pub type SceKernelVTimerHandlerWide =
    Option<unsafe extern "C" fn(uid: SceUID, schedule: SceInt64, current: SceInt64, common: *mut c_void) -> SceUInt>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelVTimerInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub active: i32,
    pub base: SceKernelSysClock,
    pub current: SceKernelSysClock,
    pub schedule: SceKernelSysClock,
    pub handler: SceKernelVTimerHandler,
    pub common: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceKernelVTimerOptParam {
    pub size: SceSize,
}

pub type SceKernelThreadEventHandler =
    Option<unsafe extern "C" fn(mask: i32, thid: SceUID, common: *mut c_void) -> i32>;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelThreadEventHandlerInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub thread_id: SceUID,
    pub mask: i32,
    pub handler: SceKernelThreadEventHandler,
    pub common: *mut c_void,
}

/// Thread selectors accepted by `sceKernelRegisterThreadEventHandler`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum ThreadEventIds {
    All = 0xFFFF_FFFF,
    Kern = 0xFFFF_FFF8,
    User = 0xFFFF_FFF0,
    Current = 0,
}

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ThreadEvents: u32 {
        const CREATE = 1;
        const START = 2;
        const EXIT = 4;
        const DELETE = 8;
    }
}

/// Saved register file of a thread.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceThreadContext {
    pub r#type: u32,
    pub gpr: [u32; 31],
    pub fpr: [u32; 32],
    pub fc31: u32,
    pub hi: u32,
    pub lo: u32,
    pub sr: u32,
    pub epc: u32,
    pub field_114: u32,
    pub field_118: u32,
}

/// Registers saved on syscall entry.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceSCContext {
    pub status: u32,
    pub epc: u32,
    pub sp: u32,
    pub ra: u32,
    pub k1: u32,
    pub unk: [u32; 3],
}

/// Extended status block filled in by `sceKernelReferThreadDebugStatus`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceKernelThreadKInfo {
    pub size: SceSize,
    pub name: [u8; 32],
    pub attr: SceUInt,
    pub status: i32,
    pub entry: SceKernelThreadEntry,
    pub stack: *mut c_void,
    pub stack_size: i32,
    pub kstack: *mut c_void,
    pub kstack_size: *mut c_void,
    pub gp_reg: *mut c_void,
    pub args: SceSize,
    pub argp: *mut c_void,
    pub init_priority: i32,
    pub current_priority: i32,
    pub wait_type: i32,
    pub wait_id: SceUID,
    pub wakeup_count: i32,
    pub run_clocks: SceKernelSysClock,
    #[cfg(psp_fw_ge_200)]
    pub unk3: SceUInt,
    pub intr_preempt_count: SceUInt,
    pub thread_preempt_count: SceUInt,
    pub release_count: SceUInt,
    pub th_context: *mut SceThreadContext,
    pub vfpu_context: *mut f32,
    pub ret_addr: *mut c_void,
    pub unknown1: SceUInt,
    pub sc_context: *mut SceSCContext,
}

sized_params!(
    SceKernelThreadOptParam,
    SceKernelThreadInfo,
    SceKernelThreadRunStatus,
    SceKernelSemaOptParam,
    SceKernelSemaInfo,
    SceKernelEventFlagInfo,
    SceKernelEventFlagOptParam,
    SceKernelMbxOptParam,
    SceKernelMbxInfo,
    SceKernelAlarmInfo,
    SceKernelCallbackInfo,
    SceKernelSystemStatus,
    SceKernelMppInfo,
    SceKernelVplOptParam,
    SceKernelVplInfo,
    SceKernelFplOptParam,
    SceKernelFplInfo,
    SceKernelVTimerInfo,
    SceKernelVTimerOptParam,
    SceKernelThreadEventHandlerInfo,
    SceKernelThreadKInfo,
);

named_objects!(
    SceKernelThreadInfo,
    SceKernelSemaInfo,
    SceKernelEventFlagInfo,
    SceKernelMbxInfo,
    SceKernelCallbackInfo,
    SceKernelMppInfo,
    SceKernelVplInfo,
    SceKernelFplInfo,
    SceKernelVTimerInfo,
    SceKernelThreadEventHandlerInfo,
    SceKernelThreadKInfo,
);

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspthreadman_user"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspthreadman_kernel"))]
extern "C" {
    /// Create a thread. Returns its UID, `< 0` on error.
    pub fn sceKernelCreateThread(
        name: *const c_char,
        entry: SceKernelThreadEntry,
        init_priority: i32,
        stack_size: i32,
        attr: SceUInt,
        option: *mut SceKernelThreadOptParam,
    ) -> SceUID;
    pub fn sceKernelDeleteThread(thid: SceUID) -> i32;
    /// Start a created thread. `argp` is copied onto the new thread's stack.
    pub fn sceKernelStartThread(thid: SceUID, arglen: SceSize, argp: *mut c_void) -> i32;
    pub fn sceKernelExitThread(status: i32) -> i32;
    pub fn sceKernelExitDeleteThread(status: i32) -> i32;
    pub fn sceKernelTerminateThread(thid: SceUID) -> i32;
    pub fn sceKernelTerminateDeleteThread(thid: SceUID) -> i32;
    /// Suspend the dispatcher. Returns the previous dispatch state.
    pub fn sceKernelSuspendDispatchThread() -> i32;
    pub fn sceKernelResumeDispatchThread(state: i32) -> i32;
    pub fn sceKernelSleepThread() -> i32;
    /// Sleep and handle callbacks while asleep.
    pub fn sceKernelSleepThreadCB() -> i32;
    pub fn sceKernelWakeupThread(thid: SceUID) -> i32;
    pub fn sceKernelCancelWakeupThread(thid: SceUID) -> i32;
    pub fn sceKernelSuspendThread(thid: SceUID) -> i32;
    pub fn sceKernelResumeThread(thid: SceUID) -> i32;
    /// Wait until a thread ends. `timeout` is in microseconds, null waits forever.
    pub fn sceKernelWaitThreadEnd(thid: SceUID, timeout: *mut SceUInt) -> i32;
    pub fn sceKernelWaitThreadEndCB(thid: SceUID, timeout: *mut SceUInt) -> i32;
    /// Delay the current thread by `delay` microseconds.
    pub fn sceKernelDelayThread(delay: SceUInt) -> i32;
    pub fn sceKernelDelayThreadCB(delay: SceUInt) -> i32;
    pub fn sceKernelDelaySysClockThread(delay: *mut SceKernelSysClock) -> i32;
    pub fn sceKernelDelaySysClockThreadCB(delay: *mut SceKernelSysClock) -> i32;
    pub fn sceKernelChangeCurrentThreadAttr(unknown: i32, attr: SceUInt) -> i32;
    pub fn sceKernelChangeThreadPriority(thid: SceUID, priority: i32) -> i32;
    pub fn sceKernelRotateThreadReadyQueue(priority: i32) -> i32;
    pub fn sceKernelReleaseWaitThread(thid: SceUID) -> i32;
    pub fn sceKernelGetThreadId() -> i32;
    pub fn sceKernelGetThreadCurrentPriority() -> i32;
    pub fn sceKernelGetThreadExitStatus(thid: SceUID) -> i32;
    /// Free stack space of the current thread.
    pub fn sceKernelCheckThreadStack() -> i32;
    /// Smallest free stack size seen for a thread. 0 selects the current thread.
    pub fn sceKernelGetThreadStackFreeSize(thid: SceUID) -> i32;
    /// `info.size` must be set before the call.
    pub fn sceKernelReferThreadStatus(thid: SceUID, info: *mut SceKernelThreadInfo) -> i32;
    pub fn sceKernelReferThreadRunStatus(
        thid: SceUID,
        status: *mut SceKernelThreadRunStatus,
    ) -> i32;

    pub fn sceKernelCreateSema(
        name: *const c_char,
        attr: SceUInt,
        init_val: i32,
        max_val: i32,
        option: *mut SceKernelSemaOptParam,
    ) -> SceUID;
    pub fn sceKernelDeleteSema(semaid: SceUID) -> i32;
    pub fn sceKernelSignalSema(semaid: SceUID, signal: i32) -> i32;
    pub fn sceKernelWaitSema(semaid: SceUID, signal: i32, timeout: *mut SceUInt) -> i32;
    pub fn sceKernelWaitSemaCB(semaid: SceUID, signal: i32, timeout: *mut SceUInt) -> i32;
    /// Non-blocking wait. Fails instead of waiting when the count is too low.
    pub fn sceKernelPollSema(semaid: SceUID, signal: i32) -> i32;
    pub fn sceKernelReferSemaStatus(semaid: SceUID, info: *mut SceKernelSemaInfo) -> i32;

    pub fn sceKernelCreateLwMutex(
        workarea: *mut SceLwMutexWorkarea,
        name: *const c_char,
        attr: SceUInt32,
        initial_count: i32,
        options_ptr: *mut u32,
    ) -> i32;
    pub fn sceKernelDeleteLwMutex(workarea: *mut SceLwMutexWorkarea) -> i32;
    pub fn sceKernelTryLockLwMutex(workarea: *mut SceLwMutexWorkarea, lock_count: i32) -> i32;
    pub fn sceKernelLockLwMutex(
        workarea: *mut SceLwMutexWorkarea,
        lock_count: i32,
        timeout: *mut u32,
    ) -> i32;
    pub fn sceKernelUnlockLwMutex(workarea: *mut SceLwMutexWorkarea, lock_count: i32) -> i32;

    pub fn sceKernelCreateEventFlag(
        name: *const c_char,
        attr: i32,
        bits: i32,
        opt: *mut SceKernelEventFlagOptParam,
    ) -> SceUID;
    pub fn sceKernelSetEventFlag(evid: SceUID, bits: u32) -> i32;
    /// Clear bits of an event flag. Bits set to 0 in `bits` are cleared.
    pub fn sceKernelClearEventFlag(evid: SceUID, bits: u32) -> i32;
    pub fn sceKernelPollEventFlag(evid: i32, bits: u32, wait: u32, out_bits: *mut u32) -> i32;
    pub fn sceKernelWaitEventFlag(
        evid: i32,
        bits: u32,
        wait: u32,
        out_bits: *mut u32,
        timeout: *mut SceUInt,
    ) -> i32;
    pub fn sceKernelWaitEventFlagCB(
        evid: i32,
        bits: u32,
        wait: u32,
        out_bits: *mut u32,
        timeout: *mut SceUInt,
    ) -> i32;
    pub fn sceKernelDeleteEventFlag(evid: i32) -> i32;
    pub fn sceKernelReferEventFlagStatus(event: SceUID, status: *mut SceKernelEventFlagInfo) -> i32;

    pub fn sceKernelCreateMbx(
        name: *const c_char,
        attr: SceUInt,
        option: *mut SceKernelMbxOptParam,
    ) -> SceUID;
    pub fn sceKernelDeleteMbx(mbxid: SceUID) -> i32;
    /// Post a message. It must start with a [`SceKernelMsgPacket`] header.
    pub fn sceKernelSendMbx(mbxid: SceUID, message: *mut c_void) -> i32;
    pub fn sceKernelReceiveMbx(
        mbxid: SceUID,
        pmessage: *mut *mut c_void,
        timeout: *mut SceUInt,
    ) -> i32;
    pub fn sceKernelReceiveMbxCB(
        mbxid: SceUID,
        pmessage: *mut *mut c_void,
        timeout: *mut SceUInt,
    ) -> i32;
    pub fn sceKernelPollMbx(mbxid: SceUID, pmessage: *mut *mut c_void) -> i32;
    pub fn sceKernelCancelReceiveMbx(mbxid: SceUID, pnum: *mut i32) -> i32;
    pub fn sceKernelReferMbxStatus(mbxid: SceUID, info: *mut SceKernelMbxInfo) -> i32;

    /// Arm a one-shot alarm `clock` microseconds from now.
    pub fn sceKernelSetAlarm(
        clock: SceUInt,
        handler: SceKernelAlarmHandler,
        common: *mut c_void,
    ) -> SceUID;
    pub fn sceKernelSetSysClockAlarm(
        clock: *mut SceKernelSysClock,
        handler: SceKernelAlarmHandler,
        common: *mut c_void,
    ) -> SceUID;
    pub fn sceKernelCancelAlarm(alarmid: SceUID) -> i32;
    pub fn sceKernelReferAlarmStatus(alarmid: SceUID, info: *mut SceKernelAlarmInfo) -> i32;

    pub fn sceKernelCreateCallback(
        name: *const c_char,
        func: SceKernelCallbackFunction,
        arg: *mut c_void,
    ) -> i32;
    pub fn sceKernelReferCallbackStatus(cb: SceUID, status: *mut SceKernelCallbackInfo) -> i32;
    pub fn sceKernelDeleteCallback(cb: SceUID) -> i32;
    pub fn sceKernelNotifyCallback(cb: SceUID, arg2: i32) -> i32;
    pub fn sceKernelCancelCallback(cb: SceUID) -> i32;
    pub fn sceKernelGetCallbackCount(cb: SceUID) -> i32;
    /// Run pending callbacks of the current thread.
    pub fn sceKernelCheckCallback() -> i32;

    pub fn sceKernelGetThreadmanIdList(
        r#type: SceKernelIdListType,
        readbuf: *mut SceUID,
        readbufsize: i32,
        idcount: *mut i32,
    ) -> i32;
    pub fn sceKernelReferSystemStatus(status: *mut SceKernelSystemStatus) -> i32;

    pub fn sceKernelCreateMsgPipe(
        name: *const c_char,
        part: i32,
        attr: i32,
        unk1: *mut c_void,
        opt: *mut c_void,
    ) -> SceUID;
    pub fn sceKernelDeleteMsgPipe(uid: SceUID) -> i32;
    pub fn sceKernelSendMsgPipe(
        uid: SceUID,
        message: *mut c_void,
        size: u32,
        unk1: i32,
        unk2: *mut c_void,
        timeout: *mut u32,
    ) -> i32;
    pub fn sceKernelSendMsgPipeCB(
        uid: SceUID,
        message: *mut c_void,
        size: u32,
        unk1: i32,
        unk2: *mut c_void,
        timeout: *mut u32,
    ) -> i32;
    pub fn sceKernelTrySendMsgPipe(
        uid: SceUID,
        message: *mut c_void,
        size: u32,
        unk1: i32,
        unk2: *mut c_void,
    ) -> i32;
    pub fn sceKernelReceiveMsgPipe(
        uid: SceUID,
        message: *mut c_void,
        size: u32,
        unk1: i32,
        unk2: *mut c_void,
        timeout: *mut u32,
    ) -> i32;
    pub fn sceKernelReceiveMsgPipeCB(
        uid: SceUID,
        message: *mut c_void,
        size: u32,
        unk1: i32,
        unk2: *mut c_void,
        timeout: *mut u32,
    ) -> i32;
    pub fn sceKernelTryReceiveMsgPipe(
        uid: SceUID,
        message: *mut c_void,
        size: u32,
        unk1: i32,
        unk2: *mut c_void,
    ) -> i32;
    pub fn sceKernelCancelMsgPipe(uid: SceUID, psend: *mut i32, precv: *mut i32) -> i32;
    pub fn sceKernelReferMsgPipeStatus(uid: SceUID, info: *mut SceKernelMppInfo) -> i32;

    pub fn sceKernelCreateVpl(
        name: *const c_char,
        part: i32,
        attr: i32,
        size: u32,
        opt: *mut SceKernelVplOptParam,
    ) -> SceUID;
    pub fn sceKernelDeleteVpl(uid: SceUID) -> i32;
    pub fn sceKernelAllocateVpl(
        uid: SceUID,
        size: u32,
        data: *mut *mut c_void,
        timeout: *mut u32,
    ) -> i32;
    pub fn sceKernelAllocateVplCB(
        uid: SceUID,
        size: u32,
        data: *mut *mut c_void,
        timeout: *mut u32,
    ) -> i32;
    pub fn sceKernelTryAllocateVpl(uid: SceUID, size: u32, data: *mut *mut c_void) -> i32;
    pub fn sceKernelFreeVpl(uid: SceUID, data: *mut c_void) -> i32;
    pub fn sceKernelCancelVpl(uid: SceUID, pnum: *mut i32) -> i32;
    pub fn sceKernelReferVplStatus(uid: SceUID, info: *mut SceKernelVplInfo) -> i32;

    pub fn sceKernelCreateFpl(
        name: *const c_char,
        part: i32,
        attr: i32,
        size: u32,
        blocks: u32,
        opt: *mut SceKernelFplOptParam,
    ) -> i32;
    pub fn sceKernelDeleteFpl(uid: SceUID) -> i32;
    pub fn sceKernelAllocateFpl(uid: SceUID, data: *mut *mut c_void, timeout: *mut u32) -> i32;
    pub fn sceKernelAllocateFplCB(uid: SceUID, data: *mut *mut c_void, timeout: *mut u32) -> i32;
    pub fn sceKernelTryAllocateFpl(uid: SceUID, data: *mut *mut c_void) -> i32;
    pub fn sceKernelFreeFpl(uid: SceUID, data: *mut c_void) -> i32;
    pub fn sceKernelCancelFpl(uid: SceUID, pnum: *mut i32) -> i32;
    pub fn sceKernelReferFplStatus(uid: SceUID, info: *mut SceKernelFplInfo) -> i32;

    pub fn _sceKernelReturnFromTimerHandler();
    pub fn _sceKernelReturnFromCallback();

    pub fn sceKernelUSec2SysClock(usec: u32, clock: *mut SceKernelSysClock) -> i32;
    pub fn sceKernelUSec2SysClockWide(usec: u32) -> SceInt64;
    pub fn sceKernelSysClock2USec(
        clock: *mut SceKernelSysClock,
        low: *mut u32,
        high: *mut u32,
    ) -> i32;
    pub fn sceKernelSysClock2USecWide(clock: SceInt64, low: *mut u32, high: *mut u32) -> i32;
    pub fn sceKernelGetSystemTime(time: *mut SceKernelSysClock) -> i32;
    pub fn sceKernelGetSystemTimeWide() -> SceInt64;
    /// Low 32 bits of the microsecond system time.
    pub fn sceKernelGetSystemTimeLow() -> u32;

    pub fn sceKernelCreateVTimer(name: *const c_char, opt: *mut SceKernelVTimerOptParam) -> SceUID;
    pub fn sceKernelDeleteVTimer(uid: SceUID) -> i32;
    pub fn sceKernelGetVTimerBase(uid: SceUID, base: *mut SceKernelSysClock) -> i32;
    pub fn sceKernelGetVTimerBaseWide(uid: SceUID) -> SceInt64;
    pub fn sceKernelGetVTimerTime(uid: SceUID, time: *mut SceKernelSysClock) -> i32;
    pub fn sceKernelGetVTimerTimeWide(uid: SceUID) -> SceInt64;
    pub fn sceKernelSetVTimerTime(uid: SceUID, time: *mut SceKernelSysClock) -> i32;
    pub fn sceKernelSetVTimerTimeWide(uid: SceUID, time: SceInt64) -> SceInt64;
    pub fn sceKernelStartVTimer(uid: SceUID) -> i32;
    pub fn sceKernelStopVTimer(uid: SceUID) -> i32;
    pub fn sceKernelSetVTimerHandler(
        uid: SceUID,
        time: *mut SceKernelSysClock,
        handler: SceKernelVTimerHandler,
        common: *mut c_void,
    ) -> i32;
    pub fn sceKernelSetVTimerHandlerWide(
        uid: SceUID,
        time: SceInt64,
        handler: SceKernelVTimerHandlerWide,
        common: *mut c_void,
    ) -> i32;
    pub fn sceKernelCancelVTimerHandler(uid: SceUID) -> i32;
    pub fn sceKernelReferVTimerStatus(uid: SceUID, info: *mut SceKernelVTimerInfo) -> i32;

    pub fn _sceKernelExitThread();
    /// Object type of a UID as a [`SceKernelIdListType`] value, `< 0` on error.
    pub fn sceKernelGetThreadmanIdType(uid: SceUID) -> i32;

    pub fn sceKernelRegisterThreadEventHandler(
        name: *const c_char,
        thread_id: SceUID,
        mask: i32,
        handler: SceKernelThreadEventHandler,
        common: *mut c_void,
    ) -> SceUID;
    pub fn sceKernelReleaseThreadEventHandler(uid: SceUID) -> i32;
    pub fn sceKernelReferThreadEventHandlerStatus(
        uid: SceUID,
        info: *mut SceKernelThreadEventHandlerInfo,
    ) -> i32;

    pub fn sceKernelReferThreadProfiler() -> *mut PspDebugProfilerRegs;
    pub fn sceKernelReferGlobalProfiler() -> *mut PspDebugProfilerRegs;
}

pub type SceKernelExtendKernelStackCallback = Option<unsafe extern "C" fn(arg: *mut c_void)>;
pub type SceKernelKTLSAllocCallback = Option<unsafe extern "C" fn(size: *mut u32, arg: *mut c_void) -> i32>;

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspthreadman_kernel"))]
extern "C" {
    pub fn sceKernelSuspendAllUserThreads() -> i32;
    /// 1 when the calling thread runs in user mode.
    pub fn sceKernelIsUserModeThread() -> i32;
    /// 4 for user mode, 3 for VSH, 2 for updater, 1 for kernel.
    pub fn sceKernelGetUserLevel() -> i32;
    /// Return address of the syscall that entered the kernel.
    pub fn sceKernelGetSyscallRA() -> u32;
    pub fn sceKernelGetThreadKernelStackFreeSize(thid: SceUID) -> i32;
    pub fn sceKernelCheckThreadKernelStack() -> i32;
    pub fn sceKernelExtendKernelStack(
        r#type: i32,
        cb: SceKernelExtendKernelStackCallback,
        arg: *mut c_void,
    ) -> i32;
    pub fn sceKernelGetSystemStatusFlag() -> u32;
    pub fn sceKernelAllocateKTLS(id: i32, cb: SceKernelKTLSAllocCallback, arg: *mut c_void) -> i32;
    pub fn sceKernelFreeKTLS(id: i32) -> i32;
    pub fn sceKernelGetKTLS(id: i32) -> *mut c_void;
    pub fn sceKernelGetThreadKTLS(id: i32, thid: SceUID, mode: i32) -> *mut c_void;
    pub fn sceKernelReferThreadDebugStatus(uid: SceUID, info: *mut SceKernelThreadKInfo) -> i32;
}
