// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

pub type SceSysTimerId = i32;

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspsystimer_kernel"))]
extern "C" {
    pub fn sceSTimerAlloc() -> SceSysTimerId;
    pub fn sceSTimerFree(timer: SceSysTimerId);
    pub fn sceSTimerStartCount(timer: SceSysTimerId);
    pub fn sceSTimerStopCount(timer: SceSysTimerId);
    pub fn sceSTimerResetCount(timer: SceSysTimerId);
    pub fn sceSTimerGetCount(timer: SceSysTimerId, count: *mut i32);
    pub fn sceSTimerSetHandler(
        timer: SceSysTimerId,
        cycle: i32,
        handler: Option<unsafe extern "C" fn() -> i32>,
        unk1: i32,
    );
    pub fn sceSTimerSetTMCY(timer: SceSysTimerId, unk1: i32) -> i32;
    pub fn sceSTimerSetPrscl(timer: SceSysTimerId, numerator: i32, denominator: i32) -> i32;
}
