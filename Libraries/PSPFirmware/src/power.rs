// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::SceUID;

bitflags! {
    /// Bits of the `power_info` argument delivered to power callbacks.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ScePowerCallbackFlags: u32 {
        const POWER_SWITCH = 0x8000_0000;
        const HOLD_SWITCH = 0x4000_0000;
        const STANDBY = 0x0008_0000;
        const RESUME_COMPLETE = 0x0004_0000;
        const RESUMING = 0x0002_0000;
        const SUSPENDING = 0x0001_0000;
        const AC_POWER = 0x0000_1000;
        const BATTERY_LOW = 0x0000_0100;
        const BATTERY_EXIST = 0x0000_0080;
        /// Mask of the remaining battery percentage.
        const BATTPOWER = 0x0000_007F;
    }
}

impl ScePowerCallbackFlags {
    /// Battery charge percentage carried in the low bits.
    #[inline]
    #[must_use]
    pub const fn battery_percent(&self) -> u32 {
        self.bits() & Self::BATTPOWER.bits()
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum ScePowerTickFlags {
    /// Every idle timer.
    All = 0,
    Suspend = 1,
    Display = 6,
}

/// Let the firmware pick a free callback slot.
pub const SCE_POWER_SLOT_AUTO: i32 = -1;

pub type powerCallback_t = Option<unsafe extern "C" fn(unknown: i32, power_info: i32)>;

pub type ScePowerIdleCallback =
    Option<unsafe extern "C" fn(slot: i32, diff: u32, arg: i32, unk: *mut i32) -> i32>;

#[cfg_attr(
    all(target_os = "psp", not(feature = "kernel"), not(feature = "adrenaline")),
    link(name = "psppower")
)]
#[cfg_attr(
    all(target_os = "psp", not(feature = "kernel"), feature = "adrenaline"),
    link(name = "psppower_user")
)]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "psppower_driver"))]
extern "C" {
    /// Register a callback created with `sceKernelCreateCallback`. Returns the slot.
    pub fn scePowerRegisterCallback(slot: i32, cb_id: SceUID) -> i32;
    pub fn scePowerUnregisterCallback(slot: i32) -> i32;
    /// 1 when running on external power.
    pub fn scePowerIsPowerOnline() -> i32;
    pub fn scePowerIsBatteryExist() -> i32;
    pub fn scePowerIsBatteryCharging() -> i32;
    pub fn scePowerGetBatteryChargingStatus() -> i32;
    pub fn scePowerIsLowBattery() -> i32;
    pub fn scePowerIsSuspendRequired() -> i32;
    /// Remaining capacity in mAh.
    pub fn scePowerGetBatteryRemainCapacity() -> i32;
    pub fn scePowerGetBatteryFullCapacity() -> i32;
    pub fn scePowerGetBatteryLifePercent() -> i32;
    /// Remaining battery life in minutes.
    pub fn scePowerGetBatteryLifeTime() -> i32;
    pub fn scePowerGetBatteryTemp() -> i32;
    pub fn scePowerGetBatteryElec() -> i32;
    /// Battery voltage in mV.
    pub fn scePowerGetBatteryVolt() -> i32;
    /// Set the CPU clock in MHz, 1 to 333.
    pub fn scePowerSetCpuClockFrequency(cpu_freq: i32) -> i32;
    /// Set the bus clock in MHz, 1 to 167.
    pub fn scePowerSetBusClockFrequency(bus_freq: i32) -> i32;
    pub fn scePowerGetCpuClockFrequencyInt() -> i32;
    pub fn scePowerGetCpuClockFrequencyFloat() -> f32;
    pub fn scePowerGetBusClockFrequencyInt() -> i32;
    pub fn scePowerGetBusClockFrequencyFloat() -> f32;
    /// Set the PLL, CPU and bus clocks together. The PLL runs at 19 to 333 MHz, the CPU
    /// at most at the PLL rate and the bus at most at half of it.
    pub fn scePowerSetClockFrequency(pll_freq: i32, cpu_freq: i32, busfreq: i32) -> i32;
    pub fn scePowerLock(unk: i32) -> i32;
    pub fn scePowerUnlock(unk: i32) -> i32;
    /// Generate a power tick so the unit and the display stay on. `type` is a [`ScePowerTickFlags`] value.
    pub fn scePowerTick(r#type: i32) -> i32;
    pub fn scePowerGetIdleTimer() -> i32;
    pub fn scePowerIdleTimerEnable(unk: i32) -> i32;
    pub fn scePowerIdleTimerDisable(unk: i32) -> i32;
    pub fn scePowerRequestStandby() -> i32;
    pub fn scePowerRequestSuspend() -> i32;
    pub fn scePowerRequestColdReset(a0: i32) -> i32;
}

#[cfg(not(feature = "kernel"))]
#[cfg_attr(all(target_os = "psp", not(feature = "adrenaline")), link(name = "psppower"))]
#[cfg_attr(all(target_os = "psp", feature = "adrenaline"), link(name = "psppower_user"))]
extern "C" {
    pub fn scePowerGetBusClockFrequency() -> i32;
    pub fn scePowerGetCpuClockFrequency() -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "psppower_driver"))]
extern "C" {
    pub fn scePowerInit() -> i32;
    pub fn scePowerEnd() -> i32;
    pub fn scePowerSetIdleCallback(
        slot: i32,
        flags: i32,
        time: u64,
        callback: ScePowerIdleCallback,
        arg: i32,
    ) -> i32;
}
