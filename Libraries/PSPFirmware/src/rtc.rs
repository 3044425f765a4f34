// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::c_char;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::{time_t, ScePspDateTime};

/// Results of `sceRtcCheckValid`.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceRtcCheckValidErrors {
    InvalidYear = -1,
    InvalidMonth = -2,
    InvalidDay = -3,
    InvalidHour = -4,
    InvalidMinutes = -5,
    InvalidSeconds = -6,
    InvalidMicroseconds = -7,
}

#[cfg_attr(
    all(target_os = "psp", not(feature = "kernel"), not(feature = "adrenaline")),
    link(name = "psprtc")
)]
#[cfg_attr(
    all(target_os = "psp", not(feature = "kernel"), feature = "adrenaline"),
    link(name = "psprtc_user")
)]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "psprtc_driver"))]
extern "C" {
    /// Ticks per second.
    pub fn sceRtcGetTickResolution() -> u32;
    pub fn sceRtcGetCurrentTick(tick_count: *mut u64) -> i32;
    /// Current time shifted by `tz` minutes from UTC.
    pub fn sceRtcGetCurrentClock(time: *mut ScePspDateTime, tz: i32) -> i32;
    pub fn sceRtcGetCurrentClockLocalTime(time: *mut ScePspDateTime) -> i32;
    pub fn sceRtcConvertUtcToLocalTime(utc_tick: *const u64, local_tick: *mut u64) -> i32;
    pub fn sceRtcConvertLocalTimeToUTC(local_tick: *const u64, utc_tick: *mut u64) -> i32;
    pub fn sceRtcIsLeapYear(year: i32) -> i32;
    pub fn sceRtcGetDaysInMonth(year: i32, month: i32) -> i32;
    /// 0 is Monday.
    pub fn sceRtcGetDayOfWeek(year: i32, month: i32, day: i32) -> i32;
    /// 0 when valid, a [`SceRtcCheckValidErrors`] value otherwise.
    pub fn sceRtcCheckValid(date: *const ScePspDateTime) -> i32;
    pub fn sceRtcSetTick(date: *mut ScePspDateTime, tick: *const u64) -> i32;
    pub fn sceRtcGetTick(date: *const ScePspDateTime, tick: *mut u64) -> i32;
    /// -1, 0 or 1 as `tick1` is before, equal to or after `tick2`.
    pub fn sceRtcCompareTick(tick1: *const u64, tick2: *const u64) -> i32;
    pub fn sceRtcTickAddTicks(dest_tick: *mut u64, src_tick: *const u64, num_ticks: u64) -> i32;
    pub fn sceRtcTickAddMicroseconds(dest_tick: *mut u64, src_tick: *const u64, num_ms: u64) -> i32;
    pub fn sceRtcTickAddSeconds(dest_tick: *mut u64, src_tick: *const u64, num_secs: u64) -> i32;
    pub fn sceRtcTickAddMinutes(dest_tick: *mut u64, src_tick: *const u64, num_mins: u64) -> i32;
    pub fn sceRtcTickAddHours(dest_tick: *mut u64, src_tick: *const u64, num_hours: i32) -> i32;
    pub fn sceRtcTickAddDays(dest_tick: *mut u64, src_tick: *const u64, num_days: i32) -> i32;
    pub fn sceRtcTickAddWeeks(dest_tick: *mut u64, src_tick: *const u64, num_weeks: i32) -> i32;
    pub fn sceRtcTickAddMonths(dest_tick: *mut u64, src_tick: *const u64, num_months: i32) -> i32;
    pub fn sceRtcTickAddYears(dest_tick: *mut u64, src_tick: *const u64, num_years: i32) -> i32;
    pub fn sceRtcSetTime_t(date: *mut ScePspDateTime, time: time_t) -> i32;
    pub fn sceRtcGetTime_t(date: *const ScePspDateTime, time: *mut time_t) -> i32;
    pub fn sceRtcSetDosTime(date: *mut ScePspDateTime, dos_time: u32) -> i32;
    pub fn sceRtcGetDosTime(date: *mut ScePspDateTime, dos_time: u32) -> i32;
    pub fn sceRtcSetWin32FileTime(date: *mut ScePspDateTime, win32_time: *mut u64) -> i32;
    pub fn sceRtcGetWin32FileTime(date: *mut ScePspDateTime, win32_time: *mut u64) -> i32;
    pub fn sceRtcParseDateTime(dest_tick: *mut u64, date_string: *const c_char) -> i32;
    pub fn sceRtcFormatRFC2822(
        datetime_fmt: *mut c_char,
        utc_tick: *const u64,
        timezone_minutes: i32,
    ) -> i32;
    pub fn sceRtcFormatRFC2822LocalTime(datetime_fmt: *mut c_char, local_tick: *const u64) -> i32;
    pub fn sceRtcFormatRFC3339(
        datetime_fmt: *mut c_char,
        utc_tick: *const u64,
        timezone_minutes: i32,
    ) -> i32;
    pub fn sceRtcFormatRFC3339LocalTime(datetime_fmt: *mut c_char, local_tick: *const u64) -> i32;
    pub fn sceRtcParseRFC3339(tick: *mut u64, datetime_fmt: *const c_char) -> i32;
}
