// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::c_void;

pub type SceUID = i32;
pub type SceSize = u32;
pub type SceSSize = i32;
pub type SceUInt = u32;
pub type SceMode = i32;
pub type SceOff = i64;
pub type SceInt32 = i32;
pub type SceUInt32 = u32;
pub type SceInt64 = i64;
pub type SceUInt64 = u64;
pub type SceULong64 = u64;
pub type SceChar8 = i8;
pub type SceUChar = u8;
pub type SceUShort16 = u16;
pub type SceShort16 = i16;
pub type ScePVoid = *mut c_void;

pub type time_t = i32;
pub type clock_t = u32;

/// Thread entry point, receives the argument block passed to `sceKernelStartThread`.
pub type SceKernelThreadEntry = Option<unsafe extern "C" fn(args: SceSize, argp: *mut c_void) -> i32>;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScePspDateTime {
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
    pub microsecond: u32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SceIoStat {
    pub st_mode: SceMode,
    pub st_attr: u32,
    pub st_size: SceOff,
    pub st_ctime: ScePspDateTime,
    pub st_atime: ScePspDateTime,
    pub st_mtime: ScePspDateTime,
    pub st_private: [u32; 6],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SceIoDirent {
    pub d_stat: SceIoStat,
    pub d_name: [u8; 256],
    pub d_private: *mut c_void,
    pub dummy: i32,
}

impl SceIoDirent {
    #[must_use]
    pub fn file_name(&self) -> &[u8] {
        until_nul(&self.d_name)
    }
}

/// Common header shared by every utility dialog parameter block.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct pspUtilityDialogCommon {
    pub size: u32,
    pub language: i32,
    /// 0 binds confirm to circle, 1 to cross.
    pub button_swap: i32,
    pub graphics_thread: i32,
    pub access_thread: i32,
    pub font_thread: i32,
    pub sound_thread: i32,
    pub result: i32,
    pub reserved: [i32; 4],
}

sized_params!(pspUtilityDialogCommon);

/// Performance counters exposed by the thread and global profilers.
#[repr(C)]
#[derive(Debug, Default)]
pub struct PspDebugProfilerRegs {
    pub enable: u32,
    pub systemck: u32,
    pub cpuck: u32,
    pub internal: u32,
    pub memory: u32,
    pub copz: u32,
    pub vfpu: u32,
    pub sleep: u32,
    pub bus_access: u32,
    pub uncached_load: u32,
    pub uncached_store: u32,
    pub cached_load: u32,
    pub cached_store: u32,
    pub i_miss: u32,
    pub d_miss: u32,
    pub d_writeback: u32,
    pub cop0_inst: u32,
    pub fpu_inst: u32,
    pub vfpu_inst: u32,
    pub local_bus: u32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct timezone {
    pub tz_minuteswest: i32,
    pub tz_dsttime: i32,
}

/// Bytes of a fixed NUL-padded buffer up to its first NUL.
#[must_use]
pub fn until_nul(buf: &[u8]) -> &[u8] {
    buf.iter()
        .position(|&b| b == 0)
        .map_or(buf, |end| &buf[..end])
}
