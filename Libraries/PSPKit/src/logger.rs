// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::fmt::Write;

/// Writes one record as `"{level} {target} > {args}"` plus a newline.
pub fn format_record(w: &mut impl Write, record: &log::Record) -> core::fmt::Result {
    writeln!(w, "{} {} > {}", record.level(), record.target(), record.args())
}

/// Debug output sink: stdout in user mode, `Kprintf` in kernel mode.
#[cfg(target_os = "psp")]
pub struct KWriter;

#[cfg(all(target_os = "psp", not(feature = "kernel")))]
impl Write for KWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        use pspfirmware::{iofilemgr::sceIoWrite, stdio::sceKernelStdout};

        let ret = unsafe { sceIoWrite(sceKernelStdout(), s.as_ptr().cast(), s.len() as u32) };
        crate::SceError::check_unit(ret).map_err(|_| core::fmt::Error)
    }
}

#[cfg(all(target_os = "psp", feature = "kernel"))]
impl Write for KWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        unsafe { pspfirmware::kdebug::Kprintf(c"%.*s".as_ptr(), s.len() as i32, s.as_ptr()) };
        Ok(())
    }
}

#[cfg(target_os = "psp")]
pub struct KLog;

#[cfg(target_os = "psp")]
impl log::Log for KLog {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let _ = format_record(&mut KWriter, record);
    }

    fn flush(&self) {}
}

#[cfg(target_os = "psp")]
pub static LOGGER: KLog = KLog;

#[cfg(target_os = "psp")]
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(log::LevelFilter::Trace))
}
