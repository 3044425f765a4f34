// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::{
    fmt::Write,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::logger::KWriter;

static IN_PANIC: AtomicBool = AtomicBool::new(false);

#[panic_handler]
fn panic_handler(info: &core::panic::PanicInfo) -> ! {
    if IN_PANIC.swap(true, Ordering::AcqRel) {
        let _ = writeln!(KWriter, "double panic");
    } else {
        let _ = writeln!(KWriter, "{info}");
    }
    halt()
}

#[cfg(not(feature = "kernel"))]
fn halt() -> ! {
    unsafe { pspfirmware::loadexec::sceKernelExitGame() };
    loop {
        core::hint::spin_loop();
    }
}

#[cfg(feature = "kernel")]
fn halt() -> ! {
    loop {
        unsafe { pspfirmware::threadman::sceKernelSleepThread() };
    }
}
