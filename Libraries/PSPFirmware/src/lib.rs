// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Raw bindings to the PSP firmware libraries.
//!
//! Every module mirrors one firmware library surface: `#[repr(C)]` layouts,
//! firmware constants and the `extern "C"` imports resolved by its stub
//! library. Link attributes only apply when targeting `psp`; the `kernel`
//! feature switches every dual-mode import over to the kernel stubs.

#![no_std]
#![deny(warnings, clippy::cargo, clippy::nursery, unused_extern_crates)]
#![allow(
    clippy::missing_safety_doc,
    clippy::multiple_crate_versions,
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals
)]

#[macro_use]
mod macros;

pub mod amctrl;
pub mod atrac3;
pub mod audio;
pub mod audiocodec;
pub mod chnnlsv;
pub mod crypt;
pub mod display;
pub mod dmac;
pub mod exception;
pub mod ge;
pub mod hprm;
pub mod idstorage;
pub mod impose;
pub mod iofilemgr;
pub mod jpeg;
pub mod kdebug;
pub mod kerror;
pub mod kermit;
pub mod loadexec;
pub mod modulemgr;
pub mod mp3;
pub mod mpeg;
pub mod mpegbase;
pub mod nand;
pub mod openpsid;
pub mod paf;
pub mod power;
pub mod reg;
pub mod rtc;
pub mod stdio;
pub mod sysclib;
pub mod sysevent;
pub mod sysreg;
pub mod systimer;
pub mod threadman;
pub mod types;
pub mod umd;
pub mod usb;
pub mod utility;
pub mod utils;
pub mod vaudio;
pub mod wlan;

/// Firmware parameter blocks whose first field carries their own size.
///
/// That field must hold `size_of::<Self>()` before the block is handed to
/// the firmware.
pub trait SizedParam: Sized {
    /// A zeroed block with the size field filled in.
    fn sized() -> Self;
}
