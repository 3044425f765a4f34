// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Safe-ish conveniences layered over `pspfirmware`.

#![no_std]
#![deny(warnings, clippy::cargo, clippy::nursery, unused_extern_crates)]
#![allow(clippy::missing_safety_doc, clippy::multiple_crate_versions)]

pub use pspfirmware as firmware;

pub mod error;
#[cfg(feature = "logger")]
pub mod logger;
#[cfg(all(feature = "panic_handler", target_os = "psp"))]
mod panic;

pub use error::{SceError, SceResult};
