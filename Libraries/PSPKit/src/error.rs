// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::fmt;

use bitfield_struct::bitfield;
use num_enum::TryFromPrimitive;
use pspfirmware::{
    atrac3::SceAtracErrorCode, audio::SceAudioErrorCode, display::SceDisplayErrorCode,
    kerror::SceKernelErrorCode,
};

/// Field view of a firmware error word.
#[bitfield(u32)]
#[derive(PartialEq, Eq)]
pub struct SceErrorBits {
    pub code: u16,
    #[bits(12)]
    pub facility: u16,
    #[bits(2)]
    __: u8,
    pub critical: bool,
    pub error: bool,
}

/// A negative firmware return value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SceError(pub i32);

pub type SceResult<T = u32> = Result<T, SceError>;

impl SceError {
    /// Split a raw return into its value and the error case.
    pub const fn check(ret: i32) -> SceResult {
        if ret < 0 {
            Err(Self(ret))
        } else {
            Ok(ret as u32)
        }
    }

    pub const fn check_unit(ret: i32) -> SceResult<()> {
        if ret < 0 {
            Err(Self(ret))
        } else {
            Ok(())
        }
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0 as u32
    }

    #[must_use]
    pub const fn bits(self) -> SceErrorBits {
        SceErrorBits::from_bits(self.raw())
    }

    #[must_use]
    pub const fn code(self) -> u16 {
        self.bits().code()
    }

    #[must_use]
    pub const fn facility(self) -> u16 {
        self.bits().facility()
    }

    #[must_use]
    pub const fn is_critical(self) -> bool {
        self.bits().critical()
    }

    fn fmt_name(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Ok(v) = SceKernelErrorCode::try_from(self) {
            write!(f, " ({v:?})")
        } else if let Ok(v) = SceAudioErrorCode::try_from(self) {
            write!(f, " ({v:?})")
        } else if let Ok(v) = SceAtracErrorCode::try_from(self) {
            write!(f, " ({v:?})")
        } else if let Ok(v) = SceDisplayErrorCode::try_from(self) {
            write!(f, " ({v:?})")
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for SceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.raw())?;
        self.fmt_name(f)
    }
}

impl fmt::Debug for SceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SceError({self})")
    }
}

macro_rules! named_codes {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TryFrom<SceError> for $ty {
                type Error = SceError;

                fn try_from(err: SceError) -> Result<Self, SceError> {
                    Self::try_from_primitive(err.raw()).map_err(|_| err)
                }
            }

            impl From<$ty> for SceError {
                fn from(code: $ty) -> Self {
                    Self(u32::from(code) as i32)
                }
            }
        )+
    };
}

named_codes!(SceKernelErrorCode, SceAudioErrorCode, SceAtracErrorCode, SceDisplayErrorCode);
