// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#![deny(warnings, clippy::nursery, unused_extern_crates)]

use pspkit::{
    firmware::{audio::SceAudioErrorCode, kerror::SceKernelErrorCode},
    SceError, SceResult,
};

#[test]
fn check_splits_on_sign() {
    assert_eq!(SceError::check(0), Ok(0));
    assert_eq!(SceError::check(0x1234), Ok(0x1234));
    assert_eq!(SceError::check(-1), Err(SceError(-1)));
    assert_eq!(SceError::check_unit(7), Ok(()));
    assert!(SceError::check_unit(i32::MIN).is_err());
}

#[test]
fn decode_fields() {
    let err = SceError(0x8002_0198u32 as i32);
    assert_eq!(err.raw(), 0x8002_0198);
    assert_eq!(err.code(), 0x0198);
    assert_eq!(err.facility(), 0x002);
    assert!(!err.is_critical());
    assert!(err.bits().error());

    let critical = SceError(0xC026_0001u32 as i32);
    assert!(critical.is_critical());
    assert_eq!(critical.facility(), 0x026);
    assert_eq!(critical.code(), 1);
}

#[test]
fn named_code_conversions() {
    assert_eq!(
        SceKernelErrorCode::try_from(SceError(0x8002_01A8u32 as i32)),
        Ok(SceKernelErrorCode::WaitTimeout)
    );
    assert_eq!(
        SceKernelErrorCode::try_from(SceError(0x8002_0001u32 as i32)),
        Ok(SceKernelErrorCode::Error)
    );
    assert_eq!(SceError::from(SceKernelErrorCode::Error).raw(), 0x8002_0001);
    assert_eq!(
        SceAudioErrorCode::try_from(SceError(0x8002_01A8u32 as i32)),
        Err(SceError(0x8002_01A8u32 as i32))
    );
    assert_eq!(
        SceError::from(SceAudioErrorCode::OutputBusy).raw(),
        0x8026_0002
    );
}

#[test]
fn display_names_known_codes() {
    assert_eq!(
        SceError::from(SceAudioErrorCode::OutputBusy).to_string(),
        "0x80260002 (OutputBusy)"
    );
    assert_eq!(
        SceError(0x8002_0198u32 as i32).to_string(),
        "0x80020198 (UnknownThid)"
    );
    assert_eq!(SceError(0x8001_0002u32 as i32).to_string(), "0x80010002");
    assert_eq!(
        format!("{:?}", SceError(0x8001_0002u32 as i32)),
        "SceError(0x80010002)"
    );
}

fn open_then_read(open: i32, read: i32) -> SceResult {
    let _fd = SceError::check(open)?;
    SceError::check(read)
}

#[test]
fn propagates_with_question_mark() {
    assert_eq!(open_then_read(3, 512), Ok(512));
    assert_eq!(
        open_then_read(0x8001_0002u32 as i32, 512),
        Err(SceError(0x8001_0002u32 as i32))
    );
}
