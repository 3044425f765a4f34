// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#![deny(warnings, clippy::nursery, unused_extern_crates)]

use core::mem::size_of;

use pspfirmware::SizedParam;

#[test]
fn sized_params_fill_in_size() {
    let info = pspfirmware::threadman::SceKernelThreadInfo::sized();
    assert_eq!(info.size as usize, size_of::<pspfirmware::threadman::SceKernelThreadInfo>());
    assert_eq!(info.name(), b"");

    let opt = pspfirmware::modulemgr::SceKernelLMOption::sized();
    assert_eq!(opt.size, 20);
    assert_eq!(opt.mpidtext, 0);

    let umd = pspfirmware::umd::SceUmdInfo::sized();
    assert_eq!(umd.size, 8);
    assert_eq!(umd.r#type, 0);

    let dialog = pspfirmware::types::pspUtilityDialogCommon::sized();
    assert_eq!(dialog.size, 48);

    let kinfo = pspfirmware::threadman::SceKernelThreadKInfo::sized();
    assert_eq!(kinfo.size as usize, size_of::<pspfirmware::threadman::SceKernelThreadKInfo>());
    assert_eq!(kinfo.name(), b"");

    let handler = pspfirmware::sysevent::PspSysEventHandler::sized();
    assert_eq!(handler.size as usize, size_of::<pspfirmware::sysevent::PspSysEventHandler>());
    assert!(handler.handler.is_none());
    assert!(handler.next.is_null());
}

#[test]
fn object_names_stop_at_nul() {
    let mut sema = pspfirmware::threadman::SceKernelSemaInfo::sized();
    sema.name[..5].copy_from_slice(b"audio");
    assert_eq!(sema.name(), b"audio");

    sema.name = [b'x'; 32];
    assert_eq!(sema.name().len(), 32);

    assert_eq!(pspfirmware::types::until_nul(b"ab\0cd"), b"ab");
    assert_eq!(pspfirmware::types::until_nul(b""), b"");
}

#[test]
fn reg_param_for_system_registry() {
    let param = pspfirmware::reg::SceRegParam::new(pspfirmware::reg::SYSTEM_REGISTRY);
    assert_eq!(param.regtype, 1);
    assert_eq!(param.namelen, 7);
    assert_eq!(param.unk2, 1);
    assert_eq!(param.unk3, 1);
    assert_eq!(param.name(), b"/system");
}

#[test]
fn reg_param_truncates_long_names() {
    let long = "a".repeat(300);
    let param = pspfirmware::reg::SceRegParam::new(&long);
    assert_eq!(param.namelen, 255);
    assert_eq!(param.name[255], 0);
    assert_eq!(param.name().len(), 255);
}

#[test]
fn sys_clock_round_trip() {
    let clock = pspfirmware::threadman::SceKernelSysClock::from_u64(0x1234_5678_9ABC_DEF0);
    assert_eq!(clock.low, 0x9ABC_DEF0);
    assert_eq!(clock.hi, 0x1234_5678);
    assert_eq!(clock.as_u64(), 0x1234_5678_9ABC_DEF0);
}

#[test]
fn ge_command_fields() {
    let cmd = pspfirmware::ge::GeCommand::from_bits(0x1400_0010);
    assert_eq!(cmd.command(), 0x14);
    assert_eq!(cmd.argument(), 0x10);
    assert_eq!(
        pspfirmware::ge::GeCommand::new()
            .with_command(0x0C)
            .with_argument(0xFF_FFFF)
            .into_bits(),
        0x0CFF_FFFF
    );
}

#[test]
fn audio_sample_alignment() {
    use pspfirmware::audio::{PSP_AUDIO_SAMPLE_ALIGN, PSP_AUDIO_SAMPLE_MAX};

    assert_eq!(PSP_AUDIO_SAMPLE_ALIGN(1), 64);
    assert_eq!(PSP_AUDIO_SAMPLE_ALIGN(64), 64);
    assert_eq!(PSP_AUDIO_SAMPLE_ALIGN(65), 128);
    assert_eq!(PSP_AUDIO_SAMPLE_ALIGN(PSP_AUDIO_SAMPLE_MAX), PSP_AUDIO_SAMPLE_MAX);
    assert_eq!(PSP_AUDIO_SAMPLE_ALIGN(i32::MAX - 63), i32::MAX - 63);
    assert_eq!(PSP_AUDIO_SAMPLE_ALIGN(i32::MAX - 10), i32::MIN);
}

#[test]
fn hash_contexts_start_zeroed() {
    let md5 = pspfirmware::utils::SceKernelUtilsMd5Context::default();
    assert_eq!(md5.h, [0; 4]);
    assert_eq!(md5.ull_total_len, 0);
    assert_eq!(md5.buf, [0; 64]);

    let sha1 = pspfirmware::utils::SceKernelUtilsSha1Context::default();
    assert_eq!(sha1.h, [0; 5]);
    assert_eq!(sha1.us_remains, 0);
    assert_eq!(sha1.buf, [0; 64]);
    assert_eq!(sha1, pspfirmware::utils::SceKernelUtilsSha1Context::default());
}

#[test]
fn io_stat_kind() {
    let mut stat = pspfirmware::types::SceIoStat {
        st_mode: pspfirmware::iofilemgr::IoStatMode::IFDIR.bits() | 0o777,
        ..Default::default()
    };
    assert!(stat.is_dir());
    assert!(!stat.is_file());

    stat.st_mode = pspfirmware::iofilemgr::IoStatMode::IFREG.bits() | 0o644;
    assert!(stat.is_file());
}

#[test]
fn power_callback_battery_percent() {
    let flags = pspfirmware::power::ScePowerCallbackFlags::from_bits_retain(0x0000_10E4);
    assert!(flags.contains(pspfirmware::power::ScePowerCallbackFlags::AC_POWER));
    assert!(flags.contains(pspfirmware::power::ScePowerCallbackFlags::BATTERY_EXIST));
    assert_eq!(flags.battery_percent(), 100);
}

#[test]
fn mpeg_timestamps() {
    let au = pspfirmware::mpeg::SceMpegAu {
        pts_msb: 1,
        pts: 0x10,
        dts_msb: 0,
        dts: 0x20,
        ..Default::default()
    };
    assert_eq!(au.presentation_timestamp(), 0x1_0000_0010);
    assert_eq!(au.decode_timestamp(), 0x20);
}
