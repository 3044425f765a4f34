// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#![deny(warnings, clippy::nursery, unused_extern_crates)]

use core::any::TypeId;

fn type_id_of<T: 'static>(_: &T) -> TypeId {
    TypeId::of::<T>()
}

#[test]
fn unknown_codes_are_rejected() {
    assert!(pspfirmware::audio::SceAudioErrorCode::try_from(0x8026_000Cu32).is_err());
    assert!(pspfirmware::atrac3::SceAtracErrorCode::try_from(0x8063_0019u32).is_err());
    assert!(pspfirmware::kerror::SceKernelErrorCode::try_from(0x8002_0000u32).is_err());
    assert!(pspfirmware::kermit::KermitModes::try_from(16u32).is_err());
}

#[test]
fn atrac_codec_types_follow_codec_kinds() {
    assert_eq!(u32::from(pspfirmware::atrac3::SceAtracCodecType::At3Plus), 0x1000);
    assert_eq!(u32::from(pspfirmware::atrac3::SceAtracCodecType::At3), 0x1001);
    assert_eq!(i32::from(pspfirmware::audiocodec::SceCodecKind::Aac), 0x1003);
}

#[test]
fn display_constants() {
    assert_eq!(i32::from(pspfirmware::display::SceDisplayPixelFormats::Format8888), 3);
    assert_eq!(i32::from(pspfirmware::display::SceDisplayMode::PseudoVga), 0x60);
    assert_eq!(
        pspfirmware::display::PSP_DISPLAY_SETBUF_NEXTFRAME,
        pspfirmware::display::SceDisplaySetBufSync::NextVsync
    );
    assert_eq!(
        u32::from(pspfirmware::display::SceDisplayErrorCode::Argument),
        0x8000_0107
    );
}

#[test]
fn thread_constants() {
    assert_eq!(pspfirmware::threadman::THREAD_ATTR_USER.bits(), 0x8000_0000);
    assert_eq!(pspfirmware::threadman::PspThreadAttributes::VSH.bits(), 0xC000_0000);
    assert_eq!(u32::from(pspfirmware::threadman::ThreadEventIds::Kern), 0xFFFF_FFF8);
    assert_eq!(
        pspfirmware::threadman::SceKernelIdListType::try_from(8u32).ok(),
        Some(pspfirmware::threadman::SceKernelIdListType::Callback)
    );
}

#[test]
fn io_constants() {
    assert_eq!(pspfirmware::iofilemgr::IoOpenFlags::RDWR.bits(), 0x0003);
    assert_eq!(
        (pspfirmware::iofilemgr::IoOpenFlags::CREAT | pspfirmware::iofilemgr::IoOpenFlags::TRUNC).bits(),
        0x0600
    );
    assert_eq!(pspfirmware::iofilemgr::FIO_S_IFMT, 0xF000);
}

#[test]
fn umd_and_power_constants() {
    assert_eq!(u32::from(pspfirmware::umd::SceUmdTypes::Audio), 0x40);
    assert_eq!(
        i32::from(pspfirmware::umd::UmdDriveStat::WaitForInit),
        pspfirmware::umd::SceUmdState::READY.bits()
    );
    assert_eq!(i32::from(pspfirmware::power::ScePowerTickFlags::Display), 6);
    assert_eq!(pspfirmware::usb::SceUsbStatus::ACTIVATED.bits(), 0x200);
    assert_eq!(pspfirmware::hprm::SceHprmKeys::HOLD.bits(), 0x80);
    assert_eq!(i32::from(pspfirmware::impose::SceImposeParam::SoundReduction), 0x400);
}

#[test]
fn kermit_constants() {
    assert_eq!(pspfirmware::kermit::KERMIT_PACKET(0x0880_0000), 0x4880_0000);
    assert_eq!(pspfirmware::kermit::KERMIT_PACKET(0x8800_0000), 0xA800_0000);
    assert_eq!(pspfirmware::kermit::ALIGN_64(0x1234_567F), 0x1234_5640);
}

#[test]
fn legacy_type_aliases() {
    assert_eq!(
        TypeId::of::<pspfirmware::chnnlsv::pspChnnlsvContext1>(),
        TypeId::of::<pspfirmware::chnnlsv::SceSdContext1>()
    );
    assert_eq!(
        TypeId::of::<pspfirmware::openpsid::PspOpenPSID>(),
        TypeId::of::<pspfirmware::openpsid::SceOpenPSID>()
    );
    assert_eq!(
        TypeId::of::<pspfirmware::display::PspDisplayPixelFormats>(),
        TypeId::of::<pspfirmware::display::SceDisplayPixelFormats>()
    );
    assert_eq!(
        TypeId::of::<pspfirmware::umd::pspUmdInfo>(),
        TypeId::of::<pspfirmware::umd::SceUmdInfo>()
    );
}

#[test]
fn nid_aliases_name_the_same_import() {
    assert_eq!(
        type_id_of(&pspfirmware::chnnlsv::sceChnnlsv_E7833020),
        type_id_of(&pspfirmware::chnnlsv::sceSdSetIndex)
    );
    assert_eq!(
        type_id_of(&pspfirmware::chnnlsv::sceChnnlsv_21BE78B4),
        type_id_of(&pspfirmware::chnnlsv::sceSdCleanList)
    );
    assert_ne!(
        type_id_of(&pspfirmware::chnnlsv::sceChnnlsv_21BE78B4),
        type_id_of(&pspfirmware::chnnlsv::sceSdSetIndex)
    );
}

#[cfg(not(feature = "kernel"))]
#[test]
fn paf_short_names() {
    assert_eq!(
        type_id_of(&pspfirmware::paf::paf_strlen),
        type_id_of(&pspfirmware::paf::sce_paf_private_strlen)
    );
    assert_eq!(
        type_id_of(&pspfirmware::paf::paf_malloc),
        type_id_of(&pspfirmware::paf::sce_paf_private_malloc)
    );
}

#[cfg(feature = "kernel")]
#[test]
fn display_internal_frame_buffer_names() {
    assert_eq!(
        type_id_of(&pspfirmware::display::sceDisplaySetFrameBufferInternal),
        type_id_of(&pspfirmware::display::sceDisplay_driver_63E22A26)
    );
    assert_eq!(
        type_id_of(&pspfirmware::display::sceDisplaySetFrameBufferInternal),
        type_id_of(&pspfirmware::display::sceDisplay_driver_3E17FE8D)
    );
    assert_eq!(
        type_id_of(&pspfirmware::display::sceDisplayGetFrameBufferInternal),
        type_id_of(&pspfirmware::display::sceDisplay_driver_F338AAE0)
    );
    assert_ne!(
        type_id_of(&pspfirmware::display::sceDisplaySetFrameBufferInternal),
        type_id_of(&pspfirmware::display::sceDisplayGetFrameBufferInternal)
    );
}

#[cfg(feature = "kernel")]
#[test]
fn kermit_memory_nid_names() {
    assert_eq!(
        type_id_of(&pspfirmware::kermit::sceKermitMemorySendData),
        type_id_of(&pspfirmware::kermit::sceKermitMemory_driver_80E1240A)
    );
    assert_eq!(
        type_id_of(&pspfirmware::kermit::sceKermitMemoryReceiveData),
        type_id_of(&pspfirmware::kermit::sceKermitMemory_driver_90B662D0)
    );
}
