// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#![deny(warnings, clippy::nursery, unused_extern_crates)]

use core::mem::{align_of, offset_of, size_of};

#[test]
fn date_time_layout() {
    assert_eq!(size_of::<pspfirmware::types::ScePspDateTime>(), 16);
    assert_eq!(offset_of!(pspfirmware::types::ScePspDateTime, microsecond), 12);
}

#[test]
fn io_stat_layout() {
    assert_eq!(size_of::<pspfirmware::types::SceIoStat>(), 0x58);
    assert_eq!(offset_of!(pspfirmware::types::SceIoStat, st_attr), 0x04);
    assert_eq!(offset_of!(pspfirmware::types::SceIoStat, st_size), 0x08);
    assert_eq!(offset_of!(pspfirmware::types::SceIoStat, st_ctime), 0x10);
    assert_eq!(offset_of!(pspfirmware::types::SceIoStat, st_mtime), 0x30);
    assert_eq!(offset_of!(pspfirmware::types::SceIoStat, st_private), 0x40);
}

#[test]
fn thread_info_prefix_layout() {
    assert_eq!(size_of::<pspfirmware::threadman::SceKernelSysClock>(), 8);
    assert_eq!(offset_of!(pspfirmware::threadman::SceKernelThreadInfo, name), 0x04);
    assert_eq!(offset_of!(pspfirmware::threadman::SceKernelThreadInfo, attr), 0x24);
    assert_eq!(offset_of!(pspfirmware::threadman::SceKernelThreadInfo, status), 0x28);
    assert_eq!(size_of::<pspfirmware::threadman::SceKernelSemaInfo>(), 56);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn thread_info_layout() {
    assert_eq!(size_of::<pspfirmware::threadman::SceKernelThreadInfo>(), 0x68);
    assert_eq!(offset_of!(pspfirmware::threadman::SceKernelThreadInfo, entry), 0x2C);
    assert_eq!(offset_of!(pspfirmware::threadman::SceKernelThreadInfo, run_clocks), 0x54);
    assert_eq!(offset_of!(pspfirmware::threadman::SceKernelThreadInfo, release_count), 0x64);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn thread_kinfo_prefix_layout() {
    use pspfirmware::threadman::SceKernelThreadKInfo;

    assert_eq!(offset_of!(SceKernelThreadKInfo, entry), 0x2C);
    assert_eq!(offset_of!(SceKernelThreadKInfo, run_clocks), 0x60);
}

#[cfg(all(target_pointer_width = "32", not(psp_fw_ge_200)))]
#[test]
fn thread_kinfo_layout() {
    use pspfirmware::threadman::SceKernelThreadKInfo;

    assert_eq!(size_of::<SceKernelThreadKInfo>(), 136);
    assert_eq!(offset_of!(SceKernelThreadKInfo, release_count), 0x70);
}

#[cfg(all(target_pointer_width = "32", psp_fw_ge_200))]
#[test]
fn thread_kinfo_layout() {
    use pspfirmware::threadman::SceKernelThreadKInfo;

    assert_eq!(size_of::<SceKernelThreadKInfo>(), 140);
    assert_eq!(offset_of!(SceKernelThreadKInfo, unk3), 0x68);
    assert_eq!(offset_of!(SceKernelThreadKInfo, release_count), 0x74);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn sys_event_handler_layout() {
    use pspfirmware::sysevent::PspSysEventHandler;

    assert_eq!(size_of::<PspSysEventHandler>(), 64);
    assert_eq!(offset_of!(PspSysEventHandler, handler), 0x0C);
    assert_eq!(offset_of!(PspSysEventHandler, next), 0x18);
    assert_eq!(offset_of!(PspSysEventHandler, reserved), 0x1C);
}

#[test]
fn reg_param_layout() {
    assert_eq!(size_of::<pspfirmware::reg::SceRegParam>(), 0x110);
    assert_eq!(offset_of!(pspfirmware::reg::SceRegParam, name), 0x04);
    assert_eq!(offset_of!(pspfirmware::reg::SceRegParam, namelen), 0x104);
    assert_eq!(offset_of!(pspfirmware::reg::SceRegParam, unk3), 0x10C);
}

#[test]
fn mp3_init_arg_prefix_layout() {
    assert_eq!(offset_of!(pspfirmware::mp3::SceMp3InitArg, mp3_stream_end), 0x08);
    assert_eq!(offset_of!(pspfirmware::mp3::SceMp3InitArg, mp3_buf), 0x10);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn mp3_init_arg_layout() {
    assert_eq!(size_of::<pspfirmware::mp3::SceMp3InitArg>(), 0x20);
    assert_eq!(offset_of!(pspfirmware::mp3::SceMp3InitArg, pcm_buf), 0x18);
    assert_eq!(offset_of!(pspfirmware::mp3::SceMp3InitArg, pcm_buf_size), 0x1C);
}

#[test]
fn kermit_request_args_are_u64() {
    assert_eq!(
        size_of::<[u64; pspfirmware::kermit::KERMIT_MAX_ARGC]>(),
        14 * 8
    );
    assert_eq!(offset_of!(pspfirmware::kermit::SceKermitRequest, sema_id), 0x04);
    assert_eq!(offset_of!(pspfirmware::kermit::SceKermitRequest, response), 0x08);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn kermit_request_layout() {
    assert_eq!(size_of::<pspfirmware::kermit::SceKermitRequest>(), 0x80);
    assert_eq!(offset_of!(pspfirmware::kermit::SceKermitRequest, args), 0x10);
    assert_eq!(size_of::<pspfirmware::kermit::SceKermitResponse>(), 0x20);
    assert_eq!(size_of::<pspfirmware::kermit::KermitPacket>(), 0x10);
}

#[test]
fn module_layouts() {
    assert_eq!(size_of::<pspfirmware::modulemgr::SceKernelModuleInfo>(), 96);
    assert_eq!(offset_of!(pspfirmware::modulemgr::SceKernelModuleInfo, entry_addr), 40);
    assert_eq!(offset_of!(pspfirmware::modulemgr::SceKernelModuleInfo, name), 68);
    assert_eq!(size_of::<pspfirmware::modulemgr::SceKernelLMOption>(), 20);
    assert_eq!(size_of::<pspfirmware::modulemgr::SceKernelSMOption>(), 20);
}

#[test]
fn crypto_context_layouts() {
    assert_eq!(size_of::<pspfirmware::utils::SceKernelUtilsMt19937Context>(), 2500);
    assert_eq!(size_of::<pspfirmware::utils::SceKernelUtilsMd5Context>(), 96);
    assert_eq!(offset_of!(pspfirmware::utils::SceKernelUtilsMd5Context, ull_total_len), 24);
    assert_eq!(size_of::<pspfirmware::utils::SceKernelUtilsSha1Context>(), 96);
    assert_eq!(offset_of!(pspfirmware::utils::SceKernelUtilsSha1Context, buf), 32);
    assert_eq!(size_of::<pspfirmware::amctrl::SceMacKey>(), 40);
    assert_eq!(size_of::<pspfirmware::amctrl::SceCipherKey>(), 24);
    assert_eq!(size_of::<pspfirmware::chnnlsv::SceSdContext1>(), 40);
    assert_eq!(size_of::<pspfirmware::chnnlsv::SceSdContext2>(), 24);
}

#[test]
fn misc_layouts() {
    assert_eq!(size_of::<pspfirmware::types::pspUtilityDialogCommon>(), 48);
    assert_eq!(size_of::<pspfirmware::types::PspDebugProfilerRegs>(), 80);
    assert_eq!(size_of::<pspfirmware::paf::SceRcoEntry>(), 40);
    assert_eq!(size_of::<pspfirmware::openpsid::SceOpenPSID>(), 16);
    assert_eq!(size_of::<pspfirmware::umd::SceUmdInfo>(), 8);
    assert_eq!(size_of::<pspfirmware::utility::pspUtilityNetconfAdhoc>(), 12);
    assert_eq!(size_of::<pspfirmware::mpeg::SceMpegAu>(), 24);
    assert_eq!(size_of::<pspfirmware::mpeg::SceMpegAvcMode>(), 8);
}

#[test]
fn mpeg_base_buffers_are_cache_aligned() {
    assert_eq!(align_of::<pspfirmware::mpegbase::SceMpegLLI>(), 64);
    assert_eq!(align_of::<pspfirmware::mpegbase::SceMpegYCrCbBuffer>(), 64);
    assert_eq!(size_of::<pspfirmware::mpegbase::SceMpegLLI>() % 64, 0);
}
