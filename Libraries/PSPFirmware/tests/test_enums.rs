// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#![deny(warnings, clippy::nursery, unused_extern_crates)]

macro_rules! assert_values {
    ($ty:ty as $repr:ty { $($variant:ident = $value:expr),+ $(,)? }) => {
        $(
            let raw: $repr = $value;
            assert_eq!(<$repr>::from(<$ty>::$variant), raw, stringify!($variant));
            assert_eq!(<$ty>::try_from(raw).ok(), Some(<$ty>::$variant));
        )+
    };
}

#[test]
fn amctrl_key_enums() {
    assert_values!(pspfirmware::amctrl::SceMacKeyType as i32 {
        Unk0 = 0,
        Unk1 = 1,
        FuseId = 2,
        Fixed = 3,
        Unk6 = 6,
    });

    assert_values!(pspfirmware::amctrl::SceCipherKeyType as i32 {
        Fixed = 1,
        FuseId = 2,
    });

    assert_values!(pspfirmware::amctrl::SceCipherKeyMode as i32 {
        Encrypt = 1,
        Decrypt = 2,
    });
}

#[test]
fn atrac_enums() {
    assert_values!(pspfirmware::atrac3::SceAtracErrorCode as u32 {
        ParamFail = 0x8063_0001,
        ApiFail = 0x8063_0002,
        NoAtracId = 0x8063_0003,
        BadCodecType = 0x8063_0004,
        BadAtracId = 0x8063_0005,
        UnknownFormat = 0x8063_0006,
        UnmatchFormat = 0x8063_0007,
        BadData = 0x8063_0008,
        AllDataIsOnMemory = 0x8063_0009,
        UnsetData = 0x8063_0010,
        ReadSizeIsTooSmall = 0x8063_0011,
        NeedSecondBuffer = 0x8063_0012,
        ReadSizeOverBuffer = 0x8063_0013,
        Not4ByteAlignment = 0x8063_0014,
        BadSample = 0x8063_0015,
        WriteByteFirstBuffer = 0x8063_0016,
        WriteByteSecondBuffer = 0x8063_0017,
        AddDataIsTooBig = 0x8063_0018,
        UnsetParam = 0x8063_0021,
        NoNeedSecondBuffer = 0x8063_0022,
        NoDataInBuffer = 0x8063_0023,
        AllDataWasDecoded = 0x8063_0024,
    });

    assert_values!(pspfirmware::atrac3::SceAtracCodecType as u32 {
        At3Plus = 0x1000,
        At3 = 0x1001,
    });

    assert_values!(pspfirmware::atrac3::SceAtracRemainFrameStatus as i32 {
        AllDataIsOnMemory = -1,
        NonLoopStreamDataIsOnMemory = -2,
        LoopStreamDataIsOnMemory = -3,
    });
}

#[test]
fn audio_enums() {
    assert_values!(pspfirmware::audio::SceAudioErrorCode as u32 {
        NotInitialized = 0x8026_0001,
        OutputBusy = 0x8026_0002,
        InvalidCh = 0x8026_0003,
        PrivRequired = 0x8026_0004,
        NotFound = 0x8026_0005,
        InvalidSize = 0x8026_0006,
        InvalidFormat = 0x8026_0007,
        NotReserved = 0x8026_0008,
        NotOutput = 0x8026_0009,
        InvalidFrequency = 0x8026_000A,
        InvalidVolume = 0x8026_000B,
        InputBusy = 0x8026_0010,
    });

    assert_values!(pspfirmware::audio::PspAudioFormats as i32 {
        Stereo = 0,
        Mono = 0x10,
    });

    assert_values!(pspfirmware::audio::SceFrequencies as i32 {
        Freq48000 = 0xBB80,
        Freq44100 = 0xAC44,
        Freq32000 = 0x7D00,
        Freq24000 = 0x5DC0,
        Freq22050 = 0x5622,
        Freq16000 = 0x3E80,
        Freq12000 = 0x2EE0,
        Freq11050 = 0x2B2A,
        Freq8000 = 0x1F40,
    });
}

#[test]
fn codec_kinds() {
    assert_values!(pspfirmware::audiocodec::SceCodecKind as i32 {
        At3Plus = 0x1000,
        At3 = 0x1001,
        Mp3 = 0x1002,
        Aac = 0x1003,
    });
}

#[test]
fn display_enums() {
    assert_values!(pspfirmware::display::SceDisplayPixelFormats as i32 {
        Format565 = 0,
        Format5551 = 1,
        Format4444 = 2,
        Format8888 = 3,
    });

    assert_values!(pspfirmware::display::SceDisplaySetBufSync as i32 {
        NextHsync = 0,
        NextVsync = 1,
    });

    assert_values!(pspfirmware::display::SceDisplayMode as i32 {
        Lcd = 0,
        Vesa1A = 0x1A,
        PseudoVga = 0x60,
    });

    assert_values!(pspfirmware::display::SceDisplayErrorCode as u32 {
        Ok = 0,
        Pointer = 0x8000_0103,
        Argument = 0x8000_0107,
    });
}

#[test]
fn ge_enums() {
    assert_values!(pspfirmware::ge::PspGeMatrixTypes as i32 {
        Bone0 = 0,
        Bone1 = 1,
        Bone2 = 2,
        Bone3 = 3,
        Bone4 = 4,
        Bone5 = 5,
        Bone6 = 6,
        Bone7 = 7,
        World = 8,
        View = 9,
        Projection = 10,
        TexGen = 11,
    });

    assert_values!(pspfirmware::ge::PspGeListState as i32 {
        Done = 0,
        Queued = 1,
        DrawingDone = 2,
        StallReached = 3,
        CancelDone = 4,
    });
}

#[test]
fn impose_params() {
    assert_values!(pspfirmware::impose::SceImposeParam as i32 {
        MainVolume = 1,
        BacklightBrightness = 2,
        EqualizerMode = 4,
        Mute = 8,
        Avls = 0x10,
        TimeFormat = 0x20,
        DateFormat = 0x40,
        Language = 0x80,
        BacklightOffInterval = 0x200,
        SoundReduction = 0x400,
    });

    assert_values!(pspfirmware::impose::SceImposeUmdStatus as i32 {
        PopupDisabled = 0,
        PopupEnabled = 1,
    });
}

#[test]
fn io_enums() {
    assert_values!(pspfirmware::iofilemgr::IoAssignPerms as i32 {
        ReadWrite = 0,
        ReadOnly = 1,
    });

    assert_values!(pspfirmware::iofilemgr::IoWhence as i32 {
        Set = 0,
        Cur = 1,
        End = 2,
    });
}

#[test]
fn kermit_enums() {
    assert_values!(pspfirmware::kermit::KermitModes as u32 {
        None = 0,
        Unk1 = 1,
        Unk2 = 2,
        Msfs = 3,
        FlashFs = 4,
        AudioOut = 5,
        Me = 6,
        LowIo = 7,
        PocsUsbPspCm = 8,
        Peripheral = 9,
        Wlan = 10,
        AudioIn = 11,
        Usb = 12,
        Utility = 13,
        Extra1 = 14,
        Extra2 = 15,
    });

    assert_values!(pspfirmware::kermit::KermitPeripheralCmd as u32 {
        RtcGetCurrentTick = 0,
        IdStorageLookup = 1,
        PowerFrequency = 2,
        AudioRouting = 3,
        GetCameraDirection = 5,
        GetIdpscEnable = 6,
        DisableMultitasking = 7,
        ErrorExit = 8,
        ErrorExit2 = 0x422,
        EnableMultitasking = 9,
        ResumeDevice = 10,
        RequestSuspend = 11,
        IsFirstBoot = 12,
        GetPrefixSsid = 13,
        SetPsButtonState = 0x10,
    });

    assert_values!(pspfirmware::kermit::KermitMsfsCmd as u32 {
        InitMs = 0,
        ExitMs = 1,
        OpenMs = 2,
        CloseMs = 3,
        ReadMs = 4,
        WriteMs = 5,
        SeekMs = 6,
        IoctlMs = 7,
        RemoveMs = 8,
        MkdirMs = 9,
        RmdirMs = 10,
        DopenMs = 11,
        DcloseMs = 12,
        DreadMs = 13,
        GetstatMs = 14,
        ChstatMs = 15,
        RenameMs = 0x10,
        ChdirMs = 0x11,
        Devctl = 0x14,
    });

    assert_values!(pspfirmware::kermit::KermitAudioCmd as u32 {
        InitAudioIn = 0,
        Output1 = 1,
        Output2 = 2,
        SuspendAudio = 3,
        Resume = 4,
    });

    assert_values!(pspfirmware::kermit::KermitMeCmd as u32 {
        Unk0 = 0,
        SetAvcTimestampInternal = 1,
        BootStart = 2,
    });

    assert_values!(pspfirmware::kermit::KermitLowIoCmd as u32 {
        Unk9 = 9,
        UnkA = 10,
        UnkB = 11,
        UnkC = 12,
    });

    assert_values!(pspfirmware::kermit::KermitWlanCmd as u32 {
        Init = 0,
        GetSwitchInternalState = 2,
        GetEtherAddr = 3,
        AdhocCtlInit = 6,
        AdhocCtlTerm = 7,
        AdhocScan = 8,
        AdhocJoin = 9,
        AdhocCreate = 10,
        AdhocLeave = 11,
        AdhocTxData = 12,
        AdhocRxData = 13,
        InetInit = 14,
        InetStart = 15,
        InetTerm = 0x10,
        InetSocket = 0x11,
        InetClose = 0x12,
        InetBind = 0x13,
        InetListen = 0x14,
        InetConnect = 0x15,
        InetShutdown = 0x16,
        InetPoll = 0x17,
        InetAccept = 0x18,
        InetGetPeerName = 0x19,
        InetGetSockName = 0x1A,
        InetGetOpt = 0x1B,
        InetSetOpt = 0x1C,
        InetRecvFrom = 0x1D,
        InetSendtoInternal = 0x1E,
        InetSoIoctl = 0x1F,
        SuspendWlan = 0x20,
        SetWolParam = 0x22,
        GetWolInfo = 0x23,
        SetHostDiscover = 0x24,
    });

    assert_values!(pspfirmware::kermit::KermitUtilityCmd as u32 {
        OskStart = 0,
        OskShutdown = 1,
        OskUpdate = 3,
    });

    assert_values!(pspfirmware::kermit::KermitUsbCmd as u32 {
        Init = 0,
        Activate = 0x15,
        Deactivate = 0x16,
        SetOp = 0x19,
        SetOpBis = 0x1A,
        Unk1B = 0x1B,
    });

    assert_values!(pspfirmware::kermit::KermitVirtualInterrupts as u32 {
        None = 0,
        AudioCh1 = 1,
        AudioCh2 = 2,
        AudioCh3 = 3,
        MeDmaCh1 = 4,
        MeDmaCh2 = 5,
        MeDmaCh3 = 6,
        WlanCh1 = 7,
        WlanCh2 = 8,
        ImposeCh1 = 9,
        PowerCh1 = 10,
        UnknownCh1 = 11,
        UsbGpsCh1 = 12,
        UsbPspCmCh1 = 13,
    });

    assert_values!(pspfirmware::kermit::KermitArgumentModes as u32 {
        Input = 1,
        Output = 2,
    });
}

#[test]
fn kernel_error_codes() {
    assert_values!(pspfirmware::kerror::SceKernelErrorCode as u32 {
        Error = 0x8002_0001,
        NotImp = 0x8002_0002,
        IllegalContext = 0x8002_0064,
        UnknownUid = 0x8002_00CB,
        UnmatchUidType = 0x8002_00CC,
        IdNotExist = 0x8002_00CD,
        IllegalPerm = 0x8002_00D1,
        IllegalArgument = 0x8002_00D2,
        IllegalAddr = 0x8002_00D3,
        OutOfRange = 0x8002_00D4,
        IllegalPartition = 0x8002_00D6,
        MemblockAllocFailed = 0x8002_00D9,
        LinkErr = 0x8002_012C,
        IllegalObject = 0x8002_012D,
        UnknownModule = 0x8002_012E,
        NoFile = 0x8002_012F,
        FileErr = 0x8002_0130,
        AlreadyStarted = 0x8002_0133,
        NotStarted = 0x8002_0134,
        AlreadyStopped = 0x8002_0135,
        CanNotStop = 0x8002_0136,
        NotStopped = 0x8002_0137,
        NotRemovable = 0x8002_0138,
        IllegalPermCall = 0x8002_0149,
        NoMemory = 0x8002_0190,
        IllegalAttr = 0x8002_0191,
        IllegalEntry = 0x8002_0192,
        IllegalPriority = 0x8002_0193,
        IllegalStackSize = 0x8002_0194,
        IllegalMode = 0x8002_0195,
        IllegalMask = 0x8002_0196,
        IllegalThid = 0x8002_0197,
        UnknownThid = 0x8002_0198,
        UnknownSemid = 0x8002_0199,
        UnknownEvfid = 0x8002_019A,
        UnknownMbxid = 0x8002_019B,
        UnknownVplid = 0x8002_019C,
        UnknownFplid = 0x8002_019D,
        UnknownMppid = 0x8002_019E,
        UnknownAlmid = 0x8002_019F,
        UnknownTeid = 0x8002_01A0,
        UnknownCbid = 0x8002_01A1,
        Dormant = 0x8002_01A2,
        Suspend = 0x8002_01A3,
        NotDormant = 0x8002_01A4,
        NotSuspend = 0x8002_01A5,
        NotWait = 0x8002_01A6,
        CanNotWait = 0x8002_01A7,
        WaitTimeout = 0x8002_01A8,
        WaitCancel = 0x8002_01A9,
        ReleaseWait = 0x8002_01AA,
        NotifyCallback = 0x8002_01AB,
        ThreadTerminated = 0x8002_01AC,
        SemaZero = 0x8002_01AD,
        SemaOvf = 0x8002_01AE,
        EvfCond = 0x8002_01AF,
        EvfMulti = 0x8002_01B0,
        EvfIlpat = 0x8002_01B1,
        MboxNomsg = 0x8002_01B2,
        MppFull = 0x8002_01B3,
        MppEmpty = 0x8002_01B4,
        WaitDelete = 0x8002_01B5,
        IllegalMemblock = 0x8002_01B6,
        IllegalMemsize = 0x8002_01B7,
        IllegalType = 0x8002_01BB,
        IllegalSize = 0x8002_01BC,
        IllegalCount = 0x8002_01BD,
        UnknownVtid = 0x8002_01BE,
        IllegalVtid = 0x8002_01BF,
        IllegalKtlsid = 0x8002_01C0,
        KtlsFull = 0x8002_01C1,
        KtlsBusy = 0x8002_01C2,
    });
}

#[test]
fn mpeg_format_kinds() {
    assert_values!(pspfirmware::mpeg::SceMpegFormatKind as i32 {
        Default = -1,
        Format5650 = 0,
        Format5551 = 1,
        Format4444 = 2,
        Format8888 = 3,
    });
}

#[test]
fn power_tick_flags() {
    assert_values!(pspfirmware::power::ScePowerTickFlags as i32 {
        All = 0,
        Suspend = 1,
        Display = 6,
    });
}

#[test]
fn reg_key_types() {
    assert_values!(pspfirmware::reg::RegKeyTypes as u32 {
        Dir = 1,
        Int = 2,
        Str = 3,
        Bin = 4,
    });
}

#[test]
fn rtc_check_valid_results() {
    assert_values!(pspfirmware::rtc::SceRtcCheckValidErrors as i32 {
        InvalidYear = -1,
        InvalidMonth = -2,
        InvalidDay = -3,
        InvalidHour = -4,
        InvalidMinutes = -5,
        InvalidSeconds = -6,
        InvalidMicroseconds = -7,
    });
}

#[test]
fn thread_enums() {
    assert_values!(pspfirmware::threadman::SceKernelIdListType as u32 {
        Thread = 1,
        Semaphore = 2,
        EventFlag = 3,
        Mbox = 4,
        Vpl = 5,
        Fpl = 6,
        Mpipe = 7,
        Callback = 8,
        ThreadEventHandler = 9,
        Alarm = 10,
        VTimer = 11,
        SleepThread = 0x40,
        DelayThread = 0x41,
        SuspendThread = 0x42,
        DormantThread = 0x43,
    });

    assert_values!(pspfirmware::threadman::ThreadEventIds as u32 {
        All = 0xFFFF_FFFF,
        Kern = 0xFFFF_FFF8,
        User = 0xFFFF_FFF0,
        Current = 0,
    });
}

#[test]
fn umd_enums() {
    assert_values!(pspfirmware::umd::SceUmdTypes as u32 {
        Game = 0x10,
        Video = 0x20,
        Audio = 0x40,
    });

    assert_values!(pspfirmware::umd::UmdDriveStat as i32 {
        WaitForDisc = 2,
        WaitForInit = 0x20,
    });
}

#[test]
fn utility_dialog_enums() {
    assert_values!(pspfirmware::utility::pspUtilityHtmlViewerDisconnectModes as u32 {
        Enable = 0,
        Disable = 1,
        Confirm = 2,
    });

    assert_values!(pspfirmware::utility::pspUtilityHtmlViewerInterfaceModes as u32 {
        Full = 0,
        Limited = 1,
        None = 2,
    });

    assert_values!(pspfirmware::utility::pspUtilityHtmlViewerCookieModes as u32 {
        Disabled = 0,
        Enabled = 1,
        Confirm = 2,
        Default = 3,
    });

    assert_values!(pspfirmware::utility::pspUtilityHtmlViewerTextSizes as u32 {
        Large = 0,
        Normal = 1,
        Small = 2,
    });

    assert_values!(pspfirmware::utility::pspUtilityHtmlViewerDisplayModes as u32 {
        Normal = 0,
        Fit = 1,
        SmartFit = 2,
    });

    assert_values!(pspfirmware::utility::pspUtilityHtmlViewerConnectModes as u32 {
        Last = 0,
        ManualOnce = 1,
        ManualAll = 2,
    });

    assert_values!(pspfirmware::utility::pspUtilityNetconfActions as i32 {
        ConnectAp = 0,
        DisplayStatus = 1,
        ConnectAdhoc = 2,
    });
}

#[test]
fn vaudio_enums() {
    assert_values!(pspfirmware::vaudio::SceVaudioFormat as i32 {
        Mono = 1,
        Stereo = 2,
    });

    assert_values!(pspfirmware::vaudio::SceEffectType as i32 {
        Off = 0,
        Heavy = 1,
        Pops = 2,
        Jazz = 3,
        Unique = 4,
        Max = 5,
    });

    assert_values!(pspfirmware::vaudio::SceAlcMode as i32 {
        Off = 0,
        Mode1 = 1,
        ModeMax = 2,
    });
}
