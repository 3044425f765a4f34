// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Kernel error codes shared by the thread, memory and module managers.

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum SceKernelErrorCode {
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
}
