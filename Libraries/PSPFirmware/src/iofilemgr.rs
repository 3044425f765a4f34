// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

use core::ffi::{c_char, c_long, c_void};

use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::types::{SceInt64, SceIoDirent, SceIoStat, SceMode, SceOff, SceSize, SceUID};

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum IoAssignPerms {
    ReadWrite = 0,
    ReadOnly = 1,
}

bitflags! {
    /// Flags for `sceIoOpen`.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IoOpenFlags: i32 {
        const RDONLY = 0x0001;
        const WRONLY = 0x0002;
        const RDWR = 0x0003;
        const NBLOCK = 0x0004;
        const DIROPEN = 0x0008;
        const APPEND = 0x0100;
        const CREAT = 0x0200;
        const TRUNC = 0x0400;
        const EXCL = 0x0800;
        const NOWAIT = 0x8000;
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum IoWhence {
    Set = 0,
    Cur = 1,
    End = 2,
}

bitflags! {
    /// `st_mode` bits of [`SceIoStat`].
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IoStatMode: i32 {
        const IFLNK = 0x4000;
        const IFDIR = 0x1000;
        const IFREG = 0x2000;
        const ISUID = 0x0800;
        const ISGID = 0x0400;
        const ISVTX = 0x0200;
        const IRUSR = 0x0100;
        const IWUSR = 0x0080;
        const IXUSR = 0x0040;
        const IRGRP = 0x0020;
        const IWGRP = 0x0010;
        const IXGRP = 0x0008;
        const IROTH = 0x0004;
        const IWOTH = 0x0002;
        const IXOTH = 0x0001;
        const IRWXU = 0x01C0;
        const IRWXG = 0x0038;
        const IRWXO = 0x0007;
    }
}

pub const FIO_S_IFMT: i32 = 0xF000;

bitflags! {
    /// `st_attr` bits of [`SceIoStat`].
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IoStatAttr: u32 {
        const IFLNK = 0x0008;
        const IFDIR = 0x0010;
        const IFREG = 0x0020;
        const IROTH = 0x0004;
        const IWOTH = 0x0002;
        const IXOTH = 0x0001;
    }
}

pub const FIO_SO_IFMT: u32 = 0x0038;

bitflags! {
    /// Fields `sceIoChstat` should apply.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct IoChstatBits: i32 {
        const MODE = 0x0001;
        const ATTR = 0x0002;
        const SIZE = 0x0004;
        const CT = 0x0008;
        const AT = 0x0010;
        const MT = 0x0020;
        const PRVT = 0x0040;
    }
}

impl SceIoStat {
    #[inline]
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.st_mode & FIO_S_IFMT == IoStatMode::IFDIR.bits()
    }

    #[inline]
    #[must_use]
    pub const fn is_file(&self) -> bool {
        self.st_mode & FIO_S_IFMT == IoStatMode::IFREG.bits()
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PspIoDrvArg {
    pub drv: *mut PspIoDrv,
    pub arg: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PspIoDrvFileArg {
    pub unk1: u32,
    pub fs_num: u32,
    pub drv: *mut PspIoDrvArg,
    pub unk2: u32,
    pub arg: *mut c_void,
}

/// Entry points of an I/O driver registered with `sceIoAddDrv`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct PspIoDrvFuncs {
    pub io_init: Option<unsafe extern "C" fn(arg: *mut PspIoDrvArg) -> i32>,
    pub io_exit: Option<unsafe extern "C" fn(arg: *mut PspIoDrvArg) -> i32>,
    pub io_open:
        Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, file: *mut c_char, flags: i32, mode: SceMode) -> i32>,
    pub io_close: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg) -> i32>,
    pub io_read: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, data: *mut c_char, len: i32) -> i32>,
    pub io_write: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, data: *const c_char, len: i32) -> i32>,
    pub io_lseek: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, ofs: SceOff, whence: i32) -> SceOff>,
    pub io_ioctl: Option<
        unsafe extern "C" fn(
            arg: *mut PspIoDrvFileArg,
            cmd: u32,
            indata: *mut c_void,
            inlen: i32,
            outdata: *mut c_void,
            outlen: i32,
        ) -> i32,
    >,
    pub io_remove: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, name: *const c_char) -> i32>,
    pub io_mkdir: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, name: *const c_char, mode: SceMode) -> i32>,
    pub io_rmdir: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, name: *const c_char) -> i32>,
    pub io_dopen: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, dirname: *const c_char) -> i32>,
    pub io_dclose: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg) -> i32>,
    pub io_dread: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, dir: *mut SceIoDirent) -> i32>,
    pub io_getstat:
        Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, file: *const c_char, stat: *mut SceIoStat) -> i32>,
    pub io_chstat: Option<
        unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, file: *const c_char, stat: *mut SceIoStat, bits: i32) -> i32,
    >,
    pub io_rename:
        Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, oldname: *const c_char, newname: *const c_char) -> i32>,
    pub io_chdir: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg, dir: *const c_char) -> i32>,
    pub io_mount: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg) -> i32>,
    pub io_umount: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg) -> i32>,
    pub io_devctl: Option<
        unsafe extern "C" fn(
            arg: *mut PspIoDrvFileArg,
            devname: *const c_char,
            cmd: u32,
            indata: *mut c_void,
            inlen: i32,
            outdata: *mut c_void,
            outlen: i32,
        ) -> i32,
    >,
    pub io_unk21: Option<unsafe extern "C" fn(arg: *mut PspIoDrvFileArg) -> i32>,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PspIoDrv {
    /// Device name without the colon, e.g. `ms`.
    pub name: *const c_char,
    pub dev_type: u32,
    pub unk2: u32,
    pub name2: *const c_char,
    pub funcs: *mut PspIoDrvFuncs,
}

#[cfg_attr(all(target_os = "psp", not(feature = "kernel")), link(name = "pspiofilemgr_user"))]
#[cfg_attr(all(target_os = "psp", feature = "kernel"), link(name = "pspiofilemgr_kernel"))]
extern "C" {
    /// Open or create a file. Returns a file descriptor, `< 0` on error.
    pub fn sceIoOpen(file: *const c_char, flags: i32, mode: SceMode) -> SceUID;
    pub fn sceIoOpenAsync(file: *const c_char, flags: i32, mode: SceMode) -> SceUID;
    pub fn sceIoClose(fd: SceUID) -> i32;
    pub fn sceIoCloseAsync(fd: SceUID) -> i32;
    /// Returns the number of bytes read.
    pub fn sceIoRead(fd: SceUID, data: *mut c_void, size: SceSize) -> i32;
    pub fn sceIoReadAsync(fd: SceUID, data: *mut c_void, size: SceSize) -> i32;
    /// Returns the number of bytes written.
    pub fn sceIoWrite(fd: SceUID, data: *const c_void, size: SceSize) -> i32;
    pub fn sceIoWriteAsync(fd: SceUID, data: *const c_void, size: SceSize) -> i32;
    /// Returns the new absolute position.
    pub fn sceIoLseek(fd: SceUID, offset: SceOff, whence: i32) -> SceOff;
    pub fn sceIoLseekAsync(fd: SceUID, offset: SceOff, whence: i32) -> i32;
    pub fn sceIoLseek32(fd: SceUID, offset: i32, whence: i32) -> i32;
    pub fn sceIoLseek32Async(fd: SceUID, offset: i32, whence: i32) -> i32;
    pub fn sceIoRemove(file: *const c_char) -> i32;
    pub fn sceIoMkdir(dir: *const c_char, mode: SceMode) -> i32;
    pub fn sceIoRmdir(path: *const c_char) -> i32;
    pub fn sceIoChdir(path: *const c_char) -> i32;
    pub fn sceIoRename(oldname: *const c_char, newname: *const c_char) -> i32;
    pub fn sceIoDopen(dirname: *const c_char) -> SceUID;
    /// Read the next entry. Returns `> 0` while entries remain, 0 at the end.
    pub fn sceIoDread(fd: SceUID, dir: *mut SceIoDirent) -> i32;
    pub fn sceIoDclose(fd: SceUID) -> i32;
    pub fn sceIoDevctl(
        dev: *const c_char,
        cmd: u32,
        indata: *mut c_void,
        inlen: i32,
        outdata: *mut c_void,
        outlen: i32,
    ) -> i32;
    /// Assign a filesystem to a device, e.g. `flash0:` onto `lflash0:0,0`.
    pub fn sceIoAssign(
        dev1: *const c_char,
        dev2: *const c_char,
        dev3: *const c_char,
        mode: i32,
        unk1: *mut c_void,
        unk2: c_long,
    ) -> i32;
    pub fn sceIoUnassign(dev: *const c_char) -> i32;
    pub fn sceIoGetstat(file: *const c_char, stat: *mut SceIoStat) -> i32;
    pub fn sceIoChstat(file: *const c_char, stat: *mut SceIoStat, bits: i32) -> i32;
    pub fn sceIoIoctl(
        fd: SceUID,
        cmd: u32,
        indata: *mut c_void,
        inlen: i32,
        outdata: *mut c_void,
        outlen: i32,
    ) -> i32;
    pub fn sceIoIoctlAsync(
        fd: SceUID,
        cmd: u32,
        indata: *mut c_void,
        inlen: i32,
        outdata: *mut c_void,
        outlen: i32,
    ) -> i32;
    pub fn sceIoSync(device: *const c_char, unk: u32) -> i32;
    /// Wait for an asynchronous operation. Its result lands in `res`.
    pub fn sceIoWaitAsync(fd: SceUID, res: *mut SceInt64) -> i32;
    pub fn sceIoWaitAsyncCB(fd: SceUID, res: *mut SceInt64) -> i32;
    /// Returns 1 while the operation is still running.
    pub fn sceIoPollAsync(fd: SceUID, res: *mut SceInt64) -> i32;
    pub fn sceIoGetAsyncStat(fd: SceUID, poll: i32, res: *mut SceInt64) -> i32;
    pub fn sceIoCancel(fd: SceUID) -> i32;
    pub fn sceIoGetDevType(fd: SceUID) -> i32;
    pub fn sceIoChangeAsyncPriority(fd: SceUID, pri: i32) -> i32;
    pub fn sceIoSetAsyncCallback(fd: SceUID, cb: SceUID, argp: *mut c_void) -> i32;
}

#[cfg(feature = "kernel")]
#[cfg_attr(target_os = "psp", link(name = "pspiofilemgr_kernel"))]
extern "C" {
    pub fn sceIoAddDrv(drv: *mut PspIoDrv) -> i32;
    pub fn sceIoDelDrv(drv_name: *const c_char) -> i32;
    pub fn sceIoReopen(file: *const c_char, flags: i32, mode: SceMode, fd: SceUID) -> i32;
    pub fn sceIoGetThreadCwd(uid: SceUID, dir: *mut c_char, len: i32) -> i32;
    pub fn sceIoChangeThreadCwd(uid: SceUID, dir: *mut c_char) -> i32;
}
