// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! Helpers exported by the system UI framework module.

#[cfg(not(feature = "kernel"))]
use core::ffi::{c_char, c_void};

#[cfg(not(feature = "kernel"))]
use crate::types::SceSize;

pub type wchar_t = u32;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceRcoEntry {
    pub id: u8,
    pub r#type: u8,
    pub unk1: u16,
    pub label: u32,
    pub param: u32,
    pub first_child: u32,
    pub child_count: i32,
    pub next_entry: u32,
    pub prev_entry: u32,
    pub parent: u32,
    pub unknown: [u32; 2],
}

#[cfg(not(feature = "kernel"))]
#[cfg_attr(target_os = "psp", link(name = "psppaf"))]
extern "C" {
    pub fn sce_paf_private_strchr(s: *const c_char, c: i32) -> *mut c_char;
    pub fn sce_paf_private_strcpy(dst: *mut c_char, src: *const c_char) -> *mut c_char;
    pub fn sce_paf_private_strncpy(dst: *mut c_char, src: *const c_char, n: i32) -> *mut c_char;
    pub fn sce_paf_private_strrchr(s: *const c_char, c: i32) -> *mut c_char;
    pub fn sce_paf_private_snprintf(
        buf: *mut c_char,
        size: SceSize,
        format: *const c_char,
        ...
    ) -> i32;
    pub fn sce_paf_private_sprintf(buf: *mut c_char, format: *const c_char, ...) -> i32;
    pub fn sce_paf_private_strcasecmp(a: *const c_char, b: *const c_char) -> i32;
    pub fn sce_paf_private_strcmp(a: *const c_char, b: *const c_char) -> i32;
    pub fn sce_paf_private_strlen(s: *mut c_char) -> i32;
    pub fn sce_paf_private_strncasecmp(a: *const c_char, b: *const c_char, n: SceSize) -> i32;
    pub fn sce_paf_private_strncmp(a: *const c_char, b: *const c_char, n: i32) -> i32;
    pub fn sce_paf_private_strpbrk(s: *const c_char, accept: *const c_char) -> i32;
    pub fn sce_paf_private_strtoul(s: *const c_char, end: *mut *mut c_char, base: i32) -> i32;
    pub fn sce_paf_private_wcslen(s: *mut wchar_t) -> i32;
    pub fn sce_paf_private_malloc(size: i32) -> *mut c_void;
    pub fn sce_paf_private_memcpy(dst: *mut c_void, src: *mut c_void, n: i32) -> *mut c_void;
    pub fn sce_paf_private_memset(dst: *mut c_void, c: c_char, n: i32) -> *mut c_void;
    pub fn sce_paf_private_free(ptr: *mut c_void);
    pub fn PAF_Resource_GetPageNodeByID(
        resource: *mut c_void,
        name: *mut c_char,
        entry: *mut *mut SceRcoEntry,
    ) -> i32;
    pub fn PAF_Resource_ResolveRefWString(
        resource: *mut c_void,
        data: *mut u32,
        a2: *mut i32,
        a3: *mut *mut c_char,
        a4: *mut i32,
    ) -> i32;
    pub fn scePafGetText(resource: *mut c_void, name: *mut c_char) -> *mut wchar_t;
}

#[cfg(not(feature = "kernel"))]
pub use self::{
    sce_paf_private_free as paf_free,
    sce_paf_private_malloc as paf_malloc,
    sce_paf_private_memcpy as paf_memcpy,
    sce_paf_private_memset as paf_memset,
    sce_paf_private_snprintf as paf_snprintf,
    sce_paf_private_sprintf as paf_sprintf,
    sce_paf_private_strcasecmp as paf_strcasecmp,
    sce_paf_private_strchr as paf_strchr,
    sce_paf_private_strcmp as paf_strcmp,
    sce_paf_private_strcpy as paf_strcpy,
    sce_paf_private_strlen as paf_strlen,
    sce_paf_private_strncasecmp as paf_strncasecmp,
    sce_paf_private_strncmp as paf_strncmp,
    sce_paf_private_strncpy as paf_strncpy,
    sce_paf_private_strpbrk as paf_strpbrk,
    sce_paf_private_strrchr as paf_strrchr,
    sce_paf_private_strtoul as paf_strtoul,
    sce_paf_private_wcslen as paf_wcslen,
};
