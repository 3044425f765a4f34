// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

//! System utility dialogs. Each parameter block starts with a
//! [`crate::types::pspUtilityDialogCommon`] header.

pub mod htmlviewer;
pub mod netconf;

pub use self::{htmlviewer::*, netconf::*};
