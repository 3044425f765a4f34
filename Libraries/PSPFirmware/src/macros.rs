// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

macro_rules! sized_params {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::SizedParam for $ty {
                fn sized() -> Self {
                    // SAFETY: integers, raw pointers and nullable fn pointers only.
                    let mut v: Self = unsafe { core::mem::zeroed() };
                    v.size = core::mem::size_of::<Self>() as _;
                    v
                }
            }
        )+
    };
}

macro_rules! named_objects {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Object name up to the first NUL.
                #[must_use]
                pub fn name(&self) -> &[u8] {
                    $crate::types::until_nul(&self.name)
                }
            }
        )+
    };
}
