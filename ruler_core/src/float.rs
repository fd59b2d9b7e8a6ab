// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::floor` is not available in `core`, so we dispatch to `libm` when `std` is off.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("ruler_core requires either the `std` or `libm` feature");
