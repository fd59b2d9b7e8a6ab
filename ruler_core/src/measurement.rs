// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven measurement.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Unit suffix of the measurement readout.
pub const UNIT_LABEL: &str = "in.";

/// Tracks the measurement cursor along the ruler's primary axis.
///
/// The cursor is a distance in device pixels from the ruler origin. It is updated on pointer
/// down and pointer move and stays where it was last touched after the pointer is released.
/// Values are stored as given; nothing is clamped to the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasurementTracker {
    cursor: f64,
}

impl MeasurementTracker {
    /// Creates a tracker with the cursor at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `position` pixels from the origin.
    pub fn update(&mut self, position: f64) {
        self.cursor = position;
    }

    /// The stored cursor position in pixels.
    #[must_use]
    pub fn read(&self) -> f64 {
        self.cursor
    }

    /// The cursor position in inches.
    ///
    /// Returns `0.0` when `pixels_per_inch` is not a positive finite density.
    #[must_use]
    pub fn to_inches(&self, pixels_per_inch: f64) -> f64 {
        if pixels_per_inch.is_finite() && pixels_per_inch > 0.0 {
            self.cursor / pixels_per_inch
        } else {
            0.0
        }
    }

    /// The readout text, e.g. `"0.50 in."`.
    ///
    /// Always two decimal places with a `.` separator.
    pub fn format_inches(&self, pixels_per_inch: f64) -> String {
        format!("{:.2} {UNIT_LABEL}", self.to_inches(pixels_per_inch))
    }
}
