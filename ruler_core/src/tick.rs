// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick planning.
//!
//! The planner lays graduations out in ruler-local coordinates: `x` runs along the ruler from
//! its origin and `y` runs across it from the near edge. Mapping onto the drawing surface is
//! left to [`RenderPlan`](crate::RenderPlan), so a tick sequence can be reused across redraws
//! until the surface size or the metrics change.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

use crate::metrics::UnitScale;
use crate::subdivision::{SubdivisionClass, TICKS_PER_INCH};

/// One graduation of the ruler.
///
/// Ticks are produced by [`TickPlanner::generate`] and never modified afterwards; a change of
/// size or metrics replaces the whole sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in the generated sequence.
    pub index: usize,
    /// Position within the enclosing inch, `0..16`. Rank 0 is an inch boundary.
    pub rank: u8,
    /// Number of whole inches before this tick (`index / 16`).
    pub whole_inches: usize,
    /// Distance from the ruler origin in inches (`index / 16`, continuous).
    pub inches: f64,
    /// Subdivision class of [`Tick::rank`].
    pub class: SubdivisionClass,
    /// Tick length in dp.
    pub tick_length: f64,
    /// Label font size in sp.
    pub font_size: f64,
    /// Cached label text.
    pub label: String,
    /// Near end of the tick mark, in ruler-local device pixels (`y` is always 0).
    pub position: Point,
    /// Far end of the tick mark, in ruler-local device pixels.
    pub end: Point,
    /// Label anchor, in ruler-local device pixels.
    pub label_position: Point,
}

impl Tick {
    /// Whether this tick's label is drawn under the given visibility policy.
    #[must_use]
    pub fn label_visible(&self, display_all_labels: bool) -> bool {
        (display_all_labels || !self.class.is_detail())
            && !self.label.is_empty()
            && self.font_size > 0.0
    }
}

/// Upper bound on the number of ticks in one sequence (4096 inches).
///
/// Densities close to zero would otherwise ask for more ticks than can be allocated.
pub const MAX_TICKS: usize = 1 << 16;

/// Generates tick sequences for a given density and length.
///
/// Generation is pure: the same planner and inputs always produce identical output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPlanner {
    /// Conversion used for tick lengths (dp) and label padding (sp).
    pub units: UnitScale,
    /// Gap between a tick's far end and its label anchor, in sp.
    ///
    /// The gap is applied along both axes: labels start just past the far end of the tick and
    /// slightly ahead of it along the ruler.
    pub label_padding: f64,
}

impl Default for TickPlanner {
    fn default() -> Self {
        Self::new(UnitScale::IDENTITY)
    }
}

impl TickPlanner {
    /// Creates a planner for the given logical-pixel scale with a 2 sp label padding.
    pub fn new(units: UnitScale) -> Self {
        Self {
            units,
            label_padding: 2.0,
        }
    }

    /// Set the label padding in sp.
    pub fn with_label_padding(mut self, label_padding: f64) -> Self {
        self.label_padding = label_padding;
        self
    }

    /// Number of ticks that fit in `available_length` pixels at `pixels_per_inch`.
    ///
    /// The last partial sixteenth is dropped. Non-positive or non-finite inputs fit no ticks, and
    /// the result never exceeds [`MAX_TICKS`].
    #[must_use]
    pub fn tick_count(pixels_per_inch: f64, available_length: f64) -> usize {
        if !(pixels_per_inch.is_finite() && pixels_per_inch > 0.0) {
            return 0;
        }
        if !(available_length.is_finite() && available_length > 0.0) {
            return 0;
        }
        let step = pixels_per_inch / TICKS_PER_INCH as f64;
        #[cfg(not(feature = "std"))]
        let count = FloatExt::floor(available_length / step);
        #[cfg(feature = "std")]
        let count = (available_length / step).floor();
        if count.is_nan() || count < 1.0 {
            return 0;
        }
        let count = count.min(MAX_TICKS as f64);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "count is floored and clamped to MAX_TICKS"
        )]
        {
            count as usize
        }
    }

    /// Generates one tick every sixteenth of an inch from the origin up to `available_length`.
    pub fn generate(&self, pixels_per_inch: f64, available_length: f64) -> Vec<Tick> {
        let count = Self::tick_count(pixels_per_inch, available_length);
        let step = pixels_per_inch / TICKS_PER_INCH as f64;
        let padding = self.units.sp(self.label_padding);

        let mut out = Vec::with_capacity(count);
        // Positions accumulate by `step` rather than being recomputed as `i * step`.
        let mut along = 0.0_f64;
        for index in 0..count {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "index % 16 always fits in a u8"
            )]
            let rank = (index % TICKS_PER_INCH) as u8;
            let whole_inches = index / TICKS_PER_INCH;
            let class = SubdivisionClass::classify(rank);
            let tick_length = class.tick_length_dp();
            let extent = self.units.dp(tick_length);

            out.push(Tick {
                index,
                rank,
                whole_inches,
                inches: index as f64 / TICKS_PER_INCH as f64,
                class,
                tick_length,
                font_size: class.font_size_sp(),
                label: class.label(rank, whole_inches),
                position: Point::new(along, 0.0),
                end: Point::new(along, extent),
                // Labels lead their tick so the origin label stays on the surface in portrait.
                label_position: Point::new(along + padding, extent + padding),
            });
            along += step;
        }
        out
    }
}
