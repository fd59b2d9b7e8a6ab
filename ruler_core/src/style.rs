// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler styling and host-facing configuration.
//!
//! Tick lengths and label sizes per subdivision are fixed (see
//! [`SubdivisionClass`](crate::SubdivisionClass)); this only covers paint, padding and the
//! label visibility policy.

use peniko::Brush;
use peniko::color::palette::css;

/// A paint + width pair for stroked lines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in device pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Ruler styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct RulerStyle {
    /// Stroke for tick marks.
    pub tick_stroke: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Stroke for the measurement cursor line.
    pub cursor_stroke: StrokeStyle,
    /// Fill paint for the measurement readout.
    pub readout_fill: Brush,
    /// Gap between a tick's far end and its label, in sp.
    pub label_padding_sp: f64,
    /// Font size of the measurement readout, in sp.
    pub readout_font_size_sp: f64,
    /// Whether eighth and sixteenth labels are drawn.
    pub display_all_labels: bool,
}

impl Default for RulerStyle {
    fn default() -> Self {
        let tick_stroke = StrokeStyle::default();
        Self {
            label_fill: tick_stroke.brush.clone(),
            readout_fill: tick_stroke.brush.clone(),
            tick_stroke,
            cursor_stroke: StrokeStyle::solid(css::RED, 2.0),
            label_padding_sp: 2.0,
            readout_font_size_sp: 24.0,
            display_all_labels: false,
        }
    }
}

impl RulerStyle {
    /// Set the tick stroke.
    pub fn with_tick_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.tick_stroke = stroke;
        self
    }

    /// Set the tick label fill.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Set the cursor stroke.
    pub fn with_cursor_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.cursor_stroke = stroke;
        self
    }

    /// Set the readout fill.
    pub fn with_readout_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.readout_fill = fill.into();
        self
    }

    /// Set the label padding in sp.
    pub fn with_label_padding(mut self, padding_sp: f64) -> Self {
        self.label_padding_sp = padding_sp;
        self
    }

    /// Set the readout font size in sp.
    pub fn with_readout_font_size(mut self, font_size_sp: f64) -> Self {
        self.readout_font_size_sp = font_size_sp;
        self
    }

    /// Show or hide eighth and sixteenth labels.
    pub fn with_display_all_labels(mut self, display_all_labels: bool) -> Self {
        self.display_all_labels = display_all_labels;
        self
    }
}
