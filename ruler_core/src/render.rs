// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-command assembly.
//!
//! A [`RenderPlan`] walks a cached tick sequence and the measurement cursor and produces the
//! flat list of line and text commands a drawing sink paints verbatim. It holds no state of its
//! own and is rebuilt for every redraw.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point, Size};
use peniko::Brush;

use crate::measurement::MeasurementTracker;
use crate::metrics::{Axis, DeviceMetrics, UnitScale};
use crate::style::{RulerStyle, StrokeStyle};
use crate::tick::Tick;
use crate::z_order;

/// Which way the ruler runs across the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Graduations run up the surface from its bottom edge, measured with `ydpi`.
    #[default]
    Portrait,
    /// Graduations run right from the surface's left edge, measured with `xdpi`.
    Landscape,
}

impl Orientation {
    /// Picks the orientation for a surface: landscape only when strictly wider than tall.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// The surface axis the graduations run along.
    #[must_use]
    pub fn primary_axis(self) -> Axis {
        match self {
            Self::Portrait => Axis::Y,
            Self::Landscape => Axis::X,
        }
    }

    /// Length of the surface along the primary axis.
    #[must_use]
    pub fn axis_length(self, size: Size) -> f64 {
        match self {
            Self::Portrait => size.height,
            Self::Landscape => size.width,
        }
    }

    /// Extent of the surface across the primary axis.
    #[must_use]
    pub fn cross_extent(self, size: Size) -> f64 {
        match self {
            Self::Portrait => size.width,
            Self::Landscape => size.height,
        }
    }

    /// Maps a ruler-local point (`x` along, `y` across) onto the surface.
    #[must_use]
    pub fn to_surface(self, local: Point, size: Size) -> Point {
        match self {
            Self::Portrait => Point::new(local.y, size.height - local.x),
            Self::Landscape => local,
        }
    }

    /// Distance of a surface point from the ruler origin along the primary axis.
    ///
    /// This is the inverse of [`Orientation::to_surface`] on the primary axis.
    #[must_use]
    pub fn to_axis(self, surface: Point, size: Size) -> f64 {
        match self {
            Self::Portrait => size.height - surface.y,
            Self::Landscape => surface.x,
        }
    }

    /// Baseline for tick labels, so labels sit ahead of their tick along the ruler.
    fn label_baseline(self) -> TextBaseline {
        match self {
            Self::Portrait => TextBaseline::Alphabetic,
            Self::Landscape => TextBaseline::Hanging,
        }
    }
}

/// Horizontal placement of text relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position.
    End,
}

/// Vertical placement of text relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is on the alphabetic baseline; text extends upwards.
    Alphabetic,
    /// The position is on the vertical middle of the text.
    Middle,
    /// The position is at the top of the text; text extends downwards.
    Hanging,
}

/// One instruction for the drawing sink, in surface device pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A stroked line segment.
    Line {
        /// Segment endpoints.
        line: Line,
        /// Stroke paint and width.
        stroke: StrokeStyle,
        /// Rendering order hint (see [`z_order`]).
        z_index: i32,
    },
    /// A single line of unshaped text.
    Text {
        /// Text content.
        content: String,
        /// Anchor point.
        position: Point,
        /// Font size in device pixels.
        font_size: f64,
        /// Horizontal anchor.
        anchor: TextAnchor,
        /// Vertical baseline.
        baseline: TextBaseline,
        /// Fill paint.
        fill: Brush,
        /// Rendering order hint (see [`z_order`]).
        z_index: i32,
    },
}

impl DrawCommand {
    /// The command's rendering order hint.
    #[must_use]
    pub fn z_index(&self) -> i32 {
        match self {
            Self::Line { z_index, .. } | Self::Text { z_index, .. } => *z_index,
        }
    }

    /// The text content, if this is a text command.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            Self::Line { .. } => None,
        }
    }
}

/// Everything needed to turn ticks and a cursor into draw commands for one surface.
#[derive(Clone, Debug)]
pub struct RenderPlan<'a> {
    /// Surface size in device pixels.
    pub size: Size,
    /// Ruler direction on the surface.
    pub orientation: Orientation,
    /// Physical pixels per inch along the primary axis.
    pub pixels_per_inch: f64,
    /// Font size conversion for labels and the readout.
    pub units: UnitScale,
    /// Paint and padding.
    pub style: &'a RulerStyle,
    /// Whether eighth and sixteenth labels are drawn.
    pub display_all_labels: bool,
}

impl<'a> RenderPlan<'a> {
    /// Creates a plan for a surface, choosing the orientation from its aspect ratio.
    ///
    /// The label policy starts from [`RulerStyle::display_all_labels`].
    pub fn new(size: Size, metrics: &DeviceMetrics, style: &'a RulerStyle) -> Self {
        let orientation = Orientation::from_size(size);
        Self {
            size,
            orientation,
            pixels_per_inch: metrics.pixels_per_inch(orientation),
            units: metrics.units(),
            style,
            display_all_labels: style.display_all_labels,
        }
    }

    /// Override the label visibility policy.
    pub fn with_display_all_labels(mut self, display_all_labels: bool) -> Self {
        self.display_all_labels = display_all_labels;
        self
    }

    /// Generates the draw commands for a frame.
    ///
    /// Tick lines come first, then visible tick labels, then the cursor line and the centered
    /// readout.
    pub fn draw_commands(&self, ticks: &[Tick], tracker: &MeasurementTracker) -> Vec<DrawCommand> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "draw_commands",
            ticks = ticks.len(),
            display_all_labels = self.display_all_labels
        )
        .entered();

        let mut out = Vec::with_capacity(2 * ticks.len() + 2);

        for tick in ticks {
            out.push(DrawCommand::Line {
                line: Line::new(self.surface(tick.position), self.surface(tick.end)),
                stroke: self.style.tick_stroke.clone(),
                z_index: z_order::TICKS,
            });
        }

        let label_baseline = self.orientation.label_baseline();
        for tick in ticks.iter().filter(|t| t.label_visible(self.display_all_labels)) {
            out.push(DrawCommand::Text {
                content: tick.label.clone(),
                position: self.surface(tick.label_position),
                font_size: self.units.sp(tick.font_size),
                anchor: TextAnchor::Start,
                baseline: label_baseline,
                fill: self.style.label_fill.clone(),
                z_index: z_order::TICK_LABELS,
            });
        }

        let along = tracker.read();
        let cross = self.orientation.cross_extent(self.size);
        out.push(DrawCommand::Line {
            line: Line::new(
                self.surface(Point::new(along, 0.0)),
                self.surface(Point::new(along, cross)),
            ),
            stroke: self.style.cursor_stroke.clone(),
            z_index: z_order::CURSOR,
        });

        out.push(DrawCommand::Text {
            content: tracker.format_inches(self.pixels_per_inch),
            position: Point::new(0.5 * self.size.width, 0.5 * self.size.height),
            font_size: self.units.sp(self.style.readout_font_size_sp),
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            fill: self.style.readout_fill.clone(),
            z_index: z_order::READOUT,
        });

        out
    }

    fn surface(&self, local: Point) -> Point {
        self.orientation.to_surface(local, self.size)
    }
}
