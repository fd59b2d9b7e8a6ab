// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An on-screen inch ruler, graduated in sixteenths.
//!
//! This crate is the host-independent core of a ruler widget:
//! - **Planning** turns a pixel density and an available length into an ordered sequence of
//!   [`Tick`]s, each classified by the coarsest fraction of an inch it falls on.
//! - **Measurement** tracks a single cursor position driven by pointer input and formats it in
//!   inches.
//! - **Rendering** combines both into a flat list of [`DrawCommand`]s for an external drawing
//!   sink.
//!
//! [`Ruler`] ties these together as a small state machine that a windowing host drives with size
//! changes, pointer events and redraw requests. Painting, fonts and device metrics acquisition
//! are the host's business.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
mod float;
mod measurement;
mod metrics;
mod render;
mod ruler;
mod style;
mod subdivision;
mod tick;
pub mod z_order;

pub use measurement::{MeasurementTracker, UNIT_LABEL};
pub use metrics::{Axis, BASELINE_DPI, DeviceMetrics, MetricKind, MetricsError, UnitScale};
pub use render::{DrawCommand, Orientation, RenderPlan, TextAnchor, TextBaseline};
pub use ruler::{Ruler, RulerState};
pub use style::{RulerStyle, StrokeStyle};
pub use subdivision::{SubdivisionClass, TICKS_PER_INCH};
pub use tick::{MAX_TICKS, Tick, TickPlanner};
