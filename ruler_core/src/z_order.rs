// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for ruler draw commands.
//!
//! Commands are emitted in ascending z-order already, so a sink may either paint in emission
//! order or sort by `z_index`. Ties keep emission order.

/// Tick mark lines.
pub const TICKS: i32 = 10;
/// Tick labels.
pub const TICK_LABELS: i32 = 20;
/// The measurement cursor line, drawn over the graduations.
pub const CURSOR: i32 = 30;
/// The centered measurement readout.
pub const READOUT: i32 = 40;
