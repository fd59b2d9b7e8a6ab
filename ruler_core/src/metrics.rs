// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device metrics supplied by the host.
//!
//! The ruler needs two kinds of scale: the physical pixel density along each axis (to place
//! graduations an exact fraction of an inch apart) and the logical-pixel densities used to size
//! tick lengths (dp) and label text (sp).

use core::fmt;

use crate::render::Orientation;

/// The reference density for one device-independent pixel, in dots per inch.
pub const BASELINE_DPI: f64 = 160.0;

/// A surface axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Logical-to-device pixel factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitScale {
    /// Device pixels per dp.
    pub density: f64,
    /// Device pixels per sp.
    pub scaled_density: f64,
}

impl UnitScale {
    /// One device pixel per logical pixel.
    pub const IDENTITY: Self = Self {
        density: 1.0,
        scaled_density: 1.0,
    };

    /// Converts dp to device pixels.
    #[must_use]
    pub fn dp(&self, dp: f64) -> f64 {
        dp * self.density
    }

    /// Converts sp to device pixels.
    #[must_use]
    pub fn sp(&self, sp: f64) -> f64 {
        sp * self.scaled_density
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Display metrics reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceMetrics {
    /// Physical pixels per inch along the horizontal axis.
    pub xdpi: f64,
    /// Physical pixels per inch along the vertical axis.
    pub ydpi: f64,
    /// Device pixels per dp.
    pub density: f64,
    /// Device pixels per sp (includes the user's font scale).
    pub scaled_density: f64,
}

impl DeviceMetrics {
    /// Creates metrics without validation.
    ///
    /// Invalid values are tolerated: the ruler renders no graduations until valid metrics
    /// arrive. Use [`DeviceMetrics::try_new`] to reject them up front.
    pub fn new(xdpi: f64, ydpi: f64, density: f64, scaled_density: f64) -> Self {
        Self {
            xdpi,
            ydpi,
            density,
            scaled_density,
        }
    }

    /// Creates metrics from physical densities alone.
    ///
    /// Both logical densities are derived from the mean dpi relative to [`BASELINE_DPI`].
    pub fn from_dpi(xdpi: f64, ydpi: f64) -> Self {
        let density = 0.5 * (xdpi + ydpi) / BASELINE_DPI;
        Self::new(xdpi, ydpi, density, density)
    }

    /// Creates metrics, rejecting non-finite or non-positive values.
    pub fn try_new(
        xdpi: f64,
        ydpi: f64,
        density: f64,
        scaled_density: f64,
    ) -> Result<Self, MetricsError> {
        check_density(MetricKind::Dpi(Axis::X), xdpi)?;
        check_density(MetricKind::Dpi(Axis::Y), ydpi)?;
        check_density(MetricKind::Density, density)?;
        check_density(MetricKind::ScaledDensity, scaled_density)?;
        Ok(Self::new(xdpi, ydpi, density, scaled_density))
    }

    /// Physical pixels per inch along the given axis.
    #[must_use]
    pub fn dpi(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.xdpi,
            Axis::Y => self.ydpi,
        }
    }

    /// Physical pixels per inch along the primary axis of `orientation`.
    #[must_use]
    pub fn pixels_per_inch(&self, orientation: Orientation) -> f64 {
        self.dpi(orientation.primary_axis())
    }

    /// The dp/sp conversion factors.
    #[must_use]
    pub fn units(&self) -> UnitScale {
        UnitScale {
            density: self.density,
            scaled_density: self.scaled_density,
        }
    }
}

/// Which metric a [`MetricsError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    /// Physical pixels per inch along an axis.
    Dpi(Axis),
    /// Device pixels per dp.
    Density,
    /// Device pixels per sp.
    ScaledDensity,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dpi(axis) => write!(f, "{axis}dpi"),
            Self::Density => f.write_str("density"),
            Self::ScaledDensity => f.write_str("scaled density"),
        }
    }
}

/// Errors returned by [`DeviceMetrics::try_new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetricsError {
    /// The metric is NaN or infinite.
    NonFinite {
        /// The offending metric.
        metric: MetricKind,
    },
    /// The metric is zero or negative.
    NonPositive {
        /// The offending metric.
        metric: MetricKind,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { metric } => write!(f, "{metric} is not finite"),
            Self::NonPositive { metric, value } => {
                write!(f, "{metric} must be positive, got {value}")
            }
        }
    }
}

impl core::error::Error for MetricsError {}

fn check_density(metric: MetricKind, value: f64) -> Result<(), MetricsError> {
    if !value.is_finite() {
        return Err(MetricsError::NonFinite { metric });
    }
    if value <= 0.0 {
        return Err(MetricsError::NonPositive { metric, value });
    }
    Ok(())
}
