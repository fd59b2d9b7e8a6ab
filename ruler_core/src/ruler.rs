// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ruler widget state machine.
//!
//! The host drives a [`Ruler`] with size changes, pointer events and redraw requests. Size and
//! metric changes regenerate the tick sequence wholesale; pointer events only move the cursor
//! and mark the ruler dirty. The host polls [`Ruler::needs_redraw`] (or simply redraws on its
//! own schedule) and paints whatever [`Ruler::draw`] returns.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::measurement::MeasurementTracker;
use crate::metrics::DeviceMetrics;
use crate::render::{DrawCommand, Orientation, RenderPlan};
use crate::style::RulerStyle;
use crate::tick::{Tick, TickPlanner};

/// Lifecycle of a [`Ruler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RulerState {
    /// No size has been reported yet; nothing is drawn.
    #[default]
    Unsized,
    /// Ticks are generated and the last frame is current.
    Sized,
    /// Ticks are generated and a redraw is pending.
    Dirty,
}

/// A sixteenth-inch ruler bound to one drawing surface.
#[derive(Clone, Debug)]
pub struct Ruler {
    metrics: DeviceMetrics,
    style: RulerStyle,
    size: Size,
    orientation: Orientation,
    ticks: Vec<Tick>,
    tracker: MeasurementTracker,
    state: RulerState,
}

impl Ruler {
    /// Creates an unsized ruler.
    pub fn new(metrics: DeviceMetrics, style: RulerStyle) -> Self {
        Self {
            metrics,
            style,
            size: Size::ZERO,
            orientation: Orientation::default(),
            ticks: Vec::new(),
            tracker: MeasurementTracker::new(),
            state: RulerState::Unsized,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> RulerState {
        self.state
    }

    /// Whether a redraw is pending.
    pub fn needs_redraw(&self) -> bool {
        self.state == RulerState::Dirty
    }

    /// The cached tick sequence.
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// The orientation chosen at the last size change.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The surface size reported at the last size change.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The measurement cursor.
    pub fn tracker(&self) -> &MeasurementTracker {
        &self.tracker
    }

    /// The current device metrics.
    pub fn metrics(&self) -> &DeviceMetrics {
        &self.metrics
    }

    /// The current style.
    pub fn style(&self) -> &RulerStyle {
        &self.style
    }

    /// Whether eighth and sixteenth labels are drawn.
    pub fn display_all_labels(&self) -> bool {
        self.style.display_all_labels
    }

    /// Physical pixels per inch along the current primary axis.
    pub fn pixels_per_inch(&self) -> f64 {
        self.metrics.pixels_per_inch(self.orientation)
    }

    /// Handles a surface size change: picks the orientation and regenerates all ticks.
    pub fn on_size_changed(&mut self, size: Size) {
        self.size = size;
        self.orientation = Orientation::from_size(size);
        self.regenerate();
        self.state = RulerState::Dirty;
    }

    /// Replaces the device metrics, regenerating ticks if the ruler is sized.
    pub fn set_metrics(&mut self, metrics: DeviceMetrics) {
        if metrics == self.metrics {
            return;
        }
        self.metrics = metrics;
        if self.state != RulerState::Unsized {
            self.regenerate();
            self.state = RulerState::Dirty;
        }
    }

    /// Starts a measurement at a surface point.
    pub fn on_pointer_down(&mut self, position: Point) {
        self.move_cursor(position);
    }

    /// Drags the measurement to a surface point.
    pub fn on_pointer_move(&mut self, position: Point) {
        self.move_cursor(position);
    }

    /// Ends a drag. The cursor stays at the last reported position.
    pub fn on_pointer_up(&mut self, _position: Point) {}

    /// Sets the label visibility policy.
    ///
    /// Returns `true` if the value changed; only a change schedules a redraw.
    pub fn set_display_all_labels(&mut self, display_all_labels: bool) -> bool {
        if self.style.display_all_labels == display_all_labels {
            return false;
        }
        self.style.display_all_labels = display_all_labels;
        #[cfg(feature = "tracing")]
        tracing::trace!(display_all_labels, "label policy changed");
        if self.state == RulerState::Sized {
            self.state = RulerState::Dirty;
        }
        true
    }

    /// Produces the draw commands for the current frame and clears the pending redraw.
    ///
    /// An unsized ruler draws nothing.
    pub fn draw(&mut self) -> Vec<DrawCommand> {
        if self.state == RulerState::Unsized {
            return Vec::new();
        }
        self.state = RulerState::Sized;
        self.render_plan().draw_commands(&self.ticks, &self.tracker)
    }

    /// The render plan for the current size, metrics and style.
    pub fn render_plan(&self) -> RenderPlan<'_> {
        RenderPlan::new(self.size, &self.metrics, &self.style)
    }

    fn move_cursor(&mut self, position: Point) {
        if self.state == RulerState::Unsized {
            return;
        }
        let along = self.orientation.to_axis(position, self.size);
        self.tracker.update(along);
        #[cfg(feature = "tracing")]
        tracing::trace!(x = position.x, y = position.y, along, "cursor moved");
        self.state = RulerState::Dirty;
    }

    fn regenerate(&mut self) {
        let pixels_per_inch = self.pixels_per_inch();
        let length = self.orientation.axis_length(self.size);
        let planner =
            TickPlanner::new(self.metrics.units()).with_label_padding(self.style.label_padding_sp);
        let ticks = planner.generate(pixels_per_inch, length);

        #[cfg(feature = "tracing")]
        if ticks.is_empty() {
            tracing::debug!(
                pixels_per_inch,
                length,
                "no ticks fit; waiting for valid size and metrics"
            );
        } else {
            tracing::debug!(
                count = ticks.len(),
                pixels_per_inch,
                length,
                orientation = ?self.orientation,
                "ticks regenerated"
            );
        }
        self.ticks = ticks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subdivision::SubdivisionClass;

    fn ruler() -> Ruler {
        Ruler::new(DeviceMetrics::from_dpi(96.0, 160.0), RulerStyle::default())
    }

    fn text_count(commands: &[DrawCommand]) -> usize {
        commands.iter().filter(|c| c.text().is_some()).count()
    }

    #[test]
    fn starts_unsized_and_draws_nothing() {
        let mut r = ruler();
        assert_eq!(r.state(), RulerState::Unsized);
        assert!(!r.needs_redraw());
        assert!(r.draw().is_empty());
        r.on_pointer_down(Point::new(10.0, 10.0));
        assert_eq!(r.state(), RulerState::Unsized);
        assert_eq!(r.tracker().read(), 0.0);
    }

    #[test]
    fn size_change_generates_ticks_and_marks_dirty() {
        let mut r = ruler();
        r.on_size_changed(Size::new(200.0, 100.0));
        assert_eq!(r.orientation(), Orientation::Landscape);
        assert_eq!(r.state(), RulerState::Dirty);
        // Landscape uses xdpi = 96, so a 200 px surface fits 33 sixteenths.
        assert_eq!(r.ticks().len(), 33);

        let _ = r.draw();
        assert_eq!(r.state(), RulerState::Sized);

        r.on_size_changed(Size::new(100.0, 200.0));
        assert_eq!(r.orientation(), Orientation::Portrait);
        // Portrait uses ydpi = 160: 10 px per sixteenth.
        assert_eq!(r.ticks().len(), 20);
        assert!(r.needs_redraw());
    }

    #[test]
    fn pointer_events_move_cursor_without_regenerating() {
        let mut r = ruler();
        r.on_size_changed(Size::new(300.0, 120.0));
        let _ = r.draw();
        let before = r.ticks().to_vec();

        r.on_pointer_down(Point::new(48.0, 5.0));
        assert!(r.needs_redraw());
        r.on_pointer_move(Point::new(96.0, 80.0));
        r.on_pointer_up(Point::new(250.0, 80.0));
        assert_eq!(r.tracker().read(), 96.0);
        assert_eq!(r.ticks(), before.as_slice());

        let commands = r.draw();
        assert_eq!(commands.last().and_then(DrawCommand::text), Some("1.00 in."));
    }

    #[test]
    fn portrait_pointer_measures_from_bottom_edge() {
        let mut r = ruler();
        r.on_size_changed(Size::new(100.0, 400.0));
        r.on_pointer_down(Point::new(30.0, 320.0));
        assert_eq!(r.tracker().read(), 80.0);
        assert_eq!(r.tracker().format_inches(r.pixels_per_inch()), "0.50 in.");
    }

    #[test]
    fn label_toggle_only_redraws_on_change() {
        let mut r = ruler();
        r.on_size_changed(Size::new(100.0, 320.0));
        let sparse = r.draw();

        assert!(!r.set_display_all_labels(false));
        assert!(!r.needs_redraw());

        assert!(r.set_display_all_labels(true));
        assert!(r.needs_redraw());
        let dense = r.draw();
        assert_eq!(text_count(&dense), r.ticks().len() + 1);
        let hidden = r
            .ticks()
            .iter()
            .filter(|t| {
                matches!(
                    t.class,
                    SubdivisionClass::Eighth | SubdivisionClass::Sixteenth
                )
            })
            .count();
        assert_eq!(text_count(&sparse) + hidden, text_count(&dense));
    }

    #[test]
    fn label_toggle_before_sizing_is_remembered() {
        let mut r = ruler();
        assert!(r.set_display_all_labels(true));
        assert_eq!(r.state(), RulerState::Unsized);
        r.on_size_changed(Size::new(100.0, 160.0));
        let commands = r.draw();
        assert_eq!(text_count(&commands), 16 + 1);
    }

    #[test]
    fn metrics_change_regenerates_sized_ruler() {
        let mut r = ruler();
        r.set_metrics(DeviceMetrics::from_dpi(96.0, 320.0));
        assert_eq!(r.state(), RulerState::Unsized);
        assert!(r.ticks().is_empty());

        r.on_size_changed(Size::new(100.0, 200.0));
        let _ = r.draw();
        assert_eq!(r.ticks().len(), 10);

        r.set_metrics(DeviceMetrics::from_dpi(96.0, 160.0));
        assert_eq!(r.ticks().len(), 20);
        assert!(r.needs_redraw());
    }

    #[test]
    fn invalid_size_renders_only_cursor_and_readout() {
        let mut r = ruler();
        r.on_size_changed(Size::new(-10.0, -20.0));
        assert!(r.ticks().is_empty());
        assert_eq!(r.draw().len(), 2);
    }
}
