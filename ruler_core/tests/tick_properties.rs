// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for tick planning and draw-command assembly.
//!
//! 1. Tick count is `floor(length / (ppi / 16))`.
//! 2. Rank and whole inches follow the index.
//! 3. Consecutive positions differ by one sixteenth of an inch without drift.
//! 4. Classification depends on rank alone.
//! 5. The label policy decides exactly which ticks get text.
//! 6. The tracker stores what it is given.

use kurbo::Size;
use proptest::prelude::*;
use ruler_core::{
    DeviceMetrics, MeasurementTracker, RenderPlan, RulerStyle, SubdivisionClass,
    TickPlanner, z_order,
};

fn density() -> impl Strategy<Value = f64> {
    16.0_f64..800.0
}

fn length() -> impl Strategy<Value = f64> {
    0.0_f64..4000.0
}

proptest! {
    #[test]
    fn tick_count_is_floor_of_sixteenths(ppi in density(), len in length()) {
        let ticks = TickPlanner::default().generate(ppi, len);
        let expected = (len / (ppi / 16.0)).floor() as usize;
        prop_assert_eq!(ticks.len(), expected);
    }
}

proptest! {
    #[test]
    fn rank_and_inch_follow_index(ppi in density(), len in length()) {
        let ticks = TickPlanner::default().generate(ppi, len);
        for (i, tick) in ticks.iter().enumerate() {
            prop_assert_eq!(tick.index, i);
            prop_assert_eq!(usize::from(tick.rank), i % 16);
            prop_assert_eq!(tick.whole_inches, i / 16);
            prop_assert_eq!(tick.inches, i as f64 / 16.0);
        }
        prop_assert!(ticks.windows(2).all(|w| w[0].inches < w[1].inches));
    }
}

proptest! {
    #[test]
    fn positions_advance_by_one_sixteenth(ppi in density()) {
        // At least 1000 ticks.
        let step = ppi / 16.0;
        let ticks = TickPlanner::default().generate(ppi, step * 1000.5);
        prop_assert_eq!(ticks.len(), 1000);
        prop_assert_eq!(ticks[0].position.x, 0.0);
        let tolerance = 1.0e-9 * step;
        for w in ticks.windows(2) {
            let d = w[1].position.x - w[0].position.x;
            prop_assert!(d > 0.0);
            prop_assert!((d - step).abs() <= tolerance * 1000.0, "step {} vs {}", d, step);
        }
        let last = ticks[999].position.x;
        prop_assert!((last - 999.0 * step).abs() <= tolerance * 1000.0);
    }
}

proptest! {
    #[test]
    fn classification_depends_only_on_rank(ppi in density(), len in length()) {
        let ticks = TickPlanner::default().generate(ppi, len);
        for tick in &ticks {
            prop_assert_eq!(tick.class, SubdivisionClass::classify(tick.rank));
            prop_assert_eq!(tick.tick_length, tick.class.tick_length_dp());
            prop_assert_eq!(tick.font_size, tick.class.font_size_sp());
        }
    }
}

proptest! {
    #[test]
    fn label_policy_decides_text_commands(
        ppi in density(),
        width in 1.0_f64..2000.0,
        height in 1.0_f64..2000.0,
        display_all in any::<bool>(),
    ) {
        let metrics = DeviceMetrics::from_dpi(ppi, ppi);
        let style = RulerStyle::default();
        let size = Size::new(width, height);
        let plan = RenderPlan::new(size, &metrics, &style).with_display_all_labels(display_all);
        let axis_length = plan.orientation.axis_length(size);
        let ticks = TickPlanner::new(metrics.units()).generate(plan.pixels_per_inch, axis_length);
        let commands = plan.draw_commands(&ticks, &MeasurementTracker::new());

        let labels: Vec<_> = commands
            .iter()
            .filter(|c| c.z_index() == z_order::TICK_LABELS)
            .collect();
        let expected = if display_all {
            ticks.len()
        } else {
            ticks.iter().filter(|t| !t.class.is_detail()).count()
        };
        prop_assert_eq!(labels.len(), expected);
        prop_assert!(
            labels.iter().all(|c| c.text().is_some()),
            "tick label commands must be text"
        );

        let tick_lines = commands
            .iter()
            .filter(|c| c.z_index() == z_order::TICKS)
            .count();
        prop_assert_eq!(tick_lines, ticks.len());
        prop_assert_eq!(commands.len(), tick_lines + labels.len() + 2);
    }
}

proptest! {
    #[test]
    fn tracker_round_trips(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let mut tracker = MeasurementTracker::new();
        tracker.update(x);
        prop_assert_eq!(tracker.read(), x);
    }
}

proptest! {
    #[test]
    fn generation_never_panics_on_garbage(ppi in any::<f64>(), len in -1.0e6_f64..1.0e6) {
        let ticks = TickPlanner::default().generate(ppi, len);
        if !(ppi.is_finite() && ppi > 0.0) || len <= 0.0 {
            prop_assert!(ticks.is_empty());
        }
    }
}
