// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subdivision classes and their fixed visual attributes.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Number of graduations per inch.
pub const TICKS_PER_INCH: usize = 16;

/// The coarsest fraction of an inch a tick position falls on.
///
/// Variants are ordered from most to least specific: every `Whole` position is also a half,
/// quarter, eighth and sixteenth position, but it is classified as `Whole`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubdivisionClass {
    /// An inch boundary (rank 0).
    Whole,
    /// The half-inch mark (rank 8).
    Half,
    /// A quarter-inch mark that is not a half (ranks 4 and 12).
    Quarter,
    /// An eighth-inch mark that is not a quarter (ranks 2, 6, 10, 14).
    Eighth,
    /// A sixteenth-inch mark (odd ranks).
    Sixteenth,
}

impl SubdivisionClass {
    /// All classes, most specific first.
    pub const ALL: [Self; 5] = [
        Self::Whole,
        Self::Half,
        Self::Quarter,
        Self::Eighth,
        Self::Sixteenth,
    ];

    /// Classifies a rank within its inch.
    ///
    /// Ranks outside `0..16` are reduced modulo 16 first, so this is total over `u8`.
    #[must_use]
    pub const fn classify(rank: u8) -> Self {
        let rank = rank % 16;
        if rank == 0 {
            Self::Whole
        } else if rank.is_multiple_of(8) {
            Self::Half
        } else if rank.is_multiple_of(4) {
            Self::Quarter
        } else if rank.is_multiple_of(2) {
            Self::Eighth
        } else {
            Self::Sixteenth
        }
    }

    /// Tick length in device-independent pixels (dp).
    #[must_use]
    pub const fn tick_length_dp(self) -> f64 {
        match self {
            Self::Whole => 50.0,
            Self::Half => 40.0,
            Self::Quarter => 30.0,
            Self::Eighth => 20.0,
            Self::Sixteenth => 10.0,
        }
    }

    /// Label font size in scale-independent pixels (sp).
    #[must_use]
    pub const fn font_size_sp(self) -> f64 {
        match self {
            Self::Whole => 12.0,
            Self::Half => 10.0,
            Self::Quarter => 8.0,
            Self::Eighth => 6.0,
            Self::Sixteenth => 4.0,
        }
    }

    /// The denominator of this class's fractions (`1` for whole inches).
    #[must_use]
    pub const fn denominator(self) -> u8 {
        match self {
            Self::Whole => 1,
            Self::Half => 2,
            Self::Quarter => 4,
            Self::Eighth => 8,
            Self::Sixteenth => 16,
        }
    }

    /// Whether labels of this class are hidden unless all labels are requested.
    #[must_use]
    pub const fn is_detail(self) -> bool {
        matches!(self, Self::Eighth | Self::Sixteenth)
    }

    /// Formats the label for a tick of this class.
    ///
    /// Whole inches print the inch number; everything else prints a reduced fraction of the
    /// inch, e.g. rank 12 is `"3/4"`.
    pub fn label(self, rank: u8, whole_inches: usize) -> String {
        match self {
            Self::Whole => format!("{whole_inches}"),
            _ => {
                let denominator = self.denominator();
                let numerator = (rank % 16) / (16 / denominator);
                format!("{numerator}/{denominator}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn classification_matches_fraction_table() {
        assert_eq!(SubdivisionClass::classify(0), SubdivisionClass::Whole);
        assert_eq!(SubdivisionClass::classify(8), SubdivisionClass::Half);
        for rank in [4, 12] {
            assert_eq!(SubdivisionClass::classify(rank), SubdivisionClass::Quarter);
        }
        for rank in [2, 6, 10, 14] {
            assert_eq!(SubdivisionClass::classify(rank), SubdivisionClass::Eighth);
        }
        for rank in (1..16).step_by(2) {
            assert_eq!(
                SubdivisionClass::classify(rank),
                SubdivisionClass::Sixteenth,
                "rank {rank}"
            );
        }
    }

    #[test]
    fn classification_wraps_ranks_past_one_inch() {
        assert_eq!(SubdivisionClass::classify(16), SubdivisionClass::Whole);
        assert_eq!(SubdivisionClass::classify(24), SubdivisionClass::Half);
        assert_eq!(SubdivisionClass::classify(255), SubdivisionClass::Sixteenth);
    }

    #[test]
    fn visual_weight_decreases_with_specificity() {
        for pair in SubdivisionClass::ALL.windows(2) {
            assert!(pair[0].tick_length_dp() > pair[1].tick_length_dp());
            assert!(pair[0].font_size_sp() > pair[1].font_size_sp());
        }
    }

    #[test]
    fn labels_are_reduced_fractions() {
        let label = |rank: u8| SubdivisionClass::classify(rank).label(rank, 3);
        assert_eq!(label(0), "3");
        assert_eq!(label(4), "1/4");
        assert_eq!(label(8), "1/2");
        assert_eq!(label(12), "3/4");
        assert_eq!(label(6), "3/8");
        assert_eq!(label(14), "7/8");
        assert_eq!(label(1), "1/16");
        assert_eq!(label(15), "15/16");
    }

    #[test]
    fn only_eighths_and_sixteenths_are_detail() {
        let detail: std::vec::Vec<_> = SubdivisionClass::ALL
            .into_iter()
            .filter(|c| c.is_detail())
            .collect();
        assert_eq!(
            detail,
            [SubdivisionClass::Eighth, SubdivisionClass::Sixteenth]
        );
    }
}
