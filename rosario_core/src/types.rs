//! Core domain types for the rosario system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Prayer kinds and the step descriptor they hang off
//! - Mystery sets and the coarse recitation stages
//! - The navigation result returned by the cursor

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Prayer Kinds
// ============================================================================

/// Category of prayer recited at a single step of the sequence.
///
/// Exactly one kind corresponds to each absolute position; kinds are never
/// stored, only derived from the position.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PrayerKind {
    SignOfCross,
    ApostlesCreed,
    OurFather,
    HailMary,
    HailMaryFaith,
    HailMaryHope,
    HailMaryCharity,
    GloryBe,
    Fatima,
    MysteryAnnouncement,
    HailHolyQueen,
    ClosingPrayer,
}

impl PrayerKind {
    /// True for every Hail Mary variant, the small beads on a physical rosary.
    pub fn is_small_bead(self) -> bool {
        matches!(
            self,
            PrayerKind::HailMary
                | PrayerKind::HailMaryFaith
                | PrayerKind::HailMaryHope
                | PrayerKind::HailMaryCharity
        )
    }
}

// ============================================================================
// Mystery Sets
// ============================================================================

/// One of the four named groups of five meditative themes.
///
/// Chosen once per praying session and immutable thereafter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MysterySet {
    Joyful,
    Sorrowful,
    Glorious,
    Luminous,
}

impl MysterySet {
    /// All sets, in the traditional listing order.
    pub const ALL: [MysterySet; 4] = [
        MysterySet::Joyful,
        MysterySet::Sorrowful,
        MysterySet::Glorious,
        MysterySet::Luminous,
    ];

    /// Stable identifier used in config files and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            MysterySet::Joyful => "joyful",
            MysterySet::Sorrowful => "sorrowful",
            MysterySet::Glorious => "glorious",
            MysterySet::Luminous => "luminous",
        }
    }

    /// Parse an identifier as produced by [`MysterySet::id`].
    pub fn from_id(id: &str) -> Option<MysterySet> {
        match id.to_lowercase().as_str() {
            "joyful" => Some(MysterySet::Joyful),
            "sorrowful" => Some(MysterySet::Sorrowful),
            "glorious" => Some(MysterySet::Glorious),
            "luminous" => Some(MysterySet::Luminous),
            _ => None,
        }
    }

    /// Display name, e.g. "Joyful".
    pub fn name(self) -> &'static str {
        match self {
            MysterySet::Joyful => "Joyful",
            MysterySet::Sorrowful => "Sorrowful",
            MysterySet::Glorious => "Glorious",
            MysterySet::Luminous => "Luminous",
        }
    }
}

impl fmt::Display for MysterySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Stages
// ============================================================================

/// Coarse-grained phase of the recitation.
///
/// Progression is strictly linear:
/// Intro → Opening → Decade(0) … Decade(4) → Closing → Complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Sign of the Cross and the Apostles' Creed (positions 1-2).
    Intro,
    /// Our Father, the three introductory Hail Marys, Glory Be (positions 3-7).
    Opening,
    /// One of the five 14-step mystery decades (positions 8-77). The index
    /// is 0-based.
    Decade(u32),
    /// Hail Holy Queen, the closing prayer, final Sign of the Cross
    /// (positions 78-80).
    Closing,
    /// The final step has been consumed; the recitation is over. Never
    /// produced by position lookup, only by the cursor.
    Complete,
}

// ============================================================================
// Step Descriptor
// ============================================================================

/// Structural facts about one step of the sequence.
///
/// Produced by the `sequence` module, consumed by the cursor and by anything
/// that renders a step. Contains no display text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Absolute position in the sequence, 1..=80.
    pub position: u32,
    pub kind: PrayerKind,
    pub stage: Stage,
    /// 0-based decade index, present only within positions 8..=77.
    pub decade: Option<u32>,
    /// 1-based Hail Mary ordinal within its decade, present only on decade
    /// Hail Mary steps.
    pub hail_mary: Option<u32>,
}

// ============================================================================
// Navigation Result
// ============================================================================

/// Outcome of advancing the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Moved onto (or stayed on) a step of the sequence.
    Step(Step),
    /// The final step had already been shown; the recitation is complete.
    Complete,
}

impl Progress {
    /// The step, if the recitation has not completed.
    pub fn as_step(&self) -> Option<&Step> {
        match self {
            Progress::Step(step) => Some(step),
            Progress::Complete => None,
        }
    }
}
