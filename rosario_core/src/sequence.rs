//! The fixed 80-step structure of a five-decade rosary.
//!
//! Every position-to-structure question in the crate is answered here, and
//! only here. The cursor, the saved-session restore path, and the CLI all
//! delegate to these functions, so the mapping cannot drift between an
//! incremental walker and a direct lookup.
//!
//! Layout of the sequence:
//! - 1-2: Sign of the Cross, Apostles' Creed
//! - 3-7: Our Father, three Hail Marys (faith, hope, charity), Glory Be
//! - 8-77: five decades of 14 steps each (announcement, Our Father,
//!   ten Hail Marys, Glory Be, Fatima Prayer)
//! - 78-80: Hail Holy Queen, closing prayer, Sign of the Cross

use crate::{PrayerKind, Stage, Step};

/// First absolute position of the sequence.
pub const FIRST_POSITION: u32 = 1;
/// Last absolute position of the sequence.
pub const LAST_POSITION: u32 = 80;

/// First position belonging to a decade.
pub const FIRST_DECADE_POSITION: u32 = 8;
/// Last position belonging to a decade.
pub const LAST_DECADE_POSITION: u32 = 77;
/// Steps per decade: announcement + Our Father + 10 Hail Marys + Glory Be
/// + Fatima Prayer.
pub const DECADE_LEN: u32 = 14;
/// Number of decades in a full recitation.
pub const DECADE_COUNT: u32 = 5;

const INTRO_PRAYERS: [PrayerKind; 2] = [PrayerKind::SignOfCross, PrayerKind::ApostlesCreed];

const OPENING_PRAYERS: [PrayerKind; 5] = [
    PrayerKind::OurFather,
    PrayerKind::HailMaryFaith,
    PrayerKind::HailMaryHope,
    PrayerKind::HailMaryCharity,
    PrayerKind::GloryBe,
];

const CLOSING_PRAYERS: [PrayerKind; 3] = [
    PrayerKind::HailHolyQueen,
    PrayerKind::ClosingPrayer,
    PrayerKind::SignOfCross,
];

/// Clamp an arbitrary position to the valid range 1..=80.
///
/// Out-of-range input is folded to the nearest bound rather than rejected;
/// this is the leniency boundary for positions arriving from persisted
/// state or the command line.
pub fn clamp_position(pos: u32) -> u32 {
    pos.clamp(FIRST_POSITION, LAST_POSITION)
}

/// Prayer kind recited at an absolute position.
///
/// Total over all of `u32`; out-of-range input is clamped first.
pub fn kind_for_position(pos: u32) -> PrayerKind {
    let pos = clamp_position(pos);

    if pos <= 2 {
        return INTRO_PRAYERS[(pos - 1) as usize];
    }
    if pos <= 7 {
        return OPENING_PRAYERS[(pos - 3) as usize];
    }
    if pos >= 78 {
        return CLOSING_PRAYERS[(pos - 78) as usize];
    }

    match decade_offset(pos) {
        0 => PrayerKind::MysteryAnnouncement,
        1 => PrayerKind::OurFather,
        2..=11 => PrayerKind::HailMary,
        12 => PrayerKind::GloryBe,
        _ => PrayerKind::Fatima, // offset 13
    }
}

/// Coarse stage containing an absolute position.
pub fn stage_for_position(pos: u32) -> Stage {
    let pos = clamp_position(pos);
    match pos {
        1..=2 => Stage::Intro,
        3..=7 => Stage::Opening,
        8..=77 => Stage::Decade((pos - FIRST_DECADE_POSITION) / DECADE_LEN),
        _ => Stage::Closing,
    }
}

/// 0-based decade index for a position, or `None` outside the decades.
pub fn decade_index_for_position(pos: u32) -> Option<u32> {
    if !(FIRST_DECADE_POSITION..=LAST_DECADE_POSITION).contains(&pos) {
        return None;
    }
    Some((pos - FIRST_DECADE_POSITION) / DECADE_LEN)
}

/// 1-based Hail Mary ordinal within its decade, or `None` when the position
/// is not a decade Hail Mary step.
pub fn hail_mary_number_for_position(pos: u32) -> Option<u32> {
    if !(FIRST_DECADE_POSITION..=LAST_DECADE_POSITION).contains(&pos) {
        return None;
    }
    match decade_offset(pos) {
        offset @ 2..=11 => Some(offset - 1),
        _ => None,
    }
}

/// Absolute position of a decade's mystery announcement.
///
/// The decade index is clamped to 0..=4.
pub fn announcement_position(decade: u32) -> u32 {
    FIRST_DECADE_POSITION + decade.min(DECADE_COUNT - 1) * DECADE_LEN
}

/// Full structural descriptor for a position.
pub fn step_at(pos: u32) -> Step {
    let pos = clamp_position(pos);
    Step {
        position: pos,
        kind: kind_for_position(pos),
        stage: stage_for_position(pos),
        decade: decade_index_for_position(pos),
        hail_mary: hail_mary_number_for_position(pos),
    }
}

/// Whether the edge between two consecutive steps crosses a bead boundary.
///
/// `before` and `after` are the kinds at positions p and p+1. Boundaries are
/// the Hail-Mary run starts and ends plus the stage seams; announcement
/// steps carry no bead of their own, so the announcement → Our Father edge
/// is not a boundary.
pub fn is_bead_boundary(before: PrayerKind, after: PrayerKind) -> bool {
    use PrayerKind::*;
    matches!(
        (before, after),
        (ApostlesCreed, OurFather)
            | (OurFather, HailMaryFaith)
            | (HailMaryCharity, GloryBe)
            | (GloryBe, MysteryAnnouncement)
            | (OurFather, HailMary)
            | (HailMary, GloryBe)
            | (Fatima, MysteryAnnouncement)
            | (Fatima, HailHolyQueen)
    )
}

fn decade_offset(pos: u32) -> u32 {
    (pos - FIRST_DECADE_POSITION) % DECADE_LEN
}
