//! Stateful navigation over the prayer sequence.
//!
//! A [`RosaryCursor`] owns the absolute position and mystery-set selection
//! for one praying session. It holds no derived counters: stage, decade and
//! Hail-Mary ordinal are recomputed from the position through the `sequence`
//! module on every query, so the incremental walker and any jump-to-position
//! path can never disagree.

use crate::{sequence, MysterySet, PrayerKind, Progress, Stage, Step};

/// Cursor over the 80-step sequence for a single praying session.
///
/// Position 0 means the session has not begun. Position 80 is both the last
/// displayed step and, once consumed by a further [`advance`], the complete
/// state; the two are tracked separately.
///
/// [`advance`]: RosaryCursor::advance
#[derive(Clone, Debug)]
pub struct RosaryCursor {
    mystery_set: MysterySet,
    position: u32,
    consumed: bool,
}

impl RosaryCursor {
    /// Start a fresh session on the given mystery set, before the first step.
    pub fn start(mystery_set: MysterySet) -> Self {
        Self {
            mystery_set,
            position: 0,
            consumed: false,
        }
    }

    pub fn mystery_set(&self) -> MysterySet {
        self.mystery_set
    }

    /// Absolute position, 0 before the first advance, otherwise 1..=80.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Whether the first step has been reached.
    pub fn has_started(&self) -> bool {
        self.position >= sequence::FIRST_POSITION
    }

    /// True once the final step has been consumed by an [`advance`] at
    /// position 80. Reaching position 80 alone is not completion.
    ///
    /// [`advance`]: RosaryCursor::advance
    pub fn is_complete(&self) -> bool {
        self.position == sequence::LAST_POSITION && self.consumed
    }

    /// Coarse stage, including the terminal complete state.
    pub fn stage(&self) -> Stage {
        if self.is_complete() {
            Stage::Complete
        } else {
            sequence::stage_for_position(self.position)
        }
    }

    /// Descriptor of the step currently shown. Before the first advance this
    /// is the first step.
    pub fn current_step(&self) -> Step {
        sequence::step_at(self.position)
    }

    pub fn decade_index(&self) -> Option<u32> {
        sequence::decade_index_for_position(self.position)
    }

    pub fn hail_mary_number(&self) -> Option<u32> {
        sequence::hail_mary_number_for_position(self.position)
    }

    /// Move forward one step.
    ///
    /// At position 80 the position stays put: the first such call consumes
    /// the final step and reports [`Progress::Complete`], as does every call
    /// after it.
    pub fn advance(&mut self) -> Progress {
        if self.position >= sequence::LAST_POSITION {
            self.consumed = true;
            return Progress::Complete;
        }
        self.position += 1;
        Progress::Step(sequence::step_at(self.position))
    }

    /// Move back one step, floored at the first step.
    ///
    /// From the complete state this clears the completion flag and stays on
    /// the final step. At or before position 1 it settles on position 1.
    pub fn go_back(&mut self) -> Step {
        if self.consumed {
            self.consumed = false;
        } else if self.position > sequence::FIRST_POSITION {
            self.position -= 1;
        } else {
            self.position = sequence::FIRST_POSITION;
        }
        sequence::step_at(self.position)
    }

    /// Re-derive the session from a persisted position count.
    ///
    /// The count is clamped to 0..=80 (0 restores the not-yet-started
    /// state); the completion flag is always cleared so the final step can
    /// be shown again before completion. No step-by-step replay happens.
    pub fn restore_from_count(&mut self, saved: i64) {
        self.position = saved.clamp(0, sequence::LAST_POSITION as i64) as u32;
        self.consumed = false;
    }

    /// Whether the next navigation in the given direction crosses a bead
    /// boundary. Used by the presentation layer to pick feedback cues.
    pub fn is_bead_boundary(&self, advancing: bool) -> bool {
        let edge_start = if advancing {
            if !self.has_started() || self.position >= sequence::LAST_POSITION {
                return false;
            }
            self.position
        } else {
            if self.consumed || self.position <= sequence::FIRST_POSITION {
                return false;
            }
            self.position - 1
        };
        sequence::is_bead_boundary(
            sequence::kind_for_position(edge_start),
            sequence::kind_for_position(edge_start + 1),
        )
    }

    /// Kind at the current position, for display shortcuts.
    pub fn current_kind(&self) -> PrayerKind {
        sequence::kind_for_position(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cursor_not_started() {
        let cursor = RosaryCursor::start(MysterySet::Joyful);
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.has_started());
        assert!(!cursor.is_complete());
        assert_eq!(cursor.stage(), Stage::Intro);
    }

    #[test]
    fn test_full_walk_visits_every_position_in_order() {
        let mut cursor = RosaryCursor::start(MysterySet::Joyful);
        for expected in 1..=80 {
            match cursor.advance() {
                Progress::Step(step) => assert_eq!(step.position, expected),
                Progress::Complete => panic!("completed early at {}", expected),
            }
            assert!(!cursor.is_complete());
        }
        // The 81st call consumes the final step.
        assert_eq!(cursor.advance(), Progress::Complete);
        assert!(cursor.is_complete());
        assert_eq!(cursor.position(), 80);
        assert_eq!(cursor.stage(), Stage::Complete);
    }

    #[test]
    fn test_opening_kind_sequence() {
        let mut cursor = RosaryCursor::start(MysterySet::Joyful);
        let kinds: Vec<PrayerKind> = (0..8)
            .map(|_| cursor.advance().as_step().unwrap().kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                PrayerKind::SignOfCross,
                PrayerKind::ApostlesCreed,
                PrayerKind::OurFather,
                PrayerKind::HailMaryFaith,
                PrayerKind::HailMaryHope,
                PrayerKind::HailMaryCharity,
                PrayerKind::GloryBe,
                PrayerKind::MysteryAnnouncement,
            ]
        );
        assert_eq!(cursor.decade_index(), Some(0));
    }

    #[test]
    fn test_advance_after_completion_is_a_no_op() {
        let mut cursor = RosaryCursor::start(MysterySet::Sorrowful);
        cursor.restore_from_count(80);
        assert_eq!(cursor.advance(), Progress::Complete);
        assert_eq!(cursor.advance(), Progress::Complete);
        assert_eq!(cursor.position(), 80);
        assert!(cursor.is_complete());
    }

    #[test]
    fn test_go_back_floors_at_first_step() {
        let mut cursor = RosaryCursor::start(MysterySet::Glorious);
        cursor.restore_from_count(1);
        let step = cursor.go_back();
        assert_eq!(step.position, 1);
        assert_eq!(step.kind, PrayerKind::SignOfCross);
        assert_eq!(cursor.position(), 1);
        // Repeating stays put.
        assert_eq!(cursor.go_back().position, 1);
    }

    #[test]
    fn test_go_back_before_start_settles_on_first_step() {
        let mut cursor = RosaryCursor::start(MysterySet::Glorious);
        let step = cursor.go_back();
        assert_eq!(step.position, 1);
        assert!(cursor.has_started());
    }

    #[test]
    fn test_go_back_from_complete_clears_flag() {
        let mut cursor = RosaryCursor::start(MysterySet::Luminous);
        cursor.restore_from_count(80);
        cursor.advance();
        assert!(cursor.is_complete());

        let step = cursor.go_back();
        assert!(!cursor.is_complete());
        assert_eq!(step.position, 80);
        assert_eq!(step.kind, PrayerKind::SignOfCross);

        // Advancing again re-completes without moving.
        assert_eq!(cursor.advance(), Progress::Complete);
        assert!(cursor.is_complete());
        assert_eq!(cursor.position(), 80);
    }

    #[test]
    fn test_advance_then_go_back_restores_descriptor() {
        for p in 2..=80 {
            let mut cursor = RosaryCursor::start(MysterySet::Joyful);
            cursor.restore_from_count(p - 1);
            let before = cursor.current_step();
            cursor.advance();
            let after = cursor.go_back();
            assert_eq!(before, after, "descriptor mismatch around position {}", p);
        }
    }

    #[test]
    fn test_restore_rederives_counters() {
        let mut cursor = RosaryCursor::start(MysterySet::Joyful);
        cursor.restore_from_count(21);
        assert_eq!(cursor.position(), 21);
        assert_eq!(cursor.current_kind(), PrayerKind::Fatima);
        assert_eq!(cursor.decade_index(), Some(0));

        match cursor.advance() {
            Progress::Step(step) => {
                assert_eq!(step.position, 22);
                assert_eq!(step.kind, PrayerKind::MysteryAnnouncement);
                assert_eq!(step.decade, Some(1));
            }
            Progress::Complete => panic!("should not be complete"),
        }
    }

    #[test]
    fn test_restore_at_last_position_is_not_complete() {
        let mut cursor = RosaryCursor::start(MysterySet::Joyful);
        cursor.restore_from_count(80);
        assert!(!cursor.is_complete());
        assert_eq!(cursor.current_kind(), PrayerKind::SignOfCross);

        // One explicit advance consumes the final step without moving.
        assert_eq!(cursor.advance(), Progress::Complete);
        assert!(cursor.is_complete());
        assert_eq!(cursor.position(), 80);
    }

    #[test]
    fn test_restore_clamps_out_of_range() {
        let mut cursor = RosaryCursor::start(MysterySet::Joyful);
        cursor.restore_from_count(-3);
        assert_eq!(cursor.position(), 0);
        cursor.restore_from_count(4000);
        assert_eq!(cursor.position(), 80);
        assert!(!cursor.is_complete());
    }

    #[test]
    fn test_restore_clears_completion() {
        let mut cursor = RosaryCursor::start(MysterySet::Joyful);
        cursor.restore_from_count(80);
        cursor.advance();
        assert!(cursor.is_complete());
        cursor.restore_from_count(80);
        assert!(!cursor.is_complete());
    }

    #[test]
    fn test_bead_boundary_while_advancing() {
        let mut cursor = RosaryCursor::start(MysterySet::Joyful);
        // Apostles' Creed -> Our Father.
        cursor.restore_from_count(2);
        assert!(cursor.is_bead_boundary(true));
        // Our Father -> first decade Hail Mary.
        cursor.restore_from_count(9);
        assert!(cursor.is_bead_boundary(true));
        // Mid Hail-Mary run.
        cursor.restore_from_count(12);
        assert!(!cursor.is_bead_boundary(true));
        // Announcement -> Our Father carries no bead.
        cursor.restore_from_count(8);
        assert!(!cursor.is_bead_boundary(true));
    }

    #[test]
    fn test_bead_boundary_while_going_back() {
        let mut cursor = RosaryCursor::start(MysterySet::Joyful);
        // Back from the first decade Hail Mary onto the Our Father.
        cursor.restore_from_count(10);
        assert!(cursor.is_bead_boundary(false));
        // Back from Glory Be onto the last Hail Mary.
        cursor.restore_from_count(20);
        assert!(cursor.is_bead_boundary(false));
        // Back across a decade seam.
        cursor.restore_from_count(22);
        assert!(cursor.is_bead_boundary(false));
    }

    #[test]
    fn test_bead_boundary_at_sequence_edges() {
        let mut cursor = RosaryCursor::start(MysterySet::Joyful);
        assert!(!cursor.is_bead_boundary(true)); // not started
        assert!(!cursor.is_bead_boundary(false));

        cursor.restore_from_count(80);
        assert!(!cursor.is_bead_boundary(true)); // nothing past the end
        cursor.advance();
        assert!(!cursor.is_bead_boundary(false)); // leaving Complete moves no bead
    }
}
