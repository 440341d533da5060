//! Development-point scoring.

use super::kind::ActivityKind;
use super::role::ParticipationRole;

/// Computes the development score for an activity.
///
/// The kind's base score is weighted by the participation-role
/// multiplier, then one bonus point is added per full eight hours of
/// duration, and the result is rounded half-up to the nearest integer.
/// Pure and total: the same inputs always produce the same score and
/// no input combination fails.
pub fn compute_score(kind: ActivityKind, role: ParticipationRole, hours: u32) -> u32 {
    let weighted = kind.base_score() as f64 * role.multiplier();
    let bonus = (hours / 8) as f64;
    (weighted + bonus).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workshop_speaker_sixteen_hours_rounds_up() {
        // 5 * 1.5 = 7.5, + floor(16/8) = 2 -> 9.5 -> 10
        assert_eq!(
            compute_score(ActivityKind::Workshop, ParticipationRole::Speaker, 16),
            10
        );
    }

    #[test]
    fn publication_author_no_hours() {
        // 20 * 1.8 = 36, no bonus
        assert_eq!(
            compute_score(ActivityKind::Publication, ParticipationRole::Author, 0),
            36
        );
    }

    #[test]
    fn bonus_counts_only_full_eight_hour_blocks() {
        let base = compute_score(ActivityKind::Fdp, ParticipationRole::Participant, 0);
        assert_eq!(
            compute_score(ActivityKind::Fdp, ParticipationRole::Participant, 7),
            base
        );
        assert_eq!(
            compute_score(ActivityKind::Fdp, ParticipationRole::Participant, 8),
            base + 1
        );
        assert_eq!(
            compute_score(ActivityKind::Fdp, ParticipationRole::Participant, 23),
            base + 2
        );
    }

    #[test]
    fn matches_the_formula_across_the_whole_table() {
        let kinds = [
            ActivityKind::Workshop,
            ActivityKind::Fdp,
            ActivityKind::Mooc,
            ActivityKind::Conference,
            ActivityKind::Publication,
            ActivityKind::Patent,
        ];
        let roles = [
            ParticipationRole::Participant,
            ParticipationRole::Speaker,
            ParticipationRole::Organizer,
            ParticipationRole::Author,
        ];
        for kind in kinds {
            for role in roles {
                for hours in [0u32, 3, 8, 16, 100] {
                    let expected = (kind.base_score() as f64 * role.multiplier()
                        + (hours / 8) as f64)
                        .round() as u32;
                    assert_eq!(compute_score(kind, role, hours), expected);
                }
            }
        }
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let first = compute_score(ActivityKind::Conference, ParticipationRole::Organizer, 40);
        let second = compute_score(ActivityKind::Conference, ParticipationRole::Organizer, 40);
        assert_eq!(first, second);
    }

    #[test]
    fn unrecognised_kind_and_role_fall_back() {
        // base 5, multiplier 1.0
        assert_eq!(
            compute_score(ActivityKind::Other, ParticipationRole::Other, 0),
            5
        );
    }
}
