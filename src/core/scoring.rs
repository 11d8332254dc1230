//! Scoring module - row-clear rewards and level/speed progression.

use crate::core::session::Stats;
use crate::types::{INITIAL_TIMEOUT_MS, LEVEL_STEP, LINE_SCORES, MAX_LEVEL, SPEED_DECREMENT_MS};

/// Points for one destruction pass. Only 1..=4 rows score; a pass can
/// never clear more from a single piece.
pub fn line_clear_score(rows: usize) -> u32 {
    match rows {
        1..=4 => LINE_SCORES[rows],
        _ => 0,
    }
}

/// Level derived from total score, starting at 1. Uncapped here; the
/// MAX_LEVEL cutoff belongs to the state machine.
pub fn level_for_score(score: u32) -> u32 {
    1 + score / LEVEL_STEP
}

/// Fall-timer window for a level. Saturates at 0 ms, a region the
/// MAX_LEVEL cutoff keeps unreachable in a live game.
pub fn fall_timeout_ms(level: u32) -> u64 {
    INITIAL_TIMEOUT_MS.saturating_sub(u64::from(level.saturating_sub(1)) * SPEED_DECREMENT_MS)
}

/// Fold one destruction pass into the stats. A pass that cleared nothing
/// changes nothing - score, level and speed all keep their values.
pub fn apply_clear(stats: &mut Stats, rows: usize) {
    if rows == 0 {
        return;
    }
    stats.score += line_clear_score(rows);
    stats.level = level_for_score(stats.score);
    stats.speed_ms = fall_timeout_ms(stats.level);
}

/// Whether progression has passed the final level.
pub fn past_max_level(stats: &Stats) -> bool {
    stats.level > MAX_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_rewards() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 700);
        assert_eq!(line_clear_score(4), 1500);
        assert_eq!(line_clear_score(5), 0);
    }

    #[test]
    fn cumulative_clear_sequence() {
        // Clearing 1, 2, 3, 4 rows from zero: 100, 400, 1100, 2600.
        let mut stats = Stats::new();
        let mut expected = [0u32; 4];
        for (i, rows) in (1..=4).enumerate() {
            apply_clear(&mut stats, rows);
            expected[i] = stats.score;
        }
        assert_eq!(expected, [100, 400, 1100, 2600]);
    }

    #[test]
    fn zero_rows_is_a_no_op() {
        let mut stats = Stats::new();
        stats.score = 550;
        stats.level = 42; // deliberately stale
        stats.speed_ms = 7;
        apply_clear(&mut stats, 0);
        assert_eq!(stats.score, 550);
        assert_eq!(stats.level, 42);
        assert_eq!(stats.speed_ms, 7);
    }

    #[test]
    fn level_and_speed_derivation() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(599), 1);
        assert_eq!(level_for_score(600), 2);
        assert_eq!(level_for_score(2600), 5);

        assert_eq!(fall_timeout_ms(1), 500);
        assert_eq!(fall_timeout_ms(2), 470);
        assert_eq!(fall_timeout_ms(10), 230);
        // Deep levels saturate rather than wrap.
        assert_eq!(fall_timeout_ms(100), 0);
    }

    #[test]
    fn progression_recomputes_on_clear() {
        let mut stats = Stats::new();
        stats.score = 500;
        apply_clear(&mut stats, 1); // 600 total
        assert_eq!(stats.score, 600);
        assert_eq!(stats.level, 2);
        assert_eq!(stats.speed_ms, 470);
        assert!(!past_max_level(&stats));

        stats.level = 11;
        assert!(past_max_level(&stats));
    }
}
