//! Hurdle scoring
//!
//! `score = hurdle_number × 100 × multiplier(guess_count)` with multipliers
//! 1.75 / 1.5 / 1.25 / 1.0 for 1 / 2 / 3 / 4 guesses.
//!
//! The multiplier is kept in quarters (7, 6, 5, 4) so the calculation is exact
//! integer arithmetic. Since the base of 100 points is divisible by 4 the result
//! never has a fractional part; were it to, integer division would round down.

use super::state::CompletedHurdle;

/// Points per hurdle number before the guess multiplier
pub const BASE_POINTS: u64 = 100;

/// Multiplier numerator in quarters for a guess count
///
/// Counts above 4 score like 4; a count of 0 scores like 1.
#[must_use]
pub const fn multiplier_quarters(guess_count: usize) -> u64 {
    match guess_count {
        0 | 1 => 7,
        2 => 6,
        3 => 5,
        _ => 4,
    }
}

/// Guess multiplier as a decimal (1.75, 1.5, 1.25, 1.0)
#[must_use]
pub fn multiplier(guess_count: usize) -> f64 {
    multiplier_quarters(guess_count) as f64 / 4.0
}

/// Score for clearing hurdle `hurdle_number` in `guess_count` guesses
///
/// # Examples
/// ```
/// use hurdle::hurdle::calculate_hurdle_score;
///
/// assert_eq!(calculate_hurdle_score(3, 1), 525);
/// assert_eq!(calculate_hurdle_score(1, 4), 100);
/// ```
#[must_use]
pub const fn calculate_hurdle_score(hurdle_number: u32, guess_count: usize) -> u64 {
    hurdle_number as u64 * BASE_POINTS * multiplier_quarters(guess_count) / 4
}

/// Final session score: the sum of every completed hurdle's stored score
#[must_use]
pub fn calculate_final_score(completed: &[CompletedHurdle]) -> u64 {
    completed.iter().map(|h| h.score).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use chrono::Utc;

    fn completed(hurdle_number: u32, score: u64) -> CompletedHurdle {
        CompletedHurdle {
            hurdle_number,
            target: Word::new("crane").unwrap(),
            guess_count: 1,
            score,
            guesses: Vec::new(),
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn multipliers() {
        assert!((multiplier(1) - 1.75).abs() < f64::EPSILON);
        assert!((multiplier(2) - 1.5).abs() < f64::EPSILON);
        assert!((multiplier(3) - 1.25).abs() < f64::EPSILON);
        assert!((multiplier(4) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn known_scores() {
        assert_eq!(calculate_hurdle_score(3, 1), 525);
        assert_eq!(calculate_hurdle_score(1, 4), 100);
        assert_eq!(calculate_hurdle_score(1, 1), 175);
        assert_eq!(calculate_hurdle_score(2, 2), 300);
        assert_eq!(calculate_hurdle_score(7, 3), 875);
    }

    #[test]
    fn score_matches_decimal_formula_for_every_hurdle() {
        for hurdle_number in 1..=1_000u32 {
            for guess_count in 1..=4 {
                let expected = (f64::from(hurdle_number) * 100.0 * multiplier(guess_count)).round();
                assert_eq!(
                    calculate_hurdle_score(hurdle_number, guess_count),
                    expected as u64,
                    "hurdle {hurdle_number}, {guess_count} guesses"
                );
            }
        }
    }

    #[test]
    fn fewer_guesses_never_score_less() {
        for hurdle_number in 1..=20 {
            let scores: Vec<u64> = (1..=4)
                .map(|g| calculate_hurdle_score(hurdle_number, g))
                .collect();
            assert!(scores.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn out_of_range_guess_counts_are_clamped() {
        assert_eq!(calculate_hurdle_score(1, 0), 175);
        assert_eq!(calculate_hurdle_score(1, 6), 100);
    }

    #[test]
    fn final_score_of_nothing_is_zero() {
        assert_eq!(calculate_final_score(&[]), 0);
    }

    #[test]
    fn final_score_sums_stored_scores() {
        for n in 0..=4u32 {
            let hurdles: Vec<CompletedHurdle> =
                (1..=n).map(|i| completed(i, u64::from(i) * 111)).collect();
            let expected: u64 = (1..=n).map(|i| u64::from(i) * 111).sum();
            assert_eq!(calculate_final_score(&hurdles), expected);
        }
    }
}
