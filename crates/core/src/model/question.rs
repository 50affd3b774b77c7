use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while constructing a question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("population rank {rank} for {state} is outside 1-50")]
    InvalidRank { state: String, rank: u8 },
}

//
// ─── WEIGHT ───────────────────────────────────────────────────────────────────
//

/// Point value for a question, derived from population rank in bands of ten.
///
/// Rank 1-10 is worth 1 point, 11-20 is worth 2, and so on up to 41-50 at
/// 5 points. Returns `None` for ranks outside 1-50; callers must treat that
/// as a contract violation by the rank source, never clamp it.
#[must_use]
pub fn weight_for_rank(rank: u8) -> Option<u32> {
    match rank {
        1..=10 => Some(1),
        11..=20 => Some(2),
        21..=30 => Some(3),
        31..=40 => Some(4),
        41..=50 => Some(5),
        _ => None,
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single quiz question: one state, its capital, and how much the answer
/// is worth.
///
/// Built once per state when the catalog is assembled and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    state: String,
    capital: String,
    population_rank: u8,
    weight: u32,
}

impl Question {
    /// Create a question, deriving its weight from the population rank.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidRank` if `population_rank` is outside
    /// 1-50.
    pub fn new(
        state: impl Into<String>,
        capital: impl Into<String>,
        population_rank: u8,
    ) -> Result<Self, QuestionError> {
        let state = state.into();
        let weight = weight_for_rank(population_rank).ok_or_else(|| QuestionError::InvalidRank {
            state: state.clone(),
            rank: population_rank,
        })?;

        Ok(Self {
            state,
            capital: capital.into(),
            population_rank,
            weight,
        })
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    #[must_use]
    pub fn capital(&self) -> &str {
        &self.capital
    }

    #[must_use]
    pub fn population_rank(&self) -> u8 {
        self.population_rank
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// The question line shown to the user.
    #[must_use]
    pub fn prompt_text(&self, question_number: usize) -> String {
        format!(
            "Question {question_number}: What is the capital of {}?",
            self.state
        )
    }

    /// One sentence describing the state's population rank and point value.
    ///
    /// Ranks 1 and 50 get their own wording; everything else uses the
    /// English ordinal suffix. The point noun agrees with the weight, which
    /// is singular exactly in the 1-10 band.
    #[must_use]
    pub fn rank_hint_text(&self) -> String {
        let state = &self.state;
        let rank = self.population_rank;
        let weight = self.weight;

        match rank {
            1 => format!(
                "{state} is the most populous state in the US and is worth {weight} point."
            ),
            50 => format!(
                "{state} is the least populous state in the US and is worth {weight} points."
            ),
            2..=10 => format!(
                "{state} is the {rank}{} most populous state in the US and is worth {weight} point.",
                ordinal_suffix(rank)
            ),
            // 11-20 are all "th" in English, including 11, 12, and 13.
            11..=20 => format!(
                "{state} is the {rank}th most populous state in the US and is worth {weight} points."
            ),
            _ => format!(
                "{state} is the {rank}{} most populous state in the US and is worth {weight} points.",
                ordinal_suffix(rank)
            ),
        }
    }
}

fn ordinal_suffix(rank: u8) -> &'static str {
    match rank % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_bands_cover_all_valid_ranks() {
        for rank in 1..=10 {
            assert_eq!(weight_for_rank(rank), Some(1));
        }
        for rank in 11..=20 {
            assert_eq!(weight_for_rank(rank), Some(2));
        }
        for rank in 21..=30 {
            assert_eq!(weight_for_rank(rank), Some(3));
        }
        for rank in 31..=40 {
            assert_eq!(weight_for_rank(rank), Some(4));
        }
        for rank in 41..=50 {
            assert_eq!(weight_for_rank(rank), Some(5));
        }
    }

    #[test]
    fn weight_rejects_out_of_range_ranks() {
        assert_eq!(weight_for_rank(0), None);
        assert_eq!(weight_for_rank(51), None);
        assert_eq!(weight_for_rank(u8::MAX), None);
    }

    #[test]
    fn question_rejects_invalid_rank() {
        let err = Question::new("Atlantis", "Poseidonia", 0).unwrap_err();
        assert_eq!(
            err,
            QuestionError::InvalidRank {
                state: "Atlantis".to_string(),
                rank: 0
            }
        );
    }

    #[test]
    fn prompt_text_numbers_the_question() {
        let question = Question::new("Texas", "Austin", 2).unwrap();
        assert_eq!(
            question.prompt_text(7),
            "Question 7: What is the capital of Texas?"
        );
    }

    fn hint_for(rank: u8) -> String {
        Question::new("Testonia", "Testville", rank)
            .unwrap()
            .rank_hint_text()
    }

    #[test]
    fn hint_for_rank_one_is_singular_and_superlative() {
        assert_eq!(
            hint_for(1),
            "Testonia is the most populous state in the US and is worth 1 point."
        );
    }

    #[test]
    fn hint_for_rank_fifty_reads_least_populous() {
        assert_eq!(
            hint_for(50),
            "Testonia is the least populous state in the US and is worth 5 points."
        );
    }

    #[test]
    fn hints_in_first_band_use_singular_point() {
        assert_eq!(
            hint_for(2),
            "Testonia is the 2nd most populous state in the US and is worth 1 point."
        );
        assert_eq!(
            hint_for(3),
            "Testonia is the 3rd most populous state in the US and is worth 1 point."
        );
        assert_eq!(
            hint_for(4),
            "Testonia is the 4th most populous state in the US and is worth 1 point."
        );
        assert_eq!(
            hint_for(10),
            "Testonia is the 10th most populous state in the US and is worth 1 point."
        );
    }

    #[test]
    fn hints_in_teens_band_all_use_th() {
        for rank in 11..=20 {
            let hint = hint_for(rank);
            assert!(
                hint.contains(&format!("the {rank}th most populous")),
                "rank {rank}: {hint}"
            );
            assert!(hint.ends_with("points."), "rank {rank}: {hint}");
        }
    }

    #[test]
    fn hints_in_upper_bands_follow_last_digit() {
        assert!(hint_for(21).contains("21st"));
        assert!(hint_for(31).contains("31st"));
        assert!(hint_for(41).contains("41st"));
        assert!(hint_for(22).contains("22nd"));
        assert!(hint_for(32).contains("32nd"));
        assert!(hint_for(42).contains("42nd"));
        assert!(hint_for(23).contains("23rd"));
        assert!(hint_for(33).contains("33rd"));
        assert!(hint_for(43).contains("43rd"));
        assert!(hint_for(24).contains("24th"));
        assert!(hint_for(49).contains("49th"));
    }

    #[test]
    fn hints_above_first_band_use_plural_points() {
        for rank in [11, 21, 29, 35, 44, 50] {
            assert!(hint_for(rank).ends_with("points."), "rank {rank}");
        }
    }
}
