use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizReportError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("number correct ({correct}) exceeds question count ({total})")]
    CorrectExceedsTotal { correct: u32, total: u32 },

    #[error("points earned ({points}) exceed the maximum ({maximum})")]
    PointsExceedMaximum { points: u32, maximum: u32 },
}

/// Final tally for a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    number_correct: u32,
    total_questions: u32,
    points_earned: u32,
    maximum_points: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizReport {
    /// Build a report, checking the counters against each other.
    ///
    /// # Errors
    ///
    /// Returns `QuizReportError` if the counters are inconsistent or the
    /// completion time precedes the start time.
    pub fn new(
        number_correct: u32,
        total_questions: u32,
        points_earned: u32,
        maximum_points: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizReportError> {
        if completed_at < started_at {
            return Err(QuizReportError::InvalidTimeRange);
        }
        if number_correct > total_questions {
            return Err(QuizReportError::CorrectExceedsTotal {
                correct: number_correct,
                total: total_questions,
            });
        }
        if points_earned > maximum_points {
            return Err(QuizReportError::PointsExceedMaximum {
                points: points_earned,
                maximum: maximum_points,
            });
        }

        Ok(Self {
            number_correct,
            total_questions,
            points_earned,
            maximum_points,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn number_correct(&self) -> u32 {
        self.number_correct
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn points_earned(&self) -> u32 {
        self.points_earned
    }

    #[must_use]
    pub fn maximum_points(&self) -> u32 {
        self.maximum_points
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn report_holds_the_final_tally() {
        let now = fixed_now();
        let report = QuizReport::new(3, 5, 9, 12, now, now + Duration::minutes(2)).unwrap();

        assert_eq!(report.number_correct(), 3);
        assert_eq!(report.total_questions(), 5);
        assert_eq!(report.points_earned(), 9);
        assert_eq!(report.maximum_points(), 12);
    }

    #[test]
    fn report_rejects_completion_before_start() {
        let now = fixed_now();
        let err = QuizReport::new(0, 1, 0, 1, now, now - Duration::seconds(1)).unwrap_err();
        assert_eq!(err, QuizReportError::InvalidTimeRange);
    }

    #[test]
    fn report_rejects_more_correct_than_asked() {
        let now = fixed_now();
        let err = QuizReport::new(6, 5, 0, 12, now, now).unwrap_err();
        assert!(matches!(err, QuizReportError::CorrectExceedsTotal { .. }));
    }

    #[test]
    fn report_rejects_points_over_maximum() {
        let now = fixed_now();
        let err = QuizReport::new(5, 5, 13, 12, now, now).unwrap_err();
        assert!(matches!(err, QuizReportError::PointsExceedMaximum { .. }));
    }
}
