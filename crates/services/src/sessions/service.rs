use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use quiz_core::model::{Question, QuizReport};

use super::progress::SessionProgress;
use crate::catalog::QuestionCatalog;
use crate::error::SessionError;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// What grading a single answer produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct {
        points: u32,
    },
    Incorrect {
        correct_capital: String,
        /// Set when the submitted text is some other state's capital, so the
        /// UI can tell the user which state they actually named.
        actual_state_of_answer: Option<String>,
    },
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run of the quiz over a fixed sample of questions.
///
/// Steps through the sample one question at a time: callers alternate
/// [`QuizSession::current_prompt`] and [`QuizSession::submit_answer`] until
/// the sample is exhausted, then collect [`QuizSession::report`]. Grading is
/// exact string equality against the stored capital, with no trimming and no
/// case folding.
pub struct QuizSession {
    catalog: Arc<QuestionCatalog>,
    selected: Vec<Question>,
    current: usize,
    number_correct: u32,
    points_earned: u32,
    maximum_points: u32,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// `selected` must already be a distinct sample of `catalog`;
    /// [`QuizLoopService::start_session`](crate::QuizLoopService::start_session)
    /// is the construction point that guarantees it.
    pub(crate) fn new(
        catalog: Arc<QuestionCatalog>,
        selected: Vec<Question>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let maximum_points = selected.iter().map(Question::weight).sum();

        Self {
            catalog,
            selected,
            current: 0,
            number_correct: 0,
            points_earned: 0,
            maximum_points,
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn number_correct(&self) -> u32 {
        self.number_correct
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
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.selected.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.selected.get(self.current)
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            number_correct: self.number_correct,
            points_earned: self.points_earned,
            maximum_points: self.maximum_points,
            is_complete: self.is_complete(),
        }
    }

    /// The prompt and rank-hint text for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Exhausted` once every question is answered.
    pub fn current_prompt(&self) -> Result<(String, String), SessionError> {
        let question = self.current_question().ok_or(SessionError::Exhausted)?;
        Ok((
            question.prompt_text(self.current + 1),
            question.rank_hint_text(),
        ))
    }

    /// Grade the answer for the current question and advance past it.
    ///
    /// `answered_at` should come from the services layer clock; the final
    /// answer stamps the session's completion time.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Exhausted` once every question is answered.
    pub fn submit_answer(
        &mut self,
        answer: &str,
        answered_at: DateTime<Utc>,
    ) -> Result<AnswerOutcome, SessionError> {
        let Some(question) = self.selected.get(self.current) else {
            return Err(SessionError::Exhausted);
        };

        let outcome = if answer == question.capital() {
            self.number_correct += 1;
            self.points_earned += question.weight();
            AnswerOutcome::Correct {
                points: question.weight(),
            }
        } else {
            AnswerOutcome::Incorrect {
                correct_capital: question.capital().to_owned(),
                actual_state_of_answer: self
                    .catalog
                    .state_for_capital(answer)
                    .map(str::to_owned),
            }
        };

        self.current += 1;
        if self.current >= self.selected.len() {
            self.completed_at = Some(answered_at);
        }

        Ok(outcome)
    }

    /// The final tally.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn report(&self) -> Result<QuizReport, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::NotComplete)?;
        Ok(QuizReport::new(
            self.number_correct,
            self.selected.len() as u32,
            self.points_earned,
            self.maximum_points,
            self.started_at,
            completed_at,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("selected_len", &self.selected.len())
            .field("current", &self.current)
            .field("number_correct", &self.number_correct)
            .field("points_earned", &self.points_earned)
            .field("maximum_points", &self.maximum_points)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
