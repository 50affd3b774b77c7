use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;
use rand::seq::index::sample;

use crate::Clock;
use crate::catalog::QuestionCatalog;
use crate::error::SessionError;
use super::progress::SessionProgress;
use super::service::{AnswerOutcome, QuizSession};

/// Result of answering a single question in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAnswerResult {
    pub outcome: AnswerOutcome,
    pub progress: SessionProgress,
    pub is_complete: bool,
}

/// Orchestrates session start and answering against the shared catalog.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    catalog: Arc<QuestionCatalog>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<QuestionCatalog>) -> Self {
        Self { clock, catalog }
    }

    /// How many questions a session can be asked to cover.
    #[must_use]
    pub fn available_questions(&self) -> usize {
        self.catalog.len()
    }

    /// Start a session over `count` questions sampled without replacement.
    ///
    /// Every subset of the catalog is equally likely and the presented
    /// order is randomized as well. The UI validates the requested count
    /// before it gets here; rejecting zero and oversized counts again is
    /// only a backstop.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidQuestionCount` if `count` is zero or
    /// larger than the catalog.
    pub fn start_session(&self, count: usize) -> Result<QuizSession, SessionError> {
        let available = self.catalog.len();
        if count == 0 || count > available {
            return Err(SessionError::InvalidQuestionCount {
                requested: count,
                available,
            });
        }

        let mut rng = rng();
        let mut selected: Vec<_> = sample(&mut rng, available, count)
            .into_iter()
            .map(|index| self.catalog.questions()[index].clone())
            .collect();
        selected.shuffle(&mut rng);

        Ok(QuizSession::new(
            Arc::clone(&self.catalog),
            selected,
            self.clock.now(),
        ))
    }

    /// Grade the current question and report the updated tally.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Exhausted` if the session is already done.
    pub fn answer_current(
        &self,
        session: &mut QuizSession,
        answer: &str,
    ) -> Result<SessionAnswerResult, SessionError> {
        let outcome = session.submit_answer(answer, self.clock.now())?;

        Ok(SessionAnswerResult {
            outcome,
            progress: session.progress(),
            is_complete: session.is_complete(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
