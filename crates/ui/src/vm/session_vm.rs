use quiz_core::model::QuizReport;
use services::{AnswerOutcome, QuizLoopService, QuizSession, SessionError, SessionProgress};

/// Which screen of a running session is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// The question is on screen, waiting for an answer.
    Answering,
    /// The answer was graded; the user reviews the outcome before moving on.
    Feedback {
        submitted: String,
        outcome: AnswerOutcome,
    },
    /// Every question is answered; the final report is showing.
    Complete,
}

/// Owns one quiz session on behalf of the session view.
pub struct SessionVm {
    session: QuizSession,
    phase: SessionPhase,
}

impl SessionVm {
    /// Start a session of `count` questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidQuestionCount` for a count the service
    /// rejects.
    pub fn start(quiz_loop: &QuizLoopService, count: usize) -> Result<Self, SessionError> {
        Ok(Self {
            session: quiz_loop.start_session(count)?,
            phase: SessionPhase::Answering,
        })
    }

    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Prompt and rank-hint text for the current question, if any remains.
    #[must_use]
    pub fn prompt(&self) -> Option<(String, String)> {
        self.session.current_prompt().ok()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.session.progress()
    }

    /// Grade the entered answer and switch to the feedback screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Exhausted` if the session is already done,
    /// which only happens when the view skips a phase.
    pub fn submit(
        &mut self,
        quiz_loop: &QuizLoopService,
        answer: &str,
    ) -> Result<(), SessionError> {
        let result = quiz_loop.answer_current(&mut self.session, answer)?;
        self.phase = SessionPhase::Feedback {
            submitted: answer.to_owned(),
            outcome: result.outcome,
        };
        Ok(())
    }

    /// Move on from the feedback screen to the next question or the report.
    pub fn advance(&mut self) {
        if matches!(self.phase, SessionPhase::Feedback { .. }) {
            self.phase = if self.session.is_complete() {
                SessionPhase::Complete
            } else {
                SessionPhase::Answering
            };
        }
    }

    /// The final report, once the session is complete.
    #[must_use]
    pub fn report(&self) -> Option<QuizReport> {
        self.session.report().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use quiz_core::time::fixed_clock;
    use services::build_catalog;
    use storage::{RankTable, StateDirectory};

    fn quiz_loop() -> QuizLoopService {
        let catalog =
            build_catalog(&StateDirectory::bundled(), &RankTable::fallback()).unwrap();
        QuizLoopService::new(fixed_clock(), Arc::new(catalog))
    }

    #[test]
    fn walks_answering_feedback_complete() {
        let quiz_loop = quiz_loop();
        let mut vm = SessionVm::start(&quiz_loop, 2).unwrap();

        assert_eq!(*vm.phase(), SessionPhase::Answering);
        let (prompt, _hint) = vm.prompt().unwrap();
        assert!(prompt.starts_with("Question 1:"));

        vm.submit(&quiz_loop, "not a capital").unwrap();
        assert!(matches!(vm.phase(), SessionPhase::Feedback { .. }));

        vm.advance();
        assert_eq!(*vm.phase(), SessionPhase::Answering);
        let (prompt, _hint) = vm.prompt().unwrap();
        assert!(prompt.starts_with("Question 2:"));

        vm.submit(&quiz_loop, "still wrong").unwrap();
        vm.advance();
        assert_eq!(*vm.phase(), SessionPhase::Complete);

        let report = vm.report().unwrap();
        assert_eq!(report.total_questions(), 2);
        assert_eq!(report.number_correct(), 0);
    }

    #[test]
    fn feedback_keeps_the_submitted_text() {
        let quiz_loop = quiz_loop();
        let mut vm = SessionVm::start(&quiz_loop, 1).unwrap();

        vm.submit(&quiz_loop, "Sacramento").unwrap();
        match vm.phase() {
            SessionPhase::Feedback { submitted, .. } => assert_eq!(submitted, "Sacramento"),
            other => panic!("unexpected phase: {other:?}"),
        }
    }

    #[test]
    fn advance_outside_feedback_is_a_no_op() {
        let quiz_loop = quiz_loop();
        let mut vm = SessionVm::start(&quiz_loop, 1).unwrap();

        vm.advance();
        assert_eq!(*vm.phase(), SessionPhase::Answering);
    }

    #[test]
    fn report_is_absent_until_complete() {
        let quiz_loop = quiz_loop();
        let vm = SessionVm::start(&quiz_loop, 1).unwrap();
        assert!(vm.report().is_none());
    }

    #[test]
    fn rejects_invalid_counts() {
        let quiz_loop = quiz_loop();
        assert!(matches!(
            SessionVm::start(&quiz_loop, 0),
            Err(SessionError::InvalidQuestionCount { .. })
        ));
    }
}
