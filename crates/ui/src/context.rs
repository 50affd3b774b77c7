use std::sync::Arc;

use services::QuizLoopService;

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;

    /// Whether the population ranks came from the built-in table rather
    /// than the live page.
    fn ranks_are_fallback(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
    ranks_are_fallback: bool,
    max_questions: usize,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let quiz_loop = app.quiz_loop();
        let max_questions = quiz_loop.available_questions();

        Self {
            quiz_loop,
            ranks_are_fallback: app.ranks_are_fallback(),
            max_questions,
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn ranks_are_fallback(&self) -> bool {
        self.ranks_are_fallback
    }

    /// Upper bound for the question-count entry.
    #[must_use]
    pub fn max_questions(&self) -> usize {
        self.max_questions
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
