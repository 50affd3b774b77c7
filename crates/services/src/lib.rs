#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod ranks;
pub mod sessions;

pub use quiz_core::Clock;

pub use catalog::{QuestionCatalog, build_catalog};
pub use error::{CatalogError, RankFetchError, SessionError};
pub use ranks::{DEFAULT_POPULATION_URL, RankService};
pub use sessions::{
    AnswerOutcome, QuizLoopService, QuizSession, SessionAnswerResult, SessionProgress,
};
