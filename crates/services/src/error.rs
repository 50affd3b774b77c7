//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, QuizReportError};
use storage::RankTableError;

/// Errors emitted while building the question catalog.
///
/// All of these indicate a broken upstream table and are fatal; the catalog
/// is never built from partial data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no capital on record for {0}")]
    MissingCapital(String),

    #[error("no population rank on record for {0}")]
    MissingRank(String),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors emitted while fetching live population ranks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RankFetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("population page returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("no captioned table found on the population page")]
    TableNotFound,

    #[error("unreadable rank for {state}: {cell:?}")]
    MalformedRow { state: String, cell: String },

    #[error("population page only listed {found} of {expected} states")]
    Incomplete { found: usize, expected: usize },

    #[error(transparent)]
    Invalid(#[from] RankTableError),
}

/// Errors emitted by the quiz session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question count {requested} is outside 1-{available}")]
    InvalidQuestionCount { requested: usize, available: usize },

    #[error("every question in this session has been answered")]
    Exhausted,

    #[error("the quiz is not finished yet")]
    NotComplete,

    #[error(transparent)]
    Report(#[from] QuizReportError),
}
