mod question;
mod report;

pub use question::{Question, QuestionError, weight_for_rank};
pub use report::{QuizReport, QuizReportError};
