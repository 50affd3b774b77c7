mod count;
mod session_vm;

pub use count::{CountError, parse_question_count};
pub use session_vm::{SessionPhase, SessionVm};
