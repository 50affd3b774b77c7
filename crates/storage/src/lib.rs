#![forbid(unsafe_code)]

pub mod directory;
pub mod ranks;

pub use directory::{DirectoryError, STATE_COUNT, StateDirectory};
pub use ranks::{RankOrigin, RankTable, RankTableError};
