use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Number of states the directory must contain.
pub const STATE_COUNT: usize = 50;

const BUNDLED_TABLE: &str = include_str!("data/state_capitals.csv");

/// Errors surfaced while loading the state/capital table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DirectoryError {
    #[error("could not open state table: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("expected {STATE_COUNT} states, found {found}")]
    WrongStateCount { found: usize },

    #[error("state listed twice: {0}")]
    DuplicateState(String),

    #[error("capital listed twice: {0}")]
    DuplicateCapital(String),
}

#[derive(Debug, Deserialize)]
struct DirectoryRow {
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Capital")]
    capital: String,
}

/// The 50 US states and their capitals, in table order.
///
/// Capitals are globally unique, so the capital-to-state lookup is a true
/// inverse of the state-to-capital lookup. Both are enforced at load time.
#[derive(Debug, Clone)]
pub struct StateDirectory {
    state_names: Vec<String>,
    capitals_by_state: HashMap<String, String>,
    states_by_capital: HashMap<String, String>,
}

impl StateDirectory {
    /// Load the directory from CSV with a `State,Capital` header row.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError` on CSV problems, duplicate states or
    /// capitals, or a row count other than fifty.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut state_names = Vec::with_capacity(STATE_COUNT);
        let mut capitals_by_state = HashMap::with_capacity(STATE_COUNT);
        let mut states_by_capital = HashMap::with_capacity(STATE_COUNT);

        for row in csv_reader.deserialize() {
            let DirectoryRow { state, capital } = row?;

            if capitals_by_state.contains_key(&state) {
                return Err(DirectoryError::DuplicateState(state));
            }
            if states_by_capital.contains_key(&capital) {
                return Err(DirectoryError::DuplicateCapital(capital));
            }

            state_names.push(state.clone());
            capitals_by_state.insert(state.clone(), capital.clone());
            states_by_capital.insert(capital, state);
        }

        if state_names.len() != STATE_COUNT {
            return Err(DirectoryError::WrongStateCount {
                found: state_names.len(),
            });
        }

        Ok(Self {
            state_names,
            capitals_by_state,
            states_by_capital,
        })
    }

    /// Load the directory from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Io` if the file cannot be opened, otherwise
    /// the same errors as [`StateDirectory::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// The copy of the table shipped inside the binary.
    ///
    /// # Panics
    ///
    /// Panics only if the bundled asset itself is corrupt, which a test
    /// guards against.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_reader(BUNDLED_TABLE.as_bytes()).expect("bundled state table should be valid")
    }

    /// State names in canonical table order.
    #[must_use]
    pub fn state_names(&self) -> &[String] {
        &self.state_names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state_names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state_names.is_empty()
    }

    #[must_use]
    pub fn contains_state(&self, state: &str) -> bool {
        self.capitals_by_state.contains_key(state)
    }

    #[must_use]
    pub fn capital_of(&self, state: &str) -> Option<&str> {
        self.capitals_by_state.get(state).map(String::as_str)
    }

    #[must_use]
    pub fn state_of_capital(&self, capital: &str) -> Option<&str> {
        self.states_by_capital.get(capital).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_table(rows: &[(&str, &str)]) -> String {
        let mut table = String::from("State,Capital\n");
        for (state, capital) in rows {
            table.push_str(&format!("{state},{capital}\n"));
        }
        table
    }

    #[test]
    fn bundled_table_loads_and_is_consistent() {
        let directory = StateDirectory::bundled();

        assert_eq!(directory.len(), STATE_COUNT);
        assert_eq!(directory.capital_of("Texas"), Some("Austin"));
        assert_eq!(directory.state_of_capital("Sacramento"), Some("California"));
        for state in directory.state_names() {
            let capital = directory.capital_of(state).unwrap();
            assert_eq!(directory.state_of_capital(capital), Some(state.as_str()));
        }
    }

    #[test]
    fn rejects_duplicate_state() {
        let table = tiny_table(&[("Texas", "Austin"), ("Texas", "Houston")]);
        let err = StateDirectory::from_reader(table.as_bytes()).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateState(state) if state == "Texas"));
    }

    #[test]
    fn rejects_duplicate_capital() {
        let table = tiny_table(&[("Texas", "Austin"), ("Nontexas", "Austin")]);
        let err = StateDirectory::from_reader(table.as_bytes()).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateCapital(capital) if capital == "Austin"));
    }

    #[test]
    fn rejects_short_table() {
        let table = tiny_table(&[("Texas", "Austin")]);
        let err = StateDirectory::from_reader(table.as_bytes()).unwrap_err();
        assert!(matches!(err, DirectoryError::WrongStateCount { found: 1 }));
    }

    #[test]
    fn unknown_names_return_none() {
        let directory = StateDirectory::bundled();
        assert_eq!(directory.capital_of("Guam"), None);
        assert_eq!(directory.state_of_capital("Paris"), None);
        assert!(!directory.contains_state("Puerto Rico"));
    }
}
