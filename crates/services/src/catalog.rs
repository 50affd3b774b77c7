use quiz_core::model::Question;
use storage::{RankTable, StateDirectory};

use crate::error::CatalogError;

/// All fifty questions, one per state, in the directory's canonical order.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    #[cfg(test)]
    pub(crate) fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Which state the given capital belongs to, over the full catalog.
    ///
    /// This backs the "did you mean" hint, so it deliberately searches all
    /// fifty questions rather than a session's sample.
    #[must_use]
    pub fn state_for_capital(&self, capital: &str) -> Option<&str> {
        self.questions
            .iter()
            .find(|question| question.capital() == capital)
            .map(Question::state)
    }
}

/// Combine the directory and rank table into one question per state.
///
/// # Errors
///
/// Returns `CatalogError` if a state is missing a capital or a rank, or if
/// a rank is outside 1-50. All are upstream data defects; nothing here
/// retries or repairs.
pub fn build_catalog(
    directory: &StateDirectory,
    ranks: &RankTable,
) -> Result<QuestionCatalog, CatalogError> {
    let mut questions = Vec::with_capacity(directory.len());

    for state in directory.state_names() {
        let capital = directory
            .capital_of(state)
            .ok_or_else(|| CatalogError::MissingCapital(state.clone()))?;
        let rank = ranks
            .rank_of(state)
            .ok_or_else(|| CatalogError::MissingRank(state.clone()))?;
        questions.push(Question::new(state.clone(), capital, rank)?);
    }

    Ok(QuestionCatalog { questions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::RankOrigin;

    #[test]
    fn builds_one_question_per_state_in_directory_order() {
        let directory = StateDirectory::bundled();
        let catalog = build_catalog(&directory, &RankTable::fallback()).unwrap();

        assert_eq!(catalog.len(), 50);
        for (state, question) in directory.state_names().iter().zip(catalog.questions()) {
            assert_eq!(question.state(), state);
            assert_eq!(directory.capital_of(state), Some(question.capital()));
        }
    }

    #[test]
    fn catalog_ranks_form_a_permutation() {
        let catalog = build_catalog(&StateDirectory::bundled(), &RankTable::fallback()).unwrap();

        let mut seen = [false; 51];
        for question in catalog.questions() {
            let rank = usize::from(question.population_rank());
            assert!(!seen[rank], "rank {rank} assigned twice");
            seen[rank] = true;
        }
        assert!(seen[1..=50].iter().all(|seen| *seen));
    }

    #[test]
    fn catalog_weights_sum_to_one_hundred_fifty() {
        let catalog = build_catalog(&StateDirectory::bundled(), &RankTable::fallback()).unwrap();
        let total: u32 = catalog.questions().iter().map(Question::weight).sum();
        assert_eq!(total, 150);
    }

    #[test]
    fn missing_rank_fails_the_build() {
        let directory = StateDirectory::bundled();
        let partial = RankTable::from_entries(
            [("Texas".to_string(), 2)],
            RankOrigin::Live,
        )
        .unwrap();

        let err = build_catalog(&directory, &partial).unwrap_err();
        assert!(matches!(err, CatalogError::MissingRank(_)));
    }

    #[test]
    fn capital_lookup_spans_the_full_catalog() {
        let catalog = build_catalog(&StateDirectory::bundled(), &RankTable::fallback()).unwrap();

        assert_eq!(catalog.state_for_capital("Sacramento"), Some("California"));
        assert_eq!(catalog.state_for_capital("Austin"), Some("Texas"));
        assert_eq!(catalog.state_for_capital("Gotham"), None);
    }
}
