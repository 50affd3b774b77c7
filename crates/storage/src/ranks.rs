use std::collections::HashMap;

use thiserror::Error;

/// Where a rank table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrigin {
    /// Scraped from the live population page.
    Live,
    /// The table shipped inside the binary.
    Fallback,
}

/// Errors surfaced while validating a rank table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankTableError {
    #[error("population rank {rank} for {state} is outside 1-50")]
    RankOutOfRange { state: String, rank: u8 },

    #[error("population rank {rank} assigned twice")]
    DuplicateRank { rank: u8 },

    #[error("state ranked twice: {0}")]
    DuplicateState(String),
}

/// Population ranks for the 50 states, 1 = most populous.
///
/// Construction guarantees every rank is in 1-50 and that no rank or state
/// appears twice. Completeness against the directory is the catalog
/// builder's check, so a partial table from a degraded page still fails at
/// the right boundary.
#[derive(Debug, Clone)]
pub struct RankTable {
    ranks: HashMap<String, u8>,
    origin: RankOrigin,
}

impl RankTable {
    /// Validate and index a list of `(state, rank)` entries.
    ///
    /// # Errors
    ///
    /// Returns `RankTableError` on an out-of-range rank or a duplicate
    /// state or rank.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, u8)>,
        origin: RankOrigin,
    ) -> Result<Self, RankTableError> {
        let mut ranks = HashMap::new();
        let mut seen_ranks = [false; 51];

        for (state, rank) in entries {
            if !(1..=50).contains(&rank) {
                return Err(RankTableError::RankOutOfRange { state, rank });
            }
            if seen_ranks[usize::from(rank)] {
                return Err(RankTableError::DuplicateRank { rank });
            }
            if ranks.contains_key(&state) {
                return Err(RankTableError::DuplicateState(state));
            }
            seen_ranks[usize::from(rank)] = true;
            ranks.insert(state, rank);
        }

        Ok(Self { ranks, origin })
    }

    /// The table shipped inside the binary (2020 census ordering).
    ///
    /// # Panics
    ///
    /// Panics only if the built-in table is corrupt, which a test guards
    /// against.
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_entries(
            FALLBACK_RANKS
                .iter()
                .map(|(state, rank)| ((*state).to_string(), *rank)),
            RankOrigin::Fallback,
        )
        .expect("built-in rank table should be valid")
    }

    #[must_use]
    pub fn rank_of(&self, state: &str) -> Option<u8> {
        self.ranks.get(state).copied()
    }

    #[must_use]
    pub fn origin(&self) -> RankOrigin {
        self.origin
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.origin == RankOrigin::Fallback
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// 2020 census population ranks, used whenever the live fetch fails.
const FALLBACK_RANKS: [(&str, u8); 50] = [
    ("California", 1),
    ("Texas", 2),
    ("Florida", 3),
    ("New York", 4),
    ("Pennsylvania", 5),
    ("Illinois", 6),
    ("Ohio", 7),
    ("Georgia", 8),
    ("North Carolina", 9),
    ("Michigan", 10),
    ("New Jersey", 11),
    ("Virginia", 12),
    ("Washington", 13),
    ("Arizona", 14),
    ("Massachusetts", 15),
    ("Tennessee", 16),
    ("Indiana", 17),
    ("Missouri", 18),
    ("Maryland", 19),
    ("Wisconsin", 20),
    ("Colorado", 21),
    ("Minnesota", 22),
    ("South Carolina", 23),
    ("Alabama", 24),
    ("Louisiana", 25),
    ("Kentucky", 26),
    ("Oregon", 27),
    ("Oklahoma", 28),
    ("Connecticut", 29),
    ("Utah", 30),
    ("Iowa", 31),
    ("Nevada", 32),
    ("Arkansas", 33),
    ("Mississippi", 34),
    ("Kansas", 35),
    ("New Mexico", 36),
    ("Nebraska", 37),
    ("Idaho", 38),
    ("West Virginia", 39),
    ("Hawaii", 40),
    ("New Hampshire", 41),
    ("Maine", 42),
    ("Rhode Island", 43),
    ("Montana", 44),
    ("Delaware", 45),
    ("South Dakota", 46),
    ("North Dakota", 47),
    ("Alaska", 48),
    ("Vermont", 49),
    ("Wyoming", 50),
];
