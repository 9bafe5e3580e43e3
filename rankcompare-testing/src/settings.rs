use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessSettings {
    /// How many times every case kind is generated and checked.
    pub rounds: usize,
    /// Upper bound (inclusive) on the number of observations in a generated case.
    /// Cases always have at least two observations.
    pub max_length: usize,
    /// Number of distinct values a tied sample draws from.
    /// Fewer levels mean more ties.
    pub tie_levels: usize,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            rounds: 100,
            max_length: 200,
            tie_levels: 8,
        }
    }
}
