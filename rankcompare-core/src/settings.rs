use serde::{Deserialize, Serialize};

use crate::{Direction, TiePolicy};

#[derive(Clone, Debug, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoefficientSettings {
    /// The tie policy used when raw samples are converted to ranks.
    /// Top-down correlation ignores this and always uses midranks.
    pub tie_policy: TiePolicy,
    /// Which end of a raw sample is ranked 1.
    /// The default ranks the largest value first.
    pub direction: Direction,

    /// If set, tau-a and tau-c refuse tied input with `TiesPresent`.
    /// If not set, they are computed on tied input with the textbook formulas.
    pub reject_ties: bool,
    /// If set, AP correlation averages both directions of the comparison,
    /// so neither list is treated as the definitive one.
    pub symmetric: bool,
}

impl Default for CoefficientSettings {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::Midrank,
            direction: Direction::Descending,

            reject_ties: true,
            symmetric: false,
        }
    }
}
