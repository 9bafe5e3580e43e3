use serde::{Deserialize, Serialize};

mod error;
pub mod random;
pub mod rank;
pub mod settings;
pub mod value;


pub use error::{InputError, RankCompareError};
pub use rank::{rank, tie_keys, Direction, RankSequence, TiePolicy};
pub use value::{NumericKind, RankValue, Value};

/// Counts of index pairs are kept as u64, n(n-1)/2 overflows u32 quickly.
pub type PairCount = u64;

/// Every coefficient the workspace can compute. Used to label errors and by the harness.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Coefficient {
    TauA,
    TauB,
    TauC,
    Gamma,
    SomersD,
    ApCorrelation,
    TopDown,
    SpearmanRho,
}

/// Number of unordered pairs among `n` observations.
pub fn pair_count(n: usize) -> PairCount {
    let n = n as PairCount;
    n * n.saturating_sub(1) / 2
}
