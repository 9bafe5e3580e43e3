use rankcompare_core::PairCount;
use serde::{Deserialize, Serialize};

/// Sufficient statistics for the Kendall family of coefficients.
///
/// Every unordered pair of observations lands in exactly one of: concordant, discordant,
/// tied in X only, tied in Y only, tied in both. `x_ties` and `y_ties` include the pairs
/// tied in both, which are also counted on their own in `joint_ties`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairStatistics {
    /// Number of unordered pairs, n(n-1)/2.
    pub pairs: PairCount,
    pub concordant: PairCount,
    pub discordant: PairCount,
    /// Pairs tied in X, whether or not they are also tied in Y.
    pub x_ties: PairCount,
    /// Pairs tied in Y, whether or not they are also tied in X.
    pub y_ties: PairCount,
    /// Pairs tied in both X and Y.
    pub joint_ties: PairCount,
}

impl PairStatistics {
    pub fn has_ties(&self) -> bool {
        self.x_ties + self.y_ties > 0
    }

    pub fn x_only_ties(&self) -> PairCount {
        self.x_ties - self.joint_ties
    }

    pub fn y_only_ties(&self) -> PairCount {
        self.y_ties - self.joint_ties
    }

    /// Concordant minus discordant, the numerator shared by every Kendall-style coefficient.
    pub fn score(&self) -> f64 {
        self.concordant as f64 - self.discordant as f64
    }

    /// Number of pairs accounted for by the classification. Always equal to `pairs`.
    pub fn classified(&self) -> PairCount {
        self.concordant + self.discordant + self.x_ties + self.y_ties - self.joint_ties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_counts() {
        let stats = PairStatistics {
            pairs: 10,
            concordant: 4,
            discordant: 2,
            x_ties: 3,
            y_ties: 2,
            joint_ties: 1,
        };
        assert!(stats.has_ties());
        assert_eq!(stats.x_only_ties(), 2);
        assert_eq!(stats.y_only_ties(), 1);
        assert_eq!(stats.score(), 2.0);
        assert_eq!(stats.classified(), 10);
    }
}
