//! Pair classification for rank correlation.
//!
//! [`pair_statistics`] sorts and merge-counts in O(n log n), [`naive_pair_statistics`] looks at
//! every pair and is kept as a reference. [`top_weighted_statistics`] answers the per-rank-level
//! questions that AP correlation needs.

use rankcompare_core::{PairCount, RankCompareError, RankValue};

mod merge;
mod naive;
mod restricted;
mod statistics;


pub use merge::pair_statistics;
pub use naive::naive_pair_statistics;
pub use restricted::{naive_top_weighted_statistics, top_weighted_statistics, TopWeightedStatistics};
pub use statistics::PairStatistics;

/// Calculate the Kendall tau distance between two slices.
/// This counts the pairs whose relative order differs between the two slices:
/// the discordant pairs, plus the pairs that are tied in one slice but not in the other.
/// See the [Wikipedia article](https://en.wikipedia.org/wiki/Kendall_tau_distance).
pub fn kendall_tau_distance<X, Y>(x: &[X], y: &[Y]) -> Result<PairCount, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let stats = pair_statistics(x, y)?;
    Ok(stats.discordant + stats.x_only_ties() + stats.y_only_ties())
}

/// Calculate the normalised Kendall tau distance between two slices.
/// The normalised Kendall tau distance is the Kendall tau distance divided by the number of pairs.
pub fn normalised_kendall_tau_distance<X, Y>(x: &[X], y: &[Y]) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let stats = pair_statistics(x, y)?;
    if stats.pairs == 0 {
        return Ok(0.0);
    }
    let distance = stats.discordant + stats.x_only_ties() + stats.y_only_ties();
    Ok(distance as f64 / stats.pairs as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wikipedia_test() {
        // Values taken from https://en.wikipedia.org/wiki/Kendall_tau_distance (2024-06-22)
        let x = vec![1, 2, 3, 4, 5];
        let y = vec![3, 4, 1, 2, 5];
        assert_eq!(kendall_tau_distance(&x, &y).unwrap(), 4);
        assert_eq!(normalised_kendall_tau_distance(&x, &y).unwrap(), 0.4);
    }

    #[test]
    fn ties_in_one_slice_count_as_disagreement() {
        let x = vec![1, 1, 2];
        let y = vec![1, 2, 3];
        assert_eq!(kendall_tau_distance(&x, &y).unwrap(), 1);
        assert_eq!(kendall_tau_distance(&x, &x).unwrap(), 0);
    }
}
