use std::cmp::Ordering;

use itertools::Itertools;
use rankcompare_core::{pair_count, tie_keys, RankCompareError, RankValue};

use crate::PairStatistics;

/// Classifies every pair by looking at all n(n-1)/2 of them.
/// Quadratic, kept as the reference the merge-based engine is checked against.
pub fn naive_pair_statistics<X, Y>(x: &[X], y: &[Y]) -> Result<PairStatistics, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    if x.len() != y.len() {
        return Err(RankCompareError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let x_keys = tie_keys(x)?;
    let y_keys = tie_keys(y)?;

    let mut stats = PairStatistics {
        pairs: pair_count(x.len()),
        ..Default::default()
    };

    for (i, j) in (0..x.len()).tuple_combinations() {
        let a = x_keys[i].cmp(&x_keys[j]);
        let b = y_keys[i].cmp(&y_keys[j]);

        match (a, b) {
            (Ordering::Equal, Ordering::Equal) => {
                stats.x_ties += 1;
                stats.y_ties += 1;
                stats.joint_ties += 1;
            }
            (Ordering::Equal, _) => stats.x_ties += 1,
            (_, Ordering::Equal) => stats.y_ties += 1,
            (a, b) if a == b => stats.concordant += 1,
            _ => stats.discordant += 1,
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wikipedia_example() {
        // Values taken from https://en.wikipedia.org/wiki/Kendall_tau_distance (2024-06-22)
        let stats = naive_pair_statistics(&[1, 2, 3, 4, 5], &[3, 4, 1, 2, 5]).unwrap();
        assert_eq!(stats.discordant, 4);
        assert_eq!(stats.concordant, 6);
    }

    #[test]
    fn ties() {
        let stats = naive_pair_statistics(&[1, 1, 2, 2], &[1, 2, 2, 2]).unwrap();
        assert_eq!(stats.x_ties, 2);
        assert_eq!(stats.y_ties, 3);
        assert_eq!(stats.joint_ties, 1);
        assert_eq!(stats.concordant, 2);
    }
}
