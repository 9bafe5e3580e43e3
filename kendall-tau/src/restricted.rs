//! Pair statistics restricted to "is the item above me ranked above me" questions, one rank
//! level at a time. This is what top-weighted coefficients such as AP correlation need:
//! the pairs at level r are weighted by 1/(r-1), so a global count is not enough.

use std::{collections::HashMap, hash::Hash};

use itertools::Itertools;
use rankcompare_core::{pair_count, InputError, PairCount, RankCompareError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopWeightedStatistics {
    pub pairs: PairCount,
    pub concordant: PairCount,
    pub discordant: PairCount,
    /// Entry `r - 2` holds, for the item at rank level `r` of the evaluated list,
    /// how many of the `r - 1` items above it are also above it in the definitive list.
    pub concordant_by_level: Vec<PairCount>,
}

impl TopWeightedStatistics {
    /// Mean over rank levels 2..=n of the fraction of higher-ranked items that are
    /// correctly ordered relative to the item at that level.
    pub fn mean_level_precision(&self) -> f64 {
        if self.concordant_by_level.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .concordant_by_level
            .iter()
            .enumerate()
            .map(|(offset, &concordant)| concordant as f64 / (offset + 1) as f64)
            .sum();
        total / self.concordant_by_level.len() as f64
    }
}

/// Binary indexed tree over definitive positions, counting how many have been seen.
struct FenwickTree {
    counts: Vec<PairCount>,
}

impl FenwickTree {
    fn new(len: usize) -> Self {
        Self {
            counts: vec![0; len + 1],
        }
    }

    fn insert(&mut self, position: usize) {
        let mut i = position + 1;
        while i < self.counts.len() {
            self.counts[i] += 1;
            i += i & i.wrapping_neg();
        }
    }

    /// Number of inserted positions strictly below `position`.
    fn count_below(&self, position: usize) -> PairCount {
        let mut i = position;
        let mut total = 0;
        while i > 0 {
            total += self.counts[i];
            i -= i & i.wrapping_neg();
        }
        total
    }
}

/// Computes the per-level concordance of `evaluated` against the `definitive` ranking.
/// Both lists hold items in rank order, position 0 being rank 1.
pub fn top_weighted_statistics<T>(
    evaluated: &[T],
    definitive: &[T],
) -> Result<TopWeightedStatistics, RankCompareError>
where
    T: Eq + Hash,
{
    let positions = definitive_positions(evaluated, definitive)?;

    let mut tree = FenwickTree::new(positions.len());
    let mut concordant_by_level = Vec::with_capacity(positions.len() - 1);

    for (level, &position) in positions.iter().enumerate() {
        if level > 0 {
            concordant_by_level.push(tree.count_below(position));
        }
        tree.insert(position);
    }

    log::debug!("Computed top-weighted statistics over {} levels", concordant_by_level.len());

    Ok(collect(positions.len(), concordant_by_level))
}

/// Quadratic reference for [`top_weighted_statistics`].
pub fn naive_top_weighted_statistics<T>(
    evaluated: &[T],
    definitive: &[T],
) -> Result<TopWeightedStatistics, RankCompareError>
where
    T: Eq + Hash,
{
    let positions = definitive_positions(evaluated, definitive)?;

    let concordant_by_level = (1..positions.len())
        .map(|level| {
            positions[..level]
                .iter()
                .filter(|&&above| above < positions[level])
                .count() as PairCount
        })
        .collect();

    Ok(collect(positions.len(), concordant_by_level))
}

fn collect(n: usize, concordant_by_level: Vec<PairCount>) -> TopWeightedStatistics {
    let pairs = pair_count(n);
    let concordant = concordant_by_level.iter().sum();

    TopWeightedStatistics {
        pairs,
        concordant,
        discordant: pairs - concordant,
        concordant_by_level,
    }
}

/// For each evaluated item, its position in the definitive list.
/// Rejects lists with repeated items or with different item sets.
fn definitive_positions<T>(evaluated: &[T], definitive: &[T]) -> Result<Vec<usize>, RankCompareError>
where
    T: Eq + Hash,
{
    if !evaluated.iter().all_unique() || !definitive.iter().all_unique() {
        return Err(RankCompareError::NotUnique);
    }
    if evaluated.len() != definitive.len() {
        return Err(RankCompareError::NotConjoint);
    }

    let lookup: HashMap<&T, usize> = definitive
        .iter()
        .enumerate()
        .map(|(position, item)| (item, position))
        .collect();

    let positions = evaluated
        .iter()
        .map(|item| lookup.get(item).copied().ok_or(RankCompareError::NotConjoint))
        .collect::<Result<Vec<usize>, RankCompareError>>()?;

    if positions.len() < 2 {
        return Err(InputError::TooFewObservations {
            required: 2,
            actual: positions.len(),
        }
        .into());
    }

    Ok(positions)
}
