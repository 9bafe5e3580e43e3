//! Knight's O(n log n) pair classification.
//!
//! Observations are sorted by (X, Y), then a bottom-up merge sort over the Y column counts
//! the inversions, which are exactly the discordant pairs. Sorting by Y within an X tie
//! keeps X-tied pairs from ever being counted as inversions, and the merge takes from the
//! left run on equal Y so Y-tied pairs are never counted either. Tie counts come from the
//! lengths of runs of equal keys before and after the merge sort.

use itertools::Itertools;
use rankcompare_core::{pair_count, tie_keys, PairCount, RankCompareError, RankValue};

use crate::PairStatistics;

/// Classifies every pair of observations of two paired samples.
pub fn pair_statistics<X, Y>(x: &[X], y: &[Y]) -> Result<PairStatistics, RankCompareError>
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

    Ok(count_pairs(&x_keys, &y_keys))
}

/// Same as [`pair_statistics`], on keys that are already ordered like the samples.
pub(crate) fn count_pairs(x_keys: &[usize], y_keys: &[usize]) -> PairStatistics {
    let n = x_keys.len();

    let mut observations: Vec<(usize, usize)> = x_keys
        .iter()
        .copied()
        .zip(y_keys.iter().copied())
        .collect();
    observations.sort_unstable();

    let x_ties = tied_pairs(observations.iter().map(|(x, _)| x));
    let joint_ties = tied_pairs(observations.iter());

    let mut y_column: Vec<usize> = observations.iter().map(|(_, y)| *y).collect();
    let discordant = count_inversions(&mut y_column);
    let y_ties = tied_pairs(y_column.iter());

    let pairs = pair_count(n);
    // Pairs tied in neither sequence are either concordant or discordant.
    let concordant = pairs + joint_ties - x_ties - y_ties - discordant;

    log::debug!(
        "Classified {} pairs: {} concordant, {} discordant, {} x ties, {} y ties, {} joint ties",
        pairs,
        concordant,
        discordant,
        x_ties,
        y_ties,
        joint_ties
    );

    PairStatistics {
        pairs,
        concordant,
        discordant,
        x_ties,
        y_ties,
        joint_ties,
    }
}

/// Sum of C(len, 2) over the runs of equal adjacent items.
fn tied_pairs<I>(items: I) -> PairCount
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    items
        .into_iter()
        .dedup_with_count()
        .map(|(count, _)| pair_count(count))
        .sum()
}

/// Sorts `values` ascending and returns the number of inversions it contained.
fn count_inversions(values: &mut Vec<usize>) -> PairCount {
    let n = values.len();
    let mut buffer = vec![0; n];
    let mut inversions = 0;
    let mut width = 1;

    while width < n {
        let mut start = 0;
        while start < n {
            let middle = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            inversions += merge_runs(
                &values[start..middle],
                &values[middle..end],
                &mut buffer[start..end],
            );
            start = end;
        }
        std::mem::swap(values, &mut buffer);
        log::trace!("Merge pass of width {} done, {} inversions so far", width, inversions);
        width *= 2;
    }

    inversions
}

/// Merges two sorted runs into `out`. Every element taken from the right run jumps
/// over all elements still waiting in the left run, and each of those is an inversion.
fn merge_runs(left: &[usize], right: &[usize], out: &mut [usize]) -> PairCount {
    let (mut i, mut j) = (0, 0);
    let mut inversions = 0;

    for slot in out.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
            inversions += (left.len() - i) as PairCount;
        }
    }

    inversions
}
