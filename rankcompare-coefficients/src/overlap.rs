//! Set-based similarity of ranked item lists. Unlike the correlation coefficients these
//! work on lists that need not contain the same items, by comparing their prefixes.

use std::{collections::HashSet, hash::Hash};

use rankcompare_core::{InputError, RankCompareError};

fn resolve_depth(a: usize, b: usize, depth: Option<usize>) -> Result<usize, RankCompareError> {
    let max = a.max(b);
    let depth = depth.unwrap_or(max);
    if depth == 0 || depth > max {
        return Err(InputError::DepthOutOfBounds { depth, max }.into());
    }
    Ok(depth)
}

/// Size of the intersection over size of the union of the first `depth` items of each list.
/// `depth` defaults to the length of the longer list.
pub fn percent_overlap<T>(a: &[T], b: &[T], depth: Option<usize>) -> Result<f64, RankCompareError>
where
    T: Eq + Hash,
{
    let depth = resolve_depth(a.len(), b.len(), depth)?;
    let a: HashSet<&T> = a.iter().take(depth).collect();
    let b: HashSet<&T> = b.iter().take(depth).collect();

    let intersection = a.intersection(&b).count();
    let union = a.union(&b).count();
    Ok(intersection as f64 / union as f64)
}

/// Agreement at each depth d in 1..=depth: the share of the first d items the two lists have in common.
fn prefix_agreements<T>(a: &[T], b: &[T], depth: usize) -> Vec<f64>
where
    T: Eq + Hash,
{
    let mut seen_a: HashSet<&T> = HashSet::new();
    let mut seen_b: HashSet<&T> = HashSet::new();
    let mut overlap = 0;

    (0..depth)
        .map(|d| {
            if let Some(item) = a.get(d) {
                if seen_a.insert(item) && seen_b.contains(item) {
                    overlap += 1;
                }
            }
            if let Some(item) = b.get(d) {
                if seen_b.insert(item) && seen_a.contains(item) {
                    overlap += 1;
                }
            }
            overlap as f64 / (d + 1) as f64
        })
        .collect()
}

/// Average overlap (Fagin et al. 2003; Wu and Crestani 2003): the mean agreement over
/// every prefix depth up to `depth`. Top-weighted, in [0, 1], 1 meaning identical prefixes.
pub fn average_overlap<T>(a: &[T], b: &[T], depth: Option<usize>) -> Result<f64, RankCompareError>
where
    T: Eq + Hash,
{
    let depth = resolve_depth(a.len(), b.len(), depth)?;
    let agreements = prefix_agreements(a, b, depth);
    Ok(agreements.iter().sum::<f64>() / depth as f64)
}

/// Rank-biased overlap (Webber, Moffat and Zobel 2010) truncated at `depth`:
/// (1 - p) * sum over d of p^(d-1) * agreement(d). This is a lower bound on the
/// infinite-depth value. Smaller `persistence` concentrates the weight on the top.
pub fn rank_biased_overlap<T>(
    a: &[T],
    b: &[T],
    persistence: f64,
    depth: Option<usize>,
) -> Result<f64, RankCompareError>
where
    T: Eq + Hash,
{
    if !(persistence > 0.0 && persistence < 1.0) {
        return Err(InputError::PersistenceOutOfRange.into());
    }
    let depth = resolve_depth(a.len(), b.len(), depth)?;

    let weighted: f64 = prefix_agreements(a, b, depth)
        .iter()
        .enumerate()
        .map(|(d, agreement)| persistence.powi(d as i32) * agreement)
        .sum();
    Ok((1.0 - persistence) * weighted)
}
