use std::hash::Hash;

use kendall_tau::top_weighted_statistics;
use rankcompare_core::{
    rank, settings::CoefficientSettings, Coefficient, RankCompareError, RankSequence, RankValue,
    TiePolicy,
};

use crate::check_paired;

/// AP correlation (Yilmaz, Aslam and Robertson 2008), a top-weighted variant of Kendall's tau.
///
/// Both lists hold the same unique items in rank order, position 0 being rank 1. The
/// `definitive` list is the reference that `evaluated` is judged against: for every rank level
/// of `evaluated` below the top, the fraction of items above it that are also above it in
/// `definitive` is averaged, then mapped to [-1, 1]. Mistakes near the top cost more.
///
/// Not symmetric unless `settings.symmetric` is set, in which case both directions are averaged.
pub fn ap_correlation<T>(
    evaluated: &[T],
    definitive: &[T],
    settings: &CoefficientSettings,
) -> Result<f64, RankCompareError>
where
    T: Eq + Hash,
{
    let forward = one_way(evaluated, definitive)?;
    if !settings.symmetric {
        return Ok(forward);
    }

    let backward = one_way(definitive, evaluated)?;
    Ok((forward + backward) / 2.0)
}

/// AP correlation of two paired score samples. The items are the sample indices, ordered by
/// `x` for the evaluated list and by `y` for the definitive one. Scores must not tie.
pub fn ap_correlation_scores<X, Y>(
    x: &[X],
    y: &[Y],
    settings: &CoefficientSettings,
) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    check_paired(x.len(), y.len())?;

    let evaluated = items_in_rank_order(&rank(x, TiePolicy::NotAllowed, settings.direction)?);
    let definitive = items_in_rank_order(&rank(y, TiePolicy::NotAllowed, settings.direction)?);

    ap_correlation(&evaluated, &definitive, settings)
}

fn one_way<T>(evaluated: &[T], definitive: &[T]) -> Result<f64, RankCompareError>
where
    T: Eq + Hash,
{
    let stats = top_weighted_statistics(evaluated, definitive)?;
    let value = 2.0 * stats.mean_level_precision() - 1.0;
    log::debug!("{} = {}", Coefficient::ApCorrelation, value);
    Ok(value)
}

/// Sample indices sorted by rank, best first.
fn items_in_rank_order(ranks: &RankSequence) -> Vec<usize> {
    let mut items: Vec<usize> = (0..ranks.len()).collect();
    items.sort_by(|&a, &b| ranks[a].total_cmp(&ranks[b]));
    items
}
