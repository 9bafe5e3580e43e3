use itertools::Itertools;
use rankcompare_core::{
    rank, settings::CoefficientSettings, Coefficient, InputError, RankCompareError, RankSequence,
    RankValue, TiePolicy,
};

use crate::{check_paired, descriptive::pearson_r};

/// Savage scores of a midrank sequence: rank r out of n scores 1/r + 1/(r+1) + ... + 1/n,
/// so the top rank scores highest. A tie group scores the mean over the positions it covers.
pub fn savage_scores(ranks: &RankSequence) -> Result<Vec<f64>, RankCompareError> {
    if ranks.tie_policy() != TiePolicy::Midrank {
        return Err(InputError::NotMidrank.into());
    }

    let n = ranks.len();

    // tail[r] = 1/r + ... + 1/n, tail[n + 1] = 0.
    let mut tail = vec![0.0; n + 2];
    for r in (1..=n).rev() {
        tail[r] = tail[r + 1] + 1.0 / r as f64;
    }

    let group_sizes = ranks.iter().map(|midrank| midrank.to_bits()).counts();

    Ok(ranks
        .iter()
        .map(|&midrank| {
            let size = group_sizes[&midrank.to_bits()];
            // A midrank m over `size` positions starts at m - (size - 1) / 2.
            let first = (midrank - (size - 1) as f64 / 2.0).round() as usize;
            tail[first..first + size].iter().sum::<f64>() / size as f64
        })
        .collect())
}

/// Top-down correlation (Iman and Conover 1987): Pearson's r on Savage scores,
/// which puts most of the weight on agreement among the top ranks.
///
/// Samples are always ranked with midranks, in `settings.direction`.
pub fn top_down_correlation<X, Y>(
    x: &[X],
    y: &[Y],
    settings: &CoefficientSettings,
) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    check_paired(x.len(), y.len())?;

    let x_ranks = rank(x, TiePolicy::Midrank, settings.direction)?;
    let y_ranks = rank(y, TiePolicy::Midrank, settings.direction)?;

    top_down_correlation_ranked(&x_ranks, &y_ranks)
}

/// [`top_down_correlation`] on sequences that are already ranked with midranks.
pub fn top_down_correlation_ranked(
    x: &RankSequence,
    y: &RankSequence,
) -> Result<f64, RankCompareError> {
    check_paired(x.len(), y.len())?;

    let x_scores = savage_scores(x)?;
    let y_scores = savage_scores(y)?;

    pearson_r(&x_scores, &y_scores).ok_or(RankCompareError::UndefinedCoefficient {
        coefficient: Coefficient::TopDown,
    })
}
