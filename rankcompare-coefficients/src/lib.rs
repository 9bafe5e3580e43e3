//! Rank correlation and rank similarity coefficients.
//!
//! Every function is a pure transform of its inputs. Raw samples are ranked with the
//! [`CoefficientSettings`] tie policy and direction before anything is counted.

use kendall_tau::{pair_statistics, PairStatistics};
use rankcompare_core::{
    rank, settings::CoefficientSettings, Coefficient, InputError, RankCompareError, RankSequence,
    RankValue,
};

mod ap;
mod association;
pub mod descriptive;
mod overlap;
mod spearman;
mod tau;
mod top_down;


pub use ap::{ap_correlation, ap_correlation_scores};
pub use association::{gamma, somers_d, somers_d_x_given_y, somers_d_y_given_x};
pub use overlap::{average_overlap, percent_overlap, rank_biased_overlap};
pub use spearman::{
    footrule_similarity, normalized_spearman_footrule, spearman_footrule, spearman_rho,
};
pub use tau::{tau_a, tau_b, tau_c};
pub use top_down::{savage_scores, top_down_correlation, top_down_correlation_ranked};

/// Two samples ranked under the same settings, plus their pair statistics.
pub(crate) struct RankedPair {
    pub x: RankSequence,
    pub y: RankSequence,
    pub statistics: PairStatistics,
}

impl RankedPair {
    pub fn new<X, Y>(x: &[X], y: &[Y], settings: &CoefficientSettings) -> Result<Self, RankCompareError>
    where
        X: RankValue,
        Y: RankValue,
    {
        let (x, y) = rank_both(x, y, settings)?;
        let statistics = pair_statistics(x.ranks(), y.ranks())?;
        Ok(Self { x, y, statistics })
    }
}

/// Ranks two paired samples under the settings, after checking they can be paired at all.
pub(crate) fn rank_both<X, Y>(
    x: &[X],
    y: &[Y],
    settings: &CoefficientSettings,
) -> Result<(RankSequence, RankSequence), RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    check_paired(x.len(), y.len())?;
    Ok((
        rank(x, settings.tie_policy, settings.direction)?,
        rank(y, settings.tie_policy, settings.direction)?,
    ))
}

pub(crate) fn check_paired(left: usize, right: usize) -> Result<(), RankCompareError> {
    if left != right {
        return Err(RankCompareError::LengthMismatch { left, right });
    }
    if left < 2 {
        return Err(InputError::TooFewObservations {
            required: 2,
            actual: left,
        }
        .into());
    }
    Ok(())
}

/// `numerator / denominator`, or `UndefinedCoefficient` when the denominator is zero.
pub(crate) fn ratio(
    numerator: f64,
    denominator: f64,
    coefficient: Coefficient,
) -> Result<f64, RankCompareError> {
    if denominator == 0.0 {
        return Err(RankCompareError::UndefinedCoefficient { coefficient });
    }
    let value = numerator / denominator;
    log::debug!("{} = {}", coefficient, value);
    Ok(value)
}
