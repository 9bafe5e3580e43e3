use kendall_tau::PairStatistics;
use rankcompare_core::{settings::CoefficientSettings, Coefficient, RankCompareError, RankValue};

use crate::{ratio, RankedPair};

/// Goodman and Kruskal's gamma: (P - Q) / (P + Q). Tied pairs are left out entirely.
pub fn gamma<X, Y>(x: &[X], y: &[Y], settings: &CoefficientSettings) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let stats = RankedPair::new(x, y, settings)?.statistics;
    ratio(
        stats.score(),
        (stats.concordant + stats.discordant) as f64,
        Coefficient::Gamma,
    )
}

/// Somers' D with Y dependent on X: (P - Q) / (P + Q + Ty).
/// `Ty` counts every pair tied in Y, including the pairs tied in X as well.
pub fn somers_d_y_given_x<X, Y>(
    x: &[X],
    y: &[Y],
    settings: &CoefficientSettings,
) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let stats = RankedPair::new(x, y, settings)?.statistics;
    y_given_x(&stats)
}

/// Somers' D with X dependent on Y: (P - Q) / (P + Q + Tx).
pub fn somers_d_x_given_y<X, Y>(
    x: &[X],
    y: &[Y],
    settings: &CoefficientSettings,
) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let stats = RankedPair::new(x, y, settings)?.statistics;
    x_given_y(&stats)
}

/// Symmetric Somers' D, the mean of both asymmetric versions.
pub fn somers_d<X, Y>(x: &[X], y: &[Y], settings: &CoefficientSettings) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let stats = RankedPair::new(x, y, settings)?.statistics;
    Ok((y_given_x(&stats)? + x_given_y(&stats)?) / 2.0)
}

fn y_given_x(stats: &PairStatistics) -> Result<f64, RankCompareError> {
    ratio(
        stats.score(),
        (stats.concordant + stats.discordant + stats.y_ties) as f64,
        Coefficient::SomersD,
    )
}

fn x_given_y(stats: &PairStatistics) -> Result<f64, RankCompareError> {
    ratio(
        stats.score(),
        (stats.concordant + stats.discordant + stats.x_ties) as f64,
        Coefficient::SomersD,
    )
}
