use rankcompare_core::{settings::CoefficientSettings, Coefficient, RankCompareError, RankValue};

use crate::{descriptive::pearson_r, rank_both};

/// Spearman's rho, Pearson's correlation on the ranks themselves.
pub fn spearman_rho<X, Y>(x: &[X], y: &[Y], settings: &CoefficientSettings) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let (x_ranks, y_ranks) = rank_both(x, y, settings)?;
    pearson_r(&x_ranks, &y_ranks).ok_or(RankCompareError::UndefinedCoefficient {
        coefficient: Coefficient::SpearmanRho,
    })
}

/// Spearman's footrule, the Manhattan distance between the two rank vectors.
pub fn spearman_footrule<X, Y>(
    x: &[X],
    y: &[Y],
    settings: &CoefficientSettings,
) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let (x_ranks, y_ranks) = rank_both(x, y, settings)?;
    Ok(x_ranks
        .iter()
        .zip(y_ranks.iter())
        .map(|(a, b)| (a - b).abs())
        .sum())
}

/// Footrule divided by its maximum for n items, giving a distance in [0, 1].
/// The maximum is n^2 / 2 for even n and (n + 1)(n - 1) / 2 for odd n.
pub fn normalized_spearman_footrule<X, Y>(
    x: &[X],
    y: &[Y],
    settings: &CoefficientSettings,
) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let footrule = spearman_footrule(x, y, settings)?;
    let n = x.len() as f64;
    let maximum = if x.len() % 2 == 0 {
        n * n / 2.0
    } else {
        (n + 1.0) * (n - 1.0) / 2.0
    };
    Ok(footrule / maximum)
}

/// `1 - normalized_spearman_footrule`, so 1 means identical rankings.
pub fn footrule_similarity<X, Y>(
    x: &[X],
    y: &[Y],
    settings: &CoefficientSettings,
) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    Ok(1.0 - normalized_spearman_footrule(x, y, settings)?)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rho() {
        let settings = CoefficientSettings::default();
        let x = [1, 2, 3, 4, 5];
        assert_abs_diff_eq!(spearman_rho(&x, &x, &settings).unwrap(), 1.0);
        assert_abs_diff_eq!(spearman_rho(&x, &[5, 4, 3, 2, 1], &settings).unwrap(), -1.0);
        // 1 - 6 * 2 / (5 * 24)
        assert_abs_diff_eq!(
            spearman_rho(&x, &[2, 1, 3, 4, 5], &settings).unwrap(),
            0.9,
            epsilon = 1e-12
        );
    }

    #[test]
    fn footrule() {
        let settings = CoefficientSettings::default();
        let x = [1, 2, 3, 4];
        let reversed = [4, 3, 2, 1];
        assert_eq!(spearman_footrule(&x, &x, &settings).unwrap(), 0.0);
        assert_eq!(spearman_footrule(&x, &reversed, &settings).unwrap(), 8.0);
        assert_eq!(normalized_spearman_footrule(&x, &reversed, &settings).unwrap(), 1.0);
        assert_eq!(footrule_similarity(&x, &reversed, &settings).unwrap(), 0.0);

        let odd = [1, 2, 3, 4, 5];
        let odd_reversed = [5, 4, 3, 2, 1];
        assert_eq!(
            normalized_spearman_footrule(&odd, &odd_reversed, &settings).unwrap(),
            1.0
        );
    }
}
