use rankcompare_core::{settings::CoefficientSettings, Coefficient, RankCompareError, RankValue};

use crate::{ratio, RankedPair};

/// Kendall's tau-a: (P - Q) / pairs.
///
/// Assumes no ties. With `reject_ties` set (the default) tied input is an error, otherwise
/// tied pairs simply count towards neither P nor Q.
pub fn tau_a<X, Y>(x: &[X], y: &[Y], settings: &CoefficientSettings) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let ranked = RankedPair::new(x, y, settings)?;
    let stats = ranked.statistics;

    if settings.reject_ties && stats.has_ties() {
        return Err(RankCompareError::TiesPresent {
            coefficient: Coefficient::TauA,
        });
    }

    ratio(stats.score(), stats.pairs as f64, Coefficient::TauA)
}

/// Kendall's tau-b: (P - Q) / sqrt((pairs - Tx)(pairs - Ty)). Corrects for ties in either sequence.
pub fn tau_b<X, Y>(x: &[X], y: &[Y], settings: &CoefficientSettings) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let stats = RankedPair::new(x, y, settings)?.statistics;

    let untied_x = (stats.pairs - stats.x_ties) as f64;
    let untied_y = (stats.pairs - stats.y_ties) as f64;

    ratio(stats.score(), (untied_x * untied_y).sqrt(), Coefficient::TauB)
}

/// Stuart's tau-c: 2m(P - Q) / (n^2 (m - 1)), with m the smaller number of distinct values.
///
/// Tied input follows `reject_ties` like [`tau_a`].
pub fn tau_c<X, Y>(x: &[X], y: &[Y], settings: &CoefficientSettings) -> Result<f64, RankCompareError>
where
    X: RankValue,
    Y: RankValue,
{
    let ranked = RankedPair::new(x, y, settings)?;
    let stats = ranked.statistics;

    if settings.reject_ties && stats.has_ties() {
        return Err(RankCompareError::TiesPresent {
            coefficient: Coefficient::TauC,
        });
    }

    let n = ranked.x.len() as f64;
    let m = ranked.x.distinct_count().min(ranked.y.distinct_count()) as f64;

    ratio(2.0 * m * stats.score(), n * n * (m - 1.0), Coefficient::TauC)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use test_log::test;

    use super::*;

    fn lenient() -> CoefficientSettings {
        CoefficientSettings {
            reject_ties: false,
            ..Default::default()
        }
    }

    #[test]
    fn tau_a_scenarios() {
        let settings = CoefficientSettings::default();
        let a = [1, 2, 3, 4, 5];
        assert_eq!(tau_a(&a, &a, &settings).unwrap(), 1.0);
        assert_eq!(tau_a(&a, &[5, 4, 3, 2, 1], &settings).unwrap(), -1.0);
        assert_eq!(tau_a(&a, &[2, 1, 3, 4, 5], &settings).unwrap(), 0.8);
        assert_eq!(tau_a(&a, &[1, 2, 3, 5, 4], &settings).unwrap(), 0.8);
    }

    #[test]
    fn tau_a_rejects_ties_by_default() {
        let result = tau_a(&[1, 1, 2], &[1, 2, 3], &CoefficientSettings::default());
        assert_eq!(
            result,
            Err(RankCompareError::TiesPresent {
                coefficient: Coefficient::TauA
            })
        );
        // (P - Q) / pairs with the tied pair counted as neither.
        assert_abs_diff_eq!(tau_a(&[1, 1, 2], &[1, 2, 3], &lenient()).unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn tau_a_length_mismatch() {
        assert_eq!(
            tau_a(&[1, 2, 3], &[1, 2], &CoefficientSettings::default()),
            Err(RankCompareError::LengthMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn tau_b_with_ties() {
        // Matches scipy.stats.kendalltau([12, 2, 1, 12, 2], [1, 4, 7, 1, 0]).
        let x = [12, 2, 1, 12, 2];
        let y = [1, 4, 7, 1, 0];
        let tau = tau_b(&x, &y, &CoefficientSettings::default()).unwrap();
        assert_abs_diff_eq!(tau, -0.4714045207910316, epsilon = 1e-12);
    }

    #[test]
    fn tau_b_reflexive_with_ties() {
        let x = [3, 3, 1, 2, 2, 2];
        assert_eq!(tau_b(&x, &x, &CoefficientSettings::default()).unwrap(), 1.0);
    }

    #[test]
    fn tau_b_constant_is_undefined() {
        assert_eq!(
            tau_b(&[1, 1, 1], &[1, 2, 3], &CoefficientSettings::default()),
            Err(RankCompareError::UndefinedCoefficient {
                coefficient: Coefficient::TauB
            })
        );
    }

    #[test]
    fn tau_c_equals_tau_a_without_ties() {
        let x = [4, 1, 3, 5, 2, 6];
        let y = [2, 1, 6, 4, 3, 5];
        let settings = CoefficientSettings::default();
        assert_abs_diff_eq!(
            tau_c(&x, &y, &settings).unwrap(),
            tau_a(&x, &y, &settings).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn tau_c_with_ties() {
        // 2x2 table with n = 4: P = 4, Q = 0, m = 2 gives 2 * 2 * 4 / (16 * 1) = 1.
        let x = [1, 1, 2, 2];
        let y = [1, 1, 2, 2];
        assert_eq!(tau_c(&x, &y, &lenient()).unwrap(), 1.0);
        assert_eq!(
            tau_c(&x, &y, &CoefficientSettings::default()),
            Err(RankCompareError::TiesPresent {
                coefficient: Coefficient::TauC
            })
        );
    }

    #[test]
    fn tau_c_reference_value() {
        // scipy.stats.kendalltau(x, y, variant='c') on its documented example.
        // P = 2, Q = 6, m = min(3, 4) = 3, n = 5: 2 * 3 * -4 / (25 * 2) = -0.48.
        let x = [12, 2, 1, 12, 2];
        let y = [1, 4, 7, 1, 0];
        assert_abs_diff_eq!(tau_c(&x, &y, &lenient()).unwrap(), -0.48, epsilon = 1e-12);
        // Same data under tau-b, for comparison with the scipy default variant.
        assert_abs_diff_eq!(
            tau_b(&x, &y, &lenient()).unwrap(),
            -0.4714045207910316,
            epsilon = 1e-12
        );
    }
}
