use anyhow::{ensure, Context};
use kendall_tau::{
    naive_pair_statistics, naive_top_weighted_statistics, normalised_kendall_tau_distance,
    pair_statistics, top_weighted_statistics,
};
use rankcompare_coefficients::{
    ap_correlation_scores, gamma, somers_d, spearman_rho, tau_a, tau_b, tau_c,
    top_down_correlation,
};
use rankcompare_core::{pair_count, settings::CoefficientSettings, Coefficient, RankCompareError};
use strum::IntoEnumIterator;

use crate::{
    cases::{Case, CaseKind},
    results::HarnessResultsBuilder,
};

const TOLERANCE: f64 = 1e-9;

pub fn check_case(case: &Case, results: &mut HarnessResultsBuilder) -> anyhow::Result<()> {
    check_engine_agreement(case, results)?;
    if case.kind != CaseKind::Ties {
        check_top_weighted_agreement(case)?;
    }
    check_coefficients(case, results)
}

fn check_engine_agreement(case: &Case, results: &mut HarnessResultsBuilder) -> anyhow::Result<()> {
    let fast = pair_statistics(&case.x, &case.y).context("merge engine failed")?;
    let naive = naive_pair_statistics(&case.x, &case.y).context("naive engine failed")?;

    ensure!(
        fast == naive,
        "{} case: merge engine {:?} disagrees with naive engine {:?}",
        case.kind,
        fast,
        naive
    );
    ensure!(
        fast.pairs == pair_count(case.len()),
        "{} case: {} pairs reported for {} observations",
        case.kind,
        fast.pairs,
        case.len()
    );
    ensure!(
        fast.classified() == fast.pairs,
        "{} case: {} pairs classified out of {}",
        case.kind,
        fast.classified(),
        fast.pairs
    );

    let distance = normalised_kendall_tau_distance(&case.x, &case.y)?;
    results.add_case(case.kind, fast.pairs, distance);
    Ok(())
}

fn check_top_weighted_agreement(case: &Case) -> anyhow::Result<()> {
    let fast = top_weighted_statistics(&case.x, &case.y).context("top-weighted engine failed")?;
    let naive = naive_top_weighted_statistics(&case.x, &case.y)
        .context("naive top-weighted engine failed")?;

    ensure!(
        fast == naive,
        "{} case: top-weighted statistics disagree",
        case.kind
    );
    ensure!(
        fast.concordant + fast.discordant == fast.pairs,
        "{} case: top-weighted counts do not add up to {} pairs",
        case.kind,
        fast.pairs
    );
    Ok(())
}

fn check_coefficients(case: &Case, results: &mut HarnessResultsBuilder) -> anyhow::Result<()> {
    let settings = CoefficientSettings {
        reject_ties: false,
        ..Default::default()
    };

    for coefficient in Coefficient::iter() {
        let value = match evaluate(coefficient, case, &settings) {
            Ok(value) => value,
            Err(RankCompareError::UndefinedCoefficient { .. }) => {
                log::debug!("{} undefined on {} case", coefficient, case.kind);
                results.undefined_coefficient();
                continue;
            }
            // AP correlation on scores cannot break ties.
            Err(RankCompareError::TiesNotAllowed { .. }) if case.kind == CaseKind::Ties => continue,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("{} failed on {} case", coefficient, case.kind))
            }
        };

        ensure!(
            (-1.0..=1.0).contains(&value),
            "{} case: {} is out of range at {}",
            case.kind,
            coefficient,
            value
        );
        if let Some(expected) = expected_value(coefficient, case.kind) {
            ensure!(
                (value - expected).abs() < TOLERANCE,
                "{} case: {} is {}, expected {}",
                case.kind,
                coefficient,
                value,
                expected
            );
        }
        results.evaluated_coefficient();
    }
    Ok(())
}

fn evaluate(
    coefficient: Coefficient,
    case: &Case,
    settings: &CoefficientSettings,
) -> Result<f64, RankCompareError> {
    let (x, y) = (case.x.as_slice(), case.y.as_slice());
    match coefficient {
        Coefficient::TauA => tau_a(x, y, settings),
        Coefficient::TauB => tau_b(x, y, settings),
        Coefficient::TauC => tau_c(x, y, settings),
        Coefficient::Gamma => gamma(x, y, settings),
        Coefficient::SomersD => somers_d(x, y, settings),
        Coefficient::ApCorrelation => ap_correlation_scores(x, y, settings),
        Coefficient::TopDown => top_down_correlation(x, y, settings),
        Coefficient::SpearmanRho => spearman_rho(x, y, settings),
    }
}

/// The exact value a coefficient must take on an identical or fully reversed case.
fn expected_value(coefficient: Coefficient, kind: CaseKind) -> Option<f64> {
    match kind {
        CaseKind::Identical => Some(1.0),
        // Savage scores are not symmetric under reversal.
        CaseKind::Reversed if coefficient != Coefficient::TopDown => Some(-1.0),
        _ => None,
    }
}
