use std::collections::BTreeMap;

use rankcompare_core::PairCount;
use serde::Serialize;

use crate::{cases::CaseKind, settings::HarnessSettings};

/// Running tallies of a harness run.
/// This is never handed out directly; `build` turns it into a `HarnessResults`.
pub(crate) struct HarnessResultsBuilder {
    cases_by_kind: BTreeMap<CaseKind, usize>,
    /// Number of pairs classified by the merge engine over all cases.
    pairs_classified: PairCount,
    /// Coefficients that produced a value and passed their checks.
    coefficients_evaluated: usize,
    /// Coefficients that were undefined for their case, e.g. on a constant sample.
    undefined_coefficients: usize,
    distance_sum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarnessResults {
    pub seed: u64,
    pub settings: HarnessSettings,

    pub cases_checked: usize,
    pub cases_by_kind: BTreeMap<String, usize>,
    pub pairs_classified: PairCount,
    pub coefficients_evaluated: usize,
    pub undefined_coefficients: usize,

    /// Mean normalised Kendall tau distance over all cases.
    pub mean_normalised_distance: f64,
}

impl HarnessResultsBuilder {
    pub fn new() -> Self {
        Self {
            cases_by_kind: BTreeMap::new(),
            pairs_classified: 0,
            coefficients_evaluated: 0,
            undefined_coefficients: 0,
            distance_sum: 0.0,
        }
    }

    pub fn add_case(&mut self, kind: CaseKind, pairs: PairCount, normalised_distance: f64) {
        *self.cases_by_kind.entry(kind).or_default() += 1;
        self.pairs_classified += pairs;
        self.distance_sum += normalised_distance;
    }

    pub fn evaluated_coefficient(&mut self) {
        self.coefficients_evaluated += 1;
    }

    pub fn undefined_coefficient(&mut self) {
        self.undefined_coefficients += 1;
    }

    pub fn build(self, seed: u64, settings: HarnessSettings) -> HarnessResults {
        let cases_checked: usize = self.cases_by_kind.values().sum();
        let mean_normalised_distance = if cases_checked == 0 {
            0.0
        } else {
            self.distance_sum / cases_checked as f64
        };

        HarnessResults {
            seed,
            settings,
            cases_checked,
            cases_by_kind: self
                .cases_by_kind
                .into_iter()
                .map(|(kind, count)| (kind.to_string(), count))
                .collect(),
            pairs_classified: self.pairs_classified,
            coefficients_evaluated: self.coefficients_evaluated,
            undefined_coefficients: self.undefined_coefficients,
            mean_normalised_distance,
        }
    }
}
