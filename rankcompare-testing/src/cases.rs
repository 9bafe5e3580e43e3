use rankcompare_core::random::RandomProvider;
use serde::Serialize;
use strum::{Display, EnumIter};

use crate::settings::HarnessSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    /// Two independent permutations of `1..=n`.
    Permutation,
    /// Two independent samples drawn with replacement from a few levels.
    Ties,
    /// A permutation paired with itself.
    Identical,
    /// A permutation paired with its mirror image, so every pair is discordant.
    Reversed,
}

/// A paired sample. For every kind except `Ties`, `x` and `y` are also
/// permutations of the same items and can be read as ranked item lists.
#[derive(Debug, Clone)]
pub struct Case {
    pub kind: CaseKind,
    pub x: Vec<u64>,
    pub y: Vec<u64>,
}

impl Case {
    pub fn generate(
        kind: CaseKind,
        random_provider: &impl RandomProvider,
        settings: &HarnessSettings,
    ) -> Self {
        let n = random_provider.random_range(2, settings.max_length.max(2) + 1);

        let (x, y) = match kind {
            CaseKind::Permutation => (
                random_provider.permutation(n),
                random_provider.permutation(n),
            ),
            CaseKind::Ties => (
                random_provider.sample_with_ties(n, settings.tie_levels),
                random_provider.sample_with_ties(n, settings.tie_levels),
            ),
            CaseKind::Identical => {
                let x = random_provider.permutation(n);
                (x.clone(), x)
            }
            CaseKind::Reversed => {
                let x = random_provider.permutation(n);
                let y = x.iter().map(|value| n as u64 + 1 - value).collect();
                (x, y)
            }
        };

        log::debug!("Generated {} case with {} observations", kind, n);
        Case { kind, x, y }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }
}
