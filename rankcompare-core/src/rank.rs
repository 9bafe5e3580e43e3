use std::{cmp::Ordering, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::{
    value::{validate_sample, RankValue},
    RankCompareError,
};

/// How values that compare equal are ranked.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Tied values share the mean of the positions they occupy.
    #[default]
    Midrank,
    /// Tied values share the best position they occupy.
    Same,
    /// Ties are broken by input order, so the ranks are a permutation of 1..=n.
    Arbitrary,
    /// Any tie is an error.
    NotAllowed,
}

/// Which end of the sample gets rank 1.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The largest value is ranked 1.
    #[default]
    Descending,
    /// The smallest value is ranked 1.
    Ascending,
}

impl Direction {
    fn compare<T: RankValue>(self, a: &T, b: &T) -> Ordering {
        // Samples are validated before sorting, so every pair is orderable here.
        let ordering = a.try_cmp(b).unwrap_or(Ordering::Equal);
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// One-indexed ranks, aligned index for index with the sample they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankSequence {
    ranks: Vec<f64>,
    tie_policy: TiePolicy,
    direction: Direction,
}

impl RankSequence {
    pub fn ranks(&self) -> &[f64] {
        &self.ranks
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Number of distinct rank values, i.e. the number of tie groups.
    pub fn distinct_count(&self) -> usize {
        let mut ranks = self.ranks.clone();
        ranks.sort_by(f64::total_cmp);
        ranks.dedup();
        ranks.len()
    }

    pub fn has_ties(&self) -> bool {
        self.distinct_count() < self.len()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.ranks
    }
}

impl Deref for RankSequence {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.ranks
    }
}

/// The run of equal values currently being scanned, in sorted order.
/// Flushed into the rank vector once a different value shows up.
struct TieRun {
    /// Zero-based sorted position of the first member.
    start: usize,
    /// Input indices of the members, in input order.
    members: Vec<usize>,
}

impl TieRun {
    fn new() -> Self {
        Self {
            start: 0,
            members: Vec::new(),
        }
    }

    fn head(&self) -> Option<usize> {
        self.members.first().copied()
    }

    fn push(&mut self, position: usize, index: usize) {
        if self.members.is_empty() {
            self.start = position;
        }
        self.members.push(index);
    }

    fn flush(&mut self, tie_policy: TiePolicy, ranks: &mut [f64]) -> Result<(), RankCompareError> {
        let best = (self.start + 1) as f64;
        let len = self.members.len();

        if len > 1 {
            log::trace!("Flushing tie run of {} at position {}", len, self.start + 1);
        }

        match tie_policy {
            TiePolicy::Midrank => {
                let midrank = best + (len - 1) as f64 / 2.0;
                for &index in &self.members {
                    ranks[index] = midrank;
                }
            }
            TiePolicy::Same => {
                for &index in &self.members {
                    ranks[index] = best;
                }
            }
            TiePolicy::Arbitrary => {
                for (offset, &index) in self.members.iter().enumerate() {
                    ranks[index] = best + offset as f64;
                }
            }
            TiePolicy::NotAllowed => {
                if let &[first, second, ..] = self.members.as_slice() {
                    return Err(RankCompareError::TiesNotAllowed { first, second });
                }
                for &index in &self.members {
                    ranks[index] = best;
                }
            }
        }

        self.members.clear();
        Ok(())
    }
}

/// Input indices in sorted order. The sort is stable, so equal values keep their input order.
fn sorted_order<T: RankValue>(values: &[T], direction: Direction) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| direction.compare(&values[a], &values[b]));
    order
}

fn equal<T: RankValue>(a: &T, b: &T) -> bool {
    a.try_cmp(b) == Some(Ordering::Equal)
}

/// Converts a sample into ranks under the given tie policy and direction.
/// `ranks[i]` is always the rank of `values[i]`.
pub fn rank<T: RankValue>(
    values: &[T],
    tie_policy: TiePolicy,
    direction: Direction,
) -> Result<RankSequence, RankCompareError> {
    validate_sample(values)?;

    let order = sorted_order(values, direction);
    let mut ranks = vec![0.0; values.len()];
    let mut run = TieRun::new();

    for (position, &index) in order.iter().enumerate() {
        if let Some(head) = run.head() {
            if !equal(&values[head], &values[index]) {
                run.flush(tie_policy, &mut ranks)?;
            }
        }
        run.push(position, index);
    }
    run.flush(tie_policy, &mut ranks)?;

    Ok(RankSequence {
        ranks,
        tie_policy,
        direction,
    })
}

/// Dense ascending integer keys: equal values share a key, and keys compare like the values.
/// Cheaper to sort and compare than fractional ranks.
pub fn tie_keys<T: RankValue>(values: &[T]) -> Result<Vec<usize>, RankCompareError> {
    validate_sample(values)?;

    let order = sorted_order(values, Direction::Ascending);
    let mut keys = vec![0; values.len()];
    let mut key = 0;

    for window in order.windows(2) {
        if !equal(&values[window[0]], &values[window[1]]) {
            key += 1;
        }
        keys[window[1]] = key;
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::{InputError, Value};

    #[test]
    fn midrank_descending() {
        let ranks = rank(&[9, 7, 7, 3], TiePolicy::Midrank, Direction::Descending).unwrap();
        assert_eq!(ranks.ranks(), &[1.0, 2.5, 2.5, 4.0]);
        assert_eq!(ranks.tie_policy(), TiePolicy::Midrank);
        assert_eq!(ranks.distinct_count(), 3);
        assert!(ranks.has_ties());
    }

    #[test]
    fn same_descending() {
        let ranks = rank(&[9, 7, 7, 3], TiePolicy::Same, Direction::Descending).unwrap();
        assert_eq!(ranks.ranks(), &[1.0, 2.0, 2.0, 4.0]);
    }

    #[test]
    fn not_allowed_rejects_ties() {
        assert_eq!(
            rank(&[9, 7, 7, 3], TiePolicy::NotAllowed, Direction::Descending),
            Err(RankCompareError::TiesNotAllowed {
                first: 1,
                second: 2
            })
        );
        let ranks = rank(&[9, 7, 3], TiePolicy::NotAllowed, Direction::Descending).unwrap();
        assert_eq!(ranks.ranks(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn arbitrary_breaks_ties_by_input_order() {
        let ranks = rank(&[5, 1, 5, 5, 0], TiePolicy::Arbitrary, Direction::Descending).unwrap();
        assert_eq!(ranks.ranks(), &[1.0, 4.0, 2.0, 3.0, 5.0]);
        assert!(!ranks.has_ties());

        let ranks = rank(&[5, 1, 5, 5, 0], TiePolicy::Arbitrary, Direction::Ascending).unwrap();
        assert_eq!(ranks.ranks(), &[3.0, 2.0, 4.0, 5.0, 1.0]);
    }

    #[test]
    fn ascending_keeps_index_alignment() {
        let ranks = rank(&[0.3, -2.0, 10.5, 0.3], TiePolicy::Midrank, Direction::Ascending).unwrap();
        assert_eq!(ranks.ranks(), &[2.5, 1.0, 4.0, 2.5]);
        assert_eq!(ranks.direction(), Direction::Ascending);
    }

    #[test]
    fn all_equal_sample() {
        let ranks = rank(&[4, 4, 4], TiePolicy::Midrank, Direction::Descending).unwrap();
        assert_eq!(ranks.ranks(), &[2.0, 2.0, 2.0]);
        let ranks = rank(&[4, 4, 4], TiePolicy::Same, Direction::Descending).unwrap();
        assert_eq!(ranks.ranks(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn single_value() {
        let ranks = rank(&[42u8], TiePolicy::NotAllowed, Direction::Descending).unwrap();
        assert_eq!(ranks.ranks(), &[1.0]);
    }

    #[test]
    fn invalid_samples() {
        let empty: [i32; 0] = [];
        assert_eq!(
            rank(&empty, TiePolicy::Midrank, Direction::Descending),
            Err(InputError::Empty.into())
        );
        assert_eq!(
            rank(
                &[Value::Float(1.0), Value::Integer(2)],
                TiePolicy::Midrank,
                Direction::Descending
            ),
            Err(InputError::MixedKinds { index: 1 }.into())
        );
    }

    #[test]
    fn dense_tie_keys() {
        assert_eq!(tie_keys(&[9, 7, 7, 3]).unwrap(), vec![2, 1, 1, 0]);
        assert_eq!(tie_keys(&[1.5]).unwrap(), vec![0]);
        assert_eq!(tie_keys(&[2, 2, 2]).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn policy_names() {
        use std::str::FromStr;
        assert_eq!(TiePolicy::NotAllowed.to_string(), "not_allowed");
        assert_eq!(TiePolicy::from_str("midrank").unwrap(), TiePolicy::Midrank);
        assert_eq!(Direction::from_str("ascending").unwrap(), Direction::Ascending);
    }
}
