use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericKind {
    Integer,
    Float,
}

/// A value that can take part in a ranked sample.
pub trait RankValue {
    fn kind(&self) -> NumericKind;

    /// Returns `None` if the two values cannot be ordered, e.g. when one of them is NaN.
    fn try_cmp(&self, other: &Self) -> Option<Ordering>;

    fn is_orderable(&self) -> bool {
        self.try_cmp(self).is_some()
    }
}

macro_rules! impl_rank_value_integer {
    ($($t:ty),*) => {
        $(
            impl RankValue for $t {
                fn kind(&self) -> NumericKind {
                    NumericKind::Integer
                }

                fn try_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }
        )*
    };
}

macro_rules! impl_rank_value_float {
    ($($t:ty),*) => {
        $(
            impl RankValue for $t {
                fn kind(&self) -> NumericKind {
                    NumericKind::Float
                }

                fn try_cmp(&self, other: &Self) -> Option<Ordering> {
                    self.partial_cmp(other)
                }
            }
        )*
    };
}

impl_rank_value_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_rank_value_float!(f32, f64);

/// A dynamically typed sample element. Typed slices are homogeneous by construction,
/// this is the way in for samples assembled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl RankValue for Value {
    fn kind(&self) -> NumericKind {
        match self {
            Value::Integer(_) => NumericKind::Integer,
            Value::Float(_) => NumericKind::Float,
        }
    }

    fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            // Mixed samples are rejected before any comparison happens.
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

/// Checks that a sample is non-empty, of a single numeric kind and fully orderable.
pub fn validate_sample<T: RankValue>(values: &[T]) -> Result<(), InputError> {
    let first = values.first().ok_or(InputError::Empty)?;
    let kind = first.kind();

    for (index, value) in values.iter().enumerate() {
        if value.kind() != kind {
            return Err(InputError::MixedKinds { index });
        }
        if !value.is_orderable() {
            return Err(InputError::Unorderable { index });
        }
    }

    Ok(())
}
