use crate::Coefficient;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankCompareError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("Length mismatch: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("Ties present, {coefficient} requires tie-free input")]
    TiesPresent { coefficient: Coefficient },
    #[error("Items in ranked list are not unique")]
    NotUnique,
    #[error("Ranked lists are not conjoint")]
    NotConjoint,
    #[error("Ties not allowed: values at index {first} and {second} are equal")]
    TiesNotAllowed { first: usize, second: usize },
    #[error("{coefficient} is undefined for this input (zero denominator)")]
    UndefinedCoefficient { coefficient: Coefficient },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("sample is empty")]
    Empty,
    #[error("value at index {index} is not the same numeric kind as the first value")]
    MixedKinds { index: usize },
    #[error("value at index {index} cannot be ordered")]
    Unorderable { index: usize },
    #[error("at least {required} observations required, got {actual}")]
    TooFewObservations { required: usize, actual: usize },
    #[error("ranks were not produced by the midrank tie policy")]
    NotMidrank,
    #[error("depth {depth} out of bounds (1..={max})")]
    DepthOutOfBounds { depth: usize, max: usize },
    #[error("persistence must lie strictly between 0 and 1")]
    PersistenceOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_input_error_display() {
        let err: RankCompareError = InputError::Empty.into();
        assert_eq!(err.to_string(), "Invalid input: sample is empty");

        let err = RankCompareError::TiesPresent {
            coefficient: Coefficient::TauA,
        };
        assert_eq!(err.to_string(), "Ties present, tau_a requires tie-free input");
    }
}
