//! Error type shared by the combinatorial algorithms.

use thiserror::Error;

/// Result type for combinatorial operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the permutation generators and counting utilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was absent or outside the domain of the operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A factorial argument is above the largest `n` whose `n!` fits in a `u64`
    #[error("Input too large: {length} exceeds the supported maximum of {max_length}")]
    InputTooLarge { length: usize, max_length: usize },

    /// The number of distinct permutations of an input does not fit in a `u64`
    #[error("Unique permutation count of a {length}-symbol input exceeds u64::MAX")]
    CountTooLarge { length: usize },
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid_argument("Input string cannot be null");
        assert_eq!(err.to_string(), "Invalid argument: Input string cannot be null");
    }

    #[test]
    fn test_input_too_large_message() {
        let err = Error::InputTooLarge {
            length: 21,
            max_length: 20,
        };
        assert_eq!(
            err.to_string(),
            "Input too large: 21 exceeds the supported maximum of 20"
        );
    }

    #[test]
    fn test_count_too_large_message() {
        let err = Error::CountTooLarge { length: 26 };
        assert_eq!(
            err.to_string(),
            "Unique permutation count of a 26-symbol input exceeds u64::MAX"
        );
    }
}
