//! Permutation generation and counting.
//!
//! This module provides three structurally different generators whose outputs
//! are equal as multisets:
//! - Recursive backtracking with per-level duplicate pruning
//! - Heap's algorithm
//! - Insertion expansion
//!
//! together with exact unique-permutation counting and a harness that runs all
//! three generators side by side.
//!
//! Every generator materialises its whole result, so memory grows as `n!`.
//! Inputs beyond roughly 10 to 12 symbols are impractical.
//!
//! When duplicates are excluded the result order is unspecified.
//!
//! # Examples
//!
//! ```rust
//! use permutations::cs::combinatorial::{
//!     estimate_unique_permutations, generate_iterative, generate_recursive,
//! };
//!
//! let recursive = generate_recursive(Some("aab"), false).unwrap();
//! let iterative = generate_iterative(Some("aab"), false).unwrap();
//! let expected = estimate_unique_permutations("aab").unwrap() as usize;
//! assert_eq!(recursive.len(), expected);
//! assert_eq!(iterative.len(), expected);
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use crate::cs::error::{Error, Result};

pub mod algorithm;
pub mod backtracking;
pub mod compare;
pub mod counting;
pub mod heap;
pub mod insertion;

pub use algorithm::{Algorithm, GenerationOptions};
pub use backtracking::{generate_recursive, recursive_permutations};
pub use compare::{
    compare_performance, same_permutations, warn_if_large_workload, workload_size,
    AlgorithmRun, PerformanceReport, LARGE_WORKLOAD_THRESHOLD,
};
pub use counting::{
    estimate_unique_permutations, factorial, frequency_table, permutation_count,
    unique_permutation_count, MAX_FACTORIAL_ARGUMENT,
};
pub use heap::{generate_iterative, heap_permutations};
pub use insertion::{generate_iterative_alt, insertion_permutations};

/// Drops repeated permutations. The returned order is unspecified.
pub(crate) fn collapse_duplicates<T>(permutations: Vec<Vec<T>>) -> Vec<Vec<T>>
where
    T: Eq + Hash,
{
    permutations
        .into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect()
}

pub(crate) fn require_input(input: Option<&str>) -> Result<Vec<char>> {
    input
        .map(|s| s.chars().collect())
        .ok_or_else(|| Error::invalid_argument("Input string cannot be null"))
}

pub(crate) fn into_strings(permutations: Vec<Vec<char>>) -> Vec<String> {
    permutations
        .into_iter()
        .map(|perm| perm.into_iter().collect())
        .collect()
}
