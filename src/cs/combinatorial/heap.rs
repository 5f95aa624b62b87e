//! Heap's algorithm permutation generator.
//! Produces all `n!` orderings, each reached from the previous one by a single transposition.
//!
//! # Example
//! ```
//! use permutations::cs::combinatorial::heap_permutations;
//!
//! let data = vec![1, 2, 3];
//! let perms = heap_permutations(&data, true);
//! assert_eq!(perms, vec![
//!     vec![1, 2, 3],
//!     vec![2, 1, 3],
//!     vec![3, 1, 2],
//!     vec![1, 3, 2],
//!     vec![2, 3, 1],
//!     vec![3, 2, 1],
//! ]);
//! ```
use std::hash::Hash;

use crate::cs::combinatorial::{collapse_duplicates, into_strings, require_input};
use crate::cs::error::Result;

/// Heap's algorithm over a working copy of `items`.
/// Returns permutations in transposition order, or the distinct ones in unspecified
/// order when `include_duplicates` is false.
pub fn heap_permutations<T>(items: &[T], include_duplicates: bool) -> Vec<Vec<T>>
where
    T: Clone + Eq + Hash,
{
    let mut elements = items.to_vec();
    let n = elements.len();
    // control[i] counts the swaps performed at depth i.
    let mut control = vec![0usize; n];

    let mut result = Vec::new();
    result.push(elements.clone());

    let mut i = 0;
    while i < n {
        if control[i] < i {
            if i % 2 == 0 {
                elements.swap(0, i);
            } else {
                elements.swap(control[i], i);
            }
            result.push(elements.clone());
            control[i] += 1;
            i = 0;
        } else {
            control[i] = 0;
            i += 1;
        }
    }

    if include_duplicates {
        result
    } else {
        collapse_duplicates(result)
    }
}

/// Generates all permutations of a string with Heap's algorithm.
///
/// Fails with `InvalidArgument` when `input` is `None`.
pub fn generate_iterative(input: Option<&str>, include_duplicates: bool) -> Result<Vec<String>> {
    let chars = require_input(input)?;
    Ok(into_strings(heap_permutations(&chars, include_duplicates)))
}
