//! Insertion-expansion permutation generator.
//!
//! Starting from the single empty permutation, each input item in turn is inserted
//! at every position of every permutation built so far. After `n` items the set
//! holds `n!` orderings. This is the slowest of the three generators and exists
//! mainly to cross-check the other two.

use std::hash::Hash;

use crate::cs::combinatorial::{collapse_duplicates, into_strings, require_input};
use crate::cs::error::Result;

/// Returns all permutations of `items` by repeated insertion.
///
/// # Example
/// ```
/// use permutations::cs::combinatorial::insertion_permutations;
///
/// let perms = insertion_permutations(&['a', 'b'], true);
/// assert_eq!(perms, vec![vec!['b', 'a'], vec!['a', 'b']]);
/// ```
pub fn insertion_permutations<T>(items: &[T], include_duplicates: bool) -> Vec<Vec<T>>
where
    T: Clone + Eq + Hash,
{
    let mut permutations: Vec<Vec<T>> = vec![Vec::new()];

    for (placed, item) in items.iter().enumerate() {
        let mut expanded = Vec::with_capacity(permutations.len() * (placed + 1));
        for perm in &permutations {
            for pos in 0..=perm.len() {
                let mut candidate = Vec::with_capacity(perm.len() + 1);
                candidate.extend_from_slice(&perm[..pos]);
                candidate.push(item.clone());
                candidate.extend_from_slice(&perm[pos..]);
                expanded.push(candidate);
            }
        }
        permutations = expanded;
    }

    if include_duplicates {
        permutations
    } else {
        collapse_duplicates(permutations)
    }
}

/// Generates all permutations of a string by insertion expansion.
///
/// Fails with `InvalidArgument` when `input` is `None`.
pub fn generate_iterative_alt(
    input: Option<&str>,
    include_duplicates: bool,
) -> Result<Vec<String>> {
    let chars = require_input(input)?;
    Ok(into_strings(insertion_permutations(&chars, include_duplicates)))
}
