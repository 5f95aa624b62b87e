//! Recursive backtracking permutation generator.
//!
//! The generator extends a prefix one symbol at a time, taking symbols from the
//! remaining sequence left to right, and undoes each choice after exploring it.
//! When duplicates are excluded, symbols whose value was already tried at the
//! current recursion level are skipped, which prunes whole subtrees instead of
//! filtering their results afterwards.
//!
//! # Examples
//! ```
//! use permutations::cs::combinatorial::backtracking::generate_recursive;
//!
//! let perms = generate_recursive(Some("aab"), false).unwrap();
//! assert_eq!(perms.len(), 3);
//!
//! let perms = generate_recursive(Some("aab"), true).unwrap();
//! assert_eq!(perms.len(), 6);
//! ```
use std::collections::HashSet;
use std::hash::Hash;

use crate::cs::combinatorial::{collapse_duplicates, into_strings, require_input};
use crate::cs::error::Result;

/// Returns all permutations of the input slice using backtracking.
///
/// With `include_duplicates` set, equal items at different positions are treated
/// as distinguishable and the result holds `n!` entries. Otherwise the result
/// holds each distinct ordering exactly once, in unspecified order.
///
/// # Example
/// ```
/// use permutations::cs::combinatorial::backtracking::recursive_permutations;
///
/// let items = vec!['a', 'b', 'c'];
/// let perms = recursive_permutations(&items, true);
/// assert_eq!(perms, vec![
///     vec!['a', 'b', 'c'],
///     vec!['a', 'c', 'b'],
///     vec!['b', 'a', 'c'],
///     vec!['b', 'c', 'a'],
///     vec!['c', 'a', 'b'],
///     vec!['c', 'b', 'a'],
/// ]);
/// ```
pub fn recursive_permutations<T>(items: &[T], include_duplicates: bool) -> Vec<Vec<T>>
where
    T: Clone + Eq + Hash,
{
    let mut results = Vec::new();
    let mut prefix = Vec::with_capacity(items.len());
    let mut remaining = items.to_vec();
    backtrack_permutations(&mut prefix, &mut remaining, include_duplicates, &mut results);

    if include_duplicates {
        results
    } else {
        collapse_duplicates(results)
    }
}

fn backtrack_permutations<T>(
    prefix: &mut Vec<T>,
    remaining: &mut Vec<T>,
    include_duplicates: bool,
    results: &mut Vec<Vec<T>>,
) where
    T: Clone + Eq + Hash,
{
    if remaining.is_empty() {
        results.push(prefix.clone());
        return;
    }

    // Values already placed at this depth; one set per stack frame.
    let mut tried: Option<HashSet<T>> = (!include_duplicates).then(HashSet::new);

    for i in 0..remaining.len() {
        if let Some(tried) = tried.as_mut() {
            if !tried.insert(remaining[i].clone()) {
                continue;
            }
        }

        let item = remaining.remove(i);
        prefix.push(item);
        backtrack_permutations(prefix, remaining, include_duplicates, results);
        if let Some(item) = prefix.pop() {
            remaining.insert(i, item);
        }
    }
}

/// Generates all permutations of a string with the recursive generator.
///
/// Fails with `InvalidArgument` when `input` is `None`. An empty string yields a
/// single empty permutation.
pub fn generate_recursive(input: Option<&str>, include_duplicates: bool) -> Result<Vec<String>> {
    let chars = require_input(input)?;
    Ok(into_strings(recursive_permutations(&chars, include_duplicates)))
}
