//! Exact permutation counting.
//!
//! The number of distinct orderings of a sequence is the multinomial coefficient
//! `n! / (c1! * c2! * ... * ck!)` where `ci` are the occurrence counts of each
//! distinct symbol. `u64` holds `n!` only up to `n = 20`; the arbitrary-precision
//! variant [`unique_permutation_count`] has no such ceiling.

use std::collections::HashMap;
use std::hash::Hash;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use crate::cs::error::{Error, Result};

/// Largest `n` for which `n!` fits in a `u64`.
pub const MAX_FACTORIAL_ARGUMENT: i64 = 20;

/// Computes `n!`.
///
/// Fails with `InvalidArgument` for negative `n` and with `InputTooLarge` for
/// `n > MAX_FACTORIAL_ARGUMENT`.
///
/// # Example
/// ```
/// use permutations::cs::combinatorial::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(Error::invalid_argument(
            "Factorial is not defined for negative numbers",
        ));
    }
    if n > MAX_FACTORIAL_ARGUMENT {
        return Err(Error::InputTooLarge {
            length: n as usize,
            max_length: MAX_FACTORIAL_ARGUMENT as usize,
        });
    }
    Ok((2..=n as u64).product())
}

/// Number of orderings of `n` distinguishable items (`n!`), without a width ceiling.
pub fn permutation_count(n: usize) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// Counts occurrences of each distinct character in `input`.
pub fn frequency_table(input: &str) -> HashMap<char, usize> {
    counts(input.chars())
}

fn counts<T, I>(items: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut table = HashMap::new();
    for item in items {
        *table.entry(item).or_insert(0) += 1;
    }
    table
}

/// Exact number of distinct permutations of `items`, without a width ceiling.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use permutations::cs::combinatorial::unique_permutation_count;
///
/// assert_eq!(unique_permutation_count(&[1, 1, 2]), BigUint::from(3u32));
/// ```
pub fn unique_permutation_count<T>(items: &[T]) -> BigUint
where
    T: Eq + Hash,
{
    let denominator = counts(items.iter())
        .values()
        .filter(|&&count| count > 1)
        .fold(BigUint::one(), |acc, &count| acc * permutation_count(count));
    permutation_count(items.len()) / denominator
}

/// Number of distinct permutations of `input`.
///
/// Despite the name this is exact: it equals the size of the deduplicated result
/// of every generator. Any `char` value is counted, not just ASCII. Fails with
/// `CountTooLarge` only when the count itself exceeds `u64::MAX`.
///
/// # Example
/// ```
/// use permutations::cs::combinatorial::estimate_unique_permutations;
///
/// assert_eq!(estimate_unique_permutations("aab").unwrap(), 3);
/// assert_eq!(estimate_unique_permutations("abc").unwrap(), 6);
/// assert_eq!(estimate_unique_permutations("").unwrap(), 1);
/// ```
pub fn estimate_unique_permutations(input: &str) -> Result<u64> {
    if input.is_empty() {
        return Ok(1);
    }
    let chars: Vec<char> = input.chars().collect();
    unique_permutation_count(&chars)
        .to_u64()
        .ok_or(Error::CountTooLarge {
            length: chars.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_small() {
        let expected = [1, 1, 2, 6, 24, 120];
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!(factorial(n as i64).unwrap(), value);
        }
    }

    #[test]
    fn test_factorial_ceiling() {
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
        assert_eq!(
            factorial(21),
            Err(Error::InputTooLarge {
                length: 21,
                max_length: 20
            })
        );
    }

    #[test]
    fn test_factorial_negative() {
        assert!(matches!(factorial(-1), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_frequency_table() {
        let table = frequency_table("mississippi");
        assert_eq!(table[&'m'], 1);
        assert_eq!(table[&'i'], 4);
        assert_eq!(table[&'s'], 4);
        assert_eq!(table[&'p'], 2);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_estimate_repeated() {
        assert_eq!(estimate_unique_permutations("mississippi").unwrap(), 34_650);
        assert_eq!(estimate_unique_permutations("aaaa").unwrap(), 1);
        assert_eq!(estimate_unique_permutations("aabb").unwrap(), 6);
    }

    #[test]
    fn test_estimate_non_ascii() {
        assert_eq!(estimate_unique_permutations("ééa").unwrap(), 3);
        assert_eq!(estimate_unique_permutations("日本日").unwrap(), 3);
    }

    #[test]
    fn test_estimate_beyond_factorial_ceiling() {
        // 25! overflows u64, but 25!/(24!) = 25 does not.
        let input = format!("{}b", "a".repeat(24));
        assert_eq!(estimate_unique_permutations(&input).unwrap(), 25);

        let distinct: String = ('a'..='z').collect();
        assert!(matches!(
            estimate_unique_permutations(&distinct),
            Err(Error::CountTooLarge { length: 26 })
        ));
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutation_count(0), BigUint::one());
        assert_eq!(permutation_count(13), BigUint::from(6_227_020_800u64));
    }

    #[test]
    fn test_unique_count_big() {
        let distinct: Vec<u32> = (0..25).collect();
        let expected: BigUint = "15511210043330985984000000".parse().unwrap();
        assert_eq!(unique_permutation_count(&distinct), expected);
    }
}
