//! Side-by-side run of every generator on the same input.
//!
//! The report surfaces divergence between generators; it does not fail on it.
//! The generators are expected to be correct on their own.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, warn};
use num_bigint::BigUint;

use crate::cs::combinatorial::{
    estimate_unique_permutations, permutation_count, unique_permutation_count, Algorithm,
};
use crate::cs::error::Result;

/// Per-algorithm permutation count above which a comparison run is flagged (12!).
pub const LARGE_WORKLOAD_THRESHOLD: u64 = 479_001_600;

/// Outcome of one generator in a comparison run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    /// Number of permutations returned
    pub permutations: usize,
    pub elapsed: Duration,
}

/// Timings and result counts for all generators on one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceReport {
    pub input: String,
    pub input_length: usize,
    pub include_duplicates: bool,
    /// Exact number of distinct permutations of the input
    pub expected_unique: u64,
    pub runs: Vec<AlgorithmRun>,
    /// Whether every generator returned the same multiset of permutations
    pub sets_consistent: bool,
}

impl PerformanceReport {
    /// Whether every generator returned the same number of permutations.
    pub fn counts_consistent(&self) -> bool {
        self.runs
            .windows(2)
            .all(|pair| pair[0].permutations == pair[1].permutations)
    }

    /// Whether every generator returned the exact expected number of permutations:
    /// `n!` with duplicates included, `expected_unique` otherwise.
    pub fn matches_expected(&self) -> bool {
        let expected = if self.include_duplicates {
            permutation_count(self.input_length)
        } else {
            BigUint::from(self.expected_unique)
        };
        self.runs
            .iter()
            .all(|run| BigUint::from(run.permutations) == expected)
    }

    pub fn run(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|run| run.algorithm == algorithm)
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance Comparison for: \"{}\"", self.input)?;
        writeln!(f, "String length: {}", self.input_length)?;
        writeln!(f, "Expected permutations: {}", self.expected_unique)?;
        writeln!(f, "Include duplicates: {}", self.include_duplicates)?;
        writeln!(f, "{}", "=".repeat(50))?;
        for run in &self.runs {
            let label = format!("{}:", run.algorithm);
            writeln!(
                f,
                "{:<19} {:>8} permutations, {:>8.3} ms",
                label,
                run.permutations,
                run.elapsed.as_secs_f64() * 1000.0
            )?;
        }
        write!(
            f,
            "Results consistent: {}",
            self.counts_consistent() && self.sets_consistent && self.matches_expected()
        )
    }
}

/// Returns true when `a` and `b` hold the same permutations with the same multiplicities.
///
/// # Example
/// ```
/// use permutations::cs::combinatorial::same_permutations;
///
/// let a = vec!["ab".to_string(), "ba".to_string()];
/// let b = vec!["ba".to_string(), "ab".to_string()];
/// assert!(same_permutations(&a, &b));
/// ```
pub fn same_permutations(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut tally: HashMap<&str, isize> = HashMap::new();
    for perm in a {
        *tally.entry(perm.as_str()).or_insert(0) += 1;
    }
    for perm in b {
        *tally.entry(perm.as_str()).or_insert(0) -= 1;
    }
    tally.values().all(|&count| count == 0)
}

/// Number of permutations each generator materialises for `input`.
///
/// With duplicates included every generator builds all `n!` orderings, however
/// many of them are equal; otherwise the result holds the distinct count.
pub fn workload_size(input: &str, include_duplicates: bool) -> BigUint {
    let chars: Vec<char> = input.chars().collect();
    if include_duplicates {
        permutation_count(chars.len())
    } else {
        unique_permutation_count(&chars)
    }
}

/// Logs a warning when [`workload_size`] exceeds [`LARGE_WORKLOAD_THRESHOLD`].
/// Returns whether the warning was emitted.
pub fn warn_if_large_workload(input: &str, include_duplicates: bool) -> bool {
    let work = workload_size(input, include_duplicates);
    let large = work > BigUint::from(LARGE_WORKLOAD_THRESHOLD);
    if large {
        warn!(
            "Comparing generators on {} symbols (duplicates included: {}); {} permutations will be materialised per algorithm",
            input.chars().count(),
            include_duplicates,
            work
        );
    }
    large
}

/// Runs all three generators on `input`, timing each and checking that they agree.
///
/// Fails with `InvalidArgument` when `input` is `None`, and with `CountTooLarge`
/// when the expected count does not fit in a `u64`.
///
/// # Example
/// ```
/// use permutations::cs::combinatorial::compare_performance;
///
/// let report = compare_performance(Some("aab"), false).unwrap();
/// assert_eq!(report.expected_unique, 3);
/// assert!(report.counts_consistent());
/// assert!(report.sets_consistent);
/// assert!(report.matches_expected());
/// ```
pub fn compare_performance(input: Option<&str>, include_duplicates: bool) -> Result<PerformanceReport> {
    let text = input.unwrap_or_default();
    let expected_unique = estimate_unique_permutations(text)?;
    warn_if_large_workload(text, include_duplicates);

    let mut runs = Vec::with_capacity(Algorithm::ALL.len());
    let mut results: Vec<Vec<String>> = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let start = Instant::now();
        let perms = algorithm.generate(input, include_duplicates)?;
        let elapsed = start.elapsed();
        debug!(
            "{} produced {} permutations in {:?}",
            algorithm,
            perms.len(),
            elapsed
        );
        runs.push(AlgorithmRun {
            algorithm,
            permutations: perms.len(),
            elapsed,
        });
        results.push(perms);
    }

    let sets_consistent = results
        .windows(2)
        .all(|pair| same_permutations(&pair[0], &pair[1]));

    let report = PerformanceReport {
        input: text.to_string(),
        input_length: text.chars().count(),
        include_duplicates,
        expected_unique,
        runs,
        sets_consistent,
    };
    if !report.counts_consistent() || !report.sets_consistent || !report.matches_expected() {
        warn!("Generators disagree on \"{}\": {:?}", report.input, report.runs);
    }
    Ok(report)
}
