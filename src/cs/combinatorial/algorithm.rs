use std::fmt;
use std::str::FromStr;

use crate::cs::combinatorial::{generate_iterative, generate_iterative_alt, generate_recursive};
use crate::cs::error::{Error, Result};

/// Selects one of the permutation generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Backtracking over a prefix and the remaining symbols
    #[default]
    Recursive,
    /// Heap's algorithm
    Iterative,
    /// Insertion expansion
    IterativeAlt,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Recursive,
        Algorithm::Iterative,
        Algorithm::IterativeAlt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Recursive => "recursive",
            Algorithm::Iterative => "iterative",
            Algorithm::IterativeAlt => "iterative-alt",
        }
    }

    /// Runs this generator on `input`.
    pub fn generate(&self, input: Option<&str>, include_duplicates: bool) -> Result<Vec<String>> {
        match self {
            Algorithm::Recursive => generate_recursive(input, include_duplicates),
            Algorithm::Iterative => generate_iterative(input, include_duplicates),
            Algorithm::IterativeAlt => generate_iterative_alt(input, include_duplicates),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts the long and short command-line spellings, with or without a leading `-`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('-').to_ascii_lowercase();
        match name.as_str() {
            "recursive" | "rec" => Ok(Algorithm::Recursive),
            "iterative" | "iter" | "heap" => Ok(Algorithm::Iterative),
            "iterative-alt" | "alt" | "insertion" => Ok(Algorithm::IterativeAlt),
            _ => Err(Error::invalid_argument(format!(
                "Unknown algorithm '{}', expected one of: recursive, rec, iterative, iter, heap, iterative-alt, alt, insertion",
                s
            ))),
        }
    }
}

/// Options for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Generator to run
    pub algorithm: Algorithm,
    /// Keep orderings that differ only by swapping equal symbols
    pub include_duplicates: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Recursive,
            include_duplicates: true,
        }
    }
}

impl GenerationOptions {
    pub fn new(algorithm: Algorithm, include_duplicates: bool) -> Self {
        Self {
            algorithm,
            include_duplicates,
        }
    }

    /// Generates permutations of `input` with these options.
    ///
    /// # Example
    /// ```
    /// use permutations::cs::combinatorial::{Algorithm, GenerationOptions};
    ///
    /// let options = GenerationOptions::new(Algorithm::Iterative, false);
    /// assert_eq!(options.generate(Some("aa")).unwrap(), vec!["aa"]);
    /// ```
    pub fn generate(&self, input: Option<&str>) -> Result<Vec<String>> {
        self.algorithm.generate(input, self.include_duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("recursive".parse::<Algorithm>().unwrap(), Algorithm::Recursive);
        assert_eq!("-rec".parse::<Algorithm>().unwrap(), Algorithm::Recursive);
        assert_eq!("ITERATIVE".parse::<Algorithm>().unwrap(), Algorithm::Iterative);
        assert_eq!("-iter".parse::<Algorithm>().unwrap(), Algorithm::Iterative);
        assert_eq!("insertion".parse::<Algorithm>().unwrap(), Algorithm::IterativeAlt);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogosort".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        let message = err.to_string();
        for name in ["recursive", "iterative", "heap", "iterative-alt", "insertion"] {
            assert!(message.contains(name), "{} missing from {}", name, message);
        }
    }

    #[test]
    fn test_display_round_trips() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn test_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(options.algorithm, Algorithm::Recursive);
        assert!(options.include_duplicates);
        assert_eq!(options.generate(Some("aa")).unwrap(), vec!["aa", "aa"]);
    }

    #[test]
    fn test_dispatch() {
        for algorithm in Algorithm::ALL {
            let mut perms = algorithm.generate(Some("ab"), true).unwrap();
            perms.sort();
            assert_eq!(perms, vec!["ab", "ba"]);
            assert!(algorithm.generate(None, true).is_err());
        }
    }
}
