//! Run configuration.

use crate::cluster::{Kmeans, StratifiedSampler};
use crate::error::{Error, Result};

/// Languages tracked by default, in index order.
pub const DEFAULT_LANGUAGES: [&str; 15] = [
    "JavaScript",
    "Java",
    "PHP",
    "Python",
    "C#",
    "C++",
    "Ruby",
    "CSS",
    "Objective-C",
    "Perl",
    "Scala",
    "Haskell",
    "MATLAB",
    "Clojure",
    "Groovy",
];

/// Parameters for one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    /// Tracked languages. Order fixes each language's index.
    pub languages: Vec<String>,
    /// Distance between adjacent languages along `x`.
    pub spread: i32,
    /// Number of centers. Must be a multiple of `languages.len()`.
    pub kernels: usize,
    /// Convergence threshold on total center movement.
    pub eta: f64,
    pub max_iterations: usize,
    /// Seed for uniform sampling when languages are not well separated.
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            spread: 50_000,
            kernels: 45,
            eta: 20.0,
            max_iterations: 120,
            seed: 42,
        }
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked language list.
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_spread(mut self, spread: i32) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_kernels(mut self, kernels: usize) -> Self {
        self.kernels = kernels;
        self
    }

    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Centers sampled per language.
    pub fn per_language(&self) -> usize {
        self.kernels / self.languages.len().max(1)
    }

    /// Check every parameter, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(Error::InvalidParameter {
                name: "languages",
                message: "must name at least one language",
            });
        }
        if self.spread <= 0 {
            return Err(Error::InvalidParameter {
                name: "spread",
                message: "must be positive",
            });
        }
        let last = i32::try_from(self.languages.len() - 1).ok();
        if last.and_then(|l| l.checked_mul(self.spread)).is_none() {
            return Err(Error::InvalidParameter {
                name: "spread",
                message: "too large for the number of languages",
            });
        }
        if self.kernels == 0 {
            return Err(Error::InvalidParameter {
                name: "kernels",
                message: "must be at least 1",
            });
        }
        if self.kernels % self.languages.len() != 0 {
            return Err(Error::InvalidParameter {
                name: "kernels",
                message: "must be a multiple of the number of languages",
            });
        }
        if !self.eta.is_finite() || self.eta <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "eta",
                message: "must be finite and positive",
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iterations",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Sampler configured from these parameters.
    pub fn sampler(&self) -> StratifiedSampler {
        StratifiedSampler::new(self.kernels, self.spread, self.languages.len())
            .with_seed(self.seed)
    }

    /// K-means engine configured from these parameters.
    pub fn kmeans(&self) -> Kmeans {
        Kmeans::new()
            .with_eta(self.eta)
            .with_max_iter(self.max_iterations)
    }
}
