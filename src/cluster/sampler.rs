//! Initial center selection.
//!
//! When languages sit far apart on the `x` axis (`spread >= 500`), every
//! language gets the same number of initial centers, drawn from its own points
//! with reservoir sampling (Vitter's Algorithm R). Each language's RNG is seeded
//! with its index, so the selection is reproducible. With a smaller spread the
//! languages overlap and centers are drawn uniformly from all points instead.

use rand::prelude::*;

use crate::error::{Error, Result};
use crate::vectorize::Vector;

/// Below this spread languages are not considered separated.
pub const MIN_STRATIFIED_SPREAD: i32 = 500;

/// Pick a uniform sample of `size` items from a stream of unknown length.
///
/// The first `size` items fill the reservoir. The item at 1-based stream
/// position `i > size` then replaces a uniformly chosen slot with probability
/// `size / i`. Returns fewer than `size` items only when the stream is shorter.
pub fn reservoir_sample<T, I, R>(items: I, size: usize, rng: &mut R) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    R: Rng + ?Sized,
{
    let mut iter = items.into_iter();
    let mut reservoir: Vec<T> = iter.by_ref().take(size).collect();
    if reservoir.len() < size {
        return reservoir;
    }

    for (offset, item) in iter.enumerate() {
        let position = size + offset + 1;
        let j = rng.random_range(0..position);
        if j < size {
            reservoir[j] = item;
        }
    }
    reservoir
}

/// Chooses the initial k-means centers.
#[derive(Debug, Clone)]
pub struct StratifiedSampler {
    kernels: usize,
    spread: i32,
    num_languages: usize,
    seed: u64,
}

impl StratifiedSampler {
    /// Create a sampler for `kernels` centers over `num_languages` languages.
    pub fn new(kernels: usize, spread: i32, num_languages: usize) -> Self {
        Self {
            kernels,
            spread,
            num_languages,
            seed: 42,
        }
    }

    /// Seed used by the uniform (non-stratified) branch.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn per_language(&self) -> usize {
        self.kernels / self.num_languages.max(1)
    }

    /// Select exactly `kernels` initial centers from `points`.
    pub fn sample(&self, points: &[Vector]) -> Result<Vec<Vector>> {
        if self.spread <= 0 {
            return Err(Error::InvalidParameter {
                name: "spread",
                message: "must be positive",
            });
        }
        if self.num_languages == 0 || self.kernels % self.num_languages != 0 {
            return Err(Error::InvalidParameter {
                name: "kernels",
                message: "must be a multiple of the number of languages",
            });
        }

        let centers = if self.spread < MIN_STRATIFIED_SPREAD {
            let mut rng = StdRng::seed_from_u64(self.seed);
            points
                .choose_multiple(&mut rng, self.kernels)
                .copied()
                .collect::<Vec<_>>()
        } else {
            self.stratified(points)?
        };

        if centers.len() != self.kernels {
            return Err(Error::SampleSizeMismatch {
                expected: self.kernels,
                found: centers.len(),
            });
        }
        Ok(centers)
    }

    fn stratified(&self, points: &[Vector]) -> Result<Vec<Vector>> {
        let required = self.per_language();

        let mut scores: Vec<Vec<i32>> = vec![Vec::new(); self.num_languages];
        for p in points {
            if let Some(group) = p
                .language_index(self.spread)
                .and_then(|idx| scores.get_mut(idx))
            {
                group.push(p.y);
            }
        }

        let mut centers = Vec::with_capacity(self.kernels);
        for (language, group) in scores.into_iter().enumerate() {
            if group.len() < required {
                return Err(Error::SamplingShortfall {
                    language,
                    found: group.len(),
                    required,
                });
            }
            let mut rng = StdRng::seed_from_u64(language as u64);
            let x = i32::try_from(language)
                .ok()
                .and_then(|l| l.checked_mul(self.spread))
                .ok_or(Error::InvalidParameter {
                    name: "spread",
                    message: "too large for the number of languages",
                })?;
            centers.extend(
                reservoir_sample(group, required, &mut rng)
                    .into_iter()
                    .map(|y| Vector::new(x, y)),
            );
        }
        Ok(centers)
    }
}
