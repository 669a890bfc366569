//! K-means over integer `(language, score)` vectors.
//!
//! Lloyd iterations starting from caller-provided centers:
//!
//! 1. Assign every point to its nearest center (squared Euclidean distance,
//!    lowest center index wins ties).
//! 2. Replace each center by the integer mean of its points. A center that
//!    received no points keeps its previous value.
//! 3. Stop once the summed squared movement of all centers drops below `eta`,
//!    or after `max_iter` iterations.
//!
//! Nothing is random after initialization, so a run is reproducible from its
//! inputs. Assignment is data-parallel; iterations are strictly sequential and
//! each one produces a fresh center array.

use tracing::{debug, warn};

use super::util::{self, assign};
use crate::error::{Error, Result};
use crate::vectorize::Vector;

/// K-means engine configuration.
#[derive(Debug, Clone)]
pub struct Kmeans {
    eta: f64,
    max_iter: usize,
}

/// Result of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// Final centers, same length and order as the initial centers.
    pub centers: Vec<Vector>,
    /// Iterations performed (at least 1).
    pub iterations: usize,
    /// Whether movement fell below `eta` before the iteration cap.
    pub converged: bool,
    /// Total squared center movement in the last iteration.
    pub movement: f64,
}

impl KmeansFit {
    /// Label each point with the index of its nearest final center.
    pub fn predict(&self, points: &[Vector]) -> Vec<usize> {
        assign(points, &self.centers)
    }
}

impl Kmeans {
    /// Create an engine with `eta = 20.0` and `max_iter = 120`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence threshold.
    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Convergence threshold.
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Iteration cap.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Whether a total movement counts as converged.
    pub fn converged(&self, movement: f64) -> bool {
        movement < self.eta
    }

    /// One assignment + update pass.
    pub fn step(&self, points: &[Vector], centers: &[Vector]) -> Vec<Vector> {
        let labels = assign(points, centers);

        let mut members: Vec<Vec<Vector>> = vec![Vec::new(); centers.len()];
        for (&label, &point) in labels.iter().zip(points) {
            members[label].push(point);
        }

        centers
            .iter()
            .zip(&members)
            .map(|(&old, group)| util::average_vectors(group).unwrap_or(old))
            .collect()
    }

    /// Iterate from `initial` until convergence or the iteration cap.
    ///
    /// Hitting the cap is not an error: the last centers are returned with
    /// `converged == false`.
    pub fn fit(&self, points: &[Vector], initial: &[Vector]) -> Result<KmeansFit> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        if initial.is_empty() {
            return Err(Error::InvalidParameter {
                name: "initial",
                message: "must contain at least one center",
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }

        let mut centers = initial.to_vec();
        let mut movement = 0.0;
        for iteration in 1..=self.max_iter {
            let next = self.step(points, &centers);
            movement = total_movement(&centers, &next);
            debug!(iteration, movement, "k-means iteration");
            centers = next;

            if self.converged(movement) {
                return Ok(KmeansFit {
                    centers,
                    iterations: iteration,
                    converged: true,
                    movement,
                });
            }
        }

        warn!(
            max_iter = self.max_iter,
            movement, "k-means reached max iterations without converging"
        );
        Ok(KmeansFit {
            centers,
            iterations: self.max_iter,
            converged: false,
            movement,
        })
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self {
            eta: 20.0,
            max_iter: 120,
        }
    }
}

/// Sum of squared distances between same-index centers.
pub fn total_movement(old: &[Vector], new: &[Vector]) -> f64 {
    debug_assert_eq!(old.len(), new.len());
    old.iter()
        .zip(new)
        .map(|(&a, &b)| util::squared_euclidean(a, b))
        .sum()
}
