//! End-to-end run: postings in, labeled clusters out.

use std::io::BufRead;

use tracing::info;

use crate::cluster::{cluster_results, ClusterSummary, Clustering, KmeansFit};
use crate::error::{Error, Result};
use crate::pairing::{grouped_postings, scored_postings};
use crate::params::Params;
use crate::posting::{read_postings, Posting};
use crate::vectorize::{vector_postings, Vector};

/// Wires parsing, pairing, vectorization, sampling, k-means and reporting
/// together under one set of [`Params`].
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    params: Params,
}

impl Pipeline {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Vectors for every answered question tagged with a tracked language.
    pub fn vectors(&self, postings: &[Posting]) -> Vec<Vector> {
        let grouped = grouped_postings(postings);
        let scored = scored_postings(grouped);
        let vectors = vector_postings(&scored, &self.params.languages, self.params.spread);
        info!(
            postings = postings.len(),
            answered = scored.len(),
            vectors = vectors.len(),
            "vectorized postings"
        );
        vectors
    }

    /// Sample initial centers and run k-means to completion.
    pub fn fit(&self, vectors: &[Vector]) -> Result<KmeansFit> {
        self.params.validate()?;
        if vectors.is_empty() {
            return Err(Error::EmptyInput);
        }

        let initial = self.params.sampler().sample(vectors)?;
        let fit = self.params.kmeans().fit(vectors, &initial)?;
        info!(
            iterations = fit.iterations,
            converged = fit.converged,
            movement = fit.movement,
            "k-means finished"
        );
        Ok(fit)
    }

    /// Cluster `postings` and summarize the result.
    pub fn run(&self, postings: &[Posting]) -> Result<Vec<ClusterSummary>> {
        self.params.validate()?;
        let vectors = self.vectors(postings);
        let fit = self.fit(&vectors)?;
        cluster_results(
            &fit.centers,
            &vectors,
            &self.params.languages,
            self.params.spread,
        )
    }

    /// Parse postings from `reader`, then [`run`](Self::run).
    pub fn run_reader<R: BufRead>(&self, reader: R) -> Result<Vec<ClusterSummary>> {
        let postings = read_postings(reader)?;
        self.run(&postings)
    }
}

impl Clustering for Pipeline {
    fn fit_predict(&self, points: &[Vector]) -> Result<Vec<usize>> {
        Ok(self.fit(points)?.predict(points))
    }

    fn n_clusters(&self) -> usize {
        self.params.kernels
    }
}
