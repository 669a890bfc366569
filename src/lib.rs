//! Clustering Stack Overflow questions by language and answer score.
//!
//! `stackmeans` reads question/answer postings, keeps the best answer score for
//! every answered question, places each question at
//! `(language_index * spread, score)` and clusters those points with k-means.
//!
//! The main pieces are:
//! - [`posting`]: record parsing
//! - [`pairing`] and [`vectorize`]: from postings to points
//! - [`cluster`]: stratified sampling, k-means and cluster summaries
//! - [`Pipeline`]: all of the above behind one call

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod pairing;
pub mod params;
pub mod pipeline;
pub mod posting;
pub mod vectorize;

pub use cluster::{
    cluster_results, Clustering, ClusterSummary, Kmeans, KmeansFit, Report, StratifiedSampler,
};
pub use error::{Error, RecordError, Result};
pub use params::{Params, DEFAULT_LANGUAGES};
pub use pipeline::Pipeline;
pub use posting::{read_postings, Posting, PostingType};
pub use vectorize::Vector;
