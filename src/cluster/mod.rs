//! Clustering questions by language and score.
//!
//! Every question becomes a 2-D integer point `(language_index * spread, score)`.
//! A large `spread` keeps each language in its own band along `x`, so k-means
//! effectively clusters scores within a language while still letting a center
//! pick up stray points from neighbouring bands.
//!
//! ## Stages
//!
//! ### Sampling
//!
//! [`StratifiedSampler`] picks the initial centers. With well separated
//! languages each language contributes `kernels / languages` centers chosen by
//! reservoir sampling; otherwise centers are drawn uniformly from all points.
//!
//! ### K-means
//!
//! [`Kmeans`] runs Lloyd iterations on integer vectors until the total squared
//! center movement falls below `eta`:
//!
//! ```text
//! movement = Σ_k ||μ_k(t) - μ_k(t+1)||²
//! ```
//!
//! ### Reporting
//!
//! [`cluster_results`] labels each final cluster with its dominant language,
//! that language's share, the cluster size and the median score.
//!
//! ## Usage
//!
//! ```rust
//! use stackmeans::cluster::{cluster_results, Kmeans, StratifiedSampler};
//! use stackmeans::Vector;
//!
//! let languages = vec!["Java".to_string(), "Python".to_string()];
//! let points = vec![
//!     Vector::new(0, 10),
//!     Vector::new(0, 20),
//!     Vector::new(50_000, 5),
//! ];
//!
//! let initial = StratifiedSampler::new(2, 50_000, 2).sample(&points).unwrap();
//! let fit = Kmeans::new().fit(&points, &initial).unwrap();
//! let clusters = cluster_results(&fit.centers, &points, &languages, 50_000).unwrap();
//!
//! assert_eq!(clusters[0].dominant_language, "Python");
//! assert_eq!(clusters[1].dominant_language, "Java");
//! assert_eq!(clusters[1].median_score, 15);
//! ```

mod kmeans;
mod report;
mod sampler;
mod traits;
mod util;

pub use kmeans::{total_movement, Kmeans, KmeansFit};
pub use report::{cluster_results, ClusterSummary, Report};
pub use sampler::{reservoir_sample, StratifiedSampler, MIN_STRATIFIED_SPREAD};
pub use traits::Clustering;
pub use util::{find_closest, median};
