use crate::error::Result;
use crate::vectorize::Vector;

/// Common interface for hard clustering of vectors (one label per point).
pub trait Clustering {
    /// Fit the model and return one cluster label per input point.
    fn fit_predict(&self, points: &[Vector]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}
