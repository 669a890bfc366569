use rayon::prelude::*;

use crate::vectorize::Vector;

#[inline]
pub(crate) fn squared_euclidean(a: Vector, b: Vector) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx * dx + dy * dy
}

/// Index of the center nearest to `point`.
///
/// Centers are scanned in order and only a strictly smaller distance replaces
/// the current best, so ties go to the lowest index.
pub fn find_closest(point: Vector, centers: &[Vector]) -> usize {
    let mut best = 0;
    let mut closest = f64::INFINITY;
    for (idx, &center) in centers.iter().enumerate() {
        let d = squared_euclidean(point, center);
        if d < closest {
            closest = d;
            best = idx;
        }
    }
    best
}

/// Nearest-center label for every point, computed in parallel.
pub(crate) fn assign(points: &[Vector], centers: &[Vector]) -> Vec<usize> {
    points
        .par_iter()
        .map(|&p| find_closest(p, centers))
        .collect()
}

/// Componentwise integer mean, truncating toward zero.
///
/// Returns `None` for an empty slice.
pub(crate) fn average_vectors(points: &[Vector]) -> Option<Vector> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as i64;
    let (sx, sy) = points.iter().fold((0i64, 0i64), |(sx, sy), p| {
        (sx + i64::from(p.x), sy + i64::from(p.y))
    });
    Some(Vector::new((sx / n) as i32, (sy / n) as i32))
}

/// Median of `values` with integer averaging of the two middle values.
///
/// Returns `None` for an empty slice.
pub fn median(values: &[i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n % 2 == 0 {
        let lo = i64::from(sorted[n / 2 - 1]);
        let hi = i64::from(sorted[n / 2]);
        Some(((lo + hi) / 2) as i32)
    } else {
        Some(sorted[n / 2])
    }
}
