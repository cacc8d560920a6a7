//! Vector math. Stored vectors are unit length, so cosine = dot product.

use coursematch_common::{CourseMatchError, Result};
use ndarray::ArrayView1;

/// Scale `vector` to unit L2 norm in place.
///
/// The norm is accumulated in f64. A zero or non-finite norm is rejected
/// instead of producing NaN/Inf components.
pub fn l2_normalize(vector: &mut [f32]) -> Result<()> {
    let norm = vector
        .iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt();

    if !norm.is_finite() {
        return Err(CourseMatchError::embedding(
            "embedding contains non-finite components",
        ));
    }
    if norm == 0.0 {
        return Err(CourseMatchError::embedding(
            "zero-norm embedding cannot be normalized",
        ));
    }

    for x in vector.iter_mut() {
        *x = (f64::from(*x) / norm) as f32;
    }

    Ok(())
}

/// Inner product with f64 accumulation
pub fn dot(a: ArrayView1<'_, f32>, b: ArrayView1<'_, f32>) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same length");

    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| f64::from(x) * f64::from(y))
        .sum()
}

/// Clamp to the cosine range and round to 4 decimal places
pub fn round_score(score: f64) -> f64 {
    let rounded = (score.clamp(-1.0, 1.0) * 10_000.0).round() / 10_000.0;
    // avoid reporting -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
