//! Session sampling
//!
//! Draws the ordered question sequence for one play-through: a uniform
//! Fisher–Yates shuffle of the catalog, truncated to the requested
//! sample size. Sampling is without replacement and every ordering of
//! every k-subset is equally likely.

use phishdrill_core::catalog::Question;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::EngineError;

/// Returns `k` distinct catalog indices in uniformly random order.
///
/// # Errors
///
/// [`EngineError::EmptyCatalog`] when `n` or `k` is zero,
/// [`EngineError::SampleTooLarge`] when `k > n`.
pub fn sample_indices<R: Rng + ?Sized>(
    n: usize,
    k: usize,
    rng: &mut R,
) -> Result<Vec<usize>, EngineError> {
    if n == 0 || k == 0 {
        return Err(EngineError::EmptyCatalog);
    }
    if k > n {
        return Err(EngineError::SampleTooLarge {
            requested: k,
            available: n,
        });
    }
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices.truncate(k);
    Ok(indices)
}

/// Draws `k` distinct questions from `catalog` in randomized order.
///
/// # Errors
///
/// Same conditions as [`sample_indices`].
pub fn sample_questions<R: Rng + ?Sized>(
    catalog: &[Question],
    k: usize,
    rng: &mut R,
) -> Result<Vec<Question>, EngineError> {
    let indices = sample_indices(catalog.len(), k, rng)?;
    Ok(indices.into_iter().map(|i| catalog[i].clone()).collect())
}
