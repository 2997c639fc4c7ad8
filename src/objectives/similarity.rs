//! Cosine-similarity-weighted dot product.
//!
//! Rewarding only the raw dot product lets an optimizer grow activations in
//! any direction that has some overlap with the target. Weighting it by the
//! cosine similarity raised to `cossim_pow` favors activations that point
//! along the target instead.

use crate::config::CossimConfig;
use crate::error::{FeatVisError, Result};
use log::trace;
use ndarray::{Array1, ArrayView, Dimension};

/// Dot product of `x` and `y` weighted by their floored cosine similarity.
///
/// Both inputs are squeezed first, so `(1, C, 1, 1)` and `(C,)` compare
/// fine. With `cossim_pow == 0` this is the plain dot product.
///
/// ```
/// use featvis::objectives::dot_cossim;
/// use ndarray::array;
///
/// let x = array![1.0f32, 0.0];
/// let y = array![2.0f32, 0.0];
/// assert_eq!(dot_cossim(x.view(), y.view(), 0.0).unwrap(), 2.0);
/// ```
pub fn dot_cossim<D1, D2>(x: ArrayView<f32, D1>, y: ArrayView<f32, D2>, cossim_pow: f32) -> Result<f32>
where
    D1: Dimension,
    D2: Dimension,
{
    dot_cossim_with(x, y, &CossimConfig::with_pow(cossim_pow))
}

/// [`dot_cossim`] with explicit epsilon and floor.
pub fn dot_cossim_with<D1, D2>(
    x: ArrayView<f32, D1>,
    y: ArrayView<f32, D2>,
    config: &CossimConfig,
) -> Result<f32>
where
    D1: Dimension,
    D2: Dimension,
{
    config.validate()?;

    let x = squeeze_to_vector(x, "x")?;
    let y = squeeze_to_vector(y, "y")?;
    if x.len() != y.len() {
        return Err(FeatVisError::dimension_mismatch(
            format!("vectors of equal length ({})", x.len()),
            format!("length {}", y.len()),
        ));
    }

    let xy_dot = x.dot(&y);
    if config.cossim_pow == 0.0 {
        return Ok(xy_dot);
    }

    let x_mag = x.dot(&x).sqrt();
    let y_mag = y.dot(&y).sqrt();
    let cossim = xy_dot / (config.eps + x_mag) / (config.eps + y_mag);
    let floored = cossim.max(config.floor);
    trace!(
        "dot_cossim: dot={} cossim={} floored={} pow={}",
        xy_dot,
        cossim,
        floored,
        config.cossim_pow
    );

    Ok(xy_dot * floored.powf(config.cossim_pow))
}

/// Drop unit axes and return the remaining values as a vector.
///
/// At most one axis may be longer than 1. A tensor with only unit axes
/// becomes a one-element vector.
fn squeeze_to_vector<D: Dimension>(view: ArrayView<f32, D>, name: &str) -> Result<Array1<f32>> {
    let non_unit: Vec<usize> = view.shape().iter().copied().filter(|&len| len != 1).collect();
    if non_unit.len() > 1 {
        return Err(FeatVisError::dimension_mismatch(
            format!("{} to squeeze to a vector", name),
            format!("shape {:?}", view.shape()),
        ));
    }
    Ok(view.iter().copied().collect())
}
