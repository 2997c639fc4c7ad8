//! Access to named model tensors, optionally narrowed to one batch item.

use crate::error::{FeatVisError, Result};
use log::debug;
use ndarray::{ArrayD, Axis, Slice};

/// Source of named activation tensors, e.g. hooks registered on a model.
pub trait TensorAccess {
    /// Fetch the tensor recorded under `name`.
    fn fetch(&self, name: &str) -> Result<ArrayD<f32>>;
}

impl<F> TensorAccess for F
where
    F: Fn(&str) -> Result<ArrayD<f32>>,
{
    fn fetch(&self, name: &str) -> Result<ArrayD<f32>> {
        self(name)
    }
}

/// Accessor that narrows every fetched tensor to a single batch item.
///
/// Built with [`handle_batch`].
pub struct BatchSelector<T> {
    inner: T,
    batch: Option<usize>,
}

impl<T: TensorAccess> BatchSelector<T> {
    /// Selected batch index, if any
    pub fn batch(&self) -> Option<usize> {
        self.batch
    }
}

impl<T: TensorAccess> TensorAccess for BatchSelector<T> {
    fn fetch(&self, name: &str) -> Result<ArrayD<f32>> {
        let tensor = self.inner.fetch(name)?;
        let index = match self.batch {
            Some(index) => index,
            None => return Ok(tensor),
        };

        if tensor.ndim() == 0 {
            return Err(FeatVisError::dimension_mismatch(
                format!("a batch axis on '{}'", name),
                "a 0-d tensor".to_string(),
            ));
        }
        let batch_len = tensor.len_of(Axis(0));
        if index >= batch_len {
            return Err(FeatVisError::index_out_of_bounds("batch", index, batch_len));
        }

        debug!("Selecting batch item {} of {} from '{}'", index, batch_len, name);
        Ok(tensor
            .slice_axis(Axis(0), Slice::from(index..index + 1))
            .to_owned())
    }
}

/// Wrap `access` so fetched tensors keep only batch item `batch`.
///
/// With `None` every tensor passes through unchanged. A selected tensor keeps
/// its rank: the batch axis has length 1.
///
/// ```
/// use featvis::objectives::{handle_batch, TensorAccess};
/// use ndarray::{ArrayD, IxDyn};
///
/// let model = |_: &str| -> featvis::Result<ArrayD<f32>> {
///     Ok(ArrayD::zeros(IxDyn(&[4, 8, 7, 7])))
/// };
/// let access = handle_batch(model, Some(2));
/// assert_eq!(access.fetch("mixed4a").unwrap().shape(), &[1, 8, 7, 7]);
/// ```
pub fn handle_batch<T: TensorAccess>(access: T, batch: Option<usize>) -> BatchSelector<T> {
    BatchSelector {
        inner: access,
        batch,
    }
}
