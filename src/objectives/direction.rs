//! Direction objectives: reward activations aligned with a channel-space vector.

use super::batch::{handle_batch, TensorAccess};
use super::position::extract_act_pos;
use super::similarity::dot_cossim;
use crate::error::{FeatVisError, Result};
use crate::labels::{describe, optional_arg};
use log::debug;
use ndarray::{s, Array1, Array4, ArrayD, Axis, Ix4};
use std::fmt;

type ObjectiveFn = Box<dyn Fn(&dyn TensorAccess) -> Result<f32> + Send + Sync>;

/// Scalar loss over model activations, lower is better.
pub struct Objective {
    description: String,
    func: ObjectiveFn,
}

impl Objective {
    pub fn new<F>(description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&dyn TensorAccess) -> Result<f32> + Send + Sync + 'static,
    {
        Objective {
            description: description.into(),
            func: Box::new(func),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluate against the activations currently held by `model`.
    pub fn evaluate(&self, model: &dyn TensorAccess) -> Result<f32> {
        (self.func)(model)
    }
}

impl fmt::Debug for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Objective")
            .field("description", &self.description)
            .finish()
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Visualize a direction in the activation space of `layer`.
///
/// The loss is the negated mean of the cosine-weighted dot product between
/// `vec` and the channel vector at every batch item and spatial position.
pub fn direction(layer: &str, vec: Array1<f32>, batch: Option<usize>, cossim_pow: f32) -> Objective {
    let description = describe(
        "direction",
        &[&layer, &format_vec(&vec), &optional_arg(batch), &cossim_pow],
    );
    let layer = layer.to_string();

    Objective::new(description, move |model: &dyn TensorAccess| {
        let access = handle_batch(|name: &str| model.fetch(name), batch);
        let acts = into_acts(access.fetch(&layer)?, &layer)?;
        let (batch_len, _, height, width) = acts.dim();

        let mut total = 0.0;
        let mut count = 0usize;
        for b in 0..batch_len {
            for h in 0..height {
                for w in 0..width {
                    let pixel = acts.slice(s![b, .., h, w]);
                    total += dot_cossim(vec.view(), pixel, cossim_pow)?;
                    count += 1;
                }
            }
        }
        if count == 0 {
            return Err(FeatVisError::dimension_mismatch(
                format!("non-empty activations for {}", layer),
                format!("shape {:?}", acts.shape()),
            ));
        }

        debug!("direction on {}: {} positions", layer, count);
        Ok(-total / count as f32)
    })
}

/// Visualize a direction at a single spatial position of `layer`.
///
/// `x` and `y` default to the center of the feature map.
pub fn direction_neuron(
    layer: &str,
    vec: Array1<f32>,
    batch: Option<usize>,
    x: Option<usize>,
    y: Option<usize>,
    cossim_pow: f32,
) -> Objective {
    let description = describe(
        "direction_neuron",
        &[
            &layer,
            &format_vec(&vec),
            &optional_arg(batch),
            &optional_arg(x),
            &optional_arg(y),
            &cossim_pow,
        ],
    );
    let layer = layer.to_string();

    Objective::new(description, move |model: &dyn TensorAccess| {
        let access = handle_batch(|name: &str| model.fetch(name), batch);
        let acts = into_acts(access.fetch(&layer)?, &layer)?;
        let pos = extract_act_pos(acts.view(), x, y)?;

        let batch_len = pos.len_of(Axis(0));
        if batch_len == 0 {
            return Err(FeatVisError::dimension_mismatch(
                format!("a non-empty batch for {}", layer),
                "0 items".to_string(),
            ));
        }
        let mut total = 0.0;
        for item in pos.axis_iter(Axis(0)) {
            total += dot_cossim(vec.view(), item, cossim_pow)?;
        }
        Ok(-total / batch_len as f32)
    })
}

fn into_acts(tensor: ArrayD<f32>, layer: &str) -> Result<Array4<f32>> {
    let ndim = tensor.ndim();
    tensor.into_dimensionality::<Ix4>().map_err(|_| {
        FeatVisError::dimension_mismatch(
            format!("[batch, channel, height, width] activations for {}", layer),
            format!("{} axes", ndim),
        )
    })
}

fn format_vec(vec: &Array1<f32>) -> String {
    format!("{}", vec)
}
