//! Building blocks for feature-visualization objectives.
//!
//! - [`similarity`] - Cosine-similarity-weighted dot product
//! - [`position`] - Spatial position extraction from activations
//! - [`batch`] - Named tensor access with optional batch selection
//! - [`direction`] - Direction objectives composed from the above

pub mod batch;
pub mod direction;
pub mod position;
pub mod similarity;

pub use batch::{handle_batch, BatchSelector, TensorAccess};
pub use direction::{direction, direction_neuron, Objective};
pub use position::extract_act_pos;
pub use similarity::{dot_cossim, dot_cossim_with};
