//! # featvis - Helpers for Neural-Network Feature Visualization
//!
//! featvis provides the small building blocks that feature-visualization
//! objectives are made of. Activations are `ndarray` arrays laid out as
//! `[batch, channel, height, width]`.
//!
//! ## Key Features
//!
//! - **Direction objectives**: Cosine-similarity-weighted dot products that
//!   reward alignment with a channel-space direction
//! - **Activation slicing**: Single spatial positions and single batch items
//! - **InceptionV1 branch table**: Channel widths of every mixed-layer branch
//! - **Readable labels**: Short objective descriptions for logs
//!
//! ## Quick Start
//!
//! ```rust
//! use featvis::objectives::direction_neuron;
//! use ndarray::{array, ArrayD, IxDyn};
//!
//! let model = |_: &str| -> featvis::Result<ArrayD<f32>> {
//!     Ok(ArrayD::ones(IxDyn(&[1, 2, 5, 5])))
//! };
//!
//! let objective = direction_neuron("mixed4a", array![1.0, 0.0], None, None, None, 1.0);
//! let loss = objective.evaluate(&model).unwrap();
//! assert!(loss < 0.0);
//! ```
//!
//! ## Module Organization
//!
//! - [`branches`] - InceptionV1 mixed-layer branch widths
//! - [`config`] - Cosine similarity settings
//! - [`error`] - Error types and result handling
//! - [`labels`] - Argument shortening for objective descriptions
//! - [`objectives`] - Similarity, position, batch helpers and direction objectives

pub mod branches;
pub mod config;
pub mod error;
pub mod labels;
pub mod objectives;

pub use error::{FeatVisError, Result};
