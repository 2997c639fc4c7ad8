//! Branch widths of the InceptionV1 (GoogLeNet) mixed layers.
//!
//! Each mixed layer concatenates four parallel branches along the channel
//! axis, in the order 1x1, 3x3, 5x5, pool_reduce. Knowing the widths lets an
//! objective target one branch, e.g. for diversity or branch-specific
//! visualizations.

use crate::error::{FeatVisError, Result};
use ndarray::{s, ArrayView4};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Parallel path inside a mixed layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "1x1")]
    Conv1x1,
    #[serde(rename = "3x3")]
    Conv3x3,
    #[serde(rename = "5x5")]
    Conv5x5,
    #[serde(rename = "pool_reduce")]
    PoolReduce,
}

impl Branch {
    /// All branches in concatenation order
    pub const ALL: [Branch; 4] = [
        Branch::Conv1x1,
        Branch::Conv3x3,
        Branch::Conv5x5,
        Branch::PoolReduce,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Conv1x1 => "1x1",
            Branch::Conv3x3 => "3x3",
            Branch::Conv5x5 => "5x5",
            Branch::PoolReduce => "pool_reduce",
        }
    }

    fn position(&self) -> usize {
        match self {
            Branch::Conv1x1 => 0,
            Branch::Conv3x3 => 1,
            Branch::Conv5x5 => 2,
            Branch::PoolReduce => 3,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Branch {
    type Err = FeatVisError;

    fn from_str(s: &str) -> Result<Self> {
        Branch::ALL
            .iter()
            .copied()
            .find(|branch| branch.as_str() == s)
            .ok_or_else(|| FeatVisError::UnknownBranch(s.to_string()))
    }
}

/// Channel widths of one mixed layer, indexed in [`Branch::ALL`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerBranches {
    pub layer: &'static str,
    pub widths: [usize; 4],
}

impl LayerBranches {
    pub fn width(&self, branch: Branch) -> usize {
        self.widths[branch.position()]
    }

    /// Channels of the concatenated layer output
    pub fn total_channels(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Channels occupied by `branch` in the concatenated output
    pub fn channel_range(&self, branch: Branch) -> Range<usize> {
        let start: usize = self.widths[..branch.position()].iter().sum();
        start..start + self.width(branch)
    }

    /// `(branch, width)` pairs in concatenation order
    pub fn iter(&self) -> impl Iterator<Item = (Branch, usize)> + '_ {
        Branch::ALL.iter().map(move |&branch| (branch, self.width(branch)))
    }
}

const fn layer(name: &'static str, w1x1: usize, w3x3: usize, w5x5: usize, pool: usize) -> LayerBranches {
    LayerBranches {
        layer: name,
        widths: [w1x1, w3x3, w5x5, pool],
    }
}

/// Branch widths for every InceptionV1 mixed layer
pub static LAYER_BRANCHES: [LayerBranches; 9] = [
    layer("mixed3a", 64, 128, 32, 32),
    layer("mixed3b", 128, 192, 96, 64),
    layer("mixed4a", 192, 204, 48, 64),
    layer("mixed4b", 160, 224, 64, 64),
    layer("mixed4c", 128, 256, 64, 64),
    layer("mixed4d", 112, 288, 64, 64),
    layer("mixed4e", 256, 320, 128, 128),
    layer("mixed5a", 256, 320, 128, 128),
    layer("mixed5b", 384, 384, 128, 128),
];

/// Look up the branch widths of `layer`.
pub fn layer_branches(layer: &str) -> Result<&'static LayerBranches> {
    LAYER_BRANCHES
        .iter()
        .find(|entry| entry.layer == layer)
        .ok_or_else(|| FeatVisError::UnknownLayer(layer.to_string()))
}

/// Channel count of one branch of `layer`.
pub fn branch_width(layer: &str, branch: Branch) -> Result<usize> {
    Ok(layer_branches(layer)?.width(branch))
}

/// Names of all layers in the table, shallowest first
pub fn layer_names() -> impl Iterator<Item = &'static str> {
    LAYER_BRANCHES.iter().map(|entry| entry.layer)
}

/// Restrict `[batch, channel, height, width]` activations of `layer` to the
/// channels produced by `branch`.
pub fn branch_activations<'a>(
    acts: ArrayView4<'a, f32>,
    layer: &str,
    branch: Branch,
) -> Result<ArrayView4<'a, f32>> {
    let entry = layer_branches(layer)?;
    let channels = acts.dim().1;
    if channels != entry.total_channels() {
        return Err(FeatVisError::dimension_mismatch(
            format!("{} channels for {}", entry.total_channels(), layer),
            format!("{} channels", channels),
        ));
    }

    let range = entry.channel_range(branch);
    Ok(acts.slice_move(s![.., range, .., ..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    #[test]
    fn test_lookup_known_layer() {
        let entry = layer_branches("mixed4c").unwrap();
        assert_eq!(entry.width(Branch::Conv1x1), 128);
        assert_eq!(entry.width(Branch::Conv3x3), 256);
        assert_eq!(entry.width(Branch::Conv5x5), 64);
        assert_eq!(entry.width(Branch::PoolReduce), 64);
        assert_eq!(branch_width("mixed5b", Branch::Conv1x1).unwrap(), 384);
    }

    #[test]
    fn test_unknown_layer() {
        assert_eq!(
            layer_branches("mixed6a").unwrap_err(),
            FeatVisError::UnknownLayer("mixed6a".to_string())
        );
    }

    #[test]
    fn test_totals_match_googlenet() {
        let totals: Vec<usize> = LAYER_BRANCHES.iter().map(|e| e.total_channels()).collect();
        assert_eq!(totals, vec![256, 480, 508, 512, 512, 528, 832, 832, 1024]);
    }

    #[test]
    fn test_channel_ranges_tile_the_layer() {
        for entry in LAYER_BRANCHES.iter() {
            let mut next = 0;
            for (branch, width) in entry.iter() {
                let range = entry.channel_range(branch);
                assert_eq!(range.start, next);
                assert_eq!(range.len(), width);
                next = range.end;
            }
            assert_eq!(next, entry.total_channels());
        }
    }

    #[test]
    fn test_branch_names_round_trip() {
        for branch in Branch::ALL {
            assert_eq!(branch.as_str().parse::<Branch>().unwrap(), branch);
        }
        assert!("7x7".parse::<Branch>().is_err());
        assert_eq!(serde_json::to_string(&Branch::PoolReduce).unwrap(), "\"pool_reduce\"");
    }

    #[test]
    fn test_layer_names_in_depth_order() {
        let names: Vec<&str> = layer_names().collect();
        assert_eq!(names.first(), Some(&"mixed3a"));
        assert_eq!(names.last(), Some(&"mixed5b"));
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_branch_activations() {
        let acts = Array4::from_shape_fn((1, 256, 2, 2), |(_, c, _, _)| c as f32);
        let pool = branch_activations(acts.view(), "mixed3a", Branch::PoolReduce).unwrap();
        assert_eq!(pool.shape(), &[1, 32, 2, 2]);
        assert_eq!(pool[[0, 0, 0, 0]], 224.0);

        let wrong = Array4::<f32>::zeros((1, 10, 2, 2));
        assert!(branch_activations(wrong.view(), "mixed3a", Branch::Conv1x1).is_err());
    }
}
