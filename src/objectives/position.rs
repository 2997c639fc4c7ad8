use crate::error::{FeatVisError, Result};
use ndarray::{s, ArrayView4};

/// Single spatial position of a `[batch, channel, height, width]` activation.
///
/// `x` indexes width and `y` indexes height; each defaults to the center of
/// its axis. The result keeps all four axes, shaped `[batch, channel, 1, 1]`.
pub fn extract_act_pos<'a>(
    acts: ArrayView4<'a, f32>,
    x: Option<usize>,
    y: Option<usize>,
) -> Result<ArrayView4<'a, f32>> {
    let (_, _, height, width) = acts.dim();
    let x = x.unwrap_or(width / 2);
    let y = y.unwrap_or(height / 2);

    if x >= width {
        return Err(FeatVisError::index_out_of_bounds("width", x, width));
    }
    if y >= height {
        return Err(FeatVisError::index_out_of_bounds("height", y, height));
    }

    Ok(acts.slice_move(s![.., .., y..y + 1, x..x + 1]))
}
