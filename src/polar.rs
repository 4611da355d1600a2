//! Cartesian to polar conversion.

use ndarray::{Array, ArrayBase, Data, DimMax, Dimension, Zip};

use crate::util::broadcast::{broadcast_pair, DimMaxOf};
use crate::util::CircStatResult;

/// Converts cartesian coordinates to polar `(r, theta)`.
///
/// `r = sqrt(x² + y²)` and `theta` is the counterclockwise angle from
/// the positive x axis in degrees, reduced to [0, 360) by Euclidean
/// remainder. The operands broadcast to a common shape, which both
/// outputs share.
pub fn cartesian_to_polar<S1, S2, D1, D2>(
    x: &ArrayBase<S1, D1>,
    y: &ArrayBase<S2, D2>,
) -> CircStatResult<(Array<f64, DimMaxOf<D1, D2>>, Array<f64, DimMaxOf<D1, D2>>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension + DimMax<D2>,
    D2: Dimension,
{
    let (x, y) = broadcast_pair(x, y)?;
    let radius = Zip::from(&x)
        .and(&y)
        .map_collect(|&x, &y| (x * x + y * y).sqrt());
    let theta = Zip::from(&y)
        .and(&x)
        .map_collect(|&y, &x| y.atan2(x).to_degrees().rem_euclid(360.0));
    Ok((radius, theta))
}
