//! Elementwise trigonometry in degrees.
//!
//! Thin degree-based wrappers over the IEEE primitives: inputs and
//! outputs keep the shape of the operand, and `arctan2d` broadcasts its
//! two operands to a common shape. Out-of-domain inputs (e.g. `arcsind`
//! outside [-1, 1]) propagate as NaN, never as errors.

use ndarray::{Array, ArrayBase, Data, DimMax, Dimension, Zip};

use crate::util::broadcast::{broadcast_pair, DimMaxOf};
use crate::util::CircStatResult;

/// Tangent of an angle array given in degrees.
pub fn tand<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| v.to_radians().tan())
}

/// Sine of an angle array given in degrees.
pub fn sind<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| v.to_radians().sin())
}

/// Cosine of an angle array given in degrees.
pub fn cosd<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| v.to_radians().cos())
}

/// Inverse tangent, result in degrees in (-90, 90).
pub fn arctand<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| v.atan().to_degrees())
}

/// Inverse sine, result in degrees. Inputs outside [-1, 1] yield NaN.
pub fn arcsind<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| v.asin().to_degrees())
}

/// Quadrant-aware arctangent of `x1 / x2`, result in degrees in [-180, 180].
///
/// `x1` holds the y-coordinates and `x2` the x-coordinates, following
/// the two-argument arctangent convention. The operands broadcast to a
/// common shape, which becomes the shape of the output.
pub fn arctan2d<S1, S2, D1, D2>(
    x1: &ArrayBase<S1, D1>,
    x2: &ArrayBase<S2, D2>,
) -> CircStatResult<Array<f64, DimMaxOf<D1, D2>>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension + DimMax<D2>,
    D2: Dimension,
{
    let (y, x) = broadcast_pair(x1, x2)?;
    Ok(Zip::from(&y)
        .and(&x)
        .map_collect(|&y, &x| y.atan2(x).to_degrees()))
}
