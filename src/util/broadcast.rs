//! Broadcasting helpers over `ndarray` shapes.
//!
//! Shapes are right-aligned and a size-1 axis stretches to the other
//! operand's size, the same rule `ndarray` applies to mixed-shape
//! arithmetic via `DimMax`.

use ndarray::{ArrayBase, ArrayView, Data, DimMax, Dimension};

use crate::util::{CircStatError, CircStatResult};

/// Broadcast result dimension for a pair of dimensions.
pub(crate) type DimMaxOf<D1, D2> = <D1 as DimMax<D2>>::Output;

/// Computes the common broadcast shape of two shapes.
pub(crate) fn co_broadcast<D1, D2, Output>(lhs: &D1, rhs: &D2) -> CircStatResult<Output>
where
    D1: Dimension,
    D2: Dimension,
    Output: Dimension,
{
    let shape = if lhs.ndim() >= rhs.ndim() {
        aligned_broadcast::<D1, D2, Output>(lhs, rhs)
    } else {
        aligned_broadcast::<D2, D1, Output>(rhs, lhs)
    };
    shape.ok_or_else(|| CircStatError::BroadcastMismatch {
        lhs: lhs.slice().to_vec(),
        rhs: rhs.slice().to_vec(),
    })
}

/// Broadcast with `long` at least as long as `short`, right-aligned.
fn aligned_broadcast<Long, Short, Output>(long: &Long, short: &Short) -> Option<Output>
where
    Long: Dimension,
    Short: Dimension,
    Output: Dimension,
{
    let offset = long.ndim() - short.ndim();
    let mut out = Output::zeros(long.ndim());
    out.slice_mut().copy_from_slice(long.slice());
    for (dst, &len) in out.slice_mut()[offset..].iter_mut().zip(short.slice()) {
        if *dst != len {
            if *dst == 1 {
                *dst = len;
            } else if len != 1 {
                return None;
            }
        }
    }
    Some(out)
}

/// Returns views of both operands broadcast to their common shape.
pub(crate) fn broadcast_pair<'a, S1, S2, D1, D2>(
    lhs: &'a ArrayBase<S1, D1>,
    rhs: &'a ArrayBase<S2, D2>,
) -> CircStatResult<(
    ArrayView<'a, f64, DimMaxOf<D1, D2>>,
    ArrayView<'a, f64, DimMaxOf<D1, D2>>,
)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension + DimMax<D2>,
    D2: Dimension,
{
    let shape: DimMaxOf<D1, D2> = co_broadcast(&lhs.raw_dim(), &rhs.raw_dim())?;
    let mismatch = || CircStatError::BroadcastMismatch {
        lhs: lhs.shape().to_vec(),
        rhs: rhs.shape().to_vec(),
    };
    let lhs_view = lhs.broadcast(shape.clone()).ok_or_else(mismatch)?;
    let rhs_view = rhs.broadcast(shape).ok_or_else(mismatch)?;
    Ok((lhs_view, rhs_view))
}

/// Resolves a possibly negative axis index against a dimensionality.
pub(crate) fn resolve_axis(axis: isize, ndim: usize) -> CircStatResult<usize> {
    let shifted = if axis < 0 {
        axis.checked_add(ndim as isize)
    } else {
        Some(axis)
    };
    match shifted {
        Some(idx) if idx >= 0 && (idx as usize) < ndim => Ok(idx as usize),
        _ => Err(CircStatError::AxisOutOfBounds { axis, ndim }),
    }
}
