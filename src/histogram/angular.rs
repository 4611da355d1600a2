//! Binned angular distributions and binned averages.

use ndarray::{Array, Array1, ArrayBase, Axis, Data, DimMax, Dimension, Zip};

use super::{histogram_sums_and_counts, weighted_histogram, BinGrid};
use crate::trace::trace_span;
use crate::util::broadcast::{resolve_axis, DimMaxOf};
use crate::util::CircStatResult;

/// Weighted angular probability density over `grid`, binned along `axis`.
///
/// Each lane is normalized to a density: bin sum divided by the lane's
/// total binned weight and by the bin width, so `sum(density · width)`
/// is 1 for any lane with nonzero total weight. A lane whose total is
/// zero (or NaN) divides to NaN throughout.
///
/// The returned centers are `edges[i+1] - (edges[1] - edges[0]) / 2`:
/// a single offset of half the first bin's width, which assumes a
/// uniform grid. Non-uniform grids keep this formula.
pub fn angular_pdf<S1, S2, D1, D2>(
    angles: &ArrayBase<S1, D1>,
    weight: &ArrayBase<S2, D2>,
    grid: &BinGrid,
    axis: isize,
) -> CircStatResult<(Array<f64, DimMaxOf<D1, D2>>, Array1<f64>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension + DimMax<D2>,
    D2: Dimension,
{
    let _span = trace_span!("angular_pdf", bins = grid.num_bins()).entered();
    let mut density = weighted_histogram(angles, weight, grid, axis)?;
    let lane_axis = Axis(resolve_axis(axis, density.ndim())?);
    for mut lane in density.lanes_mut(lane_axis) {
        let total: f64 = lane.sum();
        for (bin, width) in lane.iter_mut().zip(grid.widths()) {
            *bin /= total * width;
        }
    }

    let half_first_width = (grid.edges()[1] - grid.edges()[0]) / 2.0;
    let centers = Array1::from_iter(grid.edges()[1..].iter().map(|edge| edge - half_first_width));
    Ok((density, centers))
}

/// Per-bin arithmetic average of `weight` over `grid`, binned along `axis`.
///
/// Each bin reports its weighted sum divided by its raw sample count,
/// an average of `weight` rather than a density. Bins receiving no samples
/// report exactly 1.0: numerator and denominator are both forced to 1
/// before the division. Centers are per-bin edge midpoints.
pub fn angular_average<S1, S2, D1, D2>(
    angles: &ArrayBase<S1, D1>,
    weight: &ArrayBase<S2, D2>,
    grid: &BinGrid,
    axis: isize,
) -> CircStatResult<(Array<f64, DimMaxOf<D1, D2>>, Array1<f64>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension + DimMax<D2>,
    D2: Dimension,
{
    let _span = trace_span!("angular_average", bins = grid.num_bins()).entered();
    let (mut averages, counts) = histogram_sums_and_counts(angles, weight, grid, axis)?;
    Zip::from(&mut averages).and(&counts).for_each(|sum, &count| {
        *sum = if count == 0.0 { 1.0 } else { *sum / count };
    });

    let centers = Array1::from_iter(grid.edges().windows(2).map(|pair| (pair[0] + pair[1]) / 2.0));
    Ok((averages, centers))
}
