//! Axis-aware weighted histograms over validated bin grids.
//!
//! `BinGrid` holds a strictly increasing edge sequence; the histogram
//! functions bin one lane of the input at a time along a caller-chosen
//! axis, so an n-dimensional input produces an n-dimensional output
//! with the lane axis replaced by the bin axis.

use ndarray::{Array, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, DimMax, Dimension, Zip};

use crate::trace::trace_span;
use crate::util::broadcast::{broadcast_pair, resolve_axis, DimMaxOf};
use crate::util::{CircStatError, CircStatResult};

pub mod angular;

/// Validated, strictly increasing histogram bin edges.
///
/// Bins are half-open `[eᵢ, eᵢ₊₁)` except the last, which is closed.
/// NaN and out-of-range values fall in no bin.
#[derive(Clone, Debug)]
pub struct BinGrid {
    edges: Vec<f64>,
}

impl BinGrid {
    /// Validates an arbitrary edge sequence.
    pub fn new(edges: Vec<f64>) -> CircStatResult<Self> {
        if edges.len() < 2 {
            return Err(CircStatError::InvalidBinEdges {
                reason: "fewer than two edges",
            });
        }
        if edges.iter().any(|edge| !edge.is_finite()) {
            return Err(CircStatError::InvalidBinEdges {
                reason: "non-finite edge",
            });
        }
        if edges.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(CircStatError::InvalidBinEdges {
                reason: "edges must be strictly increasing",
            });
        }
        Ok(Self { edges })
    }

    /// Evenly spaced edges spanning `[min, max]` with `num_bins` bins.
    pub fn uniform(min: f64, max: f64, num_bins: usize) -> CircStatResult<Self> {
        if num_bins == 0 {
            return Err(CircStatError::InvalidBinEdges {
                reason: "num_bins must be greater than zero",
            });
        }
        Self::new(Array::linspace(min, max, num_bins + 1).to_vec())
    }

    /// One-degree bins spanning the full circle: 361 edges over [0, 360].
    ///
    /// Constructed fresh on every call; the grid is never shared.
    pub fn degrees() -> Self {
        Self {
            edges: Array::linspace(0.0, 360.0, 361).to_vec(),
        }
    }

    /// Returns the number of bins (one less than the number of edges).
    pub fn num_bins(&self) -> usize {
        self.edges.len() - 1
    }

    /// Returns the edge sequence.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Iterates over the bin widths.
    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.edges.windows(2).map(|pair| pair[1] - pair[0])
    }

    /// Returns the index of the bin containing `value`, if any.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let edges = &self.edges;
        let last = edges.len() - 1;
        if !(value >= edges[0]) || value > edges[last] {
            return None;
        }
        if value >= edges[last - 1] {
            return Some(last - 1);
        }
        let idx = edges.partition_point(|edge| *edge <= value) - 1;
        Some(idx)
    }
}

/// Adds each in-range sample's weight to its bin.
fn accumulate_lane(
    bins: &mut ArrayViewMut1<'_, f64>,
    values: ArrayView1<'_, f64>,
    weights: ArrayView1<'_, f64>,
    grid: &BinGrid,
) {
    for (&value, &weight) in values.iter().zip(weights.iter()) {
        if let Some(idx) = grid.bin_index(value) {
            bins[idx] += weight;
        }
    }
}

/// Weighted histogram of `values` along `axis`.
///
/// `weights` broadcasts against `values`. The output keeps the broadcast
/// shape except that the `axis` dimension is replaced by the number of
/// bins. Out-of-range and NaN values are dropped; a NaN weight of a
/// binned sample propagates into its bin's sum.
pub fn weighted_histogram<S1, S2, D1, D2>(
    values: &ArrayBase<S1, D1>,
    weights: &ArrayBase<S2, D2>,
    grid: &BinGrid,
    axis: isize,
) -> CircStatResult<Array<f64, DimMaxOf<D1, D2>>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension + DimMax<D2>,
    D2: Dimension,
{
    let (values, weights) = broadcast_pair(values, weights)?;
    let ax = resolve_axis(axis, values.ndim())?;
    let lane_axis = Axis(ax);
    let _span = trace_span!("weighted_histogram", bins = grid.num_bins()).entered();

    let mut out_dim = values.raw_dim();
    out_dim.slice_mut()[ax] = grid.num_bins();
    let mut out = Array::zeros(out_dim);

    let zip = Zip::from(out.lanes_mut(lane_axis))
        .and(values.lanes(lane_axis))
        .and(weights.lanes(lane_axis));
    let fill = |mut bin_lane: ArrayViewMut1<'_, f64>,
                value_lane: ArrayView1<'_, f64>,
                weight_lane: ArrayView1<'_, f64>| {
        accumulate_lane(&mut bin_lane, value_lane, weight_lane, grid);
    };
    #[cfg(feature = "rayon")]
    zip.par_for_each(fill);
    #[cfg(not(feature = "rayon"))]
    zip.for_each(fill);

    Ok(out)
}

/// Weighted sums and raw sample counts per bin, in one pass.
///
/// Counts follow the values only: a sample with a NaN weight still
/// counts, while an out-of-range or NaN value counts nowhere.
pub(crate) fn histogram_sums_and_counts<S1, S2, D1, D2>(
    values: &ArrayBase<S1, D1>,
    weights: &ArrayBase<S2, D2>,
    grid: &BinGrid,
    axis: isize,
) -> CircStatResult<(Array<f64, DimMaxOf<D1, D2>>, Array<f64, DimMaxOf<D1, D2>>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension + DimMax<D2>,
    D2: Dimension,
{
    let (values, weights) = broadcast_pair(values, weights)?;
    let ax = resolve_axis(axis, values.ndim())?;
    let lane_axis = Axis(ax);

    let mut out_dim = values.raw_dim();
    out_dim.slice_mut()[ax] = grid.num_bins();
    let mut sums = Array::zeros(out_dim.clone());
    let mut counts = Array::zeros(out_dim);

    let zip = Zip::from(sums.lanes_mut(lane_axis))
        .and(counts.lanes_mut(lane_axis))
        .and(values.lanes(lane_axis))
        .and(weights.lanes(lane_axis));
    let fill = |mut sum_lane: ArrayViewMut1<'_, f64>,
                mut count_lane: ArrayViewMut1<'_, f64>,
                value_lane: ArrayView1<'_, f64>,
                weight_lane: ArrayView1<'_, f64>| {
        for (&value, &weight) in value_lane.iter().zip(weight_lane.iter()) {
            if let Some(idx) = grid.bin_index(value) {
                sum_lane[idx] += weight;
                count_lane[idx] += 1.0;
            }
        }
    };
    #[cfg(feature = "rayon")]
    zip.par_for_each(fill);
    #[cfg(not(feature = "rayon"))]
    zip.for_each(fill);

    Ok((sums, counts))
}

#[cfg(test)]
mod tests {
    use super::BinGrid;
    use crate::util::CircStatError;

    #[test]
    fn grid_rejects_malformed_edges() {
        let err = BinGrid::new(vec![0.0]).err().unwrap();
        assert_eq!(
            err,
            CircStatError::InvalidBinEdges {
                reason: "fewer than two edges",
            }
        );

        let err = BinGrid::new(vec![0.0, 1.0, 1.0]).err().unwrap();
        assert_eq!(
            err,
            CircStatError::InvalidBinEdges {
                reason: "edges must be strictly increasing",
            }
        );

        let err = BinGrid::new(vec![0.0, f64::INFINITY]).err().unwrap();
        assert_eq!(
            err,
            CircStatError::InvalidBinEdges {
                reason: "non-finite edge",
            }
        );
    }

    #[test]
    fn last_bin_is_closed_on_the_right() {
        let grid = BinGrid::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(grid.bin_index(0.0), Some(0));
        assert_eq!(grid.bin_index(1.0), Some(1));
        assert_eq!(grid.bin_index(2.5), Some(2));
        assert_eq!(grid.bin_index(3.0), Some(2));
        assert_eq!(grid.bin_index(3.5), None);
        assert_eq!(grid.bin_index(-0.1), None);
        assert_eq!(grid.bin_index(f64::NAN), None);
    }

    #[test]
    fn degree_grid_has_one_degree_bins() {
        let grid = BinGrid::degrees();
        assert_eq!(grid.num_bins(), 360);
        assert_eq!(grid.edges()[0], 0.0);
        assert_eq!(grid.edges()[360], 360.0);
        assert!(grid.widths().all(|w| (w - 1.0).abs() < 1e-9));
        assert_eq!(grid.bin_index(359.5), Some(359));
        assert_eq!(grid.bin_index(360.0), Some(359));
    }

    #[test]
    fn non_uniform_grids_are_accepted() {
        let grid = BinGrid::new(vec![0.0, 10.0, 100.0, 360.0]).unwrap();
        assert_eq!(grid.num_bins(), 3);
        assert_eq!(grid.bin_index(5.0), Some(0));
        assert_eq!(grid.bin_index(50.0), Some(1));
        assert_eq!(grid.bin_index(200.0), Some(2));
    }
}
