//! Circular (vector) averaging of angle and magnitude samples.
//!
//! Each (angle, norm) pair is treated as a 2-D vector in polar form and
//! averaged through its complex-exponential representation, which keeps
//! wraparound correct: the average of 359° and 1° is close to 0°, not 180°.

use ndarray::{Array, ArrayBase, ArrayView1, Axis, Data, DimMax, Dimension, RemoveAxis, Zip};
use num_complex::Complex64;

use crate::trace::trace_span;
use crate::util::broadcast::{broadcast_pair, resolve_axis, DimMaxOf};
use crate::util::CircStatResult;

/// NaN-skipping arithmetic mean of `norm · exp(i·radians(angle))`.
///
/// A sample is skipped when either component of its phasor is NaN.
/// Returns NaN when no sample survives.
fn nan_mean_phasor<'a, I>(samples: I) -> Complex64
where
    I: IntoIterator<Item = (&'a f64, &'a f64)>,
{
    let mut sum = Complex64::new(0.0, 0.0);
    let mut kept = 0usize;
    for (&angle_deg, &len) in samples {
        let phasor = Complex64::from_polar(len, angle_deg.to_radians());
        if phasor.re.is_nan() || phasor.im.is_nan() {
            continue;
        }
        sum += phasor;
        kept += 1;
    }
    if kept == 0 {
        Complex64::new(f64::NAN, f64::NAN)
    } else {
        sum / kept as f64
    }
}

/// Averages (angle, norm) vectors along `axis`.
///
/// `angles` is in degrees, un-normalized; `norm` carries the vector
/// magnitudes and broadcasts against `angles`. `axis` follows numpy
/// indexing, negative values counting from the end. Returns the
/// resultant angle in degrees in [-180, 180] and the resultant norm,
/// both shaped like the broadcast input with `axis` removed. Lanes
/// whose samples are all NaN yield NaN in both outputs.
pub fn vector_average<S1, S2, D1, D2>(
    angles: &ArrayBase<S1, D1>,
    norm: &ArrayBase<S2, D2>,
    axis: isize,
) -> CircStatResult<(
    Array<f64, <DimMaxOf<D1, D2> as Dimension>::Smaller>,
    Array<f64, <DimMaxOf<D1, D2> as Dimension>::Smaller>,
)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension + DimMax<D2>,
    D2: Dimension,
    DimMaxOf<D1, D2>: RemoveAxis,
{
    let (angles, norm) = broadcast_pair(angles, norm)?;
    let lane_axis = Axis(resolve_axis(axis, angles.ndim())?);
    let _span = trace_span!("vector_average", lane_len = angles.len_of(lane_axis)).entered();

    let out_dim = angles.raw_dim().remove_axis(lane_axis);
    let mut mean_angle = Array::zeros(out_dim.clone());
    let mut mean_norm = Array::zeros(out_dim);

    let zip = Zip::from(&mut mean_angle)
        .and(&mut mean_norm)
        .and(angles.lanes(lane_axis))
        .and(norm.lanes(lane_axis));
    let fill = |angle_out: &mut f64,
                norm_out: &mut f64,
                angle_lane: ArrayView1<'_, f64>,
                norm_lane: ArrayView1<'_, f64>| {
        let mean = nan_mean_phasor(angle_lane.iter().zip(norm_lane.iter()));
        *angle_out = mean.arg().to_degrees();
        *norm_out = mean.norm();
    };
    #[cfg(feature = "rayon")]
    zip.par_for_each(fill);
    #[cfg(not(feature = "rayon"))]
    zip.for_each(fill);

    Ok((mean_angle, mean_norm))
}

/// Averages (angle, norm) vectors over the fully flattened input.
///
/// The flattened counterpart of [`vector_average`], returning scalar
/// `(mean_angle, mean_norm)`.
pub fn vector_average_flat<S1, S2, D1, D2>(
    angles: &ArrayBase<S1, D1>,
    norm: &ArrayBase<S2, D2>,
) -> CircStatResult<(f64, f64)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension + DimMax<D2>,
    D2: Dimension,
{
    let (angles, norm) = broadcast_pair(angles, norm)?;
    let mean = nan_mean_phasor(angles.iter().zip(norm.iter()));
    Ok((mean.arg().to_degrees(), mean.norm()))
}
