//! CircStat is a vectorized circular-statistics library for angular data.
//!
//! This crate provides degree-based trigonometry, cartesian/polar
//! conversion, circular (vector) averaging, and binned angular
//! distributions over `ndarray` arrays, with optional parallelism via
//! the `rayon` feature.
//!
//! Two-array operations broadcast their operands to a common shape the
//! way `ndarray` arithmetic does; reductions take a numpy-style axis
//! (negative values count from the end). All computation is pure and
//! allocation happens only for outputs.

mod average;
pub mod histogram;
mod polar;
mod trace;
mod trig;
pub mod util;

pub use average::{vector_average, vector_average_flat};
pub use histogram::angular::{angular_average, angular_pdf};
pub use histogram::{weighted_histogram, BinGrid};
pub use polar::cartesian_to_polar;
pub use trig::{arcsind, arctan2d, arctand, cosd, sind, tand};
pub use util::{CircStatError, CircStatResult};
