//! Gramian Angular Field encoding
//!
//! A sequence is min-max scaled to `[-1, 1]`, each value is read as `cos φ`,
//! and every pair of time steps is combined into one pixel:
//! - GASF (summation): `cos(φ_i + φ_j)`
//! - GADF (difference): `sin(φ_i - φ_j)`
//!
//! The field is then rescaled from `[-1, 1]` to `[0, 1]`.

mod encoder;
pub mod scaling;

pub use encoder::GafEncoder;
pub use scaling::{min_max_scale, polar_components};
