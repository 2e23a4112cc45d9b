//! # GAF Encoding
//!
//! Gramian Angular Field encoding of multivariate time series for
//! image-based (convolutional) models.
//!
//! ## Features
//!
//! - **GASF / GADF**: summation and difference fields
//! - **Batch encoding**: `[batch, channels, seq_len]` → `[batch, channels, seq_len, seq_len]`
//! - **Parallel encoding**: independent fields computed on the rayon pool
//! - **Configuration**: serde/TOML-backed encoder settings
//!
//! ## Example
//!
//! ```rust
//! use gaf_encoding::{GafEncoder, GafMethod};
//! use ndarray::Array3;
//!
//! let encoder = GafEncoder::new(GafMethod::Difference, 1e-6);
//! let x = Array3::from_shape_fn((4, 2, 32), |(b, c, i)| ((b + c + i) as f64 * 0.3).sin());
//!
//! let images = encoder.encode(&x)?;
//! assert_eq!(images.dim(), (4, 2, 32, 32));
//! # Ok::<(), gaf_encoding::GafError>(())
//! ```

pub mod config;
pub mod error;
pub mod gaf;

pub use config::{GafConfig, GafMethod, DEFAULT_EPSILON};
pub use error::{GafError, Result};
pub use gaf::GafEncoder;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::GafError;
    pub use crate::gaf::*;
}
