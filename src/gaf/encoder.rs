//! Gramian Angular Field encoder
//!
//! Converts a batch of multichannel sequences into square field images
//! using the polar coordinate transformation.

use ndarray::{
    s, Array2, Array4, ArrayBase, ArrayView1, ArrayView3, ArrayViewMut2, Axis, Data, Dimension,
    Ix3,
};
use rayon::prelude::*;
use tracing::{debug, warn};

use super::scaling::{min_max_scale, polar_components};
use crate::config::{GafConfig, GafMethod, DEFAULT_EPSILON};
use crate::error::{GafError, Result};

/// GASF/GADF encoder
///
/// Holds only immutable configuration, so one encoder can be shared across
/// threads and reused for inputs of any batch size, channel count and length.
///
/// # Example
///
/// ```rust
/// use gaf_encoding::{GafEncoder, GafMethod};
/// use ndarray::{array, Array3};
///
/// let encoder = GafEncoder::new(GafMethod::Summation, 1e-6);
/// let x: Array3<f64> = array![[[1.0, 2.0, 3.0]]];
/// let gaf = encoder.encode(&x).unwrap();
///
/// assert_eq!(gaf.dim(), (1, 1, 3, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GafEncoder {
    method: GafMethod,
    epsilon: f64,
}

impl GafEncoder {
    /// Create an encoder with the given method and normalization epsilon
    pub fn new(method: GafMethod, epsilon: f64) -> Self {
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            warn!(
                epsilon,
                "GAF epsilon should be small and positive; constant sequences may divide by zero"
            );
        }

        Self { method, epsilon }
    }

    /// Create a summation field (GASF) encoder
    pub fn gasf() -> Self {
        Self::new(GafMethod::Summation, DEFAULT_EPSILON)
    }

    /// Create a difference field (GADF) encoder
    pub fn gadf() -> Self {
        Self::new(GafMethod::Difference, DEFAULT_EPSILON)
    }

    /// Create an encoder from a method name ("summation" or "difference")
    pub fn from_method_name(method: &str, epsilon: f64) -> Result<Self> {
        Ok(Self::new(method.parse()?, epsilon))
    }

    /// Create an encoder from configuration
    pub fn from_config(config: &GafConfig) -> Self {
        Self::new(config.method, config.epsilon)
    }

    /// Field method used by this encoder
    pub fn method(&self) -> GafMethod {
        self.method
    }

    /// Epsilon added to the min-max denominator
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Encode a batch of sequences
    ///
    /// # Arguments
    /// * `x` - Input of shape [batch, channels, seq_len]
    ///
    /// # Returns
    /// Field images of shape [batch, channels, seq_len, seq_len] with values in [0, 1],
    /// or [`GafError::ShapeError`] if the input is not 3-dimensional
    pub fn encode<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array4<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let x = Self::as_batch(x)?;
        Ok(self.encode_view(x))
    }

    /// Encode an input already known to be [batch, channels, seq_len]
    pub fn encode_view(&self, x: ArrayView3<f64>) -> Array4<f64> {
        let (batch, channels, seq_len) = x.dim();
        debug!(batch, channels, seq_len, method = %self.method, "Encoding GAF");

        let (x_cos, x_sin) = polar_components(min_max_scale(&x, self.epsilon));
        let mut gaf = Array4::zeros((batch, channels, seq_len, seq_len));

        for b in 0..batch {
            for c in 0..channels {
                self.fill_field(
                    x_cos.slice(s![b, c, ..]),
                    x_sin.slice(s![b, c, ..]),
                    gaf.slice_mut(s![b, c, .., ..]),
                );
            }
        }

        gaf
    }

    /// Encode a batch, computing each (batch, channel) field on the rayon pool
    ///
    /// Produces exactly the same values as [`GafEncoder::encode`].
    pub fn encode_parallel<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Array4<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let x = Self::as_batch(x)?;
        let (batch, channels, seq_len) = x.dim();
        debug!(batch, channels, seq_len, method = %self.method, "Encoding GAF in parallel");

        let (x_cos, x_sin) = polar_components(min_max_scale(&x, self.epsilon));

        let fields: Vec<Array2<f64>> = (0..batch * channels)
            .into_par_iter()
            .map(|idx| {
                let (b, c) = (idx / channels, idx % channels);
                let mut field = Array2::zeros((seq_len, seq_len));
                self.fill_field(
                    x_cos.slice(s![b, c, ..]),
                    x_sin.slice(s![b, c, ..]),
                    field.view_mut(),
                );
                field
            })
            .collect();

        let mut gaf = Array4::zeros((batch, channels, seq_len, seq_len));
        for (idx, field) in fields.iter().enumerate() {
            gaf.slice_mut(s![idx / channels, idx % channels, .., ..])
                .assign(field);
        }

        Ok(gaf)
    }

    /// Encode a single sequence into one [seq_len, seq_len] field
    pub fn encode_series(&self, series: &[f64]) -> Array2<f64> {
        let x = ArrayView1::from(series)
            .insert_axis(Axis(0))
            .insert_axis(Axis(0));

        self.encode_view(x)
            .index_axis_move(Axis(0), 0)
            .index_axis_move(Axis(0), 0)
    }

    fn as_batch<S, D>(x: &ArrayBase<S, D>) -> Result<ArrayView3<'_, f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        x.view()
            .into_dimensionality::<Ix3>()
            .map_err(|_| GafError::ShapeError {
                expected: 3,
                got: x.ndim(),
            })
    }

    /// Write the scaled field of one sequence into `out`
    fn fill_field(&self, cos: ArrayView1<f64>, sin: ArrayView1<f64>, mut out: ArrayViewMut2<f64>) {
        let n = cos.len();

        for i in 0..n {
            for j in 0..n {
                let value = match self.method {
                    // cos(φ_i + φ_j)
                    GafMethod::Summation => cos[i] * cos[j] - sin[i] * sin[j],
                    // sin(φ_i - φ_j)
                    GafMethod::Difference => sin[i] * cos[j] - cos[i] * sin[j],
                };

                // Rounding can push the identity a few ulps past [-1, 1]
                out[[i, j]] = value.clamp(-1.0, 1.0) / 2.0 + 0.5;
            }
        }
    }
}

impl Default for GafEncoder {
    fn default() -> Self {
        Self::gasf()
    }
}
