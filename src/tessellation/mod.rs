mod tessellate_catenary;

pub use tessellate_catenary::TessellateCatenary;

use crate::error::{Result, TessellationError};
use crate::math::Point3;
use crate::operations::solve::SolveStrategy;

/// Parameters controlling curve sampling.
#[derive(Debug, Clone, Copy)]
pub struct SamplingParams {
    /// Number of segments; `resolution + 1` points are produced.
    pub resolution: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self { resolution: 64 }
    }
}

impl SamplingParams {
    /// Creates sampling parameters with the given resolution.
    #[must_use]
    pub fn new(resolution: usize) -> Self {
        Self { resolution }
    }

    /// Checks that the resolution can produce a curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.resolution == 0 {
            return Err(TessellationError::InvalidParameters(
                "resolution must be at least 1".to_owned(),
            )
            .into());
        }
        Ok(())
    }
}

/// Descriptive data attached to a sampled span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatenaryMetadata {
    /// Catenary constant (horizontal tension over linear weight).
    pub a: f64,
    /// Largest vertical distance of the samples below the chord.
    ///
    /// Measured at the sample positions only, so it depends on the
    /// resolution.
    pub max_sag: f64,
    /// Horizontal tension, `a · linear_weight`.
    pub implied_tension: f64,
    /// Weight per unit length used for the tensions.
    pub linear_weight: f64,
    /// Cable length between the supports.
    pub arc_length: f64,
    /// Cable tension at the start and end supports.
    pub end_tensions: [f64; 2],
    /// Stage of the solver that produced the curve.
    pub strategy: SolveStrategy,
    /// Whether a lower-fidelity stage than requested was used.
    pub fallback: bool,
}

/// A sampled cable span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    /// Ordered points from the start support to the end support.
    pub points: Vec<Point3>,
    /// Absent when the span was too short to solve.
    pub metadata: Option<CatenaryMetadata>,
}

impl SampleSet {
    /// Piecewise-linear length of the sampled points.
    #[must_use]
    pub fn polyline_length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}
