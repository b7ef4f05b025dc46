use tracing::{debug, warn};

use crate::error::{OperationError, Result};
use crate::geometry::{Curve, ParabolicCurve, SpanCurve, SpanProfile};
use crate::math::Point3;
use crate::operations::solve::{Mode, SolveCatenary, SolveStrategy, SolverParams, Solution};

use super::{CatenaryMetadata, SampleSet, SamplingParams};

/// Generates the sampled geometry of a cable hanging between two supports.
///
/// Both points must be in the same local frame with `+Z` up. The returned
/// points are in that frame. Spans shorter than
/// [`SolverParams::min_span`] are returned as the two supports without
/// metadata.
#[derive(Debug, Clone, Copy)]
pub struct TessellateCatenary {
    start: Point3,
    end: Point3,
    mode: Mode,
    linear_weight: f64,
    solver: SolverParams,
    sampling: SamplingParams,
}

impl TessellateCatenary {
    /// Creates a new span tessellation.
    ///
    /// The linear weight defaults to the Physics mode weight, or `1.0` for
    /// the other modes.
    #[must_use]
    pub fn new(start: Point3, end: Point3, mode: Mode) -> Self {
        let linear_weight = match mode {
            Mode::Physics { linear_weight, .. } => linear_weight,
            Mode::Length { .. } | Mode::Sag { .. } => 1.0,
        };
        Self {
            start,
            end,
            mode,
            linear_weight,
            solver: SolverParams::default(),
            sampling: SamplingParams::default(),
        }
    }

    /// Sets the weight per unit length used for tension metadata in Length
    /// and Sag modes. Physics mode always uses its own weight.
    #[must_use]
    pub fn with_linear_weight(mut self, linear_weight: f64) -> Self {
        if !matches!(self.mode, Mode::Physics { .. }) {
            self.linear_weight = linear_weight;
        }
        self
    }

    /// Replaces the solver parameters.
    #[must_use]
    pub fn with_solver_params(mut self, params: SolverParams) -> Self {
        self.solver = params;
        self
    }

    /// Replaces the sampling parameters.
    #[must_use]
    pub fn with_sampling_params(mut self, params: SamplingParams) -> Self {
        self.sampling = params;
        self
    }

    /// Executes the tessellation.
    ///
    /// Solver failures never surface here: the curve degrades to a
    /// lower-fidelity shape instead, reported through
    /// [`CatenaryMetadata::strategy`].
    ///
    /// # Errors
    ///
    /// Returns an error if a support point is non-finite, the mode inputs
    /// are invalid, or the solver or sampling parameters are invalid.
    pub fn execute(&self) -> Result<SampleSet> {
        self.sampling.validate()?;
        self.solver.validate()?;
        self.mode.validate()?;
        self.validate_linear_weight()?;

        let profile = SpanProfile::new(self.start, self.end)?;
        if profile.is_degenerate(self.solver.min_span) {
            debug!(span = profile.span(), "span below minimum, returning supports");
            return Ok(SampleSet {
                points: vec![self.start, self.end],
                metadata: None,
            });
        }

        let solution = SolveCatenary::new(self.mode)
            .with_params(self.solver)
            .execute(&profile)?;
        let a = solution.catenary_constant();

        let resolution = self.sampling.resolution;
        let (solution, mut points) = match sample_points(&solution.curve, resolution) {
            Some(points) => (solution, points),
            None => {
                warn!(
                    strategy = ?solution.strategy,
                    a,
                    "solved curve is not finite at sample positions, using chord"
                );
                let chord = Solution {
                    curve: SpanCurve::Parabola(ParabolicCurve::chord(profile)),
                    strategy: SolveStrategy::Parabola,
                    fallback: true,
                };
                let points = sample_points(&chord.curve, resolution).unwrap_or_default();
                (chord, points)
            }
        };

        // The supports are emitted verbatim.
        if let Some(first) = points.first_mut() {
            *first = self.start;
        }
        if let Some(last) = points.last_mut() {
            *last = self.end;
        }

        let metadata = self.metadata(a, &profile, &solution, &points);
        Ok(SampleSet {
            points,
            metadata: Some(metadata),
        })
    }

    fn validate_linear_weight(&self) -> Result<()> {
        if !(self.linear_weight.is_finite() && self.linear_weight >= 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "linear weight must be non-negative, got {}",
                self.linear_weight
            ))
            .into());
        }
        Ok(())
    }

    fn metadata(
        &self,
        a: f64,
        profile: &SpanProfile,
        solution: &Solution,
        points: &[Point3],
    ) -> CatenaryMetadata {
        let implied_tension = a * self.linear_weight;
        let (arc_length, end_tensions) = match &solution.curve {
            SpanCurve::Catenary(c) => (c.arc_length(), c.end_tensions(self.linear_weight)),
            SpanCurve::Parabola(_) => (
                points.windows(2).map(|w| (w[1] - w[0]).norm()).sum::<f64>(),
                [implied_tension; 2],
            ),
        };

        CatenaryMetadata {
            a,
            max_sag: max_sag(profile, points),
            implied_tension,
            linear_weight: self.linear_weight,
            arc_length,
            end_tensions,
            strategy: solution.strategy,
            fallback: solution.fallback,
        }
    }
}

/// Evaluates the curve at `t = i / resolution` for `i = 0..=resolution`.
///
/// Returns `None` if any point is not finite.
fn sample_points(curve: &impl Curve, resolution: usize) -> Option<Vec<Point3>> {
    (0..=resolution)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / resolution as f64;
            curve
                .evaluate(t)
                .ok()
                .filter(|p| p.coords.iter().all(|c| c.is_finite()))
        })
        .collect()
}

/// Largest drop of the samples below the chord. Zero if no sample is below.
fn max_sag(profile: &SpanProfile, points: &[Point3]) -> f64 {
    let start = profile.start();
    let direction = profile.direction();
    points
        .iter()
        .map(|p| {
            let x = (p - start).dot(direction);
            profile.chord_height(x) - p.z
        })
        .fold(0.0, f64::max)
}
