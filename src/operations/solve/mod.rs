//! Catenary parameter solver.
//!
//! A request is run through a small pipeline of stages. Each stage either
//! produces a curve or hands over to a lower-fidelity stage:
//!
//! ```text
//! Physics                       (never falls back)
//! Length ──► Sag ──► Parabola   (parabola always succeeds)
//! ```

mod length;
mod params;
mod physics;
mod sag;
mod vertex;

pub use params::SolverParams;

use tracing::{debug, warn};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Curve, ParabolicCurve, SpanCurve, SpanProfile};

/// How the shape of a span is specified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Horizontal tension and weight per unit length; `a = tension / weight`.
    Physics { tension: f64, linear_weight: f64 },
    /// Total cable length between the supports.
    Length { target_length: f64 },
    /// Mid-span dip below the chord as a fraction of the horizontal span.
    Sag { sag_ratio: f64 },
}

impl Mode {
    /// Checks the mode-specific inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the tension is non-positive, the linear weight is
    /// negative, or any input is non-finite.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Physics {
                tension,
                linear_weight,
            } => {
                if !(tension.is_finite() && tension > 0.0) {
                    return Err(invalid(format!("tension must be positive, got {tension}")));
                }
                if !(linear_weight.is_finite() && linear_weight >= 0.0) {
                    return Err(invalid(format!(
                        "linear weight must be non-negative, got {linear_weight}"
                    )));
                }
            }
            Self::Length { target_length } => {
                if !target_length.is_finite() {
                    return Err(invalid(format!(
                        "target length must be finite, got {target_length}"
                    )));
                }
            }
            Self::Sag { sag_ratio } => {
                if !sag_ratio.is_finite() {
                    return Err(invalid(format!("sag ratio must be finite, got {sag_ratio}")));
                }
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> crate::error::CatenaryError {
    OperationError::InvalidInput(message).into()
}

/// Which stage of the pipeline produced a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStrategy {
    /// Physics mode with a solved vertex.
    Physics,
    /// Physics mode whose vertex search failed; the vertex sits at the start
    /// support.
    PhysicsDefaultVertex,
    /// Length mode.
    Length,
    /// Sag mode, requested directly or reached from Length mode.
    Sag,
    /// Closed-form parabolic approximation.
    Parabola,
}

/// A solved span.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    /// The curve the span was solved into.
    pub curve: SpanCurve,
    /// Stage that produced the curve.
    pub strategy: SolveStrategy,
    /// Whether the curve came from a lower-fidelity stage than the one the
    /// mode asked for.
    pub fallback: bool,
}

impl Solution {
    /// Catenary constant of the solved curve.
    ///
    /// For the parabolic approximation this is the constant of the catenary
    /// it approximates (infinite for a straight chord).
    #[must_use]
    pub fn catenary_constant(&self) -> f64 {
        match &self.curve {
            SpanCurve::Catenary(c) => c.params().a,
            SpanCurve::Parabola(p) => p.equivalent_constant(),
        }
    }
}

/// A pipeline stage with the inputs it consults.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Physics { tension: f64, linear_weight: f64 },
    Length { target_length: f64 },
    Sag { sag_ratio: f64 },
    Parabola { sag_ratio: f64 },
}

impl From<Mode> for Stage {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Physics {
                tension,
                linear_weight,
            } => Self::Physics {
                tension,
                linear_weight,
            },
            Mode::Length { target_length } => Self::Length { target_length },
            Mode::Sag { sag_ratio } => Self::Sag { sag_ratio },
        }
    }
}

/// Result of running one stage.
enum StageOutcome {
    Solved(SpanCurve, SolveStrategy),
    Fallback(Stage),
}

impl Stage {
    fn run(self, profile: &SpanProfile, params: &SolverParams) -> StageOutcome {
        match self {
            Self::Physics {
                tension,
                linear_weight,
            } => physics::solve(profile, tension, linear_weight, params),
            Self::Length { target_length } => length::solve(profile, target_length, params),
            Self::Sag { sag_ratio } => sag::solve(profile, sag_ratio, params),
            Self::Parabola { sag_ratio } => StageOutcome::Solved(
                SpanCurve::Parabola(ParabolicCurve::new(*profile, sag_ratio)),
                SolveStrategy::Parabola,
            ),
        }
    }
}

/// Solves the shape of a span for a given mode.
#[derive(Debug, Clone, Copy)]
pub struct SolveCatenary {
    mode: Mode,
    params: SolverParams,
}

impl SolveCatenary {
    /// Creates a new solve operation with default parameters.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            params: SolverParams::default(),
        }
    }

    /// Replaces the solver parameters.
    #[must_use]
    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the solve, returning the curve and the stage that produced it.
    ///
    /// Search failures are recovered by the fallback chain and never
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode inputs or solver parameters are invalid,
    /// or if the span is shorter than [`SolverParams::min_span`].
    pub fn execute(&self, profile: &SpanProfile) -> Result<Solution> {
        self.mode.validate()?;
        self.params.validate()?;
        if profile.is_degenerate(self.params.min_span) {
            return Err(GeometryError::Degenerate(format!(
                "span {} is shorter than {}",
                profile.span(),
                self.params.min_span
            ))
            .into());
        }

        let requested = Stage::from(self.mode);
        let mut stage = requested;
        loop {
            match stage.run(profile, &self.params) {
                StageOutcome::Solved(curve, strategy) => {
                    debug!(
                        ?strategy,
                        span = profile.span(),
                        dz = profile.dz(),
                        end_height = curve.height(profile.span()),
                        "span solved"
                    );
                    return Ok(Solution {
                        curve,
                        strategy,
                        fallback: stage != requested
                            || strategy == SolveStrategy::PhysicsDefaultVertex,
                    });
                }
                StageOutcome::Fallback(next) => {
                    warn!(from = ?stage, to = ?next, "catenary stage fell back");
                    stage = next;
                }
            }
        }
    }
}
