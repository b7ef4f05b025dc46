mod catenary;
mod parabola;

pub use catenary::{arc_length, rise, CatenaryCurve, CatenaryParams};
pub use parabola::ParabolicCurve;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::SpanProfile;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Whether `t` lies inside the domain.
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }
}

/// A curve hanging in the vertical plane of a [`SpanProfile`].
///
/// The curve is parameterised by `t ∈ [0, 1]` along the horizontal span:
/// `x = t · span`.
pub trait Curve {
    /// Returns the profile the curve is laid out in.
    fn profile(&self) -> &SpanProfile;

    /// Absolute height of the curve at horizontal position `x`.
    fn height(&self, x: f64) -> f64;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside the curve domain.
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let domain = self.domain();
        if !domain.contains(t) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into());
        }
        let profile = self.profile();
        let x = t * profile.span();
        Ok(profile.point_at(x, self.height(x)))
    }
}

/// The shape a span was solved into.
#[derive(Debug, Clone, Copy)]
pub enum SpanCurve {
    /// A true catenary.
    Catenary(CatenaryCurve),
    /// The parabolic approximation.
    Parabola(ParabolicCurve),
}

impl Curve for SpanCurve {
    fn profile(&self) -> &SpanProfile {
        match self {
            Self::Catenary(c) => c.profile(),
            Self::Parabola(p) => p.profile(),
        }
    }

    fn height(&self, x: f64) -> f64 {
        match self {
            Self::Catenary(c) => c.height(x),
            Self::Parabola(p) => p.height(x),
        }
    }
}
