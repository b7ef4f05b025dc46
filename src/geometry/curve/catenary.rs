use crate::geometry::SpanProfile;

use super::Curve;

/// Shape parameters of `z(x) = a·cosh((x − b)/a) + c`.
///
/// * `a` - catenary constant, horizontal tension over linear weight
/// * `b` - horizontal position of the vertex, measured from the start support
/// * `c` - vertical offset that makes the curve pass through the start support
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatenaryParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl CatenaryParams {
    /// Builds the parameters for a curve with constant `a` and vertex at `b`
    /// that passes through height `z0` at `x = 0`.
    ///
    /// `c` is always derived from `a·cosh(−b/a) + c = z0`.
    #[must_use]
    pub fn through_start(a: f64, b: f64, z0: f64) -> Self {
        Self {
            a,
            b,
            c: z0 - a * (b / a).cosh(),
        }
    }

    /// Evaluates `a·cosh((x − b)/a) + c` directly.
    ///
    /// Loses precision when the vertex is far outside the span, where `c`
    /// is large. [`CatenaryCurve::height`] avoids this.
    #[must_use]
    pub fn height(&self, x: f64) -> f64 {
        self.a * ((x - self.b) / self.a).cosh() + self.c
    }

    /// Ratio of the cable tension at `x` to the horizontal tension.
    #[must_use]
    pub fn tension_factor(&self, x: f64) -> f64 {
        ((x - self.b) / self.a).cosh()
    }
}

/// Height gained from `x = 0` to `x` on a catenary with constant `a` and
/// vertex at `b`: `a·(cosh((x − b)/a) − cosh(−b/a))`.
///
/// Evaluated as a product of `sinh` terms so that two large `cosh` values
/// never cancel.
#[must_use]
pub fn rise(a: f64, b: f64, x: f64) -> f64 {
    2.0 * a * ((x - 2.0 * b) / (2.0 * a)).sinh() * (x / (2.0 * a)).sinh()
}

/// Arc length from `x = 0` to `x`: `a·(sinh((x − b)/a) + sinh(b/a))`.
#[must_use]
pub fn arc_length(a: f64, b: f64, x: f64) -> f64 {
    2.0 * a * (x / (2.0 * a)).sinh() * ((x - 2.0 * b) / (2.0 * a)).cosh()
}

/// A catenary laid out in a span profile.
#[derive(Debug, Clone, Copy)]
pub struct CatenaryCurve {
    profile: SpanProfile,
    params: CatenaryParams,
}

impl CatenaryCurve {
    /// Creates a catenary with constant `a` and vertex at `b` through the
    /// start support of `profile`.
    #[must_use]
    pub fn new(profile: SpanProfile, a: f64, b: f64) -> Self {
        Self {
            profile,
            params: CatenaryParams::through_start(a, b, profile.z0()),
        }
    }

    /// Returns the shape parameters.
    #[must_use]
    pub fn params(&self) -> &CatenaryParams {
        &self.params
    }

    /// Arc length between the supports.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        arc_length(self.params.a, self.params.b, self.profile.span())
    }

    /// Cable tension at the start and end supports for the given linear
    /// weight.
    #[must_use]
    pub fn end_tensions(&self, linear_weight: f64) -> [f64; 2] {
        let horizontal = self.params.a * linear_weight;
        [
            horizontal * self.params.tension_factor(0.0),
            horizontal * self.params.tension_factor(self.profile.span()),
        ]
    }
}

impl Curve for CatenaryCurve {
    fn profile(&self) -> &SpanProfile {
        &self.profile
    }

    fn height(&self, x: f64) -> f64 {
        self.profile.z0() + rise(self.params.a, self.params.b, x)
    }
}
