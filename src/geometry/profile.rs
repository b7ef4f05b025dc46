use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A two-point span reduced to the vertical plane through both supports.
///
/// The profile coordinate `x` runs horizontally from the start support
/// (`x = 0`) to the end support (`x = span`), and `z` is the local up axis.
/// Heights are absolute: a profile height maps back to a 3D point with the
/// same `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanProfile {
    start: Point3,
    end: Point3,
    span: f64,
    dz: f64,
    direction: Vector3,
}

impl SpanProfile {
    /// Reduces two support points to a span profile.
    ///
    /// The horizontal direction falls back to `+X` when the supports are
    /// vertically aligned.
    ///
    /// # Errors
    ///
    /// Returns an error if either point has a non-finite coordinate.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        for p in [&start, &end] {
            if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
                return Err(GeometryError::NonFinitePoint {
                    x: p.x,
                    y: p.y,
                    z: p.z,
                }
                .into());
            }
        }

        let horizontal = Vector3::new(end.x - start.x, end.y - start.y, 0.0);
        let span = horizontal.norm();
        let direction = if span < TOLERANCE {
            Vector3::x()
        } else {
            horizontal / span
        };

        Ok(Self {
            start,
            end,
            span,
            dz: end.z - start.z,
            direction,
        })
    }

    /// Returns the start support.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end support.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Horizontal distance between the supports (`L`).
    #[must_use]
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Signed height of the end support above the start support.
    #[must_use]
    pub fn dz(&self) -> f64 {
        self.dz
    }

    /// Height of the start support.
    #[must_use]
    pub fn z0(&self) -> f64 {
        self.start.z
    }

    /// Straight-line distance between the supports.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        self.span.hypot(self.dz)
    }

    /// Unit horizontal direction from start to end.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Whether the span is too short for a curve to be generated.
    #[must_use]
    pub fn is_degenerate(&self, min_span: f64) -> bool {
        self.span < min_span
    }

    /// Height of the straight chord at horizontal position `x`.
    #[must_use]
    pub fn chord_height(&self, x: f64) -> f64 {
        if self.span < TOLERANCE {
            return self.start.z;
        }
        self.start.z + self.dz * (x / self.span)
    }

    /// Lifts a profile point `(x, z)` back into the local 3D frame.
    #[must_use]
    pub fn point_at(&self, x: f64, z: f64) -> Point3 {
        Point3::new(
            self.start.x + self.direction.x * x,
            self.start.y + self.direction.y * x,
            z,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reduces_sloped_span() {
        let profile =
            SpanProfile::new(Point3::new(1.0, 2.0, 10.0), Point3::new(4.0, 6.0, 22.0)).unwrap();
        assert_abs_diff_eq!(profile.span(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(profile.dz(), 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(profile.chord_length(), 13.0, epsilon = 1e-12);
        assert_abs_diff_eq!(profile.direction().x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(profile.direction().y, 0.8, epsilon = 1e-12);
        assert!(profile.direction().z.abs() < 1e-12);
    }

    #[test]
    fn point_at_inverts_reduction() {
        let start = Point3::new(-3.0, 7.0, 1.0);
        let end = Point3::new(12.0, -1.0, -4.0);
        let profile = SpanProfile::new(start, end).unwrap();

        let p0 = profile.point_at(0.0, profile.z0());
        let p1 = profile.point_at(profile.span(), profile.z0() + profile.dz());
        assert!((p0 - start).norm() < 1e-12);
        assert!((p1 - end).norm() < 1e-12);
    }

    #[test]
    fn chord_height_interpolates_linearly() {
        let profile =
            SpanProfile::new(Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 0.0, 20.0)).unwrap();
        assert_abs_diff_eq!(profile.chord_height(25.0), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(profile.chord_height(100.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn vertical_span_is_degenerate() {
        let profile =
            SpanProfile::new(Point3::new(5.0, 5.0, 0.0), Point3::new(5.0, 5.0, 30.0)).unwrap();
        assert!(profile.span() < 1e-12);
        assert!(profile.is_degenerate(0.1));
        assert_abs_diff_eq!(profile.chord_length(), 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(profile.direction().x, 1.0);
    }

    #[test]
    fn short_span_threshold() {
        let profile =
            SpanProfile::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.05, 0.0, 0.0)).unwrap();
        assert!(profile.is_degenerate(0.1));
        assert!(!profile.is_degenerate(0.01));
    }

    #[test]
    fn non_finite_point_is_rejected() {
        let result = SpanProfile::new(Point3::new(f64::NAN, 0.0, 0.0), Point3::origin());
        assert!(result.is_err());
        let result = SpanProfile::new(Point3::origin(), Point3::new(0.0, f64::INFINITY, 0.0));
        assert!(result.is_err());
    }
}
