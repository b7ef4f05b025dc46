use crate::error::SolveError;
use crate::geometry::curve::rise;
use crate::geometry::SpanProfile;
use crate::math::root_finding::{find_root, BracketParams};

use super::SolverParams;

/// Finds the vertex position `b` for which a catenary with constant `a`
/// starting at the start support ends at the end support:
/// `a·(cosh((L − b)/a) − cosh(−b/a)) = dz`.
///
/// Searched over `[−10L, 10L]`, widened as needed.
pub(super) fn solve_vertex(
    profile: &SpanProfile,
    a: f64,
    params: &SolverParams,
) -> Result<f64, SolveError> {
    let span = profile.span();
    let dz = profile.dz();
    find_root(
        |b| rise(a, b, span) - dz,
        -10.0 * span,
        10.0 * span,
        &params.vertex_search(),
    )
}

/// Same equation as [`solve_vertex`], searched over the vertex position as a
/// fraction of the span, `u = b / L`, starting from `[−10, 10]`.
pub(super) fn solve_vertex_fraction(
    profile: &SpanProfile,
    a: f64,
    params: &SolverParams,
) -> Result<f64, SolveError> {
    let span = profile.span();
    let dz = profile.dz();
    // Residual is measured per unit span.
    let search = BracketParams {
        tolerance: params.vertex_tolerance / span.max(1.0),
        ..params.vertex_search()
    };
    find_root(|u| (rise(a, u * span, span) - dz) / span.max(1.0), -10.0, 10.0, &search)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_abs_diff_eq;

    fn profile(dz: f64) -> SpanProfile {
        SpanProfile::new(Point3::new(0.0, 0.0, 0.0), Point3::new(200.0, 0.0, dz)).unwrap()
    }

    #[test]
    fn level_span_vertex_is_mid_span() {
        let b = solve_vertex(&profile(0.0), 500.0, &SolverParams::default()).unwrap();
        assert_abs_diff_eq!(b, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn raised_end_moves_vertex_towards_start() {
        let p = profile(30.0);
        let b = solve_vertex(&p, 300.0, &SolverParams::default()).unwrap();
        assert!(b < 100.0);
        assert!((rise(300.0, b, 200.0) - 30.0).abs() < 1e-5);
    }

    #[test]
    fn steep_span_puts_vertex_outside() {
        let p = profile(-2000.0);
        let b = solve_vertex(&p, 50.0, &SolverParams::default()).unwrap();
        assert!(b > 200.0, "b = {b}");
        assert!((rise(50.0, b, 200.0) + 2000.0).abs() < 1e-5);
    }

    #[test]
    fn fraction_agrees_with_absolute_position() {
        let p = profile(-25.0);
        let params = SolverParams::default();
        let b = solve_vertex(&p, 150.0, &params).unwrap();
        let u = solve_vertex_fraction(&p, 150.0, &params).unwrap();
        assert_abs_diff_eq!(u * 200.0, b, epsilon = 1e-3);
    }

    #[test]
    fn unreachable_height_without_expansion_is_not_bracketed() {
        let params = SolverParams {
            max_expand: 0,
            ..SolverParams::default()
        };
        let result = solve_vertex(&profile(10_000.0), 500.0, &params);
        assert!(matches!(result, Err(SolveError::RootNotBracketed { .. })));
    }
}
