use tracing::warn;

use crate::geometry::{CatenaryCurve, SpanCurve, SpanProfile};

use super::vertex::solve_vertex;
use super::{SolveStrategy, SolverParams, StageOutcome};

/// Physics mode: `a` comes straight from tension and weight, only the vertex
/// is searched for. Never falls back to another stage.
pub(super) fn solve(
    profile: &SpanProfile,
    tension: f64,
    linear_weight: f64,
    params: &SolverParams,
) -> StageOutcome {
    let a = tension / linear_weight.max(params.min_linear_weight);

    match solve_vertex(profile, a, params) {
        Ok(b) => StageOutcome::Solved(
            SpanCurve::Catenary(CatenaryCurve::new(*profile, a, b)),
            SolveStrategy::Physics,
        ),
        Err(err) => {
            warn!(%err, a, "vertex search failed, placing vertex at start support");
            StageOutcome::Solved(
                SpanCurve::Catenary(CatenaryCurve::new(*profile, a, 0.0)),
                SolveStrategy::PhysicsDefaultVertex,
            )
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Curve;
    use crate::math::Point3;
    use approx::assert_abs_diff_eq;

    fn solved(outcome: StageOutcome) -> (SpanCurve, SolveStrategy) {
        match outcome {
            StageOutcome::Solved(curve, strategy) => (curve, strategy),
            StageOutcome::Fallback(_) => panic!("physics mode never falls back"),
        }
    }

    #[test]
    fn ends_at_end_support() {
        let profile =
            SpanProfile::new(Point3::new(10.0, 10.0, 5.0), Point3::new(130.0, 60.0, 25.0))
                .unwrap();
        let (curve, strategy) = solved(solve(&profile, 9_000.0, 15.0, &SolverParams::default()));
        assert_eq!(strategy, SolveStrategy::Physics);
        assert_abs_diff_eq!(curve.height(profile.span()), 25.0, epsilon = 1e-4);
    }

    #[test]
    fn zero_weight_uses_minimum() {
        let profile =
            SpanProfile::new(Point3::new(0.0, 0.0, 0.0), Point3::new(50.0, 0.0, 0.0)).unwrap();
        let (curve, _) = solved(solve(&profile, 1.0, 0.0, &SolverParams::default()));
        let SpanCurve::Catenary(c) = curve else {
            panic!("expected a catenary");
        };
        assert!((c.params().a - 1e9).abs() < 1e-3);
        // Effectively a taut, straight cable.
        assert!(curve.height(25.0).abs() < 1e-3);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn tiny_constant_is_kept_exactly() {
        let profile =
            SpanProfile::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1_400.0, 0.0, 0.0)).unwrap();
        let (curve, _) = solved(solve(&profile, 0.001, 10.0, &SolverParams::default()));
        let SpanCurve::Catenary(c) = curve else {
            panic!("expected a catenary");
        };
        assert_eq!(c.params().a, 0.001 / 10.0);
    }
}
