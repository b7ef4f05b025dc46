use crate::error::{OperationError, Result};
use crate::math::root_finding::{BracketParams, Expansion};

/// Thresholds, tolerances and search budgets for the catenary solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverParams {
    /// Spans shorter than this (horizontally) are not solved.
    pub min_span: f64,
    /// Lower bound applied to the linear weight in Physics mode.
    pub min_linear_weight: f64,
    /// Amount by which a target length must exceed the chord.
    pub length_epsilon: f64,
    /// Residual tolerance of the vertex-position search.
    pub vertex_tolerance: f64,
    /// Residual tolerance of the outer length and sag searches.
    pub shape_tolerance: f64,
    /// Interval expansions allowed per search.
    pub max_expand: usize,
    /// Bisection steps allowed per search.
    pub max_iter: usize,
    /// Inward probes for non-finite bounds in the sag search.
    pub sag_probe_attempts: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            min_span: 0.1,
            min_linear_weight: 1e-9,
            length_epsilon: 1e-3,
            vertex_tolerance: 1e-5,
            shape_tolerance: 1e-4,
            max_expand: 20,
            max_iter: 64,
            sag_probe_attempts: 5,
        }
    }
}

impl SolverParams {
    /// Checks that thresholds and tolerances are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold or tolerance is non-positive or
    /// non-finite.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("min_span", self.min_span),
            ("min_linear_weight", self.min_linear_weight),
            ("length_epsilon", self.length_epsilon),
            ("vertex_tolerance", self.vertex_tolerance),
            ("shape_tolerance", self.shape_tolerance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(OperationError::InvalidInput(format!(
                    "{name} must be positive and finite, got {value}"
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Search settings for the vertex position (signed domain).
    pub(crate) fn vertex_search(&self) -> BracketParams {
        BracketParams {
            max_expand: self.max_expand,
            max_iter: self.max_iter,
            tolerance: self.vertex_tolerance,
            expansion: Expansion::Symmetric,
            probe_attempts: 0,
        }
    }

    /// Search settings for the catenary constant (positive domain).
    pub(crate) fn shape_search(&self, probe_attempts: usize) -> BracketParams {
        BracketParams {
            max_expand: self.max_expand,
            max_iter: self.max_iter,
            tolerance: self.shape_tolerance,
            expansion: Expansion::Positive,
            probe_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SolverParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let params = SolverParams {
            shape_tolerance: 0.0,
            ..SolverParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_nan_span_threshold() {
        let params = SolverParams {
            min_span: f64::NAN,
            ..SolverParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn searches_use_matching_policies() {
        let params = SolverParams::default();
        assert_eq!(params.vertex_search().expansion, Expansion::Symmetric);
        assert_eq!(params.shape_search(5).expansion, Expansion::Positive);
        assert_eq!(params.shape_search(5).probe_attempts, 5);
    }
}
