use nalgebra::dvector;

use crate::expression::ast::Expr;
use crate::expression::evaluator::Evaluator;
use super::antiderivative::antiderivative;

/// Exact value of the definite integral, when a closed form exists.
/// `Unavailable` is an explicit sentinel: it is never collapsed to
/// zero or NaN, and the caller reports it as such.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReferenceResult {
    Available(f64),
    Unavailable
}

impl ReferenceResult {
    pub fn value(&self) -> Option<f64> {
        match self {
            ReferenceResult::Available(value) => Some(*value),
            ReferenceResult::Unavailable => None
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ReferenceResult::Available(_))
    }
}

/// Attempts the closed-form integral of `expr` over `[a, b]` by
/// evaluating an antiderivative at both bounds. A missing closed form
/// or a non-finite `F(b) - F(a)` (an antiderivative evaluated outside
/// its domain, e.g. `ln` across zero) degrades to `Unavailable`.
pub fn exact_integral(expr: &Expr, a: f64, b: f64) -> ReferenceResult {
    let anti = match antiderivative(expr) {
        Some(anti) => anti,
        None => return ReferenceResult::Unavailable
    };
    let bounds = Evaluator::compile(&anti).evaluate(&dvector![a, b]);
    let value = bounds[1] - bounds[0];
    if value.is_finite() {
        ReferenceResult::Available(value)
    } else {
        ReferenceResult::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::expression::parser::parse;

    fn exact_for(text: &str, a: f64, b: f64) -> ReferenceResult {
        exact_integral(&parse(text).unwrap(), a, b)
    }

    #[test]
    fn sine_over_half_period() {
        let result = exact_for("sin(x)", 0.0, std::f64::consts::PI);
        assert_relative_eq!(result.value().unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn polynomial_is_exact() {
        // ∫ (3x² + 1) dx over [0, 2] = 8 + 2
        let result = exact_for("3*x^2 + 1", 0.0, 2.0);
        assert_relative_eq!(result.value().unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn reference_scenario_bounds() {
        let result = exact_for("sin(x)", 2.0, 14.0);
        let expected = 2.0_f64.cos() - 14.0_f64.cos();
        assert_relative_eq!(result.value().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn unsupported_form_is_unavailable() {
        assert_eq!(exact_for("sin(x^2)", 0.0, 1.0), ReferenceResult::Unavailable);
    }

    #[test]
    fn logarithm_across_zero_is_unavailable() {
        // The antiderivative ln(x) is NaN at the lower bound.
        assert_eq!(exact_for("1/x", -1.0, 1.0), ReferenceResult::Unavailable);
    }

    #[test]
    fn reciprocal_on_positive_interval_is_available() {
        let result = exact_for("1/x", 1.0, std::f64::consts::E);
        assert_relative_eq!(result.value().unwrap(), 1.0, epsilon = 1e-12);
    }
}
