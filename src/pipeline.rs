use thiserror::Error;

use crate::exact::reference::exact_integral;
use crate::expression::evaluator::Evaluator;
use crate::expression::parser::parse;
use crate::expression::token::ParseError;
use crate::quadrature::request::{
    IntegrationRequest,
    RequestError
};
use crate::quadrature::trapezoid::{
    IntegrationResult,
    integrate
};
use crate::report::summary::Summary;

/// User-facing failures of a whole run. Both variants halt the request
/// before any numeric work; the hosting process keeps running.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Request(#[from] RequestError)
}

/// Runs the full pipeline for one request: parse the expression,
/// validate bounds, integrate with the composite trapezoidal rule,
/// attempt the closed-form reference, and assemble the summary.
///
/// An unavailable reference is not an error: the summary simply marks
/// the exact and error fields absent. Non-finite sample values flow
/// into a non-finite numeric value, reported faithfully.
pub fn run(expression_text: &str, lower: f64, upper: f64, subintervals: u32)
    -> Result<(IntegrationResult, Summary), PipelineError> {
    let expr = parse(expression_text)?;
    let request = IntegrationRequest::new(lower, upper, subintervals)?;
    let evaluator = Evaluator::compile(&expr);
    let numeric = integrate(&evaluator, &request);
    let exact = exact_integral(&expr, request.lower(), request.upper());
    let summary = Summary::new(&numeric, &exact);
    Ok((numeric, summary))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn runs_reference_scenario_end_to_end() {
        let (numeric, summary) = run("sin(x)", 2.0, 14.0, 24).unwrap();
        let exact = 2.0_f64.cos() - 14.0_f64.cos();
        assert_eq!(numeric.x_samples().len(), 25);
        assert!(summary.exact_available());
        assert_relative_eq!(summary.exact_value().unwrap(), exact, epsilon = 1e-12);
        assert!(summary.absolute_error().unwrap() < 2e-2);
    }

    #[test]
    fn parse_failure_halts_before_integration() {
        let result = run("x +* 2", 0.0, 1.0, 10);
        assert!(matches!(result, Err(PipelineError::Parse(_))));
    }

    #[test]
    fn invalid_bounds_halt_before_integration() {
        let result = run("x", 3.0, 3.0, 10);
        assert!(matches!(result, Err(PipelineError::Request(RequestError::InvalidBounds { .. }))));
    }

    #[test]
    fn unavailable_reference_degrades_gracefully() {
        let (numeric, summary) = run("sin(x^2)", 0.0, 1.0, 50).unwrap();
        assert!(numeric.value().is_finite());
        assert!(!summary.exact_available());
    }

    #[test]
    fn pole_scenario_is_surfaced_not_masked() {
        let (numeric, summary) = run("1/x", -1.0, 1.0, 10).unwrap();
        assert!(!numeric.value().is_finite());
        assert!(!summary.numeric_value().is_finite());
        assert!(!summary.exact_available());
    }
}
