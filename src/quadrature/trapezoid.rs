use nalgebra::DVector;

use crate::expression::evaluator::Evaluator;
use super::request::IntegrationRequest;

/// Outcome of one composite-trapezoidal integration: the approximate
/// value and the raw sample arrays a renderer can plot. Created fresh
/// per request and immutable afterwards.
pub struct IntegrationResult {
    value: f64,
    x_samples: DVector<f64>,
    y_samples: DVector<f64>
}

impl IntegrationResult {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn x_samples(&self) -> &DVector<f64> {
        &self.x_samples
    }

    pub fn y_samples(&self) -> &DVector<f64> {
        &self.y_samples
    }
}

/// Generates the `n + 1` abscissas `x_i = a + i*(b-a)/n`, endpoints
/// included. Each point is computed from its index rather than by
/// accumulated addition, so the spacing does not drift for large `n`.
pub fn sample_points(request: &IntegrationRequest) -> DVector<f64> {
    let a = request.lower();
    let width = request.upper() - request.lower();
    let n = request.subintervals() as f64;
    DVector::from_fn(request.subintervals() as usize + 1, |i, _| a + i as f64 * width / n)
}

/// Composite trapezoidal rule: endpoints weighted by one half, interior
/// points fully, scaled by the step width. With `n = 1` this degenerates
/// to the single-trapezoid rule `h*(y_0 + y_1)/2`.
///
/// Non-finite samples (domain errors inside `[a, b]`) propagate into the
/// sum per IEEE-754 and make the value non-finite; they are not dropped.
pub fn integrate(evaluator: &Evaluator, request: &IntegrationRequest) -> IntegrationResult {
    let n = request.subintervals() as usize;
    let x_samples = sample_points(request);
    let y_samples = evaluator.evaluate(&x_samples);
    let interior: f64 = y_samples.iter().skip(1).take(n - 1).sum();
    let value = request.step() * (0.5 * y_samples[0] + 0.5 * y_samples[n] + interior);
    IntegrationResult { value, x_samples, y_samples }
}
