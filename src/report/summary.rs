use std::fmt;

use crate::exact::reference::ReferenceResult;
use crate::quadrature::trapezoid::IntegrationResult;

/// Presentation values of one integration: the numeric result, and the
/// exact value plus absolute error when a closed form was found. All
/// fields render at six fractional digits. A non-finite numeric value
/// passes through untouched; absence of the exact value is an explicit
/// marker, never a zero error.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    numeric_value: f64,
    exact_value: Option<f64>,
    absolute_error: Option<f64>
}

pub const FRACTIONAL_DIGITS: usize = 6;

impl Summary {
    pub fn new(numeric: &IntegrationResult, exact: &ReferenceResult) -> Summary {
        let numeric_value = numeric.value();
        let exact_value = exact.value();
        let absolute_error = exact_value.map(|value| (numeric_value - value).abs());
        Summary { numeric_value, exact_value, absolute_error }
    }

    pub fn numeric_value(&self) -> f64 {
        self.numeric_value
    }

    pub fn exact_value(&self) -> Option<f64> {
        self.exact_value
    }

    pub fn absolute_error(&self) -> Option<f64> {
        self.absolute_error
    }

    pub fn exact_available(&self) -> bool {
        self.exact_value.is_some()
    }

    pub fn formatted_numeric(&self) -> String {
        format!("{:.*}", FRACTIONAL_DIGITS, self.numeric_value)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "numeric integral (trapezoidal rule): {:.*}", FRACTIONAL_DIGITS, self.numeric_value)?;
        match (self.exact_value, self.absolute_error) {
            (Some(exact), Some(error)) => {
                writeln!(f, "exact integral: {:.*}", FRACTIONAL_DIGITS, exact)?;
                write!(f, "absolute error: {:.*}", FRACTIONAL_DIGITS, error)
            },
            _ => write!(f, "exact integral not available")
        }
    }
}
