use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("lower bound {lower} must be smaller than upper bound {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error("at least one subinterval is required")]
    NoSubintervals
}

/// Validated input of a single integration: bounds and subinterval
/// count. Construction is the only place the `lower < upper` and
/// `subintervals >= 1` invariants are checked; the integrator relies
/// on them.
#[derive(Debug, Clone, Copy)]
pub struct IntegrationRequest {
    lower: f64,
    upper: f64,
    subintervals: u32
}

impl IntegrationRequest {
    pub fn new(lower: f64, upper: f64, subintervals: u32) -> Result<IntegrationRequest, RequestError> {
        if lower >= upper {
            Err(RequestError::InvalidBounds { lower, upper })
        } else if subintervals == 0 {
            Err(RequestError::NoSubintervals)
        } else {
            Ok(IntegrationRequest { lower, upper, subintervals })
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn subintervals(&self) -> u32 {
        self.subintervals
    }

    /// Step width between consecutive abscissas.
    pub fn step(&self) -> f64 {
        (self.upper - self.lower) / self.subintervals as f64
    }
}
