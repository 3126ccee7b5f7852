use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::quadrature::request::{
    IntegrationRequest,
    RequestError
};

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("subinterval count {0} exceeds the configured ceiling {1}")]
    SubintervalsOutOfRange(u32, u32)
}

fn default_expression() -> String {
    "sin(x)".to_owned()
}

fn default_lower_bound() -> f64 {
    2.0
}

fn default_upper_bound() -> f64 {
    14.0
}

fn default_subintervals() -> u32 {
    24
}

fn default_max_subintervals() -> u32 {
    100
}

/// Host-application defaults for the integration widgets: the initial
/// expression, bounds, subinterval count and the documented subinterval
/// ceiling. Every field is optional in the JSON document and falls back
/// to the stock scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_expression")]
    expression: String,

    #[serde(default = "default_lower_bound")]
    lower_bound: f64,

    #[serde(default = "default_upper_bound")]
    upper_bound: f64,

    #[serde(default = "default_subintervals")]
    subintervals: u32,

    #[serde(default = "default_max_subintervals")]
    max_subintervals: u32
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            expression: default_expression(),
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
            subintervals: default_subintervals(),
            max_subintervals: default_max_subintervals()
        }
    }
}

impl Configuration {
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn subintervals(&self) -> u32 {
        self.subintervals
    }

    pub fn max_subintervals(&self) -> u32 {
        self.max_subintervals
    }

    /// Builds the validated default request, rejecting configured values
    /// that violate the request invariants or the subinterval ceiling.
    pub fn default_request(&self) -> Result<IntegrationRequest, ConfigurationError> {
        if self.subintervals > self.max_subintervals {
            return Err(ConfigurationError::SubintervalsOutOfRange(self.subintervals, self.max_subintervals));
        }
        let request = IntegrationRequest::new(self.lower_bound, self.upper_bound, self.subintervals)?;
        Ok(request)
    }
}
