//! TableProbe Remote Service Client
//!
//! Configuration loading and the HTTP client for the hosted data service.

mod config;
mod record;
mod service;

pub use config::{ConfigError, ProbeConfig};
pub use record::{ProductSummary, Record};
pub use service::{DataService, ServiceClient};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid API key: {0}")]
    Credential(#[from] reqwest::header::InvalidHeaderValue),

    #[error("response was not a list of rows: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
