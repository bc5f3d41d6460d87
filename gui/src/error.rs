//! Error types for Employee Desk

use thiserror::Error;

use crate::models::EmployeeField;

/// Failure of a single backend call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, timeout, or any other transport failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Request failed with status code {status}{}", detail(.message))]
    Status { status: u16, message: String },

    #[error("Employee {id} not found")]
    NotFound { id: i64 },

    /// Response body did not match the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

fn detail(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {}", message)
    }
}

/// A form field constraint that blocked submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Required(EmployeeField),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}
