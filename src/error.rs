//! Error types for the key estimation engine

use std::fmt;

/// Errors that can occur during key estimation
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Zero-variance input, profile correlation is undefined
    DegenerateInput(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DegenerateInput(msg) => write!(f, "Degenerate input: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
