//! Analysis result aggregation modules
//!
//! Bundles the key estimation outputs into final result types:
//! - Key and candidate types
//! - Estimate and full analysis result
//! - Metadata

pub mod result;
