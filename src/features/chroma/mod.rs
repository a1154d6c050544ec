//! Chroma processing modules
//!
//! The time-frequency chroma transform itself is computed upstream by an
//! audio-feature collaborator; this module only collapses its output over
//! the analysis window.

pub mod aggregator;

pub use aggregator::aggregate_chroma;
