//! # Tonal DSP
//!
//! A key estimation engine for audio analysis, classifying the musical key
//! of an excerpt from its precomputed chroma representation using
//! Krumhansl-Schmuckler profile correlation.
//!
//! ## Features
//!
//! - **Chroma Aggregation**: Collapse a 12×T chroma matrix into a
//!   pitch-class energy vector
//! - **Profile Correlation**: Pearson correlation against major/minor
//!   templates for all 24 keys
//! - **Key Classification**: Deterministic primary selection, near-tie
//!   alternate detection, relative-minor disambiguation
//!
//! ## Quick Start
//!
//! ```
//! use tonal_dsp::{analyze_key, KeyConfig};
//!
//! // Chroma matrix from your feature-extraction frontend:
//! // 12 rows (C through B), one frame energy per column.
//! let chroma: Vec<Vec<f32>> = (0..12).map(|p| vec![1.0 + p as f32; 8]).collect();
//!
//! let analysis = analyze_key(&chroma, KeyConfig::default())?;
//!
//! println!(
//!     "Key: {} (correlation: {:.3})",
//!     analysis.estimate.primary.key.label(),
//!     analysis.estimate.primary.correlation
//! );
//! # Ok::<(), tonal_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline flows one way:
//!
//! ```text
//! Chroma Matrix → Energy Vector → 24 Correlation Scores → Key Estimate
//! ```
//!
//! Every stage is a pure function of its inputs; nothing is retained
//! across calls. Audio decoding and the chroma transform itself belong to
//! upstream collaborators, and formatting/plotting of the results belongs
//! to downstream ones.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;

// Re-export main types
pub use analysis::result::{
    AnalysisMetadata, CandidateList, Key, KeyAnalysis, KeyCandidate, KeyEstimate,
};
pub use config::KeyConfig;
pub use error::AnalysisError;

/// Main key estimation function
///
/// Runs the full pipeline on a chroma matrix: aggregates the pitch-class
/// energy vector, correlates it against all 24 key profiles, and classifies
/// the primary and alternate candidates.
///
/// # Arguments
///
/// * `chroma` - Chroma matrix: 12 rows (C = row 0), each an ordered
///   sequence of non-negative frame energies over the analysis window
/// * `config` - Key estimation configuration parameters
///
/// # Returns
///
/// `KeyAnalysis` carrying the energy vector, the 24-candidate correlation
/// table, the classified estimate, and analysis metadata.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the matrix does not have 12
/// rows, or `AnalysisError::DegenerateInput` if the aggregated energy
/// vector has zero variance (every profile correlation undefined).
///
/// # Example
///
/// ```
/// use tonal_dsp::{analyze_key, KeyConfig};
///
/// let chroma: Vec<Vec<f32>> = (0..12).map(|p| vec![(p as f32).sin().abs(); 16]).collect();
/// let analysis = analyze_key(&chroma, KeyConfig::default())?;
/// assert_eq!(analysis.candidates.len(), 24);
/// # Ok::<(), tonal_dsp::AnalysisError>(())
/// ```
pub fn analyze_key(
    chroma: &[Vec<f32>],
    config: KeyConfig,
) -> Result<KeyAnalysis, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting key analysis: {} rows, {} frames",
        chroma.len(),
        chroma.first().map(|row| row.len()).unwrap_or(0)
    );

    let chroma_energy = features::chroma::aggregate_chroma(chroma)?;
    let candidates = features::key::correlate_profiles(&chroma_energy);
    let estimate = features::key::classify(&candidates, config.alternate_ratio)?;

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;
    log::debug!(
        "Key analysis done in {:.2} ms: {} ({:.3})",
        processing_time_ms,
        estimate.primary.key.label(),
        estimate.primary.correlation
    );

    Ok(KeyAnalysis {
        chroma_energy,
        candidates,
        estimate,
        metadata: AnalysisMetadata {
            frame_count: chroma[0].len(),
            processing_time_ms,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}
