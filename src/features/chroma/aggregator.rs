//! Chroma aggregation
//!
//! Collapses a 12×T chroma matrix into a single pitch-class energy vector.

use crate::error::AnalysisError;

/// Number of pitch classes in the equal-tempered octave
pub const NUM_PITCH_CLASSES: usize = 12;

/// Aggregate a chroma matrix into a pitch-class energy vector
///
/// Sums each pitch-class row over the analysis window. Rows are frame
/// energies already time-sliced by the caller.
///
/// # Arguments
///
/// * `chroma` - Chroma matrix: 12 rows (one per pitch class, C = row 0),
///   each holding non-negative frame energies
///
/// # Returns
///
/// 12-element energy vector, `energy[p] = sum(chroma[p])`. A window with
/// zero frames yields an all-zero vector; correlation against it is
/// undefined downstream.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the matrix does not have
/// exactly 12 rows.
pub fn aggregate_chroma(chroma: &[Vec<f32>]) -> Result<[f32; NUM_PITCH_CLASSES], AnalysisError> {
    if chroma.len() != NUM_PITCH_CLASSES {
        return Err(AnalysisError::InvalidInput(format!(
            "Chroma matrix must have 12 rows, got {}",
            chroma.len()
        )));
    }

    let mut energy = [0.0f32; NUM_PITCH_CLASSES];
    for (pitch_class, row) in chroma.iter().enumerate() {
        energy[pitch_class] = row.iter().sum();
    }

    log::debug!(
        "Aggregated chroma: {} frames, total energy {:.4}",
        chroma[0].len(),
        energy.iter().sum::<f32>()
    );

    Ok(energy)
}
