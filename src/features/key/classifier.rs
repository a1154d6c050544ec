//! Key classification
//!
//! Selects the primary key from the 24-candidate correlation table, detects
//! a near-tied alternate, and resolves the relative-minor reporting
//! preference.

use super::profiles::relative_minor_root;
use crate::analysis::result::{CandidateList, Key, KeyCandidate, KeyEstimate};
use crate::error::AnalysisError;

/// Classify the candidate list into a key estimate
///
/// Primary selection scans the list in its fixed enumeration order keeping
/// a running maximum, so the first candidate reaching the maximum wins
/// exact ties ("C major" beats any minor key, lower roots beat higher
/// roots). The alternate is the first candidate in the same order whose
/// correlation exceeds `primary * alternate_ratio` without matching the
/// primary's exactly — first qualifying in scan order, which is not
/// necessarily the second-best score overall.
///
/// # Arguments
///
/// * `candidates` - The 24 candidates in enumeration order
/// * `alternate_ratio` - Qualification ratio for the alternate scan
///   (typically 0.9)
///
/// # Errors
///
/// Returns `AnalysisError::DegenerateInput` when no candidate has a finite
/// correlation (zero-variance energy vector); NaN is never crowned as a
/// maximum.
pub fn classify(
    candidates: &CandidateList,
    alternate_ratio: f32,
) -> Result<KeyEstimate, AnalysisError> {
    let mut primary: Option<KeyCandidate> = None;
    for candidate in candidates.iter() {
        if candidate.correlation.is_nan() {
            continue;
        }
        match primary {
            Some(best) if candidate.correlation <= best.correlation => {}
            _ => primary = Some(*candidate),
        }
    }

    let primary = primary.ok_or_else(|| {
        AnalysisError::DegenerateInput(
            "all candidate correlations are undefined (zero-variance chroma)".to_string(),
        )
    })?;

    let alternate = candidates
        .iter()
        .find(|c| {
            c.correlation > primary.correlation * alternate_ratio
                && c.correlation != primary.correlation
        })
        .copied();

    log::debug!(
        "Classified key: {} ({:.3}), alternate: {}",
        primary.key.label(),
        primary.correlation,
        alternate
            .map(|a| format!("{} ({:.3})", a.key.label(), a.correlation))
            .unwrap_or_else(|| "none".to_string())
    );

    Ok(KeyEstimate { primary, alternate })
}

/// Resolve the reported key, optionally preferring the relative minor
///
/// Relative major/minor pairs share six of seven scale tones and often
/// correlate closely; this breaks the ambiguity toward the minor reading
/// when it is nearly as strong. Applies only when the primary is major:
/// if the relative minor (root 3 semitones down) correlates above
/// `primary * threshold`, that candidate is reported instead. The stored
/// estimate is never mutated.
pub fn prefer_relative_minor(
    estimate: &KeyEstimate,
    candidates: &CandidateList,
    prefer_minor: bool,
    threshold: f32,
) -> KeyCandidate {
    let primary = estimate.primary;

    if prefer_minor {
        if let Key::Major(root) = primary.key {
            let relative = Key::Minor(relative_minor_root(root));
            if let Some(minor_corr) = candidates.correlation_for(relative) {
                if minor_corr > primary.correlation * threshold {
                    log::debug!(
                        "Relative-minor preference: reporting {} ({:.3}) over {} ({:.3})",
                        relative.label(),
                        minor_corr,
                        primary.key.label(),
                        primary.correlation
                    );
                    return KeyCandidate {
                        key: relative,
                        correlation: minor_corr,
                    };
                }
            }
        }
    }

    primary
}
