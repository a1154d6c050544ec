//! Key profile correlation
//!
//! Scores a pitch-class energy vector against the 24 major/minor key
//! profiles by Pearson correlation over rotated copies of the vector.

use super::profiles::{MAJOR_PROFILE, MINOR_PROFILE};
use crate::analysis::result::{CandidateList, Key, KeyCandidate};

/// Correlate an energy vector against all 24 key profiles
///
/// For each root `r` in 0..11, the energy vector is rotated so position 0
/// corresponds to the hypothesized tonic (`rotated[m] = energy[(r + m) % 12]`),
/// then correlated against the major and minor profiles. Coefficients are
/// rounded to 3 decimals so ties and near-ties reproduce across runs.
///
/// # Arguments
///
/// * `energy` - Aggregated pitch-class energy vector (C = index 0)
///
/// # Returns
///
/// The 24 candidates in fixed enumeration order: major roots 0..11
/// ascending, then minor roots 0..11 ascending. A zero-variance energy
/// vector (all-zero or all-equal) yields NaN correlations; NaN is carried
/// in the candidates rather than coerced to 0 so the classifier can refuse
/// to report a key for degenerate input.
pub fn correlate_profiles(energy: &[f32; 12]) -> CandidateList {
    let mut major = [0.0f32; 12];
    let mut minor = [0.0f32; 12];

    for root in 0..12 {
        let mut rotated = [0.0f32; 12];
        for (m, value) in rotated.iter_mut().enumerate() {
            *value = energy[(root + m) % 12];
        }

        major[root] = round3(pearson(&rotated, &MAJOR_PROFILE));
        minor[root] = round3(pearson(&rotated, &MINOR_PROFILE));
    }

    let mut candidates = Vec::with_capacity(24);
    for (root, &correlation) in major.iter().enumerate() {
        candidates.push(KeyCandidate {
            key: Key::Major(root as u32),
            correlation,
        });
    }
    for (root, &correlation) in minor.iter().enumerate() {
        candidates.push(KeyCandidate {
            key: Key::Minor(root as u32),
            correlation,
        });
    }

    log::debug!(
        "Correlated {} key candidates (max {:.3})",
        candidates.len(),
        candidates
            .iter()
            .map(|c| c.correlation)
            .fold(f32::NEG_INFINITY, f32::max)
    );

    CandidateList::new(candidates)
}

/// Pearson correlation coefficient between two 12-element vectors
///
/// Returns NaN when either vector has zero variance.
fn pearson(x: &[f32; 12], y: &[f32; 12]) -> f32 {
    let n = x.len() as f32;
    let mean_x = x.iter().sum::<f32>() / n;
    let mean_y = y.iter().sum::<f32>() / n;

    let mut covariance = 0.0f32;
    let mut var_x = 0.0f32;
    let mut var_y = 0.0f32;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        return f32::NAN;
    }
    covariance / denominator
}

/// Round to 3 decimal digits; NaN passes through
fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_enumeration_order() {
        let energy = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let candidates = correlate_profiles(&energy);
        assert_eq!(candidates.len(), 24);

        for (i, candidate) in candidates.iter().enumerate() {
            let expected = if i < 12 {
                Key::Major(i as u32)
            } else {
                Key::Minor((i - 12) as u32)
            };
            assert_eq!(candidate.key, expected);
        }
    }

    #[test]
    fn test_golden_c_major() {
        // Energy identical to the major profile correlates perfectly at C.
        let candidates = correlate_profiles(&MAJOR_PROFILE);
        let c_major = candidates.correlation_for(Key::Major(0)).unwrap();
        assert!((c_major - 1.0).abs() <= 0.001);
    }

    #[test]
    fn test_transposed_profile_peaks_at_transposed_root() {
        for shift in 0..12usize {
            let mut energy = [0.0f32; 12];
            for (p, value) in energy.iter_mut().enumerate() {
                *value = MAJOR_PROFILE[(p + 12 - shift) % 12];
            }

            let candidates = correlate_profiles(&energy);
            let shifted = candidates
                .correlation_for(Key::Major(shift as u32))
                .unwrap();
            assert!(
                (shifted - 1.0).abs() <= 0.001,
                "shift {} should correlate 1.0, got {}",
                shift,
                shifted
            );
        }
    }

    #[test]
    fn test_correlations_bounded() {
        let energy = [0.3, 1.7, 0.2, 4.1, 0.9, 2.2, 0.1, 3.3, 0.8, 1.1, 0.4, 2.9];
        let candidates = correlate_profiles(&energy);
        for candidate in candidates.iter() {
            assert!(
                candidate.correlation.abs() <= 1.0005,
                "{} out of range: {}",
                candidate.key.label(),
                candidate.correlation
            );
        }
    }

    #[test]
    fn test_zero_variance_yields_nan() {
        let zero = [0.0f32; 12];
        let candidates = correlate_profiles(&zero);
        assert!(candidates.iter().all(|c| c.correlation.is_nan()));

        let flat = [0.25f32; 12];
        let candidates = correlate_profiles(&flat);
        assert!(candidates.iter().all(|c| c.correlation.is_nan()));
    }

    #[test]
    fn test_coefficients_rounded() {
        let energy = [6.1, 2.0, 3.3, 2.5, 4.4, 4.0, 2.6, 5.0, 2.4, 3.5, 2.3, 2.8];
        let candidates = correlate_profiles(&energy);
        for candidate in candidates.iter() {
            let scaled = candidate.correlation * 1000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-3,
                "{} not rounded to 3 decimals: {}",
                candidate.key.label(),
                candidate.correlation
            );
        }
    }

    #[test]
    fn test_pearson_anticorrelation() {
        let x = [
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
        ];
        let y = [
            12.0, 11.0, 10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0,
        ];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-5);
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-5);
    }
}
