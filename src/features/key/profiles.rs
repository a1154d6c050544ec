//! Krumhansl-Schmuckler key profiles
//!
//! Tonal salience templates for the 24 keys, rooted at pitch class 0.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). Cognitive Foundations of Musical Pitch.
//! Oxford University Press.

/// Pitch class names, index 0 = C
pub const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Major key profile (expected pitch-class salience, tonic at index 0)
pub const MAJOR_PROFILE: [f32; 12] = [
    6.35, 2.23, 3.48, 2.33, 4.38, 4.09, 2.52, 5.19, 2.39, 3.66, 2.29, 2.88,
];

/// Minor key profile (expected pitch-class salience, tonic at index 0)
pub const MINOR_PROFILE: [f32; 12] = [
    6.33, 2.68, 3.52, 5.38, 2.60, 3.53, 2.54, 4.75, 3.98, 2.69, 3.34, 3.17,
];

/// Root of the relative minor for a major key root (3 semitones down)
pub fn relative_minor_root(major_root: u32) -> u32 {
    (major_root + 9) % 12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_have_tonic_peak() {
        // Both profiles peak at the tonic; the correlation engine relies on
        // rotation alignment, not on any particular normalization.
        let max_major = MAJOR_PROFILE.iter().copied().fold(f32::MIN, f32::max);
        assert_eq!(max_major, MAJOR_PROFILE[0]);
        let max_minor = MINOR_PROFILE.iter().copied().fold(f32::MIN, f32::max);
        assert_eq!(max_minor, MINOR_PROFILE[0]);
    }

    #[test]
    fn test_relative_minor_root() {
        assert_eq!(relative_minor_root(0), 9); // C major -> A minor
        assert_eq!(relative_minor_root(7), 4); // G major -> E minor
        assert_eq!(relative_minor_root(2), 11); // D major -> B minor
        assert_eq!(relative_minor_root(1), 10); // C# major -> A# minor
    }
}
