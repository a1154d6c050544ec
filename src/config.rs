//! Configuration parameters for key estimation

/// Key estimation configuration parameters
#[derive(Debug, Clone, Copy)]
pub struct KeyConfig {
    /// Alternate-key detection ratio (default: 0.9)
    /// A candidate qualifies as the alternate when its correlation exceeds
    /// `primary correlation * alternate_ratio` without matching it exactly
    pub alternate_ratio: f32,

    /// Prefer the relative minor at reporting time (default: false)
    /// Only affects `key_with_context`; the stored estimate is untouched
    pub prefer_relative_minor: bool,

    /// Relative-minor preference threshold (default: 0.9)
    /// The relative minor replaces a major primary when its correlation
    /// exceeds `primary correlation * relative_minor_threshold`
    pub relative_minor_threshold: f32,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            alternate_ratio: 0.9,
            prefer_relative_minor: false,
            relative_minor_threshold: 0.9,
        }
    }
}
