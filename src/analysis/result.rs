//! Key analysis result types

use serde::{Deserialize, Serialize};

use crate::features::key::profiles::PITCH_NAMES;

/// Musical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Major key (0 = C, 1 = C#, ..., 11 = B)
    Major(u32),
    /// Minor key (0 = C, 1 = C#, ..., 11 = B)
    Minor(u32),
}

impl Key {
    /// Get the root pitch class (0 = C, 1 = C#, ..., 11 = B)
    pub fn root(&self) -> u32 {
        match self {
            Key::Major(i) | Key::Minor(i) => *i % 12,
        }
    }

    /// Get the candidate label (e.g., "C major", "A minor")
    ///
    /// # Example
    ///
    /// ```
    /// use tonal_dsp::analysis::result::Key;
    ///
    /// assert_eq!(Key::Major(0).label(), "C major");
    /// assert_eq!(Key::Major(6).label(), "F# major");
    /// assert_eq!(Key::Minor(9).label(), "A minor");
    /// ```
    pub fn label(&self) -> String {
        match self {
            Key::Major(i) => format!("{} major", PITCH_NAMES[*i as usize % 12]),
            Key::Minor(i) => format!("{} minor", PITCH_NAMES[*i as usize % 12]),
        }
    }
}

/// A key hypothesis with its profile correlation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyCandidate {
    /// Hypothesized key (root + mode)
    pub key: Key,

    /// Pearson correlation against the key profile, rounded to 3 decimals.
    /// NaN when the input had zero variance
    pub correlation: f32,
}

/// The 24 key candidates in their fixed enumeration order
///
/// Order is load-bearing: major keys for roots 0..11 ascending, then minor
/// keys for roots 0..11 ascending. Both the primary tie-break and the
/// alternate-key scan walk this order front to back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateList(Vec<KeyCandidate>);

impl CandidateList {
    /// Wrap an already-ordered candidate vector
    pub fn new(candidates: Vec<KeyCandidate>) -> Self {
        Self(candidates)
    }

    /// Iterate candidates in enumeration order
    pub fn iter(&self) -> std::slice::Iter<'_, KeyCandidate> {
        self.0.iter()
    }

    /// Candidates in enumeration order, as a slice
    pub fn as_slice(&self) -> &[KeyCandidate] {
        &self.0
    }

    /// Number of candidates (24 for a full list)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the list holds no candidates
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the correlation for a specific key
    pub fn correlation_for(&self, key: Key) -> Option<f32> {
        self.0.iter().find(|c| c.key == key).map(|c| c.correlation)
    }

    /// Candidates sorted by label, for correlation-table display
    pub fn sorted_by_label(&self) -> Vec<KeyCandidate> {
        let mut sorted = self.0.clone();
        sorted.sort_by_key(|c| c.key.label());
        sorted
    }
}

/// Classified key estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeyEstimate {
    /// Best-correlated candidate (first maximum in enumeration order)
    pub primary: KeyCandidate,

    /// Near-tied candidate, if any: the first candidate in enumeration order
    /// whose correlation exceeds the alternate ratio of the primary's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<KeyCandidate>,
}

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Number of chroma frames in the analysis window
    pub frame_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            frame_count: 0,
            processing_time_ms: 0.0,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Complete key analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyAnalysis {
    /// Per-pitch-class energy totals (raw, not normalized)
    pub chroma_energy: [f32; 12],

    /// All 24 key candidates in enumeration order
    pub candidates: CandidateList,

    /// Classified estimate (primary + optional alternate)
    pub estimate: KeyEstimate,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

impl KeyAnalysis {
    /// Per-pitch-class energies paired with their pitch names, for
    /// chroma-table display. Values are raw sums; normalization is left to
    /// the presentation layer.
    pub fn labeled_energies(&self) -> Vec<(&'static str, f32)> {
        PITCH_NAMES
            .iter()
            .copied()
            .zip(self.chroma_energy.iter().copied())
            .collect()
    }

    /// Resolve the reported key, optionally preferring the relative minor
    ///
    /// Reporting-time disambiguation only: the stored estimate is not
    /// mutated. See [`crate::features::key::classifier::prefer_relative_minor`].
    ///
    /// # Example
    ///
    /// ```
    /// use tonal_dsp::{analyze_key, KeyConfig};
    ///
    /// let chroma: Vec<Vec<f32>> = (0..12).map(|p| vec![1.0 + p as f32; 4]).collect();
    /// let analysis = analyze_key(&chroma, KeyConfig::default())?;
    /// let reported = analysis.key_with_context(true, 0.9);
    /// println!("{}: {:.3}", reported.key.label(), reported.correlation);
    /// # Ok::<(), tonal_dsp::AnalysisError>(())
    /// ```
    pub fn key_with_context(&self, prefer_minor: bool, threshold: f32) -> KeyCandidate {
        crate::features::key::classifier::prefer_relative_minor(
            &self.estimate,
            &self.candidates,
            prefer_minor,
            threshold,
        )
    }
}
