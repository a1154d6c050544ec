//! Example: Analyze a chroma matrix and print the key report
//!
//! Builds a synthetic chroma matrix (a sustained C major triad with some
//! scale-tone leakage) and prints the chroma table, the correlation table,
//! and the detected key.

use tonal_dsp::{analyze_key, KeyConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    // Synthetic stand-in for a feature-extraction frontend: C, E, G strong,
    // remaining C-major scale tones weaker, chromatic neighbors faint.
    let frames = 64;
    let chroma: Vec<Vec<f32>> = (0..12)
        .map(|p| {
            let level = match p {
                0 => 1.0f32,
                4 | 7 => 0.8,
                2 | 5 | 9 | 11 => 0.35,
                _ => 0.05,
            };
            vec![level; frames]
        })
        .collect();

    let config = KeyConfig {
        prefer_relative_minor: true,
        ..KeyConfig::default()
    };
    let analysis = analyze_key(&chroma, config)?;

    // Chroma table (normalized by the maximum for display)
    let max_energy = analysis
        .chroma_energy
        .iter()
        .copied()
        .fold(f32::MIN, f32::max);
    println!("Chroma:");
    for (pitch, energy) in analysis.labeled_energies() {
        println!("  {}\t{:5.3}", pitch, energy / max_energy);
    }

    // Correlation table
    println!("\nCorrelations:");
    for candidate in analysis.candidates.sorted_by_label() {
        println!("  {}\t{:6.3}", candidate.key.label(), candidate.correlation);
    }

    // Key announcement
    let reported =
        analysis.key_with_context(config.prefer_relative_minor, config.relative_minor_threshold);
    println!(
        "\nDetected key: {}, correlation: {}",
        reported.key.label(),
        reported.correlation
    );
    if let Some(alternate) = analysis.estimate.alternate {
        println!(
            "also possible: {}, correlation: {}",
            alternate.key.label(),
            alternate.correlation
        );
    }

    Ok(())
}
