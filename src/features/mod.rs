//! Feature processing modules
//!
//! This module contains the key estimation pipeline stages:
//! - Chroma aggregation (12×T matrix → pitch-class energy vector)
//! - Key correlation (Krumhansl-Schmuckler templates, 24 keys)
//! - Key classification (primary/alternate selection, mode preference)

pub mod chroma;
pub mod key;
