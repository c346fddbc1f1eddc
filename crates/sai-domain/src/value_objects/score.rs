//! Similarity score and confidence threshold
//!
//! Two newtypes so that a score can only ever be compared against a
//! threshold, never against an unrelated float such as a quantity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::DEFAULT_MATCH_THRESHOLD;
use crate::error::{Error, Result};

/// Value Object: Similarity Score
///
/// Higher is more similar. Providers report values in `[0, 1]`; the type
/// does not clamp so a misbehaving provider stays visible in logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    /// Score of an empty result
    pub const ZERO: Self = Self(0.0);

    /// Wrap a raw provider score
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Raw value
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for SimilarityScore {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Value Object: Match Confidence Threshold
///
/// A similarity in `[0, 1]`. A top candidate whose score is greater than or
/// equal to the threshold is a confident match.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MatchThreshold(f64);

impl MatchThreshold {
    /// Validate and wrap a threshold
    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::invalid_argument(format!(
                "Match threshold must be within [0, 1], got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Raw value
    pub const fn value(self) -> f64 {
        self.0
    }

    /// `score >= threshold`
    pub fn is_met_by(self, score: SimilarityScore) -> bool {
        score.value() >= self.0
    }

    /// `score >= threshold + margin`
    pub fn is_met_with_margin(self, score: SimilarityScore, margin: f64) -> bool {
        score.value() >= self.0 + margin
    }
}

impl Default for MatchThreshold {
    fn default() -> Self {
        Self(DEFAULT_MATCH_THRESHOLD)
    }
}

impl TryFrom<f64> for MatchThreshold {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MatchThreshold> for f64 {
    fn from(threshold: MatchThreshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for MatchThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
