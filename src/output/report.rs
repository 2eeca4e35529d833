//! Report structure handed to the formatters

use crate::processing::matcher::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs: the score, the missing keywords and an
/// optional error message when the match could not run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub source_name: String,
    pub score: Option<f64>,
    pub missing_keywords: Vec<String>,
    pub error: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl MatchReport {
    pub fn from_result(source_name: impl Into<String>, result: MatchResult) -> Self {
        Self {
            source_name: source_name.into(),
            score: Some(result.score),
            missing_keywords: result.missing_keywords,
            error: None,
            generated_at: Utc::now(),
        }
    }

    pub fn failed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            score: None,
            missing_keywords: Vec::new(),
            error: Some(message.into()),
            generated_at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Qualitative band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            ScoreBand::Excellent
        } else if score >= 50.0 {
            ScoreBand::Good
        } else if score >= 25.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "EXCELLENT",
            ScoreBand::Good => "GOOD",
            ScoreBand::Fair => "FAIR",
            ScoreBand::Poor => "POOR",
        }
    }
}
