//! Resume to job description matching

use crate::config::MatchingConfig;
use crate::processing::keyword_differ::missing_keywords;
use crate::processing::similarity::score;
use crate::processing::stopwords::resume_stopwords_with;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only settings for the keyword differ
#[derive(Debug, Clone)]
pub struct MatcherSettings {
    pub stopwords: HashSet<String>,
    pub min_keyword_length: usize,
    pub max_keywords: usize,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            stopwords: resume_stopwords_with(&[]),
            min_keyword_length: 2,
            max_keywords: 15,
        }
    }
}

impl From<&MatchingConfig> for MatcherSettings {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            stopwords: resume_stopwords_with(&config.extra_stopwords),
            min_keyword_length: config.min_keyword_length,
            max_keywords: config.max_keywords,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Similarity percentage in [0, 100], two decimals
    pub score: f64,
    pub missing_keywords: Vec<String>,
}

/// Scores a resume against a job description and lists missing keywords
#[derive(Debug, Clone, Default)]
pub struct ResumeMatcher {
    settings: MatcherSettings,
}

impl ResumeMatcher {
    pub fn new(settings: MatcherSettings) -> Self {
        Self { settings }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(MatcherSettings::from(config))
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.settings.max_keywords = max_keywords;
        self
    }

    pub fn settings(&self) -> &MatcherSettings {
        &self.settings
    }

    pub fn match_documents(&self, resume_text: &str, job_description: &str) -> MatchResult {
        let missing_keywords = missing_keywords(
            resume_text,
            job_description,
            &self.settings.stopwords,
            self.settings.min_keyword_length,
            self.settings.max_keywords,
        );
        let score = score(resume_text, job_description);

        debug!(
            "Match score {:.2} with {} missing keywords",
            score,
            missing_keywords.len()
        );

        MatchResult {
            score,
            missing_keywords,
        }
    }
}
