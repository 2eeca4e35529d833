//! Text matching engine: normalization, keyword differencing and similarity scoring

pub mod normalizer;
pub mod stopwords;
pub mod keyword_differ;
pub mod similarity;
pub mod matcher;

pub use keyword_differ::missing_keywords;
pub use matcher::{MatchResult, MatcherSettings, ResumeMatcher};
pub use normalizer::normalize;
pub use similarity::score;
