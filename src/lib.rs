//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod processing;

pub use config::Config;
pub use error::{Result, ResumeMatcherError};
pub use processing::{missing_keywords, normalize, score, MatchResult, ResumeMatcher};
