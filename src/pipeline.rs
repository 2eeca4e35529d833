//! End-to-end match flow shared by the CLI and tests
//!
//! Extraction failures become an error report: the matcher is not run and
//! nothing is written to history. Any other failure is returned as `Err`.

use crate::cli::{self, MatchArgs};
use crate::config::Config;
use crate::error::{Result, ResumeMatcherError};
use crate::history::{HistoryEntry, HistoryStore};
use crate::input::manager::{source_name, InputManager};
use crate::output::MatchReport;
use crate::processing::ResumeMatcher;
use chrono::Local;
use log::{info, warn};
use std::path::PathBuf;

/// Where the job description comes from
#[derive(Debug, Clone, PartialEq)]
pub enum JobSource {
    File(PathBuf),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub resume: PathBuf,
    pub job: JobSource,
    pub max_keywords: Option<usize>,
    pub record_history: bool,
}

impl MatchRequest {
    pub fn new(resume: impl Into<PathBuf>, job: JobSource) -> Self {
        Self {
            resume: resume.into(),
            job,
            max_keywords: None,
            record_history: true,
        }
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = Some(max_keywords);
        self
    }

    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }

    /// Build a request from `match` arguments, checking file extensions
    pub fn from_args(args: &MatchArgs) -> Result<Self> {
        cli::validate_file_extension(&args.resume, &["pdf", "txt", "md"])
            .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;

        let job = match (&args.job, &args.job_text) {
            (Some(path), _) => {
                cli::validate_file_extension(path, &["txt", "md"]).map_err(|e| {
                    ResumeMatcherError::InvalidInput(format!("Job description file: {}", e))
                })?;
                JobSource::File(path.clone())
            }
            (None, Some(text)) => JobSource::Text(text.clone()),
            (None, None) => {
                return Err(ResumeMatcherError::InvalidInput(
                    "A job description file or text is required".to_string(),
                ))
            }
        };

        Ok(Self {
            resume: args.resume.clone(),
            job,
            max_keywords: args.max_keywords,
            record_history: !args.no_history,
        })
    }
}

/// Extract both documents, score them and record the result.
///
/// History is written only for a successful match, and only when it is
/// enabled in `config` and requested by `request`.
pub async fn run_match(request: &MatchRequest, config: &Config) -> Result<MatchReport> {
    info!("Starting resume match");

    let resume_name = source_name(&request.resume);
    let (resume_text, job_text) = match extract_inputs(request).await {
        Ok(texts) => texts,
        Err(e) if e.is_extraction_failure() => {
            warn!("Extraction failed for {}: {}", resume_name, e);
            return Ok(MatchReport::failed(
                resume_name,
                format!("Error processing file: {}", e),
            ));
        }
        Err(e) => return Err(e),
    };

    let mut matcher = ResumeMatcher::from_config(&config.matching);
    if let Some(max_keywords) = request.max_keywords {
        matcher = matcher.with_max_keywords(max_keywords);
    }

    let result = matcher.match_documents(&resume_text, &job_text);
    let score = result.score;

    if config.history.enabled && request.record_history {
        let store = HistoryStore::new(&config.history.path, config.history.max_entries);
        store.record(HistoryEntry::new(resume_name.as_str(), score, Local::now()))?;
    }

    Ok(MatchReport::from_result(resume_name, result))
}

async fn extract_inputs(request: &MatchRequest) -> Result<(String, String)> {
    let input_manager = InputManager::new();
    let resume_text = input_manager.extract_text(&request.resume).await?;

    let job_text = match &request.job {
        JobSource::File(path) => input_manager.extract_text(path).await?,
        JobSource::Text(text) => text.clone(),
    };

    Ok((resume_text, job_text))
}
