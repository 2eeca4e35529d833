//! Integration tests for the resume matcher

use chrono::Local;
use resume_matcher::config::{Config, MatchingConfig, OutputFormat};
use resume_matcher::history::{HistoryEntry, HistoryStore};
use resume_matcher::input::manager::InputManager;
use resume_matcher::output::{MatchReport, ReportGenerator};
use resume_matcher::pipeline::{run_match, JobSource, MatchRequest};
use resume_matcher::processing::ResumeMatcher;
use resume_matcher::ResumeMatcherError;
use std::path::{Path, PathBuf};

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("CI/CD"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Terraform"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_text_extraction_from_pdf() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.pdf");

    let text = manager.extract_text(path).await.unwrap();

    assert!(text.contains("Python"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;

    assert!(matches!(result, Err(ResumeMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_corrupt_pdf_is_extraction_failure() {
    let manager = InputManager::new();
    let err = manager
        .extract_text(Path::new("tests/fixtures/corrupt.pdf"))
        .await
        .unwrap_err();

    assert!(err.is_extraction_failure());
}

#[tokio::test]
async fn test_pdf_with_undefined_font_is_an_error() {
    let manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/missing_font.pdf"))
        .await;

    assert!(matches!(result, Err(ResumeMatcherError::PdfExtraction(_))));
}

#[tokio::test]
async fn test_empty_document_is_valid_input() {
    let manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/empty.txt")).await.unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let result = ResumeMatcher::default().match_documents(&resume, &job);

    assert_eq!(result.score, 0.0);
    assert!(result.missing_keywords.contains(&"kubernetes".to_string()));
}

#[tokio::test]
async fn test_end_to_end_match() {
    let manager = InputManager::new();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();

    let result = ResumeMatcher::from_config(&MatchingConfig::default()).match_documents(&resume, &job);

    assert!(result.score > 0.0 && result.score < 100.0);
    assert_eq!(result.missing_keywords.first().map(String::as_str), Some("kubernetes"));
    assert!(result.missing_keywords.contains(&"expert".to_string()));
    for covered in ["python", "aws", "terraform", "experience", "skills"] {
        assert!(!result.missing_keywords.contains(&covered.to_string()));
    }
}

#[tokio::test]
async fn test_markdown_and_text_resumes_score_alike() {
    let manager = InputManager::new();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();
    let txt = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let md = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let matcher = ResumeMatcher::default();
    let txt_result = matcher.match_documents(&txt, &job);
    let md_result = matcher.match_documents(&md, &job);

    assert!(md_result.score > 0.0);
    assert_eq!(txt_result.missing_keywords, md_result.missing_keywords);
}

#[test]
fn test_identical_documents_scenario() {
    let doc = "Looking for a Kubernetes expert with Python and AWS experience";
    let result = ResumeMatcher::default().match_documents(doc, doc);

    assert_eq!(result.score, 100.0);
    assert!(result.missing_keywords.is_empty());
}

#[test]
fn test_match_is_recorded_and_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"), 5);

    let result = ResumeMatcher::default().match_documents(
        "Experienced Python developer with AWS and Docker skills",
        "Looking for a Kubernetes expert with Python and AWS experience, strong communication skills",
    );
    let history = store
        .record(HistoryEntry::new("resume.pdf", result.score, Local::now()))
        .unwrap();
    assert_eq!(history.history.len(), 1);
    assert_eq!(history.history[0].score, result.score);

    let report = MatchReport::from_result("resume.pdf", result);
    let json = ReportGenerator::with_options(false, false)
        .generate_report(&report, OutputFormat::Json)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["missing_keywords"], serde_json::json!(["expert", "kubernetes"]));
}

fn config_with_history(history_path: &Path) -> Config {
    let mut config = Config::default();
    config.history.path = history_path.to_path_buf();
    config
}

fn job_file() -> JobSource {
    JobSource::File(PathBuf::from("tests/fixtures/job_description.txt"))
}

#[tokio::test]
async fn test_pipeline_records_successful_match() {
    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("history.json");
    let config = config_with_history(&history_path);

    let request = MatchRequest::new("tests/fixtures/sample_resume.txt", job_file());
    let report = run_match(&request, &config).await.unwrap();

    assert!(!report.is_error());
    assert_eq!(report.missing_keywords.first().map(String::as_str), Some("kubernetes"));

    let history = HistoryStore::new(&history_path, 5).load();
    assert_eq!(history.history.len(), 1);
    assert_eq!(history.history[0].filename, "sample_resume.txt");
    assert_eq!(Some(history.history[0].score), report.score);
}

#[tokio::test]
async fn test_pipeline_extraction_failure_reports_error_without_history() {
    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("history.json");
    let config = config_with_history(&history_path);

    for resume in ["tests/fixtures/corrupt.pdf", "tests/fixtures/missing_font.pdf"] {
        let request = MatchRequest::new(resume, job_file());
        let report = run_match(&request, &config).await.unwrap();

        assert!(report.is_error());
        assert!(report.score.is_none());
        assert!(report.missing_keywords.is_empty());
        assert!(report
            .error
            .as_deref()
            .is_some_and(|message| message.starts_with("Error processing file:")));
    }

    assert!(!history_path.exists());
}

#[tokio::test]
async fn test_pipeline_missing_job_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("history.json");
    let config = config_with_history(&history_path);

    let request = MatchRequest::new(
        "tests/fixtures/sample_resume.txt",
        JobSource::File(PathBuf::from("tests/fixtures/nonexistent.txt")),
    );
    let report = run_match(&request, &config).await.unwrap();

    assert!(report.is_error());
    assert!(!history_path.exists());
}

#[tokio::test]
async fn test_pipeline_skips_history_when_not_requested() {
    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("history.json");
    let config = config_with_history(&history_path);

    let request = MatchRequest::new(
        "tests/fixtures/sample_resume.txt",
        JobSource::Text("Python developer with Kubernetes".to_string()),
    )
    .without_history()
    .with_max_keywords(1);
    let report = run_match(&request, &config).await.unwrap();

    assert!(!report.is_error());
    assert_eq!(report.missing_keywords, vec!["kubernetes"]);
    assert!(!history_path.exists());
}

#[tokio::test]
async fn test_pipeline_respects_disabled_history() {
    let dir = tempfile::tempdir().unwrap();
    let history_path = dir.path().join("history.json");
    let mut config = config_with_history(&history_path);
    config.history.enabled = false;

    let request = MatchRequest::new("tests/fixtures/sample_resume.txt", job_file());
    let report = run_match(&request, &config).await.unwrap();

    assert!(report.score.is_some());
    assert!(!history_path.exists());
}
