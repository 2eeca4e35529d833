//! Document text extraction
//! Detects file types and turns resume/job description files into plain text

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
