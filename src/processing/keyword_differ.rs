//! Job description vocabulary missing from a resume

use crate::processing::normalizer::normalized_tokens;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Tokens of `job_description` that never appear in `resume_text`.
///
/// Both texts are normalized before comparison, so case and punctuation
/// never produce a false report. Tokens must be longer than `min_length`
/// and absent from `stopwords`. Results are ordered by descending frequency
/// in the job description, ties alphabetically, and capped at `max_results`.
/// No stemming is applied: "skill" and "skills" are different tokens.
pub fn missing_keywords(
    resume_text: &str,
    job_description: &str,
    stopwords: &HashSet<String>,
    min_length: usize,
    max_results: usize,
) -> Vec<String> {
    let job_tokens = normalized_tokens(job_description);
    if job_tokens.is_empty() || max_results == 0 {
        return Vec::new();
    }

    let resume_tokens: HashSet<String> = normalized_tokens(resume_text).into_iter().collect();

    let mut job_frequency: HashMap<String, usize> = HashMap::new();
    for token in job_tokens {
        *job_frequency.entry(token).or_insert(0) += 1;
    }

    let mut missing: Vec<(String, usize)> = job_frequency
        .into_iter()
        .filter(|(token, _)| !resume_tokens.contains(token))
        .filter(|(token, _)| token.len() > min_length && !stopwords.contains(token))
        .collect();

    debug!(
        "{} candidate missing keywords against {} resume tokens",
        missing.len(),
        resume_tokens.len()
    );

    missing.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    missing
        .into_iter()
        .take(max_results)
        .map(|(token, _)| token)
        .collect()
}
