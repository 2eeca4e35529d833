//! TF-IDF vectorization and cosine similarity scoring

use crate::processing::normalizer::normalize;
use crate::processing::stopwords::is_english_stopword;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap, HashSet};

// Runs of two or more word characters
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid token regex"));

/// TF-IDF vectorizer over a small in-memory corpus.
///
/// Term weight is the raw count in a document multiplied by the smoothed
/// inverse document frequency `ln((1 + n) / (1 + df)) + 1`. Each document
/// vector is L2-normalized. Vocabulary columns are ordered alphabetically.
#[derive(Debug, Default)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase, split on the token pattern and drop English stopwords
    pub fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| !is_english_stopword(token))
            .map(str::to_string)
            .collect()
    }

    /// Learn the vocabulary and IDF weights from `documents` and return
    /// one weight vector per document.
    pub fn fit_transform(&mut self, documents: &[&str]) -> Vec<Vec<f64>> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| Self::tokenize(d)).collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let n_documents = documents.len() as f64;
        self.vocabulary = document_frequency
            .keys()
            .enumerate()
            .map(|(index, token)| (token.to_string(), index))
            .collect();
        self.idf = document_frequency
            .values()
            .map(|&df| ((1.0 + n_documents) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        debug!(
            "Vectorized {} documents over {} terms",
            documents.len(),
            self.vocabulary_size()
        );

        tokenized.iter().map(|tokens| self.weigh(tokens)).collect()
    }

    fn weigh(&self, tokens: &[String]) -> Vec<f64> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = vec![0.0; self.vocabulary.len()];
        for (index, count) in counts {
            vector[index] = count * self.idf[index];
        }

        let norm = l2_norm(&vector);
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }
        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine of the angle between two vectors; 0.0 if either is all-zero
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    dot / (norm_a * norm_b)
}

/// Similarity of a resume to a job description as a percentage in [0, 100],
/// rounded to two decimals.
///
/// Either text being empty or whitespace-only yields 0.0 without
/// vectorizing. Both texts are normalized before vectorization.
pub fn score(resume_text: &str, job_description: &str) -> f64 {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return 0.0;
    }

    let clean_resume = normalize(resume_text);
    let clean_job = normalize(job_description);

    let mut vectorizer = TfidfVectorizer::new();
    let vectors = vectorizer.fit_transform(&[clean_resume.as_str(), clean_job.as_str()]);

    let similarity = cosine_similarity(&vectors[0], &vectors[1]);
    round_percentage(similarity * 100.0)
}

fn round_percentage(value: f64) -> f64 {
    (value.clamp(0.0, 100.0) * 100.0).round() / 100.0
}
