//! Stopword sets used by the matching engine
//!
//! Two independent lists exist. The keyword differ ignores resume and job
//! posting boilerplate; the similarity vectorizer drops standard English
//! function words. Neither consults the other.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Generic words and resume/job-posting boilerplate never reported as missing
const RESUME_BOILERPLATE: &[&str] = &[
    "and", "the", "is", "in", "at", "of", "a", "to", "for", "with", "on", "by", "an", "be", "it",
    "this", "that", "are", "from", "or", "as", "but", "not", "can", "will", "has", "have", "do",
    "we", "you", "your", "my", "job", "description", "role", "work", "experience", "candidate",
    "skills", "team", "responsibilities", "requirements", "qualifications", "preferred", "plus",
    "proficiency", "proficient", "ideal", "title", "summary", "years", "degree", "bachelor",
    "masters", "university", "knowledge", "strong", "ability", "platforms", "build", "create",
    "design", "deploy", "support", "maintain", "ensure", "looking", "seeking", "opportunity",
    "excellent", "communication", "track", "record", "proven", "field", "related", "computer",
    "science", "engineering", "application", "applications", "systems", "solutions", "tasks",
];

/// Standard English stopword list applied during TF-IDF vectorization
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or",
    "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part",
    "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together", "too",
    "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon",
    "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

static RESUME_STOPWORDS: Lazy<HashSet<String>> =
    Lazy::new(|| RESUME_BOILERPLATE.iter().map(|s| s.to_string()).collect());

static VECTORIZER_STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Ignore list used when reporting missing keywords
pub fn resume_stopwords() -> &'static HashSet<String> {
    &RESUME_STOPWORDS
}

/// Ignore list extended with caller-supplied words (lowercased)
pub fn resume_stopwords_with(extra: &[String]) -> HashSet<String> {
    let mut stopwords = (*RESUME_STOPWORDS).clone();
    stopwords.extend(
        extra
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty()),
    );
    stopwords
}

/// Whether `token` is dropped by the similarity vectorizer
pub fn is_english_stopword(token: &str) -> bool {
    VECTORIZER_STOPWORDS.contains(token)
}
