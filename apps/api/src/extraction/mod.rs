//! Keyword extraction — derives the JD keyword set, with optional grey-hat expansion.
//!
//! Extraction is rule-based and deterministic: a static skill lexicon is matched
//! against the JD text and ranked by frequency, then first occurrence. The LLM
//! never decides what counts as a required keyword.

pub mod expansion;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The keyword set derived from one job description. Immutable once produced.
///
/// `required` is identical whether or not grey-hat expansion runs; expansion
/// only ever appends to `expanded`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSet {
    pub required: Vec<String>,
    pub expanded: Vec<String>,
}

/// Canonical skill names matched case-insensitively against the JD text.
/// The entry's casing is what appears in the output.
const SKILL_LEXICON: &[&str] = &[
    // Languages
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "Rust",
    "Go",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Kotlin",
    "Swift",
    "Scala",
    "SQL",
    // Frontend
    "React",
    "Angular",
    "Vue",
    "Next.js",
    "Redux",
    "HTML",
    "CSS",
    "Sass",
    "Tailwind",
    "Webpack",
    "Vite",
    // Backend frameworks
    "Node.js",
    "Express",
    "NestJS",
    "Django",
    "Flask",
    "FastAPI",
    "Spring Boot",
    "Spring",
    "Rails",
    "Laravel",
    "GraphQL",
    "gRPC",
    "REST",
    // Infrastructure
    "Docker",
    "Kubernetes",
    "Helm",
    "Terraform",
    "Ansible",
    "Jenkins",
    "AWS",
    "Azure",
    "GCP",
    "Linux",
    "Git",
    "CI/CD",
    "Nginx",
    // Data stores and streaming
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "Kafka",
    "RabbitMQ",
    "Spark",
    "Hadoop",
    "Airflow",
    "Snowflake",
    // ML / data
    "Pandas",
    "NumPy",
    "PyTorch",
    "TensorFlow",
    "scikit-learn",
    "Machine Learning",
    "Deep Learning",
    "NLP",
    // Practices and concepts
    "Microservices",
    "Distributed Systems",
    "System Design",
    "OAuth",
    "JWT",
    "WebSocket",
    "Agile",
    "TDD",
    // Testing
    "Jest",
    "Cypress",
    "Selenium",
    "JUnit",
    "pytest",
];

/// Extracts the keyword set from JD text.
///
/// `max_expanded` bounds grey-hat expansion (0 disables it even with the flag on).
pub fn extract_keywords(
    jd_text: &str,
    grey_hat: bool,
    max_expanded: usize,
) -> Result<KeywordSet, AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Extraction(
            "job description text is empty".to_string(),
        ));
    }

    let haystack = jd_text.to_lowercase();

    // (canonical name, frequency, first occurrence)
    let mut hits: Vec<(&str, usize, usize)> = Vec::new();
    for skill in SKILL_LEXICON {
        let needle = skill.to_lowercase();
        let (count, first) = count_occurrences(&haystack, &needle);
        if count > 0 {
            hits.push((skill, count, first));
        }
    }

    // Frequency descending, then earliest mention first.
    hits.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let required: Vec<String> = hits.iter().map(|(s, _, _)| s.to_string()).collect();

    let expanded = if grey_hat {
        expansion::expand_skills(&required, max_expanded)
    } else {
        Vec::new()
    };

    Ok(KeywordSet { required, expanded })
}

/// Counts token-boundary occurrences of `needle` in `haystack` (both lowercase).
/// Returns `(count, byte offset of first occurrence)`.
///
/// A match is rejected when it is immediately surrounded by alphanumerics, so
/// "java" does not match inside "javascript".
fn count_occurrences(haystack: &str, needle: &str) -> (usize, usize) {
    let mut count = 0;
    let mut first = 0;
    let mut search_from = 0;

    while let Some(pos) = haystack[search_from..].find(needle) {
        let start = search_from + pos;
        let end = start + needle.len();

        let before_ok = start == 0
            || !haystack.as_bytes()[start - 1].is_ascii_alphanumeric();
        let after_ok = end >= haystack.len()
            || !haystack.as_bytes()[end].is_ascii_alphanumeric();

        if before_ok && after_ok {
            if count == 0 {
                first = start;
            }
            count += 1;
        }
        search_from = end;
    }

    (count, first)
}
