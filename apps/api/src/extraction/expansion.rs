//! Grey-hat skill expansion — pads the keyword set with adjacent skills.
//!
//! Each required skill maps to technologies it commonly co-occurs with in real
//! projects. Expansion is a static lookup, bounded by configuration, and only
//! ever ADDS terms: the required set is never touched. Expanded terms carry no
//! correctness guarantee beyond being plausible adjacent skill names.

/// Static co-occurrence table: canonical skill → adjacent skills.
const ADJACENT_SKILLS: &[(&str, &[&str])] = &[
    ("React", &["Redux", "Next.js", "Jest"]),
    ("Angular", &["RxJS", "NgRx", "TypeScript"]),
    ("Vue", &["Vuex", "Nuxt", "Vite"]),
    ("Node.js", &["Express", "NestJS", "npm"]),
    ("Python", &["Pandas", "FastAPI", "pytest"]),
    ("Django", &["Django REST Framework", "Celery", "PostgreSQL"]),
    ("Java", &["Spring Boot", "Maven", "JUnit"]),
    ("Spring Boot", &["Kafka", "Hibernate", "Maven"]),
    ("Rust", &["Tokio", "Cargo", "WebAssembly"]),
    ("Go", &["gRPC", "Protocol Buffers", "Gin"]),
    ("Docker", &["Kubernetes", "Docker Compose", "Helm"]),
    ("Kubernetes", &["Helm", "Istio", "Prometheus"]),
    ("Terraform", &["Ansible", "Packer", "AWS"]),
    ("AWS", &["Terraform", "CloudFormation", "Lambda"]),
    ("GCP", &["BigQuery", "Cloud Run", "Pub/Sub"]),
    ("Azure", &["Azure DevOps", "ARM Templates", "Cosmos DB"]),
    ("PostgreSQL", &["Redis", "SQLAlchemy", "pgBouncer"]),
    ("MongoDB", &["Mongoose", "Redis", "Atlas"]),
    ("Kafka", &["Zookeeper", "Avro", "Kafka Streams"]),
    ("GraphQL", &["Apollo", "Relay", "REST"]),
    ("PyTorch", &["NumPy", "CUDA", "Hugging Face"]),
    ("TensorFlow", &["Keras", "NumPy", "TensorBoard"]),
    ("Machine Learning", &["scikit-learn", "MLflow", "Feature Engineering"]),
    ("Microservices", &["gRPC", "Service Mesh", "API Gateway"]),
    ("CI/CD", &["GitHub Actions", "Jenkins", "ArgoCD"]),
];

/// Returns adjacent skills for the given required set, in required-set order,
/// skipping anything already required and capping the result at `max_expanded`.
pub fn expand_skills(required: &[String], max_expanded: usize) -> Vec<String> {
    let mut expanded: Vec<String> = Vec::new();

    for skill in required {
        if expanded.len() >= max_expanded {
            break;
        }
        let Some((_, adjacent)) = ADJACENT_SKILLS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(skill))
        else {
            continue;
        };

        for candidate in *adjacent {
            if expanded.len() >= max_expanded {
                break;
            }
            let already_required = required
                .iter()
                .any(|r| r.eq_ignore_ascii_case(candidate));
            let already_expanded = expanded
                .iter()
                .any(|e| e.eq_ignore_ascii_case(candidate));
            if !already_required && !already_expanded {
                expanded.push(candidate.to_string());
            }
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_expansion_adds_adjacent_skills() {
        let expanded = expand_skills(&required(&["React"]), 8);
        assert!(expanded.iter().any(|s| s == "Redux"));
        assert!(expanded.iter().any(|s| s == "Next.js"));
    }

    #[test]
    fn test_expansion_skips_already_required() {
        let expanded = expand_skills(&required(&["Docker", "Kubernetes"]), 8);
        // Kubernetes is adjacent to Docker but already required.
        assert!(!expanded.iter().any(|s| s == "Kubernetes"));
        assert!(expanded.iter().any(|s| s == "Helm"));
    }

    #[test]
    fn test_expansion_deduplicates_across_sources() {
        // Helm is adjacent to both Docker and Kubernetes; it must appear once.
        let expanded = expand_skills(&required(&["Docker", "Kubernetes"]), 8);
        assert_eq!(expanded.iter().filter(|s| *s == "Helm").count(), 1);
    }

    #[test]
    fn test_expansion_respects_cap() {
        let expanded = expand_skills(
            &required(&["React", "Python", "Docker", "Kafka", "AWS"]),
            3,
        );
        assert_eq!(expanded.len(), 3);
    }

    #[test]
    fn test_expansion_zero_cap_disables() {
        let expanded = expand_skills(&required(&["React"]), 0);
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_unknown_skill_expands_to_nothing() {
        let expanded = expand_skills(&required(&["COBOL"]), 8);
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let expanded = expand_skills(&required(&["react"]), 8);
        assert!(expanded.iter().any(|s| s == "Redux"));
    }

    #[test]
    fn test_expansion_preserves_required_order_influence() {
        // Adjacents of the first required skill come first.
        let expanded = expand_skills(&required(&["Python", "React"]), 8);
        let pandas_idx = expanded.iter().position(|s| s == "Pandas").unwrap();
        let redux_idx = expanded.iter().position(|s| s == "Redux").unwrap();
        assert!(pandas_idx < redux_idx);
    }
}
