//! Section parser — turns the LLM's plain-text resume output into a `ResumeDraft`.
//!
//! The LLM is instructed to emit fixed section markers (SUMMARY / SKILLS /
//! EXPERIENCE / PROJECTS), `ROLE_ID=` lines, `PROJECT:` lines, and `-`/`•`
//! bullets. Anything that does not fit the format is ignored rather than
//! failing the request; emptiness is judged afterwards by the generator.

use std::collections::HashMap;

use crate::models::draft::{normalize_key, ResumeDraft};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    None,
    Summary,
    Skills,
    Experience,
    Projects,
    /// Education / certifications / achievements — profile-owned, LLM output ignored.
    Other,
}

/// Parses LLM output into draft sections. Never fails; unparseable lines are dropped.
pub fn parse_sections(text: &str) -> ResumeDraft {
    let mut summary_lines: Vec<String> = Vec::new();
    let mut skills: Vec<String> = Vec::new();
    let mut experience: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();
    let mut projects: HashMap<String, Vec<String>> = HashMap::new();

    let mut section = Section::None;
    let mut current_role: Option<String> = None;
    let mut current_project: Option<String> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(next) = match_header(line) {
            section = next;
            current_role = None;
            current_project = None;
            continue;
        }

        match section {
            Section::Summary => summary_lines.push(line.to_string()),

            Section::Skills => {
                // Comma- or pipe-separated list, possibly spread over lines.
                skills.extend(
                    line.split(|c| c == ',' || c == '|')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string),
                );
            }

            Section::Experience => {
                if let Some(idx) = find_marker(line, "role_id=") {
                    let role = normalize_key(&line[idx + "role_id=".len()..]);
                    experience.entry(role.clone()).or_default();
                    current_role = Some(role);
                    current_project = None;
                } else if find_marker(line, "project:") == Some(0) {
                    let title = line["project:".len()..].trim();
                    let project = normalize_key(title);
                    if let Some(role) = &current_role {
                        experience
                            .entry(role.clone())
                            .or_default()
                            .entry(project.clone())
                            .or_default();
                        current_project = Some(project);
                    }
                } else if let Some(bullet) = strip_bullet(line) {
                    if let (Some(role), Some(project)) = (&current_role, &current_project) {
                        if !bullet.is_empty() {
                            experience
                                .entry(role.clone())
                                .or_default()
                                .entry(project.clone())
                                .or_default()
                                .push(bullet.to_string());
                        }
                    }
                }
            }

            Section::Projects => {
                if let Some(bullet) = strip_bullet(line) {
                    if let Some(project) = &current_project {
                        if !bullet.is_empty() {
                            projects
                                .entry(project.clone())
                                .or_default()
                                .push(bullet.to_string());
                        }
                    }
                } else if is_likely_title(line) {
                    let project = normalize_key(line);
                    projects.entry(project.clone()).or_default();
                    current_project = Some(project);
                }
                // Anything else is ignored; never appended to a previous bullet.
            }

            Section::None | Section::Other => {}
        }
    }

    ResumeDraft {
        summary: summary_lines.join("\n"),
        skills: dedupe_preserve_order(skills),
        experience,
        projects,
    }
}

/// Matches a section-header line on its letters only, so "SKILLS:", "Skills"
/// and "## SKILLS" all count.
fn match_header(line: &str) -> Option<Section> {
    let letters: String = line
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    match letters.as_str() {
        "summary" => Some(Section::Summary),
        "skills" => Some(Section::Skills),
        "experience" => Some(Section::Experience),
        "projects" => Some(Section::Projects),
        "education" | "certifications" | "achievements" => Some(Section::Other),
        _ => None,
    }
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `marker`.
/// Offsets are computed on `line` itself, never on a lowercased copy, so they
/// stay valid around non-ASCII characters. Markers are ASCII, which makes both
/// ends of a match char boundaries.
fn find_marker(line: &str, marker: &str) -> Option<usize> {
    line.as_bytes()
        .windows(marker.len())
        .position(|w| w.eq_ignore_ascii_case(marker.as_bytes()))
}

fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .map(str::trim)
}

/// Heuristic for a standalone project title line: short, not sentence-like,
/// not a shouted header.
fn is_likely_title(line: &str) -> bool {
    line.len() <= 80
        && !line.ends_with('.')
        && !line.ends_with(':')
        && !is_all_uppercase(line)
}

fn is_all_uppercase(s: &str) -> bool {
    let mut has_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if c.is_lowercase() {
                return false;
            }
        }
    }
    has_alpha
}

fn dedupe_preserve_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LLM_OUTPUT: &str = "\
SUMMARY:
Full-stack engineer with 5 years building Python and React services.
Delivered measurable reliability gains across cloud platforms.

SKILLS:
Python, React, Docker | Kubernetes, PostgreSQL

EXPERIENCE:
ROLE_ID=softwareengineer
PROJECT: Billing Platform
- Implemented usage-based billing in Python, cutting invoice errors by 35%
- Containerized 4 services with Docker, reducing deploy time by 60%
- Integrated Kubernetes autoscaling, handling 3x traffic spikes

PROJECTS:
Open Source CLI
- Built a Rust CLI with 2k downloads in the first month
- Reduced setup time for new users by 80%
- Shipped 12 releases with automated CI/CD

EDUCATION:
B.Sc. Computer Science, State University
";

    #[test]
    fn test_full_output_parses_all_sections() {
        let draft = parse_sections(LLM_OUTPUT);

        assert!(draft.summary.contains("Full-stack engineer"));
        assert_eq!(draft.summary.lines().count(), 2);

        assert_eq!(
            draft.skills,
            vec!["Python", "React", "Docker", "Kubernetes", "PostgreSQL"]
        );

        let role = draft.experience.get("softwareengineer").unwrap();
        let bullets = role.get("billingplatform").unwrap();
        assert_eq!(bullets.len(), 3);
        assert!(bullets[0].contains("usage-based billing"));

        let project_bullets = draft.projects.get("opensourcecli").unwrap();
        assert_eq!(project_bullets.len(), 3);
    }

    #[test]
    fn test_education_section_is_ignored() {
        let draft = parse_sections(LLM_OUTPUT);
        assert!(!draft.summary.contains("State University"));
        assert!(!draft.skills.iter().any(|s| s.contains("State University")));
    }

    #[test]
    fn test_header_matching_tolerates_decoration() {
        for header in ["SKILLS:", "Skills", "## SKILLS ##", "S K I L L S"] {
            assert_eq!(match_header(header), Some(Section::Skills), "{header}");
        }
        assert_eq!(match_header("SKILLS: Python"), None);
    }

    #[test]
    fn test_unicode_bullets_accepted() {
        let output = "\
EXPERIENCE:
ROLE_ID=engineer
PROJECT: Gateway
• Cut p99 latency by 40% with Redis caching
";
        let draft = parse_sections(output);
        let bullets = draft
            .experience
            .get("engineer")
            .unwrap()
            .get("gateway")
            .unwrap();
        assert_eq!(bullets.len(), 1);
        assert!(bullets[0].starts_with("Cut p99"));
    }

    #[test]
    fn test_bullets_before_any_project_are_dropped() {
        let output = "\
EXPERIENCE:
ROLE_ID=engineer
- Orphan bullet with no project should be dropped entirely
";
        let draft = parse_sections(output);
        let role = draft.experience.get("engineer").unwrap();
        assert!(role.is_empty());
    }

    #[test]
    fn test_skills_dedupe_is_case_insensitive() {
        let output = "\
SKILLS:
Python, python, PYTHON, Docker
";
        let draft = parse_sections(output);
        assert_eq!(draft.skills, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_project_title_heuristic() {
        assert!(is_likely_title("Realtime Chat Server"));
        assert!(!is_likely_title("This is a sentence that ends with a period."));
        assert!(!is_likely_title("Note the trailing colon:"));
        assert!(!is_likely_title("ALL CAPS HEADER"));
        assert!(!is_likely_title(&"x".repeat(100)));
    }

    #[test]
    fn test_projects_prose_is_not_appended_to_bullets() {
        let output = "\
PROJECTS:
Weather Dashboard
- Served 10k users with sub-200ms responses
Here is some trailing explanation text that ends with a period.
";
        let draft = parse_sections(output);
        let bullets = draft.projects.get("weatherdashboard").unwrap();
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn test_role_marker_after_non_ascii_prefix() {
        // Multi-byte characters before the marker must not throw off the
        // offset into the line.
        let output = "\
EXPERIENCE:
\u{130}ROLE_ID=Staff Engineer
PROJECT: Gateway
- Cut p99 latency by 40%
";
        let draft = parse_sections(output);
        let role = draft.experience.get("staffengineer").unwrap();
        assert_eq!(role.get("gateway").unwrap().len(), 1);
    }

    #[test]
    fn test_role_marker_value_may_be_non_ascii() {
        let draft = parse_sections("EXPERIENCE:\n\u{130}ROLE_ID=\u{e9}\n");
        // Normalization strips the non-ASCII value down to an empty key; the
        // point is that parsing completes instead of slicing mid-character.
        assert!(draft.experience.contains_key(""));
    }

    #[test]
    fn test_find_marker_is_case_insensitive() {
        assert_eq!(find_marker("role_id=x", "role_id="), Some(0));
        assert_eq!(find_marker("  ROLE_ID=x", "role_id="), Some(2));
        assert_eq!(find_marker("Project: x", "project:"), Some(0));
        assert_eq!(find_marker("no marker here", "role_id="), None);
    }

    #[test]
    fn test_fullwidth_letters_do_not_match_markers() {
        // U+FF30 FULLWIDTH LATIN CAPITAL LETTER P is not an ASCII 'P'.
        assert_eq!(find_marker("\u{ff30}ROJECT: x", "project:"), None);
    }

    #[test]
    fn test_empty_input_yields_empty_draft() {
        let draft = parse_sections("");
        assert!(draft.is_empty());
    }
}
