//! Draft generation — builds the tailoring prompt, calls the LLM, and parses
//! the reply into a `ResumeDraft`.
//!
//! The keyword guarantee lives here, not in the model: after parsing, every
//! required and expanded keyword is merged into the draft's skills list, so the
//! final skills section never depends on the LLM following instructions.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::KeywordSet;
use crate::llm_client::LlmClient;
use crate::models::draft::{normalize_key, ResumeDraft};
use crate::models::profile::Profile;

use super::parser::parse_sections;
use super::prompts::{
    EXPANSION_RULES_GREY_HAT, EXPANSION_RULES_STRICT, GENERATION_PROMPT_TEMPLATE,
};

/// Runs the full generation step: prompt, LLM call, parse, keyword merge.
pub async fn generate_draft(
    llm: &LlmClient,
    profile: &Profile,
    jd_text: &str,
    keywords: &KeywordSet,
    grey_hat: bool,
) -> Result<ResumeDraft, AppError> {
    let prompt = build_generation_prompt(profile, jd_text, keywords, grey_hat)?;

    info!(
        prompt_chars = prompt.len(),
        grey_hat, "Requesting resume draft from LLM"
    );

    let output = llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("resume generation call failed: {e}")))?;

    let mut draft = parse_sections(&output);
    if draft.is_empty() {
        warn!(
            output_chars = output.len(),
            "LLM reply contained no parseable resume sections"
        );
        return Err(AppError::Llm(
            "model output contained no usable resume sections".to_string(),
        ));
    }

    merge_keywords(&mut draft, keywords);

    info!(
        skills = draft.skills.len(),
        roles = draft.experience.len(),
        projects = draft.projects.len(),
        "Parsed resume draft"
    );
    Ok(draft)
}

/// Fills the prompt template with profile data, keywords, and expansion rules.
pub fn build_generation_prompt(
    profile: &Profile,
    jd_text: &str,
    keywords: &KeywordSet,
    grey_hat: bool,
) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("profile serialization failed: {e}")))?;

    let expansion_rules = if grey_hat && !keywords.expanded.is_empty() {
        EXPANSION_RULES_GREY_HAT.replace("{expanded_skills}", &keywords.expanded.join(", "))
    } else {
        EXPANSION_RULES_STRICT.to_string()
    };

    let mut keyword_block = format!("Required: {}", keywords.required.join(", "));
    if !keywords.expanded.is_empty() {
        keyword_block.push_str(&format!(
            "\nAdjacent (frame as working exposure): {}",
            keywords.expanded.join(", ")
        ));
    }

    Ok(GENERATION_PROMPT_TEMPLATE
        .replace("{expansion_rules}", &expansion_rules)
        .replace("{profile_json}", &profile_json)
        .replace("{keywords}", &keyword_block)
        .replace("{jd_text}", jd_text)
        .replace("{experience_template}", &build_experience_template(profile))
        .replace("{projects_template}", &build_projects_template(profile)))
}

/// Skeleton of the EXPERIENCE section the LLM must fill in, with normalized
/// role markers the parser keys on.
fn build_experience_template(profile: &Profile) -> String {
    let mut out = String::new();
    for exp in &profile.experience {
        out.push_str(&format!("ROLE_ID={}\n", normalize_key(&exp.role)));
        for project in &exp.projects {
            out.push_str(&format!("PROJECT: {}\n", project.title));
            for i in 1..=3 {
                out.push_str(&format!(
                    "- [Quantified bullet {i} for {}]\n",
                    project.title
                ));
            }
        }
        out.push('\n');
    }
    out
}

/// Skeleton of the standalone PROJECTS section.
fn build_projects_template(profile: &Profile) -> String {
    let mut out = String::new();
    for project in &profile.projects {
        out.push_str(&format!("{}\n", project.title));
        out.push_str("- [Quantified bullet 1 with tech stack]\n");
        out.push_str("- [Quantified bullet 2 with impact]\n");
        out.push_str("- [Quantified bullet 3 with scale or metrics]\n\n");
    }
    out
}

/// Appends any required or expanded keyword missing from the parsed skills,
/// case-insensitively, preserving the parsed ordering first.
fn merge_keywords(draft: &mut ResumeDraft, keywords: &KeywordSet) {
    for keyword in keywords.required.iter().chain(keywords.expanded.iter()) {
        let present = draft
            .skills
            .iter()
            .any(|s| s.eq_ignore_ascii_case(keyword));
        if !present {
            draft.skills.push(keyword.clone());
        }
    }
}
