//! HTTP handlers for the resume generation endpoints.
//!
//! Both endpoints run the same pipeline (extract keywords, generate a draft,
//! render a PDF); they differ only in where the JD text comes from. The
//! response body is the finished PDF, served as a download.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::extract_keywords;
use crate::fetch;
use crate::render::render_resume;
use crate::state::AppState;

use super::generator::generate_draft;

const PDF_CONTENT_DISPOSITION: &str = "attachment; filename=\"ATS_Resume.pdf\"";

#[derive(Debug, Deserialize)]
pub struct GenerateFromUrlRequest {
    pub jd_url: String,
    #[serde(default)]
    pub grey_hat: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub jd_text: String,
    #[serde(default)]
    pub grey_hat: bool,
}

/// POST /generate-resume-from-url
/// Fetches the JD page, then runs the generation pipeline.
pub async fn handle_generate_from_url(
    State(state): State<AppState>,
    Json(request): Json<GenerateFromUrlRequest>,
) -> Result<Response, AppError> {
    let url = fetch::parse_jd_url(&request.jd_url)?;
    let jd_text = fetch::fetch_jd(&state.http, &url).await?;
    let pdf = run_pipeline(&state, &jd_text, request.grey_hat).await?;
    Ok(pdf_response(pdf))
}

/// POST /generate-resume
/// Runs the generation pipeline on JD text supplied directly in the request.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Response, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "jd_text must not be empty".to_string(),
        ));
    }
    let pdf = run_pipeline(&state, &request.jd_text, request.grey_hat).await?;
    Ok(pdf_response(pdf))
}

/// Keywords, draft, PDF. Rendering is CPU-bound and runs off the async runtime.
async fn run_pipeline(state: &AppState, jd_text: &str, grey_hat: bool) -> Result<Vec<u8>, AppError> {
    let keywords = extract_keywords(jd_text, grey_hat, state.config.max_expanded_skills)?;
    info!(
        required = keywords.required.len(),
        expanded = keywords.expanded.len(),
        grey_hat,
        "Extracted JD keywords"
    );

    let draft = generate_draft(&state.llm, &state.profile, jd_text, &keywords, grey_hat).await?;

    let profile = Arc::clone(&state.profile);
    let page_config = state.page_config.clone();
    let pdf = tokio::task::spawn_blocking(move || render_resume(&profile, &draft, &page_config))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;

    info!(pdf_bytes = pdf.len(), "Rendered resume PDF");
    Ok(pdf)
}

fn pdf_response(bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, PDF_CONTENT_DISPOSITION),
        ],
        bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::default_page_config;
    use crate::llm_client::LlmClient;

    fn test_state() -> AppState {
        AppState {
            http: reqwest::Client::new(),
            llm: LlmClient::new("test-key".to_string()),
            profile: Arc::new(serde_json::from_str(r#"{"name": "Sam"}"#).unwrap()),
            config: Config {
                gemini_api_key: "test-key".to_string(),
                profile_path: "profile.json".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
                fetch_timeout_secs: 20,
                max_expanded_skills: 8,
            },
            page_config: default_page_config(),
        }
    }

    #[tokio::test]
    async fn test_empty_jd_text_rejected_before_any_network_call() {
        let request = GenerateRequest {
            jd_text: "   \n ".to_string(),
            grey_hat: false,
        };
        let result = handle_generate(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_invalid_jd_url_rejected_before_any_network_call() {
        let request = GenerateFromUrlRequest {
            jd_url: "not a url".to_string(),
            grey_hat: false,
        };
        let result = handle_generate_from_url(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_grey_hat_defaults_to_false() {
        let req: GenerateFromUrlRequest =
            serde_json::from_str(r#"{"jd_url": "https://example.com/job"}"#).unwrap();
        assert!(!req.grey_hat);

        let req: GenerateRequest =
            serde_json::from_str(r#"{"jd_text": "We need Python engineers."}"#).unwrap();
        assert!(!req.grey_hat);
    }

    #[test]
    fn test_grey_hat_flag_parses() {
        let req: GenerateFromUrlRequest =
            serde_json::from_str(r#"{"jd_url": "https://example.com/job", "grey_hat": true}"#)
                .unwrap();
        assert!(req.grey_hat);
    }

    #[test]
    fn test_missing_jd_url_is_a_deserialize_error() {
        let result = serde_json::from_str::<GenerateFromUrlRequest>(r#"{"grey_hat": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pdf_response_headers() {
        let response = pdf_response(b"%PDF-1.3 fake".to_vec());
        let headers = response.headers();
        assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/pdf");
        assert_eq!(
            headers.get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"ATS_Resume.pdf\""
        );
    }
}
