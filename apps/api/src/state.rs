use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::layout::PageConfig;
use crate::llm_client::LlmClient;
use crate::models::profile::Profile;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client used to fetch job-posting pages.
    pub http: Client,
    pub llm: LlmClient,
    /// Candidate profile loaded once at startup.
    pub profile: Arc<Profile>,
    pub config: Config,
    /// Page dimensions and margins for the PDF renderer.
    pub page_config: PageConfig,
}
