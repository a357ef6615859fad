use std::sync::Arc;

use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::llm::OpenAiClient;
use crate::tracker::JiraClient;

pub struct AppState {
    pub config: AppConfig,
    pub completion: OpenAiClient,
    pub tracker: JiraClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> crate::error::Result<Self> {
        if !config.jira.site.starts_with("http") {
            return Err(AppError::Config(format!(
                "Jira site must be an absolute URL: {}",
                config.jira.site
            )));
        }

        let completion = OpenAiClient::new(config.openai_api_key(), &config.openai.model);
        let tracker = JiraClient::new(&config.jira);

        Ok(Self {
            config,
            completion,
            tracker,
        })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/assess", post(crate::handler::handle_assessment))
        .route("/health", axum::routing::get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "ok"
}
