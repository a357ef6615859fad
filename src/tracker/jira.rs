use async_trait::async_trait;
use reqwest::Client;

use crate::config::JiraConfig;
use crate::error::{AppError, Result};
use crate::tracker::adf::CommentBody;
use crate::tracker::Tracker;

pub struct JiraClient {
    client: Client,
    site: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(config: &JiraConfig) -> Self {
        Self {
            client: Client::new(),
            // Normalize so comment_url never produces a double slash
            site: config.site.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }

    fn comment_url(&self, issue_key: &str) -> String {
        format!("{}/rest/api/3/issue/{issue_key}/comment", self.site)
    }
}

#[async_trait]
impl Tracker for JiraClient {
    async fn post_comment(&self, issue_key: &str, body: &str) -> Result<()> {
        let payload = CommentBody::paragraph(body);

        let response = self
            .client
            .post(self.comment_url(issue_key))
            .bearer_auth(&self.api_token)
            .header("content-type", "application/json")
            .json(&payload)
            .send()
            .await?;

        // Jira treats some 3xx responses as failures for this endpoint too
        let status = response.status();
        if status.as_u16() >= 300 {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::JiraApi(format!(
                "API returned {status}: {text}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(site: &str) -> JiraClient {
        JiraClient::new(&JiraConfig {
            site: site.to_string(),
            api_token: "test-token".to_string(),
        })
    }

    #[test]
    fn comment_url_targets_the_issue() {
        let client = client_for("https://example.atlassian.net");
        assert_eq!(
            client.comment_url("VRM-42"),
            "https://example.atlassian.net/rest/api/3/issue/VRM-42/comment"
        );
    }

    #[test]
    fn trailing_slash_on_site_is_normalized() {
        let client = client_for("https://example.atlassian.net/");
        assert_eq!(
            client.comment_url("VRM-42"),
            "https://example.atlassian.net/rest/api/3/issue/VRM-42/comment"
        );
    }
}
