pub mod adf;
pub mod jira;

use async_trait::async_trait;

use crate::error::Result;

pub use jira::JiraClient;

#[async_trait]
pub trait Tracker: Send + Sync {
    /// Post a comment on an issue.
    async fn post_comment(&self, issue_key: &str, body: &str) -> Result<()>;
}
