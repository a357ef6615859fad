//! Minimal Atlassian Document Format support: the comment body is always a
//! single paragraph holding the formatted text verbatim.

use serde::Serialize;

/// Request body for the Jira "add comment" endpoint.
#[derive(Debug, Serialize)]
pub struct CommentBody {
    pub body: AdfDocument,
}

impl CommentBody {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            body: AdfDocument::paragraph(text),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdfDocument {
    #[serde(rename = "type")]
    kind: &'static str,
    version: u32,
    content: Vec<AdfParagraph>,
}

#[derive(Debug, Serialize)]
struct AdfParagraph {
    #[serde(rename = "type")]
    kind: &'static str,
    content: Vec<AdfText>,
}

#[derive(Debug, Serialize)]
struct AdfText {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

impl AdfDocument {
    /// A version-1 doc with one plain paragraph of text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: "doc",
            version: 1,
            content: vec![AdfParagraph {
                kind: "paragraph",
                content: vec![AdfText {
                    kind: "text",
                    text: text.into(),
                }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comment_body_serializes_to_the_fixed_adf_shape() {
        let body = CommentBody::paragraph("Assessment posted.");

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "body": {
                    "type": "doc",
                    "version": 1,
                    "content": [{
                        "type": "paragraph",
                        "content": [{"type": "text", "text": "Assessment posted."}]
                    }]
                }
            })
        );
    }
}
