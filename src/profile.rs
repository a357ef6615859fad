use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Sentinel substituted for any profile field the submitter left out.
pub const MISSING_FIELD: &str = "[Not Provided]";

/// Incoming assessment request: the target Jira issue plus the vendor
/// profile as a flat mapping of named fields.
#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub issue_id: String,
    #[serde(flatten)]
    pub profile: VendorProfile,
}

#[derive(Debug, Default, Deserialize)]
pub struct VendorProfile {
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl VendorProfile {
    /// Look up a profile field for prompt substitution. Absent, null, and
    /// blank values all render as the sentinel; non-string JSON values are
    /// rendered in their JSON form.
    pub fn field(&self, name: &str) -> Cow<'_, str> {
        match self.fields.get(name) {
            None | Some(Value::Null) => Cow::Borrowed(MISSING_FIELD),
            Some(Value::String(s)) if s.trim().is_empty() => Cow::Borrowed(MISSING_FIELD),
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_splits_issue_id_from_profile_fields() {
        let request: AssessmentRequest = serde_json::from_value(json!({
            "issue_id": "VRM-42",
            "vendor_name": "Acme Corp",
            "vendor_website": "https://acme.example"
        }))
        .unwrap();

        assert_eq!(request.issue_id, "VRM-42");
        assert_eq!(request.profile.field("vendor_name"), "Acme Corp");
        assert_eq!(request.profile.field("vendor_website"), "https://acme.example");
    }

    #[test]
    fn missing_null_and_blank_fields_render_the_sentinel() {
        let profile: VendorProfile = serde_json::from_value(json!({
            "vendor_litigation_summary": null,
            "vendor_ownership_structure": "   "
        }))
        .unwrap();

        assert_eq!(profile.field("vendor_name"), MISSING_FIELD);
        assert_eq!(profile.field("vendor_litigation_summary"), MISSING_FIELD);
        assert_eq!(profile.field("vendor_ownership_structure"), MISSING_FIELD);
    }

    #[test]
    fn non_string_values_render_in_json_form() {
        let profile: VendorProfile = serde_json::from_value(json!({
            "vendor_inherent_risk_score": 7
        }))
        .unwrap();

        assert_eq!(profile.field("vendor_inherent_risk_score"), "7");
    }
}
