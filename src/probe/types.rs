use serde::{Deserialize, Serialize};
use std::fmt;

/// Where and as whom a probe runs
#[derive(Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Cloud project identifier
    pub project: String,
    /// Region code, used in both the host and the path
    pub location: String,
    /// Bearer credential, passed through untouched
    pub token: String,
}

impl ProbeTarget {
    pub fn new(
        project: impl Into<String>,
        location: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            token: token.into(),
        }
    }
}

// Never leak the token through logs
impl fmt::Debug for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeTarget")
            .field("project", &self.project)
            .field("location", &self.location)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Normalized outcome of a single probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ProbeData>,
}

impl ProbeResult {
    pub fn ok(message: impl Into<String>, data: ProbeData) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Payload attached to a successful probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProbeData {
    /// Model listing summary
    #[serde(rename_all = "camelCase")]
    Models { models_found: usize, sample: String },
    /// Generated acknowledgment
    Generation { output: String, model: String },
}

/// The checks a probe can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeCheck {
    Connect,
    Generate,
}

impl ProbeCheck {
    pub fn label(&self) -> &'static str {
        match self {
            ProbeCheck::Connect => "connect",
            ProbeCheck::Generate => "generate",
        }
    }
}

impl fmt::Display for ProbeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_result_serializes_camel_case_data() {
        let result = ProbeResult::ok(
            "ok",
            ProbeData::Models {
                models_found: 3,
                sample: "publishers/google/models/gemini".to_string(),
            },
        );

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": true,
                "message": "ok",
                "data": { "modelsFound": 3, "sample": "publishers/google/models/gemini" }
            })
        );
    }

    #[test]
    fn test_failed_result_omits_data() {
        let value = serde_json::to_value(ProbeResult::failed("boom")).unwrap();
        assert_eq!(value, json!({ "success": false, "message": "boom" }));
    }

    #[test]
    fn test_target_debug_hides_token() {
        let target = ProbeTarget::new("proj", "us-central1", "ya29.secret");
        let rendered = format!("{:?}", target);
        assert!(rendered.contains("proj"));
        assert!(!rendered.contains("ya29.secret"));
    }
}
