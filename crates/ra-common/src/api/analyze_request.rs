use serde::{Deserialize, Serialize};

/// Fallback account used by clients that have not set up users yet.
pub const DEFAULT_USER_ID: &str = "demoUser";

/// Analyze request body. `resume_text` is plain text already extracted from
/// the uploaded document by the extraction service; this API never sees the
/// original file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub job_description: Option<String>,
    pub resume_text: String,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
}

impl AnalyzeRequest {
    pub fn user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
    }

    pub fn job_description(&self) -> &str {
        self.job_description.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body_deserializes() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"resume_text": "some resume"}"#).unwrap();
        assert_eq!(request.resume_text, "some resume");
        assert_eq!(request.user_id(), DEFAULT_USER_ID);
        assert_eq!(request.job_description(), "");
    }

    #[test]
    fn accepts_camel_case_user_id() {
        let request: AnalyzeRequest =
            serde_json::from_str(r#"{"resume_text": "x", "userId": "u-1"}"#).unwrap();
        assert_eq!(request.user_id(), "u-1");
    }
}
