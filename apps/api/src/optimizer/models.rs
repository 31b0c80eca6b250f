use serde::{Deserialize, Serialize};

/// Request body for `POST /optimize`.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// A rewritten prompt paired with the model's rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptVariant {
    pub optimized_prompt: String,
    pub reason: Option<String>,
}

/// Structured result returned to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptResponse {
    pub original_prompt: String,
    /// Nominally 0 – 100. Passed through as the model wrote it.
    pub quality_score: i64,
    pub suggestions: Vec<String>,
    pub issues_detected: Vec<String>,
    pub variants: Vec<PromptVariant>,
}
