//! Prompt builder: the analyst system instruction plus the user question.
//!
//! Every invocation produces exactly two messages, `system` first and
//! `user` second. The system message embeds the canonical serialization of
//! the full record collection verbatim, so the model only ever sees the
//! dataset the caller supplied.

use drone_data::ImageRecord;
use serde::Serialize;

/// One chat message as the completion API expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    /// `"system"` or `"user"`; no other roles are produced.
    pub role: &'static str,
    pub content: String,
}

/// The single canonical textual encoding of the dataset.
///
/// Compact JSON with the field order of [`ImageRecord`]. The same bytes end
/// up inside the system prompt, which keeps the embedded prompt text
/// deterministic and testable without any upstream call.
pub fn serialize_dataset(records: &[ImageRecord]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

/// Builds the analyst instruction around the serialized dataset.
fn system_prompt(dataset_json: &str) -> String {
    format!(
        "You are a drone data analyst. The user will ask questions specifically about \
         the provided drone data. You have access to the following drone data: {dataset_json}. \
         Ensure your responses are limited to this dataset and provide clear and concise \
         information based on the user's query. If you're going to reference an image, \
         reference it by its ID."
    )
}

/// Builds the two-message sequence for one question.
pub fn build_messages(question: &str, records: &[ImageRecord]) -> Vec<PromptMessage> {
    vec![
        PromptMessage {
            role: "system",
            content: system_prompt(&serialize_dataset(records)),
        },
        PromptMessage {
            role: "user",
            content: question.to_string(),
        },
    ]
}
