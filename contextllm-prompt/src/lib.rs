//! # contextllm-prompt
//!
//! Builds generation prompts from the chunks a selection run committed,
//! preserving commit order. The generation API itself is an external
//! collaborator; this crate only assembles its input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use contextllm_core::config::PromptConfig;
use contextllm_core::models::Chunk;

/// One chat message for a generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Assembles prompts from selected context chunks.
pub struct PromptBuilder {
    system_prompt: String,
    include_context_metadata: bool,
}

impl PromptBuilder {
    pub fn new(config: &PromptConfig) -> Self {
        Self {
            system_prompt: config.system_prompt.clone(),
            include_context_metadata: config.include_context_metadata,
        }
    }

    pub fn with_system_prompt(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            include_context_metadata: false,
        }
    }

    /// Format the included chunks, in commit order, as a context section.
    pub fn build_context_section(&self, chunks: &[&Chunk]) -> String {
        if chunks.is_empty() {
            return "No context provided.".to_string();
        }

        let mut parts = vec!["Context:\n".to_string()];
        for (i, chunk) in chunks.iter().enumerate() {
            let source = chunk.source.as_deref().unwrap_or("unknown");
            parts.push(format!("[Context {} from {}]\n{}\n", i + 1, source, chunk.text));
        }
        parts.push("\n---\n".to_string());
        parts.join("\n")
    }

    /// Build chat messages: a system message carrying the context section,
    /// followed by the user query.
    pub fn build_messages(&self, user_query: &str, chunks: &[&Chunk]) -> Vec<ChatMessage> {
        let mut system_content = self.system_prompt.clone();

        if !chunks.is_empty() {
            system_content.push_str("\n\n");
            system_content.push_str(&self.build_context_section(chunks));
            if self.include_context_metadata {
                system_content
                    .push_str(&format!("\nYou have access to {} context chunks.", chunks.len()));
            }
        }

        let messages = vec![
            ChatMessage::system(system_content),
            ChatMessage::user(user_query),
        ];
        debug!(
            chunks = chunks.len(),
            messages = messages.len(),
            "built prompt"
        );
        messages
    }

    /// Flat-text prompt variant.
    pub fn build_simple_prompt(&self, user_query: &str, chunks: &[&Chunk]) -> String {
        format!(
            "{}\n\n{}\nQuestion: {}\nAnswer:",
            self.system_prompt,
            self.build_context_section(chunks),
            user_query
        )
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(&PromptConfig::default())
    }
}
