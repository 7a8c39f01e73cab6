//! User-facing alerts, option sheets and text prompts.

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    Default,
    Destructive,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOption {
    pub label: String,
    pub style: PromptStyle,
}

impl PromptOption {
    pub fn new(label: impl Into<String>, style: PromptStyle) -> Self {
        Self {
            label: label.into(),
            style,
        }
    }
}

/// Option sheet; the host returns the chosen index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub message: String,
    pub options: Vec<PromptOption>,
}

#[async_trait]
pub trait AlertPresenter: Send + Sync {
    /// Shows an informational alert and waits for it to be dismissed.
    async fn alert(&self, title: &str, message: &str);
    /// Returns the chosen option index, or `None` when dismissed.
    async fn choose(&self, prompt: &Prompt) -> Option<usize>;
    /// Returns entered text, or `None` when cancelled.
    async fn prompt_text(&self, title: &str, message: &str, default_value: &str) -> Option<String>;
}
