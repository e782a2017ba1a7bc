use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::llm::{ChatError, ChatModel, Conversation};

/// A terminal spinner for indicating progress.
///
/// Automatically clears itself when dropped (RAII pattern). In quiet mode
/// the spinner stays hidden.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a new spinner with the given message.
    pub fn new(message: &str) -> Self {
        if crate::output::is_quiet() {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let progress_bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        progress_bar.set_style(
            style
                .clone()
                .template("{spinner} {msg}")
                .unwrap_or(style),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Stops the spinner and clears it from the terminal.
    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

/// Wraps a chat model and shows a spinner while each request is in flight.
pub struct SpinningChat<'a> {
    inner: &'a dyn ChatModel,
    message: String,
}

impl<'a> SpinningChat<'a> {
    pub fn new(inner: &'a dyn ChatModel, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }
}

#[async_trait]
impl ChatModel for SpinningChat<'_> {
    async fn complete(&self, conversation: &Conversation) -> Result<String, ChatError> {
        let spinner = Spinner::new(&self.message);
        let result = self.inner.complete(conversation).await;
        spinner.stop();
        result
    }
}
