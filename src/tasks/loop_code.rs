use tracing::debug;

use super::{TaskError, numbered, parse_selection};
use crate::interact::Interaction;
use crate::llm::{ChatModel, Conversation, Message};
use crate::prompt::PromptTemplate;

pub const LOOP_CODE_TEMPLATE: &str =
    "Generate a loop in {language} that prints the text '{text}' {repetitions} times";

pub const DEFAULT_LOOP_LANGUAGES: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "C",
    "C++",
    "Rust",
    "Go",
    "Ruby",
];

/// Generates loop code in one of a fixed list of candidate languages.
pub struct LoopCodeGenerator<'a> {
    chat: &'a dyn ChatModel,
    languages: Vec<String>,
    template: PromptTemplate,
}

impl<'a> LoopCodeGenerator<'a> {
    pub fn new(chat: &'a dyn ChatModel) -> Self {
        Self::with_languages(
            chat,
            DEFAULT_LOOP_LANGUAGES.iter().map(ToString::to_string).collect(),
        )
    }

    pub fn with_languages(chat: &'a dyn ChatModel, languages: Vec<String>) -> Self {
        Self {
            chat,
            languages,
            template: PromptTemplate::new(LOOP_CODE_TEMPLATE),
        }
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn menu(&self) -> Vec<String> {
        numbered(&self.languages)
    }

    /// Resolves a typed 1-based menu choice.
    pub fn select(&self, input: &str) -> Result<&str, TaskError> {
        parse_selection(&self.languages, input)
    }

    /// Asks for a menu choice. Bad input is an error, not a re-prompt.
    pub fn choose_language(&self, interaction: &mut dyn Interaction) -> Result<&str, TaskError> {
        let question = format!("Select a language (1-{}):", self.languages.len());
        let answer = interaction.ask(&question)?;
        self.select(&answer)
    }

    /// Returns the model's reply verbatim; no code extraction or validation.
    pub async fn generate_loop_code(
        &self,
        text: &str,
        repetitions: u32,
        language: &str,
    ) -> Result<String, TaskError> {
        let repetitions = repetitions.to_string();
        let instruction = self.template.render(&[
            ("language", language),
            ("text", text),
            ("repetitions", repetitions.as_str()),
        ])?;
        debug!(language, "generating loop code");
        let conversation = Conversation::single(Message::system(instruction));
        Ok(self.chat.complete(&conversation).await?)
    }
}
