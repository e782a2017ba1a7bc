//! Task drivers: each one builds prompts, asks a [`ChatModel`] and shapes the reply.
//!
//! [`ChatModel`]: crate::llm::ChatModel

mod list;
mod loop_code;
mod selector;
mod translator;

use thiserror::Error;

use crate::interact::InteractionError;
use crate::llm::ChatError;
use crate::prompt::PromptError;

pub use list::{
    COMMA_LIST_SYSTEM_PROMPT, DEFAULT_CATEGORY, DEFAULT_PREDICTION_TEXT,
    generate_comma_separated_list, predict,
};
pub use loop_code::{DEFAULT_LOOP_LANGUAGES, LOOP_CODE_TEMPLATE, LoopCodeGenerator};
pub use selector::{LANGUAGE_LIST_INSTRUCTION, LanguageSelector};
pub use translator::{
    DEFAULT_INPUT_LANGUAGE, DEFAULT_PERSONA, DEFAULT_SOURCE_TEXT, LanguageEntry, LanguageTable,
    PERSONA_SYSTEM_TEMPLATE, TRANSLATION_SYSTEM_TEMPLATE, TextTranslator, TranslationMap,
};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("unknown language key '{0}'")]
    UnknownLanguageKey(char),
    #[error("selection {index} is out of range (choose 1-{len})")]
    SelectionOutOfRange { index: usize, len: usize },
    #[error("invalid selection '{0}': expected a number")]
    InvalidSelection(String),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error(transparent)]
    Interaction(#[from] InteractionError),
}

/// Looks up a 1-based `index` in `items`.
pub fn select_one_based(items: &[String], index: usize) -> Result<&str, TaskError> {
    index
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .map(String::as_str)
        .ok_or(TaskError::SelectionOutOfRange {
            index,
            len: items.len(),
        })
}

/// Parses a typed 1-based menu choice and looks it up in `items`.
pub fn parse_selection<'a>(items: &'a [String], input: &str) -> Result<&'a str, TaskError> {
    let index: usize = input
        .trim()
        .parse()
        .map_err(|_| TaskError::InvalidSelection(input.trim().to_string()))?;
    select_one_based(items, index)
}

/// Formats items as a numbered menu, starting at 1.
pub fn numbered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect()
}
