use tracing::debug;

use super::{TaskError, numbered, select_one_based};
use crate::llm::{ChatModel, Conversation, Message};
use crate::parser::parse_comma_separated;

pub const LANGUAGE_LIST_INSTRUCTION: &str =
    "List a variety of programming languages including common, uncommon, old, and esoteric ones.";

const LANGUAGE_LIST_SYSTEM_PROMPT: &str =
    "You are a helpful assistant who generates comma separated lists. \
     ONLY return a comma separated list, and nothing more.";

/// A list of programming languages suggested by the model.
///
/// Whatever the model returns is split on `", "` and kept as-is, so a reply
/// that ignores the list format yields odd entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSelector {
    languages: Vec<String>,
}

impl LanguageSelector {
    /// Asks the model once for the language list.
    pub async fn fetch(chat: &dyn ChatModel) -> Result<Self, TaskError> {
        let conversation = Conversation::new(vec![
            Message::system(LANGUAGE_LIST_SYSTEM_PROMPT),
            Message::user(LANGUAGE_LIST_INSTRUCTION),
        ]);
        let reply = chat.complete(&conversation).await?;
        let languages = parse_comma_separated(&reply);
        debug!(count = languages.len(), "fetched programming languages");
        Ok(Self { languages })
    }

    pub const fn from_languages(languages: Vec<String>) -> Self {
        Self { languages }
    }

    /// Returns the language at 1-based `index`.
    pub fn get(&self, index: usize) -> Result<&str, TaskError> {
        select_one_based(&self.languages, index)
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn into_languages(self) -> Vec<String> {
        self.languages
    }

    /// Numbered menu lines, starting at 1.
    pub fn menu(&self) -> Vec<String> {
        numbered(&self.languages)
    }

    pub fn print_all(&self) {
        for line in self.menu() {
            println!("{line}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::llm::Role;
    use crate::llm::fake::ScriptedChat;

    #[tokio::test]
    async fn test_fetch_splits_reply() {
        let chat = ScriptedChat::new(["Python, COBOL, Brainfuck, Rust\n"]);
        let selector = LanguageSelector::fetch(&chat).await.unwrap();

        assert_eq!(selector.languages(), ["Python", "COBOL", "Brainfuck", "Rust"]);
        assert_eq!(selector.get(2).unwrap(), "COBOL");
        assert_eq!(selector.get(4).unwrap(), "Rust");
        assert!(matches!(
            selector.get(5),
            Err(TaskError::SelectionOutOfRange { index: 5, len: 4 })
        ));

        let received = chat.received();
        let messages = received[0].messages();
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, LANGUAGE_LIST_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_fetch_keeps_malformed_reply() {
        let chat = ScriptedChat::new(["Here are some languages:\n1. Python\n2. Ada"]);
        let selector = LanguageSelector::fetch(&chat).await.unwrap();
        assert_eq!(selector.languages().len(), 1);
        assert!(selector.languages()[0].starts_with("Here are"));
    }

    #[test]
    fn test_menu() {
        let selector =
            LanguageSelector::from_languages(vec!["Python".to_string(), "Java".to_string()]);
        assert_eq!(selector.menu(), vec!["1. Python", "2. Java"]);
        assert_eq!(selector.get(1).unwrap(), "Python");
        assert!(selector.get(3).is_err());
    }
}
