use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TaskError;
use crate::interact::{Interaction, is_affirmative};
use crate::llm::ChatModel;
use crate::prompt::ChatPromptTemplate;

pub const TRANSLATION_SYSTEM_TEMPLATE: &str =
    "You are a helpful assistant that translates {input_language} to {output_language}.";

pub const TRANSLATION_HUMAN_TEMPLATE: &str = "{text}";

/// The text translated when none is configured.
///
/// The braces are part of the text: values are never expanded a second time.
pub const DEFAULT_SOURCE_TEXT: &str =
    "You are a helpful assistant that translates {input_language} to {output_language}";

pub const DEFAULT_INPUT_LANGUAGE: &str = "English";

pub const DEFAULT_PERSONA: &str =
    "Skippy the Magnificent, a sarcastic, arrogant and brilliant alien AI";

pub const PERSONA_SYSTEM_TEMPLATE: &str = "You are {persona}. Stay in character and respond \
     in {input_language} to whatever the user says.";

/// One entry of a [`LanguageTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub key: char,
    pub name: String,
}

/// Ordered mapping from a one-character key to a language display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    entries: Vec<LanguageEntry>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::from_pairs([
            ('S', "Spanish"),
            ('H', "Hebrew"),
            ('Y', "Yiddish"),
            ('K', "Klingon"),
        ])
    }
}

impl LanguageTable {
    /// Builds a table in the given order. A repeated key keeps its first
    /// position and takes the last name.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (key, name) in pairs {
            table.insert(key, name.into());
        }
        table
    }

    pub fn from_entries(entries: Vec<LanguageEntry>) -> Self {
        Self::from_pairs(entries.into_iter().map(|e| (e.key, e.name)))
    }

    /// The default table plus `E` for English.
    pub fn with_english() -> Self {
        let mut table = Self::default();
        table.insert('E', "English".to_string());
        table
    }

    fn insert(&mut self, key: char, name: String) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) {
            entry.name = name;
        } else {
            self.entries.push(LanguageEntry { key, name });
        }
    }

    pub fn get(&self, key: char) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|e| (e.key, e.name.as_str()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Translations keyed by language display name, in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationMap {
    entries: Vec<(String, String)>,
}

impl TranslationMap {
    pub fn insert(&mut self, language: impl Into<String>, translation: impl Into<String>) {
        let language = language.into();
        let translation = translation.into();
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == language) {
            entry.1 = translation;
        } else {
            self.entries.push((language, translation));
        }
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == language)
            .map(|(_, t)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }

    pub fn languages(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Translates a fixed source text into every language of a [`LanguageTable`].
pub struct TextTranslator<'a> {
    chat: &'a dyn ChatModel,
    input_language: String,
    languages: LanguageTable,
    text: String,
    persona: String,
    prompt: ChatPromptTemplate,
}

impl<'a> TextTranslator<'a> {
    pub fn new(chat: &'a dyn ChatModel) -> Self {
        Self {
            chat,
            input_language: DEFAULT_INPUT_LANGUAGE.to_string(),
            languages: LanguageTable::default(),
            text: DEFAULT_SOURCE_TEXT.to_string(),
            persona: DEFAULT_PERSONA.to_string(),
            prompt: ChatPromptTemplate::new(
                TRANSLATION_SYSTEM_TEMPLATE,
                TRANSLATION_HUMAN_TEMPLATE,
            ),
        }
    }

    #[must_use]
    pub fn with_languages(mut self, languages: LanguageTable) -> Self {
        self.languages = languages;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_input_language(mut self, input_language: impl Into<String>) -> Self {
        self.input_language = input_language.into();
        self
    }

    #[must_use]
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    pub const fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn input_language(&self) -> &str {
        &self.input_language
    }

    /// Translates the source text into the language stored under `key`.
    pub async fn translate_one(&self, key: char) -> Result<String, TaskError> {
        let output_language = self
            .languages
            .get(key)
            .ok_or(TaskError::UnknownLanguageKey(key))?;
        self.translate_text(&self.text, output_language).await
    }

    /// Translates into every language, in table order.
    pub async fn translate_all(&self) -> Result<TranslationMap, TaskError> {
        let mut translations = TranslationMap::default();
        for (key, language) in self.languages.iter() {
            let translation = self.translate_one(key).await?;
            translations.insert(language, translation);
        }
        Ok(translations)
    }

    /// Like [`translate_all`](Self::translate_all), but asks before each
    /// language. Declined languages are left out of the result.
    pub async fn translate_each(
        &self,
        interaction: &mut dyn Interaction,
    ) -> Result<TranslationMap, TaskError> {
        let mut translations = TranslationMap::default();
        for (key, language) in self.languages.iter() {
            let answer = interaction.ask(&format!("Translate to {language}? (yes/no)"))?;
            if !is_affirmative(&answer) {
                debug!(language, "translation declined");
                continue;
            }
            let translation = self.translate_one(key).await?;
            translations.insert(language, translation);
        }
        Ok(translations)
    }

    /// Asks the model to answer the source text in character as the persona.
    pub async fn respond_in_character(&self) -> Result<String, TaskError> {
        let prompt = ChatPromptTemplate::new(PERSONA_SYSTEM_TEMPLATE, TRANSLATION_HUMAN_TEMPLATE);
        let conversation = prompt.format_messages(&[
            ("persona", self.persona.as_str()),
            ("input_language", self.input_language.as_str()),
            ("text", self.text.as_str()),
        ])?;
        Ok(self.chat.complete(&conversation).await?)
    }

    /// For every language, gets a fresh in-character reply to the source text
    /// and translates that reply.
    pub async fn translate_all_in_character(&self) -> Result<TranslationMap, TaskError> {
        let mut translations = TranslationMap::default();
        for (_, language) in self.languages.iter() {
            let reply = self.respond_in_character().await?;
            debug!(language, persona = %self.persona, "translating in-character reply");
            let translation = self.translate_text(&reply, language).await?;
            translations.insert(language, translation);
        }
        Ok(translations)
    }

    async fn translate_text(&self, text: &str, output_language: &str) -> Result<String, TaskError> {
        let conversation = self.prompt.format_messages(&[
            ("input_language", self.input_language.as_str()),
            ("output_language", output_language),
            ("text", text),
        ])?;
        debug!(output_language, "translating");
        Ok(self.chat.complete(&conversation).await?)
    }
}
