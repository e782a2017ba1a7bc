use anyhow::Result;

use super::{connect, load_config_file, print_translations, translate_options};
use crate::config::ResolveOptions;
use crate::interact::TerminalPrompt;
use crate::tasks::{TaskError, TextTranslator, TranslationMap};
use crate::ui::{SpinningChat, Style};

pub struct TranslateOptions {
    pub key: Option<char>,
    pub confirm: bool,
    pub in_character: bool,
    pub persona: Option<String>,
    pub text: Option<String>,
    pub with_english: bool,
}

pub async fn run_translate(global: &ResolveOptions, options: TranslateOptions) -> Result<()> {
    let config_file = load_config_file()?;
    let client = connect(&translate_options(global, &config_file), &config_file)?;
    let chat = SpinningChat::new(&client, format!("Translating with {}...", client.model()));

    let translate = &config_file.translate;
    let translator = TextTranslator::new(&chat)
        .with_languages(translate.language_table(options.with_english))
        .with_text(options.text.as_deref().unwrap_or(translate.text()))
        .with_input_language(translate.input_language())
        .with_persona(options.persona.as_deref().unwrap_or(translate.persona()));

    if let Some(key) = options.key {
        let language = translator
            .languages()
            .get(key)
            .ok_or(TaskError::UnknownLanguageKey(key))?
            .to_string();
        let translation = translator.translate_one(key).await?;

        let mut translations = TranslationMap::default();
        translations.insert(language, translation);
        print_translations(translator.input_language(), translator.text(), &translations);
        return Ok(());
    }

    let translations = if options.confirm {
        translator.translate_each(&mut TerminalPrompt).await?
    } else if options.in_character {
        crate::status!(
            "{} answering in character before translating",
            Style::secondary("persona:")
        );
        translator.translate_all_in_character().await?
    } else {
        translator.translate_all().await?
    };

    if translations.is_empty() {
        crate::status!("{}", Style::warning("No languages selected."));
    }

    print_translations(translator.input_language(), translator.text(), &translations);
    Ok(())
}
