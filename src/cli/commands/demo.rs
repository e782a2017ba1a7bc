use anyhow::Result;

use super::{connect, format_list, load_config_file, translate_options};
use crate::config::ResolveOptions;
use crate::tasks::{
    DEFAULT_CATEGORY, DEFAULT_PREDICTION_TEXT, TextTranslator, generate_comma_separated_list,
    predict,
};
use crate::ui::{SpinningChat, Style};

/// Greets, predicts twice, translates and lists colors, one call at a time.
///
/// The prediction goes to both the general model and the translation model.
/// The question, not the translated text, follows the `Original` label.
pub async fn run_demo(global: &ResolveOptions, name: &str) -> Result<()> {
    let config_file = load_config_file()?;

    println!("Hello there, {name}");

    let client = connect(global, &config_file)?;
    let chat = SpinningChat::new(&client, "Thinking...");
    let translate_client = connect(&translate_options(global, &config_file), &config_file)?;
    let translate_chat = SpinningChat::new(&translate_client, "Thinking...");

    let first = predict(&chat, DEFAULT_PREDICTION_TEXT).await?;
    let second = predict(&translate_chat, DEFAULT_PREDICTION_TEXT).await?;
    println!("{} {first} vs {second}", Style::label("Prediction:"));

    let translate = &config_file.translate;
    let translator = TextTranslator::new(&translate_chat)
        .with_languages(translate.language_table(false))
        .with_text(translate.text())
        .with_input_language(translate.input_language());
    let translations = translator.translate_all().await?;

    println!(
        "{} {DEFAULT_PREDICTION_TEXT}",
        Style::label(format!("Original ({}):", translator.input_language()))
    );
    for (language, translation) in translations.iter() {
        println!(
            "{} {translation}",
            Style::label(format!("Translation ({language}):"))
        );
    }

    let items = generate_comma_separated_list(&chat, DEFAULT_CATEGORY).await?;
    println!(
        "{} {}",
        Style::label("Comma-separated list:"),
        format_list(&items)
    );

    Ok(())
}
