//! Subcommand implementations.

use anyhow::Result;
use tracing::debug;

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_TRANSLATE_MODEL, ResolveOptions, resolve_config,
};
use crate::llm::OpenAiChatClient;
use crate::tasks::TranslationMap;
use crate::ui::Style;

/// Configure command handler.
pub mod configure;

/// Demo command handler.
pub mod demo;

/// Programming language list command handler.
pub mod languages;

/// Comma-separated list command handler.
pub mod list;

/// Loop code command handler.
pub mod loop_code;

/// Prediction command handler.
pub mod predict;

/// Provider listing command handler.
pub mod providers;

/// Translation command handler.
pub mod translate;

fn load_config_file() -> Result<ConfigFile> {
    Ok(ConfigManager::new()?.load_or_default())
}

/// Resolves the provider and builds a client for it.
fn connect(options: &ResolveOptions, config_file: &ConfigFile) -> Result<OpenAiChatClient> {
    let resolved = resolve_config(options, config_file)?;
    debug!(
        provider = %resolved.provider_name,
        endpoint = %resolved.endpoint,
        model = %resolved.model,
        "resolved provider"
    );
    Ok(
        OpenAiChatClient::new(resolved.endpoint, resolved.api_key, resolved.model)
            .with_temperature(resolved.temperature),
    )
}

/// Options for the translator: CLI, then `[translate]`, then `[lingo]`.
///
/// Temperature falls back to 0 rather than the provider default.
fn translate_options(global: &ResolveOptions, config_file: &ConfigFile) -> ResolveOptions {
    let model = global
        .model
        .clone()
        .or_else(|| config_file.translate.model.clone())
        .or_else(|| config_file.lingo.model.clone())
        .unwrap_or_else(|| DEFAULT_TRANSLATE_MODEL.to_string());

    ResolveOptions {
        provider: global.provider.clone(),
        model: Some(model),
        temperature: global
            .temperature
            .or(Some(config_file.translate.temperature())),
    }
}

fn print_translations(input_language: &str, text: &str, translations: &TranslationMap) {
    println!(
        "{} {text}",
        Style::label(format!("Original ({input_language}):"))
    );
    for (language, translation) in translations.iter() {
        println!(
            "{} {translation}",
            Style::label(format!("Translation ({language}):"))
        );
    }
}

/// Renders items as a bracketed, single-quoted list: `['red', 'green']`.
fn format_list(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", quoted.join(", "))
}
