//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER, LingoConfig};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current defaults and exits. Otherwise asks for
/// the default provider, model and temperature and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default();
        print_current_defaults(&config);
        println!(
            "{} {}",
            Style::label("file"),
            Style::secondary(manager.config_path().display())
        );
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = load_for_edit(&manager)?;

    print_current_defaults(&config);

    let provider_names = provider_names(&config);
    let provider = select_provider(&provider_names, config.lingo.provider.as_deref())?;

    let available_models = config
        .provider(&provider)
        .map(|p| p.models)
        .unwrap_or_default();
    let model = select_model(&available_models, config.lingo.model.as_deref())?;

    let temperature = ask_temperature(config.lingo.temperature)?;

    config.lingo = LingoConfig {
        provider: Some(provider),
        model: Some(model),
        temperature,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

/// Loads the file about to be rewritten. A file that fails to parse is an
/// error here, since saving over it would drop its other sections.
fn load_for_edit(manager: &ConfigManager) -> Result<ConfigFile> {
    if manager.config_path().exists() {
        manager.load()
    } else {
        Ok(ConfigFile::default())
    }
}

/// Configured provider names, sorted, plus the built-in one.
fn provider_names(config: &ConfigFile) -> Vec<String> {
    let mut names: Vec<String> = config.providers.keys().cloned().collect();
    if !names.iter().any(|n| n == DEFAULT_PROVIDER) {
        names.push(DEFAULT_PROVIDER.to_string());
    }
    names.sort();
    names
}

fn print_current_defaults(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}     {}",
        Style::label("provider"),
        config
            .lingo
            .provider
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        config
            .lingo
            .model
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("temperature"),
        config.lingo.temperature.map_or_else(not_set, Style::value)
    );
    println!();
}

fn select_provider(providers: &[String], default: Option<&str>) -> Result<String> {
    let default_index = default
        .and_then(|d| providers.iter().position(|p| p == d))
        .unwrap_or(0);

    let selection = Select::new("Default provider:", providers.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn select_model(available_models: &[String], default: Option<&str>) -> Result<String> {
    if available_models.is_empty() {
        let mut prompt = Text::new("Default model:").with_help_message("Enter the model name");
        if let Some(d) = default {
            prompt = prompt.with_default(d);
        }

        let model = prompt.prompt()?;
        if model.trim().is_empty() {
            bail!("Model name cannot be empty");
        }
        return Ok(model.trim().to_string());
    }

    let default_index = default
        .and_then(|d| available_models.iter().position(|m| m == d))
        .unwrap_or(0);

    let selection = Select::new("Default model:", available_models.to_vec())
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(selection)
}

fn ask_temperature(current: Option<f32>) -> Result<Option<f32>> {
    let current = current.map(|t| t.to_string()).unwrap_or_default();
    let answer = Text::new("Temperature:")
        .with_initial_value(&current)
        .with_help_message("Leave blank for the provider default")
        .prompt()?;

    parse_temperature(&answer)
}

fn parse_temperature(input: &str) -> Result<Option<f32>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    match input.parse::<f32>() {
        Ok(t) if (0.0..=2.0).contains(&t) => Ok(Some(t)),
        _ => bail!("Temperature must be a number between 0 and 2, got '{input}'"),
    }
}
