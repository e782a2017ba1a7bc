//! Provider listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_PROVIDER, ProviderConfig};
use crate::ui::Style;

/// Prints providers to stdout, including the built-in `openai` one.
///
/// With `specific_provider`, shows details for that provider only.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let config = ConfigManager::new()?.load_or_default();
    let default_provider = config.lingo.provider.as_deref().unwrap_or(DEFAULT_PROVIDER);

    if let Some(name) = specific_provider {
        let Some(provider) = config.provider(name) else {
            bail!("Provider '{name}' not found");
        };
        print_details(name, &provider, default_provider == name);
        return Ok(());
    }

    println!("{}", Style::header("Providers"));
    for (name, provider) in sorted_providers(&config) {
        let marker = if name == default_provider {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!("  {}{marker}", Style::value(&name));
        println!("    {} {}", Style::secondary("endpoint:"), provider.endpoint);
        if !provider.models.is_empty() {
            println!(
                "    {} {}",
                Style::secondary("models:"),
                provider.models.join(", ")
            );
        }
    }

    Ok(())
}

fn print_details(name: &str, provider: &ProviderConfig, is_default: bool) {
    let marker = if is_default {
        format!(" {}", Style::default_marker())
    } else {
        String::new()
    };
    println!("{} {}{marker}", Style::label("Provider:"), Style::value(name));
    println!("  endpoint = {}", provider.endpoint);
    if provider.requires_api_key() {
        let state = if provider.get_api_key().is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        };
        println!("  api_key  = {state}");
    }
    if provider.models.is_empty() {
        println!("  models   = {}", Style::secondary("(none configured)"));
    } else {
        println!("  models:");
        for model in &provider.models {
            println!("    - {model}");
        }
    }
}

/// Configured providers sorted by name; `openai` is added when absent.
fn sorted_providers(config: &ConfigFile) -> Vec<(String, ProviderConfig)> {
    let mut providers: Vec<(String, ProviderConfig)> = config
        .providers
        .iter()
        .map(|(name, provider)| (name.clone(), provider.clone()))
        .collect();
    if !config.providers.contains_key(DEFAULT_PROVIDER) {
        providers.push((DEFAULT_PROVIDER.to_string(), ProviderConfig::openai()));
    }
    providers.sort_by(|a, b| a.0.cmp(&b.0));
    providers
}
