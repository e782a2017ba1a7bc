use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::fs::atomic_write;
use crate::llm::ChatError;
use crate::paths;
use crate::tasks::{
    DEFAULT_INPUT_LANGUAGE, DEFAULT_PERSONA, DEFAULT_SOURCE_TEXT, LanguageEntry, LanguageTable,
};
use crate::ui::Style;

/// Provider used when neither the CLI nor the config file names one.
pub const DEFAULT_PROVIDER: &str = "openai";

/// Model used when neither the CLI nor the config file names one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Model the translator uses unless configured otherwise.
pub const DEFAULT_TRANSLATE_MODEL: &str = "gpt-4";

pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default settings in the `[lingo]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LingoConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Sampling temperature; unset means the provider default.
    pub temperature: Option<f32>,
}

/// Configuration for a chat-completion provider.
///
/// Each provider has an endpoint and optional API key settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// The provider available without any config file.
    pub fn openai() -> Self {
        Self {
            endpoint: "https://api.openai.com".to_string(),
            api_key: None,
            api_key_env: Some(OPENAI_API_KEY_ENV.to_string()),
            models: vec![DEFAULT_TRANSLATE_MODEL.to_string(), DEFAULT_MODEL.to_string()],
        }
    }

    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// Settings for `lingo translate`, in the `[translate]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Language the source text is written in.
    pub input_language: Option<String>,
    /// Text to translate.
    pub text: Option<String>,
    /// Model override for translations; falls back to `[lingo]`, then `gpt-4`.
    pub model: Option<String>,
    /// Temperature override for translations (defaults to 0).
    pub temperature: Option<f32>,
    /// Who answers in character before translating.
    pub persona: Option<String>,
    /// Target languages, in order.
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

impl TranslateConfig {
    pub fn input_language(&self) -> &str {
        self.input_language
            .as_deref()
            .unwrap_or(DEFAULT_INPUT_LANGUAGE)
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or(DEFAULT_SOURCE_TEXT)
    }

    pub fn persona(&self) -> &str {
        self.persona.as_deref().unwrap_or(DEFAULT_PERSONA)
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(0.0)
    }

    /// The configured table, or the built-in one when none is configured.
    pub fn language_table(&self, with_english: bool) -> LanguageTable {
        let mut entries = if self.languages.is_empty() {
            LanguageTable::default()
                .iter()
                .map(|(key, name)| LanguageEntry {
                    key,
                    name: name.to_string(),
                })
                .collect()
        } else {
            self.languages.clone()
        };

        if with_english {
            entries.push(LanguageEntry {
                key: 'E',
                name: "English".to_string(),
            });
        }

        LanguageTable::from_entries(entries)
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/lingo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub lingo: LingoConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Translation task settings.
    #[serde(default)]
    pub translate: TranslateConfig,
}

impl ConfigFile {
    /// Looks up a provider, falling back to the built-in `openai` one.
    pub fn provider(&self, name: &str) -> Option<ProviderConfig> {
        self.providers
            .get(name)
            .cloned()
            .or_else(|| (name == DEFAULT_PROVIDER).then(ProviderConfig::openai))
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
    /// Sampling temperature; `None` leaves the provider default.
    pub temperature: Option<f32>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Provider name override.
    pub provider: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// Temperature override.
    pub temperature: Option<f32>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if the provider is not found or if it needs an API key
/// that is not set.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.lingo.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let provider_config = config_file.provider(&provider_name).ok_or_else(|| {
        let mut available: Vec<_> = config_file.providers.keys().map(String::as_str).collect();
        if !available.contains(&DEFAULT_PROVIDER) {
            available.push(DEFAULT_PROVIDER);
        }
        available.sort_unstable();
        anyhow::anyhow!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/lingo/config.toml",
            available.join("\n  - ")
        )
    })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.lingo.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    warn_unlisted_model(&provider_name, &provider_config, &model);

    let temperature = options.temperature.or(config_file.lingo.temperature);

    let api_key = provider_config.get_api_key();

    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config
            .api_key_env
            .clone()
            .unwrap_or_else(|| "API_KEY".to_string());
        return Err(ChatError::MissingCredential {
            provider: provider_name,
            env_var,
        }
        .into());
    }

    Ok(ResolvedConfig {
        provider_name,
        endpoint: provider_config.endpoint,
        model,
        api_key,
        temperature,
    })
}

/// Warns when `model` is not in the provider's configured models list.
pub fn warn_unlisted_model(provider_name: &str, provider: &ProviderConfig, model: &str) {
    if !provider.models.is_empty() && !provider.models.iter().any(|m| m == model) {
        tracing::warn!(provider = provider_name, model, "model not in provider's list");
        crate::warn!(
            "{} Model '{}' is not in the configured models list for '{}'\n\
             Configured models: {}\n\
             Proceeding anyway...\n",
            Style::warning("Warning:"),
            model,
            provider_name,
            provider.models.join(", ")
        );
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/lingo/config.toml`
    /// or `~/.config/lingo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file; a missing file gives the defaults, a broken one
    /// is logged and also gives the defaults.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }
        self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable config file");
            ConfigFile::default()
        })
    }
}
