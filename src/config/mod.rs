mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_MODEL, DEFAULT_PROVIDER, DEFAULT_TRANSLATE_MODEL,
    LingoConfig, OPENAI_API_KEY_ENV, ProviderConfig, ResolveOptions, ResolvedConfig,
    TranslateConfig, resolve_config, warn_unlisted_model,
};
