//! # lingo - chat-completion task runner
//!
//! `lingo` drives a handful of small language-model tasks against any
//! OpenAI-compatible chat-completions endpoint: translating a text into a
//! table of languages, generating comma-separated lists, listing
//! programming languages and writing loop code in one of them.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate the configured text into every configured language
//! lingo translate
//!
//! # Only Spanish, at a custom temperature
//! lingo translate --key S --temperature 0.2
//!
//! # Five colors
//! lingo list colors
//!
//! # Loop code, picking the language from a menu
//! lingo loop --text "Hi" --times 3
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/lingo/config.toml`:
//!
//! ```toml
//! [lingo]
//! provider = "ollama"
//! model = "llama3.2"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["llama3.2"]
//!
//! [translate]
//! input_language = "English"
//! text = "Where is the library?"
//!
//! [[translate.languages]]
//! key = "S"
//! name = "Spanish"
//! ```
//!
//! Without a config file the built-in `openai` provider is used and
//! `OPENAI_API_KEY` must be set (a `.env` file in the working directory is
//! honored).

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Interactive questions with terminal and scripted answerers.
pub mod interact;

/// Chat model abstraction and the OpenAI-compatible client.
pub mod llm;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// Comma-separated output parsing.
pub mod parser;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Prompt templates with `{placeholder}` substitution.
pub mod prompt;

/// The task drivers: translator, lists, language selector, loop code.
pub mod tasks;

/// Terminal UI components (spinner, colors).
pub mod ui;
