use clap::{Parser, Subcommand};

use crate::tasks::{DEFAULT_CATEGORY, DEFAULT_PREDICTION_TEXT};

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(about = "Chat-completion tasks: translations, lists and loop code")]
#[command(version)]
pub struct Args {
    /// Provider name (from config.toml, or the built-in "openai")
    #[arg(short = 'p', long, global = true)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// Sampling temperature (provider default when omitted)
    #[arg(long, global = true)]
    pub temperature: Option<f32>,

    /// Suppress status output and the spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate the configured text into the configured languages
    Translate {
        /// Translate into a single language by its table key (e.g. S)
        #[arg(short = 'k', long)]
        key: Option<char>,

        /// Ask before translating into each language
        #[arg(short = 'c', long, conflicts_with = "key")]
        confirm: bool,

        /// Let a persona answer the text first, then translate the answer
        #[arg(long, conflicts_with_all = ["key", "confirm"])]
        in_character: bool,

        /// Persona used with --in-character
        #[arg(long, requires = "in_character")]
        persona: Option<String>,

        /// Text to translate instead of the configured one
        #[arg(short = 't', long)]
        text: Option<String>,

        /// Also translate into English (key E)
        #[arg(long)]
        with_english: bool,
    },
    /// Generate a comma-separated list of five items in a category
    List {
        /// Category of items
        #[arg(default_value = DEFAULT_CATEGORY)]
        category: String,
    },
    /// Ask the model for programming languages and list them
    Languages {
        /// Print only the language at this 1-based position
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Generate loop code that prints a text several times
    Loop {
        /// Text the loop prints
        #[arg(short = 't', long, default_value = "Hello, world!")]
        text: String,

        /// Number of repetitions
        #[arg(short = 'n', long, default_value_t = 5)]
        times: u32,

        /// Target programming language (a menu is shown when omitted)
        #[arg(short = 'l', long)]
        language: Option<String>,

        /// Build the menu from languages suggested by the model
        #[arg(long, conflicts_with = "language")]
        discover: bool,
    },
    /// Send one question to the model and print the answer
    Predict {
        /// Question to ask
        #[arg(default_value = DEFAULT_PREDICTION_TEXT)]
        text: String,
    },
    /// Greeting, prediction, translations and a color list in one run
    Demo {
        /// Name to greet
        #[arg(long, default_value = "Doctor Ew")]
        name: String,
    },
    /// Configure default provider, model and temperature
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List configured providers
    Providers {
        /// Show details for this provider
        provider: Option<String>,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_key_parses_char() {
        let args = Args::try_parse_from(["lingo", "translate", "--key", "S"]).unwrap();
        match args.command {
            Command::Translate { key, confirm, .. } => {
                assert_eq!(key, Some('S'));
                assert!(!confirm);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_translate_key_rejects_multiple_chars() {
        assert!(Args::try_parse_from(["lingo", "translate", "--key", "SP"]).is_err());
    }

    #[test]
    fn test_translate_key_conflicts_with_confirm() {
        assert!(Args::try_parse_from(["lingo", "translate", "-k", "S", "--confirm"]).is_err());
    }

    #[test]
    fn test_persona_requires_in_character() {
        assert!(Args::try_parse_from(["lingo", "translate", "--persona", "Skippy"]).is_err());
        assert!(
            Args::try_parse_from(["lingo", "translate", "--in-character", "--persona", "Skippy"])
                .is_ok()
        );
    }

    #[test]
    fn test_list_default_category() {
        let args = Args::try_parse_from(["lingo", "list"]).unwrap();
        assert!(matches!(args.command, Command::List { category } if category == "colors"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["lingo", "loop", "--model", "gpt-4", "--temperature", "0"])
                .unwrap();
        assert_eq!(args.model.as_deref(), Some("gpt-4"));
        assert_eq!(args.temperature, Some(0.0));
        match args.command {
            Command::Loop { text, times, .. } => {
                assert_eq!(text, "Hello, world!");
                assert_eq!(times, 5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["lingo"]).is_err());
    }
}
