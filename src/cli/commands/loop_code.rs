use anyhow::Result;

use super::{connect, load_config_file};
use crate::config::ResolveOptions;
use crate::interact::TerminalPrompt;
use crate::tasks::{LanguageSelector, LoopCodeGenerator};
use crate::ui::{SpinningChat, Style};

pub struct LoopOptions {
    pub text: String,
    pub times: u32,
    pub language: Option<String>,
    pub discover: bool,
}

pub async fn run_loop(global: &ResolveOptions, options: LoopOptions) -> Result<()> {
    let config_file = load_config_file()?;
    let client = connect(global, &config_file)?;
    let chat = SpinningChat::new(&client, "Generating...");

    let generator = if options.discover {
        let selector = LanguageSelector::fetch(&chat).await?;
        LoopCodeGenerator::with_languages(&chat, selector.into_languages())
    } else {
        LoopCodeGenerator::new(&chat)
    };

    let language = match options.language {
        Some(language) => language,
        None => {
            println!("{}", Style::header("Choose a language"));
            for line in generator.menu() {
                println!("  {line}");
            }
            generator.choose_language(&mut TerminalPrompt)?.to_string()
        }
    };

    let code = generator
        .generate_loop_code(&options.text, options.times, &language)
        .await?;

    println!("{}", Style::label(format!("Loop code ({language}):")));
    println!("{code}");
    Ok(())
}
