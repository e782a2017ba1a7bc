use anyhow::Result;
use clap::Parser;
use tracing::debug;

use lingo_cli::cli::commands::{
    configure, demo, languages, list, loop_code, predict, providers, translate,
};
use lingo_cli::cli::{Args, Command};
use lingo_cli::config::ResolveOptions;
use lingo_cli::logging::init_logging;
use lingo_cli::output::{self, OutputConfig};
use lingo_cli::ui::is_prompt_cancelled;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });
    init_logging(args.verbose);

    match &dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(err) => debug!(error = %err, "no .env loaded"),
    }

    match run(args).await {
        Err(err) if is_prompt_cancelled(&err) => {
            println!();
            Ok(())
        }
        other => other,
    }
}

async fn run(args: Args) -> Result<()> {
    let global = ResolveOptions {
        provider: args.provider,
        model: args.model,
        temperature: args.temperature,
    };

    match args.command {
        Command::Translate {
            key,
            confirm,
            in_character,
            persona,
            text,
            with_english,
        } => {
            let options = translate::TranslateOptions {
                key,
                confirm,
                in_character,
                persona,
                text,
                with_english,
            };
            translate::run_translate(&global, options).await?;
        }
        Command::List { category } => {
            list::run_list(&global, &category).await?;
        }
        Command::Languages { pick } => {
            languages::run_languages(&global, pick).await?;
        }
        Command::Loop {
            text,
            times,
            language,
            discover,
        } => {
            let options = loop_code::LoopOptions {
                text,
                times,
                language,
                discover,
            };
            loop_code::run_loop(&global, options).await?;
        }
        Command::Predict { text } => {
            predict::run_predict(&global, &text).await?;
        }
        Command::Demo { name } => {
            demo::run_demo(&global, &name).await?;
        }
        Command::Configure { show } => {
            configure::run_configure(show)?;
        }
        Command::Providers { provider } => {
            providers::print_providers(provider.as_deref())?;
        }
    }

    Ok(())
}
