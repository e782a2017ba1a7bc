use anyhow::Result;

use super::{connect, format_list, load_config_file};
use crate::config::ResolveOptions;
use crate::tasks::generate_comma_separated_list;
use crate::ui::{SpinningChat, Style};

pub async fn run_list(global: &ResolveOptions, category: &str) -> Result<()> {
    let config_file = load_config_file()?;
    let client = connect(global, &config_file)?;
    let chat = SpinningChat::new(&client, format!("Listing {category}..."));

    let items = generate_comma_separated_list(&chat, category).await?;

    println!(
        "{} {}",
        Style::label("Comma-separated list:"),
        format_list(&items)
    );
    Ok(())
}
