use anyhow::Result;

use super::{connect, load_config_file};
use crate::config::ResolveOptions;
use crate::tasks::LanguageSelector;
use crate::ui::{SpinningChat, Style};

pub async fn run_languages(global: &ResolveOptions, pick: Option<usize>) -> Result<()> {
    let config_file = load_config_file()?;
    let client = connect(global, &config_file)?;
    let chat = SpinningChat::new(&client, "Collecting programming languages...");

    let selector = LanguageSelector::fetch(&chat).await?;

    if let Some(index) = pick {
        println!("{}", selector.get(index)?);
        return Ok(());
    }

    println!("{}", Style::header("Programming languages"));
    selector.print_all();
    Ok(())
}
