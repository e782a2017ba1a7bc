use anyhow::Result;

use super::{connect, load_config_file};
use crate::config::ResolveOptions;
use crate::tasks::predict;
use crate::ui::{SpinningChat, Style};

pub async fn run_predict(global: &ResolveOptions, text: &str) -> Result<()> {
    let config_file = load_config_file()?;
    let client = connect(global, &config_file)?;
    let chat = SpinningChat::new(&client, "Thinking...");

    let prediction = predict(&chat, text).await?;

    println!("{} {prediction}", Style::label("Prediction:"));
    Ok(())
}
