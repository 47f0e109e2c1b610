#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, colors};

mod converter;
mod spec;
mod ui;
mod wadl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color));
  let list = cli.list;
  let config = ui::commands::ConvertConfig::from_cli(cli)?;

  if list {
    ui::commands::list_resources(&config, &colors).await?;
  } else {
    ui::commands::convert(&config, &colors).await?;
  }

  Ok(())
}
