use std::path::PathBuf;

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use tokio::io::AsyncWriteExt;

use crate::{
  converter::{ConversionStats, ConvertOptions, ResponsePolicy, WadlConverter},
  spec::{ApiDeclaration, SpecSource},
  ui::{Cli, Colors},
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
  pub source: SpecSource,
  pub endpoint: String,
  pub response_policy: ResponsePolicy,
  pub output: Option<PathBuf>,
  pub pretty: bool,
  pub verbose: bool,
  pub quiet: bool,
}

impl ConvertConfig {
  pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
    let Cli {
      source,
      endpoint,
      responses,
      output,
      pretty,
      verbose,
      quiet,
      ..
    } = cli;

    if source.trim().is_empty() {
      anyhow::bail!("Source location must not be empty");
    }
    if endpoint.trim().is_empty() {
      anyhow::bail!("Endpoint must not be empty (e.g. https://api.example.com)");
    }

    Ok(Self {
      source: SpecSource::parse(&source),
      endpoint,
      response_policy: responses.into(),
      output,
      pretty,
      verbose,
      quiet,
    })
  }

  pub(crate) async fn load_declaration(&self) -> anyhow::Result<ApiDeclaration> {
    Ok(self.source.load().await?)
  }

  fn options(&self) -> ConvertOptions {
    ConvertOptions::builder().response_policy(self.response_policy).build()
  }

  async fn write_output(&self, mut document: String) -> anyhow::Result<()> {
    document.push('\n');
    match &self.output {
      Some(path) => {
        if let Some(parent) = path.parent() {
          tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, document).await?;
      }
      None => {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(document.as_bytes()).await?;
        stdout.flush().await?;
      }
    }
    Ok(())
  }
}

/// Progress and diagnostics, written to stderr so stdout carries only the document.
pub(crate) struct ConvertLogger<'a> {
  config: &'a ConvertConfig,
  colors: &'a Colors,
}

impl<'a> ConvertLogger<'a> {
  pub(crate) fn new(config: &'a ConvertConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  pub(crate) fn info(&self, message: &str) {
    if !self.config.quiet {
      eprintln!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      eprintln!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  pub(crate) fn log_loading(&self) {
    self.info(
      &format!("Loading Swagger declaration from: {}", self.config.source)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_converting(&self) {
    self.info(
      &format!("Converting to WADL ({} responses)...", self.config.response_policy)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &ConversionStats) {
    if self.config.quiet || !self.config.verbose {
      return;
    }

    self.stat("APIs processed:", stats.apis_processed.to_string());
    self.stat("Resources created:", stats.resources_created.to_string());
    self.stat("", format!("{} template resources", stats.template_resources_created));
    if stats.resources_merged > 0 {
      self.stat("", format!("{} literal paths merged", stats.resources_merged));
    }
    self.stat("Methods generated:", stats.methods_generated.to_string());
    self.stat("", format!("{} params", stats.params_generated));
    self.stat("", format!("{} responses", stats.responses_generated));
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
  }

  fn print_warnings(&self, stats: &ConversionStats) {
    if self.config.quiet || !self.config.verbose || stats.warnings.is_empty() {
      return;
    }

    eprintln!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    if let Some(path) = &self.config.output {
      self.info(
        &format!("Writing to: {}", path.display())
          .with(self.colors.primary())
          .to_string(),
      );
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      eprintln!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated WADL".with(self.colors.success())
      );
    }
  }
}

pub async fn convert(config: &ConvertConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = ConvertLogger::new(config, colors);

  logger.log_loading();
  let declaration = config.load_declaration().await?;

  logger.log_converting();
  let output = WadlConverter::new(&declaration, &config.endpoint, config.options()).convert();
  logger.print_statistics(&output.stats);
  logger.print_warnings(&output.stats);

  let document = output.to_xml(config.pretty)?;
  logger.log_writing();
  config.write_output(document).await?;

  logger.log_success();
  Ok(())
}
