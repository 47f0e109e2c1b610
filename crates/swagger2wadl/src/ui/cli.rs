use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use super::colors::{ColorMode, Colors};
use crate::converter::ResponsePolicy;

#[derive(Parser, Debug)]
#[command(name = "swagger2wadl")]
#[command(author, version, about = "Create WADL from a Swagger API declaration")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  /// Swagger JSON API declaration (http(s) URL or local file)
  #[arg(value_name = "SOURCE")]
  pub source: String,

  /// Real API protocol/host/port, prefixed to the declaration's resourcePath
  #[arg(value_name = "ENDPOINT")]
  pub endpoint: String,

  /// How response messages are mapped to WADL responses
  #[arg(long, value_enum, default_value = "per-status")]
  pub responses: ResponseMode,

  /// Write the WADL document to FILE instead of stdout
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Indent the WADL document
  #[arg(long, default_value_t = false)]
  pub pretty: bool,

  /// Print the resource table instead of the WADL document
  #[arg(long, default_value_t = false)]
  pub list: bool,

  /// Print conversion statistics and warnings
  #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto")]
  pub color: ColorMode,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseMode {
  /// One response per status code, keeping messages and response models
  PerStatus,
  /// Success and failure codes grouped into shared responses
  Bucketed,
}

impl From<ResponseMode> for ResponsePolicy {
  fn from(mode: ResponseMode) -> Self {
    match mode {
      ResponseMode::PerStatus => Self::PerStatus,
      ResponseMode::Bucketed => Self::Bucketed,
    }
  }
}
