use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

pub struct Colors {
  enabled: bool,
}

impl Colors {
  pub const fn new(enabled: bool) -> Self {
    Self { enabled }
  }

  const fn pick(&self, color: Color) -> Color {
    if self.enabled { color } else { Color::Reset }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Color::Rgb { r: 118, g: 166, b: 166 })
  }

  pub const fn primary(&self) -> Color {
    self.pick(Color::Rgb { r: 191, g: 126, b: 4 })
  }

  pub const fn accent(&self) -> Color {
    self.pick(Color::Rgb { r: 166, g: 84, b: 55 })
  }

  pub const fn success(&self) -> Color {
    self.pick(Color::Rgb { r: 34, g: 142, b: 90 })
  }

  pub const fn label(&self) -> Color {
    self.pick(Color::Rgb { r: 217, g: 164, b: 4 })
  }

  pub const fn value(&self) -> Color {
    self.pick(Color::Rgb { r: 242, g: 211, b: 56 })
  }

  pub const fn clap_styles() -> clap::builder::Styles {
    use clap::builder::styling::{AnsiColor, Color as ClapColor, Style, Styles};

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Some(ClapColor::Ansi(AnsiColor::Yellow))))
      .usage(Style::new().bold().fg_color(Some(ClapColor::Ansi(AnsiColor::Yellow))))
      .literal(Style::new().fg_color(Some(ClapColor::Ansi(AnsiColor::Green))))
      .placeholder(Style::new().fg_color(Some(ClapColor::Ansi(AnsiColor::Cyan))))
      .error(Style::new().bold().fg_color(Some(ClapColor::Ansi(AnsiColor::Red))))
  }
}

/// Maps a crossterm color onto the table renderer's palette.
pub fn table_color(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    _ => ComfyColor::Reset,
  }
}

/// Diagnostics go to stderr, so color follows whether stderr is a terminal.
pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stderr().is_terminal(),
  }
}
