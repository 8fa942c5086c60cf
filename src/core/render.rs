//! Renderer module
//!
//! Renders report items to text, jsonl or json.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::core::model::{Annotation, CountEntry, GroupReport};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    /// Colorize text output; only honored for `OutputFormat::Text`
    pub color: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Plain-text rendering of a report item
pub trait TextRender {
    fn write_text(&self, out: &mut dyn Write, color: bool) -> std::io::Result<()>;
}

fn paint(annotation: &Annotation) -> String {
    let text = annotation.to_string();
    match annotation {
        Annotation::Count(_) => text.cyan().to_string(),
        Annotation::AlwaysTaken => text.green().to_string(),
        Annotation::NeverTaken => text.red().to_string(),
    }
}

impl TextRender for GroupReport {
    fn write_text(&self, out: &mut dyn Write, color: bool) -> std::io::Result<()> {
        writeln!(out, "{}", self.separator)?;
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        for annotation in &self.annotations {
            if color {
                writeln!(out, "{}", paint(annotation))?;
            } else {
                writeln!(out, "{}", annotation)?;
            }
        }
        Ok(())
    }
}

impl TextRender for CountEntry {
    fn write_text(&self, out: &mut dyn Write, _color: bool) -> std::io::Result<()> {
        writeln!(out, "{:9} {}", self.count, self.line)
    }
}

/// Streams report items to a writer.
///
/// Text and jsonl items are written as they arrive. Json items are buffered
/// and written as a single array by [`Renderer::finish`].
pub struct Renderer<W: Write> {
    config: RenderConfig,
    out: W,
    buffered: Vec<serde_json::Value>,
}

impl<W: Write> Renderer<W> {
    pub fn new(config: RenderConfig, out: W) -> Self {
        Self {
            config,
            out,
            buffered: Vec::new(),
        }
    }

    /// Render one item
    pub fn emit<T: TextRender + Serialize>(&mut self, item: &T) -> Result<()> {
        match self.config.format {
            OutputFormat::Text => item
                .write_text(&mut self.out, self.config.color)
                .context("Failed to write output")?,
            OutputFormat::Jsonl => {
                let line = if self.config.pretty {
                    serde_json::to_string_pretty(item)?
                } else {
                    serde_json::to_string(item)?
                };
                writeln!(self.out, "{}", line).context("Failed to write output")?;
            }
            OutputFormat::Json => self.buffered.push(serde_json::to_value(item)?),
        }
        Ok(())
    }

    /// Push everything written so far to the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Failed to flush output")
    }

    /// Write any buffered json array, flush, and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        if self.config.format == OutputFormat::Json {
            let items = std::mem::take(&mut self.buffered);
            let array = if self.config.pretty {
                serde_json::to_string_pretty(&items)?
            } else {
                serde_json::to_string(&items)?
            };
            writeln!(self.out, "{}", array).context("Failed to write output")?;
        }
        self.flush()?;
        Ok(self.out)
    }
}
