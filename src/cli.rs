//! `clipformat` command line: inspect and write clipboard formats from a shell.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info_span, Instrument};

use cf_app::ClipboardTextFormatHelper;
use cf_core::ClipboardFormat;

const ABSENT: &str = "(absent)";

#[derive(Debug, Parser)]
#[command(name = "clipformat")]
#[command(about = "Read and write clipboard text, RTF, HTML and images", long_about = None)]
pub struct Cli {
    /// Config file path (overrides CLIPFORMAT_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List formats currently on the clipboard
    Formats {
        /// Print a JSON array instead of one format per line
        #[arg(long)]
        json: bool,
    },
    /// Read one format
    Get {
        format: FormatArg,
        /// Write the content to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Replace the clipboard content with one format
    ///
    /// On X11 without a clipboard manager this keeps running until another
    /// application takes the clipboard.
    Set {
        format: FormatArg,
        #[command(flatten)]
        source: SetSource,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SetSource {
    /// Inline value
    #[arg(long)]
    pub value: Option<String>,
    /// Read the value from a file
    #[arg(long = "in", value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Rtf,
    Html,
    Image,
}

impl From<FormatArg> for ClipboardFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ClipboardFormat::Text,
            FormatArg::Rtf => ClipboardFormat::Rtf,
            FormatArg::Html => ClipboardFormat::Html,
            FormatArg::Image => ClipboardFormat::Bitmap,
        }
    }
}

/// Run `command` against `helper`, writing human-readable output to `out`.
pub async fn execute<W: Write>(
    helper: &ClipboardTextFormatHelper,
    command: Commands,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Formats { json } => {
            run_formats(helper, json, out)
                .instrument(info_span!("cli.formats"))
                .await
        }
        Commands::Get { format, out: path } => {
            let span = info_span!("cli.get", format = %ClipboardFormat::from(format));
            run_get(helper, format, path.as_deref(), out)
                .instrument(span)
                .await
        }
        Commands::Set { format, source } => {
            let span = info_span!("cli.set", format = %ClipboardFormat::from(format));
            run_set(helper, format, source).instrument(span).await
        }
    }
}

async fn run_formats<W: Write>(
    helper: &ClipboardTextFormatHelper,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let formats = helper
        .available_formats()
        .await
        .context("Failed to list clipboard formats")?;

    if json {
        writeln!(out, "{}", serde_json::to_string(&formats)?)?;
    } else if formats.is_empty() {
        writeln!(out, "{ABSENT}")?;
    } else {
        for format in formats {
            writeln!(out, "{format}")?;
        }
    }
    Ok(())
}

async fn run_get<W: Write>(
    helper: &ClipboardTextFormatHelper,
    format: FormatArg,
    path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let content: Option<Vec<u8>> = match format {
        FormatArg::Text => helper.get_text().await?.map(String::into_bytes),
        FormatArg::Rtf => helper.get_rtf().await?.map(String::into_bytes),
        FormatArg::Html => helper.get_raw_html().await?.map(String::into_bytes),
        FormatArg::Image => helper.get_image().await?,
    };

    let Some(content) = content else {
        tracing::info!("Requested format is not on the clipboard");
        writeln!(out, "{ABSENT}")?;
        return Ok(());
    };

    match path {
        Some(path) => {
            tokio::fs::write(path, &content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writeln!(out, "wrote {} bytes to {}", content.len(), path.display())?;
        }
        None if format == FormatArg::Image => {
            writeln!(out, "image: {} bytes", content.len())?;
        }
        None => {
            out.write_all(&content)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

async fn run_set(
    helper: &ClipboardTextFormatHelper,
    format: FormatArg,
    source: SetSource,
) -> Result<()> {
    match format {
        FormatArg::Image => {
            let path = source.input.context("`set image` requires --in <PATH>")?;
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            helper.set_image(bytes.as_slice()).await?;
        }
        FormatArg::Text => helper.set_text(read_value(source).await?.as_str()).await?,
        FormatArg::Rtf => helper.set_rtf(read_value(source).await?.as_str()).await?,
        FormatArg::Html => {
            helper
                .set_raw_html(read_value(source).await?.as_str())
                .await?
        }
    }
    Ok(())
}

async fn read_value(source: SetSource) -> Result<String> {
    match (source.value, source.input) {
        (Some(value), _) => Ok(value),
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => anyhow::bail!("either --value or --in is required"),
    }
}
