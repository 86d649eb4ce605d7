use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect comic-book archives (CBZ/CBR/CB7/CBT) and extract their pages.
#[derive(Debug, Parser)]
#[command(name = "comicbook", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show archive summary: container format, page count, dimensions
    Info {
        /// Path to the comic-book archive
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },

    /// List pages with their entry paths and pixel dimensions
    Pages {
        /// Path to the comic-book archive
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Decode pages and write them as PNG files
    Extract {
        /// Path to the comic-book archive
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output directory for extracted pages (default: current directory)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// List supported container formats, image extensions, and MIME types
    Formats {
        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,
    },
}

/// Output format for info/formats subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum TextFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
}

/// Output format for the pages subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
