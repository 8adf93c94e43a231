//! CLI definitions for the `colorstr` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Print colored strings and strip ANSI styling.
#[derive(Debug, Parser)]
#[command(name = "colorstr", version, about)]
pub struct Cli {
    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read settings from this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print sample styled strings
    Demo,

    /// Print text rendered with the given styles
    Paint {
        /// Text to render
        text: String,

        /// Style name (repeatable), e.g. -s red -s bold
        #[arg(short, long = "style", value_name = "STYLE")]
        styles: Vec<String>,
    },

    /// Remove ANSI color sequences from text or stdin
    Strip {
        /// Text to strip; reads stdin when omitted
        text: Option<String>,
    },

    /// List every style name with its code
    Styles,
}
