//! Command-line interface for the inspector.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect what a rendering service returns for a page
#[derive(Debug, Parser)]
#[command(name = "inspector_app")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a page and show the result tree
    Render {
        /// Address of the page to render (http:// is added when missing)
        url: String,

        /// Run the script in FILE instead of a plain render
        #[arg(long, value_name = "FILE", conflicts_with = "example_script")]
        script: Option<PathBuf>,

        /// Run the built-in example script
        #[arg(long)]
        example_script: bool,

        /// Base URL of the rendering service
        #[arg(long, value_name = "URL")]
        service: Option<String>,

        /// Seconds to wait after the page has loaded
        #[arg(long, value_name = "SECS")]
        wait: Option<f64>,

        /// Save every downloadable artifact into DIR
        #[arg(long, value_name = "DIR")]
        save_dir: Option<PathBuf>,

        /// Configuration file (default: inspector.ron)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print autocomplete candidates for a script line
    Complete {
        /// Script text left of the cursor
        line: String,

        /// Documentation document (JSON) listing the script API
        #[arg(long, value_name = "FILE")]
        docs: PathBuf,
    },
}
