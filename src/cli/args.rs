use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::fetcher::FetcherKind;

#[derive(Parser)]
#[command(name = "gnock", version, about = "Vendor gno packages from a remote repository")]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Get every package in a repository (e.g., github.com/owner/repo)
    Get {
        /// Repository URL
        url: String,

        /// Workspace root; packages are installed under <workspace>/examples/
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// How to retrieve the repository
        #[arg(short, long, value_enum)]
        fetcher: Option<FetcherKind>,
    },

    /// List packages installed in the workspace
    List {
        /// Workspace root
        #[arg(short, long)]
        workspace: Option<PathBuf>,
    },

    /// Create gnock.json in the current directory
    Init,
}
