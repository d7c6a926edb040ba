//! CLI definitions for releasectl
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "releasectl",
    version,
    about = "Inspect Release resources recorded in a cluster"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Kubeconfig context to use (defaults to the current context)
    #[arg(long, global = true, env = "RELEASECTL_CONTEXT")]
    pub context: Option<String>,

    /// Path to the releasectl config file
    #[arg(long, global = true, env = "RELEASECTL_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display one or more resources
    #[command(subcommand)]
    Get(GetCommands),
}

#[derive(Subcommand)]
pub enum GetCommands {
    /// Display the Releases in a namespace
    ///
    /// Examples:
    ///   releasectl get releases
    ///   releasectl get release -f myapp
    #[command(visible_alias = "release")]
    Releases {
        /// Filter the releases with the given text
        #[arg(short, long, default_value = "")]
        filter: String,

        /// The namespace to view, defaults to the current namespace
        #[arg(short, long)]
        namespace: Option<String>,
    },
}
