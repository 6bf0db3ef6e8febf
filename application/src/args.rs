//! [`Args`] definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Contract generation and template tooling for the exhibition registration
/// system.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Command to run.
    #[command(subcommand)]
    pub command: CliCommand,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generates a filled participation contract (and co-exhibitor annexes,
    /// if any) from a JSON request file.
    Generate {
        /// Path to the JSON request file.
        request: PathBuf,

        /// Fills every optional field with a representative value instead of
        /// the request's data, for checking a template visually.
        #[arg(long)]
        preview_all: bool,
    },

    /// Lists the form fields of a template along with their kind and whether
    /// the explicit field map covers them.
    Fields {
        /// Path to the template to inspect.
        template: PathBuf,
    },
}
