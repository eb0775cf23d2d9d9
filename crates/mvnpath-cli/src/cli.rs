//! CLI argument definitions for mvnpath.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "mvnpath",
    version,
    about = "Resolve Maven coordinates and POM files to classpaths",
    long_about = "mvnpath asks Maven for the fully resolved classpath of an artifact \
                  coordinate or a project POM and prints it as a path list, a \
                  classpath string, or an HTML block for documentation pages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file instead of ~/.mvnpath/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::List)]
    pub format: Format,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve artifact coordinates (groupId:artifactId:version[:packaging[:classifier]][@scope])
    Artifact {
        /// Coordinates to resolve
        #[arg(required = true, value_name = "COORDINATE")]
        coordinates: Vec<String>,
    },

    /// Resolve project POM files (path[@scope])
    Pom {
        /// POM files to resolve
        #[arg(required = true, value_name = "POM")]
        files: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One path per line
    List,
    /// A single classpath string joined with the platform separator
    Classpath,
    /// An HTML block per reference, errors rendered inline
    Html,
}

/// Parse CLI arguments from the process environment.
pub fn parse() -> Cli {
    Cli::parse()
}
