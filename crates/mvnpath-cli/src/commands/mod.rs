//! Command dispatch and handler modules.

mod artifact;
mod pom;
mod resolve;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Artifact { coordinates } => artifact::exec(&coordinates, config, cli.format),
        Command::Pom { files } => pom::exec(&files, config, cli.format),
    }
}
