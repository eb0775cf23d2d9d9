//! Handler for `mvnpath pom`.

use std::path::Path;

use miette::Result;

use mvnpath_core::symbol::SymbolKind;

use super::resolve;
use crate::cli::Format;

pub fn exec(files: &[String], config: Option<&Path>, format: Format) -> Result<()> {
    resolve::exec(SymbolKind::PomFile, files, config, format)
}
