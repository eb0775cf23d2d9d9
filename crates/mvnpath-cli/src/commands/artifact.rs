//! Handler for `mvnpath artifact`.

use std::path::Path;

use miette::Result;

use mvnpath_core::symbol::SymbolKind;

use super::resolve;
use crate::cli::Format;

pub fn exec(coordinates: &[String], config: Option<&Path>, format: Format) -> Result<()> {
    resolve::exec(SymbolKind::Artifact, coordinates, config, format)
}
