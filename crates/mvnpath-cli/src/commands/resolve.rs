//! Resolution and output shared by `mvnpath artifact` and `mvnpath pom`.

use std::collections::HashMap;
use std::path::Path;

use miette::Result;

use mvnpath_core::config::MvnpathConfig;
use mvnpath_core::symbol::SymbolKind;
use mvnpath_resolver::cache::SharedClasspath;
use mvnpath_resolver::directive::{render_html_block, ClasspathDirective};
use mvnpath_util::errors::{MvnpathError, MvnpathResult};
use mvnpath_util::progress;

use crate::cli::Format;

type Resolved<'a> = HashMap<&'a str, Result<SharedClasspath, MvnpathError>>;

pub fn exec(kind: SymbolKind, inputs: &[String], config: Option<&Path>, format: Format) -> Result<()> {
    let config = load_config(config)?;
    let directive = ClasspathDirective::from_config(kind, &config);
    if !directive.is_enabled() {
        progress::status_warn("Disabled", "classpath resolution is turned off by configuration");
    }

    let results = resolve_all(&directive, inputs);

    if format == Format::Html {
        for raw in inputs {
            if let Some(result) = results.get(raw.as_str()) {
                let symbol = directive.parse(raw);
                println!("{}", render_html_block(&symbol, result.as_deref().map(Vec::as_slice)));
            }
        }
        return Ok(());
    }

    let mut failed = 0usize;
    let mut paths: Vec<&str> = Vec::new();
    for raw in inputs {
        match results.get(raw.as_str()) {
            Some(Ok(classpath)) => {
                for path in classpath.iter() {
                    if !paths.contains(&path.as_str()) {
                        paths.push(path);
                    }
                }
            }
            Some(Err(e)) => {
                failed += 1;
                progress::status_warn("Failed", &format!("{raw}: {e}"));
            }
            None => {}
        }
    }

    match format {
        Format::Classpath => {
            let joined = std::env::join_paths(&paths).map_err(|e| MvnpathError::Generic {
                message: format!("Cannot join classpath: {e}"),
            })?;
            println!("{}", joined.to_string_lossy());
        }
        _ => {
            for path in &paths {
                println!("{path}");
            }
        }
    }

    if failed > 0 {
        return Err(MvnpathError::Resolution {
            message: format!("{failed} of {} references could not be resolved", inputs.len()),
        }
        .into());
    }
    Ok(())
}

/// Load `path` if given, the user config otherwise; environment overrides apply either way.
fn load_config(path: Option<&Path>) -> MvnpathResult<MvnpathConfig> {
    match path {
        Some(path) => {
            let mut config = MvnpathConfig::from_path(path)?;
            config.apply_env();
            Ok(config)
        }
        None => MvnpathConfig::load(),
    }
}

/// Resolve every distinct input on its own thread, sharing the directive's cache.
fn resolve_all<'a>(directive: &ClasspathDirective, inputs: &'a [String]) -> Resolved<'a> {
    let mut unique: Vec<&'a str> = Vec::new();
    for raw in inputs {
        if !unique.contains(&raw.as_str()) {
            unique.push(raw);
        }
    }

    let spinner = progress::spinner(&format!("Resolving {} reference(s)", unique.len()));
    let results = std::thread::scope(|s| {
        let handles: Vec<_> = unique
            .iter()
            .map(|&raw| (raw, s.spawn(move || directive.classpath(raw))))
            .collect();
        handles
            .into_iter()
            .map(|(raw, handle)| {
                let result = handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
                (raw, result)
            })
            .collect::<Resolved<'a>>()
    });
    spinner.finish_and_clear();

    for (raw, result) in &results {
        if let Ok(classpath) = result {
            progress::status("Resolved", &format!("{raw} ({} entries)", classpath.len()));
        }
    }
    results
}
