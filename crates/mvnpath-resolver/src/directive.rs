//! Rendering of `!mavenArtifact` and `!pomFile` references.
//!
//! A [`ClasspathDirective`] is the long-lived handler for one kind of
//! reference. It owns the session's [`ClasspathCache`], so one directive
//! should be built per rendering context and dropped with it.

use mvnpath_core::config::MvnpathConfig;
use mvnpath_core::symbol::{ClasspathSymbol, SymbolKind};
use mvnpath_util::errors::MvnpathError;

use crate::cache::{ClasspathCache, SharedClasspath};
use crate::maven::{MavenArtifactResolver, MavenProjectResolver};
use crate::resolver::Resolver;

/// Shown in place of the scope of an unparseable coordinate.
const UNKNOWN_SCOPE: &str = "-";

pub struct ClasspathDirective {
    kind: SymbolKind,
    cache: ClasspathCache,
    resolver: Option<Box<dyn Resolver>>,
}

impl ClasspathDirective {
    /// A directive with an explicit resolver; `None` disables resolution.
    pub fn new(kind: SymbolKind, resolver: Option<Box<dyn Resolver>>) -> Self {
        Self {
            kind,
            cache: ClasspathCache::new(),
            resolver,
        }
    }

    /// A directive backed by Maven unless `config` disables this kind.
    pub fn from_config(kind: SymbolKind, config: &MvnpathConfig) -> Self {
        let resolver: Option<Box<dyn Resolver>> = match kind {
            SymbolKind::Artifact if !config.artifact.disable => {
                Some(Box::new(MavenArtifactResolver::new(&config.maven)))
            }
            SymbolKind::PomFile if !config.pom.disable => {
                Some(Box::new(MavenProjectResolver::new(&config.maven)))
            }
            _ => {
                tracing::debug!("Classpath resolution disabled for {kind:?}");
                None
            }
        };
        Self::new(kind, resolver)
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.resolver.is_some()
    }

    pub fn cache(&self) -> &ClasspathCache {
        &self.cache
    }

    pub fn parse(&self, raw: &str) -> ClasspathSymbol {
        self.kind.parse(raw)
    }

    /// Resolved classpath for `raw`, served from the session cache when possible.
    pub fn classpath(&self, raw: &str) -> Result<SharedClasspath, MvnpathError> {
        self.classpath_for(&self.parse(raw))
    }

    fn classpath_for(&self, symbol: &ClasspathSymbol) -> Result<SharedClasspath, MvnpathError> {
        self.cache.get(symbol, self.resolver.as_deref())
    }

    /// Resolved paths, or nothing if resolution failed.
    pub fn provide_paths(&self, raw: &str) -> Vec<String> {
        match self.classpath(raw) {
            Ok(classpath) => classpath.to_vec(),
            Err(e) => {
                tracing::warn!("Could not resolve classpath for '{raw}': {e}");
                Vec::new()
            }
        }
    }

    /// Render the classpath block for `raw` as HTML.
    ///
    /// A failed resolution becomes an error list item so the surrounding
    /// document still renders.
    pub fn render_html(&self, raw: &str) -> String {
        let symbol = self.parse(raw);
        let result = self.classpath_for(&symbol);
        if let Err(ref e) = result {
            tracing::warn!("Could not resolve classpath for '{raw}': {e}");
        }
        render_html_block(&symbol, result.as_deref().map(Vec::as_slice))
    }
}

/// HTML for one symbol given its resolution outcome.
pub fn render_html_block(
    symbol: &ClasspathSymbol,
    classpath: Result<&[String], &MvnpathError>,
) -> String {
    let mut html = format!(
        "<p class='meta'>Maven classpath [{}, scope: {}]:</p><ul class='meta'>",
        escape_html(&label(symbol)),
        escape_html(symbol.scope().unwrap_or(UNKNOWN_SCOPE)),
    );
    match classpath {
        Ok(elements) => {
            for element in elements {
                html.push_str("<li>");
                html.push_str(&escape_html(element));
                html.push_str("</li>");
            }
        }
        Err(e) => {
            html.push_str("<li class='error'>Unable to parse POM file: ");
            html.push_str(&escape_html(&e.to_string()));
            html.push_str("</li>");
        }
    }
    html.push_str("</ul>");
    html
}

impl std::fmt::Debug for ClasspathDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClasspathDirective")
            .field("kind", &self.kind)
            .field("enabled", &self.is_enabled())
            .field("cached", &self.cache.len())
            .finish()
    }
}

fn label(symbol: &ClasspathSymbol) -> String {
    match symbol {
        ClasspathSymbol::Artifact(s) => format!("mavenArtifact: {}", s.raw()),
        ClasspathSymbol::PomFile(s) => format!("file: {}", s.path().display()),
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
