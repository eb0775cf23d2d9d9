//! Classpath symbols: the raw strings a document uses to reference a
//! classpath, parsed into coordinates or POM-file references.
//!
//! Two grammars are understood:
//!
//! - `groupId:artifactId:version[:packaging[:classifier]][@scope]`
//! - `path[@scope]`
//!
//! Parsing never fails loudly. An artifact string that does not carry at
//! least `groupId:artifactId:version` yields a symbol whose fields are all
//! unset, and a POM path that cannot be stat'ed gets the epoch as its
//! modification time.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use mvnpath_util::fs::modified_or_epoch;

use crate::{DEFAULT_PACKAGING, DEFAULT_SCOPE};

/// Fully-populated Maven coordinates with packaging, classifier and scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    /// Empty when the coordinate names no classifier.
    pub classifier: String,
    pub scope: String,
}

impl ArtifactCoordinate {
    /// Parse `"group:artifact:version[:packaging[:classifier]][@scope]"`.
    ///
    /// Returns `None` unless all three leading parts are present and every
    /// part, including a given scope, is non-empty.
    pub fn parse(s: &str) -> Option<Self> {
        let (body, scope) = match s.split_once('@') {
            Some((body, scope)) => {
                if scope.is_empty() || scope.contains(':') {
                    return None;
                }
                (body, scope)
            }
            None => (s, DEFAULT_SCOPE),
        };

        let parts: Vec<&str> = body.split(':').collect();
        if !(3..=5).contains(&parts.len()) || parts.iter().any(|p| p.is_empty()) {
            return None;
        }

        Some(Self {
            group_id: parts[0].to_string(),
            artifact_id: parts[1].to_string(),
            version: parts[2].to_string(),
            packaging: parts.get(3).copied().unwrap_or(DEFAULT_PACKAGING).to_string(),
            classifier: parts.get(4).copied().unwrap_or_default().to_string(),
            scope: scope.to_string(),
        })
    }

    /// Whether a classifier was given.
    pub fn has_classifier(&self) -> bool {
        !self.classifier.is_empty()
    }
}

impl std::fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.version, self.packaging
        )?;
        if self.has_classifier() {
            write!(f, ":{}", self.classifier)?;
        }
        write!(f, "@{}", self.scope)
    }
}

/// A raw artifact reference together with its parse outcome.
///
/// Parsing is all-or-nothing: every accessor returns `None` when the raw
/// string was not a valid coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSymbol {
    raw: String,
    coordinate: Option<ArtifactCoordinate>,
}

impl ArtifactSymbol {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let coordinate = ArtifactCoordinate::parse(&raw);
        if coordinate.is_none() {
            tracing::debug!("'{raw}' is not a Maven coordinate");
        }
        Self { raw, coordinate }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn coordinate(&self) -> Option<&ArtifactCoordinate> {
        self.coordinate.as_ref()
    }

    pub fn group_id(&self) -> Option<&str> {
        self.coordinate.as_ref().map(|c| c.group_id.as_str())
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.coordinate.as_ref().map(|c| c.artifact_id.as_str())
    }

    pub fn version(&self) -> Option<&str> {
        self.coordinate.as_ref().map(|c| c.version.as_str())
    }

    pub fn packaging(&self) -> Option<&str> {
        self.coordinate.as_ref().map(|c| c.packaging.as_str())
    }

    pub fn classifier(&self) -> Option<&str> {
        self.coordinate.as_ref().map(|c| c.classifier.as_str())
    }

    pub fn scope(&self) -> Option<&str> {
        self.coordinate.as_ref().map(|c| c.scope.as_str())
    }
}

/// A reference to a project descriptor on disk plus the requested scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomFileSymbol {
    raw: String,
    path: PathBuf,
    scope: String,
    modified: SystemTime,
}

impl PomFileSymbol {
    /// Parse `"path[@scope]"`, splitting once on the first `@`, and stat the
    /// path for its modification time.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let (path, scope) = match raw.split_once('@') {
            Some((path, scope)) if !scope.is_empty() => (PathBuf::from(path), scope.to_string()),
            Some((path, _)) => (PathBuf::from(path), DEFAULT_SCOPE.to_string()),
            None => (PathBuf::from(&raw), DEFAULT_SCOPE.to_string()),
        };
        let modified = modified_or_epoch(&path);
        Self {
            raw,
            path,
            scope,
            modified,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Modification time observed at parse time (`UNIX_EPOCH` if unreadable).
    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// Which grammar a raw string is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Artifact,
    PomFile,
}

impl SymbolKind {
    pub fn parse(self, raw: impl Into<String>) -> ClasspathSymbol {
        match self {
            Self::Artifact => ClasspathSymbol::Artifact(ArtifactSymbol::parse(raw)),
            Self::PomFile => ClasspathSymbol::PomFile(PomFileSymbol::parse(raw)),
        }
    }
}

/// Either kind of parsed symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClasspathSymbol {
    Artifact(ArtifactSymbol),
    PomFile(PomFileSymbol),
}

impl ClasspathSymbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Self::Artifact(_) => SymbolKind::Artifact,
            Self::PomFile(_) => SymbolKind::PomFile,
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Self::Artifact(s) => s.raw(),
            Self::PomFile(s) => s.raw(),
        }
    }

    /// Requested scope; `None` for an unparseable artifact coordinate.
    pub fn scope(&self) -> Option<&str> {
        match self {
            Self::Artifact(s) => s.scope(),
            Self::PomFile(s) => Some(s.scope()),
        }
    }

    pub fn cache_key(&self) -> CacheKey {
        match self {
            Self::Artifact(s) => CacheKey {
                raw: s.raw().to_string(),
                modified: None,
            },
            Self::PomFile(s) => CacheKey {
                raw: s.raw().to_string(),
                modified: Some(s.modified()),
            },
        }
    }
}

impl From<ArtifactSymbol> for ClasspathSymbol {
    fn from(symbol: ArtifactSymbol) -> Self {
        Self::Artifact(symbol)
    }
}

impl From<PomFileSymbol> for ClasspathSymbol {
    fn from(symbol: PomFileSymbol) -> Self {
        Self::PomFile(symbol)
    }
}

/// Identity of a cached classpath.
///
/// Two lookups share an entry only when their raw strings are identical and,
/// for POM files, the file's modification time has not changed in between.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    raw: String,
    modified: Option<SystemTime>,
}

impl CacheKey {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.modified.and_then(|m| m.duration_since(SystemTime::UNIX_EPOCH).ok()) {
            Some(since_epoch) => write!(f, "{}#{}", self.raw, since_epoch.as_millis()),
            None => f.write_str(&self.raw),
        }
    }
}
