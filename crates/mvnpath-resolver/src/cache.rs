//! Resolution session cache for avoiding repeated Maven runs.
//!
//! One [`ClasspathCache`] lives exactly as long as one rendering session.
//! Entries are never evicted: a cache kept across many sessions grows
//! without bound, so build a fresh one per rendered document.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mvnpath_core::symbol::{CacheKey, ClasspathSymbol, SymbolKind};
use mvnpath_util::errors::MvnpathError;

use crate::resolver::Resolver;

/// A resolved classpath shared between the cache and its readers.
pub type SharedClasspath = Arc<Vec<String>>;

/// Memoizes successful resolutions by [`CacheKey`].
///
/// Concurrent first lookups of the same key may each run the resolver; the
/// last one to finish wins. Failures are never stored.
#[derive(Debug, Default)]
pub struct ClasspathCache {
    entries: RwLock<HashMap<CacheKey, SharedClasspath>>,
}

impl ClasspathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the classpath for `symbol`, resolving it on a miss.
    ///
    /// With no resolver every miss resolves to an empty classpath.
    pub fn get(
        &self,
        symbol: &ClasspathSymbol,
        resolver: Option<&dyn Resolver>,
    ) -> Result<SharedClasspath, MvnpathError> {
        let key = symbol.cache_key();
        if let Some(hit) = self.read().get(&key) {
            tracing::debug!("Classpath cache hit for {key}");
            return Ok(Arc::clone(hit));
        }

        tracing::debug!("Classpath cache miss for {key}");
        let classpath = match resolver {
            Some(resolver) => resolver.resolve(symbol)?,
            None => {
                tracing::debug!("Resolution disabled, using an empty classpath for {key}");
                Vec::new()
            }
        };

        let entry = Arc::new(classpath);
        self.write().insert(key, Arc::clone(&entry));
        Ok(entry)
    }

    /// Parse `raw` as `groupId:artifactId:version[:packaging[:classifier]][@scope]` and look it up.
    pub fn get_artifact(
        &self,
        raw: &str,
        resolver: Option<&dyn Resolver>,
    ) -> Result<SharedClasspath, MvnpathError> {
        self.get(&SymbolKind::Artifact.parse(raw), resolver)
    }

    /// Parse `raw` as `path[@scope]` and look it up.
    pub fn get_pom_file(
        &self,
        raw: &str,
        resolver: Option<&dyn Resolver>,
    ) -> Result<SharedClasspath, MvnpathError> {
        self.get(&SymbolKind::PomFile.parse(raw), resolver)
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.read().contains_key(key)
    }

    /// Number of stored entries, including ones made unreachable by a
    /// changed POM file.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Entries are inserted whole, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<CacheKey, SharedClasspath>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<CacheKey, SharedClasspath>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
