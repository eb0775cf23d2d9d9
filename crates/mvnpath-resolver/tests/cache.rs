use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use mvnpath_core::symbol::{ClasspathSymbol, SymbolKind};
use mvnpath_resolver::cache::ClasspathCache;
use mvnpath_resolver::resolver::Resolver;
use mvnpath_util::errors::MvnpathError;
use tempfile::TempDir;

/// Returns a different classpath on every call and counts the calls.
#[derive(Default)]
struct CountingResolver {
    calls: AtomicUsize,
}

impl CountingResolver {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Resolver for CountingResolver {
    fn resolve(&self, symbol: &ClasspathSymbol) -> Result<Vec<String>, MvnpathError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(vec![format!("{}-{n}.jar", symbol.raw())])
    }
}

/// Fails on the first call and succeeds afterwards.
#[derive(Default)]
struct FlakyResolver {
    calls: AtomicUsize,
}

impl Resolver for FlakyResolver {
    fn resolve(&self, _symbol: &ClasspathSymbol) -> Result<Vec<String>, MvnpathError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(MvnpathError::Resolution {
                message: "build failed".to_string(),
            })
        } else {
            Ok(vec!["/repo/ok.jar".to_string()])
        }
    }
}

#[test]
fn repeated_lookup_is_memoized() {
    let cache = ClasspathCache::new();
    let resolver = CountingResolver::default();

    let first = cache.get_artifact("g:a:1.0", Some(&resolver)).unwrap();
    let second = cache.get_artifact("g:a:1.0", Some(&resolver)).unwrap();

    assert_eq!(resolver.calls(), 1);
    assert_eq!(*first, vec!["g:a:1.0-1.jar"]);
    assert_eq!(first, second);
}

#[test]
fn touched_pom_file_misses() {
    let tmp = TempDir::new().unwrap();
    let pom = tmp.path().join("pom.xml");
    std::fs::write(&pom, "<project/>").unwrap();
    let raw = format!("{}@compile", pom.display());

    let cache = ClasspathCache::new();
    let resolver = CountingResolver::default();

    let first = cache.get_pom_file(&raw, Some(&resolver)).unwrap();
    let again = cache.get_pom_file(&raw, Some(&resolver)).unwrap();
    assert_eq!(resolver.calls(), 1);
    assert_eq!(first, again);

    let file = std::fs::File::options().write(true).open(&pom).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(86_400))
        .unwrap();

    let touched = cache.get_pom_file(&raw, Some(&resolver)).unwrap();
    assert_eq!(resolver.calls(), 2);
    assert_ne!(first, touched);
    // The stale entry stays, unreachable.
    assert_eq!(cache.len(), 2);
}

#[test]
fn missing_pom_file_is_keyed_by_epoch() {
    let tmp = TempDir::new().unwrap();
    let raw = tmp.path().join("missing.xml").display().to_string();
    let cache = ClasspathCache::new();
    let resolver = CountingResolver::default();

    cache.get_pom_file(&raw, Some(&resolver)).unwrap();
    cache.get_pom_file(&raw, Some(&resolver)).unwrap();
    assert_eq!(resolver.calls(), 1);
}

#[test]
fn disabled_resolver_yields_empty_classpath() {
    let cache = ClasspathCache::new();
    let classpath = cache.get_artifact("g:a:1.0", None).unwrap();
    assert!(classpath.is_empty());

    let classpath = cache.get_artifact("not a coordinate", None).unwrap();
    assert!(classpath.is_empty());
}

#[test]
fn failures_are_not_cached() {
    let cache = ClasspathCache::new();
    let resolver = FlakyResolver::default();

    let err = cache.get_artifact("g:a:1.0", Some(&resolver)).unwrap_err();
    assert_eq!(err.to_string(), "Classpath resolution failed: build failed");
    assert!(cache.is_empty());

    let classpath = cache.get_artifact("g:a:1.0", Some(&resolver)).unwrap();
    assert_eq!(*classpath, vec!["/repo/ok.jar"]);
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn generic_lookup_uses_symbol_key() {
    let cache = ClasspathCache::new();
    let resolver = CountingResolver::default();
    let symbol = SymbolKind::Artifact.parse("g:a:1.0:war");

    cache.get(&symbol, Some(&resolver)).unwrap();
    assert!(cache.contains(&symbol.cache_key()));
    cache.get_artifact("g:a:1.0:war", Some(&resolver)).unwrap();
    assert_eq!(resolver.calls(), 1);
}

#[test]
fn concurrent_lookups_share_one_entry() {
    let cache = Arc::new(ClasspathCache::new());
    let resolver = Arc::new(CountingResolver::default());

    // Prime the entry, then hammer it from several threads.
    let expected = cache.get_artifact("g:a:1.0", Some(resolver.as_ref())).unwrap();
    std::thread::scope(|s| {
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let resolver = Arc::clone(&resolver);
            let expected = Arc::clone(&expected);
            s.spawn(move || {
                for _ in 0..50 {
                    let got = cache.get_artifact("g:a:1.0", Some(resolver.as_ref())).unwrap();
                    assert_eq!(got, expected);
                }
            });
        }
    });
    assert_eq!(resolver.calls(), 1);
}

#[test]
fn concurrent_first_lookups_store_a_whole_entry() {
    let cache = ClasspathCache::new();
    let resolver = CountingResolver::default();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| cache.get_artifact("g:b:2.0", Some(&resolver)).unwrap());
        }
    });

    let calls = resolver.calls();
    assert!((1..=4).contains(&calls), "calls = {calls}");
    assert_eq!(cache.len(), 1);
    let stored = cache.get_artifact("g:b:2.0", Some(&resolver)).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(resolver.calls(), calls);
}
