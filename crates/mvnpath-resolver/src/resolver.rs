//! The capability that turns a parsed symbol into a classpath.

use mvnpath_core::symbol::ClasspathSymbol;
use mvnpath_util::errors::MvnpathError;

/// Turns a coordinate or project descriptor into an ordered classpath.
///
/// Implementations may block for a long time (a cache miss typically runs a
/// full Maven build) and must be deterministic for a given symbol.
pub trait Resolver: Send + Sync {
    fn resolve(&self, symbol: &ClasspathSymbol) -> Result<Vec<String>, MvnpathError>;
}

impl<F> Resolver for F
where
    F: Fn(&ClasspathSymbol) -> Result<Vec<String>, MvnpathError> + Send + Sync,
{
    fn resolve(&self, symbol: &ClasspathSymbol) -> Result<Vec<String>, MvnpathError> {
        self(symbol)
    }
}
