//! Core data types for mvnpath.
//!
//! This crate defines how classpath references are written and keyed:
//! Maven coordinate symbols, POM-file symbols, the cache keys derived from
//! them, classpath scopes, and the user configuration.
//!
//! This crate is intentionally free of process spawning and network I/O.

/// Packaging used when a coordinate does not name one.
pub const DEFAULT_PACKAGING: &str = "jar";

/// Scope used when a symbol does not carry an `@scope` suffix.
pub const DEFAULT_SCOPE: &str = "test";

pub mod config;
pub mod scope;
pub mod symbol;
