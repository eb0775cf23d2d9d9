//! Classpath resolution: the [`resolver::Resolver`] seam, Maven-backed
//! resolvers, the per-session [`cache::ClasspathCache`], and the
//! [`directive::ClasspathDirective`] that renders resolved classpaths.

pub mod cache;
pub mod directive;
pub mod maven;
pub mod resolver;
