//! Resolvers that delegate to a Maven installation.

use std::io::Write;

use mvnpath_core::config::MavenConfig;
use mvnpath_core::scope::ClasspathScope;
use mvnpath_core::symbol::ClasspathSymbol;
use mvnpath_maven::invoker::MavenInvoker;
use mvnpath_maven::pom::{self, ProjectLayout};
use mvnpath_util::errors::MvnpathError;

use crate::resolver::Resolver;

/// Resolves `groupId:artifactId:version` coordinates by running
/// `dependency:list` on a throwaway POM that depends on the coordinate.
#[derive(Debug, Clone)]
pub struct MavenArtifactResolver {
    invoker: MavenInvoker,
}

impl MavenArtifactResolver {
    pub fn new(config: &MavenConfig) -> Self {
        Self::with_invoker(MavenInvoker::new(config))
    }

    pub fn with_invoker(invoker: MavenInvoker) -> Self {
        Self { invoker }
    }
}

impl Resolver for MavenArtifactResolver {
    fn resolve(&self, symbol: &ClasspathSymbol) -> Result<Vec<String>, MvnpathError> {
        let ClasspathSymbol::Artifact(artifact) = symbol else {
            return Err(MvnpathError::Resolution {
                message: format!("'{}' is a POM file, not an artifact coordinate", symbol.raw()),
            });
        };
        let coord = artifact.coordinate().ok_or_else(|| MvnpathError::Resolution {
            message: format!(
                "'{}' is not a valid coordinate, expected groupId:artifactId:version[:packaging[:classifier]][@scope]",
                artifact.raw()
            ),
        })?;

        tracing::info!("Resolving classpath for {coord}");
        let xml = pom::synthetic_pom(coord)?;
        let mut pom_file = tempfile::Builder::new()
            .prefix("mvnpath-")
            .suffix(".pom")
            .tempfile()?;
        pom_file.write_all(xml.as_bytes())?;
        pom_file.flush()?;

        self.invoker.dependency_list(pom_file.path())
    }
}

/// Resolves a project's own `pom.xml` to the classpath Maven would use for
/// the requested scope: the project's output directories followed by its
/// dependencies.
#[derive(Debug, Clone)]
pub struct MavenProjectResolver {
    invoker: MavenInvoker,
}

impl MavenProjectResolver {
    pub fn new(config: &MavenConfig) -> Self {
        Self::with_invoker(MavenInvoker::new(config))
    }

    pub fn with_invoker(invoker: MavenInvoker) -> Self {
        Self { invoker }
    }
}

impl Resolver for MavenProjectResolver {
    fn resolve(&self, symbol: &ClasspathSymbol) -> Result<Vec<String>, MvnpathError> {
        let ClasspathSymbol::PomFile(pom_file) = symbol else {
            return Err(MvnpathError::Resolution {
                message: format!("'{}' is an artifact coordinate, not a POM file", symbol.raw()),
            });
        };
        let path = pom_file.path();
        if !path.is_file() {
            return Err(MvnpathError::Resolution {
                message: format!("POM file not found: {}", path.display()),
            });
        }

        let scope = ClasspathScope::from_name(pom_file.scope());
        tracing::info!("Resolving {scope} classpath for {}", path.display());

        let layout = ProjectLayout::from_pom(path)?;
        let mut classpath: Vec<String> = layout
            .classpath_dirs(scope)
            .iter()
            .map(|dir| dir.display().to_string())
            .collect();
        classpath.extend(self.invoker.build_classpath(path, scope)?);
        Ok(classpath)
    }
}
