//! Running `mvn` against a POM to have the dependency plugin write a
//! classpath to a scratch file.

use std::path::{Path, PathBuf};

use mvnpath_core::config::MavenConfig;
use mvnpath_core::scope::ClasspathScope;
use mvnpath_util::errors::MvnpathError;
use mvnpath_util::process::CommandBuilder;

use crate::output;

#[cfg(windows)]
const MVN_EXECUTABLE: &str = "mvn.cmd";
#[cfg(not(windows))]
const MVN_EXECUTABLE: &str = "mvn";

/// A configured way of calling Maven.
#[derive(Debug, Clone)]
pub struct MavenInvoker {
    executable: PathBuf,
    settings: Option<PathBuf>,
    opts: Option<String>,
    update_snapshots: bool,
    offline: bool,
}

impl MavenInvoker {
    /// Use `<home>/bin/mvn` when a Maven home is configured, `mvn` from
    /// `PATH` otherwise.
    pub fn new(config: &MavenConfig) -> Self {
        let executable = match config.home {
            Some(ref home) => home.join("bin").join(MVN_EXECUTABLE),
            None => PathBuf::from(MVN_EXECUTABLE),
        };
        Self {
            executable,
            settings: config.settings.clone(),
            opts: config.opts.clone(),
            update_snapshots: config.update_snapshots,
            offline: config.offline,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Base command: batch mode, global flags, `-f <pom>` and the goal.
    pub fn command(&self, pom: &Path, goal: &str) -> CommandBuilder {
        let mut cmd = CommandBuilder::new(&self.executable).arg("-B");
        if self.update_snapshots {
            cmd = cmd.arg("-U");
        }
        if self.offline {
            cmd = cmd.arg("-o");
        }
        if let Some(ref settings) = self.settings {
            cmd = cmd.arg("-s").arg(settings.display().to_string());
        }
        if let Some(ref opts) = self.opts {
            cmd = cmd.env("MAVEN_OPTS", opts.as_str());
        }
        cmd.arg("-f").arg(pom.display().to_string()).arg(goal)
    }

    /// Full transitive artifact list of `pom` as absolute jar paths.
    pub fn dependency_list(&self, pom: &Path) -> Result<Vec<String>, MvnpathError> {
        let out = scratch_file(".deps")?;
        self.command(pom, "dependency:list")
            .arg(format!("-DoutputFile={}", out.path().display()))
            .arg("-DoutputAbsoluteArtifactFilename=true")
            .exec_checked()?;
        let text = read_output(out.path())?;
        output::parse_dependency_list(&text)
    }

    /// Dependency classpath of the project at `pom` for `scope`.
    pub fn build_classpath(
        &self,
        pom: &Path,
        scope: ClasspathScope,
    ) -> Result<Vec<String>, MvnpathError> {
        let out = scratch_file(".classpath")?;
        self.command(pom, "dependency:build-classpath")
            .arg(format!("-Dmdep.outputFile={}", out.path().display()))
            .arg(format!("-Dmdep.includeScope={scope}"))
            .exec_checked()?;
        let text = read_output(out.path())?;
        Ok(output::parse_build_classpath(&text))
    }
}

fn scratch_file(suffix: &str) -> Result<tempfile::NamedTempFile, MvnpathError> {
    tempfile::Builder::new()
        .prefix("mvnpath-")
        .suffix(suffix)
        .tempfile()
        .map_err(MvnpathError::from)
}

fn read_output(path: &Path) -> Result<String, MvnpathError> {
    std::fs::read_to_string(path).map_err(|e| MvnpathError::MalformedOutput {
        message: format!("could not read {}: {e}", path.display()),
    })
}
