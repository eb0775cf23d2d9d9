use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use mvnpath_util::errors::MvnpathError;

/// Environment variable naming a Maven installation directory.
pub const ENV_M2_HOME: &str = "M2_HOME";
/// Environment variable carrying JVM options for Maven.
pub const ENV_MAVEN_OPTS: &str = "MAVEN_OPTS";
/// Environment variable pointing at a Maven `settings.xml`.
pub const ENV_MAVEN_SETTINGS_PATH: &str = "MAVEN_SETTINGS_PATH";
/// Disables artifact-coordinate resolution when set to `true`.
pub const ENV_DISABLE_ARTIFACT: &str = "MVNPATH_DISABLE_ARTIFACT";
/// Disables POM-file resolution when set to `true`.
pub const ENV_DISABLE_POM: &str = "MVNPATH_DISABLE_POM";
/// Disables both kinds of resolution when set to `true`.
pub const ENV_DISABLE: &str = "MVNPATH_DISABLE";

/// User configuration loaded from `~/.mvnpath/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MvnpathConfig {
    #[serde(default)]
    pub maven: MavenConfig,

    #[serde(default)]
    pub artifact: DirectiveConfig,

    #[serde(default)]
    pub pom: DirectiveConfig,
}

/// How Maven is located and invoked, from `[maven]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MavenConfig {
    /// Maven installation directory; `mvn` is looked up on `PATH` when unset.
    #[serde(default)]
    pub home: Option<PathBuf>,
    /// User `settings.xml` passed with `-s`.
    #[serde(default)]
    pub settings: Option<PathBuf>,
    /// Exported to Maven as `MAVEN_OPTS`.
    #[serde(default)]
    pub opts: Option<String>,
    #[serde(default = "default_update_snapshots", rename = "update-snapshots")]
    pub update_snapshots: bool,
    #[serde(default)]
    pub offline: bool,
}

impl Default for MavenConfig {
    fn default() -> Self {
        Self {
            home: None,
            settings: None,
            opts: None,
            update_snapshots: default_update_snapshots(),
            offline: false,
        }
    }
}

fn default_update_snapshots() -> bool {
    true
}

/// Per-directive switches from `[artifact]` and `[pom]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectiveConfig {
    #[serde(default)]
    pub disable: bool,
}

impl MvnpathConfig {
    /// Load the configuration from `~/.mvnpath/config.toml`, or return defaults if the file doesn't exist.
    ///
    /// Environment overrides are applied on top.
    pub fn load() -> Result<Self, MvnpathError> {
        let path = Self::default_path();
        let mut config = if path.is_file() {
            Self::from_path(&path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Read and parse a config file without applying the environment.
    pub fn from_path(path: &Path) -> Result<Self, MvnpathError> {
        let content = std::fs::read_to_string(path).map_err(|e| MvnpathError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content).map_err(|e| match e {
            MvnpathError::Config { message } => MvnpathError::Config {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })
    }

    pub fn parse_toml(content: &str) -> Result<Self, MvnpathError> {
        toml::from_str(content).map_err(|e| MvnpathError::Config {
            message: e.to_string(),
        })
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Overlay values from `lookup`.
    ///
    /// Maven locations only fill in what the file left unset, the way the
    /// `mvn` launcher treats `M2_HOME`. Disable flags are switched on by a
    /// case-insensitive `true`.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.maven.home.is_none() {
            if let Some(home) = lookup(ENV_M2_HOME).filter(|v| !v.is_empty()) {
                tracing::debug!("Using Maven home from {ENV_M2_HOME}: {home}");
                self.maven.home = Some(PathBuf::from(home));
            }
        }
        if self.maven.opts.is_none() {
            self.maven.opts = lookup(ENV_MAVEN_OPTS).filter(|v| !v.is_empty());
        }
        if self.maven.settings.is_none() {
            self.maven.settings = lookup(ENV_MAVEN_SETTINGS_PATH)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from);
        }

        let is_true = |key: &str| lookup(key).is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));
        if is_true(ENV_DISABLE) {
            self.artifact.disable = true;
            self.pom.disable = true;
        }
        if is_true(ENV_DISABLE_ARTIFACT) {
            self.artifact.disable = true;
        }
        if is_true(ENV_DISABLE_POM) {
            self.pom.disable = true;
        }
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the mvnpath data directory (`~/.mvnpath/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".mvnpath")
}
