use serde::{Deserialize, Serialize};

/// Which Maven classpath a POM-file symbol asks for.
///
/// Matches the three classpath accessors Maven exposes on a project; every
/// other scope name falls back to the test classpath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClasspathScope {
    Compile,
    Runtime,
    #[default]
    Test,
}

impl ClasspathScope {
    /// Map a scope name case-insensitively; unknown names mean `Test`.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("compile") {
            Self::Compile
        } else if name.eq_ignore_ascii_case("runtime") {
            Self::Runtime
        } else {
            Self::Test
        }
    }

    /// The value passed to the dependency plugin's `includeScope`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Runtime => "runtime",
            Self::Test => "test",
        }
    }

    /// Whether the project's test output directory belongs on this classpath.
    pub fn includes_test_output(self) -> bool {
        matches!(self, Self::Test)
    }
}

impl std::fmt::Display for ClasspathScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
