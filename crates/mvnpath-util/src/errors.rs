use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all mvnpath operations.
#[derive(Debug, Error, Diagnostic)]
pub enum MvnpathError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration file.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check ~/.mvnpath/config.toml for syntax errors"))]
    Config { message: String },

    /// Classpath resolution failed for a coordinate or project file.
    #[error("Classpath resolution failed: {message}")]
    Resolution { message: String },

    /// An external program ran but exited unsuccessfully.
    #[error("{program} failed ({status})")]
    #[diagnostic(help("{output}"))]
    Invocation {
        program: String,
        status: String,
        output: String,
    },

    /// Output produced by an external program could not be understood.
    #[error("Malformed output: {message}")]
    MalformedOutput { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for results carrying an [`MvnpathError`].
pub type MvnpathResult<T> = Result<T, MvnpathError>;
