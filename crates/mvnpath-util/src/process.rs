use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Output};

use crate::errors::MvnpathError;

/// Number of trailing output lines kept in an [`MvnpathError::Invocation`].
const OUTPUT_TAIL_LINES: usize = 20;

/// Builder for constructing and executing external processes.
///
/// Provides a fluent API for setting program, arguments, environment variables, and working directory.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
    cwd: Option<PathBuf>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// The command line as it would be typed in a shell, for logging.
    pub fn display(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute the command and return its output.
    pub fn exec(&self) -> Result<Output, MvnpathError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }
        tracing::debug!("Running {}", self.display());
        cmd.output().map_err(MvnpathError::from)
    }

    /// Execute the command and fail with [`MvnpathError::Invocation`] on a
    /// non-zero exit status.
    pub fn exec_checked(&self) -> Result<Output, MvnpathError> {
        let output = self.exec()?;
        if output.status.success() {
            return Ok(output);
        }
        let status = match output.status.code() {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        };
        Err(MvnpathError::Invocation {
            program: self.program.display().to_string(),
            status,
            output: output_tail(&output),
        })
    }
}

/// The last few lines of stdout followed by stderr.
fn output_tail(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stdout
        .lines()
        .chain(stderr.lines())
        .filter(|l| !l.trim().is_empty())
        .collect();
    let start = lines.len().saturating_sub(OUTPUT_TAIL_LINES);
    lines[start..].join("\n")
}
