use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::errors::PkgupError;

/// Upper bound on captured stdout, in bytes.
pub const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Builder for constructing and executing external processes.
///
/// Provides a fluent API for setting program, arguments and working directory,
/// plus the two ways npm output is consumed: regardless of exit status, or
/// only on success.
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    max_output: usize,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            max_output: MAX_OUTPUT_BYTES,
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

    /// Append `arg` only when `cond` holds.
    pub fn arg_if(self, cond: bool, arg: impl Into<String>) -> Self {
        if cond {
            self.arg(arg)
        } else {
            self
        }
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Override the stdout size limit.
    pub fn max_output(mut self, bytes: usize) -> Self {
        self.max_output = bytes;
        self
    }

    /// The command line as it would be typed in a shell, for logs and messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute the command and return its output, whatever the exit status.
    ///
    /// Fails only if the program cannot be spawned or its stdout exceeds the
    /// configured limit.
    pub fn exec(&self) -> Result<Output, PkgupError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }
        tracing::debug!("Running `{}`", self.display());
        let output = cmd.output().map_err(|e| PkgupError::Process {
            message: format!("failed to run `{}`: {e}", self.display()),
        })?;
        if output.stdout.len() > self.max_output {
            return Err(PkgupError::Process {
                message: format!(
                    "`{}` produced more than {} bytes of output",
                    self.display(),
                    self.max_output
                ),
            });
        }
        Ok(output)
    }

    /// Execute the command and fail unless it exits successfully.
    ///
    /// The error message carries the trimmed stderr of the child.
    pub fn exec_checked(&self) -> Result<Output, PkgupError> {
        let output = self.exec()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            return Err(PkgupError::Process {
                message: format!(
                    "`{}` exited with {code}: {}",
                    self.display(),
                    stderr.trim()
                ),
            });
        }
        Ok(output)
    }
}
