//! Toolchain probing.
//!
//! The validator never compiles or links anything. It only asks the selected
//! linker for its version, which proves the toolchain is installed and
//! invocable. That query goes through the [`ToolchainProbe`] trait so the
//! validation engine can be exercised without real binaries.

use std::path::{Path, PathBuf};

use thiserror::Error;

mod detect;

pub use detect::{extract_version, LinkerFamily};

use crate::util::process::{find_executable, ProcessBuilder};

/// Failure to query a toolchain binary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolchainError {
    #[error("`{program}` was not found in PATH")]
    NotFound { program: String },

    #[error("`{program}` does not exist")]
    MissingPath { program: String },

    #[error("failed to run `{program}`: {reason}")]
    Spawn { program: String, reason: String },

    #[error("`{program}` exited with status {}", display_status(.status))]
    Failed {
        program: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("`{program}` did not report a version")]
    NoVersion { program: String },
}

fn display_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

/// A command that makes a toolchain print its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionQuery {
    /// The program to run (e.g., "g++", "link", "/opt/llvm/bin/clang++")
    pub program: PathBuf,
    /// Command arguments
    pub args: Vec<String>,
    /// Whether a non-zero exit status still carries a usable banner
    pub tolerate_failure: bool,
}

impl VersionQuery {
    /// Create a new query with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        VersionQuery {
            program: program.into(),
            args: Vec::new(),
            tolerate_failure: false,
        }
    }

    /// Add an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Accept non-zero exit statuses.
    pub fn tolerate_failure(mut self) -> Self {
        self.tolerate_failure = true;
        self
    }

    /// Program name for messages.
    pub fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Display the command for log messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program_name()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Raw output of a probed toolchain binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOutput {
    /// Exit status code, if the process exited normally
    pub status: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl ProbeOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Something that can run a version query.
pub trait ToolchainProbe {
    /// Run the query and return the raw output.
    ///
    /// Implementations report a missing or unspawnable binary as an error;
    /// exit status interpretation is left to [`query_version`].
    fn run(&self, query: &VersionQuery) -> Result<ProbeOutput, ToolchainError>;
}

/// Run a version query and extract the version string.
pub fn query_version<P>(probe: &P, query: &VersionQuery) -> Result<String, ToolchainError>
where
    P: ToolchainProbe + ?Sized,
{
    tracing::debug!("Querying toolchain version: {}", query.display_command());

    let output = probe.run(query)?;

    if !output.success() && !query.tolerate_failure {
        return Err(ToolchainError::Failed {
            program: query.program_name(),
            status: output.status,
            stderr: output.stderr.trim().to_string(),
        });
    }

    // Some toolchains (gcc -v, CC -V) print their banner to stderr
    extract_version(&output.stdout)
        .or_else(|| extract_version(&output.stderr))
        .ok_or_else(|| ToolchainError::NoVersion {
            program: query.program_name(),
        })
}

/// Probe that runs real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessProbe;

impl ProcessProbe {
    /// Locate the program, searching PATH for bare names.
    fn locate(program: &Path) -> Result<PathBuf, ToolchainError> {
        if program.components().count() > 1 || program.is_absolute() {
            if program.exists() {
                return Ok(program.to_path_buf());
            }
            return Err(ToolchainError::MissingPath {
                program: program.display().to_string(),
            });
        }

        find_executable(program).ok_or_else(|| ToolchainError::NotFound {
            program: program.display().to_string(),
        })
    }
}

impl ToolchainProbe for ProcessProbe {
    fn run(&self, query: &VersionQuery) -> Result<ProbeOutput, ToolchainError> {
        let program = Self::locate(&query.program)?;
        tracing::debug!("Found `{}` at {}", query.program_name(), program.display());

        let output = ProcessBuilder::new(&program)
            .args(&query.args)
            .env("LC_ALL", "C")
            .exec()
            .map_err(|e| ToolchainError::Spawn {
                program: query.program_name(),
                reason: format!("{:#}", e),
            })?;

        Ok(ProbeOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
