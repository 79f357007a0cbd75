//! Test utilities and mocks for unit tests.
//!
//! This module provides a mock toolchain probe, so validation can be tested
//! without real compilers installed, and fixtures for on-disk projects.
//!
//! # Example
//!
//! ```rust,ignore
//! use nar_validate::test_support::{MockProbe, MockProcessOutput};
//!
//! #[test]
//! fn test_example() {
//!     let probe = MockProbe::new()
//!         .with_program("g++", MockProcessOutput::success("13.2.0"));
//!
//!     // Pass `&probe` to `validate_with`...
//! }
//! ```

pub mod fixtures;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::aol::HostPlatform;
use crate::toolchain::{ProbeOutput, ToolchainError, ToolchainProbe, VersionQuery};

pub use fixtures::*;

/// Mock process output for testing command execution.
#[derive(Debug, Clone)]
pub struct MockProcessOutput {
    /// Exit status code (0 = success).
    pub status: i32,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl MockProcessOutput {
    /// Create a successful output with the given stdout.
    pub fn success(stdout: impl Into<String>) -> Self {
        MockProcessOutput {
            status: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Create a failure output with the given stderr and status code.
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Create an output with both stdout and stderr.
    pub fn with_output(status: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        MockProcessOutput {
            status,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

impl From<MockProcessOutput> for ProbeOutput {
    fn from(output: MockProcessOutput) -> Self {
        ProbeOutput {
            status: Some(output.status),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// Mock toolchain probe.
///
/// Programs are matched by the exact program string of the query (a bare
/// name or a full path). Unknown programs report [`ToolchainError::NotFound`].
/// Every query is recorded, found or not.
#[derive(Debug, Default)]
pub struct MockProbe {
    programs: HashMap<String, MockProcessOutput>,
    calls: Mutex<Vec<String>>,
}

impl MockProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` available with a fixed output.
    pub fn with_program(mut self, program: impl Into<String>, output: MockProcessOutput) -> Self {
        self.programs.insert(program.into(), output);
        self
    }

    /// Commands run so far, as `program arg...`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolchainProbe for MockProbe {
    fn run(&self, query: &VersionQuery) -> Result<ProbeOutput, ToolchainError> {
        self.calls.lock().unwrap().push(query.display_command());

        self.programs
            .get(&query.program_name())
            .cloned()
            .map(ProbeOutput::from)
            .ok_or_else(|| ToolchainError::NotFound {
                program: query.program_name(),
            })
    }
}

/// An x86-64 Linux host.
pub fn linux_host() -> HostPlatform {
    HostPlatform::new("amd64", "Linux")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_probe_records_calls() {
        let probe = MockProbe::new().with_program("g++", MockProcessOutput::success("13.2.0"));

        let found = probe.run(&VersionQuery::new("g++").arg("-dumpversion")).unwrap();
        assert!(found.success());
        assert_eq!(found.stdout, "13.2.0");

        let missing = probe.run(&VersionQuery::new("CC").arg("-V"));
        assert!(matches!(missing, Err(ToolchainError::NotFound { .. })));

        assert_eq!(probe.calls(), ["g++ -dumpversion", "CC -V"]);
    }
}
