//! Public types for the validate operation.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::aol::Aol;
use crate::core::compiler::CompilerSlot;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// Machine-readable JSON output
    Json,
}

/// A compiler that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfiguredCompiler {
    pub slot: CompilerSlot,
    pub name: String,
    /// Number of main-role include paths
    pub includes: usize,
}

/// What a successful validation established.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Project name
    pub project: String,

    /// Resolved platform identifier
    pub aol: Aol,

    /// Linker name
    pub linker: String,

    /// Version reported by the linker toolchain
    pub linker_version: String,

    /// Configured compilers, in validation order
    pub compilers: Vec<ConfiguredCompiler>,

    /// Set when the GNU-style source directory was the accepted build path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_source_directory: Option<PathBuf>,

    /// Non-fatal findings, such as an AOL override naming another linker
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether the project builds from the GNU-style layout only.
    pub fn uses_alternate_layout(&self) -> bool {
        self.alternate_source_directory.is_some()
    }
}
