//! Per-language compiler configuration.
//!
//! A project has a fixed set of compiler slots. Each slot is either absent
//! (not configured) or holds a [`CompilerConfig`] with a name and the
//! include paths for each build role.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Build role a set of include paths belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildRole {
    /// Primary (non-test) sources
    Main,
    /// Test sources
    Test,
}

impl BuildRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildRole::Main => "main",
            BuildRole::Test => "test",
        }
    }
}

/// The fixed compiler slots of a native project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerSlot {
    /// C++ compiler
    Cpp,
    /// C compiler
    C,
    /// Fortran compiler
    Fortran,
}

impl CompilerSlot {
    /// All slots, in the order they are validated.
    pub const ALL: [CompilerSlot; 3] = [CompilerSlot::Cpp, CompilerSlot::C, CompilerSlot::Fortran];

    /// Descriptor table name for this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerSlot::Cpp => "cpp",
            CompilerSlot::C => "c",
            CompilerSlot::Fortran => "fortran",
        }
    }
}

impl fmt::Display for CompilerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration of one language compiler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    /// Compiler name (e.g. "g++", "gcc", "gfortran")
    pub name: String,

    /// Include search paths keyed by build role
    #[serde(default)]
    pub includes: HashMap<BuildRole, Vec<String>>,
}

impl CompilerConfig {
    /// Create a compiler config with no includes.
    pub fn new(name: impl Into<String>) -> Self {
        CompilerConfig {
            name: name.into(),
            includes: HashMap::new(),
        }
    }

    /// Set the include paths for a role.
    pub fn with_includes(
        mut self,
        role: BuildRole,
        includes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.includes
            .insert(role, includes.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Include paths for a role, empty when none are configured.
    pub fn includes(&self, role: BuildRole) -> &[String] {
        self.includes.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A compiler with a blank name counts as not configured.
    pub fn is_configured(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
