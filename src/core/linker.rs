//! The linker selected for the current platform.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::aol::HostPlatform;
use crate::toolchain::{
    query_version, LinkerFamily, ToolchainError, ToolchainProbe, VersionQuery,
};

/// `[linker]` section of the project descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkerConfig {
    /// Linker name (g++, msvc, CC, ...); host default when absent
    #[serde(default)]
    pub name: Option<String>,

    /// Explicit executable, bypassing PATH lookup
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl LinkerConfig {
    /// Overlay another config on this one (other takes precedence).
    ///
    /// A new name without a path drops the inherited path, which belongs to
    /// the previous linker.
    pub fn merge(&mut self, other: &LinkerConfig) {
        if other.name.is_some() {
            self.name = other.name.clone();
            self.path = other.path.clone();
        } else if other.path.is_some() {
            self.path = other.path.clone();
        }
    }

    /// Resolve a relative path against `root`.
    pub fn resolve_path(&mut self, root: &Path) {
        if let Some(path) = self.path.as_mut().filter(|p| p.is_relative()) {
            *path = root.join(&*path);
        }
    }
}

/// A linker resolved against the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linker {
    name: String,
    path: Option<PathBuf>,
    family: LinkerFamily,
}

impl Linker {
    /// Create a linker with an explicit name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let family = LinkerFamily::detect(&name);
        Linker {
            name,
            path: None,
            family,
        }
    }

    /// Resolve the configured linker, falling back to the host default name.
    pub fn from_config(config: &LinkerConfig, host: &HostPlatform) -> Self {
        let name = config
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| host.default_linker());

        let mut linker = Linker::new(name);
        linker.path = config.path.clone();
        linker
    }

    /// Logical linker name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn family(&self) -> LinkerFamily {
        self.family
    }

    /// The command that makes this linker print its version.
    pub fn version_query(&self) -> VersionQuery {
        let program = match &self.path {
            Some(path) => path.clone(),
            None => PathBuf::from(self.family.executable(&self.name)),
        };
        self.family.version_query(&program)
    }

    /// Ask the toolchain for its version.
    ///
    /// This is the authoritative check that the linker is installed.
    pub fn version<P>(&self, probe: &P) -> Result<String, ToolchainError>
    where
        P: ToolchainProbe + ?Sized,
    {
        query_version(probe, &self.version_query())
    }
}
