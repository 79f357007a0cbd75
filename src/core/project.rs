//! The native project descriptor (`Nar.toml`).
//!
//! A [`NarProject`] is a read-only view of the project's build configuration:
//! the selected linker, up to three compiler slots, and the alternate
//! GNU-style source layout used when no compiler is configured.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::compiler::{CompilerConfig, CompilerSlot};
use crate::core::linker::LinkerConfig;

/// Descriptor file name.
pub const DESCRIPTOR_NAME: &str = "Nar.toml";

/// Conventional GNU-style source directory, relative to the project root.
pub const DEFAULT_GNU_SOURCE_DIR: &str = "src/gnu";

/// `[project]` section of the descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ProjectMetadata {
    /// Project name
    pub name: String,

    /// Alternate source directory for GNU-style projects
    #[serde(default)]
    pub gnu_source_directory: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDescriptor {
    project: ProjectMetadata,
    #[serde(default)]
    linker: LinkerConfig,
    #[serde(default)]
    cpp: Option<CompilerConfig>,
    #[serde(default)]
    c: Option<CompilerConfig>,
    #[serde(default)]
    fortran: Option<CompilerConfig>,
}

/// On-disk source layout of the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    alternate_source_directory: PathBuf,
}

impl ProjectLayout {
    /// Layout rooted at `root`, with the alternate directory resolved
    /// against it when relative.
    pub fn new(root: &Path, alternate_source_directory: Option<&Path>) -> Self {
        let dir = alternate_source_directory.unwrap_or(Path::new(DEFAULT_GNU_SOURCE_DIR));
        ProjectLayout {
            alternate_source_directory: root.join(dir),
        }
    }

    pub fn alternate_source_directory(&self) -> &Path {
        &self.alternate_source_directory
    }

    /// Whether anything is present on disk at the alternate source path.
    pub fn alternate_source_exists(&self) -> bool {
        self.alternate_source_directory.exists()
    }
}

/// A loaded native project.
#[derive(Debug, Clone)]
pub struct NarProject {
    name: String,
    root: PathBuf,
    linker: LinkerConfig,
    compilers: HashMap<CompilerSlot, CompilerConfig>,
    layout: ProjectLayout,
}

impl NarProject {
    /// Create a project with no linker preference and no compilers.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let layout = ProjectLayout::new(&root, None);
        NarProject {
            name: name.into(),
            root,
            linker: LinkerConfig::default(),
            compilers: HashMap::new(),
            layout,
        }
    }

    /// Load a descriptor from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read descriptor: {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse descriptor content; `path` locates the project root.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawDescriptor = toml::from_str(content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if raw.project.name.trim().is_empty() {
            bail!("[project] name in {} must not be empty", path.display());
        }

        let root = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let layout = ProjectLayout::new(&root, raw.project.gnu_source_directory.as_deref());

        let mut linker = raw.linker;
        linker.resolve_path(&root);

        let mut compilers = HashMap::new();
        for (slot, config) in [
            (CompilerSlot::Cpp, raw.cpp),
            (CompilerSlot::C, raw.c),
            (CompilerSlot::Fortran, raw.fortran),
        ] {
            if let Some(config) = config {
                compilers.insert(slot, config);
            }
        }

        Ok(NarProject {
            name: raw.project.name,
            root,
            linker,
            compilers,
            layout,
        })
    }

    /// Set the linker configuration.
    pub fn with_linker(mut self, linker: LinkerConfig) -> Self {
        self.linker = linker;
        self
    }

    /// Put a compiler in a slot.
    pub fn with_compiler(mut self, slot: CompilerSlot, compiler: CompilerConfig) -> Self {
        self.compilers.insert(slot, compiler);
        self
    }

    /// Override the alternate source directory.
    pub fn with_alternate_source_directory(mut self, dir: impl AsRef<Path>) -> Self {
        self.layout = ProjectLayout::new(&self.root, Some(dir.as_ref()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn linker(&self) -> &LinkerConfig {
        &self.linker
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// The compiler in `slot`, if it is configured.
    pub fn compiler(&self, slot: CompilerSlot) -> Option<&CompilerConfig> {
        self.compilers.get(&slot).filter(|c| c.is_configured())
    }

    /// Configured compilers in slot order.
    pub fn configured_compilers(
        &self,
    ) -> impl Iterator<Item = (CompilerSlot, &CompilerConfig)> + '_ {
        CompilerSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.compiler(slot).map(|c| (slot, c)))
    }
}

/// Find the descriptor in `start` or any parent directory.
pub fn find_descriptor(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(DESCRIPTOR_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            bail!(
                "could not find `{}` in {} or any parent directory",
                DESCRIPTOR_NAME,
                start.display()
            );
        }
    }
}
