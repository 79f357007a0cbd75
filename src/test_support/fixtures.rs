//! Test fixtures for common test scenarios.
//!
//! Pre-built descriptors and toolchain outputs, plus a generator for
//! project directories on disk.

use std::path::{Path, PathBuf};

use crate::core::project::{DEFAULT_GNU_SOURCE_DIR, DESCRIPTOR_NAME};

/// Fixture for a project directory.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    /// Project name.
    pub name: String,
    /// Nar.toml content.
    pub descriptor: String,
    /// Directories to create (relative to project root).
    pub dirs: Vec<PathBuf>,
}

impl ProjectFixture {
    /// A project with a minimal descriptor and nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        ProjectFixture {
            descriptor: descriptors::minimal(&name),
            name,
            dirs: Vec::new(),
        }
    }

    /// Replace the descriptor content.
    pub fn with_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.descriptor = descriptor.into();
        self
    }

    /// Create the conventional GNU-style source directory.
    pub fn with_gnu_sources(self) -> Self {
        self.with_dir(DEFAULT_GNU_SOURCE_DIR)
    }

    /// Create an extra directory.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }

    /// Write the project under `base_path/<name>` and return the descriptor path.
    pub fn write_to(&self, base_path: &Path) -> std::io::Result<PathBuf> {
        let root = base_path.join(&self.name);
        std::fs::create_dir_all(&root)?;

        for dir in &self.dirs {
            std::fs::create_dir_all(root.join(dir))?;
        }

        let descriptor = root.join(DESCRIPTOR_NAME);
        std::fs::write(&descriptor, &self.descriptor)?;
        Ok(descriptor)
    }
}

/// Descriptor templates.
pub mod descriptors {
    /// Only the `[project]` table.
    pub fn minimal(name: &str) -> String {
        format!("[project]\nname = \"{name}\"\n")
    }

    /// A C++ project with main-role includes.
    pub fn cpp_with_includes(name: &str, compiler: &str, includes: &[&str]) -> String {
        let includes = includes
            .iter()
            .map(|i| format!("\"{i}\""))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            r#"[project]
name = "{name}"

[cpp]
name = "{compiler}"

[cpp.includes]
main = [{includes}]
"#
        )
    }
}

/// Version output of common linkers.
pub mod linker_outputs {
    use super::super::MockProcessOutput;

    /// `g++ -dumpversion`.
    pub fn gnu_dumpversion(version: &str) -> MockProcessOutput {
        MockProcessOutput::success(format!("{version}\n"))
    }

    /// `link` with no arguments: banner then usage, non-zero exit.
    pub fn msvc_banner(version: &str) -> MockProcessOutput {
        MockProcessOutput::with_output(
            1100,
            format!(
                "Microsoft (R) Incremental Linker Version {version}\n\
                 Copyright (C) Microsoft Corporation.  All rights reserved.\n\n\
                 usage: LINK [options] [files] [@commandfile]\n"
            ),
            "",
        )
    }

    /// `CC -V`: banner on stderr, non-zero exit without input files.
    pub fn sun_studio_banner(version: &str) -> MockProcessOutput {
        MockProcessOutput::with_output(
            1,
            "",
            format!(
                "CC: Studio {version} Sun C++ 5.15 SunOS_sparc 2017/05/30\n\
                 usage: CC [ options ] files"
            ),
        )
    }
}
