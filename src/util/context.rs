//! Global context for command execution.
//!
//! Gathers the working directory, descriptor location and configuration
//! paths that commands need before they can load a project.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::project::{find_descriptor, NarProject};
use crate::util::config::{self, Config};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Explicit descriptor path (`--manifest-path`)
    manifest_path: Option<PathBuf>,

    /// Global configuration file (~/.nar/config.toml)
    global_config: Option<PathBuf>,

    /// Whether to use verbose output
    verbose: bool,

    /// Whether to use colors in output
    color: bool,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        GlobalContext {
            cwd,
            manifest_path: None,
            global_config: config::global_config_path(),
            verbose: false,
            color: true,
        }
    }

    /// Use an explicit descriptor instead of searching from cwd.
    pub fn with_manifest_path(mut self, path: Option<PathBuf>) -> Self {
        self.manifest_path = path.map(|p| {
            if p.is_absolute() {
                p
            } else {
                self.cwd.join(p)
            }
        });
        self
    }

    /// Override (or disable) the global configuration file.
    pub fn with_global_config(mut self, path: Option<PathBuf>) -> Self {
        self.global_config = path;
        self
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Locate the descriptor: the explicit path, or a search upward from cwd.
    pub fn find_descriptor(&self) -> Result<PathBuf> {
        match &self.manifest_path {
            Some(path) if path.is_file() => Ok(path.clone()),
            Some(path) => anyhow::bail!("descriptor not found: {}", path.display()),
            None => find_descriptor(&self.cwd),
        }
    }

    /// Load the project descriptor.
    pub fn load_project(&self) -> Result<NarProject> {
        let path = self.find_descriptor()?;
        tracing::debug!("Loading descriptor {}", path.display());
        NarProject::load(&path)
    }

    /// Load tool configuration for a project rooted at `root`.
    pub fn load_config(&self, root: &Path) -> Config {
        config::load_config(
            self.global_config.as_deref(),
            &config::project_config_path(root),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project::DESCRIPTOR_NAME;
    use tempfile::TempDir;

    #[test]
    fn test_context_cwd() {
        let ctx = GlobalContext::new().unwrap();
        assert!(ctx.cwd().is_absolute());
        assert!(!ctx.is_verbose());
    }

    #[test]
    fn test_load_project_from_cwd() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(DESCRIPTOR_NAME),
            "[project]\nname = \"hello\"\n",
        )
        .unwrap();
        let nested = tmp.path().join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = GlobalContext::with_cwd(nested);
        let project = ctx.load_project().unwrap();
        assert_eq!(project.name(), "hello");
        assert_eq!(project.root(), tmp.path());
    }

    #[test]
    fn test_explicit_manifest_path() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("native")).unwrap();
        std::fs::write(
            tmp.path().join("native/Nar.toml"),
            "[project]\nname = \"lib\"\n",
        )
        .unwrap();

        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf())
            .with_manifest_path(Some(PathBuf::from("native/Nar.toml")));
        assert_eq!(ctx.load_project().unwrap().name(), "lib");

        let missing = GlobalContext::with_cwd(tmp.path().to_path_buf())
            .with_manifest_path(Some(PathBuf::from("other/Nar.toml")));
        assert!(missing.find_descriptor().is_err());
    }

    #[test]
    fn test_load_config_project_overrides_global() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        std::fs::write(&global, "aol = \"amd64-Linux-gpp\"\n").unwrap();
        std::fs::create_dir_all(tmp.path().join(".nar")).unwrap();
        std::fs::write(
            tmp.path().join(".nar/config.toml"),
            "aol = \"aarch64-Linux-gpp\"\n",
        )
        .unwrap();

        let ctx =
            GlobalContext::with_cwd(tmp.path().to_path_buf()).with_global_config(Some(global));
        let config = ctx.load_config(tmp.path());
        assert_eq!(config.aol.as_deref(), Some("aarch64-Linux-gpp"));
    }
}
