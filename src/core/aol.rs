//! Architecture-OS-Linker (AOL) platform identifiers.
//!
//! An AOL names "this architecture + this OS + this linker" and is the key
//! used to select platform-specific build settings. It renders as
//! `amd64-Linux-gpp` for display and `amd64.Linux.gpp` as a property key.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error produced when an AOL cannot be formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AolError {
    #[error("could not determine the {component} of the host platform")]
    EmptyComponent { component: &'static str },

    #[error("invalid AOL `{input}`: expected `<arch>-<os>-<linker>`")]
    Malformed { input: String },
}

/// Architecture and operating system of the machine running the build.
///
/// Values are spelled the way AOL keys spell them (`amd64`, `Linux`), not the
/// way Rust's `std::env::consts` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPlatform {
    /// CPU architecture (amd64, i386, aarch64, etc.)
    pub arch: String,
    /// Operating system (Linux, MacOSX, Windows, etc.)
    pub os: String,
}

impl HostPlatform {
    /// Create a host platform from already-normalized names.
    pub fn new(arch: impl Into<String>, os: impl Into<String>) -> Self {
        HostPlatform {
            arch: arch.into(),
            os: os.into(),
        }
    }

    /// Detect the current host.
    pub fn current() -> Self {
        HostPlatform::from_rust_consts(std::env::consts::ARCH, std::env::consts::OS)
    }

    /// Map Rust's architecture and OS names onto AOL names.
    ///
    /// Unknown values pass through unchanged.
    pub fn from_rust_consts(arch: &str, os: &str) -> Self {
        let arch = match arch {
            "x86_64" => "amd64",
            "x86" => "i386",
            "powerpc" => "ppc",
            "powerpc64" => "ppc64",
            "sparc64" => "sparcv9",
            other => other,
        };

        let os = match os {
            "linux" => "Linux",
            "macos" => "MacOSX",
            "windows" => "Windows",
            "freebsd" => "FreeBSD",
            "netbsd" => "NetBSD",
            "openbsd" => "OpenBSD",
            "solaris" => "SunOS",
            other => other,
        };

        HostPlatform::new(arch, os)
    }

    /// Name of the linker used when the project does not select one.
    pub fn default_linker(&self) -> &'static str {
        match self.os.as_str() {
            "Windows" => "msvc",
            "SunOS" => "CC",
            _ => "g++",
        }
    }
}

/// A resolved Architecture-OS-Linker identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Aol {
    architecture: String,
    os: String,
    linker: String,
}

impl Aol {
    /// Create an AOL, rejecting empty components.
    pub fn new(
        architecture: impl Into<String>,
        os: impl Into<String>,
        linker: impl Into<String>,
    ) -> Result<Self, AolError> {
        let aol = Aol {
            architecture: architecture.into(),
            os: os.into(),
            linker: key_safe(&linker.into()),
        };

        if aol.architecture.trim().is_empty() {
            return Err(AolError::EmptyComponent {
                component: "architecture",
            });
        }
        if aol.os.trim().is_empty() {
            return Err(AolError::EmptyComponent {
                component: "operating system",
            });
        }
        if aol.linker.trim().is_empty() {
            return Err(AolError::EmptyComponent { component: "linker" });
        }

        Ok(aol)
    }

    /// Resolve the AOL for a host and the selected linker name.
    pub fn resolve(host: &HostPlatform, linker_name: &str) -> Result<Self, AolError> {
        Aol::new(host.arch.as_str(), host.os.as_str(), linker_name)
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn linker(&self) -> &str {
        &self.linker
    }

    /// Dotted form used for property lookup (`amd64.Linux.gpp`).
    pub fn key(&self) -> String {
        format!("{}.{}.{}", self.architecture, self.os, self.linker)
    }
}

/// Linker names like `g++` are not valid in property keys.
fn key_safe(linker: &str) -> String {
    linker.replace('+', "p")
}

impl fmt::Display for Aol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.architecture, self.os, self.linker)
    }
}

impl FromStr for Aol {
    type Err = AolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = if s.contains('.') {
            s.split('.').collect()
        } else {
            s.split('-').collect()
        };

        match parts.as_slice() {
            [arch, os, linker] if !arch.is_empty() && !os.is_empty() && !linker.is_empty() => {
                Aol::new(*arch, *os, *linker)
            }
            _ => Err(AolError::Malformed {
                input: s.to_string(),
            }),
        }
    }
}

impl Serialize for Aol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
