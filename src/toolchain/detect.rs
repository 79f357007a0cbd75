//! Linker family detection and version parsing.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::VersionQuery;

static DOTTED_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)+").expect("valid version regex"));

/// How a linker is invoked to report its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkerFamily {
    /// GCC-compatible drivers (gcc, g++, clang, icc, gfortran)
    Gnu,
    /// Microsoft link.exe
    Msvc,
    /// Sun/Oracle Studio CC
    SunStudio,
    /// Anything else, queried with `--version`
    Other,
}

impl LinkerFamily {
    /// Detect the family from a linker name or executable path.
    pub fn detect(name: &str) -> Self {
        let base = Path::new(name)
            .file_stem()
            .and_then(|n| n.to_str())
            .unwrap_or(name);

        match base {
            "msvc" | "link" => LinkerFamily::Msvc,
            "CC" => LinkerFamily::SunStudio,
            _ => {
                let lower = base.to_lowercase();
                let gnu = [
                    "g++", "gcc", "c++", "cc", "clang", "clang++", "icc", "icpc", "gfortran",
                ];
                if gnu.iter().any(|d| lower == *d || lower.ends_with(&format!("-{}", d))) {
                    LinkerFamily::Gnu
                } else {
                    LinkerFamily::Other
                }
            }
        }
    }

    /// Executable to run for a logical linker name.
    pub fn executable<'a>(&self, name: &'a str) -> &'a str {
        match self {
            LinkerFamily::Msvc if name == "msvc" => "link",
            _ => name,
        }
    }

    /// Build the version query for a program of this family.
    pub fn version_query(&self, program: &Path) -> VersionQuery {
        let query = VersionQuery::new(program);
        match self {
            LinkerFamily::Gnu => query.arg("-dumpversion"),
            // link.exe prints its banner and usage, exiting non-zero
            LinkerFamily::Msvc => query.tolerate_failure(),
            LinkerFamily::SunStudio => query.arg("-V").tolerate_failure(),
            LinkerFamily::Other => query.arg("--version"),
        }
    }
}

/// Extract a version number from toolchain output.
///
/// Returns the first dotted number (`13.2.0`), or a bare number when the
/// whole first line is one (`gcc -dumpversion` prints `13` on some distros).
pub fn extract_version(text: &str) -> Option<String> {
    if let Some(m) = DOTTED_VERSION.find(text) {
        return Some(m.as_str().to_string());
    }

    let first = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    if first.chars().all(|c| c.is_ascii_digit()) {
        return Some(first.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_family() {
        assert_eq!(LinkerFamily::detect("g++"), LinkerFamily::Gnu);
        assert_eq!(LinkerFamily::detect("gcc"), LinkerFamily::Gnu);
        assert_eq!(LinkerFamily::detect("clang++"), LinkerFamily::Gnu);
        assert_eq!(LinkerFamily::detect("icpc"), LinkerFamily::Gnu);
        assert_eq!(
            LinkerFamily::detect("x86_64-linux-gnu-g++"),
            LinkerFamily::Gnu
        );
        assert_eq!(LinkerFamily::detect("/usr/bin/gfortran"), LinkerFamily::Gnu);
        assert_eq!(LinkerFamily::detect("msvc"), LinkerFamily::Msvc);
        assert_eq!(LinkerFamily::detect("link.exe"), LinkerFamily::Msvc);
        assert_eq!(LinkerFamily::detect("CC"), LinkerFamily::SunStudio);
        assert_eq!(LinkerFamily::detect("ld.lld"), LinkerFamily::Other);
    }

    #[test]
    fn test_executable() {
        assert_eq!(LinkerFamily::Msvc.executable("msvc"), "link");
        assert_eq!(LinkerFamily::Msvc.executable("link.exe"), "link.exe");
        assert_eq!(LinkerFamily::Gnu.executable("g++"), "g++");
    }

    #[test]
    fn test_version_query_args() {
        let q = LinkerFamily::Gnu.version_query(Path::new("g++"));
        assert_eq!(q.args, ["-dumpversion"]);
        assert!(!q.tolerate_failure);

        let q = LinkerFamily::Msvc.version_query(Path::new("link"));
        assert!(q.args.is_empty());
        assert!(q.tolerate_failure);

        let q = LinkerFamily::Other.version_query(Path::new("ld.lld"));
        assert_eq!(q.args, ["--version"]);
    }

    #[test]
    fn test_extract_version() {
        assert_eq!(extract_version("13.2.0\n"), Some("13.2.0".to_string()));
        assert_eq!(extract_version("13\n"), Some("13".to_string()));
        assert_eq!(
            extract_version("LLD 17.0.6 (compatible with GNU linkers)"),
            Some("17.0.6".to_string())
        );
        assert_eq!(extract_version("usage: link [options]"), None);
        assert_eq!(extract_version(""), None);
    }
}
