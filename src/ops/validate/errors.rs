//! Validation failures.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::aol::AolError;
use crate::core::compiler::CompilerSlot;
use crate::toolchain::ToolchainError;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// The first rule a project violated.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ValidationError {
    #[error("could not resolve the platform identifier: {0}")]
    #[diagnostic(code(nar::validate::aol))]
    IdentifierResolution(#[from] AolError),

    #[error("linker `{linker}` could not be queried for its version")]
    #[diagnostic(
        code(nar::validate::toolchain_not_found),
        help("install the linker or set [linker] path in Nar.toml")
    )]
    ToolchainNotFound {
        linker: String,
        #[source]
        source: ToolchainError,
    },

    #[error("no includes defined for compiler `{compiler}`")]
    #[diagnostic(
        code(nar::validate::missing_includes),
        help("add main-role include paths for this compiler in Nar.toml")
    )]
    MissingIncludes { compiler: String, slot: CompilerSlot },

    #[error(
        "no compilers defined for linker `{linker}`, and no alternate source directory at {}",
        .directory.display()
    )]
    #[diagnostic(
        code(nar::validate::no_build_path),
        help("either define a compiler or create the GNU-style source directory")
    )]
    NoBuildPath { linker: String, directory: PathBuf },
}

impl ValidationError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ValidationError::IdentifierResolution(err) => {
                Diagnostic::error("could not resolve the platform identifier (AOL)")
                    .with_context(err.to_string())
                    .with_suggestion(suggestions::CHECK_AOL_OVERRIDE)
            }

            ValidationError::ToolchainNotFound { linker, source } => {
                let mut diag = Diagnostic::error(format!(
                    "linker `{}` could not be queried for its version",
                    linker
                ))
                .with_context(source.to_string());

                match source {
                    ToolchainError::Failed { stderr, .. } if !stderr.is_empty() => {
                        diag = diag.with_context(stderr.clone());
                    }
                    ToolchainError::MissingPath { .. } => {
                        return diag.with_suggestion(suggestions::LINKER_PATH);
                    }
                    _ => {}
                }

                diag.with_suggestion(format!("Install `{}` or add it to PATH", linker))
                    .with_suggestion(suggestions::LINKER_PATH)
            }

            ValidationError::MissingIncludes { compiler, slot } => {
                Diagnostic::error(format!("no includes defined for compiler `{}`", compiler))
                    .with_context(format!("[{}] has no include paths for the main role", slot))
                    .with_suggestion(format!(
                        "Add `[{}.includes]` with `main = [\"src/main/include\"]`",
                        slot
                    ))
            }

            ValidationError::NoBuildPath { linker, directory } => Diagnostic::error(format!(
                "no compilers defined for linker `{}`, and no alternate source directory",
                linker
            ))
            .with_location(directory.clone())
            .with_suggestion("Define a compiler in [cpp], [c] or [fortran]")
            .with_suggestion(format!(
                "Create the GNU-style source directory {}",
                directory.display()
            )),
        }
    }
}
