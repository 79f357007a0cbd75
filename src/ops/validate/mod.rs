//! Pre-build validation of a native project.
//!
//! Confirms, before any compiler or linker runs, that the project's build
//! configuration is consistent and resolvable on this host.
//!
//! ## Stages
//!
//! 1. Resolve the platform identifier (AOL)
//! 2. Query the linker for its version
//! 3. Check every configured compiler has main-role include paths
//! 4. Require at least one compiler or the GNU-style source directory
//!
//! The first violated rule stops validation.

mod errors;
mod format;
mod types;

use crate::core::aol::{Aol, HostPlatform};
use crate::core::compiler::BuildRole;
use crate::core::linker::Linker;
use crate::core::project::NarProject;
use crate::toolchain::{ProcessProbe, ToolchainProbe};
use crate::util::config::Config;

pub use self::errors::ValidationError;
pub use self::format::{format_report, format_report_for_output, format_report_json};
pub use self::types::{ConfiguredCompiler, OutputFormat, ValidationReport};

/// Validate a project on the current host, running the real linker.
pub fn validate(
    project: &NarProject,
    config: &Config,
) -> Result<ValidationReport, ValidationError> {
    validate_with(project, &HostPlatform::current(), &ProcessProbe, config)
}

/// Validate a project against an explicit host and toolchain probe.
pub fn validate_with<P>(
    project: &NarProject,
    host: &HostPlatform,
    probe: &P,
    config: &Config,
) -> Result<ValidationReport, ValidationError>
where
    P: ToolchainProbe + ?Sized,
{
    let linker = select_linker(project, host, config);

    let aol = resolve_aol(host, &linker, config)?;
    tracing::info!("Using AOL: {}", aol);

    let mut warnings = Vec::new();
    if config.aol.is_some() {
        if let Some(warning) = override_mismatch(&aol, host, &linker) {
            tracing::debug!("{}", warning);
            warnings.push(warning);
        }
    }

    let linker_version = linker
        .version(probe)
        .map_err(|source| ValidationError::ToolchainNotFound {
            linker: linker.name().to_string(),
            source,
        })?;
    tracing::debug!("Using linker version: {}", linker_version);

    let compilers = check_compilers(project)?;

    let alternate_source_directory = if compilers.is_empty() {
        let layout = project.layout();
        if !layout.alternate_source_exists() {
            return Err(ValidationError::NoBuildPath {
                linker: linker.name().to_string(),
                directory: layout.alternate_source_directory().to_path_buf(),
            });
        }
        tracing::debug!(
            "No compilers configured, using GNU sources in {}",
            layout.alternate_source_directory().display()
        );
        Some(layout.alternate_source_directory().to_path_buf())
    } else {
        None
    };

    Ok(ValidationReport {
        project: project.name().to_string(),
        aol,
        linker: linker.name().to_string(),
        linker_version,
        compilers,
        alternate_source_directory,
        warnings,
    })
}

/// Resolve the linker: descriptor settings overlaid by tool configuration.
///
/// A relative linker path is taken from the project root.
pub fn select_linker(project: &NarProject, host: &HostPlatform, config: &Config) -> Linker {
    let mut linker_config = project.linker().clone();
    linker_config.merge(&config.linker);
    linker_config.resolve_path(project.root());
    Linker::from_config(&linker_config, host)
}

/// Resolve the AOL from the configured override or the host facts.
pub fn resolve_aol(
    host: &HostPlatform,
    linker: &Linker,
    config: &Config,
) -> Result<Aol, ValidationError> {
    let aol = match config.aol.as_deref() {
        Some(aol_override) => {
            tracing::debug!("AOL overridden by configuration: {}", aol_override);
            aol_override.parse::<Aol>()?
        }
        None => Aol::resolve(host, linker.name())?,
    };
    Ok(aol)
}

/// Describe an overridden AOL whose linker differs from the selected one.
///
/// The override still wins; the mismatch is only reported.
fn override_mismatch(aol: &Aol, host: &HostPlatform, linker: &Linker) -> Option<String> {
    let expected = Aol::resolve(host, linker.name()).ok()?;
    if expected.linker() == aol.linker() {
        return None;
    }
    Some(format!(
        "AOL override `{}` names linker `{}`, but the selected linker is `{}`",
        aol,
        aol.linker(),
        linker.name()
    ))
}

fn check_compilers(project: &NarProject) -> Result<Vec<ConfiguredCompiler>, ValidationError> {
    let mut checked = Vec::new();

    for (slot, compiler) in project.configured_compilers() {
        let includes = compiler.includes(BuildRole::Main);
        if includes.is_empty() {
            return Err(ValidationError::MissingIncludes {
                compiler: compiler.name().to_string(),
                slot,
            });
        }

        tracing::debug!(
            "Compiler [{}] {} has {} main include path(s)",
            slot,
            compiler.name(),
            includes.len()
        );
        checked.push(ConfiguredCompiler {
            slot,
            name: compiler.name().to_string(),
            includes: includes.len(),
        });
    }

    Ok(checked)
}
