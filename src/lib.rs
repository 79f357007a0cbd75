//! nar-validate - pre-build validation for native (C, C++, Fortran) projects
//!
//! This crate checks, before any compiler or linker is invoked, that a
//! project's native build configuration can be resolved on the current host:
//! the platform identifier, the linker toolchain, compiler include paths and
//! the fallback GNU-style source layout.

pub mod core;
pub mod ops;
pub mod toolchain;
pub mod util;

/// Test utilities and mocks for unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock toolchain probe and project fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{aol::Aol, project::NarProject};
pub use ops::{validate, ValidationError, ValidationReport};
pub use util::context::GlobalContext;
