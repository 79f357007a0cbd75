//! Core data structures.
//!
//! This module contains the read-only view of a native project:
//! - Platform identifiers (AOL) and host facts
//! - Linker and compiler descriptors
//! - The project descriptor and its source layout

pub mod aol;
pub mod compiler;
pub mod linker;
pub mod project;

pub use aol::{Aol, AolError, HostPlatform};
pub use compiler::{BuildRole, CompilerConfig, CompilerSlot};
pub use linker::{Linker, LinkerConfig};
pub use project::{find_descriptor, NarProject, ProjectLayout, DESCRIPTOR_NAME};
