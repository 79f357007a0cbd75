//! Command implementations

pub mod aol;
pub mod completions;
pub mod validate;
