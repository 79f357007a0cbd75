//! High-level operations.
//!
//! This module contains the implementation of nar-validate commands.

pub mod validate;

pub use validate::{
    format_report, format_report_for_output, format_report_json, validate, validate_with,
    OutputFormat, ValidationError, ValidationReport,
};
