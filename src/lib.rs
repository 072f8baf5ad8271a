//! green-metrics crate
//!
//! Exports the Green Impact metrics of one CAST Highlight application to an Excel
//! workbook where each rule's remediation effort is priced by a cost the reader enters.
//!
//! # Module Organization
//!
//! - [`config`]: configuration file loading and validation
//! - [`highlight`]: the Highlight REST client and response model
//! - [`metrics`]: transformation of service records into report rows
//! - [`reports`]: spreadsheet layout and generation
//! - [`commands`]: command-line entry point and pipeline orchestration

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod error;

#[doc(hidden)]
pub mod highlight;

#[doc(hidden)]
pub mod metrics;

#[doc(hidden)]
pub mod reports;

pub use crate::commands::{Host, run};
