//! `verdict-recon`: golden-vs-report test outcome reconciliation.
//!
//! Pure engine crate: receives parsed result sets, returns annotated rows.
//! No CLI or filesystem dependencies.

pub mod classify;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod model;
pub mod style;
pub mod summary;

pub use classify::{classify, Outcome};
pub use config::ReconConfig;
pub use document::{parse_result_set, ScopePolicy};
pub use engine::{reconcile, reconcile_with, CaseSensitivity, CompareOptions};
pub use error::ReconError;
pub use model::{ComparisonRow, Reconciliation, ReportResult, ResultSet, TestOutcomeRecord, Warning};
pub use style::{style_for, Palette, Rgb, StyleToken};
pub use summary::ReconSummary;
