//! # Traditions
//!
//! Descriptive statistics and pattern mining over a hand-curated dataset of
//! wellbeing traditions (meditation styles, psychotherapies, psychedelic
//! protocols, somatic and contemplative practices).
//!
//! The dataset lives in a single JSON file. Two utilities maintain it
//! ([`expand`] appends a curated batch, [`sync`] rebuilds it from a
//! published spreadsheet) and the [`analysis`] layer reads it once and
//! prints seven sections of findings.

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod expand;
pub mod sync;

pub use analysis::{Analyzer, Report};
pub use dataset::{
    ComplexityDimension, ComplexityProfile, DatasetError, DatasetStore, Effectiveness,
    OutcomeDimension, Tradition, TraditionsDocument,
};
pub use sync::SyncError;
