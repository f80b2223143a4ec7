//! Comparative summaries of microbiome count matrices.
//!
//! This library computes descriptive statistics for one or more
//! OTU-by-sample count matrices and lays them out side by side, so that
//! related datasets (for example raw and filtered versions of the same
//! study) can be compared at a glance.
//!
//! # Overview
//!
//! - **data**: Core data structures (CountMatrix, DatasetName)
//! - **summary**: Per-dataset statistics (basic and extended)
//! - **compare**: Multi-dataset tables (long/wide layouts, relative percentages)
//!
//! # Example
//!
//! ```no_run
//! use community_summary::prelude::*;
//!
//! let raw = CountMatrix::from_tsv("raw.tsv").unwrap();
//! let filtered = CountMatrix::from_tsv("filtered.tsv").unwrap();
//!
//! let report = build_summary(
//!     &[("raw", &raw), ("filtered", &filtered)],
//!     SummaryOptions { extended: true, long: false },
//! )
//! .unwrap();
//! println!("{}", report.table);
//! ```

pub mod compare;
pub mod data;
pub mod error;
pub mod summary;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::compare::{
        build_summary, build_summary_unlabeled, resolve_names, Diagnostic, LongRow, LongTable,
        SummaryOptions, SummaryReport, SummaryTable, WideRow, WideTable,
    };
    pub use crate::data::{CountMatrix, DatasetName};
    pub use crate::error::{Result, SummaryError};
    pub use crate::summary::{summarize, StatRecord, Statistic};
}
