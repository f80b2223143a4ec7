//! Side-by-side summaries of several count matrices.
//!
//! Each dataset is summarized independently, the records are stacked into a
//! long table in input order, and unless a long table is requested the result
//! is pivoted to one column per dataset. Wide tables comparing two or more
//! datasets also get "Percentage of reads" and "Percentage of OTUs" rows.

mod names;
mod table;

pub use names::{resolve_names, Diagnostic};
pub use table::{LongRow, LongTable, SummaryTable, WideRow, WideTable};

use crate::data::{CountMatrix, DatasetName};
use crate::error::{Result, SummaryError};
use crate::summary::{summarize, StatRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Options controlling what a summary contains and how it is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Include distributional statistics (quartiles, CQV, prevalence, zeros).
    pub extended: bool,
    /// Return one row per dataset/statistic pair instead of a wide table.
    /// Long tables never carry the relative percentage rows.
    pub long: bool,
}

impl SummaryOptions {
    /// Load from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(SummaryError::from)
    }

    /// Save to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(SummaryError::from)
    }
}

/// A summary table together with the non-fatal diagnostics raised building it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub table: SummaryTable,
    pub diagnostics: Vec<Diagnostic>,
}

/// Summarize labelled datasets into one comparison table.
///
/// Labels are sanitized into valid identifiers; every renamed label is
/// reported in [`SummaryReport::diagnostics`].
///
/// # Errors
/// - [`SummaryError::EmptyData`] when no datasets are given.
/// - [`SummaryError::DuplicateDatasetName`] when two labels sanitize to the same name.
/// - [`SummaryError::EmptyDataset`] when any matrix has no OTUs or no samples.
pub fn build_summary(
    datasets: &[(&str, &CountMatrix)],
    options: SummaryOptions,
) -> Result<SummaryReport> {
    let labels: Vec<&str> = datasets.iter().map(|(label, _)| *label).collect();
    let (names, diagnostics) = resolve_names(Some(labels.as_slice()), datasets.len())?;
    let counts: Vec<&CountMatrix> = datasets.iter().map(|(_, counts)| *counts).collect();
    build_named(&names, &counts, options, diagnostics)
}

/// Summarize unlabelled datasets, naming them `Phys1..PhysN` in input order.
pub fn build_summary_unlabeled(
    datasets: &[&CountMatrix],
    options: SummaryOptions,
) -> Result<SummaryReport> {
    let (names, diagnostics) = resolve_names(None, datasets.len())?;
    build_named(&names, datasets, options, diagnostics)
}

fn build_named(
    names: &[DatasetName],
    datasets: &[&CountMatrix],
    options: SummaryOptions,
    diagnostics: Vec<Diagnostic>,
) -> Result<SummaryReport> {
    if datasets.is_empty() {
        return Err(SummaryError::EmptyData(
            "At least one dataset is required".to_string(),
        ));
    }

    // Indexed parallel collect keeps input order
    let records: Vec<StatRecord> = names
        .par_iter()
        .zip(datasets.par_iter())
        .map(|(name, counts)| {
            log::debug!(
                "Summarizing '{}' ({} OTUs x {} samples)",
                name,
                counts.n_features(),
                counts.n_samples()
            );
            summarize(counts, options.extended).map_err(|e| e.for_dataset(name.as_str()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut long = LongTable::new();
    for (name, record) in names.iter().zip(&records) {
        long.push_record(name, record);
    }

    let table = if options.long {
        SummaryTable::Long(long)
    } else {
        let mut wide = long.pivot_wider();
        if wide.datasets.len() > 1 {
            wide.append_relative_percentages()?;
        }
        SummaryTable::Wide(wide)
    };

    Ok(SummaryReport { table, diagnostics })
}
