//! Dataset name resolution.

use crate::data::DatasetName;
use crate::error::{Result, SummaryError};
use serde::Serialize;
use std::collections::HashSet;

/// Non-fatal condition reported alongside a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A dataset label was not a valid identifier and has been renamed.
    InvalidName { original: String, sanitized: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::InvalidName {
                original,
                sanitized,
            } => write!(
                f,
                "dataset name '{}' is not a valid identifier, using '{}'",
                original, sanitized
            ),
        }
    }
}

/// Resolve the names of `n` datasets.
///
/// Without labels, datasets are named `Phys1..PhysN`. Supplied labels are
/// sanitized, with a diagnostic for every label that changed.
///
/// # Errors
/// - [`SummaryError::DimensionMismatch`] if the label count differs from `n`.
/// - [`SummaryError::DuplicateDatasetName`] if two datasets end up with the same name.
pub fn resolve_names(
    labels: Option<&[&str]>,
    n: usize,
) -> Result<(Vec<DatasetName>, Vec<Diagnostic>)> {
    let mut diagnostics = Vec::new();

    let names: Vec<DatasetName> = match labels {
        None => (0..n).map(DatasetName::synthesized).collect(),
        Some(labels) => {
            if labels.len() != n {
                return Err(SummaryError::DimensionMismatch {
                    expected: n,
                    actual: labels.len(),
                });
            }
            labels
                .iter()
                .map(|&label| {
                    let name = DatasetName::sanitize(label);
                    if name.as_str() != label {
                        log::warn!("Renamed dataset '{}' to '{}'", label, name);
                        diagnostics.push(Diagnostic::InvalidName {
                            original: label.to_string(),
                            sanitized: name.to_string(),
                        });
                    }
                    name
                })
                .collect()
        }
    };

    let mut seen = HashSet::new();
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(SummaryError::DuplicateDatasetName(name.to_string()));
        }
    }

    Ok((names, diagnostics))
}
