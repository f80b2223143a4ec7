//! Long and wide summary tables.

use crate::data::DatasetName;
use crate::error::{Result, SummaryError};
use crate::summary::{format_value, StatRecord, Statistic};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

/// One `(dataset, statistic, value)` observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRow {
    pub dataset: DatasetName,
    pub statistic: Statistic,
    pub value: f64,
}

/// Summary table with one row per dataset/statistic pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LongTable {
    pub rows: Vec<LongRow>,
}

impl LongTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every statistic of `record`, tagged with `dataset`.
    pub fn push_record(&mut self, dataset: &DatasetName, record: &StatRecord) {
        self.rows.extend(record.iter().map(|(statistic, value)| LongRow {
            dataset: dataset.clone(),
            statistic,
            value,
        }));
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pivot to one row per statistic and one column per dataset.
    ///
    /// Rows and columns keep the order in which statistics and datasets are
    /// first seen. Cells with no observation are NaN.
    pub fn pivot_wider(&self) -> WideTable {
        let mut datasets: Vec<DatasetName> = Vec::new();
        let mut dataset_index: HashMap<&DatasetName, usize> = HashMap::new();
        for row in &self.rows {
            if !dataset_index.contains_key(&row.dataset) {
                dataset_index.insert(&row.dataset, datasets.len());
                datasets.push(row.dataset.clone());
            }
        }

        let mut rows: Vec<WideRow> = Vec::new();
        let mut row_index: HashMap<Statistic, usize> = HashMap::new();
        for row in &self.rows {
            let idx = *row_index.entry(row.statistic).or_insert_with(|| {
                rows.push(WideRow {
                    statistic: row.statistic,
                    values: vec![f64::NAN; datasets.len()],
                });
                rows.len() - 1
            });
            rows[idx].values[dataset_index[&row.dataset]] = row.value;
        }

        WideTable { datasets, rows }
    }

    /// Write as delimited text with a `dataset, statistic, value` header.
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);
        wtr.write_record(["dataset", "statistic", "value"])?;
        for row in &self.rows {
            wtr.write_record([
                row.dataset.as_str(),
                row.statistic.label(),
                row.value.to_string().as_str(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for LongTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .rows
            .iter()
            .map(|r| r.dataset.as_str().len())
            .chain(std::iter::once("Dataset".len()))
            .max()
            .unwrap_or(0);
        let stat_width = self
            .rows
            .iter()
            .map(|r| r.statistic.label().len())
            .chain(std::iter::once("Statistic".len()))
            .max()
            .unwrap_or(0);

        writeln!(f, "{:<name_width$}  {:<stat_width$}  Value", "Dataset", "Statistic")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<name_width$}  {:<stat_width$}  {}",
                row.dataset.as_str(),
                row.statistic.label(),
                format_value(row.value)
            )?;
        }
        Ok(())
    }
}

/// One statistic across all datasets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WideRow {
    pub statistic: Statistic,
    /// Values in dataset column order.
    pub values: Vec<f64>,
}

/// Summary table with one row per statistic and one column per dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WideTable {
    pub datasets: Vec<DatasetName>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    /// Row for a statistic, if present.
    pub fn row(&self, statistic: Statistic) -> Option<&WideRow> {
        self.rows.iter().find(|r| r.statistic == statistic)
    }

    /// Single cell lookup.
    ///
    /// `None` if the statistic, the dataset or the cell itself is absent.
    pub fn value(&self, statistic: Statistic, dataset: &str) -> Option<f64> {
        let col = self.datasets.iter().position(|d| d.as_str() == dataset)?;
        self.row(statistic)?.values.get(col).copied()
    }

    /// Statistics in row order.
    pub fn statistics(&self) -> Vec<Statistic> {
        self.rows.iter().map(|r| r.statistic).collect()
    }

    /// Pivot back to one row per dataset/statistic pair, dataset by dataset.
    ///
    /// Cells missing from a short `values` vector become NaN.
    pub fn pivot_longer(&self) -> LongTable {
        let rows = self
            .datasets
            .iter()
            .enumerate()
            .flat_map(|(col, dataset)| {
                self.rows.iter().map(move |row| LongRow {
                    dataset: dataset.clone(),
                    statistic: row.statistic,
                    value: row.values.get(col).copied().unwrap_or(f64::NAN),
                })
            })
            .collect();
        LongTable { rows }
    }

    /// Append "Percentage of reads" and "Percentage of OTUs" rows.
    ///
    /// Each value is `100 × value / max(value)` over the datasets for total
    /// reads and OTU count respectively.
    ///
    /// # Errors
    /// [`SummaryError::MissingStatistic`] if a source row is absent.
    pub fn append_relative_percentages(&mut self) -> Result<()> {
        let sources = [
            (Statistic::TotalReads, Statistic::PercentageOfReads),
            (Statistic::NumberOfOtus, Statistic::PercentageOfOtus),
        ];

        let mut derived = Vec::with_capacity(sources.len());
        for (source, target) in sources {
            let row = self
                .row(source)
                .ok_or(SummaryError::MissingStatistic(source))?;
            derived.push(WideRow {
                statistic: target,
                values: relative_to_max(&row.values),
            });
        }

        self.rows.extend(derived);
        Ok(())
    }

    /// Write as delimited text with a `statistic, <datasets...>` header.
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        let mut header = vec!["statistic".to_string()];
        header.extend(self.datasets.iter().map(|d| d.to_string()));
        wtr.write_record(&header)?;

        for row in &self.rows {
            let mut record = vec![row.statistic.label().to_string()];
            record.extend(row.values.iter().map(|v| v.to_string()));
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for WideTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stat_width = self
            .rows
            .iter()
            .map(|r| r.statistic.label().len())
            .chain(std::iter::once("Statistic".len()))
            .max()
            .unwrap_or(0);

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.values.iter().map(|&v| format_value(v)).collect())
            .collect();
        let col_widths: Vec<usize> = self
            .datasets
            .iter()
            .enumerate()
            .map(|(col, d)| {
                cells
                    .iter()
                    .map(|row| row[col].len())
                    .chain(std::iter::once(d.as_str().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:<stat_width$}", "Statistic")?;
        for (dataset, width) in self.datasets.iter().zip(&col_widths) {
            write!(f, "  {:>width$}", dataset.as_str(), width = *width)?;
        }
        writeln!(f)?;

        for (row, row_cells) in self.rows.iter().zip(&cells) {
            write!(f, "{:<stat_width$}", row.statistic.label())?;
            for (cell, width) in row_cells.iter().zip(&col_widths) {
                write!(f, "  {:>width$}", cell, width = *width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A summary table in either layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", content = "table", rename_all = "snake_case")]
pub enum SummaryTable {
    Long(LongTable),
    Wide(WideTable),
}

impl SummaryTable {
    /// The wide table, if this is one.
    pub fn as_wide(&self) -> Option<&WideTable> {
        match self {
            SummaryTable::Wide(t) => Some(t),
            SummaryTable::Long(_) => None,
        }
    }

    /// The long table, if this is one.
    pub fn as_long(&self) -> Option<&LongTable> {
        match self {
            SummaryTable::Long(t) => Some(t),
            SummaryTable::Wide(_) => None,
        }
    }

    /// Statistics present in the table, in first-seen order.
    pub fn statistics(&self) -> Vec<Statistic> {
        match self {
            SummaryTable::Wide(t) => t.statistics(),
            SummaryTable::Long(t) => {
                let mut seen = Vec::new();
                for row in &t.rows {
                    if !seen.contains(&row.statistic) {
                        seen.push(row.statistic);
                    }
                }
                seen
            }
        }
    }

    /// Write as delimited text (e.g. `b'\t'` or `b','`).
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        match self {
            SummaryTable::Long(t) => t.write_delimited(writer, delimiter),
            SummaryTable::Wide(t) => t.write_delimited(writer, delimiter),
        }
    }

    /// Render as a delimited string.
    pub fn to_delimited_string(&self, delimiter: u8) -> Result<String> {
        let mut buf = Vec::new();
        self.write_delimited(&mut buf, delimiter)?;
        String::from_utf8(buf)
            .map_err(|e| SummaryError::InvalidParameter(format!("non UTF-8 output: {}", e)))
    }
}

impl std::fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryTable::Long(t) => std::fmt::Display::fmt(t, f),
            SummaryTable::Wide(t) => std::fmt::Display::fmt(t, f),
        }
    }
}

fn relative_to_max(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values.iter().map(|&v| 100.0 * v / max).collect()
}
