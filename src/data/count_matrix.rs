//! Count matrix with sparse storage for microbiome abundance data.

use crate::error::{Result, SummaryError};
use rayon::prelude::*;
use sprs::{CsMat, TriMat};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A sparse count matrix storing OTU abundances across samples.
///
/// Rows represent features (OTUs/taxa), columns represent samples.
/// Uses CSR (Compressed Sparse Row) format for efficient row-wise operations.
#[derive(Debug, Clone)]
pub struct CountMatrix {
    /// Sparse matrix in CSR format (features × samples)
    data: CsMat<u64>,
    /// Feature identifiers (row names)
    feature_ids: Vec<String>,
    /// Sample identifiers (column names)
    sample_ids: Vec<String>,
}

impl CountMatrix {
    /// Create a new CountMatrix from a sparse matrix and identifiers.
    pub fn new(
        data: CsMat<u64>,
        feature_ids: Vec<String>,
        sample_ids: Vec<String>,
    ) -> Result<Self> {
        let (nrows, ncols) = data.shape();
        if nrows != feature_ids.len() {
            return Err(SummaryError::DimensionMismatch {
                expected: nrows,
                actual: feature_ids.len(),
            });
        }
        if ncols != sample_ids.len() {
            return Err(SummaryError::DimensionMismatch {
                expected: ncols,
                actual: sample_ids.len(),
            });
        }
        Ok(Self {
            data: data.to_csr(),
            feature_ids,
            sample_ids,
        })
    }

    /// Load a count matrix from a TSV file.
    ///
    /// Expected format:
    /// - First row: header with sample IDs (first column is feature ID header)
    /// - Subsequent rows: feature ID followed by counts
    ///
    /// Blank lines are skipped. Missing trailing cells are read as zero.
    pub fn from_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| SummaryError::EmptyData("Empty TSV file".to_string()))??;
        let header: Vec<&str> = header_line.trim_end_matches('\r').split('\t').collect();
        if header.len() < 2 {
            return Err(SummaryError::EmptyData(
                "TSV must have at least one sample".to_string(),
            ));
        }
        let sample_ids: Vec<String> = header[1..].iter().map(|s| s.to_string()).collect();
        let n_samples = sample_ids.len();

        let mut triplets: Vec<(usize, usize, u64)> = Vec::new();
        let mut feature_ids: Vec<String> = Vec::new();

        for line_result in lines {
            let line = line_result?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let row_idx = feature_ids.len();
            feature_ids.push(fields[0].to_string());

            for (col_idx, value_str) in fields[1..].iter().enumerate() {
                if col_idx >= n_samples {
                    break;
                }
                let value: u64 = value_str.trim().parse().map_err(|_| SummaryError::InvalidCount {
                    value: value_str.to_string(),
                    row: row_idx,
                    col: col_idx,
                })?;
                if value > 0 {
                    triplets.push((row_idx, col_idx, value));
                }
            }
        }

        let mut tri_mat = TriMat::new((feature_ids.len(), n_samples));
        for (row, col, val) in triplets {
            tri_mat.add_triplet(row, col, val);
        }

        Self::new(tri_mat.to_csr(), feature_ids, sample_ids)
    }

    /// Write the count matrix to a TSV file.
    pub fn to_tsv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        write!(writer, "feature_id")?;
        for sample_id in &self.sample_ids {
            write!(writer, "\t{}", sample_id)?;
        }
        writeln!(writer)?;

        for (row_idx, feature_id) in self.feature_ids.iter().enumerate() {
            write!(writer, "{}", feature_id)?;
            for col_idx in 0..self.n_samples() {
                write!(writer, "\t{}", self.get(row_idx, col_idx))?;
            }
            writeln!(writer)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Get the value at (row, col), returning 0 for missing entries.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.data.get(row, col).copied().unwrap_or(0)
    }

    /// Number of features (rows).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.data.rows()
    }

    /// Number of samples (columns).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.data.cols()
    }

    /// Total number of cells (features × samples).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.n_features() * self.n_samples()
    }

    /// Number of zero-valued cells.
    ///
    /// Explicitly stored zeros are counted as zeros.
    pub fn zero_count(&self) -> usize {
        let nonzero = self.data.iter().filter(|(&val, _)| val > 0).count();
        self.cell_count() - nonzero
    }

    /// Feature identifiers.
    #[inline]
    pub fn feature_ids(&self) -> &[String] {
        &self.feature_ids
    }

    /// Sample identifiers.
    #[inline]
    pub fn sample_ids(&self) -> &[String] {
        &self.sample_ids
    }

    /// Compute row sums (total counts per feature).
    pub fn row_sums(&self) -> Vec<u64> {
        (0..self.n_features())
            .into_par_iter()
            .map(|row| {
                self.data
                    .outer_view(row)
                    .map(|v| v.iter().map(|(_, &val)| val).sum())
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Compute column sums (library sizes per sample).
    pub fn col_sums(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.n_samples()];
        for row_vec in self.data.outer_iterator() {
            for (col, &val) in row_vec.iter() {
                sums[col] += val;
            }
        }
        sums
    }

    /// Fraction of samples in which each feature has a non-zero count.
    ///
    /// Values lie in `[0, 1]`. A matrix without samples yields NaN per feature.
    pub fn occurrence_fraction(&self) -> Vec<f64> {
        let n_samples = self.n_samples() as f64;
        self.data
            .outer_iterator()
            .map(|row_vec| {
                let present = row_vec.iter().filter(|(_, &val)| val > 0).count();
                present as f64 / n_samples
            })
            .collect()
    }
}
