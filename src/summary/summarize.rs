//! Summary statistics for a single count matrix.

use super::descriptive::{cqv, max, mean, median, min, quartiles};
use super::{StatRecord, Statistic};
use crate::data::CountMatrix;
use crate::error::{Result, SummaryError};

/// Summarize a count matrix.
///
/// Always reports the basic statistics (sample and OTU counts, total reads,
/// mean reads per OTU and per sample). With `extended` set, also reports the
/// distribution of per-OTU and per-sample totals, OTU prevalence, singletons
/// and the number of zero cells.
///
/// Quartile-based CQV may be non-finite (for example when most totals are
/// zero); that is a valid value, not an error.
///
/// # Errors
/// [`SummaryError::EmptyDataset`] when the matrix has no samples or no OTUs.
pub fn summarize(counts: &CountMatrix, extended: bool) -> Result<StatRecord> {
    let n_features = counts.n_features();
    let n_samples = counts.n_samples();
    if n_features == 0 || n_samples == 0 {
        return Err(SummaryError::EmptyDataset {
            dataset: "unnamed".to_string(),
            n_features,
            n_samples,
        });
    }

    let otu_totals = to_f64(&counts.row_sums());
    let sample_totals = to_f64(&counts.col_sums());
    let total_reads: f64 = otu_totals.iter().sum();

    let mut values = vec![
        (Statistic::NumberOfSamples, n_samples as f64),
        (Statistic::NumberOfOtus, n_features as f64),
        (Statistic::TotalReads, total_reads),
        (Statistic::MeanReadsPerOtu, mean(&otu_totals)),
        (Statistic::MeanReadsPerSample, mean(&sample_totals)),
    ];

    if extended {
        let (otu_q1, otu_q3) = quartiles(&otu_totals);
        let prevalence: Vec<f64> = counts
            .occurrence_fraction()
            .into_iter()
            .map(|p| p * 100.0)
            .collect();
        let n_singletons = otu_totals.iter().filter(|&&t| t == 1.0).count() as f64;

        values.extend([
            (Statistic::MedianReadsPerOtu, median(&otu_totals)),
            (Statistic::MinReadsPerOtu, min(&otu_totals)),
            (Statistic::Q1ReadsPerOtu, otu_q1),
            (Statistic::Q3ReadsPerOtu, otu_q3),
            (Statistic::MaxReadsPerOtu, max(&otu_totals)),
            (Statistic::CqvReadsPerOtu, cqv(otu_q1, otu_q3)),
            (Statistic::MeanOtuPrevalence, mean(&prevalence)),
            (Statistic::MedianOtuPrevalence, median(&prevalence)),
            (Statistic::NumberOfSingletons, n_singletons),
            (
                Statistic::PercentageOfSingletons,
                n_singletons / n_features as f64 * 100.0,
            ),
        ]);

        let (sample_q1, sample_q3) = quartiles(&sample_totals);
        values.extend([
            (Statistic::MedianReadsPerSample, median(&sample_totals)),
            (Statistic::MinReadsPerSample, min(&sample_totals)),
            (Statistic::Q1ReadsPerSample, sample_q1),
            (Statistic::Q3ReadsPerSample, sample_q3),
            (Statistic::MaxReadsPerSample, max(&sample_totals)),
            (Statistic::CqvReadsPerSample, cqv(sample_q1, sample_q3)),
        ]);

        let n_zeros = counts.zero_count() as f64;
        values.extend([
            (Statistic::NumberOfZeros, n_zeros),
            (
                Statistic::PercentageOfZeros,
                n_zeros / counts.cell_count() as f64 * 100.0,
            ),
        ]);
    }

    Ok(StatRecord::from_pairs(values))
}

fn to_f64(values: &[u64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}
