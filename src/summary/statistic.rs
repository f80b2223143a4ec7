//! Fixed set of statistics reported for each dataset.

use serde::{Serialize, Serializer};

/// A statistic reported in a summary table.
///
/// Variants are declared in canonical report order: basic statistics first,
/// then the extended feature-wise, sample-wise and matrix-wise groups, and
/// finally the cross-dataset percentages that only appear in wide tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statistic {
    NumberOfSamples,
    NumberOfOtus,
    TotalReads,
    MeanReadsPerOtu,
    MeanReadsPerSample,

    MedianReadsPerOtu,
    MinReadsPerOtu,
    Q1ReadsPerOtu,
    Q3ReadsPerOtu,
    MaxReadsPerOtu,
    CqvReadsPerOtu,
    MeanOtuPrevalence,
    MedianOtuPrevalence,
    NumberOfSingletons,
    PercentageOfSingletons,

    MedianReadsPerSample,
    MinReadsPerSample,
    Q1ReadsPerSample,
    Q3ReadsPerSample,
    MaxReadsPerSample,
    CqvReadsPerSample,

    NumberOfZeros,
    PercentageOfZeros,

    PercentageOfReads,
    PercentageOfOtus,
}

impl Statistic {
    /// Statistics always computed for a dataset.
    pub const BASIC: &'static [Statistic] = &[
        Statistic::NumberOfSamples,
        Statistic::NumberOfOtus,
        Statistic::TotalReads,
        Statistic::MeanReadsPerOtu,
        Statistic::MeanReadsPerSample,
    ];

    /// Statistics added when an extended summary is requested.
    pub const EXTENDED: &'static [Statistic] = &[
        Statistic::MedianReadsPerOtu,
        Statistic::MinReadsPerOtu,
        Statistic::Q1ReadsPerOtu,
        Statistic::Q3ReadsPerOtu,
        Statistic::MaxReadsPerOtu,
        Statistic::CqvReadsPerOtu,
        Statistic::MeanOtuPrevalence,
        Statistic::MedianOtuPrevalence,
        Statistic::NumberOfSingletons,
        Statistic::PercentageOfSingletons,
        Statistic::MedianReadsPerSample,
        Statistic::MinReadsPerSample,
        Statistic::Q1ReadsPerSample,
        Statistic::Q3ReadsPerSample,
        Statistic::MaxReadsPerSample,
        Statistic::CqvReadsPerSample,
        Statistic::NumberOfZeros,
        Statistic::PercentageOfZeros,
    ];

    /// Cross-dataset statistics appended to wide tables.
    pub const RELATIVE: &'static [Statistic] =
        &[Statistic::PercentageOfReads, Statistic::PercentageOfOtus];

    /// Label used as the row name in summary tables.
    pub fn label(&self) -> &'static str {
        match self {
            Statistic::NumberOfSamples => "Number of samples",
            Statistic::NumberOfOtus => "Number of OTUs",
            Statistic::TotalReads => "Total number of reads",
            Statistic::MeanReadsPerOtu => "Average number of reads per OTU",
            Statistic::MeanReadsPerSample => "Average number of reads per sample",
            Statistic::MedianReadsPerOtu => "Median number of reads per OTU",
            Statistic::MinReadsPerOtu => "Min number of reads per OTU",
            Statistic::Q1ReadsPerOtu => "Q1 number of reads per OTU",
            Statistic::Q3ReadsPerOtu => "Q3 number of reads per OTU",
            Statistic::MaxReadsPerOtu => "Max number of reads per OTU",
            Statistic::CqvReadsPerOtu => "CQV of reads per OTU",
            Statistic::MeanOtuPrevalence => "Average OTU prevalence (%)",
            Statistic::MedianOtuPrevalence => "Median OTU prevalence (%)",
            Statistic::NumberOfSingletons => "Number of singleton OTUs",
            Statistic::PercentageOfSingletons => "Percentage of singleton OTUs",
            Statistic::MedianReadsPerSample => "Median number of reads per sample",
            Statistic::MinReadsPerSample => "Min number of reads per sample",
            Statistic::Q1ReadsPerSample => "Q1 number of reads per sample",
            Statistic::Q3ReadsPerSample => "Q3 number of reads per sample",
            Statistic::MaxReadsPerSample => "Max number of reads per sample",
            Statistic::CqvReadsPerSample => "CQV of reads per sample",
            Statistic::NumberOfZeros => "Number of zeros",
            Statistic::PercentageOfZeros => "Percentage of zeros",
            Statistic::PercentageOfReads => "Percentage of reads",
            Statistic::PercentageOfOtus => "Percentage of OTUs",
        }
    }

    /// Look up a statistic by its table label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::BASIC
            .iter()
            .chain(Self::EXTENDED)
            .chain(Self::RELATIVE)
            .copied()
            .find(|s| s.label() == label)
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Statistic {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_follow_declaration_order() {
        let all: Vec<Statistic> = Statistic::BASIC
            .iter()
            .chain(Statistic::EXTENDED)
            .chain(Statistic::RELATIVE)
            .copied()
            .collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
        assert_eq!(all.len(), 25);
    }

    #[test]
    fn test_label_lookup() {
        for stat in Statistic::BASIC.iter().chain(Statistic::EXTENDED) {
            assert_eq!(Statistic::from_label(stat.label()), Some(*stat));
        }
        assert_eq!(
            Statistic::from_label("Percentage of reads"),
            Some(Statistic::PercentageOfReads)
        );
        assert_eq!(Statistic::from_label("Number of reads"), None);
    }
}
