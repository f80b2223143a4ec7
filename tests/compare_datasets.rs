//! Integration tests for multi-dataset summaries.

use community_summary::prelude::*;
use sprs::TriMat;
use std::io::Write;
use tempfile::NamedTempFile;

/// Build a matrix from dense rows (OTUs × samples).
fn from_rows(rows: &[&[u64]]) -> CountMatrix {
    let n_features = rows.len();
    let n_samples = rows.first().map(|r| r.len()).unwrap_or(0);
    let mut tri_mat = TriMat::new((n_features, n_samples));
    for (i, row) in rows.iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            if val > 0 {
                tri_mat.add_triplet(i, j, val);
            }
        }
    }
    let feature_ids = (0..n_features).map(|i| format!("OTU{}", i + 1)).collect();
    let sample_ids = (0..n_samples).map(|j| format!("S{}", j + 1)).collect();
    CountMatrix::new(tri_mat.to_csr(), feature_ids, sample_ids).unwrap()
}

/// A raw dataset and a filtered copy with the singleton OTUs removed.
fn create_raw_and_filtered() -> (CountMatrix, CountMatrix) {
    let raw = from_rows(&[
        &[1, 0, 0, 0],
        &[0, 1, 0, 0],
        &[10, 20, 5, 15],
        &[30, 0, 10, 0],
    ]);
    let filtered = from_rows(&[&[10, 20, 5, 15], &[30, 0, 10, 0]]);
    (raw, filtered)
}

fn wide(report: &SummaryReport) -> &WideTable {
    report.table.as_wide().expect("wide table")
}

#[test]
fn test_raw_vs_filtered_wide() {
    let (raw, filtered) = create_raw_and_filtered();
    let report = build_summary(
        &[("raw", &raw), ("filtered", &filtered)],
        SummaryOptions::default(),
    )
    .unwrap();
    let table = wide(&report);

    let datasets: Vec<&str> = table.datasets.iter().map(|d| d.as_str()).collect();
    assert_eq!(datasets, vec!["raw", "filtered"]);

    let mut expected = Statistic::BASIC.to_vec();
    expected.extend_from_slice(Statistic::RELATIVE);
    assert_eq!(table.statistics(), expected);

    assert_eq!(table.value(Statistic::TotalReads, "raw"), Some(92.0));
    assert_eq!(table.value(Statistic::TotalReads, "filtered"), Some(90.0));
    assert_eq!(table.value(Statistic::NumberOfOtus, "raw"), Some(4.0));
    assert_eq!(table.value(Statistic::PercentageOfOtus, "filtered"), Some(50.0));
    let pct_reads = table.value(Statistic::PercentageOfReads, "filtered").unwrap();
    assert!((pct_reads - 9000.0 / 92.0).abs() < 1e-10);
}

#[test]
fn test_percentages_are_max_normalized() {
    let a = from_rows(&[&[60, 40]]);
    let b = from_rows(&[&[25, 25]]);
    let report = build_summary(&[("a", &a), ("b", &b)], SummaryOptions::default()).unwrap();
    let row = wide(&report).row(Statistic::PercentageOfReads).unwrap();
    assert_eq!(row.values, vec![100.0, 50.0]);
}

#[test]
fn test_long_form_never_has_percentages() {
    let (raw, filtered) = create_raw_and_filtered();
    let report = build_summary_unlabeled(
        &[&raw, &filtered, &raw],
        SummaryOptions {
            extended: true,
            long: true,
        },
    )
    .unwrap();
    let long = report.table.as_long().unwrap();

    let per_dataset = Statistic::BASIC.len() + Statistic::EXTENDED.len();
    assert_eq!(long.len(), 3 * per_dataset);
    assert!(!report
        .table
        .statistics()
        .iter()
        .any(|s| Statistic::RELATIVE.contains(s)));

    // Dataset blocks in input order, each in canonical statistic order
    let block: Vec<(&str, Statistic)> = long.rows[per_dataset..2 * per_dataset]
        .iter()
        .map(|r| (r.dataset.as_str(), r.statistic))
        .collect();
    assert!(block.iter().all(|(d, _)| *d == "Phys2"));
    assert_eq!(block[0].1, Statistic::NumberOfSamples);
    assert_eq!(block[per_dataset - 1].1, Statistic::PercentageOfZeros);
}

#[test]
fn test_single_dataset_never_has_percentages() {
    let (raw, _) = create_raw_and_filtered();
    for long in [false, true] {
        let report =
            build_summary(&[("raw", &raw)], SummaryOptions { extended: false, long }).unwrap();
        assert_eq!(report.table.statistics(), Statistic::BASIC);
    }
}

#[test]
fn test_wide_rows_follow_report_order_not_alphabetical() {
    let (raw, filtered) = create_raw_and_filtered();
    let report = build_summary_unlabeled(
        &[&raw, &filtered],
        SummaryOptions {
            extended: true,
            long: false,
        },
    )
    .unwrap();
    let stats = wide(&report).statistics();
    let pos = |s: Statistic| stats.iter().position(|x| *x == s).unwrap();
    assert!(pos(Statistic::NumberOfSamples) < pos(Statistic::NumberOfOtus));
    assert_eq!(pos(Statistic::NumberOfSamples), 0);
    assert_eq!(stats.len(), 5 + 18 + 2);
}

#[test]
fn test_wide_long_roundtrip() {
    let (raw, filtered) = create_raw_and_filtered();
    let long_report = build_summary(
        &[("raw", &raw), ("filtered", &filtered)],
        SummaryOptions {
            extended: true,
            long: true,
        },
    )
    .unwrap();
    let long = long_report.table.as_long().unwrap();
    let back = long.pivot_wider().pivot_longer();

    let key = |r: &LongRow| (r.dataset.to_string(), r.statistic, r.value.to_bits());
    let mut expected: Vec<_> = long.rows.iter().map(key).collect();
    let mut actual: Vec<_> = back.rows.iter().map(key).collect();
    expected.sort();
    actual.sort();
    assert_eq!(expected, actual);
}

#[test]
fn test_extended_statistics_on_feature_totals() {
    // OTU totals [1, 1, 2, 5, 10]
    let counts = from_rows(&[&[1, 0], &[0, 1], &[1, 1], &[2, 3], &[10, 0]]);
    let record = summarize(&counts, true).unwrap();
    assert_eq!(record.get(Statistic::MinReadsPerOtu), Some(1.0));
    assert_eq!(record.get(Statistic::MaxReadsPerOtu), Some(10.0));
    assert_eq!(record.get(Statistic::MedianReadsPerOtu), Some(2.0));
    assert_eq!(record.get(Statistic::NumberOfSingletons), Some(2.0));
    assert_eq!(record.get(Statistic::PercentageOfSingletons), Some(40.0));
}

#[test]
fn test_non_finite_cqv_flows_through_table() {
    // Most OTU totals are zero, so Q1 = Q3 = 0
    let sparse = from_rows(&[&[0, 0], &[0, 0], &[0, 0], &[0, 0], &[8, 2]]);
    let report = build_summary(
        &[("sparse", &sparse)],
        SummaryOptions {
            extended: true,
            long: false,
        },
    )
    .unwrap();
    let cqv = wide(&report)
        .value(Statistic::CqvReadsPerOtu, "sparse")
        .unwrap();
    assert!(cqv.is_nan());

    let text = report.table.to_delimited_string(b'\t').unwrap();
    assert!(text.contains("CQV of reads per OTU\tNaN"));
}

#[test]
fn test_renamed_labels_are_reported() {
    let (raw, filtered) = create_raw_and_filtered();
    let report = build_summary(
        &[("raw data", &raw), ("2nd pass", &filtered)],
        SummaryOptions::default(),
    )
    .unwrap();
    let datasets: Vec<&str> = wide(&report).datasets.iter().map(|d| d.as_str()).collect();
    assert_eq!(datasets, vec!["raw.data", "X2nd.pass"]);
    assert_eq!(report.diagnostics.len(), 2);
}

#[test]
fn test_duplicate_names_rejected() {
    let (raw, filtered) = create_raw_and_filtered();
    let err = build_summary(
        &[("run 1", &raw), ("run-1", &filtered)],
        SummaryOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SummaryError::DuplicateDatasetName(_)));
}

#[test]
fn test_empty_dataset_aborts_whole_call() {
    let (raw, _) = create_raw_and_filtered();

    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "otu\tS1\tS2").unwrap();
    temp_file.flush().unwrap();
    let empty = CountMatrix::from_tsv(temp_file.path()).unwrap();

    let err = build_summary(&[("raw", &raw), ("empty", &empty)], SummaryOptions::default())
        .unwrap_err();
    assert!(matches!(err, SummaryError::EmptyDataset { .. }));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_deterministic_output() {
    let (raw, filtered) = create_raw_and_filtered();
    let options = SummaryOptions {
        extended: true,
        long: false,
    };
    let first = build_summary_unlabeled(&[&raw, &filtered], options).unwrap();
    let second = build_summary_unlabeled(&[&raw, &filtered], options).unwrap();
    assert_eq!(
        first.table.to_delimited_string(b',').unwrap(),
        second.table.to_delimited_string(b',').unwrap()
    );
}

#[test]
fn test_from_tsv_to_summary() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "otu\tS1\tS2\tS3").unwrap();
    writeln!(temp_file, "OTU1\t5\t0\t1").unwrap();
    writeln!(temp_file, "OTU2\t0\t0\t1").unwrap();
    temp_file.flush().unwrap();

    let counts = CountMatrix::from_tsv(temp_file.path()).unwrap();
    let report = build_summary_unlabeled(&[&counts], SummaryOptions::default()).unwrap();
    let table = wide(&report);
    assert_eq!(table.value(Statistic::NumberOfSamples, "Phys1"), Some(3.0));
    assert_eq!(table.value(Statistic::TotalReads, "Phys1"), Some(7.0));
    assert_eq!(table.value(Statistic::MeanReadsPerOtu, "Phys1"), Some(3.5));
}

#[test]
fn test_json_serialization() {
    let (raw, filtered) = create_raw_and_filtered();
    let report = build_summary(
        &[("raw", &raw), ("filtered", &filtered)],
        SummaryOptions::default(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["table"]["layout"], "wide");
    assert_eq!(json["table"]["table"]["datasets"][1], "filtered");
    assert_eq!(
        json["table"]["table"]["rows"][0]["statistic"],
        "Number of samples"
    );
}
