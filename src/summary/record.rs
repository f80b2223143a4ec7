//! Per-dataset statistic records.

use super::Statistic;
use crate::error::{Result, SummaryError};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Statistic values for a single dataset, in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRecord {
    values: Vec<(Statistic, f64)>,
}

impl StatRecord {
    /// Build a record from `(statistic, value)` pairs.
    ///
    /// Pairs are reordered canonically; a repeated statistic keeps the last value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Statistic, f64)>,
    {
        let mut values: Vec<(Statistic, f64)> = Vec::new();
        for (stat, value) in pairs {
            match values.iter_mut().find(|(s, _)| *s == stat) {
                Some(slot) => slot.1 = value,
                None => values.push((stat, value)),
            }
        }
        values.sort_by_key(|(s, _)| *s);
        Self { values }
    }

    /// Value of a statistic, if present.
    pub fn get(&self, stat: Statistic) -> Option<f64> {
        self.values
            .iter()
            .find(|(s, _)| *s == stat)
            .map(|(_, v)| *v)
    }

    /// Value of a statistic, failing with [`SummaryError::MissingStatistic`].
    pub fn require(&self, stat: Statistic) -> Result<f64> {
        self.get(stat).ok_or(SummaryError::MissingStatistic(stat))
    }

    /// Iterate over `(statistic, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Statistic, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Number of statistics in the record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the record carries the extended statistics.
    pub fn is_extended(&self) -> bool {
        Statistic::EXTENDED.iter().all(|s| self.get(*s).is_some())
    }
}

impl Serialize for StatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (stat, value) in &self.values {
            map.serialize_entry(stat.label(), value)?;
        }
        map.end()
    }
}

impl std::fmt::Display for StatRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .values
            .iter()
            .map(|(s, _)| s.label().len())
            .max()
            .unwrap_or(0);
        for (stat, value) in &self.values {
            writeln!(f, "  {:<width$}  {}", stat.label(), super::format_value(*value), width = width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_ordered_canonically() {
        let record = StatRecord::from_pairs([
            (Statistic::TotalReads, 10.0),
            (Statistic::NumberOfSamples, 2.0),
            (Statistic::NumberOfOtus, 3.0),
        ]);
        let order: Vec<Statistic> = record.iter().map(|(s, _)| s).collect();
        assert_eq!(
            order,
            vec![
                Statistic::NumberOfSamples,
                Statistic::NumberOfOtus,
                Statistic::TotalReads
            ]
        );
    }

    #[test]
    fn test_require_missing() {
        let record = StatRecord::from_pairs([(Statistic::NumberOfSamples, 2.0)]);
        assert_eq!(record.require(Statistic::NumberOfSamples).unwrap(), 2.0);
        assert!(matches!(
            record.require(Statistic::TotalReads),
            Err(SummaryError::MissingStatistic(Statistic::TotalReads))
        ));
        assert!(!record.is_extended());
    }

    #[test]
    fn test_serialize_as_labelled_map() {
        let record = StatRecord::from_pairs([
            (Statistic::NumberOfSamples, 2.0),
            (Statistic::NumberOfOtus, 3.0),
        ]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Number of samples":2.0,"Number of OTUs":3.0}"#);
    }
}
