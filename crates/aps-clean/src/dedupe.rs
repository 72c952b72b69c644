//! Duplicate handling keyed by app name.
//!
//! Storefront exports list some apps several times, captured at different
//! moments. The copy with the most reviews is the most recent one, so it is
//! the one kept.

use std::collections::{BTreeMap, HashMap, HashSet};

use aps_model::{Dataset, Record, Result, parse_field};

use crate::drop_log::{Cleaned, DropLog, DropReason};

/// Highest metric observed per key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewIndex {
    max_by_key: HashMap<String, f64>,
}

impl ReviewIndex {
    /// Scan `dataset` once, parsing `metric` for every record.
    ///
    /// Fails with `DataError::Parse` on the first non-numeric metric.
    pub fn build(dataset: &Dataset, key: usize, metric: usize) -> Result<Self> {
        let mut index = Self::default();
        for (idx, record) in dataset.iter().enumerate() {
            let (name, value) = key_and_metric(record, idx + 1, key, metric)?;
            index.observe(name, value);
        }
        Ok(index)
    }

    fn observe(&mut self, key: &str, value: f64) {
        match self.max_by_key.get_mut(key) {
            Some(max) if *max < value => *max = value,
            Some(_) => {}
            None => {
                self.max_by_key.insert(key.to_string(), value);
            }
        }
    }

    pub fn max_for(&self, key: &str) -> Option<f64> {
        self.max_by_key.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.max_by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.max_by_key.is_empty()
    }
}

fn key_and_metric(record: &Record, row: usize, key: usize, metric: usize) -> Result<(&str, f64)> {
    let name = record.field(key)?;
    let value = parse_field(record, row, metric)?;
    Ok((name, value))
}

/// Keep one record per key: the first, in input order, whose metric equals
/// the key's maximum. Later records, including ties, are dropped.
pub fn dedupe_by_max_metric(dataset: &Dataset, key: usize, metric: usize) -> Result<Cleaned> {
    let index = ReviewIndex::build(dataset, key, metric)?;

    let mut kept_keys: HashSet<&str> = HashSet::with_capacity(index.len());
    let mut kept = Vec::with_capacity(index.len());
    let mut dropped = DropLog::new();
    for (idx, record) in dataset.iter().enumerate() {
        let (name, value) = key_and_metric(record, idx + 1, key, metric)?;
        let max = index.max_for(name).unwrap_or(value);
        if value == max && kept_keys.insert(name) {
            kept.push(record.clone());
        } else {
            dropped.record(idx + 1, Some(name), DropReason::Duplicate { metric: value, max });
        }
    }
    Ok(Cleaned {
        dataset: dataset.with_records(kept),
        dropped,
    })
}

/// Counts of distinct and repeated keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateSummary {
    /// Records whose key had not been seen before.
    pub unique: usize,
    /// Records whose key had already been seen.
    pub duplicate: usize,
    /// Keys seen more than once, with their total occurrence count.
    pub repeated: BTreeMap<String, usize>,
}

pub fn count_duplicates(dataset: &Dataset, key: usize) -> Result<DuplicateSummary> {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    let mut summary = DuplicateSummary::default();
    for record in dataset {
        let name = record.field(key)?;
        let seen = occurrences.entry(name).or_insert(0);
        if *seen == 0 {
            summary.unique += 1;
        } else {
            summary.duplicate += 1;
        }
        *seen += 1;
    }
    summary.repeated = occurrences
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    Ok(summary)
}

/// Every record whose key equals `name`, in input order.
pub fn duplicates_of<'a>(dataset: &'a Dataset, key: usize, name: &str) -> Result<Vec<&'a Record>> {
    let mut matches = Vec::new();
    for record in dataset {
        if record.field(key)? == name {
            matches.push(record);
        }
    }
    Ok(matches)
}
