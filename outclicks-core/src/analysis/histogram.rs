use crate::analysis::types::Minute;
use std::collections::BTreeMap;

/// Exit events counted per minute bucket.
///
/// Only minutes with at least one exit are present, so every count is >= 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitHistogram {
    counts: BTreeMap<Minute, u64>,
}

impl ExitHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a histogram from explicit counts. Zero counts are left out.
    pub fn from_counts(counts: impl IntoIterator<Item = (Minute, u64)>) -> Self {
        let mut histogram = Self::new();
        for (minute, count) in counts {
            if count > 0 {
                *histogram.counts.entry(minute).or_insert(0) += count;
            }
        }
        histogram
    }

    pub(crate) fn record(&mut self, minute: Minute) {
        *self.counts.entry(minute).or_insert(0) += 1;
    }

    pub fn get(&self, minute: Minute) -> Option<u64> {
        self.counts.get(&minute).copied()
    }

    /// Number of distinct minute buckets.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.values().copied()
    }

    /// Buckets in ascending minute order, corrupt bucket last.
    pub fn buckets(&self) -> impl Iterator<Item = (Minute, u64)> + '_ {
        self.counts.iter().map(|(m, c)| (*m, *c))
    }
}
