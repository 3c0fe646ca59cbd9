use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{EventType, LogEntry};
use crate::normalizer::UrlNormalizer;

/// Occurrence counts that remember the order keys were first seen in.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    counts: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    pub fn new() -> Self {
        FrequencyTable {
            index: HashMap::new(),
            counts: Vec::new(),
        }
    }

    pub fn increment(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.index
            .get(key)
            .map(|&slot| self.counts[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Up to `limit` keys by descending count; ties keep first-seen order.
    pub fn most_common(&self, limit: usize) -> Vec<(&K, usize)> {
        let mut sorted: Vec<_> = self.counts.iter().map(|(k, c)| (k, *c)).collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(limit);
        sorted
    }
}

impl<K: Eq + Hash + Clone> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tally {
    pub types: FrequencyTable<EventType>,
    pub urls: FrequencyTable<String>,
}

impl Tally {
    pub fn record(&mut self, entry: &LogEntry, normalizer: &UrlNormalizer) {
        self.types.increment(entry.event_type());
        if let Some(url) = normalizer.normalize_entry(entry) {
            self.urls.increment(url);
        }
    }
}

pub fn tally(entries: &[LogEntry], normalizer: &UrlNormalizer) -> Tally {
    let mut tally = Tally::default();
    for entry in entries {
        tally.record(entry, normalizer);
    }
    tally
}
