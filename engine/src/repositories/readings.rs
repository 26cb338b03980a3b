//! Historical reading store
//!
//! The engine only ever asks one question of reading history: what is the
//! most recent reading of a given metric. Stores are read-only from the
//! engine's point of view; concurrent readers are the store's concern.

use chrono::{DateTime, Utc};
use health_insights_shared::{MetricType, ReferenceDataError, VitalReading};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only access to recorded vital readings
pub trait ReadingStore {
    /// The reading of `metric` with the greatest timestamp, if any
    fn latest_by_type(&self, metric: MetricType) -> Option<VitalReading>;
}

impl<S: ReadingStore + ?Sized> ReadingStore for &S {
    fn latest_by_type(&self, metric: MetricType) -> Option<VitalReading> {
        (**self).latest_by_type(metric)
    }
}

impl<S: ReadingStore + ?Sized> ReadingStore for Arc<S> {
    fn latest_by_type(&self, metric: MetricType) -> Option<VitalReading> {
        (**self).latest_by_type(metric)
    }
}

/// A flat list of readings, scanned linearly
///
/// On equal timestamps the reading appearing last wins.
impl ReadingStore for [VitalReading] {
    fn latest_by_type(&self, metric: MetricType) -> Option<VitalReading> {
        self.iter()
            .filter(|reading| reading.metric_type == metric)
            .max_by_key(|reading| reading.timestamp)
            .cloned()
    }
}

impl ReadingStore for Vec<VitalReading> {
    fn latest_by_type(&self, metric: MetricType) -> Option<VitalReading> {
        self.as_slice().latest_by_type(metric)
    }
}

/// Append-only, per-metric history kept in timestamp order
///
/// `latest_by_type` is O(1). Readings with equal timestamps keep their
/// insertion order, so the last one inserted is the latest.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReadingStore {
    history: HashMap<MetricType, Vec<VitalReading>>,
}

impl InMemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-built reading
    pub fn insert(&mut self, reading: VitalReading) {
        let series = self.history.entry(reading.metric_type).or_default();
        let position = series.partition_point(|r| r.timestamp <= reading.timestamp);
        series.insert(position, reading);
    }

    /// Record a new measurement, deriving severity and trend from the
    /// reading that precedes it
    pub fn record(
        &mut self,
        metric: MetricType,
        value: f64,
        unit: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<VitalReading, ReferenceDataError> {
        let previous = self.history.get(&metric).and_then(|series| {
            let position = series.partition_point(|r| r.timestamp <= timestamp);
            position.checked_sub(1).and_then(|i| series.get(i))
        });
        let reading = VitalReading::record(metric, value, unit, timestamp, previous)?;
        self.insert(reading.clone());
        Ok(reading)
    }

    /// All readings of `metric`, oldest first
    pub fn history(&self, metric: MetricType) -> &[VitalReading] {
        self.history
            .get(&metric)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.history.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReadingStore for InMemoryReadingStore {
    fn latest_by_type(&self, metric: MetricType) -> Option<VitalReading> {
        self.history
            .get(&metric)
            .and_then(|series| series.last())
            .cloned()
    }
}

impl FromIterator<VitalReading> for InMemoryReadingStore {
    fn from_iter<I: IntoIterator<Item = VitalReading>>(iter: I) -> Self {
        let mut store = Self::new();
        for reading in iter {
            store.insert(reading);
        }
        store
    }
}
