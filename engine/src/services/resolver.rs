//! Vital resolver
//!
//! Merges caller overrides with the latest stored reading of each tracked
//! metric. Missing data is not an error: a metric with neither source is
//! simply absent from the snapshot.

use crate::repositories::ReadingStore;
use health_insights_shared::{MetricType, VitalSnapshot};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub struct VitalResolver;

impl VitalResolver {
    /// Build the snapshot for one run
    ///
    /// Overrides are used verbatim, including non-finite values. Every
    /// other metric takes the value of its most recent stored reading,
    /// converted to the metric's canonical unit. A stored reading in an
    /// unknown unit leaves the metric absent.
    pub fn resolve<S>(store: &S, overrides: &BTreeMap<MetricType, f64>) -> VitalSnapshot
    where
        S: ReadingStore + ?Sized,
    {
        let mut snapshot = VitalSnapshot::new();

        for metric in MetricType::ALL {
            if let Some(value) = overrides.get(&metric) {
                debug!(metric = %metric, source = "override", "Resolved metric");
                snapshot.insert(metric, *value);
            } else if let Some(reading) = store.latest_by_type(metric) {
                match reading.canonical_value() {
                    Ok(value) => {
                        debug!(
                            metric = %metric,
                            source = "history",
                            recorded_at = %reading.timestamp,
                            "Resolved metric"
                        );
                        snapshot.insert(metric, value);
                    }
                    Err(e) => {
                        warn!(metric = %metric, error = %e, "Skipping stored reading");
                    }
                }
            }
        }

        snapshot
    }

    /// Tracked metrics the snapshot has no value for
    pub fn missing_metrics(snapshot: &VitalSnapshot) -> Vec<MetricType> {
        MetricType::ALL
            .into_iter()
            .filter(|metric| !snapshot.contains(*metric))
            .collect()
    }
}
