//! Vital metric catalogue and reading classification
//!
//! Defines the ten tracked metric types, their reference ranges, and the
//! rules that give a recorded reading its severity and trend.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: classification has no side effects
//! 2. **Canonical Units**: ranges are expressed in one unit per metric
//! 3. **Canonical Snapshots**: stored readings enter a snapshot converted to
//!    their metric's canonical unit; readings in unknown units are rejected

use crate::errors::ReferenceDataError;
use crate::units::{TemperatureUnit, VolumeUnit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Readings within this percentage of the previous reading are `stable`
const STABLE_TREND_PERCENT: f64 = 1.0;

// ============================================================================
// Metric Types
// ============================================================================

/// A tracked vital or lifestyle metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricType {
    HeartRate,
    BloodPressureSystolic,
    BloodPressureDiastolic,
    Temperature,
    Glucose,
    SleepHours,
    StressLevel,
    WaterIntake,
    Steps,
    ExerciseMinutes,
}

impl MetricType {
    /// Every tracked metric, in resolution order
    pub const ALL: [MetricType; 10] = [
        MetricType::HeartRate,
        MetricType::BloodPressureSystolic,
        MetricType::BloodPressureDiastolic,
        MetricType::Temperature,
        MetricType::Glucose,
        MetricType::SleepHours,
        MetricType::StressLevel,
        MetricType::WaterIntake,
        MetricType::Steps,
        MetricType::ExerciseMinutes,
    ];

    /// Wire name, as used in snapshots and readings
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::HeartRate => "heartRate",
            MetricType::BloodPressureSystolic => "bloodPressureSystolic",
            MetricType::BloodPressureDiastolic => "bloodPressureDiastolic",
            MetricType::Temperature => "temperature",
            MetricType::Glucose => "glucose",
            MetricType::SleepHours => "sleepHours",
            MetricType::StressLevel => "stressLevel",
            MetricType::WaterIntake => "waterIntake",
            MetricType::Steps => "steps",
            MetricType::ExerciseMinutes => "exerciseMinutes",
        }
    }

    /// Unit the reference ranges are expressed in
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            MetricType::HeartRate => "bpm",
            MetricType::BloodPressureSystolic | MetricType::BloodPressureDiastolic => "mmHg",
            MetricType::Temperature => "°F",
            MetricType::Glucose => "mg/dL",
            MetricType::SleepHours => "hours",
            MetricType::StressLevel => "/10",
            MetricType::WaterIntake => "oz",
            MetricType::Steps => "steps",
            MetricType::ExerciseMinutes => "min",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            MetricType::HeartRate => "Heart Rate",
            MetricType::BloodPressureSystolic => "Systolic Blood Pressure",
            MetricType::BloodPressureDiastolic => "Diastolic Blood Pressure",
            MetricType::Temperature => "Body Temperature",
            MetricType::Glucose => "Blood Glucose",
            MetricType::SleepHours => "Sleep",
            MetricType::StressLevel => "Stress Level",
            MetricType::WaterIntake => "Water Intake",
            MetricType::Steps => "Steps",
            MetricType::ExerciseMinutes => "Exercise",
        }
    }

    /// Reference range used to grade individual readings
    pub fn reference_range(&self) -> ReferenceRange {
        match self {
            MetricType::HeartRate => ReferenceRange::new(60.0, 100.0, Some(40.0), Some(130.0)),
            MetricType::BloodPressureSystolic => {
                ReferenceRange::new(90.0, 120.0, Some(80.0), Some(180.0))
            }
            MetricType::BloodPressureDiastolic => {
                ReferenceRange::new(60.0, 80.0, Some(50.0), Some(120.0))
            }
            MetricType::Temperature => ReferenceRange::new(97.0, 99.5, Some(95.0), Some(103.0)),
            MetricType::Glucose => ReferenceRange::new(70.0, 99.0, Some(54.0), Some(250.0)),
            MetricType::SleepHours => ReferenceRange::new(7.0, 9.0, Some(4.0), Some(12.0)),
            MetricType::StressLevel => ReferenceRange::new(0.0, 5.0, None, Some(8.0)),
            MetricType::WaterIntake => ReferenceRange::new(64.0, 128.0, Some(32.0), None),
            MetricType::Steps => ReferenceRange::new(7500.0, f64::INFINITY, None, None),
            MetricType::ExerciseMinutes => ReferenceRange::new(30.0, f64::INFINITY, None, None),
        }
    }

    /// Convert a value recorded in `unit` to this metric's canonical unit
    ///
    /// Only temperature and water intake carry alternative units. Every
    /// other metric accepts its canonical unit or one of its spellings; an
    /// empty unit string means the canonical unit.
    pub fn to_canonical(&self, value: f64, unit: &str) -> Result<f64, ReferenceDataError> {
        if unit.trim().is_empty() || unit == self.canonical_unit() {
            return Ok(value);
        }
        match self {
            MetricType::Temperature => Ok(unit.parse::<TemperatureUnit>()?.to_fahrenheit(value)),
            MetricType::WaterIntake => Ok(unit.parse::<VolumeUnit>()?.to_fl_oz(value)),
            _ => {
                let normalized = unit.trim().to_lowercase();
                if self.unit_spellings().contains(&normalized.as_str()) {
                    Ok(value)
                } else {
                    Err(ReferenceDataError::UnknownUnit(unit.to_string()))
                }
            }
        }
    }

    /// Lowercase spellings of the canonical unit for metrics without
    /// conversions
    fn unit_spellings(&self) -> &'static [&'static str] {
        match self {
            MetricType::HeartRate => &["bpm", "beats/min", "/min"],
            MetricType::BloodPressureSystolic | MetricType::BloodPressureDiastolic => &["mmhg"],
            MetricType::Glucose => &["mg/dl"],
            MetricType::SleepHours => &["hours", "hour", "hrs", "hr", "h"],
            MetricType::StressLevel => &["/10", "score", "level"],
            MetricType::Steps => &["steps", "step", "count"],
            MetricType::ExerciseMinutes => &["min", "mins", "minute", "minutes"],
            MetricType::Temperature | MetricType::WaterIntake => &[],
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MetricType {
    type Err = ReferenceDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        MetricType::ALL
            .into_iter()
            .find(|metric| metric.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ReferenceDataError::UnknownMetric(s.to_string()))
    }
}

// ============================================================================
// Severity & Reference Ranges
// ============================================================================

/// Clinical severity of a reading or insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Critical,
}

/// Normal band and critical limits for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub normal_min: f64,
    pub normal_max: f64,
    pub critical_low: Option<f64>,
    pub critical_high: Option<f64>,
}

impl ReferenceRange {
    pub const fn new(
        normal_min: f64,
        normal_max: f64,
        critical_low: Option<f64>,
        critical_high: Option<f64>,
    ) -> Self {
        Self {
            normal_min,
            normal_max,
            critical_low,
            critical_high,
        }
    }

    /// Grade a value in canonical units
    ///
    /// Non-finite values are graded `Warning`: they are neither in range
    /// nor provably critical.
    pub fn classify(&self, value: f64) -> Severity {
        if value.is_nan() {
            return Severity::Warning;
        }
        let below_critical = self.critical_low.is_some_and(|low| value < low);
        let above_critical = self.critical_high.is_some_and(|high| value > high);
        if below_critical || above_critical {
            Severity::Critical
        } else if value >= self.normal_min && value <= self.normal_max {
            Severity::Normal
        } else {
            Severity::Warning
        }
    }
}

// ============================================================================
// Trends
// ============================================================================

/// Direction of change from the previous reading of the same metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    /// Compute trend and percentage change between two canonical values
    ///
    /// The percentage is rounded to one decimal place. A zero or
    /// non-finite previous value yields `(Stable, 0.0)`.
    pub fn between(previous: f64, current: f64) -> (Trend, f64) {
        if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
            return (Trend::Stable, 0.0);
        }
        let percent = (current - previous) / previous.abs() * 100.0;
        let rounded = (percent * 10.0).round() / 10.0;
        let trend = if percent.abs() <= STABLE_TREND_PERCENT {
            Trend::Stable
        } else if percent > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        };
        (trend, rounded)
    }
}

// ============================================================================
// Readings
// ============================================================================

/// A single recorded measurement; immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalReading {
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub value: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub trend: Trend,
    pub trend_value: f64,
}

impl VitalReading {
    /// Record a reading, deriving severity and trend
    ///
    /// `previous` is the latest earlier reading of the same metric, if any.
    /// Both values are converted to canonical units before comparison;
    /// the stored `value` and `unit` are kept as given.
    pub fn record(
        metric_type: MetricType,
        value: f64,
        unit: impl Into<String>,
        timestamp: DateTime<Utc>,
        previous: Option<&VitalReading>,
    ) -> Result<Self, ReferenceDataError> {
        let unit = unit.into();
        let canonical = metric_type.to_canonical(value, &unit)?;
        let severity = metric_type.reference_range().classify(canonical);

        let (trend, trend_value) = match previous {
            Some(prev) => {
                let prev_canonical = metric_type.to_canonical(prev.value, &prev.unit)?;
                Trend::between(prev_canonical, canonical)
            }
            None => (Trend::Stable, 0.0),
        };

        Ok(Self {
            metric_type,
            value,
            unit,
            timestamp,
            severity,
            trend,
            trend_value,
        })
    }

    /// The value converted to the metric's canonical unit
    pub fn canonical_value(&self) -> Result<f64, ReferenceDataError> {
        self.metric_type.to_canonical(self.value, &self.unit)
    }

    /// A first reading in the metric's canonical unit
    pub fn canonical(metric_type: MetricType, value: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            metric_type,
            value,
            unit: metric_type.canonical_unit().to_string(),
            timestamp,
            severity: metric_type.reference_range().classify(value),
            trend: Trend::Stable,
            trend_value: 0.0,
        }
    }
}

// ============================================================================
// Snapshots
// ============================================================================

/// Per-call resolved metric values
///
/// Every entry is either a caller override or the latest historical
/// reading of that metric; absent metrics mean "insufficient data".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VitalSnapshot {
    values: BTreeMap<MetricType, f64>,
}

impl VitalSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: MetricType) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    pub fn insert(&mut self, metric: MetricType, value: f64) {
        self.values.insert(metric, value);
    }

    pub fn contains(&self, metric: MetricType) -> bool {
        self.values.contains_key(&metric)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(MetricType, f64)> for VitalSnapshot {
    fn from_iter<I: IntoIterator<Item = (MetricType, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<MetricType, f64>> for VitalSnapshot {
    fn from(values: BTreeMap<MetricType, f64>) -> Self {
        Self { values }
    }
}
