//! Common test utilities for integration tests
//!
//! Fixture reading history and canned requests shared by the engine
//! integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use health_insights_engine::{InMemoryReadingStore, InsightEngine};
use health_insights_shared::{ActivityLevel, InsightRequest, MetricType, UserProfile};

/// Start of the fixture week
pub fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 7, 30, 0).unwrap() + Duration::days(offset)
}

/// A week of readings, recorded through the store so severity and trend
/// are derived the way a real client would see them
pub fn fixture_store() -> InMemoryReadingStore {
    let mut store = InMemoryReadingStore::new();
    let series: [(MetricType, &str, [f64; 3]); 8] = [
        (MetricType::HeartRate, "bpm", [78.0, 74.0, 71.0]),
        (MetricType::BloodPressureSystolic, "mmHg", [124.0, 121.0, 118.0]),
        (MetricType::SleepHours, "hours", [6.0, 7.5, 8.0]),
        (MetricType::StressLevel, "/10", [5.0, 4.0, 3.0]),
        // Recorded in millilitres: roughly 50, 60 and 68 oz
        (MetricType::WaterIntake, "ml", [1480.0, 1775.0, 2010.0]),
        (MetricType::Glucose, "mg/dL", [104.0, 98.0, 95.0]),
        (MetricType::Steps, "steps", [6200.0, 8400.0, 10400.0]),
        (MetricType::ExerciseMinutes, "min", [15.0, 25.0, 35.0]),
    ];

    for (metric, unit, values) in series {
        for (offset, value) in values.into_iter().enumerate() {
            store
                .record(metric, value, unit, day(offset as i64))
                .expect("fixture units are known");
        }
    }
    store
}

pub fn fixture_engine() -> InsightEngine<InMemoryReadingStore> {
    InsightEngine::with_defaults(fixture_store())
}

/// Vitals of someone having a rough day
pub fn rough_day_request() -> InsightRequest {
    InsightRequest::default()
        .with_vital(MetricType::HeartRate, 108.0)
        .with_vital(MetricType::BloodPressureSystolic, 146.0)
        .with_vital(MetricType::SleepHours, 4.5)
        .with_vital(MetricType::StressLevel, 6.0)
        .with_vital(MetricType::WaterIntake, 30.0)
        .with_vital(MetricType::Glucose, 131.0)
        .with_symptoms(["Tension headache"])
}

pub fn senior_sedentary_profile() -> UserProfile {
    UserProfile {
        age: Some(71),
        gender: Some("female".to_string()),
        activity_level: Some(ActivityLevel::Sedentary),
        medical_conditions: vec!["hypertension".to_string(), "type 2 diabetes".to_string()],
        goals: vec!["walk more".to_string()],
    }
}
