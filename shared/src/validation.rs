//! Input validation functions
//!
//! The engine itself never validates: malformed values fall through to a
//! rule cascade's fallback tier. Callers that want to reject bad input
//! upstream use these helpers. Uses both custom validators and the
//! `validator` crate for derive macros.

use crate::errors::ValidationError;
use crate::health_metrics::MetricType;
use validator::ValidationErrors;

/// Physically plausible bounds per metric, in canonical units
pub fn physical_bounds(metric: MetricType) -> (f64, f64) {
    match metric {
        MetricType::HeartRate => (20.0, 300.0),
        MetricType::BloodPressureSystolic => (50.0, 300.0),
        MetricType::BloodPressureDiastolic => (30.0, 200.0),
        MetricType::Temperature => (80.0, 115.0),
        MetricType::Glucose => (10.0, 1000.0),
        MetricType::SleepHours => (0.0, 24.0),
        MetricType::StressLevel => (0.0, 10.0),
        MetricType::WaterIntake => (0.0, 500.0),
        MetricType::Steps => (0.0, 200_000.0),
        // 24 hours
        MetricType::ExerciseMinutes => (0.0, 1440.0),
    }
}

/// Validate a metric value against its physical bounds
pub fn validate_metric_value(metric: MetricType, value: f64) -> Result<(), ValidationError> {
    if value.is_nan() || value.is_infinite() {
        return Err(ValidationError::new(
            metric.as_str(),
            format!("{} must be a valid number", metric.display_name()),
        ));
    }
    let (min, max) = physical_bounds(metric);
    if value < min || value > max {
        return Err(ValidationError::new(
            metric.as_str(),
            format!(
                "{} must be between {} and {} {}",
                metric.display_name(),
                min,
                max,
                metric.canonical_unit()
            ),
        ));
    }
    Ok(())
}

/// Collapse `validator` derive errors into the first field error
///
/// `prefix` is prepended to the field path, e.g. `symptomInput`.
pub fn first_validation_error(prefix: &str, errors: &ValidationErrors) -> ValidationError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    match fields.first() {
        Some((field, errs)) => {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "is invalid".to_string());
            let path = if prefix.is_empty() {
                field.to_string()
            } else {
                format!("{}.{}", prefix, field)
            };
            ValidationError::new(path, message)
        }
        None => ValidationError::new(prefix, "is invalid"),
    }
}

/// Get a user-friendly label for a metric wire name
pub fn get_field_display_label(field: &str) -> &str {
    match field.parse::<MetricType>() {
        Ok(metric) => metric.display_name(),
        Err(_) => field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SymptomInput;
    use proptest::prelude::*;
    use rstest::rstest;
    use validator::Validate;

    #[rstest]
    #[case(MetricType::HeartRate, 72.0, true)]
    #[case(MetricType::HeartRate, 10.0, false)]
    #[case(MetricType::StressLevel, 11.0, false)]
    #[case(MetricType::SleepHours, 25.0, false)]
    #[case(MetricType::Steps, 0.0, true)]
    #[case(MetricType::Glucose, f64::NAN, false)]
    #[case(MetricType::WaterIntake, f64::INFINITY, false)]
    fn test_validate_metric_value(
        #[case] metric: MetricType,
        #[case] value: f64,
        #[case] valid: bool,
    ) {
        assert_eq!(validate_metric_value(metric, value).is_ok(), valid);
    }

    #[test]
    fn test_error_names_the_metric() {
        let err = validate_metric_value(MetricType::SleepHours, -1.0).unwrap_err();
        assert_eq!(err.field, "sleepHours");
        assert!(err.message.contains("Sleep"));
    }

    #[test]
    fn test_first_validation_error_uses_derive_message() {
        let input = SymptomInput {
            symptoms: vec!["fatigue".to_string()],
            severity: 0,
            duration: "1 week".to_string(),
            frequency: "daily".to_string(),
            triggers: None,
        };
        let errors = input.validate().unwrap_err();
        let err = first_validation_error("symptomInput", &errors);
        assert_eq!(err.field, "symptomInput.severity");
        assert_eq!(err.message, "severity must be between 1 and 10");
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("heartRate"), "Heart Rate");
        assert_eq!(get_field_display_label("waterIntake"), "Water Intake");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: every value inside the physical bounds validates
        #[test]
        fn prop_in_bounds_values_validate(fraction in 0.0f64..=1.0) {
            for metric in MetricType::ALL {
                let (min, max) = physical_bounds(metric);
                let value = min + (max - min) * fraction;
                prop_assert!(validate_metric_value(metric, value).is_ok(),
                    "{} rejected {}", metric, value);
            }
        }
    }
}
