//! Threshold tables for the category rule cascades
//!
//! Every numeric constant an analyzer compares against lives here so the
//! tables can be retuned from configuration without touching rule code.
//! Defaults are the builtin reference values.

use crate::errors::ReferenceDataError;
use serde::{Deserialize, Serialize};

/// Cardiovascular thresholds (bpm, mmHg, minutes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardiovascularThresholds {
    pub heart_rate_min: f64,
    pub excellent_heart_rate_max: f64,
    pub good_heart_rate_max: f64,
    pub excellent_systolic_max: f64,
    pub good_systolic_max: f64,
    pub excellent_exercise_min: f64,
    pub poor_systolic_above: f64,
    pub poor_heart_rate_above: f64,
}

impl Default for CardiovascularThresholds {
    fn default() -> Self {
        Self {
            heart_rate_min: 60.0,
            excellent_heart_rate_max: 80.0,
            good_heart_rate_max: 90.0,
            excellent_systolic_max: 120.0,
            good_systolic_max: 130.0,
            excellent_exercise_min: 30.0,
            poor_systolic_above: 140.0,
            poor_heart_rate_above: 100.0,
        }
    }
}

/// Sleep thresholds (hours, stress on a 1-10 scale)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleepThresholds {
    pub excellent_hours_min: f64,
    pub excellent_hours_max: f64,
    pub excellent_stress_max: f64,
    pub good_hours_min: f64,
    pub good_hours_max: f64,
    pub good_stress_max: f64,
    pub poor_hours_below: f64,
    pub poor_hours_above: f64,
    pub poor_stress_above: f64,
}

impl Default for SleepThresholds {
    fn default() -> Self {
        Self {
            excellent_hours_min: 7.0,
            excellent_hours_max: 9.0,
            excellent_stress_max: 4.0,
            good_hours_min: 6.5,
            good_hours_max: 9.5,
            good_stress_max: 6.0,
            poor_hours_below: 6.0,
            poor_hours_above: 10.0,
            poor_stress_above: 7.0,
        }
    }
}

/// Stress thresholds and escalation rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressThresholds {
    pub low_max: f64,
    pub high_min: f64,
    /// Stress above this level combined with a symptom is `high`
    pub symptom_amplified_above: f64,
    pub escalation_heart_rate_above: f64,
    pub escalation_stress_above: f64,
    pub escalation_confidence_boost: u8,
    /// Symptoms that indicate stress
    pub symptom_keywords: Vec<String>,
}

impl Default for StressThresholds {
    fn default() -> Self {
        Self {
            low_max: 3.0,
            high_min: 7.0,
            symptom_amplified_above: 5.0,
            escalation_heart_rate_above: 100.0,
            escalation_stress_above: 5.0,
            escalation_confidence_boost: 10,
            symptom_keywords: ["anxiety", "insomnia", "headache", "fatigue", "irritability"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Hydration thresholds (fl oz, minutes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrationThresholds {
    pub base_target_oz: f64,
    /// Extra intake per completed exercise block
    pub exercise_increment_oz: f64,
    pub exercise_block_minutes: f64,
    pub excellent_fraction: f64,
    pub good_fraction: f64,
    pub fair_fraction: f64,
}

impl Default for HydrationThresholds {
    fn default() -> Self {
        Self {
            base_target_oz: 64.0,
            exercise_increment_oz: 8.0,
            exercise_block_minutes: 30.0,
            excellent_fraction: 1.0,
            good_fraction: 0.75,
            fair_fraction: 0.5,
        }
    }
}

impl HydrationThresholds {
    /// Daily target: base + floor(exercise / block) * increment
    ///
    /// Negative or non-finite exercise counts as none.
    pub fn target_oz(&self, exercise_minutes: Option<f64>) -> f64 {
        let exercise = exercise_minutes
            .filter(|minutes| minutes.is_finite() && *minutes > 0.0)
            .unwrap_or(0.0);
        let blocks = if self.exercise_block_minutes > 0.0 {
            (exercise / self.exercise_block_minutes).floor()
        } else {
            0.0
        };
        self.base_target_oz + blocks * self.exercise_increment_oz
    }
}

/// Fasting glucose thresholds (mg/dL)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlucoseThresholds {
    pub excellent_min: f64,
    /// Exclusive upper bound of `excellent`
    pub excellent_below: f64,
    /// Exclusive upper bound of `good`
    pub good_below: f64,
    pub poor_at_or_above: f64,
    pub poor_below: f64,
}

impl Default for GlucoseThresholds {
    fn default() -> Self {
        Self {
            excellent_min: 70.0,
            excellent_below: 100.0,
            good_below: 110.0,
            poor_at_or_above: 126.0,
            poor_below: 54.0,
        }
    }
}

/// Activity thresholds (steps, minutes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityThresholds {
    pub excellent_steps: f64,
    pub excellent_exercise: f64,
    pub good_steps: f64,
    pub good_exercise: f64,
    pub poor_steps_below: f64,
    pub poor_exercise_below: f64,
}

impl Default for ActivityThresholds {
    fn default() -> Self {
        Self {
            excellent_steps: 10_000.0,
            excellent_exercise: 30.0,
            good_steps: 7_500.0,
            good_exercise: 20.0,
            poor_steps_below: 5_000.0,
            poor_exercise_below: 15.0,
        }
    }
}

/// All category thresholds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdTables {
    pub cardiovascular: CardiovascularThresholds,
    pub sleep: SleepThresholds,
    pub stress: StressThresholds,
    pub hydration: HydrationThresholds,
    pub glucose: GlucoseThresholds,
    pub activity: ActivityThresholds,
}

impl ThresholdTables {
    /// Check that favourable bands nest inside each other
    pub fn validate(&self) -> Result<(), ReferenceDataError> {
        let cv = &self.cardiovascular;
        ensure(
            cv.heart_rate_min <= cv.excellent_heart_rate_max
                && cv.excellent_heart_rate_max <= cv.good_heart_rate_max,
            "cardiovascular heart rate bands must satisfy min <= excellent max <= good max",
        )?;
        ensure(
            cv.excellent_systolic_max <= cv.good_systolic_max,
            "cardiovascular excellent systolic max must not exceed good systolic max",
        )?;

        let sleep = &self.sleep;
        ensure(
            sleep.excellent_hours_min <= sleep.excellent_hours_max
                && sleep.good_hours_min <= sleep.good_hours_max,
            "sleep hour bands must have min <= max",
        )?;
        ensure(
            sleep.poor_hours_below <= sleep.poor_hours_above,
            "sleep poor bounds must have below <= above",
        )?;

        let stress = &self.stress;
        ensure(
            stress.low_max < stress.high_min,
            "stress low max must be below high min",
        )?;
        ensure(
            stress.escalation_confidence_boost <= 100,
            "stress confidence boost must be at most 100",
        )?;

        let hydration = &self.hydration;
        ensure(
            hydration.base_target_oz > 0.0 && hydration.exercise_block_minutes > 0.0,
            "hydration base target and exercise block must be positive",
        )?;
        ensure(
            hydration.fair_fraction <= hydration.good_fraction
                && hydration.good_fraction <= hydration.excellent_fraction,
            "hydration fractions must satisfy fair <= good <= excellent",
        )?;

        let glucose = &self.glucose;
        ensure(
            glucose.excellent_min < glucose.excellent_below
                && glucose.excellent_below <= glucose.good_below
                && glucose.good_below <= glucose.poor_at_or_above,
            "glucose bands must be increasing",
        )?;

        let activity = &self.activity;
        ensure(
            activity.good_steps <= activity.excellent_steps
                && activity.good_exercise <= activity.excellent_exercise,
            "activity good targets must not exceed excellent targets",
        )?;

        Ok(())
    }
}

fn ensure(condition: bool, message: &str) -> Result<(), ReferenceDataError> {
    if condition {
        Ok(())
    } else {
        Err(ReferenceDataError::InvalidThreshold(message.to_string()))
    }
}
