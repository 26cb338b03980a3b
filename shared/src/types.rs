//! Engine request and response types

use crate::errors::ValidationError;
use crate::health_metrics::{MetricType, Severity};
use crate::models::{CategoryId, HealthInsight, Priority, SymptomInput, Tier, UserProfile};
use crate::validation::{first_validation_error, validate_metric_value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Input to one engine run
///
/// `vitals` are overrides; metrics not supplied are resolved from the
/// reading history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    #[serde(default)]
    pub vitals: BTreeMap<MetricType, f64>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub lifestyle: Option<UserProfile>,
    #[serde(default)]
    pub symptom_input: Option<SymptomInput>,
}

impl InsightRequest {
    pub fn with_vital(mut self, metric: MetricType, value: f64) -> Self {
        self.vitals.insert(metric, value);
        self
    }

    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms.extend(symptoms.into_iter().map(Into::into));
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.lifestyle = Some(profile);
        self
    }

    /// Every reported symptom, free-form and structured
    pub fn all_symptoms(&self) -> impl Iterator<Item = &str> {
        let structured = self
            .symptom_input
            .iter()
            .flat_map(|input| input.symptoms.iter());
        self.symptoms
            .iter()
            .chain(structured)
            .map(String::as_str)
    }

    /// Reject non-finite or physically implausible input
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (metric, value) in &self.vitals {
            validate_metric_value(*metric, *value)?;
        }
        if let Some(input) = &self.symptom_input {
            input
                .validate()
                .map_err(|errors| first_validation_error("symptomInput", &errors))?;
        }
        Ok(())
    }
}

/// One analyzer's graded outcome, before templating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAssessment {
    pub category: CategoryId,
    pub tier: Tier,
    pub severity: Severity,
    pub priority: Priority,
    pub confidence: u8,
}

/// Ranked insights together with the assessments they came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightReport {
    pub insights: Vec<HealthInsight>,
    /// Per category; `None` where data was insufficient
    pub assessments: BTreeMap<CategoryId, Option<CategoryAssessment>>,
    pub wellness_score: u8,
    /// Display labels of metrics with no override and no history
    pub missing_metrics: Vec<String>,
}
