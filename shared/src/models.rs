//! Data models for health insights

use crate::health_metrics::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

// ============================================================================
// Categories, Tiers & Priorities
// ============================================================================

/// Health category an analyzer is responsible for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Cardiovascular,
    Sleep,
    Stress,
    Hydration,
    Glucose,
    Activity,
}

impl CategoryId {
    /// Every category, in analyzer emission order
    pub const ALL: [CategoryId; 6] = [
        CategoryId::Cardiovascular,
        CategoryId::Sleep,
        CategoryId::Stress,
        CategoryId::Hydration,
        CategoryId::Glucose,
        CategoryId::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Cardiovascular => "cardiovascular",
            CategoryId::Sleep => "sleep",
            CategoryId::Stress => "stress",
            CategoryId::Hydration => "hydration",
            CategoryId::Glucose => "glucose",
            CategoryId::Activity => "activity",
        }
    }

    /// Category label shown alongside an insight
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryId::Cardiovascular => "Heart Health",
            CategoryId::Sleep => "Sleep",
            CategoryId::Stress => "Mental Wellness",
            CategoryId::Hydration => "Hydration",
            CategoryId::Glucose => "Metabolic Health",
            CategoryId::Activity => "Physical Activity",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named quality bucket produced by an analyzer
///
/// Stress uses `Low`/`Moderate`/`High`; every other category uses
/// `Excellent`/`Good`/`Fair`/`Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
    Low,
    Moderate,
    High,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Fair => "fair",
            Tier::Poor => "poor",
            Tier::Low => "low",
            Tier::Moderate => "moderate",
            Tier::High => "high",
        }
    }

    /// Whether this tier counts towards the wellness score
    pub fn is_favorable(&self) -> bool {
        matches!(self, Tier::Excellent | Tier::Good | Tier::Low)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display priority of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

// ============================================================================
// Insights
// ============================================================================

/// A prioritized, human-readable recommendation for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInsight {
    pub id: CategoryId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub severity: Severity,
    pub recommendation: String,
    pub actions: Vec<String>,
    pub benefits: String,
    /// Rule certainty, always within 0-100
    pub confidence: u8,
    pub priority: Priority,
}

// ============================================================================
// User Context
// ============================================================================

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    #[serde(alias = "light")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(alias = "moderate")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(alias = "active")]
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

/// Optional demographic and lifestyle context
///
/// Every field is advisory. Analyzers skip the parts of a rule that
/// depend on a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl UserProfile {
    /// Case-insensitive check against the reported medical conditions
    pub fn has_condition(&self, condition: &str) -> bool {
        let needle = condition.to_lowercase();
        self.medical_conditions
            .iter()
            .any(|c| c.to_lowercase().contains(&needle))
    }

    pub fn is_senior(&self) -> bool {
        self.age.is_some_and(|age| age >= 65)
    }
}

/// Structured symptom report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SymptomInput {
    #[validate(length(min = 1, message = "at least one symptom is required"))]
    pub symptoms: Vec<String>,
    #[validate(range(min = 1, max = 10, message = "severity must be between 1 and 10"))]
    pub severity: u8,
    pub duration: String,
    pub frequency: String,
    #[serde(default)]
    pub triggers: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_favorable_tiers() {
        assert!(Tier::Excellent.is_favorable());
        assert!(Tier::Good.is_favorable());
        assert!(Tier::Low.is_favorable());
        assert!(!Tier::Fair.is_favorable());
        assert!(!Tier::Poor.is_favorable());
        assert!(!Tier::Moderate.is_favorable());
        assert!(!Tier::High.is_favorable());
    }

    #[test]
    fn test_profile_tolerates_missing_fields() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, UserProfile::default());
        assert!(!profile.has_condition("diabetes"));
        assert!(!profile.is_senior());
    }

    #[test]
    fn test_profile_condition_matching() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"age": 70, "activityLevel": "moderate", "medicalConditions": ["Type 2 Diabetes"]}"#,
        )
        .unwrap();
        assert!(profile.has_condition("diabetes"));
        assert!(profile.is_senior());
        assert_eq!(profile.activity_level, Some(ActivityLevel::ModeratelyActive));
    }

    #[test]
    fn test_symptom_input_validation() {
        let mut input = SymptomInput {
            symptoms: vec!["headache".to_string()],
            severity: 6,
            duration: "2 days".to_string(),
            frequency: "daily".to_string(),
            triggers: None,
        };
        assert!(input.validate().is_ok());

        input.severity = 11;
        assert!(input.validate().is_err());

        input.severity = 5;
        input.symptoms.clear();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_insight_serializes_camel_case() {
        let insight = HealthInsight {
            id: CategoryId::Sleep,
            title: "Sleep Quality".to_string(),
            category: CategoryId::Sleep.display_name().to_string(),
            description: "You slept 7.5 hours.".to_string(),
            severity: Severity::Normal,
            recommendation: "Keep it up".to_string(),
            actions: vec![],
            benefits: "Better recovery".to_string(),
            confidence: 85,
            priority: Priority::Low,
        };
        let json = serde_json::to_value(&insight).unwrap();
        assert_eq!(json["id"], "sleep");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["confidence"], 85);
    }
}
