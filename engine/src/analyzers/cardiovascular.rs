//! Cardiovascular analyzer
//!
//! Grades heart rate and systolic pressure jointly, with exercise minutes
//! required for the top tier. Elevated pressure or a racing heart is
//! `poor` no matter how much exercise was logged.

use super::{format_value, AnalysisContext, Assessment, CategoryAnalyzer, RuleCascade, TierOutcome};
use health_insights_shared::{
    CardiovascularThresholds, CategoryId, MetricType, Priority, Severity, Tier,
};
use tracing::debug;

/// Metrics the cardiovascular cascade reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardiovascularInputs {
    pub heart_rate: f64,
    pub systolic: f64,
    /// Absent exercise counts as zero minutes
    pub exercise_minutes: f64,
}

pub struct CardiovascularAnalyzer;

impl CardiovascularAnalyzer {
    pub fn cascade(t: &CardiovascularThresholds) -> RuleCascade<'_, CardiovascularInputs> {
        RuleCascade::new(Tier::Fair)
            .rule(Tier::Excellent, move |i: &CardiovascularInputs| {
                i.heart_rate >= t.heart_rate_min
                    && i.heart_rate <= t.excellent_heart_rate_max
                    && i.systolic <= t.excellent_systolic_max
                    && i.exercise_minutes >= t.excellent_exercise_min
            })
            .rule(Tier::Good, move |i: &CardiovascularInputs| {
                i.heart_rate >= t.heart_rate_min
                    && i.heart_rate <= t.good_heart_rate_max
                    && i.systolic <= t.good_systolic_max
            })
            .rule(Tier::Poor, move |i: &CardiovascularInputs| {
                i.systolic > t.poor_systolic_above || i.heart_rate > t.poor_heart_rate_above
            })
    }

    pub fn outcome(tier: Tier) -> TierOutcome {
        match tier {
            Tier::Excellent => TierOutcome::new(Severity::Normal, Priority::Low, 90),
            Tier::Good => TierOutcome::new(Severity::Normal, Priority::Low, 85),
            Tier::Poor => TierOutcome::new(Severity::Critical, Priority::High, 95),
            _ => TierOutcome::new(Severity::Warning, Priority::Medium, 80),
        }
    }

    fn inputs(ctx: &AnalysisContext<'_>) -> Option<CardiovascularInputs> {
        Some(CardiovascularInputs {
            heart_rate: ctx.metric(MetricType::HeartRate)?,
            systolic: ctx.metric(MetricType::BloodPressureSystolic)?,
            exercise_minutes: ctx.metric(MetricType::ExerciseMinutes).unwrap_or(0.0),
        })
    }

    fn describe(inputs: &CardiovascularInputs) -> String {
        format!(
            "Resting heart rate is {} bpm with systolic pressure at {} mmHg and {} minutes of exercise logged.",
            format_value(inputs.heart_rate),
            format_value(inputs.systolic),
            format_value(inputs.exercise_minutes)
        )
    }
}

impl CategoryAnalyzer for CardiovascularAnalyzer {
    fn category(&self) -> CategoryId {
        CategoryId::Cardiovascular
    }

    fn assess(&self, ctx: &AnalysisContext<'_>) -> Option<Assessment> {
        let inputs = Self::inputs(ctx)?;
        let tier = Self::cascade(&ctx.thresholds.cardiovascular).evaluate(&inputs);
        let outcome = Self::outcome(tier);

        debug!(
            category = "cardiovascular",
            tier = %tier,
            confidence = outcome.confidence,
            "Assessed category"
        );

        Some(Assessment {
            tier,
            outcome,
            description: Self::describe(&inputs),
        })
    }

    fn personalize(&self, ctx: &AnalysisContext<'_>, _tier: Tier) -> Vec<String> {
        match ctx.profile {
            Some(profile) if profile.has_condition("hypertension") => vec![
                "Log your blood pressure twice daily and share it with your physician".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_insights_shared::{InsightTemplates, ThresholdTables, UserProfile, VitalSnapshot};
    use proptest::prelude::*;
    use rstest::rstest;

    fn snapshot(hr: Option<f64>, sys: Option<f64>, exercise: Option<f64>) -> VitalSnapshot {
        let mut snapshot = VitalSnapshot::new();
        if let Some(v) = hr {
            snapshot.insert(MetricType::HeartRate, v);
        }
        if let Some(v) = sys {
            snapshot.insert(MetricType::BloodPressureSystolic, v);
        }
        if let Some(v) = exercise {
            snapshot.insert(MetricType::ExerciseMinutes, v);
        }
        snapshot
    }

    fn tier_for(hr: f64, sys: f64, exercise: Option<f64>) -> Tier {
        let thresholds = ThresholdTables::default();
        let snapshot = snapshot(Some(hr), Some(sys), exercise);
        let ctx = AnalysisContext::new(&snapshot, &thresholds);
        let tier = CardiovascularAnalyzer.assess(&ctx).unwrap().tier;
        tier
    }

    #[test]
    fn test_excellent_boundary_scenario() {
        let thresholds = ThresholdTables::default();
        let snapshot = snapshot(Some(72.0), Some(120.0), Some(30.0));
        let ctx = AnalysisContext::new(&snapshot, &thresholds);

        let (graded, insight) = CardiovascularAnalyzer
            .analyze(&ctx, InsightTemplates::builtin())
            .unwrap();
        assert_eq!(graded.tier, Tier::Excellent);
        assert_eq!(insight.priority, Priority::Low);
        assert_eq!(insight.confidence, 90);
        assert_eq!(insight.severity, Severity::Normal);
        assert_eq!(insight.id, CategoryId::Cardiovascular);
        assert!(insight.description.contains("72 bpm"));
    }

    #[rstest]
    #[case(Some(0.0))]
    #[case(Some(60.0))]
    #[case(None)]
    fn test_poor_regardless_of_exercise(#[case] exercise: Option<f64>) {
        let thresholds = ThresholdTables::default();
        let snapshot = snapshot(Some(105.0), Some(145.0), exercise);
        let ctx = AnalysisContext::new(&snapshot, &thresholds);

        let (graded, insight) = CardiovascularAnalyzer
            .analyze(&ctx, InsightTemplates::builtin())
            .unwrap();
        assert_eq!(graded.tier, Tier::Poor);
        assert_eq!(insight.priority, Priority::High);
        assert_eq!(insight.confidence, 95);
        assert_eq!(insight.severity, Severity::Critical);
    }

    #[rstest]
    #[case(60.0, 120.0, Some(30.0), Tier::Excellent)]
    #[case(80.0, 120.0, Some(30.0), Tier::Excellent)]
    #[case(81.0, 120.0, Some(30.0), Tier::Good)]
    #[case(72.0, 120.0, Some(29.0), Tier::Good)]
    #[case(72.0, 120.0, None, Tier::Good)]
    #[case(90.0, 130.0, None, Tier::Good)]
    #[case(91.0, 130.0, None, Tier::Fair)]
    #[case(72.0, 131.0, None, Tier::Fair)]
    #[case(72.0, 140.0, None, Tier::Fair)]
    #[case(72.0, 141.0, None, Tier::Poor)]
    #[case(100.0, 125.0, None, Tier::Fair)]
    #[case(101.0, 125.0, None, Tier::Poor)]
    #[case(55.0, 110.0, Some(45.0), Tier::Fair)]
    fn test_cascade_boundaries(
        #[case] hr: f64,
        #[case] sys: f64,
        #[case] exercise: Option<f64>,
        #[case] expected: Tier,
    ) {
        assert_eq!(tier_for(hr, sys, exercise), expected);
    }

    #[rstest]
    #[case(None, Some(120.0))]
    #[case(Some(72.0), None)]
    #[case(None, None)]
    fn test_missing_required_metric_yields_none(#[case] hr: Option<f64>, #[case] sys: Option<f64>) {
        let thresholds = ThresholdTables::default();
        let snapshot = snapshot(hr, sys, Some(30.0));
        let ctx = AnalysisContext::new(&snapshot, &thresholds);
        assert!(CardiovascularAnalyzer.assess(&ctx).is_none());
    }

    #[test]
    fn test_nan_falls_through_to_fair() {
        assert_eq!(tier_for(f64::NAN, 120.0, Some(30.0)), Tier::Fair);
    }

    #[test]
    fn test_hypertension_adds_logging_action() {
        let thresholds = ThresholdTables::default();
        let snapshot = snapshot(Some(72.0), Some(120.0), Some(30.0));
        let profile = UserProfile {
            medical_conditions: vec!["Hypertension".to_string()],
            ..Default::default()
        };
        let ctx = AnalysisContext::new(&snapshot, &thresholds).with_profile(Some(&profile));

        let (_, insight) = CardiovascularAnalyzer
            .analyze(&ctx, InsightTemplates::builtin())
            .unwrap();
        assert!(insight
            .actions
            .last()
            .is_some_and(|a| a.contains("blood pressure twice daily")));

        let plain = AnalysisContext::new(&snapshot, &thresholds);
        assert!(CardiovascularAnalyzer.personalize(&plain, Tier::Excellent).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: systolic above 140 is always poor
        #[test]
        fn prop_high_systolic_is_poor(
            hr in 30.0f64..200.0,
            sys in 140.01f64..250.0,
            exercise in 0.0f64..300.0,
        ) {
            prop_assert_eq!(tier_for(hr, sys, Some(exercise)), Tier::Poor);
        }
    }
}
