//! Sleep analyzer
//!
//! Sleep duration is graded together with the stress level when one is
//! known. Too little sleep, too much sleep or high stress each make the
//! night `poor` on their own.

use super::{format_value, AnalysisContext, Assessment, CategoryAnalyzer, RuleCascade, TierOutcome};
use health_insights_shared::{CategoryId, MetricType, Priority, Severity, SleepThresholds, Tier};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepInputs {
    pub hours: f64,
    pub stress: Option<f64>,
}

pub struct SleepAnalyzer;

impl SleepAnalyzer {
    pub fn cascade(t: &SleepThresholds) -> RuleCascade<'_, SleepInputs> {
        // Unknown stress never restricts a favourable tier nor triggers a poor one
        RuleCascade::new(Tier::Fair)
            .rule(Tier::Excellent, move |i: &SleepInputs| {
                i.hours >= t.excellent_hours_min
                    && i.hours <= t.excellent_hours_max
                    && i.stress.map_or(true, |s| s <= t.excellent_stress_max)
            })
            .rule(Tier::Good, move |i: &SleepInputs| {
                i.hours >= t.good_hours_min
                    && i.hours <= t.good_hours_max
                    && i.stress.map_or(true, |s| s <= t.good_stress_max)
            })
            .rule(Tier::Poor, move |i: &SleepInputs| {
                i.hours < t.poor_hours_below
                    || i.hours > t.poor_hours_above
                    || i.stress.is_some_and(|s| s > t.poor_stress_above)
            })
    }

    pub fn outcome(tier: Tier) -> TierOutcome {
        match tier {
            Tier::Excellent => TierOutcome::new(Severity::Normal, Priority::Low, 85),
            Tier::Good => TierOutcome::new(Severity::Normal, Priority::Low, 80),
            Tier::Poor => TierOutcome::new(Severity::Warning, Priority::High, 90),
            _ => TierOutcome::new(Severity::Warning, Priority::Medium, 75),
        }
    }

    fn describe(inputs: &SleepInputs) -> String {
        match inputs.stress {
            Some(stress) => format!(
                "You slept {} hours with a stress level of {}/10.",
                format_value(inputs.hours),
                format_value(stress)
            ),
            None => format!("You slept {} hours.", format_value(inputs.hours)),
        }
    }
}

impl CategoryAnalyzer for SleepAnalyzer {
    fn category(&self) -> CategoryId {
        CategoryId::Sleep
    }

    fn assess(&self, ctx: &AnalysisContext<'_>) -> Option<Assessment> {
        let inputs = SleepInputs {
            hours: ctx.metric(MetricType::SleepHours)?,
            stress: ctx.metric(MetricType::StressLevel),
        };
        let tier = Self::cascade(&ctx.thresholds.sleep).evaluate(&inputs);
        let outcome = Self::outcome(tier);

        debug!(
            category = "sleep",
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_insights_shared::{InsightTemplates, ThresholdTables, VitalSnapshot};
    use rstest::rstest;

    fn tier_for(hours: f64, stress: Option<f64>) -> Tier {
        let thresholds = ThresholdTables::default();
        let inputs = SleepInputs { hours, stress };
        let tier = SleepAnalyzer::cascade(&thresholds.sleep).evaluate(&inputs);
        tier
    }

    #[test]
    fn test_short_sleep_and_high_stress_is_poor() {
        let thresholds = ThresholdTables::default();
        let mut snapshot = VitalSnapshot::new();
        snapshot.insert(MetricType::SleepHours, 5.5);
        snapshot.insert(MetricType::StressLevel, 8.0);
        let ctx = AnalysisContext::new(&snapshot, &thresholds);

        let (graded, insight) = SleepAnalyzer.analyze(&ctx, InsightTemplates::builtin()).unwrap();
        assert_eq!(graded.tier, Tier::Poor);
        assert_eq!(insight.priority, Priority::High);
        assert_eq!(insight.confidence, 90);
        assert_eq!(
            insight.description,
            "You slept 5.5 hours with a stress level of 8/10."
        );
    }

    #[rstest]
    #[case(8.0, Some(3.0), Tier::Excellent)]
    #[case(7.0, Some(4.0), Tier::Excellent)]
    #[case(9.0, None, Tier::Excellent)]
    #[case(8.0, Some(5.0), Tier::Good)]
    #[case(6.5, Some(2.0), Tier::Good)]
    #[case(9.5, Some(6.0), Tier::Good)]
    #[case(6.2, Some(2.0), Tier::Fair)]
    #[case(9.8, None, Tier::Fair)]
    #[case(8.0, Some(7.0), Tier::Fair)]
    #[case(5.9, None, Tier::Poor)]
    #[case(10.5, Some(1.0), Tier::Poor)]
    #[case(8.0, Some(7.5), Tier::Poor)]
    fn test_cascade_boundaries(
        #[case] hours: f64,
        #[case] stress: Option<f64>,
        #[case] expected: Tier,
    ) {
        assert_eq!(tier_for(hours, stress), expected);
    }

    #[test]
    fn test_good_band_wins_before_poor_stress_check() {
        // 6.5-9.5h with stress <= 6 is good; only stress above 7 reaches poor
        assert_eq!(tier_for(7.5, Some(6.0)), Tier::Good);
        assert_eq!(tier_for(7.5, Some(8.0)), Tier::Poor);
    }

    #[test]
    fn test_missing_hours_yields_none() {
        let thresholds = ThresholdTables::default();
        let mut snapshot = VitalSnapshot::new();
        snapshot.insert(MetricType::StressLevel, 2.0);
        let ctx = AnalysisContext::new(&snapshot, &thresholds);
        assert!(SleepAnalyzer.assess(&ctx).is_none());
    }

    #[test]
    fn test_nan_hours_fall_through_to_fair() {
        assert_eq!(tier_for(f64::NAN, Some(2.0)), Tier::Fair);
    }
}
