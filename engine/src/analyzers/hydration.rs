//! Hydration analyzer
//!
//! Water intake is compared with a daily target that grows with the
//! exercise logged that day.

use super::{format_value, AnalysisContext, Assessment, CategoryAnalyzer, RuleCascade, TierOutcome};
use health_insights_shared::{
    CategoryId, HydrationThresholds, MetricType, Priority, Severity, Tier,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrationInputs {
    pub intake_oz: f64,
    pub target_oz: f64,
}

pub struct HydrationAnalyzer;

impl HydrationAnalyzer {
    pub fn cascade(t: &HydrationThresholds) -> RuleCascade<'_, HydrationInputs> {
        RuleCascade::new(Tier::Poor)
            .rule(Tier::Excellent, move |i: &HydrationInputs| {
                i.intake_oz >= t.excellent_fraction * i.target_oz
            })
            .rule(Tier::Good, move |i: &HydrationInputs| {
                i.intake_oz >= t.good_fraction * i.target_oz
            })
            .rule(Tier::Fair, move |i: &HydrationInputs| {
                i.intake_oz >= t.fair_fraction * i.target_oz
            })
    }

    pub fn outcome(tier: Tier) -> TierOutcome {
        match tier {
            Tier::Excellent => TierOutcome::new(Severity::Normal, Priority::Low, 90),
            Tier::Good => TierOutcome::new(Severity::Normal, Priority::Low, 85),
            Tier::Fair => TierOutcome::new(Severity::Warning, Priority::Medium, 80),
            _ => TierOutcome::new(Severity::Warning, Priority::High, 85),
        }
    }
}

impl CategoryAnalyzer for HydrationAnalyzer {
    fn category(&self) -> CategoryId {
        CategoryId::Hydration
    }

    fn assess(&self, ctx: &AnalysisContext<'_>) -> Option<Assessment> {
        let t = &ctx.thresholds.hydration;
        let inputs = HydrationInputs {
            intake_oz: ctx.metric(MetricType::WaterIntake)?,
            target_oz: t.target_oz(ctx.metric(MetricType::ExerciseMinutes)),
        };
        let tier = Self::cascade(t).evaluate(&inputs);
        let outcome = Self::outcome(tier);

        debug!(
            category = "hydration",
            tier = %tier,
            target_oz = inputs.target_oz,
            confidence = outcome.confidence,
            "Assessed category"
        );

        Some(Assessment {
            tier,
            outcome,
            description: format!(
                "You drank {} oz of water against a daily target of {} oz.",
                format_value(inputs.intake_oz),
                format_value(inputs.target_oz)
            ),
        })
    }

    fn personalize(&self, ctx: &AnalysisContext<'_>, tier: Tier) -> Vec<String> {
        // Thirst signals weaken with age
        match ctx.profile {
            Some(profile) if profile.is_senior() && tier != Tier::Excellent => vec![
                "Drink on a schedule rather than waiting until you feel thirsty".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}
