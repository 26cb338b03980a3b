//! Activity analyzer
//!
//! Steps and exercise minutes are both required. The favourable tiers
//! need both targets met; `poor` needs both to fall short.

use super::{format_value, AnalysisContext, Assessment, CategoryAnalyzer, RuleCascade, TierOutcome};
use health_insights_shared::{
    ActivityLevel, ActivityThresholds, CategoryId, MetricType, Priority, Severity, Tier,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityInputs {
    pub steps: f64,
    pub exercise_minutes: f64,
}

pub struct ActivityAnalyzer;

impl ActivityAnalyzer {
    pub fn cascade(t: &ActivityThresholds) -> RuleCascade<'_, ActivityInputs> {
        RuleCascade::new(Tier::Fair)
            .rule(Tier::Excellent, move |i: &ActivityInputs| {
                i.steps >= t.excellent_steps && i.exercise_minutes >= t.excellent_exercise
            })
            .rule(Tier::Good, move |i: &ActivityInputs| {
                i.steps >= t.good_steps && i.exercise_minutes >= t.good_exercise
            })
            .rule(Tier::Poor, move |i: &ActivityInputs| {
                i.steps < t.poor_steps_below && i.exercise_minutes < t.poor_exercise_below
            })
    }

    pub fn outcome(tier: Tier) -> TierOutcome {
        match tier {
            Tier::Excellent => TierOutcome::new(Severity::Normal, Priority::Low, 90),
            Tier::Good => TierOutcome::new(Severity::Normal, Priority::Low, 85),
            Tier::Poor => TierOutcome::new(Severity::Warning, Priority::High, 85),
            _ => TierOutcome::new(Severity::Warning, Priority::Medium, 80),
        }
    }
}

impl CategoryAnalyzer for ActivityAnalyzer {
    fn category(&self) -> CategoryId {
        CategoryId::Activity
    }

    fn assess(&self, ctx: &AnalysisContext<'_>) -> Option<Assessment> {
        let inputs = ActivityInputs {
            steps: ctx.metric(MetricType::Steps)?,
            exercise_minutes: ctx.metric(MetricType::ExerciseMinutes)?,
        };
        let tier = Self::cascade(&ctx.thresholds.activity).evaluate(&inputs);
        let outcome = Self::outcome(tier);

        debug!(
            category = "activity",
            tier = %tier,
            confidence = outcome.confidence,
            "Assessed category"
        );

        Some(Assessment {
            tier,
            outcome,
            description: format!(
                "You took {} steps and logged {} minutes of exercise.",
                format_value(inputs.steps),
                format_value(inputs.exercise_minutes)
            ),
        })
    }

    fn personalize(&self, ctx: &AnalysisContext<'_>, tier: Tier) -> Vec<String> {
        let Some(profile) = ctx.profile else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if profile.activity_level == Some(ActivityLevel::Sedentary) && tier != Tier::Excellent {
            actions.push(
                "Build up gradually: add 5 minutes of walking each week".to_string(),
            );
        }
        if profile.is_senior() {
            actions.push("Include balance and flexibility work such as tai chi or yoga".to_string());
        }
        actions
    }
}
