//! Stress analyzer
//!
//! Self-reported stress is graded `low`/`moderate`/`high`. A reported
//! symptom from the stress keyword list amplifies the reading, and a
//! racing heart on top of elevated stress escalates it.

use super::{format_value, AnalysisContext, Assessment, CategoryAnalyzer, RuleCascade, TierOutcome};
use health_insights_shared::{CategoryId, MetricType, Priority, Severity, StressThresholds, Tier};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressInputs {
    pub stress: f64,
    pub has_symptom: bool,
}

pub struct StressAnalyzer;

impl StressAnalyzer {
    pub fn cascade(t: &StressThresholds) -> RuleCascade<'_, StressInputs> {
        RuleCascade::new(Tier::Moderate)
            .rule(Tier::Low, move |i: &StressInputs| {
                i.stress <= t.low_max && !i.has_symptom
            })
            .rule(Tier::High, move |i: &StressInputs| {
                i.stress >= t.high_min || (i.stress > t.symptom_amplified_above && i.has_symptom)
            })
    }

    pub fn outcome(tier: Tier) -> TierOutcome {
        match tier {
            Tier::Low => TierOutcome::new(Severity::Normal, Priority::Low, 80),
            Tier::High => TierOutcome::new(Severity::Critical, Priority::High, 85),
            _ => TierOutcome::new(Severity::Warning, Priority::Medium, 75),
        }
    }

    /// Whether any reported symptom matches a stress keyword
    ///
    /// Both sides are lowercased and stripped to letters; a symptom matches
    /// when it contains a whole keyword. Fragments of a keyword do not count.
    pub fn has_stress_symptom<'s>(
        symptoms: impl IntoIterator<Item = &'s str>,
        keywords: &[String],
    ) -> bool {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| normalize(k))
            .filter(|k| !k.is_empty())
            .collect();

        symptoms.into_iter().map(normalize).any(|symptom| {
            !symptom.is_empty() && keywords.iter().any(|k| symptom.contains(k.as_str()))
        })
    }

    /// Apply the heart-rate escalation to a cascade result
    ///
    /// When heart rate and stress are both above their escalation limits,
    /// `moderate` is promoted to `high` and the final tier's confidence is
    /// raised by the configured boost, capped at 100.
    pub fn escalate(
        t: &StressThresholds,
        tier: Tier,
        stress: f64,
        heart_rate: Option<f64>,
    ) -> (Tier, TierOutcome) {
        let escalated = heart_rate.is_some_and(|hr| hr > t.escalation_heart_rate_above)
            && stress > t.escalation_stress_above;
        if !escalated {
            return (tier, Self::outcome(tier));
        }

        let tier = if tier == Tier::Moderate { Tier::High } else { tier };
        let mut outcome = Self::outcome(tier);
        outcome.confidence = outcome
            .confidence
            .saturating_add(t.escalation_confidence_boost)
            .min(100);
        (tier, outcome)
    }

    fn describe(stress: f64, heart_rate: Option<f64>, has_symptom: bool) -> String {
        let mut description = format!("Your stress level is {}/10", format_value(stress));
        if let Some(hr) = heart_rate {
            description.push_str(&format!(" with a heart rate of {} bpm", format_value(hr)));
        }
        if has_symptom {
            description.push_str(", and you reported stress-related symptoms");
        }
        description.push('.');
        description
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

impl CategoryAnalyzer for StressAnalyzer {
    fn category(&self) -> CategoryId {
        CategoryId::Stress
    }

    fn assess(&self, ctx: &AnalysisContext<'_>) -> Option<Assessment> {
        let t = &ctx.thresholds.stress;
        let stress = ctx.metric(MetricType::StressLevel)?;
        let heart_rate = ctx.metric(MetricType::HeartRate);
        let has_symptom = Self::has_stress_symptom(ctx.symptoms.iter().copied(), &t.symptom_keywords);

        let base = Self::cascade(t).evaluate(&StressInputs {
            stress,
            has_symptom,
        });
        let (tier, outcome) = Self::escalate(t, base, stress, heart_rate);

        debug!(
            category = "stress",
            tier = %tier,
            escalated = tier != base || outcome != Self::outcome(base),
            confidence = outcome.confidence,
            "Assessed category"
        );

        Some(Assessment {
            tier,
            outcome,
            description: Self::describe(stress, heart_rate, has_symptom),
        })
    }
}
