//! Ordered tier rule cascades
//!
//! A cascade is a list of `(tier, predicate)` pairs evaluated top to
//! bottom. The first matching predicate decides the tier; later rules are
//! never consulted. When nothing matches, including when an input is NaN
//! and every comparison is false, the fallback tier applies.

use health_insights_shared::{Priority, Severity, Tier};

type Predicate<'a, I> = Box<dyn Fn(&I) -> bool + 'a>;

struct TierRule<'a, I> {
    tier: Tier,
    predicate: Predicate<'a, I>,
}

/// First-match-wins tier classifier over inputs of type `I`
pub struct RuleCascade<'a, I> {
    rules: Vec<TierRule<'a, I>>,
    fallback: Tier,
}

impl<'a, I> RuleCascade<'a, I> {
    pub fn new(fallback: Tier) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule; rules added earlier take precedence
    pub fn rule(mut self, tier: Tier, predicate: impl Fn(&I) -> bool + 'a) -> Self {
        self.rules.push(TierRule {
            tier,
            predicate: Box::new(predicate),
        });
        self
    }

    pub fn evaluate(&self, input: &I) -> Tier {
        self.rules
            .iter()
            .find(|rule| (rule.predicate)(input))
            .map(|rule| rule.tier)
            .unwrap_or(self.fallback)
    }

    /// Every tier this cascade can produce, in evaluation order
    pub fn tiers(&self) -> Vec<Tier> {
        let mut tiers: Vec<Tier> = self.rules.iter().map(|rule| rule.tier).collect();
        if !tiers.contains(&self.fallback) {
            tiers.push(self.fallback);
        }
        tiers
    }
}

/// Severity, priority and confidence attached to a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierOutcome {
    pub severity: Severity,
    pub priority: Priority,
    pub confidence: u8,
}

impl TierOutcome {
    pub const fn new(severity: Severity, priority: Priority, confidence: u8) -> Self {
        Self {
            severity,
            priority,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands() -> RuleCascade<'static, f64> {
        RuleCascade::new(Tier::Fair)
            .rule(Tier::Excellent, |v: &f64| *v >= 90.0)
            .rule(Tier::Good, |v: &f64| *v >= 50.0)
            .rule(Tier::Poor, |v: &f64| *v < 20.0)
    }

    #[test]
    fn test_first_match_wins() {
        let cascade = RuleCascade::new(Tier::Fair)
            .rule(Tier::Poor, |v: &f64| *v > 10.0)
            .rule(Tier::Excellent, |v: &f64| *v > 50.0);
        // Both predicates match 60; the earlier rule decides
        assert_eq!(cascade.evaluate(&60.0), Tier::Poor);
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let cascade = bands();
        assert_eq!(cascade.evaluate(&95.0), Tier::Excellent);
        assert_eq!(cascade.evaluate(&60.0), Tier::Good);
        assert_eq!(cascade.evaluate(&10.0), Tier::Poor);
        assert_eq!(cascade.evaluate(&30.0), Tier::Fair);
    }

    #[test]
    fn test_nan_reaches_fallback() {
        assert_eq!(bands().evaluate(&f64::NAN), Tier::Fair);
    }

    #[test]
    fn test_tiers_lists_rules_then_fallback() {
        assert_eq!(
            bands().tiers(),
            vec![Tier::Excellent, Tier::Good, Tier::Poor, Tier::Fair]
        );
    }
}
