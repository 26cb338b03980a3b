//! Insight message templates
//!
//! Per category: a title, a benefits line, and a recommendation with an
//! ordered action list for each tier the category's analyzer can produce.
//! Lookups never fail; a missing tier resolves to the generic entry.

use crate::models::{CategoryId, Tier};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const GENERIC_RECOMMENDATION: &str =
    "Keep tracking this metric and talk to a healthcare professional if anything concerns you.";
const GENERIC_BENEFITS: &str = "Consistent tracking helps you spot changes early.";

static GENERIC_ENTRY: Lazy<TemplateEntry> = Lazy::new(|| TemplateEntry {
    recommendation: GENERIC_RECOMMENDATION.to_string(),
    actions: Vec::new(),
});

static BUILTIN: Lazy<InsightTemplates> = Lazy::new(builtin_templates);

/// Recommendation text and actions for one tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub recommendation: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl TemplateEntry {
    /// The entry used when a category has no entry for a tier
    pub fn generic() -> &'static TemplateEntry {
        &GENERIC_ENTRY
    }
}

/// All templates for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTemplate {
    pub title: String,
    pub benefits: String,
    #[serde(default)]
    pub tiers: BTreeMap<Tier, TemplateEntry>,
}

/// Template set for every category, read-only once loaded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightTemplates {
    categories: BTreeMap<CategoryId, CategoryTemplate>,
}

impl InsightTemplates {
    pub fn new(categories: BTreeMap<CategoryId, CategoryTemplate>) -> Self {
        Self { categories }
    }

    /// Templates compiled into the crate
    pub fn builtin() -> &'static InsightTemplates {
        &BUILTIN
    }

    pub fn category(&self, category: CategoryId) -> Option<&CategoryTemplate> {
        self.categories.get(&category)
    }

    /// Exact lookup; `None` when the category or tier has no entry
    pub fn entry(&self, category: CategoryId, tier: Tier) -> Option<&TemplateEntry> {
        self.category(category)
            .and_then(|template| template.tiers.get(&tier))
    }

    /// Lookup that falls back to the generic entry
    pub fn entry_or_generic(&self, category: CategoryId, tier: Tier) -> &TemplateEntry {
        self.entry(category, tier)
            .unwrap_or_else(|| TemplateEntry::generic())
    }

    pub fn title(&self, category: CategoryId) -> &str {
        self.category(category)
            .map(|template| template.title.as_str())
            .unwrap_or_else(|| category.display_name())
    }

    pub fn benefits(&self, category: CategoryId) -> &str {
        self.category(category)
            .map(|template| template.benefits.as_str())
            .unwrap_or(GENERIC_BENEFITS)
    }

    /// Replace or add the template for one category
    pub fn insert(&mut self, category: CategoryId, template: CategoryTemplate) {
        self.categories.insert(category, template);
    }
}

fn entry(recommendation: &str, actions: &[&str]) -> TemplateEntry {
    TemplateEntry {
        recommendation: recommendation.to_string(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

fn category(title: &str, benefits: &str, tiers: Vec<(Tier, TemplateEntry)>) -> CategoryTemplate {
    CategoryTemplate {
        title: title.to_string(),
        benefits: benefits.to_string(),
        tiers: tiers.into_iter().collect(),
    }
}

fn builtin_templates() -> InsightTemplates {
    let mut categories = BTreeMap::new();

    categories.insert(
        CategoryId::Cardiovascular,
        category(
            "Cardiovascular Health",
            "Supports heart function, circulation and long-term cardiovascular resilience.",
            vec![
                (
                    Tier::Excellent,
                    entry(
                        "Your heart rate and blood pressure are in an optimal range. Keep up your current routine.",
                        &[
                            "Maintain at least 150 minutes of moderate exercise per week",
                            "Continue a diet rich in vegetables, whole grains and lean protein",
                            "Recheck your blood pressure monthly",
                        ],
                    ),
                ),
                (
                    Tier::Good,
                    entry(
                        "Your cardiovascular readings are healthy. Regular aerobic exercise can move them into the optimal range.",
                        &[
                            "Add two 30-minute brisk walks to your week",
                            "Limit sodium to under 2,300 mg per day",
                            "Track your resting heart rate each morning",
                        ],
                    ),
                ),
                (
                    Tier::Fair,
                    entry(
                        "Your cardiovascular readings are slightly outside the ideal range. Small lifestyle changes can help.",
                        &[
                            "Aim for 30 minutes of moderate activity most days",
                            "Reduce caffeine and alcohol intake",
                            "Practice 5 minutes of slow breathing twice a day",
                        ],
                    ),
                ),
                (
                    Tier::Poor,
                    entry(
                        "Your heart rate or blood pressure is elevated. Please consult a healthcare provider.",
                        &[
                            "Schedule an appointment with your doctor",
                            "Measure your blood pressure at the same time each day",
                            "Avoid strenuous exercise until you have medical guidance",
                            "Cut back on salt, caffeine and alcohol",
                        ],
                    ),
                ),
            ],
        ),
    );

    categories.insert(
        CategoryId::Sleep,
        category(
            "Sleep Quality",
            "Improves energy, focus, mood and immune function.",
            vec![
                (
                    Tier::Excellent,
                    entry(
                        "You are getting restorative sleep. Keep your current schedule.",
                        &[
                            "Keep consistent bed and wake times, including weekends",
                            "Keep your bedroom cool, dark and quiet",
                        ],
                    ),
                ),
                (
                    Tier::Good,
                    entry(
                        "Your sleep is in a healthy range. A steadier routine can make it more restorative.",
                        &[
                            "Stop screen use 30 minutes before bed",
                            "Avoid caffeine after 2 PM",
                            "Wind down with a short relaxation routine",
                        ],
                    ),
                ),
                (
                    Tier::Fair,
                    entry(
                        "Your sleep could be improved. Focus on duration and consistency.",
                        &[
                            "Set a fixed bedtime that allows 7-9 hours of sleep",
                            "Limit naps to 20 minutes before 3 PM",
                            "Get morning daylight to anchor your body clock",
                        ],
                    ),
                ),
                (
                    Tier::Poor,
                    entry(
                        "Your sleep duration or stress level is affecting rest. Prioritise sleep recovery.",
                        &[
                            "Create a 30-minute wind-down routine without screens",
                            "Avoid alcohol and heavy meals within 3 hours of bedtime",
                            "Try a guided relaxation or breathing exercise before bed",
                            "Talk to a doctor if poor sleep persists for more than two weeks",
                        ],
                    ),
                ),
            ],
        ),
    );

    categories.insert(
        CategoryId::Stress,
        category(
            "Stress Management",
            "Lowers cortisol, improves sleep and supports heart health.",
            vec![
                (
                    Tier::Low,
                    entry(
                        "Your stress level is well managed. Keep the habits that work for you.",
                        &[
                            "Keep regular breaks in your day",
                            "Continue activities you find relaxing",
                        ],
                    ),
                ),
                (
                    Tier::Moderate,
                    entry(
                        "You are experiencing moderate stress. Build short recovery moments into your day.",
                        &[
                            "Practice 10 minutes of mindfulness or meditation daily",
                            "Take a short walk outdoors",
                            "Write down three priorities each morning",
                        ],
                    ),
                ),
                (
                    Tier::High,
                    entry(
                        "Your stress level is high. Take steps to reduce it and consider professional support.",
                        &[
                            "Try box breathing: inhale 4s, hold 4s, exhale 4s, hold 4s",
                            "Reduce commitments where you can this week",
                            "Reach out to a friend, family member or counselor",
                            "Talk to a healthcare professional if stress affects daily life",
                        ],
                    ),
                ),
            ],
        ),
    );

    categories.insert(
        CategoryId::Hydration,
        category(
            "Hydration Status",
            "Supports energy, concentration, temperature regulation and kidney health.",
            vec![
                (
                    Tier::Excellent,
                    entry(
                        "You are meeting your hydration target. Keep it up.",
                        &["Keep a water bottle within reach throughout the day"],
                    ),
                ),
                (
                    Tier::Good,
                    entry(
                        "You are close to your hydration target. A few more glasses will get you there.",
                        &[
                            "Drink a glass of water with every meal",
                            "Refill your bottle each time it empties",
                        ],
                    ),
                ),
                (
                    Tier::Fair,
                    entry(
                        "Your water intake is below target. Spread drinks more evenly through the day.",
                        &[
                            "Set hourly reminders to drink water",
                            "Start the day with a full glass of water",
                            "Eat water-rich foods such as fruit and vegetables",
                        ],
                    ),
                ),
                (
                    Tier::Poor,
                    entry(
                        "You are significantly under-hydrated. Increase your water intake today.",
                        &[
                            "Drink a glass of water now",
                            "Carry a water bottle and finish it twice before evening",
                            "Replace sugary drinks with water",
                            "Drink extra water before, during and after exercise",
                        ],
                    ),
                ),
            ],
        ),
    );

    categories.insert(
        CategoryId::Glucose,
        category(
            "Blood Sugar Balance",
            "Maintains steady energy and lowers the risk of diabetes.",
            vec![
                (
                    Tier::Excellent,
                    entry(
                        "Your blood glucose is in the optimal fasting range.",
                        &[
                            "Keep meals balanced with fiber, protein and healthy fats",
                            "Stay active after meals",
                        ],
                    ),
                ),
                (
                    Tier::Good,
                    entry(
                        "Your blood glucose is healthy but near the upper end of normal.",
                        &[
                            "Choose whole grains over refined carbohydrates",
                            "Take a 10-minute walk after meals",
                        ],
                    ),
                ),
                (
                    Tier::Fair,
                    entry(
                        "Your blood glucose is outside the ideal range. Diet and activity changes can help.",
                        &[
                            "Limit sugary drinks and desserts",
                            "Pair carbohydrates with protein or fiber",
                            "Ask your doctor about an HbA1c test",
                        ],
                    ),
                ),
                (
                    Tier::Poor,
                    entry(
                        "Your blood glucose is at a level that needs medical attention.",
                        &[
                            "Consult your healthcare provider promptly",
                            "Monitor glucose at consistent times each day",
                            "Avoid sugary foods and drinks",
                        ],
                    ),
                ),
            ],
        ),
    );

    categories.insert(
        CategoryId::Activity,
        category(
            "Physical Activity",
            "Strengthens heart, muscles and bones, and improves mood.",
            vec![
                (
                    Tier::Excellent,
                    entry(
                        "You are very active. Great work.",
                        &[
                            "Include two strength sessions per week",
                            "Schedule rest days for recovery",
                        ],
                    ),
                ),
                (
                    Tier::Good,
                    entry(
                        "You are reasonably active. A little more movement will reach the optimal level.",
                        &[
                            "Add a 10-minute walk after lunch",
                            "Take the stairs instead of the elevator",
                        ],
                    ),
                ),
                (
                    Tier::Fair,
                    entry(
                        "Your activity is below recommended levels. Look for more chances to move.",
                        &[
                            "Aim for 7,500 steps a day as a first milestone",
                            "Stand up and move for 5 minutes every hour",
                            "Schedule three 20-minute workouts this week",
                        ],
                    ),
                ),
                (
                    Tier::Poor,
                    entry(
                        "You have been mostly inactive. Start with small, regular movement.",
                        &[
                            "Start with a 10-minute walk each day",
                            "Set a step goal 1,000 above your current daily average",
                            "Find an activity you enjoy to make it a habit",
                        ],
                    ),
                ),
            ],
        ),
    );

    InsightTemplates::new(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_category() {
        let templates = InsightTemplates::builtin();
        for category in CategoryId::ALL {
            assert!(
                templates.category(category).is_some(),
                "missing template for {}",
                category
            );
        }
    }

    #[test]
    fn test_builtin_covers_analyzer_tiers() {
        let templates = InsightTemplates::builtin();
        let graded = [Tier::Excellent, Tier::Good, Tier::Fair, Tier::Poor];
        for category in CategoryId::ALL {
            if category == CategoryId::Stress {
                continue;
            }
            for tier in graded {
                assert!(templates.entry(category, tier).is_some(), "{} {}", category, tier);
            }
        }
        for tier in [Tier::Low, Tier::Moderate, Tier::High] {
            assert!(templates.entry(CategoryId::Stress, tier).is_some());
        }
    }

    #[test]
    fn test_missing_tier_falls_back_to_generic() {
        let templates = InsightTemplates::builtin();
        assert!(templates.entry(CategoryId::Stress, Tier::Excellent).is_none());

        let fallback = templates.entry_or_generic(CategoryId::Stress, Tier::Excellent);
        assert_eq!(fallback, TemplateEntry::generic());
        assert!(fallback.actions.is_empty());
    }

    #[test]
    fn test_empty_templates_fall_back() {
        let templates = InsightTemplates::default();
        assert_eq!(templates.title(CategoryId::Glucose), "Metabolic Health");
        assert_eq!(templates.benefits(CategoryId::Glucose), GENERIC_BENEFITS);
        assert_eq!(
            templates.entry_or_generic(CategoryId::Glucose, Tier::Poor).recommendation,
            GENERIC_RECOMMENDATION
        );
    }

    #[test]
    fn test_templates_deserialize_from_json() {
        let templates: InsightTemplates = serde_json::from_str(
            r#"{
                "hydration": {
                    "title": "Water",
                    "benefits": "Stay sharp",
                    "tiers": {"poor": {"recommendation": "Drink up", "actions": ["Drink now"]}}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(templates.title(CategoryId::Hydration), "Water");
        assert_eq!(
            templates.entry(CategoryId::Hydration, Tier::Poor).unwrap().actions,
            vec!["Drink now".to_string()]
        );
        assert!(templates.entry(CategoryId::Hydration, Tier::Good).is_none());
    }
}
