//! Composite wellness score

use health_insights_shared::Tier;

/// Percentage of assessed categories in a favourable tier
///
/// `None` entries (insufficient data) count neither for nor against.
/// Rounds half up; with nothing assessed the score is 0.
pub fn wellness_score<I>(tiers: I) -> u8
where
    I: IntoIterator<Item = Option<Tier>>,
{
    let (favorable, total) = tiers
        .into_iter()
        .flatten()
        .fold((0u32, 0u32), |(favorable, total), tier| {
            (favorable + u32::from(tier.is_favorable()), total + 1)
        });

    if total == 0 {
        return 0;
    }

    // Bounded by 100 since favorable <= total
    ((200 * favorable + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_null_categories_are_excluded() {
        let tiers = [
            Some(Tier::Excellent),
            Some(Tier::Good),
            Some(Tier::Poor),
            None,
        ];
        assert_eq!(wellness_score(tiers), 67);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![None, None], 0)]
    #[case(vec![Some(Tier::Low)], 100)]
    #[case(vec![Some(Tier::Moderate)], 0)]
    #[case(vec![Some(Tier::Excellent), Some(Tier::Fair)], 50)]
    // 1/8 = 12.5 rounds up
    #[case(vec![Some(Tier::Good), Some(Tier::Fair), Some(Tier::Fair), Some(Tier::Fair),
                Some(Tier::Poor), Some(Tier::Poor), Some(Tier::High), Some(Tier::Moderate)], 13)]
    // 1/3 = 33.3 rounds down
    #[case(vec![Some(Tier::Good), Some(Tier::Fair), Some(Tier::High)], 33)]
    fn test_scores(#[case] tiers: Vec<Option<Tier>>, #[case] expected: u8) {
        assert_eq!(wellness_score(tiers), expected);
    }

    fn arb_tier() -> impl Strategy<Value = Option<Tier>> {
        prop_oneof![
            Just(None),
            Just(Some(Tier::Excellent)),
            Just(Some(Tier::Good)),
            Just(Some(Tier::Fair)),
            Just(Some(Tier::Poor)),
            Just(Some(Tier::Low)),
            Just(Some(Tier::Moderate)),
            Just(Some(Tier::High)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: score stays within 0-100 and matches float rounding
        #[test]
        fn prop_score_matches_percentage(tiers in prop::collection::vec(arb_tier(), 0..12)) {
            let score = wellness_score(tiers.clone());
            prop_assert!(score <= 100);

            let assessed: Vec<Tier> = tiers.iter().flatten().copied().collect();
            if !assessed.is_empty() {
                let favorable = assessed.iter().filter(|t| t.is_favorable()).count() as f64;
                let expected = (favorable / assessed.len() as f64 * 100.0 + 0.5).floor() as u8;
                prop_assert_eq!(score, expected);
            }
        }
    }
}
