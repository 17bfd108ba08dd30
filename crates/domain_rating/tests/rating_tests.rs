//! Rate Calculator Tests
//!
//! This module contains tests for the premium rate calculator:
//! - Determinism for fixed inputs
//! - The worked pricing example from the rate model
//! - Rounding relationship between monthly and annual premiums
//! - Monotonicity of the pricing factors
//! - Permissive fallback for unrecognized enum values
//!
//! # Test Organization
//!
//! - `fixed_example_tests` - hand-computed reference premiums
//! - `invariant_tests` - determinism and rounding invariants
//! - `monotonicity_tests` - directional factor properties (proptest)
//! - `fallback_tests` - neutral pricing for unrecognized values

use domain_rating::{calculate_rate, Gender, HealthRating, RateInput};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_utils::RateInputBuilder;

/// A mid-market reference applicant: all multiplicative factors except
/// age resolve to 1.
fn reference_input() -> RateInput {
    RateInputBuilder::new().build()
}

// ============================================================================
// FIXED EXAMPLE TESTS
// ============================================================================

mod fixed_example_tests {
    use super::*;

    /// age=35, male, non-smoker, good health, $500k, 20-year term:
    /// annual = 500 * 0.14 * 1.26 = 88.20, monthly = 7.35
    #[test]
    fn test_reference_applicant_premium() {
        let rate = calculate_rate(&reference_input());

        assert_eq!(rate.annual.amount(), dec!(88.20), "annual premium");
        assert_eq!(rate.monthly.amount(), dec!(7.35), "monthly premium");
    }

    /// Female applicants price at 0.91 of the male rate
    #[test]
    fn test_gender_factor_applied() {
        let female = RateInputBuilder::new().with_gender(Gender::Female).build();
        let rate = calculate_rate(&female);

        // 88.20 * 0.91 = 80.262, rounds half-up to 80.26
        assert_eq!(rate.annual.amount(), dec!(80.26));
    }

    /// Smokers price at 2.3x
    #[test]
    fn test_smoker_factor_applied() {
        let smoker = RateInputBuilder::new().smoker().build();
        let rate = calculate_rate(&smoker);

        // 88.20 * 2.3 = 202.86
        assert_eq!(rate.annual.amount(), dec!(202.86));
    }
}

// ============================================================================
// INVARIANT TESTS
// ============================================================================

mod invariant_tests {
    use super::*;

    /// The calculator is a pure function: identical inputs always produce
    /// identical outputs.
    #[test]
    fn test_determinism() {
        let input = reference_input();
        let first = calculate_rate(&input);

        for _ in 0..100 {
            assert_eq!(calculate_rate(&input), first);
        }
    }

    proptest! {
        /// monthly * 12 stays within $0.06 of annual; both sides are
        /// rounded independently, so exact equality is not guaranteed.
        #[test]
        fn prop_monthly_times_twelve_near_annual(
            coverage in 100_000i64..=2_000_000,
            term in prop::sample::select(vec![10u32, 15, 20, 25, 30]),
            age in 18u32..=80,
            smoker in any::<bool>(),
        ) {
            let input = RateInput::new(coverage, term, age, Gender::Male, smoker, HealthRating::Average);
            let rate = calculate_rate(&input);

            let delta = (rate.monthly.amount() * dec!(12) - rate.annual.amount()).abs();
            prop_assert!(delta <= dec!(0.06), "delta {} too large for {:?}", delta, input);
        }

        /// Premiums are never negative for slider-range inputs.
        #[test]
        fn prop_non_negative(
            coverage in 100_000i64..=2_000_000,
            age in 18u32..=80,
        ) {
            let input = RateInput::new(coverage, 20, age, Gender::Female, false, HealthRating::Excellent);
            let rate = calculate_rate(&input);

            prop_assert!(rate.annual.amount() >= Decimal::ZERO);
            prop_assert!(rate.monthly.amount() >= Decimal::ZERO);
        }
    }
}

// ============================================================================
// MONOTONICITY TESTS
// ============================================================================

mod monotonicity_tests {
    use super::*;

    proptest! {
        /// Holding all else fixed, more coverage never costs less.
        #[test]
        fn prop_coverage_monotone(
            lower in 100_000i64..=1_000_000,
            bump in 50_000i64..=1_000_000,
            age in 18u32..=80,
        ) {
            let base = RateInput::new(lower, 20, age, Gender::Male, false, HealthRating::Good);
            let more = RateInput::new(lower + bump, 20, age, Gender::Male, false, HealthRating::Good);

            prop_assert!(calculate_rate(&more).annual >= calculate_rate(&base).annual);
        }

        /// Smoking strictly increases the annual premium.
        #[test]
        fn prop_smoker_strictly_more_expensive(
            coverage in 100_000i64..=2_000_000,
            age in 18u32..=80,
        ) {
            let non_smoker = RateInput::new(coverage, 20, age, Gender::Male, false, HealthRating::Good);
            let smoker = RateInput { smoker: true, ..non_smoker.clone() };

            prop_assert!(calculate_rate(&smoker).annual > calculate_rate(&non_smoker).annual);
        }
    }
}

// ============================================================================
// FALLBACK TESTS
// ============================================================================

mod fallback_tests {
    use super::*;

    /// An off-menu term prices at the neutral factor 1.0 instead of
    /// erroring; the result matches the 20-year term, whose factor is
    /// also 1.0.
    #[test]
    fn test_unrecognized_term_prices_like_neutral() {
        let neutral = calculate_rate(&reference_input());
        let odd_term = calculate_rate(&reference_input().with_term_years(17));

        assert_eq!(odd_term.annual, neutral.annual);
        assert_eq!(odd_term.monthly, neutral.monthly);
    }

    /// An unrecognized health rating string deserializes to the neutral
    /// classification and prices like `good` (factor 1.0).
    #[test]
    fn test_unrecognized_health_rating_prices_like_neutral() {
        let mut json = serde_json::to_value(reference_input()).unwrap();
        json["healthRating"] = serde_json::Value::String("olympian".to_string());

        let input: RateInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.health_rating, HealthRating::Unrated);
        assert_eq!(calculate_rate(&input), calculate_rate(&reference_input()));
    }
}
