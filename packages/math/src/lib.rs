#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::cast_precision_loss)]
#![forbid(unsafe_code)]

//! # numbox_math
//!
//! Stateless numeric helpers: prime generation, triangular sums,
//! arbitrary-precision products, and a percentage clamp.
//!
//! # Usage
//!
//! 1.  Call `numbox_math::primes_less_than` with an upper bound, or
//!     `numbox_math::first_n_primes` with a count, to generate primes
//! 2.  Call `numbox_math::triangular_sum` to sum the integers from 0
//!     through `n`
//! 3.  Call `numbox_math::factorial` or `numbox_math::odds_product` for
//!     products that can exceed the native integer range; both return a
//!     [`BigInt`]
//! 4.  Call `numbox_math::percentage` to compute a ratio clamped to
//!     `[0.0, 1.0]`

use num_bigint::BigInt;
use num_traits::One;

/// Returns every prime strictly less than `n`, in ascending order.
///
/// Candidates are trial-divided against the primes already accepted. Any
/// composite candidate has a prime factor that is already in the list, so
/// testing against found primes alone is sufficient.
#[must_use]
pub fn primes_less_than(n: u64) -> Vec<u64> {
    if n < 3 {
        return vec![];
    }

    let mut primes = vec![];

    for i in 2..n {
        if primes.iter().all(|p| i % p != 0) {
            primes.push(i);
        }
    }

    primes
}

/// Returns the first `n` primes, in ascending order.
#[must_use]
pub fn first_n_primes(n: usize) -> Vec<u64> {
    // The length check below only runs after a prime is accepted, so a
    // zero count has to return before the search starts.
    if n == 0 {
        return vec![];
    }

    let mut primes = Vec::with_capacity(n);
    let mut i = 2_u64;

    loop {
        if primes.iter().all(|p| i % p != 0) {
            primes.push(i);
            if primes.len() == n {
                return primes;
            }
        }
        i += 1;
    }
}

/// Sum of all integers from 0 through `n` inclusive.
///
/// Negative `n` yields 0; the ascending range is empty.
#[must_use]
pub fn triangular_sum(n: i64) -> i64 {
    (0..=n).sum()
}

/// Factorial of `floor(n)` as an arbitrary-precision integer.
///
/// The counter is an integer compared against the float bound, so a
/// fractional `n` behaves as its floor. For `n` at or below zero (and for
/// NaN) the loop never runs and the result is 1.
#[must_use]
pub fn factorial(n: f64) -> BigInt {
    let mut total = BigInt::one();
    let mut i = 1_i64;

    while (i as f64) <= n {
        total *= i;
        i += 1;
    }

    total
}

/// Product of every positive odd integer strictly less than `n`, as an
/// arbitrary-precision integer.
///
/// For `n <= 1` no odd integer satisfies the bound and the result is 1.
#[must_use]
pub fn odds_product(n: f64) -> BigInt {
    let mut result = BigInt::one();
    let mut i = 1_i64;

    while (i as f64) < n {
        result *= i;
        i += 2;
    }

    result
}

/// Ratio of `numerator` to `denominator`, clamped to `[0.0, 1.0]`.
///
/// Ratios at or above one collapse to 1.0 and ratios at or below zero
/// collapse to 0.0, which also folds the infinities produced by a zero
/// denominator onto the bounds. A NaN ratio (`0.0 / 0.0`) fails both
/// comparisons and is returned as-is.
#[must_use]
pub const fn percentage(numerator: f64, denominator: f64) -> f64 {
    let ratio = numerator / denominator;

    if ratio >= 1.0 {
        1.0
    } else if ratio <= 0.0 {
        0.0
    } else {
        ratio
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::{
        factorial, first_n_primes, odds_product, percentage, primes_less_than, triangular_sum,
    };

    fn is_prime(x: u64) -> bool {
        x >= 2 && (2..x).take_while(|d| d * d <= x).all(|d| x % d != 0)
    }

    #[test]
    fn primes_less_than_returns_all_primes_below_the_bound() {
        assert_eq!(
            primes_less_than(30),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn primes_less_than_excludes_the_bound_itself() {
        assert_eq!(primes_less_than(11), vec![2, 3, 5, 7]);
        assert_eq!(primes_less_than(12), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn primes_less_than_small_bounds_are_empty() {
        assert!(primes_less_than(0).is_empty());
        assert!(primes_less_than(1).is_empty());
        assert!(primes_less_than(2).is_empty());
        assert_eq!(primes_less_than(3), vec![2]);
    }

    #[test]
    fn first_n_primes_returns_the_expected_sequence() {
        assert_eq!(first_n_primes(5), vec![2, 3, 5, 7, 11]);
        assert_eq!(first_n_primes(1), vec![2]);
    }

    #[test]
    fn first_n_primes_zero_returns_empty() {
        assert!(first_n_primes(0).is_empty());
    }

    #[test]
    fn triangular_sum_sums_zero_through_n() {
        assert_eq!(triangular_sum(5), 15);
        assert_eq!(triangular_sum(1), 1);
        assert_eq!(triangular_sum(100), 5050);
    }

    #[test]
    fn triangular_sum_of_zero_and_negatives_is_zero() {
        assert_eq!(triangular_sum(0), 0);
        assert_eq!(triangular_sum(-3), 0);
    }

    #[test]
    fn factorial_multiplies_up_to_the_bound() {
        assert_eq!(factorial(5.0), BigInt::from(120));
        assert_eq!(factorial(1.0), BigInt::from(1));
        assert_eq!(factorial(10.0), BigInt::from(3_628_800));
    }

    #[test]
    fn factorial_of_non_positive_input_is_one() {
        assert_eq!(factorial(0.0), BigInt::from(1));
        assert_eq!(factorial(-2.0), BigInt::from(1));
        assert_eq!(factorial(f64::NAN), BigInt::from(1));
    }

    #[test]
    fn factorial_floors_fractional_input() {
        assert_eq!(factorial(4.7), BigInt::from(24));
        assert_eq!(factorial(4.7), factorial(4.0));
    }

    #[test]
    fn factorial_exceeds_the_native_integer_range() {
        assert_eq!(
            factorial(25.0),
            "15511210043330985984000000".parse::<BigInt>().unwrap()
        );
    }

    #[test]
    fn odds_product_multiplies_odd_integers_below_the_bound() {
        assert_eq!(odds_product(6.0), BigInt::from(15));
        assert_eq!(odds_product(7.0), BigInt::from(15));
        assert_eq!(odds_product(8.0), BigInt::from(105));
    }

    #[test]
    fn odds_product_at_or_below_one_is_one() {
        assert_eq!(odds_product(1.0), BigInt::from(1));
        assert_eq!(odds_product(0.0), BigInt::from(1));
        assert_eq!(odds_product(-5.0), BigInt::from(1));
    }

    #[test]
    fn percentage_returns_the_ratio_between_the_bounds() {
        assert!((percentage(5.0, 10.0) - 0.5).abs() < f64::EPSILON);
        assert!((percentage(1.0, 3.0) - (1.0 / 3.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_clamps_to_the_bounds() {
        assert!((percentage(10.0, 5.0) - 1.0).abs() < f64::EPSILON);
        assert!(percentage(-1.0, 5.0).abs() < f64::EPSILON);
        assert!((percentage(5.0, 5.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_folds_infinite_ratios_onto_the_bounds() {
        assert!((percentage(1.0, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!(percentage(-1.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_of_zero_over_zero_is_nan() {
        assert!(percentage(0.0, 0.0).is_nan());
    }

    proptest! {
        #[test_log::test]
        fn primes_less_than_yields_every_prime_below_the_bound(n in 0_u64..1000) {
            let primes = primes_less_than(n);

            prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(primes.iter().all(|&p| p < n && is_prime(p)));
            prop_assert!((2..n).filter(|&x| is_prime(x)).eq(primes.iter().copied()));
        }

        #[test_log::test]
        fn first_n_primes_yields_exactly_n_ascending_primes(n in 0_usize..200) {
            let primes = first_n_primes(n);

            prop_assert_eq!(primes.len(), n);
            prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(primes.iter().all(|&p| is_prime(p)));
        }

        #[test_log::test]
        fn percentage_is_clamped_or_nan(
            numerator in -1e9_f64..1e9,
            denominator in -1e9_f64..1e9,
        ) {
            let ratio = percentage(numerator, denominator);

            prop_assert!(ratio.is_nan() || (0.0..=1.0).contains(&ratio));
        }
    }
}
