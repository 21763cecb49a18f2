#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `numbox_math`.
//!
//! This example demonstrates prime generation, triangular sums,
//! arbitrary-precision products, and the percentage clamp.

use numbox_math::{
    factorial, first_n_primes, odds_product, percentage, primes_less_than, triangular_sum,
};

fn main() {
    println!("NumBox Math Utils - Basic Usage Example\n");
    println!("=======================================\n");

    // Generate every prime below an upper bound
    println!("1. Primes below a bound:");
    println!("   Input:  30");
    println!("   Output: {:?}\n", primes_less_than(30));

    // Generate a fixed number of primes
    println!("2. First n primes:");
    println!("   Input:  5");
    println!("   Output: {:?}\n", first_n_primes(5));

    // Sum the integers from 0 through n
    println!("3. Triangular sum:");
    println!("   Input:  100");
    println!("   Output: {}\n", triangular_sum(100));

    // Factorials grow past the native integer range
    println!("4. Factorial:");
    println!("   Input:  25.0");
    println!("   Output: {}\n", factorial(25.0));

    // Fractional input behaves as its floor
    println!("5. Factorial of a fractional input:");
    println!("   Input:  4.7");
    println!("   Output: {}\n", factorial(4.7));

    // Product of the positive odd integers below the bound
    println!("6. Odds product:");
    println!("   Input:  10.0");
    println!("   Output: {}\n", odds_product(10.0));

    // Ratios are clamped to [0.0, 1.0]
    println!("7. Percentage:");
    println!("   Input:  (5.0, 10.0)");
    println!("   Output: {}\n", percentage(5.0, 10.0));
    println!("   Input:  (10.0, 5.0)");
    println!("   Output: {}\n", percentage(10.0, 5.0));
    println!("   Input:  (-1.0, 5.0)");
    println!("   Output: {}", percentage(-1.0, 5.0));
}
