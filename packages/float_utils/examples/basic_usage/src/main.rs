#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `numbox_float_utils`.
//!
//! This example demonstrates sanitizing NaN and the infinities, both to
//! the built-in substitutes and to caller-supplied defaults.

use numbox_float_utils::{sanitize, sanitize_infinity, sanitize_nan, sanitize_or};

fn main() {
    println!("NumBox Float Utils - Basic Usage Example\n");
    println!("========================================\n");

    // NaN maps to 0.0
    println!("1. Sanitizing NaN:");
    println!("   Input:  NaN");
    println!("   Output: {}\n", sanitize_nan(f64::NAN));

    // Positive infinity folds onto the float maximum
    println!("2. Sanitizing positive infinity:");
    println!("   Input:  +inf");
    println!("   Output: {}\n", sanitize_infinity(f64::INFINITY));

    // Negative infinity folds onto the 64-bit integer minimum
    println!("3. Sanitizing negative infinity:");
    println!("   Input:  -inf");
    println!("   Output: {}\n", sanitize_infinity(f64::NEG_INFINITY));

    // Finite values pass through untouched
    println!("4. Finite values are untouched:");
    println!("   Input:  42.5");
    println!("   Output: {}\n", sanitize(42.5));

    // Every non-finite value can share one default
    println!("5. Sanitizing to a caller default:");
    println!("   Input:  (NaN, 9.0)");
    println!("   Output: {}", sanitize_or(f64::NAN, 9.0));
    println!("   Input:  (-inf, 9.0)");
    println!("   Output: {}", sanitize_or(f64::NEG_INFINITY, 9.0));
}
