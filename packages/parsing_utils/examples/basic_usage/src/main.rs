#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `numbox_parsing_utils`.
//!
//! This example demonstrates extracting numbers from free text and
//! counting the decimal digits of integers.

use numbox_parsing_utils::{extract_numbers, integer_length};

fn main() {
    println!("NumBox Parsing Utils - Basic Usage Example\n");
    println!("==========================================\n");

    // Numeric substrings come back in order of appearance
    println!("1. Extracting numbers from text:");
    println!("   Input:  \"abc 12.5 and 7\"");
    println!("   Output: {:?}\n", extract_numbers("abc 12.5 and 7"));

    // Text without digits yields an empty list
    println!("2. Text without numbers:");
    println!("   Input:  \"no numbers here\"");
    println!("   Output: {:?}\n", extract_numbers("no numbers here"));

    // Duplicate values are kept
    println!("3. Duplicates are preserved:");
    println!("   Input:  \"3 then 3 then 2.25\"");
    println!("   Output: {:?}\n", extract_numbers("3 then 3 then 2.25"));

    // Digit counts for positive, negative, and zero inputs
    println!("4. Counting decimal digits:");
    println!("   Input:  123");
    println!("   Output: {}\n", integer_length(123));
    println!("   Input:  -123");
    println!("   Output: {}\n", integer_length(-123));
    println!("   Input:  0");
    println!("   Output: {}", integer_length(0));
}
