#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![forbid(unsafe_code)]

//! Helpers for pulling numbers out of free text and measuring the printed
//! width of integers: [`extract_numbers`] collects every numeric substring
//! of a string as an `f64`, in order of appearance, and [`integer_length`]
//! counts the decimal digits of an integer.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("Invalid Regex"));

/// Counts the decimal digits used to represent `i` in base 10.
///
/// The count comes from dividing by 10 until the value reaches zero, so
/// `integer_length(0)` is 0, not 1. Negative integers count the same as
/// their absolute value; truncating division shrinks the magnitude toward
/// zero regardless of sign.
#[must_use]
pub const fn integer_length(mut i: i64) -> u32 {
    let mut count = 0;

    while i != 0 {
        i /= 10;
        count += 1;
    }

    count
}

/// Extracts every numeric substring of `s` as an `f64`, in order of
/// appearance.
///
/// A numeric substring is one or more digits, optionally followed by a
/// decimal point and more digits. Matches are non-overlapping and greedy,
/// and duplicate values are kept. A match that fails to parse is logged
/// and dropped from the result.
#[must_use]
pub fn extract_numbers(s: &str) -> Vec<f64> {
    NUMBER_PATTERN
        .find_iter(s)
        .filter_map(|m| {
            let text = m.as_str();

            if !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
                return None;
            }

            text.parse::<f64>()
                .inspect_err(|e| {
                    log::error!("Error parsing number {text}: {e:?}");
                })
                .ok()
        })
        .collect()
}
