#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::cast_precision_loss)]
#![forbid(unsafe_code)]

//! Sanitizers that replace non-representable `f64` values (NaN, ±Infinity)
//! with safe substitutes, leaving every finite value untouched.
//!
//! Two families are provided:
//!
//! * [`sanitize_nan`] / [`sanitize_infinity`] / [`sanitize`] - replace
//!   non-finite values with built-in substitutes (0.0 for NaN,
//!   representable bounds for the infinities)
//! * [`sanitize_nan_or`] / [`sanitize_infinity_or`] / [`sanitize_or`] -
//!   replace non-finite values with a caller-supplied default

/// Returns 0.0 if `value` is NaN, else `value` unchanged.
#[must_use]
pub const fn sanitize_nan(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

/// Returns `default` if `value` is NaN, else `value` unchanged.
#[must_use]
pub const fn sanitize_nan_or(value: f64, default: f64) -> f64 {
    if value.is_nan() { default } else { value }
}

/// Folds the infinities onto representable bounds.
///
/// Positive infinity maps to `f64::MAX` while negative infinity maps to
/// `i64::MIN as f64`. The two bounds are not symmetric in magnitude;
/// callers depend on these exact substitutes.
#[must_use]
pub const fn sanitize_infinity(value: f64) -> f64 {
    if value.is_infinite() {
        if value.is_sign_positive() {
            f64::MAX
        } else {
            i64::MIN as f64
        }
    } else {
        value
    }
}

/// Returns `default` if `value` is either infinity, else `value` unchanged.
#[must_use]
pub const fn sanitize_infinity_or(value: f64, default: f64) -> f64 {
    if value.is_infinite() { default } else { value }
}

/// Neutralizes both infinities and NaN.
///
/// Infinities fold onto the [`sanitize_infinity`] bounds and NaN maps to
/// 0.0. [`sanitize_infinity`] never produces NaN, so the order of the two
/// stages does not change the result.
#[must_use]
pub const fn sanitize(value: f64) -> f64 {
    sanitize_nan(sanitize_infinity(value))
}

/// Neutralizes both infinities and NaN to the same `default`.
#[must_use]
pub const fn sanitize_or(value: f64, default: f64) -> f64 {
    sanitize_nan_or(sanitize_infinity_or(value, default), default)
}
