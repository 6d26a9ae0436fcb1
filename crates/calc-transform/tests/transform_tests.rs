//! Transformer tests.
//!
//! Covers: function renaming, power operator, π/pi/e constants, whole-token
//! matching (the letter `e` inside other identifiers and numeric literals),
//! verbatim pass-through of whitespace and unknown characters, and
//! idempotence.

use calc_transform::transform;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────
// Functions
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_function_names() {
    assert_eq!(transform("sin(0)"), "sin(0)");
    assert_eq!(transform("cos(0)"), "cos(0)");
    assert_eq!(transform("tan(0)"), "tan(0)");
    assert_eq!(transform("log(100)"), "log10(100)");
    assert_eq!(transform("ln(1)"), "ln(1)");
    assert_eq!(transform("sqrt(16)"), "sqrt(16)");
}

#[test]
fn test_canonical_function_name_untouched() {
    assert_eq!(transform("log10(1000)"), "log10(1000)");
}

#[test]
fn test_function_with_space_before_paren() {
    assert_eq!(transform("log (100)"), "log10 (100)");
}

#[test]
fn test_nested_functions() {
    assert_eq!(transform("log(sqrt(100))"), "log10(sqrt(100))");
}

// ─────────────────────────────────────────────────────────────────────
// Operators & constants
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_power_operator() {
    assert_eq!(transform("2^10"), "2**10");
    assert_eq!(transform("2^3^2"), "2**3**2");
    assert_eq!(transform("2**10"), "2**10");
}

#[test]
fn test_pi_constants() {
    assert_eq!(transform("π"), "PI");
    assert_eq!(transform("2*π"), "2*PI");
    assert_eq!(transform("pi/2"), "PI/2");
}

#[test]
fn test_euler_constant() {
    assert_eq!(transform("e"), "E");
    assert_eq!(transform("ln(e)"), "ln(E)");
    assert_eq!(transform("e^2"), "E**2");
}

// ─────────────────────────────────────────────────────────────────────
// Whole-token matching
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_e_inside_identifiers_is_kept() {
    assert_eq!(transform("exp(1)"), "exp(1)");
    assert_eq!(transform("sec(0)"), "sec(0)");
    assert_eq!(transform("tree"), "tree");
}

#[test]
fn test_e_inside_number_literal_is_kept() {
    assert_eq!(transform("1e3"), "1e3");
    assert_eq!(transform("2.5e-2+e"), "2.5e-2+E");
}

#[test]
fn test_e_after_number_without_exponent_digits() {
    assert_eq!(transform("2e"), "2E");
}

#[test]
fn test_pi_inside_identifier_is_kept() {
    assert_eq!(transform("pipe"), "pipe");
    assert_eq!(transform("spin(1)"), "spin(1)");
}

#[test]
fn test_log_prefix_of_longer_name_is_kept() {
    assert_eq!(transform("login(1)"), "login(1)");
    assert_eq!(transform("logarithm(1)"), "logarithm(1)");
}

// ─────────────────────────────────────────────────────────────────────
// Pass-through
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_whitespace_preserved() {
    assert_eq!(transform("  2 ^  e "), "  2 **  E ");
}

#[test]
fn test_unknown_characters_preserved() {
    assert_eq!(transform("2 × e"), "2 × E");
    assert_eq!(transform("5 % 2"), "5 % 2");
}

#[test]
fn test_unbalanced_input_passes_through() {
    assert_eq!(transform("sqrt(16"), "sqrt(16");
    assert_eq!(transform("))"), "))");
}

#[test]
fn test_transform_determinism_100_iterations() {
    let src = "log(π) + sqrt(e^2) - 1e3";
    let first = transform(src);
    for i in 0..100 {
        assert_eq!(first, transform(src), "Determinism failure at iteration {i}");
    }
}

// ─────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_transform_is_idempotent(src in "[0-9a-z+*/^().π× -]{0,24}") {
        let once = transform(&src);
        prop_assert_eq!(transform(&once), once);
    }

    #[test]
    fn prop_transform_is_total(src in "\\PC{0,32}") {
        let _ = transform(&src);
    }
}
