//! Shared wire-primitive format checks
//!
//! CAP payloads carry money as decimal strings (never floating point),
//! timestamps as ISO 8601 strings, and namespaced identifiers as URNs.
//! These helpers implement the format invariants referenced by field specs.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use std::sync::OnceLock;

fn decimal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap())
}

fn urn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^urn:[a-zA-Z0-9.-]+:.+$").unwrap())
}

fn language_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z]{2,8}(-[a-zA-Z0-9]{1,8})*$").unwrap())
}

/// True when `s` is a non-negative decimal amount string
pub fn is_decimal_string(s: &str) -> bool {
    decimal_re().is_match(s)
}

/// Fractional digits of a decimal amount string, `None` when it is not one
pub fn decimal_fraction_digits(s: &str) -> Option<usize> {
    if !is_decimal_string(s) {
        return None;
    }
    Some(s.split_once('.').map_or(0, |(_, frac)| frac.len()))
}

/// True when `s` has the shape of an ISO 4217 code (three uppercase letters)
pub fn is_currency_code(s: &str) -> bool {
    s.len() == 3 && s.chars().all(|c| c.is_ascii_uppercase())
}

/// ISO 4217 minor units for a currency code, `None` for malformed codes.
///
/// Codes with the right shape but outside the tables get the common
/// two-digit default; merchants trade in currencies faster than this
/// library releases.
pub fn currency_minor_units(code: &str) -> Option<u32> {
    if !is_currency_code(code) {
        return None;
    }
    const ZERO_DECIMAL: &[&str] = &[
        "BIF", "CLP", "DJF", "GNF", "ISK", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "VND", "VUV",
        "XAF", "XOF", "XPF",
    ];
    const THREE_DECIMAL: &[&str] = &["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];
    if ZERO_DECIMAL.contains(&code) {
        Some(0)
    } else if THREE_DECIMAL.contains(&code) {
        Some(3)
    } else {
        Some(2)
    }
}

/// True when `s` parses as an ISO 8601 timestamp (RFC 3339) or a plain date
pub fn is_timestamp(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
        || chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// True when `s` is a CAP URN (`urn:<namespace>:<value>`)
pub fn is_urn(s: &str) -> bool {
    urn_re().is_match(s)
}

/// True when `s` has the shape of a BCP 47 language tag
pub fn is_language_tag(s: &str) -> bool {
    language_tag_re().is_match(s)
}

/// True when `s` is an ISO 3166-1 alpha-2 country code shape
pub fn is_country_code(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase())
}

/// True when `s` carries an explicit URL scheme
pub fn is_url(s: &str) -> bool {
    match s.find("://") {
        Some(pos) if pos > 0 => s[..pos].chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'),
        _ => false,
    }
}
