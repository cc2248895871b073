use iso_currency::{Currency, IntoEnumIterator};
use std::collections::HashSet;
use std::sync::OnceLock;

use super::currency_traits::CurrencyValidatorTrait;

static CURRENCY_CODES: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_codes() -> &'static HashSet<&'static str> {
    CURRENCY_CODES.get_or_init(|| {
        let codes: HashSet<&'static str> =
            Currency::iter().map(|currency| currency.code()).collect();
        log::debug!("Loaded {} ISO 4217 currency codes", codes.len());
        codes
    })
}

/// Returns true when `code` is a known ISO 4217 alphabetic code.
///
/// The lookup is an exact match: `"usd"` and `" USD"` are rejected.
pub fn is_valid_currency_code(code: &str) -> bool {
    get_codes().contains(code)
}

/// Validator backed by the process-wide ISO 4217 table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCurrencyValidator;

impl IsoCurrencyValidator {
    pub fn new() -> Self {
        // Build the table up front so the first request doesn't pay for it.
        get_codes();
        Self
    }
}

impl CurrencyValidatorTrait for IsoCurrencyValidator {
    fn is_valid_currency_code(&self, code: &str) -> bool {
        is_valid_currency_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_currencies_are_valid() {
        let validator = IsoCurrencyValidator::new();
        for code in ["USD", "EUR", "GBP", "JPY", "NGN", "JOD", "CHF"] {
            assert!(validator.is_valid_currency_code(code), "{} should be valid", code);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(is_valid_currency_code("USD"));
        assert!(!is_valid_currency_code("usd"));
        assert!(!is_valid_currency_code("Usd"));
    }

    #[test]
    fn test_no_normalization_is_applied() {
        assert!(!is_valid_currency_code(" USD"));
        assert!(!is_valid_currency_code("USD "));
        assert!(!is_valid_currency_code(""));
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        for code in ["ABC", "XYZ1", "US", "USDD", "GBp"] {
            assert!(!is_valid_currency_code(code), "{} should be invalid", code);
        }
    }

    #[test]
    fn test_table_is_populated_once() {
        assert!(std::ptr::eq(get_codes(), get_codes()));
        assert!(get_codes().len() > 150);
    }
}
