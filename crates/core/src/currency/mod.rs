//! Currency module - ISO 4217 code lookups.

mod currency_traits;
mod currency_validator;

pub use currency_traits::CurrencyValidatorTrait;
pub use currency_validator::{is_valid_currency_code, IsoCurrencyValidator};
