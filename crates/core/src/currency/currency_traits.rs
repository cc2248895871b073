/// Membership test against the set of known currency codes.
pub trait CurrencyValidatorTrait: Send + Sync {
    fn is_valid_currency_code(&self, code: &str) -> bool;
}
