/// Rejection message for a unique id that is already persisted
pub const NON_UNIQUE_ID: &str = "Deal ID Must Be Unique";

/// Rejection message for a non-positive deal amount
pub const INVALID_DEAL_AMOUNT: &str = "Invalid Deal Amount";

/// Rejection message for an unknown source currency
pub const INVALID_FROM_CURRENCY_CODE: &str = "Invalid Currency Code";

/// Rejection message for an unknown target currency
pub const INVALID_TO_CURRENCY_CODE: &str = "Invalid Currency Code";

/// Maximum length of a deal's unique id
pub const UNIQUE_ID_MAX_LENGTH: u64 = 63;

/// Maximum length of a currency code field
pub const CURRENCY_CODE_MAX_LENGTH: u64 = 3;
