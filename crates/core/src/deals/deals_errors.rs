use rust_decimal::Decimal;
use thiserror::Error;

use super::deals_constants::{
    INVALID_DEAL_AMOUNT, INVALID_FROM_CURRENCY_CODE, INVALID_TO_CURRENCY_CODE, NON_UNIQUE_ID,
};

/// Business-rule failures raised while accepting a deal.
///
/// The display string of every variant is the message returned to callers;
/// the rejected value is carried for logging only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    #[error("{}", NON_UNIQUE_ID)]
    DuplicateUniqueId(String),

    #[error("{}", INVALID_DEAL_AMOUNT)]
    InvalidAmount(Decimal),

    #[error("{}", INVALID_FROM_CURRENCY_CODE)]
    InvalidFromCurrency(String),

    #[error("{}", INVALID_TO_CURRENCY_CODE)]
    InvalidToCurrency(String),
}

/// Coarse category of a [`DealError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealErrorKind {
    Duplicate,
    Validation,
}

impl DealError {
    pub fn kind(&self) -> DealErrorKind {
        match self {
            DealError::DuplicateUniqueId(_) => DealErrorKind::Duplicate,
            DealError::InvalidAmount(_)
            | DealError::InvalidFromCurrency(_)
            | DealError::InvalidToCurrency(_) => DealErrorKind::Validation,
        }
    }
}
