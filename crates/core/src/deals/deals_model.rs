//! Deals domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a persisted deal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: i64,
    pub unique_id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_amount: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A submitted deal whose shape has already been checked.
///
/// Business rules (uniqueness, amount, currency codes) are applied by the
/// deal service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DealRequest {
    pub unique_id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub amount: Decimal,
}

/// Input model for inserting a new deal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal {
    pub unique_id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub deal_amount: Decimal,
}

impl From<DealRequest> for NewDeal {
    fn from(request: DealRequest) -> Self {
        Self {
            unique_id: request.unique_id,
            from_currency: request.from_currency,
            to_currency: request.to_currency,
            deal_amount: request.amount,
        }
    }
}
