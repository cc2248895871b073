//! Database models for deals.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use fxdeals_core::deals::{Deal, NewDeal};

/// Database model for deals
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::deals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DealDB {
    pub id: i64,
    pub unique_id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub amount: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for inserting a new deal; `id` is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::deals)]
pub struct NewDealDB {
    pub unique_id: String,
    pub from_currency: String,
    pub to_currency: String,
    pub amount: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Amounts are stored as their exact decimal text so nothing is lost to floats.
impl TryFrom<DealDB> for Deal {
    type Error = StorageError;

    fn try_from(db: DealDB) -> Result<Self, Self::Error> {
        let deal_amount = Decimal::from_str(&db.amount).map_err(|e| {
            log::error!(
                "Failed to parse amount '{}' of deal {} as Decimal: {}",
                db.amount,
                db.unique_id,
                e
            );
            StorageError::InvalidData(format!("amount '{}' of deal {}", db.amount, db.unique_id))
        })?;

        Ok(Self {
            id: db.id,
            unique_id: db.unique_id,
            from_currency: db.from_currency,
            to_currency: db.to_currency,
            deal_amount,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewDeal> for NewDealDB {
    fn from(domain: NewDeal) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            unique_id: domain.unique_id,
            from_currency: domain.from_currency,
            to_currency: domain.to_currency,
            amount: domain.deal_amount.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn deal_db(amount: &str) -> DealDB {
        let now = chrono::Utc::now().naive_utc();
        DealDB {
            id: 7,
            unique_id: "deal-7".to_string(),
            from_currency: "USD".to_string(),
            to_currency: "EUR".to_string(),
            amount: amount.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_new_deal_stamps_both_timestamps() {
        let db: NewDealDB = NewDeal {
            unique_id: "deal-1".to_string(),
            from_currency: "USD".to_string(),
            to_currency: "EUR".to_string(),
            deal_amount: dec!(1000.50),
        }
        .into();

        assert_eq!(db.amount, "1000.50");
        assert_eq!(db.created_at, db.updated_at);
    }

    #[test]
    fn test_stored_amount_parses_exactly() {
        let deal = Deal::try_from(deal_db("0.1000000000000000000000001")).unwrap();
        assert_eq!(deal.deal_amount, dec!(0.1000000000000000000000001));
        assert_eq!(deal.id, 7);
    }

    #[test]
    fn test_corrupt_amount_is_an_error() {
        assert!(matches!(
            Deal::try_from(deal_db("not-a-number")),
            Err(StorageError::InvalidData(_))
        ));
    }
}
