use fxdeals_core::deals::{Deal, DealRepositoryTrait, NewDeal};
use fxdeals_core::Result;

use super::model::{DealDB, NewDealDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::deals;
use crate::schema::deals::dsl::*;
use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct DealRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DealRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DealRepository { pool, writer }
    }
}

#[async_trait]
impl DealRepositoryTrait for DealRepository {
    fn exists_by_unique_id(&self, deal_unique_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let found = diesel::select(exists(deals.filter(unique_id.eq(deal_unique_id))))
            .get_result::<bool>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(found)
    }

    async fn save(&self, new_deal: NewDeal) -> Result<Deal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Deal> {
                let new_deal_db = NewDealDB::from(new_deal);

                let result_db = diesel::insert_into(deals::table)
                    .values(&new_deal_db)
                    .returning(DealDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Deal::try_from(result_db)?)
            })
            .await
    }

    fn find_by_unique_id(&self, deal_unique_id: &str) -> Result<Option<Deal>> {
        let mut conn = get_connection(&self.pool)?;
        let deal_db = deals
            .filter(unique_id.eq(deal_unique_id))
            .select(DealDB::as_select())
            .first::<DealDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(deal_db.map(Deal::try_from).transpose()?)
    }

    fn count_deals(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total = deals
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(total)
    }
}
