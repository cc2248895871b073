use crate::deals::deals_model::{Deal, DealRequest, NewDeal};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for deal repository operations
#[async_trait]
pub trait DealRepositoryTrait: Send + Sync {
    fn exists_by_unique_id(&self, unique_id: &str) -> Result<bool>;
    async fn save(&self, new_deal: NewDeal) -> Result<Deal>;
    fn find_by_unique_id(&self, unique_id: &str) -> Result<Option<Deal>>;
    fn count_deals(&self) -> Result<i64>;
}

/// Trait for deal service operations
#[async_trait]
pub trait DealServiceTrait: Send + Sync {
    /// Validates `request` against the business rules and persists it.
    ///
    /// Rules are checked in order and the first failure is returned:
    /// unique id, amount, source currency, target currency.
    async fn submit_request(&self, request: DealRequest) -> Result<Deal>;
}
