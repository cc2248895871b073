use crate::currency::CurrencyValidatorTrait;
use crate::deals::deals_errors::DealError;
use crate::deals::deals_model::{Deal, DealRequest, NewDeal};
use crate::deals::deals_traits::{DealRepositoryTrait, DealServiceTrait};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use log::{info, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct DealService {
    repository: Arc<dyn DealRepositoryTrait>,
    currency_validator: Arc<dyn CurrencyValidatorTrait>,
}

impl DealService {
    pub fn new(
        repository: Arc<dyn DealRepositoryTrait>,
        currency_validator: Arc<dyn CurrencyValidatorTrait>,
    ) -> Self {
        DealService {
            repository,
            currency_validator,
        }
    }

    fn validate_request(&self, request: &DealRequest) -> Result<()> {
        if self.repository.exists_by_unique_id(&request.unique_id)? {
            return Err(DealError::DuplicateUniqueId(request.unique_id.clone()).into());
        }

        if request.amount <= Decimal::ZERO {
            return Err(DealError::InvalidAmount(request.amount).into());
        }

        if !self
            .currency_validator
            .is_valid_currency_code(&request.from_currency)
        {
            return Err(DealError::InvalidFromCurrency(request.from_currency.clone()).into());
        }

        if !self
            .currency_validator
            .is_valid_currency_code(&request.to_currency)
        {
            return Err(DealError::InvalidToCurrency(request.to_currency.clone()).into());
        }

        Ok(())
    }
}

#[async_trait]
impl DealServiceTrait for DealService {
    async fn submit_request(&self, request: DealRequest) -> Result<Deal> {
        if let Err(e) = self.validate_request(&request) {
            if let Error::Deal(deal_error) = &e {
                warn!(
                    "Rejected deal '{}': {} ({:?})",
                    request.unique_id, deal_error, deal_error
                );
            }
            return Err(e);
        }

        let unique_id = request.unique_id.clone();
        match self.repository.save(NewDeal::from(request)).await {
            Ok(deal) => {
                info!("fx deal saved: id={} unique_id={}", deal.id, deal.unique_id);
                Ok(deal)
            }
            // Another submission with the same id committed between the
            // existence check and the insert.
            Err(e) if e.is_unique_violation() => {
                warn!("Rejected deal '{}' on insert: {}", unique_id, e);
                Err(DealError::DuplicateUniqueId(unique_id).into())
            }
            Err(e) => Err(e),
        }
    }
}
