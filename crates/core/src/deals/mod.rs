//! Deals module - domain models, services, and traits.

mod deals_constants;
mod deals_errors;
mod deals_model;
mod deals_service;
mod deals_traits;


pub use deals_constants::*;
pub use deals_errors::{DealError, DealErrorKind};
pub use deals_model::{Deal, DealRequest, NewDeal};
pub use deals_service::DealService;
pub use deals_traits::{DealRepositoryTrait, DealServiceTrait};
