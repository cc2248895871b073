//! SQLite storage implementation for deals.

mod model;
mod repository;

pub use model::{DealDB, NewDealDB};
pub use repository::DealRepository;
