pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LendingConfig;

pub use adapters::{FixedClock, InMemoryPromotionCatalog, InMemoryPromotionStatistics, SystemClock};
pub use core::age_verification::AgeVerification;
pub use core::loan_order::LoanOrderService;
pub use domain::model::{Customer, CustomerId, Gender, LoanOrder, LoanType, Person, Promotion};
pub use domain::ports::{Clock, DocumentStoreAccessor, RelationalStoreAccessor, Verification};
pub use utils::error::{LendingError, Result};
