pub mod age_verification;
pub mod loan_order;

pub use crate::domain::model::{Customer, CustomerId, Gender, LoanOrder, LoanType, Person, Promotion};
pub use crate::domain::ports::{Clock, DocumentStoreAccessor, RelationalStoreAccessor, Verification};
pub use crate::utils::error::Result;
