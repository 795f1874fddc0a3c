use crate::domain::model::Person;
use crate::utils::error::Result;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;

/// Read side of the promotion catalog, kept in the document store.
pub trait DocumentStoreAccessor: Send + Sync {
    fn promotion_discount(&self, promotion_name: &str) -> Result<BigDecimal>;
}

/// Write side of the promotion usage statistics, kept in the relational store.
pub trait RelationalStoreAccessor: Send + Sync {
    fn update_promotion_statistics(&self, promotion_name: &str) -> Result<()>;
}

pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait Verification {
    fn passes(&self, person: &Person) -> Result<bool>;

    /// An absent person never passes.
    fn passes_if_present(&self, person: Option<&Person>) -> Result<bool> {
        match person {
            Some(person) => self.passes(person),
            None => Ok(false),
        }
    }
}

impl<T: DocumentStoreAccessor + ?Sized> DocumentStoreAccessor for &T {
    fn promotion_discount(&self, promotion_name: &str) -> Result<BigDecimal> {
        (**self).promotion_discount(promotion_name)
    }
}

impl<T: RelationalStoreAccessor + ?Sized> RelationalStoreAccessor for &T {
    fn update_promotion_statistics(&self, promotion_name: &str) -> Result<()> {
        (**self).update_promotion_statistics(promotion_name)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
