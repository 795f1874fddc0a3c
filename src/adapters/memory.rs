use crate::domain::ports::{DocumentStoreAccessor, RelationalStoreAccessor};
use crate::utils::error::{LendingError, Result};
use bigdecimal::BigDecimal;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Promotion discounts held in memory, keyed by promotion name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPromotionCatalog {
    discounts: HashMap<String, BigDecimal>,
}

impl InMemoryPromotionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_promotion(mut self, name: impl Into<String>, discount: BigDecimal) -> Self {
        self.discounts.insert(name.into(), discount);
        self
    }

    pub fn len(&self) -> usize {
        self.discounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discounts.is_empty()
    }
}

impl FromIterator<(String, BigDecimal)> for InMemoryPromotionCatalog {
    fn from_iter<I: IntoIterator<Item = (String, BigDecimal)>>(iter: I) -> Self {
        Self {
            discounts: iter.into_iter().collect(),
        }
    }
}

impl DocumentStoreAccessor for InMemoryPromotionCatalog {
    fn promotion_discount(&self, promotion_name: &str) -> Result<BigDecimal> {
        self.discounts
            .get(promotion_name)
            .cloned()
            .ok_or_else(|| LendingError::PromotionNotFound {
                name: promotion_name.to_string(),
            })
    }
}

/// Usage counters per promotion name.
#[derive(Debug, Default)]
pub struct InMemoryPromotionStatistics {
    usages: Mutex<HashMap<String, u64>>,
}

impl InMemoryPromotionStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn usage_count(&self, promotion_name: &str) -> u64 {
        let usages = self.usages.lock().unwrap_or_else(PoisonError::into_inner);
        usages.get(promotion_name).copied().unwrap_or(0)
    }
}

impl RelationalStoreAccessor for InMemoryPromotionStatistics {
    fn update_promotion_statistics(&self, promotion_name: &str) -> Result<()> {
        let mut usages = self.usages.lock().map_err(|e| LendingError::StoreError {
            store: "relational".to_string(),
            message: format!("statistics lock poisoned: {}", e),
        })?;
        *usages.entry(promotion_name.to_string()).or_insert(0) += 1;
        Ok(())
    }
}
