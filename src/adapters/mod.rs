// Adapters layer: concrete implementations of the domain ports.

pub mod clock;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
pub use memory::{InMemoryPromotionCatalog, InMemoryPromotionStatistics};
