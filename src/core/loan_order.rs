use crate::adapters::clock::SystemClock;
use crate::domain::model::{Customer, LoanOrder, LoanType, Promotion};
use crate::domain::ports::{Clock, DocumentStoreAccessor, RelationalStoreAccessor};
use crate::utils::error::{LendingError, Result};
use bigdecimal::BigDecimal;

pub const STUDENT_PROMOTION: &str = "Student Promo";
pub const STUDENT_LOAN_COMMISSION: u32 = 200;

pub struct LoanOrderService<R, D, C = SystemClock>
where
    R: RelationalStoreAccessor,
    D: DocumentStoreAccessor,
    C: Clock,
{
    relational: R,
    document: D,
    clock: C,
}

impl<R, D> LoanOrderService<R, D, SystemClock>
where
    R: RelationalStoreAccessor,
    D: DocumentStoreAccessor,
{
    pub fn new(relational: R, document: D) -> Self {
        Self::with_clock(relational, document, SystemClock)
    }
}

impl<R, D, C> LoanOrderService<R, D, C>
where
    R: RelationalStoreAccessor,
    D: DocumentStoreAccessor,
    C: Clock,
{
    pub fn with_clock(relational: R, document: D, clock: C) -> Self {
        Self {
            relational,
            document,
            clock,
        }
    }

    /// Orders a student loan carrying the student promotion.
    ///
    /// Non-students are rejected before either store is contacted. The
    /// discount is read first and usage is recorded only once it is known.
    pub fn student_loan_order(&self, customer: &Customer) -> Result<LoanOrder> {
        if !customer.is_student() {
            tracing::warn!("Customer {} is not a student, refusing student loan", customer.id);
            return Err(LendingError::NotAStudent);
        }

        tracing::debug!("Fetching discount for promotion '{}'", STUDENT_PROMOTION);
        let discount = self.document.promotion_discount(STUDENT_PROMOTION)?;

        tracing::debug!("Recording usage of promotion '{}'", STUDENT_PROMOTION);
        self.relational.update_promotion_statistics(STUDENT_PROMOTION)?;

        let order = LoanOrder {
            loan_type: LoanType::Student,
            order_date: self.clock.today(),
            commission: BigDecimal::from(STUDENT_LOAN_COMMISSION),
            promotions: vec![Promotion::new(STUDENT_PROMOTION, discount)],
            customer_id: customer.id,
        };

        tracing::info!(
            "Student loan ordered for customer {} on {} (discount {})",
            customer.id,
            order.order_date,
            order.promotions[0].discount
        );
        Ok(order)
    }
}
