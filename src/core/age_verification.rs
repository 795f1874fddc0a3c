use crate::adapters::clock::SystemClock;
use crate::domain::model::Person;
use crate::domain::ports::{Clock, Verification};
use crate::utils::error::{LendingError, Result};
use chrono::{Datelike, NaiveDate};

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 99;

/// Passes people aged between [`MIN_AGE`] and [`MAX_AGE`] years, both inclusive.
pub struct AgeVerification<C: Clock = SystemClock> {
    clock: C,
}

impl AgeVerification<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for AgeVerification<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AgeVerification<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Whole years lived as of today, negative for birth dates in the future.
    pub fn age_of(&self, person: &Person) -> Option<i32> {
        person
            .birth_date
            .map(|birth_date| years_between(birth_date, self.clock.today()))
    }
}

impl<C: Clock> Verification for AgeVerification<C> {
    fn passes(&self, person: &Person) -> Result<bool> {
        let Some(age) = self.age_of(person) else {
            tracing::debug!(
                "No birth date for {} {}, verification fails",
                person.first_name,
                person.last_name
            );
            return Ok(false);
        };

        if age < 0 {
            tracing::warn!("Rejecting verification, computed age {} is negative", age);
            return Err(LendingError::NegativeAge);
        }

        let passes = (MIN_AGE..=MAX_AGE).contains(&age);
        tracing::debug!("Age {} verification result: {}", age, passes);
        Ok(passes)
    }
}

fn years_between(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years - 1
    } else {
        years
    }
}
