use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    /// `None` when the birth date is unknown.
    pub birth_date: Option<NaiveDate>,
    pub gender: Gender,
    pub national_id_number: String,
    #[serde(default)]
    student: bool,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: Option<NaiveDate>,
        gender: Gender,
        national_id_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            gender,
            national_id_number: national_id_number.into(),
            student: false,
        }
    }

    /// Marks the person as a student.
    pub fn student(&mut self) {
        self.student = true;
    }

    pub fn into_student(mut self) -> Self {
        self.student();
        self
    }

    pub fn is_student(&self) -> bool {
        self.student
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub person: Person,
}

impl Customer {
    pub fn new(id: CustomerId, person: Person) -> Self {
        Self { id, person }
    }

    pub fn is_student(&self) -> bool {
        self.person.is_student()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    Student,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub name: String,
    pub discount: BigDecimal,
}

impl Promotion {
    pub fn new(name: impl Into<String>, discount: BigDecimal) -> Self {
        Self {
            name: name.into(),
            discount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOrder {
    pub loan_type: LoanType,
    pub order_date: NaiveDate,
    pub commission: BigDecimal,
    pub promotions: Vec<Promotion>,
    pub customer_id: CustomerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> Person {
        Person::new(
            "Jan",
            "Kowalski",
            NaiveDate::from_ymd_opt(1996, 8, 28),
            Gender::Male,
            "96082812079",
        )
    }

    #[test]
    fn test_person_is_not_a_student_by_default() {
        assert!(!jan().is_student());
    }

    #[test]
    fn test_student_flag_reaches_customer() {
        let mut person = jan();
        person.student();
        let customer = Customer::new(CustomerId::new(), person);
        assert!(customer.is_student());
        assert!(Customer::new(CustomerId::new(), jan().into_student()).is_student());
    }

    #[test]
    fn test_customer_ids_are_unique() {
        assert_ne!(CustomerId::new(), CustomerId::new());
    }

    #[test]
    fn test_loan_order_serializes_to_json() {
        let order = LoanOrder {
            loan_type: LoanType::Student,
            order_date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            commission: BigDecimal::from(200),
            promotions: vec![Promotion::new("Student Promo", BigDecimal::from(10))],
            customer_id: CustomerId::new(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["loan_type"], "student");
        assert_eq!(json["order_date"], "2026-10-18");
        assert_eq!(json["promotions"][0]["name"], "Student Promo");
    }
}
