use crate::domain::model::{Customer, CustomerId, Gender, Person};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "loan-desk")]
#[command(about = "Age verification and student loan ordering")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check whether a person born on the given date passes age verification
    VerifyAge {
        #[arg(long, help = "Birth date as YYYY-MM-DD")]
        birth_date: String,
    },
    /// Order a student loan for a customer.
    ///
    /// Needs --config pointing at a file with a "Student Promo" entry under [[promotions]].
    OrderStudentLoan(CustomerArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CustomerArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long, help = "Birth date as YYYY-MM-DD")]
    pub birth_date: Option<String>,

    #[arg(long, value_enum, default_value = "female")]
    pub gender: GenderArg,

    #[arg(long, default_value = "")]
    pub national_id: String,

    #[arg(long, help = "The customer is a student")]
    pub student: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(value: GenderArg) -> Self {
        match value {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

pub fn parse_birth_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")?)
}

impl CustomerArgs {
    pub fn to_customer(&self) -> Result<Customer> {
        let birth_date = self.birth_date.as_deref().map(parse_birth_date).transpose()?;
        let mut person = Person::new(
            self.first_name.clone(),
            self.last_name.clone(),
            birth_date,
            self.gender.into(),
            self.national_id.clone(),
        );
        if self.student {
            person.student();
        }
        Ok(Customer::new(CustomerId::new(), person))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_non_empty_string("config", path)?;
        }

        match &self.command {
            Command::VerifyAge { birth_date } => {
                parse_birth_date(birth_date)?;
            }
            Command::OrderStudentLoan(args) => {
                validation::validate_required_field("config", &self.config)?;
                validation::validate_non_empty_string("first_name", &args.first_name)?;
                validation::validate_non_empty_string("last_name", &args.last_name)?;
                if let Some(birth_date) = &args.birth_date {
                    parse_birth_date(birth_date)?;
                }
            }
        }
        Ok(())
    }
}
