use clap::Parser;
use loan_desk::config::Command;
use loan_desk::core::loan_order::STUDENT_PROMOTION;
use loan_desk::utils::error::{ErrorSeverity, LendingError};
use loan_desk::utils::{logger, validation::Validate};
use loan_desk::{
    AgeVerification, CliConfig, InMemoryPromotionStatistics, LendingConfig, LoanOrderService,
    Verification,
};

fn main() {
    let config = CliConfig::parse();

    let settings = match config.config.as_deref().map(LendingConfig::from_file).transpose() {
        Ok(settings) => settings.unwrap_or_default(),
        Err(e) => fail(&e),
    };

    if config.json_logs || settings.json_logs() {
        logger::init_json_logger(config.verbose, settings.log_level());
    } else {
        logger::init_cli_logger(config.verbose, settings.log_level());
    }

    tracing::info!("Starting loan-desk CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate().and_then(|_| settings.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        fail(&e);
    }

    if let Err(e) = run(&config, &settings) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        fail(&e);
    }
}

fn run(config: &CliConfig, settings: &LendingConfig) -> loan_desk::Result<()> {
    match &config.command {
        Command::VerifyAge { birth_date } => {
            let birth_date = loan_desk::config::cli::parse_birth_date(birth_date)?;
            let person = loan_desk::Person::new(
                "",
                "",
                Some(birth_date),
                loan_desk::Gender::Female,
                "",
            );
            let passes = AgeVerification::new().passes(&person)?;
            println!("{}", serde_json::json!({ "birth_date": birth_date, "passes": passes }));
        }
        Command::OrderStudentLoan(args) => {
            let customer = args.to_customer()?;
            settings.require_promotion(STUDENT_PROMOTION)?;
            let statistics = InMemoryPromotionStatistics::new();
            let service = LoanOrderService::new(&statistics, settings.promotion_catalog()?);
            let order = service.student_loan_order(&customer)?;
            println!("{}", serde_json::to_string_pretty(&order)?);
        }
    }
    Ok(())
}

fn fail(e: &LendingError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 3,
        ErrorSeverity::Critical => 4,
    };
    std::process::exit(exit_code);
}
