use clap::Parser;
use std::sync::Arc;
use student_intake::domain::ports::SharedClock;
use student_intake::utils::error::ErrorSeverity;
use student_intake::utils::{logger, validation::Validate};
use student_intake::{
    AppConfig, CliConfig, ConsoleReader, FixedClock, InputReader, IntakeError, IntakeSession,
    ScriptedReader, SystemClock,
};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.validate().and_then(|_| cli.resolve()) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, "warn");
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(cli.verbose, &config.logging.level);
    tracing::info!("Starting student-intake");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Resolved config: {:?}", config);
    }

    let clock: SharedClock = match config.today()? {
        Some(today) => {
            tracing::info!("📅 Today pinned to {}", today);
            Arc::new(FixedClock(today))
        }
        None => Arc::new(SystemClock),
    };

    let outcome = match &cli.script {
        Some(path) => ScriptedReader::from_file(path)
            .and_then(|reader| run_session(reader.with_echo(true), clock, &config)),
        None => run_session(ConsoleReader::stdio(), clock, &config),
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Intake failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        // Validation failures are settled inside run_session.
        let exit_code = match e.severity() {
            ErrorSeverity::Critical => 3,
            _ => 1,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

/// Validation failures are shown to the user and still end with the normal
/// pause; anything else propagates.
fn run_session<R: InputReader>(
    reader: R,
    clock: SharedClock,
    config: &AppConfig,
) -> Result<(), IntakeError> {
    let mut session = IntakeSession::with_clock(reader, clock);

    match session.run() {
        Ok(report) => {
            if config.wants_json() {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Err(e) if e.is_validation() => session.report_failure(&e)?,
        Err(e) => return Err(e),
    }

    session.finish(config.session.pause_on_exit)
}
