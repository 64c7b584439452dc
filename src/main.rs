use clap::Parser;
use noc3::utils::{logger, validation::Validate};
use noc3::{LedgerArgs, LedgerSession, TerminalConsole};

fn main() {
    let args = LedgerArgs::parse();

    let (config, logging) = match args.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };
    logger::init_logger(logging.verbose, logging.json);

    tracing::info!("Starting chip-ledger");
    tracing::debug!("Game config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("FEL: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let mut session = LedgerSession::new(TerminalConsole::stdio(), config);
    if let Err(e) = session.run() {
        tracing::error!(
            "❌ Game aborted: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("FEL: {}", e.user_friendly_message());
        std::process::exit(e.exit_code().max(1));
    }
}
