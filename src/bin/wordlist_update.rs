use anyhow::Context;
use clap::Parser;
use noc3::adapters::storage::split_file_path;
use noc3::core::AnalysisReport;
use noc3::utils::{logger, validation::Validate};
use noc3::{
    AnalysisEngine, HttpTextSource, LocalStorage, WordlistArgs, WordlistConfig, WordlistPipeline,
};
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = WordlistArgs::parse();

    let (config, logging) = match args.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };
    logger::init_logger(logging.verbose, logging.json);

    tracing::info!("🚀 Starting wordlist-update");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("FEL: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be fetched or written");
        print_dry_run(&config)?;
        return Ok(());
    }

    let (directory, file_name) = split_file_path(&config.wordlist_path);
    let storage = LocalStorage::new(directory.clone());
    let source = HttpTextSource::new(config.source_url.clone());
    let pipeline = WordlistPipeline::new(storage, source, file_name);

    let mut engine =
        AnalysisEngine::new_with_monitoring(pipeline, args.monitor).with_passes(config.passes);

    match engine.run().await {
        Ok(report) => print_report(&report, &directory),
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("FEL: {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn print_dry_run(config: &WordlistConfig) -> anyhow::Result<()> {
    let rendered = toml::to_string_pretty(config).context("rendering configuration")?;
    println!("{}", rendered);
    Ok(())
}

fn print_report(report: &AnalysisReport, directory: &Path) {
    println!("- Boken innehöll {} ord", report.book_words);
    println!("- Boken innehöll {} olika ord", report.book_distinct_words);
    println!("- Ordlistan innehöll {} olika ord", report.wordlist_words);

    for pass in &report.passes {
        println!("Analyserar boken med ordlistan");
        println!("- Analysen tog: {:.3} sek.", pass.elapsed.as_secs_f64());
        println!("- Antalet nya ord: {}", pass.added);
        match &pass.output_path {
            Some(path) => println!("Skriver ut ordlistan: {}", directory.join(path).display()),
            None => println!("Ett fel uppstod"),
        }
    }
}
