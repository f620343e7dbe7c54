use chrono::Local;
use clap::Parser;
use runs_sync::utils::{logger, validation::Validate};
use runs_sync::{CliConfig, LocalStorage, SheetsApiSource, SyncEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting runs-sync");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // One timestamp for all three output files.
    let today = Local::now().format("%Y-%m-%d").to_string();

    let source = SheetsApiSource::new(
        &config.api_base,
        config.spreadsheet_id.clone(),
        config.api_key.clone(),
    )?;
    let storage = LocalStorage::new(config.output_path.clone());
    let output_path = config.output_path.clone();
    let engine = SyncEngine::new(source, storage, config);

    match engine.run(&today).await {
        Ok(written) => {
            tracing::info!("✅ Sync completed successfully!");
            println!("✅ Sync completed successfully!");
            for file in &written {
                println!("📁 {}/{}", output_path, file);
            }
        }
        Err(e) => {
            tracing::error!("❌ Sync failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
