mod bootstrap;
mod run;

use anyhow::Result;
use clap::Parser;
use weather_core::settings::Settings;
use weather_data::reader::load_readings;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("weatherman v{} starting", env!("CARGO_PKG_VERSION"));

    bootstrap::check_data_dir(&settings.data_dir)?;

    // Every run ingests the whole directory once; the report flags only
    // choose which windows of it get printed.
    let readings = load_readings(&settings.data_dir)?;
    tracing::info!(
        "Loaded {} readings from {}",
        readings.len(),
        settings.data_dir.display()
    );

    if !settings.wants_report() {
        tracing::warn!("No report requested; pass --year, --average or --chart");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run::generate_reports(&settings, &readings, &mut out)?;

    Ok(())
}
