//! Calendar now-consistency check harness.

use std::error::Error;
use std::process::ExitCode;

use almanac_calendar::calendar::Calendar;
use almanac_calendar::config::CalendarConfig;
use almanac_calendar::consistency::NowComparer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Initialize tracing subscriber; logs go to stderr, results to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let json = std::env::args().any(|arg| arg == "--json");

    // Read configuration from environment.
    let config = CalendarConfig::from_env()?;
    tracing::info!(
        locale = %config.locale,
        error_level = %config.error_level,
        "running calendar now-consistency check"
    );

    let calendar = Calendar::new(config);
    let report = NowComparer::new().compare(&calendar);

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("surfaces agree: {}", report.surfaces_agree);
        println!("system clock agrees: {}", report.system_agrees);
    }

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
