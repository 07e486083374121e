mod bootstrap;

use anyhow::Result;
use clap::Parser;
use varaus_core::calculations;
use varaus_core::error::VarausError;
use varaus_core::settings::Settings;
use varaus_data::reader::load_reservations;
use varaus_reports::{detail, listing, report, summary};

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("varaus v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "File: {}, report: {}",
        settings.file.display(),
        settings.report
    );

    let reservations = load_reservations(&settings.file)?;
    if reservations.is_empty() {
        tracing::warn!("No reservations found in {}", settings.file.display());
    }

    let output = match settings.report.as_str() {
        "all" => report::full_report(&reservations),
        "confirmed" => listing::confirmed_reservations(&reservations),
        "long" => listing::long_reservations(&reservations),
        "status" => listing::confirmation_statuses(&reservations),
        "summary" => summary::confirmation_summary(&reservations),
        "revenue" => summary::total_revenue(&reservations),
        "detail" => match settings.id {
            Some(id) => {
                let reservation = calculations::find_by_id(&reservations, id)
                    .ok_or(VarausError::UnknownReservation(id))?;
                detail::reservation_details(reservation)
            }
            None => detail::all_details(&reservations),
        },
        // value_parser restricts --report to the arms above.
        unknown => anyhow::bail!("Unknown report: {unknown}"),
    };

    println!("{output}");

    Ok(())
}
