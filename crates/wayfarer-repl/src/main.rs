//! Wayfarer REPL entry point.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;
use wayfarer_campaign::Campaign;
use wayfarer_core::clock::SystemClock;

mod config;
mod dialogs;
mod error;
mod rng;
mod session;

use config::{LogFormat, ReplConfig};
use dialogs::SharedRng;
use error::ReplError;
use rng::OsSeededRng;

fn main() -> Result<(), ReplError> {
    // Read configuration from environment.
    let config = ReplConfig::from_env()?;

    // Initialize tracing subscriber. Logs go to stderr, the dialog to stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match config.log_format {
        LogFormat::Plain => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let dialog = std::env::args().nth(1).unwrap_or_else(|| "greet".to_owned());
    tracing::info!(%dialog, "Starting Wayfarer REPL");

    let rng: SharedRng = Arc::new(Mutex::new(OsSeededRng::new()));
    let start = dialogs::start(&dialog, &rng).ok_or(ReplError::UnknownDialog(dialog))?;
    let (mut campaign, opening) =
        Campaign::create_with(start, config.campaign, Arc::new(SystemClock))?;
    tracing::info!(
        campaign_id = %campaign.id(),
        adventure = campaign.adventure().name(),
        max_hand_offs = campaign.config().max_hand_offs,
        "Campaign created"
    );

    let stdout = io::stdout();
    session::write_items(&mut stdout.lock(), &opening)?;
    session::run(&mut campaign, io::stdin().lock(), stdout.lock())?;

    Ok(())
}
