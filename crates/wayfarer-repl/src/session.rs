//! Line-oriented driver feeding terminal input through a campaign.

use std::io::{BufRead, Write};

use tracing::{debug, info};
use wayfarer_campaign::Campaign;

use crate::error::ReplError;

const REPROMPT: &str = "That doesn't work here, try again.";

/// Feeds each line of `input` through `campaign` and writes emitted items to
/// `output`, until the input ends, `:quit` is entered, or the dialog
/// finishes. `:status` prints the campaign view as JSON.
///
/// # Errors
///
/// Returns `ReplError::Campaign` for unrecoverable campaign errors, and
/// `ReplError::Io`/`ReplError::Json` if the terminal cannot be used.
pub fn run(
    campaign: &mut Campaign<String, String>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), ReplError> {
    for line in input.lines() {
        let line = line?;
        match line.trim() {
            ":quit" => {
                info!(campaign_id = %campaign.id(), "session ended by user");
                break;
            }
            ":status" => {
                writeln!(output, "{}", serde_json::to_string_pretty(&campaign.view())?)?;
                continue;
            }
            _ => {}
        }

        match campaign.advance(Some(&line)) {
            Ok(items) => write_items(&mut output, &items)?,
            Err(err) if err.is_recoverable() => {
                debug!(error = %err, "re-prompting");
                writeln!(output, "{REPROMPT}")?;
            }
            Err(err) => return Err(err.into()),
        }

        if campaign.is_finished() {
            info!(campaign_id = %campaign.id(), "dialog finished");
            writeln!(output, "(dialog finished)")?;
            break;
        }
    }
    Ok(())
}

/// Writes one item per line.
///
/// # Errors
///
/// Returns `ReplError::Io` if writing fails.
pub fn write_items(output: &mut impl Write, items: &[String]) -> Result<(), ReplError> {
    for item in items {
        writeln!(output, "{item}")?;
    }
    Ok(())
}
