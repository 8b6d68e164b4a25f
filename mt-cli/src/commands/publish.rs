//! Publish command - rebuild entries, following the server's phases.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use mt_core::config::AppConfig;
use mt_core::error::MtResult;
use crate::OutputFormat;

pub async fn run(config: &mut AppConfig, ids: Vec<String>, format: OutputFormat) -> MtResult<()> {
    let (api, _) = super::signed_in_client(config, None).await?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  Publishing {spinner} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{} entries", ids.len()));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let result = api.publish_entries(&id_refs, None).await;
    spinner.finish_and_clear();

    let payload = result?;
    match format {
        OutputFormat::Json => super::print_json(&payload),
        OutputFormat::Text => println!(
            "  {} Published {}",
            style("OK").green().bold(),
            ids.join(", ")
        ),
    }
    Ok(())
}
