//! CLI command implementations.

pub mod version;
pub mod login;
pub mod sites;
pub mod entries;
pub mod publish;
pub mod upload;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use console::style;
use dialoguer::{Input, Password};
use serde_json::Value;
use tracing::error;

use mt_api::DataApi;
use mt_core::config::AppConfig;
use mt_core::error::{MtError, MtResult};

/// Helper to create an API client from config.
pub fn create_api_client(config: &AppConfig) -> MtResult<DataApi> {
    if let Err(e) = config.require_base_url() {
        error!("no Data API URL configured. Use --base-url or set server.base_url in config.");
        return Err(e);
    }
    DataApi::new(&config.server)
}

/// Fill in missing account details interactively.
fn prompt_account(config: &mut AppConfig, username: Option<String>) -> MtResult<()> {
    if let Some(username) = username {
        config.account.username = username;
    }
    if config.account.username.is_empty() {
        config.account.username = Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| MtError::Internal(e.to_string()))?;
    }
    if config.account.password.is_empty() {
        config.account.password = Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| MtError::Internal(e.to_string()))?;
    }
    Ok(())
}

/// Create a client and sign in with the configured (or prompted) account.
pub async fn signed_in_client(
    config: &mut AppConfig,
    username: Option<String>,
) -> MtResult<(DataApi, Value)> {
    let api = create_api_client(config)?;
    prompt_account(config, username)?;

    let account = &config.account;
    match api
        .authenticate(&account.username, &account.password, account.remember)
        .await
    {
        Ok(payload) => Ok((api, payload)),
        Err(e) => {
            println!("  {} Sign-in failed: {e}", style("FAIL").red().bold());
            Err(e)
        }
    }
}

/// Print a value as pretty JSON.
pub fn print_json(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// A table with the CLI's usual look.
pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Read a field as display text, whatever its JSON type.
pub fn field(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Truncate a string to at most `max_chars` characters, appending an
/// ellipsis if truncated.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
