//! Entry commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;
use serde_json::{json, Value};

use mt_api::Params;
use mt_core::config::AppConfig;
use mt_core::error::MtResult;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum EntriesAction {
    /// List entries of a site.
    List {
        /// Site id.
        site: String,
        /// Number of entries to show.
        #[arg(short = 'n', long, default_value = "25")]
        limit: u32,
        /// Number of entries to skip.
        #[arg(short, long, default_value = "0")]
        offset: u32,
        /// Only entries with this status (Publish, Draft, Review, Future).
        #[arg(long)]
        status: Option<String>,
        /// Full-text search.
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a single entry.
    Get {
        site: String,
        id: String,
    },
    /// Create an entry.
    Create {
        site: String,
        /// Entry title.
        #[arg(short, long)]
        title: String,
        /// Entry body.
        #[arg(short, long, default_value = "")]
        body: String,
        /// Status to save with.
        #[arg(long, default_value = "Draft")]
        status: String,
    },
    /// Update fields of an existing entry.
    Update {
        site: String,
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        body: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete an entry.
    Delete {
        site: String,
        id: String,
    },
    /// Export a site's entries.
    Export {
        site: String,
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn run(config: &mut AppConfig, action: EntriesAction, format: OutputFormat) -> MtResult<()> {
    let (api, _) = super::signed_in_client(config, None).await?;

    match action {
        EntriesAction::List {
            site,
            limit,
            offset,
            status,
            search,
        } => {
            let mut options = Params::new().with("limit", limit).with("offset", offset);
            if let Some(status) = status {
                options.insert("status", status);
            }
            if let Some(search) = search {
                options.insert("search", search);
            }
            let page = api.list_entries(&site, Some(&options)).await?;

            match format {
                OutputFormat::Json => super::print_json(&json!({
                    "totalResults": page.total,
                    "items": page.items,
                })),
                OutputFormat::Text => {
                    if page.is_empty() {
                        println!("No entries found.");
                    } else {
                        let mut table =
                            super::new_table(vec!["ID", "Title", "Status", "Author", "Date"]);
                        for entry in &page.items {
                            table.add_row(vec![
                                super::field(entry, "id"),
                                super::truncate(&super::field(entry, "title"), 50),
                                super::field(entry, "status"),
                                entry
                                    .get("author")
                                    .map(|a| super::field(a, "displayName"))
                                    .unwrap_or_default(),
                                format_date(&super::field(entry, "date")),
                            ]);
                        }
                        println!("{table}");
                        println!(
                            "  Showing {} of {} entries",
                            page.len(),
                            style(page.total).bold()
                        );
                    }
                }
            }
        }
        EntriesAction::Get { site, id } => {
            let entry = api.get_entry(&site, &id, None).await?;
            match format {
                OutputFormat::Json => super::print_json(&entry),
                OutputFormat::Text => print_entry(&entry),
            }
        }
        EntriesAction::Create {
            site,
            title,
            body,
            status,
        } => {
            let entry = json!({ "title": title, "body": body, "status": status });
            let created = api.create_entry(&site, &entry, None).await?;
            report_saved(&created, "Created", format);
        }
        EntriesAction::Update {
            site,
            id,
            title,
            body,
            status,
        } => {
            let entry = changed_fields(title, body, status);
            let updated = api.update_entry(&site, &id, &entry, None).await?;
            report_saved(&updated, "Updated", format);
        }
        EntriesAction::Delete { site, id } => {
            let deleted = api.delete_entry(&site, &id, None).await?;
            match format {
                OutputFormat::Json => super::print_json(&deleted),
                OutputFormat::Text => println!(
                    "  {} Deleted entry {}",
                    style("OK").green().bold(),
                    super::field(&deleted, "id")
                ),
            }
        }
        EntriesAction::Export { site, output } => {
            let text = api.export_entries(&site, None).await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, text.as_bytes())?;
                    println!(
                        "  {} Exported {} to {}",
                        style("OK").green().bold(),
                        super::format_bytes(text.len() as u64),
                        path.display()
                    );
                }
                None => print!("{text}"),
            }
        }
    }

    Ok(())
}

/// Only the fields given on the command line go to the server.
fn changed_fields(title: Option<String>, body: Option<String>, status: Option<String>) -> Value {
    let mut entry = serde_json::Map::new();
    if let Some(title) = title {
        entry.insert("title".into(), Value::String(title));
    }
    if let Some(body) = body {
        entry.insert("body".into(), Value::String(body));
    }
    if let Some(status) = status {
        entry.insert("status".into(), Value::String(status));
    }
    Value::Object(entry)
}

fn report_saved(entry: &Value, verb: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => super::print_json(entry),
        OutputFormat::Text => {
            println!(
                "  {} {} entry {}",
                style("OK").green().bold(),
                verb,
                super::field(entry, "id")
            );
            print_entry(entry);
        }
    }
}

fn print_entry(entry: &Value) {
    println!("{}", style("Entry").bold().underlined());
    println!("  ID:        {}", super::field(entry, "id"));
    println!("  Title:     {}", super::field(entry, "title"));
    println!("  Status:    {}", super::field(entry, "status"));
    println!("  Date:      {}", format_date(&super::field(entry, "date")));
    println!("  Permalink: {}", super::field(entry, "permalink"));
    let body = super::field(entry, "body");
    if !body.is_empty() {
        println!();
        println!("{}", super::truncate(&body, 500));
    }
}

/// Entry dates arrive as RFC 3339; show them in local time.
fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_fields_only_includes_given_values() {
        let entry = changed_fields(Some("New title".into()), None, Some("Publish".into()));
        assert_eq!(entry, json!({ "title": "New title", "status": "Publish" }));
        assert_eq!(changed_fields(None, None, None), json!({}));
    }

    #[test]
    fn test_format_date_passes_through_unparseable() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2024-05-01T10:00:00+09:00").len(), 16);
    }
}
