//! Site commands.

use clap::Subcommand;
use console::style;

use mt_api::Params;
use mt_core::config::AppConfig;
use mt_core::error::MtResult;
use crate::OutputFormat;

#[derive(Subcommand)]
pub enum SitesAction {
    /// List sites.
    List {
        /// Number of sites to show.
        #[arg(short = 'n', long, default_value = "25")]
        limit: u32,
        /// Number of sites to skip.
        #[arg(short, long, default_value = "0")]
        offset: u32,
        /// Only list children of this site.
        #[arg(long)]
        parent: Option<String>,
    },
    /// Get details for a specific site.
    Get {
        /// Site id.
        id: String,
    },
}

pub async fn run(config: &mut AppConfig, action: SitesAction, format: OutputFormat) -> MtResult<()> {
    let (api, _) = super::signed_in_client(config, None).await?;

    match action {
        SitesAction::List {
            limit,
            offset,
            parent,
        } => {
            let options = Params::new().with("limit", limit).with("offset", offset);
            let page = match parent {
                Some(parent) => api.list_sites_by_parent(&parent, Some(&options)).await?,
                None => api.list_sites(Some(&options)).await?,
            };

            match format {
                OutputFormat::Json => super::print_json(&serde_json::json!({
                    "totalResults": page.total,
                    "items": page.items,
                })),
                OutputFormat::Text => {
                    if page.is_empty() {
                        println!("No sites found.");
                    } else {
                        let mut table = super::new_table(vec!["ID", "Name", "URL", "Parent"]);
                        for site in &page.items {
                            table.add_row(vec![
                                super::field(site, "id"),
                                super::truncate(&super::field(site, "name"), 40),
                                super::field(site, "url"),
                                site.get("parent")
                                    .map(|p| super::field(p, "id"))
                                    .unwrap_or_default(),
                            ]);
                        }
                        println!("{table}");
                        println!(
                            "  Showing {} of {} sites",
                            page.len(),
                            style(page.total).bold()
                        );
                    }
                }
            }
        }
        SitesAction::Get { id } => {
            let site = api.get_site(&id, None).await?;
            match format {
                OutputFormat::Json => super::print_json(&site),
                OutputFormat::Text => {
                    println!("{}", style("Site").bold().underlined());
                    println!("  ID:          {}", super::field(&site, "id"));
                    println!("  Name:        {}", super::field(&site, "name"));
                    println!("  URL:         {}", super::field(&site, "url"));
                    println!("  Language:    {}", super::field(&site, "language"));
                    println!("  Theme:       {}", super::field(&site, "themeId"));
                    println!("  Description: {}", super::field(&site, "description"));
                }
            }
        }
    }

    Ok(())
}
