//! Version command - negotiate the API version with the server.

use console::style;
use serde_json::json;

use mt_core::config::AppConfig;
use mt_core::error::MtResult;
use crate::OutputFormat;

pub async fn run(config: &AppConfig, format: OutputFormat) -> MtResult<()> {
    let api = super::create_api_client(config)?;
    let reported = api.version().await?;
    let endpoint = api.endpoint().await;

    match format {
        OutputFormat::Json => super::print_json(&json!({
            "baseUrl": endpoint.base_url,
            "endpointVersion": reported.endpoint_version,
            "apiVersion": reported.api_version,
        })),
        OutputFormat::Text => {
            println!("{}", style("Data API").bold().underlined());
            println!("  URL:              {}", endpoint.base_url);
            println!("  Endpoint version: {}", endpoint.endpoint_version);
            println!("  API version:      {}", endpoint.api_version);
        }
    }
    Ok(())
}
