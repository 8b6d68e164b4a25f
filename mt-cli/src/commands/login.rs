//! Login command - check credentials and show who they belong to.

use console::style;

use mt_core::config::AppConfig;
use mt_core::error::MtResult;
use crate::OutputFormat;

pub async fn run(
    config: &mut AppConfig,
    username: Option<String>,
    format: OutputFormat,
) -> MtResult<()> {
    println!(
        "{} Signing in to {}...",
        style("[1/2]").bold().dim(),
        config.server.base_url
    );
    let (api, payload) = super::signed_in_client(config, username).await?;
    println!("  {} Signed in.", style("OK").green().bold());

    println!("{} Fetching user...", style("[2/2]").bold().dim());
    let me = api.get_user("me", None).await?;

    match format {
        OutputFormat::Json => super::print_json(&me),
        OutputFormat::Text => {
            println!("{}", style("Signed-in user").bold().underlined());
            println!("  ID:           {}", super::field(&me, "id"));
            println!("  Name:         {}", super::field(&me, "name"));
            println!("  Display name: {}", super::field(&me, "displayName"));
            println!("  Email:        {}", super::field(&me, "email"));
            if let Some(expires) = payload.get("expiresIn").and_then(|v| v.as_i64()) {
                println!("  Token TTL:    {expires}s");
            }
        }
    }

    api.revoke_token().await?;
    Ok(())
}
