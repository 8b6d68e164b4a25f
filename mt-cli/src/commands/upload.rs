//! Upload command - send a local file as an asset.

use std::path::PathBuf;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use mt_api::Params;
use mt_core::config::AppConfig;
use mt_core::error::{MtError, MtResult};
use crate::OutputFormat;

/// Progress bar positions are in permille of the upload.
const PROGRESS_SCALE: u64 = 1000;

pub async fn run(
    config: &mut AppConfig,
    file: PathBuf,
    site: Option<String>,
    path: Option<String>,
    overwrite: bool,
    format: OutputFormat,
) -> MtResult<()> {
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| MtError::Config(format!("not a file: {}", file.display())))?;
    let data = std::fs::read(&file)?;
    let size = data.len() as u64;

    let (api, _) = super::signed_in_client(config, None).await?;
    let options = upload_options(path, overwrite);

    let pb = ProgressBar::new(PROGRESS_SCALE);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Uploading [{bar:40.cyan/blue}] {percent}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    pb.set_message(super::format_bytes(size));

    let bar = pb.clone();
    let result = api
        .upload_asset_with_progress(site.as_deref(), data, &file_name, Some(&options), move |f| {
            bar.set_position((f * PROGRESS_SCALE as f64) as u64);
        })
        .await;
    pb.finish_and_clear();

    let asset = result?;
    match format {
        OutputFormat::Json => super::print_json(&asset),
        OutputFormat::Text => {
            println!(
                "  {} Uploaded {} ({})",
                style("OK").green().bold(),
                file_name,
                super::format_bytes(size)
            );
            println!("  ID:  {}", super::field(&asset, "id"));
            println!("  URL: {}", super::field(&asset, "url"));
        }
    }
    Ok(())
}

fn upload_options(path: Option<String>, overwrite: bool) -> Params {
    let mut options = Params::new();
    if let Some(path) = path {
        options.insert("path", path);
    }
    if overwrite {
        options.insert("overwrite_once", 1);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_options() {
        let options = upload_options(Some("images/2024".into()), true);
        assert_eq!(options.get("path"), Some("images/2024"));
        assert_eq!(options.get("overwrite_once"), Some("1"));
        assert!(upload_options(None, false).is_empty());
    }
}
