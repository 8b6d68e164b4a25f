//! Theme endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::THEME;

impl DataApi {
    /// List installed themes.
    pub async fn list_themes(&self, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&THEME, &[], options).await
    }

    /// Get a theme by id.
    pub async fn get_theme(&self, theme_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.get_resource(&THEME, &[], theme_id, options).await
    }

    /// Apply an installed theme to a site.
    pub async fn apply_theme_to_site(
        &self,
        site_id: &str,
        theme_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("/sites/{site_id}/themes/{theme_id}/apply"))
            .await;
        self.post(&url, options).await
    }

    /// Remove an installed theme.
    pub async fn uninstall_theme(
        &self,
        theme_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&THEME, &[], theme_id, options).await
    }

    /// Save a site's current design as a new theme.
    pub async fn export_site_theme(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self.url(&format!("/sites/{site_id}/export_theme")).await;
        self.post(&url, options).await
    }
}
