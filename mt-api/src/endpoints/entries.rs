//! Entry endpoints, including export, import, publish and preview.

use reqwest::Method;
use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::ENTRY;

/// File name the import payload is uploaded under.
const IMPORT_FILE_NAME: &str = "import.dat";

impl DataApi {
    /// List entries of a site.
    pub async fn list_entries(&self, site_id: &str, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&ENTRY, &[site_id], options).await
    }

    /// Create an entry.
    pub async fn create_entry(
        &self,
        site_id: &str,
        entry: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&ENTRY, &[site_id], entry, options).await
    }

    /// Get an entry by id.
    pub async fn get_entry(
        &self,
        site_id: &str,
        entry_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&ENTRY, &[site_id], entry_id, options).await
    }

    /// Update an entry.
    pub async fn update_entry(
        &self,
        site_id: &str,
        entry_id: &str,
        entry: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&ENTRY, &[site_id], entry_id, entry, options)
            .await
    }

    /// Delete an entry.
    pub async fn delete_entry(
        &self,
        site_id: &str,
        entry_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&ENTRY, &[site_id], entry_id, options).await
    }

    /// `/sites/{site}/{owner}/{id}/entries`
    async fn list_entries_for(
        &self,
        site_id: &str,
        owner: &str,
        owner_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self
            .url(&format!("/sites/{site_id}/{owner}/{owner_id}/entries"))
            .await;
        self.fetch_list(&url, options).await
    }

    /// List entries attached to a category.
    pub async fn list_entries_for_category(
        &self,
        site_id: &str,
        category_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_entries_for(site_id, "categories", category_id, options)
            .await
    }

    /// List entries attached to an asset.
    pub async fn list_entries_for_asset(
        &self,
        site_id: &str,
        asset_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_entries_for(site_id, "assets", asset_id, options).await
    }

    /// List entries carrying a tag.
    pub async fn list_entries_for_site_and_tag(
        &self,
        site_id: &str,
        tag_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_entries_for(site_id, "tags", tag_id, options).await
    }

    /// Export a site's entries as text.
    ///
    /// Decoded with `server.export_entries_encoding`.
    pub async fn export_entries(&self, site_id: &str, options: Option<&Params>) -> MtResult<String> {
        let url = self.url(&format!("/sites/{site_id}/entries/export")).await;
        self.fetch_text(&url, options, self.entries_encoding).await
    }

    /// Publish entries, following the server through every phase.
    pub async fn publish_entries(
        &self,
        entry_ids: &[&str],
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self.url("/publish/entries").await;
        let params = Params::from_options(options).with("ids", entry_ids.join(","));
        self.repeat_action(Method::GET, &url, Some(&params)).await
    }

    /// Import entries into a site.
    ///
    /// With `data`, the payload is uploaded as `import.dat`; without it the
    /// server imports from a file it already has, named in `options`.
    pub async fn import_entries(
        &self,
        site_id: &str,
        data: Option<Vec<u8>>,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self.url(&format!("/sites/{site_id}/entries/import")).await;
        match data {
            Some(data) => self.upload(data, IMPORT_FILE_NAME, &url, options).await,
            None => self.post(&url, options).await,
        }
    }

    /// Render a preview of an entry, saved (`entry_id`) or not.
    pub async fn preview_entry(
        &self,
        site_id: &str,
        entry_id: Option<&str>,
        entry: Option<&Value>,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let path = match entry_id {
            Some(id) => format!("/sites/{site_id}/entries/{id}/preview"),
            None => format!("/sites/{site_id}/entries/preview"),
        };
        let url = self.url(&path).await;
        self.action(ENTRY.payload_key, Method::POST, &url, entry, options)
            .await
    }
}
