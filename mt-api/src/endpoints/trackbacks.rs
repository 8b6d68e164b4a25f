//! Trackback endpoints. Trackbacks are received, never created by clients.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::TRACKBACK;

impl DataApi {
    /// List trackbacks of a site.
    pub async fn list_trackbacks(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_resource(&TRACKBACK, &[site_id], options).await
    }

    /// Get a trackback by id.
    pub async fn get_trackback(
        &self,
        site_id: &str,
        trackback_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&TRACKBACK, &[site_id], trackback_id, options)
            .await
    }

    /// Update a trackback.
    pub async fn update_trackback(
        &self,
        site_id: &str,
        trackback_id: &str,
        trackback: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&TRACKBACK, &[site_id], trackback_id, trackback, options)
            .await
    }

    /// Delete a trackback.
    pub async fn delete_trackback(
        &self,
        site_id: &str,
        trackback_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&TRACKBACK, &[site_id], trackback_id, options)
            .await
    }

    async fn list_trackbacks_for(
        &self,
        site_id: &str,
        owner: &str,
        owner_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self
            .url(&format!("/sites/{site_id}/{owner}/{owner_id}/trackbacks"))
            .await;
        self.fetch_list(&url, options).await
    }

    /// List trackbacks attached to an entry.
    pub async fn list_trackbacks_for_entry(
        &self,
        site_id: &str,
        entry_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_trackbacks_for(site_id, "entries", entry_id, options)
            .await
    }

    /// List trackbacks attached to a page.
    pub async fn list_trackbacks_for_page(
        &self,
        site_id: &str,
        page_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_trackbacks_for(site_id, "pages", page_id, options)
            .await
    }
}
