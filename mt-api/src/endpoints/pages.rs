//! Page endpoints.

use reqwest::Method;
use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::PAGE;

impl DataApi {
    /// List pages of a site.
    pub async fn list_pages(&self, site_id: &str, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&PAGE, &[site_id], options).await
    }

    /// Create a page.
    pub async fn create_page(
        &self,
        site_id: &str,
        page: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&PAGE, &[site_id], page, options).await
    }

    /// Get a page by id.
    pub async fn get_page(
        &self,
        site_id: &str,
        page_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&PAGE, &[site_id], page_id, options).await
    }

    /// Update a page.
    pub async fn update_page(
        &self,
        site_id: &str,
        page_id: &str,
        page: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&PAGE, &[site_id], page_id, page, options)
            .await
    }

    /// Delete a page.
    pub async fn delete_page(
        &self,
        site_id: &str,
        page_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&PAGE, &[site_id], page_id, options).await
    }

    async fn list_pages_for(
        &self,
        site_id: &str,
        owner: &str,
        owner_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self
            .url(&format!("/sites/{site_id}/{owner}/{owner_id}/pages"))
            .await;
        self.fetch_list(&url, options).await
    }

    /// List pages attached to a folder.
    pub async fn list_pages_for_folder(
        &self,
        site_id: &str,
        folder_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_pages_for(site_id, "folders", folder_id, options).await
    }

    /// List pages attached to an asset.
    pub async fn list_pages_for_asset(
        &self,
        site_id: &str,
        asset_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_pages_for(site_id, "assets", asset_id, options).await
    }

    /// List pages carrying a tag.
    pub async fn list_pages_for_site_and_tag(
        &self,
        site_id: &str,
        tag_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_pages_for(site_id, "tags", tag_id, options).await
    }

    /// Render a preview of a page, saved (`page_id`) or not.
    pub async fn preview_page(
        &self,
        site_id: &str,
        page_id: Option<&str>,
        page: Option<&Value>,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let path = match page_id {
            Some(id) => format!("/sites/{site_id}/pages/{id}/preview"),
            None => format!("/sites/{site_id}/pages/preview"),
        };
        let url = self.url(&path).await;
        self.action(PAGE.payload_key, Method::POST, &url, page, options)
            .await
    }
}
