//! Asset endpoints. New assets arrive through multipart upload.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::ASSET;

impl DataApi {
    /// List assets of a site.
    pub async fn list_assets(&self, site_id: &str, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&ASSET, &[site_id], options).await
    }

    /// Upload an asset. The target site is named in `options` (`site_id`).
    pub async fn upload_asset(
        &self,
        data: Vec<u8>,
        file_name: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.upload_asset_for_site(None, data, file_name, options)
            .await
    }

    /// Upload an asset into a site, or through `/assets/upload` when no
    /// site is given.
    pub async fn upload_asset_for_site(
        &self,
        site_id: Option<&str>,
        data: Vec<u8>,
        file_name: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.upload_asset_with_progress(site_id, data, file_name, options, |_| {})
            .await
    }

    /// Upload an asset, reporting the fraction sent to `progress`.
    pub async fn upload_asset_with_progress<F>(
        &self,
        site_id: Option<&str>,
        data: Vec<u8>,
        file_name: &str,
        options: Option<&Params>,
        progress: F,
    ) -> MtResult<Value>
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let path = match site_id {
            Some(id) => format!("/sites/{id}/assets/upload"),
            None => "/assets/upload".to_string(),
        };
        let url = self.url(&path).await;
        self.upload_with_progress(data, file_name, &url, options, progress)
            .await
    }

    /// Get an asset by id.
    pub async fn get_asset(
        &self,
        site_id: &str,
        asset_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&ASSET, &[site_id], asset_id, options).await
    }

    /// Update an asset.
    pub async fn update_asset(
        &self,
        site_id: &str,
        asset_id: &str,
        asset: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&ASSET, &[site_id], asset_id, asset, options)
            .await
    }

    /// Delete an asset.
    pub async fn delete_asset(
        &self,
        site_id: &str,
        asset_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&ASSET, &[site_id], asset_id, options).await
    }

    async fn list_assets_for(
        &self,
        site_id: &str,
        owner: &str,
        owner_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self
            .url(&format!("/sites/{site_id}/{owner}/{owner_id}/assets"))
            .await;
        self.fetch_list(&url, options).await
    }

    /// List assets attached to an entry.
    pub async fn list_assets_for_entry(
        &self,
        site_id: &str,
        entry_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_assets_for(site_id, "entries", entry_id, options).await
    }

    /// List assets attached to a page.
    pub async fn list_assets_for_page(
        &self,
        site_id: &str,
        page_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_assets_for(site_id, "pages", page_id, options).await
    }

    /// List assets carrying a tag.
    pub async fn list_assets_for_site_and_tag(
        &self,
        site_id: &str,
        tag_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_assets_for(site_id, "tags", tag_id, options).await
    }

    /// Thumbnail URL of an image asset; size is chosen with `width`/`height`
    /// or `scale` options.
    pub async fn get_thumbnail(
        &self,
        site_id: &str,
        asset_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("/sites/{site_id}/assets/{asset_id}/thumbnail"))
            .await;
        self.get(&url, options).await
    }
}
