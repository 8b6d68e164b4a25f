//! Tag endpoints. Tags come into being by tagging content; there is no create.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::TAG;

impl DataApi {
    /// List tags of a site.
    pub async fn list_tags(&self, site_id: &str, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&TAG, &[site_id], options).await
    }

    /// Get a tag by id.
    pub async fn get_tag(
        &self,
        site_id: &str,
        tag_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&TAG, &[site_id], tag_id, options).await
    }

    /// Update a tag.
    pub async fn update_tag(
        &self,
        site_id: &str,
        tag_id: &str,
        tag: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&TAG, &[site_id], tag_id, tag, options).await
    }

    /// Delete a tag.
    pub async fn delete_tag(
        &self,
        site_id: &str,
        tag_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&TAG, &[site_id], tag_id, options).await
    }
}
