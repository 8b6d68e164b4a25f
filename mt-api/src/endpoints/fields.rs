//! Custom field endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::FIELD;

impl DataApi {
    /// List custom fields of a site.
    pub async fn list_fields(&self, site_id: &str, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&FIELD, &[site_id], options).await
    }

    /// Create a custom field.
    pub async fn create_field(
        &self,
        site_id: &str,
        field: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&FIELD, &[site_id], field, options).await
    }

    /// Get a custom field by id.
    pub async fn get_field(
        &self,
        site_id: &str,
        field_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&FIELD, &[site_id], field_id, options).await
    }

    /// Update a custom field.
    pub async fn update_field(
        &self,
        site_id: &str,
        field_id: &str,
        field: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&FIELD, &[site_id], field_id, field, options)
            .await
    }

    /// Delete a custom field.
    pub async fn delete_field(
        &self,
        site_id: &str,
        field_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&FIELD, &[site_id], field_id, options).await
    }
}
