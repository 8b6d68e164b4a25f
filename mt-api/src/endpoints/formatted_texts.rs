//! Formatted text (boilerplate) endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::FORMATTED_TEXT;

impl DataApi {
    /// List formatted texts of a site.
    pub async fn list_formatted_texts(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_resource(&FORMATTED_TEXT, &[site_id], options).await
    }

    /// Create a formatted text.
    pub async fn create_formatted_text(
        &self,
        site_id: &str,
        formatted_text: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&FORMATTED_TEXT, &[site_id], formatted_text, options)
            .await
    }

    /// Get a formatted text by id.
    pub async fn get_formatted_text(
        &self,
        site_id: &str,
        formatted_text_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&FORMATTED_TEXT, &[site_id], formatted_text_id, options)
            .await
    }

    /// Update a formatted text.
    pub async fn update_formatted_text(
        &self,
        site_id: &str,
        formatted_text_id: &str,
        formatted_text: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(
            &FORMATTED_TEXT,
            &[site_id],
            formatted_text_id,
            formatted_text,
            options,
        )
        .await
    }

    /// Delete a formatted text.
    pub async fn delete_formatted_text(
        &self,
        site_id: &str,
        formatted_text_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&FORMATTED_TEXT, &[site_id], formatted_text_id, options)
            .await
    }
}
