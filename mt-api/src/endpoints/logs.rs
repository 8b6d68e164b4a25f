//! Activity log endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::LOG;

impl DataApi {
    /// List log records of a site.
    pub async fn list_logs(&self, site_id: &str, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&LOG, &[site_id], options).await
    }

    /// Create a log record.
    pub async fn create_log(
        &self,
        site_id: &str,
        log: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&LOG, &[site_id], log, options).await
    }

    /// Get a log record by id.
    pub async fn get_log(
        &self,
        site_id: &str,
        log_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&LOG, &[site_id], log_id, options).await
    }

    /// Update a log record.
    pub async fn update_log(
        &self,
        site_id: &str,
        log_id: &str,
        log: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&LOG, &[site_id], log_id, log, options).await
    }

    /// Delete a log record.
    pub async fn delete_log(
        &self,
        site_id: &str,
        log_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&LOG, &[site_id], log_id, options).await
    }

    /// Delete every log record of a site.
    pub async fn reset_logs(&self, site_id: &str, options: Option<&Params>) -> MtResult<Value> {
        let url = self.url(&LOG.collection_path(&[site_id])?).await;
        self.delete(&url, options).await
    }

    /// Export a site's activity log as CSV text.
    ///
    /// Decoded with `server.export_logs_encoding` (Shift_JIS unless configured).
    pub async fn export_logs(&self, site_id: &str, options: Option<&Params>) -> MtResult<String> {
        let url = self.url(&format!("/sites/{site_id}/logs/export")).await;
        self.fetch_text(&url, options, self.logs_encoding).await
    }
}
