//! Plugin endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::PLUGIN;

/// Plugin id that addresses every installed plugin at once.
pub const ALL_PLUGINS: &str = "*";

/// Path that enables or disables `plugin_id`.
fn toggle_path(plugin_id: &str, enable: bool) -> String {
    let action = if enable { "enable" } else { "disable" };
    if plugin_id == ALL_PLUGINS {
        format!("{}/{action}", PLUGIN.path)
    } else {
        format!("{}/{plugin_id}/{action}", PLUGIN.path)
    }
}

impl DataApi {
    /// List installed plugins.
    pub async fn list_plugins(&self, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&PLUGIN, &[], options).await
    }

    /// Get a plugin by id.
    pub async fn get_plugin(&self, plugin_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.get_resource(&PLUGIN, &[], plugin_id, options).await
    }

    async fn toggle_plugin(
        &self,
        plugin_id: &str,
        enable: bool,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self.url(&toggle_path(plugin_id, enable)).await;
        self.post(&url, options).await
    }

    /// Enable a plugin; `"*"` enables all of them.
    pub async fn enable_plugin(&self, plugin_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.toggle_plugin(plugin_id, true, options).await
    }

    /// Disable a plugin; `"*"` disables all of them.
    pub async fn disable_plugin(
        &self,
        plugin_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.toggle_plugin(plugin_id, false, options).await
    }

    /// Enable every installed plugin.
    pub async fn enable_all_plugins(&self, options: Option<&Params>) -> MtResult<Value> {
        self.toggle_plugin(ALL_PLUGINS, true, options).await
    }

    /// Disable every installed plugin.
    pub async fn disable_all_plugins(&self, options: Option<&Params>) -> MtResult<Value> {
        self.toggle_plugin(ALL_PLUGINS, false, options).await
    }
}
