//! Widget and widget set endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::{WIDGET, WIDGET_SET};

impl DataApi {
    /// List widgets of a site.
    pub async fn list_widgets(&self, site_id: &str, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&WIDGET, &[site_id], options).await
    }

    /// Widgets placed in a widget set.
    pub async fn list_widgets_for_widget_set(
        &self,
        site_id: &str,
        widget_set_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self
            .url(&format!("/sites/{site_id}/widgetsets/{widget_set_id}/widgets"))
            .await;
        self.fetch_list(&url, options).await
    }

    /// Get a widget through the widget set that holds it.
    pub async fn get_widget_for_widget_set(
        &self,
        site_id: &str,
        widget_set_id: &str,
        widget_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!(
                "/sites/{site_id}/widgetsets/{widget_set_id}/widgets/{widget_id}"
            ))
            .await;
        self.get(&url, options).await
    }

    /// Create a widget.
    pub async fn create_widget(
        &self,
        site_id: &str,
        widget: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&WIDGET, &[site_id], widget, options).await
    }

    /// Get a widget by id.
    pub async fn get_widget(
        &self,
        site_id: &str,
        widget_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&WIDGET, &[site_id], widget_id, options).await
    }

    /// Update a widget.
    pub async fn update_widget(
        &self,
        site_id: &str,
        widget_id: &str,
        widget: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&WIDGET, &[site_id], widget_id, widget, options)
            .await
    }

    /// Delete a widget.
    pub async fn delete_widget(
        &self,
        site_id: &str,
        widget_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&WIDGET, &[site_id], widget_id, options)
            .await
    }

    /// Reset a widget to the theme's default.
    pub async fn refresh_widget(
        &self,
        site_id: &str,
        widget_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("/sites/{site_id}/widgets/{widget_id}/refresh"))
            .await;
        self.post(&url, options).await
    }

    /// Copy a widget within its site.
    pub async fn clone_widget(
        &self,
        site_id: &str,
        widget_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("/sites/{site_id}/widgets/{widget_id}/clone"))
            .await;
        self.post(&url, options).await
    }

    /// List widget sets of a site.
    pub async fn list_widget_sets(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_resource(&WIDGET_SET, &[site_id], options).await
    }

    /// Create a widget set.
    pub async fn create_widget_set(
        &self,
        site_id: &str,
        widget_set: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&WIDGET_SET, &[site_id], widget_set, options)
            .await
    }

    /// Get a widget set by id.
    pub async fn get_widget_set(
        &self,
        site_id: &str,
        widget_set_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&WIDGET_SET, &[site_id], widget_set_id, options)
            .await
    }

    /// Update a widget set.
    pub async fn update_widget_set(
        &self,
        site_id: &str,
        widget_set_id: &str,
        widget_set: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&WIDGET_SET, &[site_id], widget_set_id, widget_set, options)
            .await
    }

    /// Delete a widget set.
    pub async fn delete_widget_set(
        &self,
        site_id: &str,
        widget_set_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&WIDGET_SET, &[site_id], widget_set_id, options)
            .await
    }
}
