//! Template and template map endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::{TEMPLATE, TEMPLATE_MAP};

impl DataApi {
    /// List templates of a site.
    pub async fn list_templates(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_resource(&TEMPLATE, &[site_id], options).await
    }

    /// Create a template.
    pub async fn create_template(
        &self,
        site_id: &str,
        template: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&TEMPLATE, &[site_id], template, options)
            .await
    }

    /// Get a template by id.
    pub async fn get_template(
        &self,
        site_id: &str,
        template_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&TEMPLATE, &[site_id], template_id, options)
            .await
    }

    /// Update a template.
    pub async fn update_template(
        &self,
        site_id: &str,
        template_id: &str,
        template: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&TEMPLATE, &[site_id], template_id, template, options)
            .await
    }

    /// Delete a template.
    pub async fn delete_template(
        &self,
        site_id: &str,
        template_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&TEMPLATE, &[site_id], template_id, options)
            .await
    }

    /// POST `/sites/{site}/templates/{id}/{op}`
    async fn template_command(
        &self,
        site_id: &str,
        template_id: &str,
        op: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("/sites/{site_id}/templates/{template_id}/{op}"))
            .await;
        self.post(&url, options).await
    }

    /// Rebuild the output of one template.
    pub async fn publish_template(
        &self,
        site_id: &str,
        template_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.template_command(site_id, template_id, "publish", options)
            .await
    }

    /// Reset one template to the theme's default.
    pub async fn refresh_template(
        &self,
        site_id: &str,
        template_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.template_command(site_id, template_id, "refresh", options)
            .await
    }

    /// Reset every template of a site to the theme's defaults.
    pub async fn refresh_templates_for_site(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self.url(&format!("/sites/{site_id}/refresh_templates")).await;
        self.post(&url, options).await
    }

    /// Copy a template within its site.
    pub async fn clone_template(
        &self,
        site_id: &str,
        template_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.template_command(site_id, template_id, "clone", options)
            .await
    }

    /// List the archive mappings of a template.
    pub async fn list_template_maps(
        &self,
        site_id: &str,
        template_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_resource(&TEMPLATE_MAP, &[site_id, template_id], options)
            .await
    }

    /// Create a template map.
    pub async fn create_template_map(
        &self,
        site_id: &str,
        template_id: &str,
        template_map: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&TEMPLATE_MAP, &[site_id, template_id], template_map, options)
            .await
    }

    /// Get a template map by id.
    pub async fn get_template_map(
        &self,
        site_id: &str,
        template_id: &str,
        template_map_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&TEMPLATE_MAP, &[site_id, template_id], template_map_id, options)
            .await
    }

    /// Update a template map.
    pub async fn update_template_map(
        &self,
        site_id: &str,
        template_id: &str,
        template_map_id: &str,
        template_map: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(
            &TEMPLATE_MAP,
            &[site_id, template_id],
            template_map_id,
            template_map,
            options,
        )
        .await
    }

    /// Delete a template map.
    pub async fn delete_template_map(
        &self,
        site_id: &str,
        template_id: &str,
        template_map_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&TEMPLATE_MAP, &[site_id, template_id], template_map_id, options)
            .await
    }
}
