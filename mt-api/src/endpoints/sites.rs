//! Site and blog endpoints.
//!
//! Sites and blogs share `/sites`; they differ only in the form field the
//! body travels in.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::{BLOG, SITE};

impl DataApi {
    /// List all sites visible to the signed-in user.
    pub async fn list_sites(&self, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&SITE, &[], options).await
    }

    /// List the child sites of a site.
    pub async fn list_sites_by_parent(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self.url(&format!("/sites/{site_id}/children")).await;
        self.fetch_list(&url, options).await
    }

    /// Create a site.
    pub async fn create_site(&self, site: &Value, options: Option<&Params>) -> MtResult<Value> {
        self.create_resource(&SITE, &[], site, options).await
    }

    /// Get a site by id.
    pub async fn get_site(&self, site_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.get_resource(&SITE, &[], site_id, options).await
    }

    /// Update a site.
    pub async fn update_site(
        &self,
        site_id: &str,
        site: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&SITE, &[], site_id, site, options).await
    }

    /// Delete a site.
    pub async fn delete_site(&self, site_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.delete_resource(&SITE, &[], site_id, options).await
    }

    /// Start a backup of a site.
    pub async fn backup_site(&self, site_id: &str, options: Option<&Params>) -> MtResult<Value> {
        let url = self.url(&format!("/sites/{site_id}/backup")).await;
        self.get(&url, options).await
    }

    /// List the sites a user can access.
    pub async fn list_blogs_for_user(
        &self,
        user_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self.url(&format!("/users/{user_id}/sites")).await;
        self.fetch_list(&url, options).await
    }

    /// Create a blog.
    pub async fn create_blog(&self, blog: &Value, options: Option<&Params>) -> MtResult<Value> {
        self.create_resource(&BLOG, &[], blog, options).await
    }

    /// Get a blog by id.
    pub async fn get_blog(&self, blog_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.get_resource(&BLOG, &[], blog_id, options).await
    }

    /// Update a blog.
    pub async fn update_blog(
        &self,
        blog_id: &str,
        blog: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&BLOG, &[], blog_id, blog, options).await
    }

    /// Delete a blog.
    pub async fn delete_blog(&self, blog_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.delete_resource(&BLOG, &[], blog_id, options).await
    }
}
