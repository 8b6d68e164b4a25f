//! Folder endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use super::categories::Relation;
use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::FOLDER;

impl DataApi {
    /// List folders of a site.
    pub async fn list_folders(&self, site_id: &str, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&FOLDER, &[site_id], options).await
    }

    /// Create a folder.
    pub async fn create_folder(
        &self,
        site_id: &str,
        folder: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.create_resource(&FOLDER, &[site_id], folder, options).await
    }

    /// Get a folder by id.
    pub async fn get_folder(
        &self,
        site_id: &str,
        folder_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.get_resource(&FOLDER, &[site_id], folder_id, options).await
    }

    /// Update a folder.
    pub async fn update_folder(
        &self,
        site_id: &str,
        folder_id: &str,
        folder: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&FOLDER, &[site_id], folder_id, folder, options)
            .await
    }

    /// Delete a folder.
    pub async fn delete_folder(
        &self,
        site_id: &str,
        folder_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.delete_resource(&FOLDER, &[site_id], folder_id, options)
            .await
    }

    /// List the ancestors of a folder.
    pub async fn list_parent_folders(
        &self,
        site_id: &str,
        folder_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_related(&FOLDER, site_id, folder_id, Relation::Parents, options)
            .await
    }

    /// List folders sharing a parent with this one.
    pub async fn list_sibling_folders(
        &self,
        site_id: &str,
        folder_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_related(&FOLDER, site_id, folder_id, Relation::Siblings, options)
            .await
    }

    /// List the direct children of a folder.
    pub async fn list_child_folders(
        &self,
        site_id: &str,
        folder_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_related(&FOLDER, site_id, folder_id, Relation::Children, options)
            .await
    }

    /// Rewrite the folder tree of a site in the given order.
    pub async fn permutate_folders(
        &self,
        site_id: &str,
        folders: Option<&[Value]>,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.permutate(&FOLDER, "folders", site_id, folders, options)
            .await
    }
}
