//! Permission endpoints.
//!
//! A permission is a (user, site, role) triple. Grants and revocations can
//! be addressed from the site side or the user side.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::PERMISSION;

impl DataApi {
    /// List every permission record.
    pub async fn list_permissions(&self, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&PERMISSION, &[], options).await
    }

    async fn list_permissions_for(
        &self,
        owner: &str,
        owner_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        let url = self.url(&format!("/{owner}/{owner_id}/permissions")).await;
        self.fetch_list(&url, options).await
    }

    /// List permissions held by a user.
    pub async fn list_permissions_for_user(
        &self,
        user_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_permissions_for("users", user_id, options).await
    }

    /// List permissions granted on a site.
    pub async fn list_permissions_for_site(
        &self,
        site_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_permissions_for("sites", site_id, options).await
    }

    /// List permissions carrying a role.
    pub async fn list_permissions_for_role(
        &self,
        role_id: &str,
        options: Option<&Params>,
    ) -> MtResult<ListPage> {
        self.list_permissions_for("roles", role_id, options).await
    }

    /// Give a user a role on a site, addressed from the site.
    pub async fn grant_permission_to_site(
        &self,
        site_id: &str,
        user_id: &str,
        role_id: &str,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("/sites/{site_id}/permissions/grant"))
            .await;
        let params = Params::from([("user_id", user_id), ("role_id", role_id)]);
        self.post(&url, Some(&params)).await
    }

    /// Give a user a role on a site, addressed from the user.
    pub async fn grant_permission_to_user(
        &self,
        user_id: &str,
        site_id: &str,
        role_id: &str,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("/users/{user_id}/permissions/grant"))
            .await;
        let params = Params::from([("site_id", site_id), ("role_id", role_id)]);
        self.post(&url, Some(&params)).await
    }

    /// Revoke a role from a user on a site.
    pub async fn revoke_permission_to_site(
        &self,
        site_id: &str,
        user_id: &str,
        role_id: &str,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("/sites/{site_id}/permissions/revoke"))
            .await;
        let params = Params::from([("user_id", user_id), ("role_id", role_id)]);
        self.post(&url, Some(&params)).await
    }

    /// Revoke a role on a site from a user.
    pub async fn revoke_permission_to_user(
        &self,
        user_id: &str,
        site_id: &str,
        role_id: &str,
    ) -> MtResult<Value> {
        let url = self
            .url(&format!("/users/{user_id}/permissions/revoke"))
            .await;
        let params = Params::from([("site_id", site_id), ("role_id", role_id)]);
        self.post(&url, Some(&params)).await
    }
}
