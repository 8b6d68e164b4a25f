//! User endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::USER;

impl DataApi {
    /// List users.
    pub async fn list_users(&self, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&USER, &[], options).await
    }

    /// Create a user.
    pub async fn create_user(&self, user: &Value, options: Option<&Params>) -> MtResult<Value> {
        self.create_resource(&USER, &[], user, options).await
    }

    /// Fetch a user. `"me"` names the signed-in user.
    pub async fn get_user(&self, user_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.get_resource(&USER, &[], user_id, options).await
    }

    /// Update a user.
    pub async fn update_user(
        &self,
        user_id: &str,
        user: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&USER, &[], user_id, user, options).await
    }

    /// Delete a user.
    pub async fn delete_user(&self, user_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.delete_resource(&USER, &[], user_id, options).await
    }

    /// Clear a lockout after too many failed sign-ins.
    pub async fn unlock_user(&self, user_id: &str, options: Option<&Params>) -> MtResult<Value> {
        let url = self.url(&format!("/users/{user_id}/unlock")).await;
        self.post(&url, options).await
    }

    /// Send a password recovery mail to a user, as an administrator.
    pub async fn recover_password_for_user(
        &self,
        user_id: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self.url(&format!("/users/{user_id}/recover_password")).await;
        self.post(&url, options).await
    }

    /// Request a password recovery mail by user name and address.
    pub async fn recover_password(
        &self,
        name: &str,
        email: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let url = self.url("/recover_password").await;
        let params = Params::from_options(options)
            .with("name", name)
            .with("email", email);
        self.post(&url, Some(&params)).await
    }
}
