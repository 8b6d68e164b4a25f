//! Role endpoints.

use serde_json::Value;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::ListPage;
use crate::request::Params;
use crate::resources::ROLE;

impl DataApi {
    /// List roles.
    pub async fn list_roles(&self, options: Option<&Params>) -> MtResult<ListPage> {
        self.list_resource(&ROLE, &[], options).await
    }

    /// Create a role.
    pub async fn create_role(&self, role: &Value, options: Option<&Params>) -> MtResult<Value> {
        self.create_resource(&ROLE, &[], role, options).await
    }

    /// Get a role by id.
    pub async fn get_role(&self, role_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.get_resource(&ROLE, &[], role_id, options).await
    }

    /// Update a role.
    pub async fn update_role(
        &self,
        role_id: &str,
        role: &Value,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        self.update_resource(&ROLE, &[], role_id, role, options).await
    }

    /// Delete a role.
    pub async fn delete_role(&self, role_id: &str, options: Option<&Params>) -> MtResult<Value> {
        self.delete_resource(&ROLE, &[], role_id, options).await
    }
}
