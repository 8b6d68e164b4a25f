//! Authentication endpoints.
//!
//! These are the only calls that change the stored credentials.

use reqwest::Method;
use serde_json::Value;
use tracing::{info, warn};

use mt_core::error::{MtError, MtResult};

use crate::client::DataApi;
use crate::request::{Params, RequestDescriptor};

impl DataApi {
    /// Sign in with the client's own client id.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> MtResult<Value> {
        let client_id = self.client_id().to_string();
        self.authenticate_with_client_id(username, password, remember, &client_id)
            .await
    }

    /// Sign in, storing the returned access token and session id.
    ///
    /// Any token or session held from before is dropped first, so a failed
    /// sign-in leaves the client signed out.
    pub async fn authenticate_with_client_id(
        &self,
        username: &str,
        password: &str,
        remember: bool,
        client_id: &str,
    ) -> MtResult<Value> {
        self.credentials.write().await.reset();

        let params = Params::new()
            .with("username", username)
            .with("password", password)
            .with("remember", if remember { "1" } else { "0" })
            .with("clientId", client_id);
        let url = self.url("/authentication").await;
        let req = RequestDescriptor::new(Method::POST, url).params(params);

        let value = self
            .send_json(req)
            .await
            .map_err(MtError::into_auth_failure)?;
        self.credentials.write().await.absorb(&value);
        info!(username, "authenticated");
        Ok(value)
    }

    /// Exchange the session for a fresh access token.
    pub async fn get_token(&self) -> MtResult<Value> {
        self.require_session().await?;

        let url = self.url("/token").await;
        let req = RequestDescriptor::new(Method::POST, url).with_session();
        let value = self
            .send_json(req)
            .await
            .map_err(MtError::into_auth_failure)?;

        if let Some(token) = value.get("accessToken").and_then(Value::as_str) {
            self.credentials.write().await.set_access_token(token);
            info!("access token refreshed");
        }
        Ok(value)
    }

    /// End the server session. The session id is forgotten only on success.
    pub async fn revoke_authentication(&self) -> MtResult<Value> {
        self.require_session().await?;

        let url = self.url("/authentication").await;
        let req = RequestDescriptor::new(Method::DELETE, url).with_session();
        let value = self.send_json(req).await?;
        self.credentials.write().await.reset_session();
        info!("session revoked");
        Ok(value)
    }

    /// Invalidate the access token. The token is forgotten only on success.
    pub async fn revoke_token(&self) -> MtResult<Value> {
        let url = self.url("/token").await;
        let value = self.delete(&url, None).await?;
        self.credentials.write().await.reset_token();
        info!("access token revoked");
        Ok(value)
    }

    async fn require_session(&self) -> MtResult<()> {
        if self.credentials.read().await.has_session() {
            Ok(())
        } else {
            warn!("no session id held");
            Err(MtError::AuthPrecondition("no session".into()))
        }
    }
}
