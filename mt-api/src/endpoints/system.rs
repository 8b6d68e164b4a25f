//! System endpoints: endpoint discovery, version negotiation and search.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use mt_core::error::MtResult;

use crate::client::DataApi;
use crate::envelope::{scalar_to_string, ListPage};
use crate::request::{Params, RequestDescriptor};

/// Versions reported by `GET <base_url>/version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub endpoint_version: String,
    pub api_version: String,
}

impl VersionInfo {
    fn from_value(value: &Value) -> Self {
        Self {
            endpoint_version: value
                .get("endpointVersion")
                .map(scalar_to_string)
                .unwrap_or_default(),
            api_version: value
                .get("apiVersion")
                .map(scalar_to_string)
                .unwrap_or_default(),
        }
    }
}

impl DataApi {
    /// List the endpoints the server exposes.
    pub async fn endpoints(&self, options: Option<&Params>) -> MtResult<ListPage> {
        let url = self.url("/endpoints").await;
        self.fetch_list(&url, options).await
    }

    /// Ask the server which versions it speaks and switch to them.
    ///
    /// This is requested at the bare base URL, outside any version segment.
    /// On success the endpoint configuration takes the reported
    /// `endpointVersion` and `apiVersion`; fields missing from the response
    /// leave the current values alone.
    pub async fn version(&self) -> MtResult<VersionInfo> {
        let base_url = self.endpoint.read().await.base_url.clone();
        let req = RequestDescriptor::new(Method::GET, format!("{base_url}/version"));
        let value = self.send_json(req).await?;
        let reported = VersionInfo::from_value(&value);

        let mut endpoint = self.endpoint.write().await;
        if !reported.endpoint_version.is_empty() {
            endpoint.endpoint_version = reported.endpoint_version.clone();
        }
        if !reported.api_version.is_empty() {
            endpoint.api_version = reported.api_version.clone();
        }
        info!(
            endpoint_version = %endpoint.endpoint_version,
            api_version = %endpoint.api_version,
            "server version negotiated"
        );
        Ok(reported)
    }

    /// Full-text search across sites.
    pub async fn search(&self, query: &str, options: Option<&Params>) -> MtResult<ListPage> {
        let url = self.url("/search").await;
        let params = Params::from_options(options).with("search", query);
        self.fetch_list(&url, Some(&params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_info_accepts_numbers() {
        let info = VersionInfo::from_value(&json!({ "endpointVersion": "v3", "apiVersion": 3.1 }));
        assert_eq!(info.endpoint_version, "v3");
        assert_eq!(info.api_version, "3.1");
    }

    #[test]
    fn test_version_info_missing_fields() {
        assert_eq!(VersionInfo::from_value(&json!({})), VersionInfo::default());
    }
}
