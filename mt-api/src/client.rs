//! HTTP client for the Movable Type Data API.
//!
//! `DataApi` owns the endpoint configuration and the credentials of one
//! client, builds every request from a `RequestDescriptor`, and implements
//! the generic operations the resource methods are layered on: list fetch,
//! verb actions, multi-phase jobs, multipart upload and text export.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use encoding_rs::Encoding;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use mt_core::config::ServerConfig;
use mt_core::constants::{AUTH_HEADER, NEXT_PHASE_URL_HEADER};
use mt_core::error::{MtError, MtResult};

use crate::auth::Credentials;
use crate::envelope::{Envelope, ListPage};
use crate::request::{Params, RequestDescriptor};

/// Size of the body chunks handed to the transport during an upload.
const UPLOAD_CHUNK_SIZE: usize = 16 * 1024;

lazy_static::lazy_static! {
    static ref SHARED: Result<DataApi, String> =
        DataApi::new(&ServerConfig::default()).map_err(|e| e.to_string());
}

/// Where requests go. Only `version()` changes this as a side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Data API script URL without a trailing slash.
    pub base_url: String,
    /// Version path segment, e.g. "v2".
    pub endpoint_version: String,
    /// Server-reported API version; empty until `version()` succeeds.
    pub api_version: String,
}

impl EndpointConfig {
    /// `<base_url>/<endpoint_version>`.
    pub fn api_url(&self) -> String {
        format!("{}/{}", self.base_url, self.endpoint_version)
    }
}

/// Client for one Data API installation.
///
/// Cloning is cheap; clones share endpoint configuration and credentials.
#[derive(Clone)]
pub struct DataApi {
    inner: Client,
    pub(crate) endpoint: Arc<RwLock<EndpointConfig>>,
    pub(crate) credentials: Arc<RwLock<Credentials>>,
    client_id: String,
    max_phases: u32,
    pub(crate) entries_encoding: &'static Encoding,
    pub(crate) logs_encoding: &'static Encoding,
}

impl DataApi {
    /// Create a client from server configuration.
    pub fn new(config: &ServerConfig) -> MtResult<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .connect_timeout(Duration::from_secs(15));

        if config.accept_self_signed_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if config.max_publish_phases == 0 {
            return Err(MtError::Config(
                "server.max_publish_phases must be at least 1".into(),
            ));
        }

        let inner = builder
            .build()
            .map_err(|e| MtError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            endpoint: Arc::new(RwLock::new(EndpointConfig {
                base_url: mt_core::AppConfig::sanitize_base_url(&config.base_url),
                endpoint_version: config.endpoint_version.clone(),
                api_version: String::new(),
            })),
            credentials: Arc::new(RwLock::new(Credentials::with_basic_auth(
                &config.basic_auth_username,
                &config.basic_auth_password,
            ))),
            client_id: config.client_id.clone(),
            max_phases: config.max_publish_phases,
            entries_encoding: resolve_encoding(&config.export_entries_encoding)?,
            logs_encoding: resolve_encoding(&config.export_logs_encoding)?,
        })
    }

    /// Process-wide default client, built from default configuration.
    ///
    /// Point it somewhere with `set_base_url` before use. Independent
    /// clients should be created with `DataApi::new` instead.
    ///
    /// Pooled connections belong to the tokio runtime that opened them, so
    /// the shared instance must only be used from a single runtime.
    pub fn shared() -> MtResult<&'static DataApi> {
        SHARED
            .as_ref()
            .map_err(|e| MtError::Internal(format!("shared client unavailable: {e}")))
    }

    /// Client identifier sent with `/authentication`.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Replace the client identifier.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    // --- Endpoint configuration ---

    /// Snapshot of the endpoint configuration.
    pub async fn endpoint(&self) -> EndpointConfig {
        self.endpoint.read().await.clone()
    }

    /// Point the client at another Data API script.
    pub async fn set_base_url(&self, base_url: &str) {
        let sanitized = mt_core::AppConfig::sanitize_base_url(base_url);
        debug!("base url set to {sanitized}");
        self.endpoint.write().await.base_url = sanitized;
    }

    /// Select the endpoint version path segment.
    pub async fn set_endpoint_version(&self, version: &str) {
        self.endpoint.write().await.endpoint_version = version.to_string();
    }

    /// `<base_url>/<endpoint_version>`.
    pub async fn api_url(&self) -> String {
        self.endpoint.read().await.api_url()
    }

    /// Absolute URL for an API path such as "/sites/1/entries".
    pub(crate) async fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url().await)
    }

    /// Resolve a continuation URL sent in `X-MT-Next-Phase-URL`.
    async fn phase_url(&self, next: &str) -> String {
        if next.starts_with("http://") || next.starts_with("https://") {
            next.to_string()
        } else {
            format!("{}/{}", self.api_url().await, next.trim_start_matches('/'))
        }
    }

    // --- Credentials ---

    /// Snapshot of the stored credentials.
    pub async fn credentials(&self) -> Credentials {
        self.credentials.read().await.clone()
    }

    /// Set HTTP basic auth sent with every request.
    pub async fn set_basic_auth(&self, username: &str, password: &str) {
        self.credentials.write().await.set_basic_auth(username, password);
    }

    /// Forget the access token without contacting the server.
    pub async fn reset_token(&self) {
        self.credentials.write().await.reset_token();
    }

    /// Forget the session id without contacting the server.
    pub async fn reset_session(&self) {
        self.credentials.write().await.reset_session();
    }

    /// Forget token and session without contacting the server.
    pub async fn reset_auth(&self) {
        self.credentials.write().await.reset();
        info!("credentials cleared");
    }

    // --- Request building ---

    /// Attach `X-MT-Authorization` and basic auth from the current credentials.
    async fn authorize(&self, mut builder: RequestBuilder, use_session: bool) -> RequestBuilder {
        let creds = self.credentials.read().await;
        if let Some(value) = creds.auth_header(use_session) {
            builder = builder.header(AUTH_HEADER, value);
        }
        if let Some((user, pass)) = creds.basic_auth() {
            builder = builder.basic_auth(user, Some(pass));
        }
        builder
    }

    async fn build_request(&self, req: &RequestDescriptor) -> RequestBuilder {
        let mut builder = self.inner.request(req.method.clone(), &req.url);
        if !req.params.is_empty() {
            builder = if req.params_in_query() {
                builder.query(&req.params)
            } else {
                builder.form(&req.params)
            };
        }
        self.authorize(builder, req.use_session_header).await
    }

    /// Send a request. Every transport failure becomes the generic `Api` error.
    async fn execute(&self, req: RequestDescriptor) -> MtResult<Response> {
        debug!("{} {}", req.method, req.url);
        let builder = self.build_request(&req).await;
        builder.send().await.map_err(transport_error)
    }

    async fn read_body(response: Response) -> MtResult<(HeaderMap, Bytes)> {
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(transport_error)?;
        Ok((headers, body))
    }

    /// Send and parse the envelope, keeping response headers.
    async fn send_envelope(&self, req: RequestDescriptor) -> MtResult<(HeaderMap, Envelope)> {
        let response = self.execute(req).await?;
        let (headers, body) = Self::read_body(response).await?;
        Ok((headers, Envelope::from_slice(&body)?))
    }

    /// Send and collapse the envelope into a result.
    pub(crate) async fn send_json(&self, req: RequestDescriptor) -> MtResult<Value> {
        let (_, envelope) = self.send_envelope(req).await?;
        envelope.into_result()
    }

    // --- Generic operations ---

    /// GET a collection and project it into a `ListPage`.
    pub async fn fetch_list(&self, url: &str, params: Option<&Params>) -> MtResult<ListPage> {
        let req = RequestDescriptor::new(Method::GET, url).params(Params::from_options(params));
        let value = self.send_json(req).await?;
        Ok(ListPage::from_value(&value))
    }

    /// Issue `method` on `url`, sending `object` as JSON text in the form
    /// field `name` alongside the flat `options`.
    pub async fn action(
        &self,
        name: &str,
        method: Method,
        url: &str,
        object: Option<&Value>,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let mut params = Params::from_options(options);
        if let Some(object) = object {
            params.insert_json(name, object)?;
        }
        self.send_json(RequestDescriptor::new(method, url).params(params))
            .await
    }

    /// GET returning the parsed envelope.
    pub async fn get(&self, url: &str, params: Option<&Params>) -> MtResult<Value> {
        self.action("", Method::GET, url, None, params).await
    }

    /// POST returning the parsed envelope.
    pub async fn post(&self, url: &str, params: Option<&Params>) -> MtResult<Value> {
        self.action("", Method::POST, url, None, params).await
    }

    /// PUT returning the parsed envelope.
    pub async fn put(&self, url: &str, params: Option<&Params>) -> MtResult<Value> {
        self.action("", Method::PUT, url, None, params).await
    }

    /// DELETE returning the parsed envelope.
    pub async fn delete(&self, url: &str, params: Option<&Params>) -> MtResult<Value> {
        self.action("", Method::DELETE, url, None, params).await
    }

    /// Drive a server-side job through its phases.
    ///
    /// Each response either completes the job (`status == "Complete"` or an
    /// empty `restIds`) or names the next phase in `X-MT-Next-Phase-URL`,
    /// which is requested with the same options. Phases run one at a time,
    /// at most `max_publish_phases` of them.
    pub async fn repeat_action(
        &self,
        method: Method,
        url: &str,
        options: Option<&Params>,
    ) -> MtResult<Value> {
        let mut url = url.to_string();
        for phase in 1..=self.max_phases {
            let req = RequestDescriptor::new(method.clone(), url.as_str())
                .params(Params::from_options(options));
            let (headers, envelope) = self.send_envelope(req).await?;
            let value = envelope.into_result()?;

            if is_complete(&value) {
                debug!(phase, "job complete");
                return Ok(value);
            }

            let next = headers
                .get(NEXT_PHASE_URL_HEADER)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    warn!("job incomplete but no {NEXT_PHASE_URL_HEADER} header");
                    MtError::transport()
                })?;
            url = self.phase_url(next).await;
            debug!(phase, "continuing with {url}");
        }

        warn!("job still incomplete after {} phases", self.max_phases);
        Err(MtError::PhaseLimitExceeded(self.max_phases))
    }

    /// Upload `data` as the multipart `file` part, plus one text part per
    /// extra field.
    pub async fn upload(
        &self,
        data: Vec<u8>,
        file_name: &str,
        url: &str,
        extra_fields: Option<&Params>,
    ) -> MtResult<Value> {
        self.upload_with_progress(data, file_name, url, extra_fields, |_| {})
            .await
    }

    /// Upload with progress reporting.
    ///
    /// `progress` receives the fraction of the file handed to the transport,
    /// from `0.0` up to `1.0`.
    pub async fn upload_with_progress<F>(
        &self,
        data: Vec<u8>,
        file_name: &str,
        url: &str,
        extra_fields: Option<&Params>,
        progress: F,
    ) -> MtResult<Value>
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let length = data.len() as u64;
        let file_part = Part::stream_with_length(progress_body(data, progress), length)
            .file_name(file_name.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| MtError::Internal(format!("invalid mime type: {e}")))?;

        let mut form = Form::new();
        if let Some(fields) = extra_fields {
            for (key, value) in fields.iter() {
                form = form.text(key.to_string(), value.to_string());
            }
        }
        let form = form.part("file", file_part);

        debug!("POST (multipart) {url} ({length} bytes)");
        let builder = self.inner.post(url).multipart(form);
        let builder = self.authorize(builder, false).await;
        let response = builder.send().await.map_err(transport_error)?;

        let (_, body) = Self::read_body(response).await?;
        Envelope::from_slice(&body)?.into_result()
    }

    /// GET a text export, decoded with `encoding`.
    ///
    /// A body that starts with `{"error":` is treated as an error envelope.
    /// Any other body on a non-2xx status is the generic transport error.
    pub async fn fetch_text(
        &self,
        url: &str,
        params: Option<&Params>,
        encoding: &'static Encoding,
    ) -> MtResult<String> {
        let req = RequestDescriptor::new(Method::GET, url).params(Params::from_options(params));
        let response = self.execute(req).await?;
        let status = response.status();
        let (_, body) = Self::read_body(response).await?;
        if !status.is_success() && !Envelope::is_error_text(&body) {
            warn!("export failed with status {status}");
            return Err(MtError::transport());
        }
        Envelope::sniff_text(&body, encoding)
    }
}

impl std::fmt::Debug for DataApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataApi")
            .field("client_id", &self.client_id)
            .field("max_phases", &self.max_phases)
            .finish_non_exhaustive()
    }
}

/// Whether a job response says there is nothing left to do.
fn is_complete(value: &Value) -> bool {
    value.get("status").and_then(Value::as_str) == Some("Complete")
        || value.get("restIds").and_then(Value::as_str) == Some("")
}

/// Log the cause and collapse into the generic transport error.
fn transport_error(e: reqwest::Error) -> MtError {
    if e.is_timeout() {
        warn!("request timed out: {e}");
    } else if e.is_connect() {
        warn!("connection failed: {e}");
    } else {
        warn!("transport error: {e}");
    }
    MtError::transport()
}

fn resolve_encoding(label: &str) -> MtResult<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| MtError::Config(format!("unknown text encoding: {label}")))
}

/// Stream `data` in chunks, reporting the fraction sent as each chunk is
/// pulled by the transport.
fn progress_body<F>(data: Vec<u8>, progress: F) -> reqwest::Body
where
    F: Fn(f64) + Send + Sync + 'static,
{
    let total = data.len();
    let data = Bytes::from(data);
    let mut chunks: Vec<Bytes> = (0..total)
        .step_by(UPLOAD_CHUNK_SIZE)
        .map(|start| data.slice(start..(start + UPLOAD_CHUNK_SIZE).min(total)))
        .collect();
    if chunks.is_empty() {
        chunks.push(Bytes::new());
    }

    let mut sent = 0usize;
    let stream = futures::stream::iter(chunks.into_iter().map(move |chunk| {
        sent += chunk.len();
        let fraction = if total == 0 {
            1.0
        } else {
            sent as f64 / total as f64
        };
        progress(fraction);
        Ok::<Bytes, std::io::Error>(chunk)
    }));
    reqwest::Body::wrap_stream(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> ServerConfig {
        ServerConfig::with_base_url("http://localhost/mt/mt-data-api.cgi/")
    }

    #[tokio::test]
    async fn test_api_url() {
        let api = DataApi::new(&test_config()).unwrap();
        assert_eq!(api.api_url().await, "http://localhost/mt/mt-data-api.cgi/v2");
        api.set_endpoint_version("v3").await;
        assert_eq!(
            api.url("/sites").await,
            "http://localhost/mt/mt-data-api.cgi/v3/sites"
        );
    }

    #[tokio::test]
    async fn test_phase_url_resolution() {
        let api = DataApi::new(&test_config()).unwrap();
        assert_eq!(
            api.phase_url("/publish/entries?ids=2").await,
            "http://localhost/mt/mt-data-api.cgi/v2/publish/entries?ids=2"
        );
        assert_eq!(
            api.phase_url("https://other/x").await,
            "https://other/x"
        );
    }

    #[tokio::test]
    async fn test_clones_share_credentials() {
        let api = DataApi::new(&test_config()).unwrap();
        let clone = api.clone();
        api.credentials.write().await.set_access_token("abc");
        assert_eq!(clone.credentials().await.access_token(), "abc");
        clone.reset_auth().await;
        assert!(!api.credentials().await.has_token());
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let mut config = test_config();
        config.export_logs_encoding = "klingon".into();
        assert!(matches!(DataApi::new(&config), Err(MtError::Config(_))));
    }

    #[test]
    fn test_zero_phase_cap_rejected() {
        let mut config = test_config();
        config.max_publish_phases = 0;
        assert!(matches!(DataApi::new(&config), Err(MtError::Config(_))));

        config.max_publish_phases = 1;
        assert!(DataApi::new(&config).is_ok());
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete(&json!({ "status": "Complete" })));
        assert!(is_complete(&json!({ "status": "Publishing", "restIds": "" })));
        assert!(!is_complete(&json!({ "status": "Working", "restIds": "1,2,3" })));
        assert!(!is_complete(&json!({})));
    }

    #[test]
    fn test_shared_client_is_singleton() {
        let a = DataApi::shared().unwrap();
        let b = DataApi::shared().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.client_id(), "MTDataAPIClient");
    }
}
