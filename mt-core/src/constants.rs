//! Application-wide constants.

/// Application name, used for the data/config directory.
pub const APP_NAME: &str = "MTDataAPI";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default Data API endpoint version segment.
pub const DEFAULT_ENDPOINT_VERSION: &str = "v2";

/// Default client identifier sent with `/authentication`.
pub const DEFAULT_CLIENT_ID: &str = "MTDataAPIClient";

/// Default request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Default cap on `X-MT-Next-Phase-URL` continuations for one job.
pub const DEFAULT_MAX_PUBLISH_PHASES: u32 = 100;

/// Authorization header understood by the Data API.
pub const AUTH_HEADER: &str = "X-MT-Authorization";

/// Continuation header sent by the server for multi-phase jobs.
pub const NEXT_PHASE_URL_HEADER: &str = "X-MT-Next-Phase-URL";

/// Code used for every transport-level failure.
pub const TRANSPORT_ERROR_CODE: &str = "-1";

/// Message used for every transport-level failure.
pub const TRANSPORT_ERROR_MESSAGE: &str = "The operation couldn't be completed.";

/// Encoding labels for the text export endpoints.
pub mod export_encoding {
    pub const ENTRIES: &str = "utf-8";
    pub const LOGS: &str = "shift_jis";
}
