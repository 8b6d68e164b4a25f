//! Movable Type Data API - async client for the Movable Type REST API.
//!
//! This crate wraps the Data API of a Movable Type installation behind typed
//! method calls on `DataApi`. It keeps the session and access token of one
//! signed-in user, sends structured resources as JSON form fields, follows
//! multi-phase publish jobs, uploads files with progress reporting and
//! decodes the text export endpoints.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod request;
pub mod resources;

// Re-export key types
pub use auth::Credentials;
pub use client::{DataApi, EndpointConfig};
pub use endpoints::plugins::ALL_PLUGINS;
pub use endpoints::stats::{StatsMetric, StatsTarget};
pub use endpoints::system::VersionInfo;
pub use envelope::{Envelope, ErrorBody, ListPage};
pub use request::{Params, RequestDescriptor};
pub use resources::{Resource, Verb};
