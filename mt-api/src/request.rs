//! Request descriptors and parameter maps.
//!
//! A `RequestDescriptor` captures one call before it reaches the transport:
//! verb, absolute URL, flat string parameters and whether the session id may
//! stand in for a missing access token.

use std::collections::BTreeMap;
use std::fmt::Display;

use reqwest::Method;
use serde::Serialize;

use mt_core::error::MtResult;

/// Flat string parameters sent as a query string or a form body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Serialize `object` to JSON text and store it under `key`.
    ///
    /// This is how structured resources travel: as one form field.
    pub fn insert_json<T: Serialize + ?Sized>(&mut self, key: &str, object: &T) -> MtResult<()> {
        let text = serde_json::to_string(object)?;
        self.0.insert(key.to_string(), text);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Start from caller options, or from nothing.
    pub fn from_options(options: Option<&Params>) -> Self {
        options.cloned().unwrap_or_default()
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        let mut params = Params::new();
        for (k, v) in pairs {
            params.insert(k, v);
        }
        params
    }
}

/// One outgoing call, built fresh per request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub params: Params,
    pub use_session_header: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: Params::new(),
            use_session_header: false,
        }
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Allow the session id to authorize this call when no token is held.
    pub fn with_session(mut self) -> Self {
        self.use_session_header = true;
        self
    }

    /// GET, HEAD and DELETE carry parameters in the query string; every other
    /// verb sends them as a form-encoded body.
    pub fn params_in_query(&self) -> bool {
        matches!(self.method, Method::GET | Method::HEAD | Method::DELETE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_from_pairs() {
        let params = Params::from([("limit", "10"), ("offset", "20")]);
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_insert_json_stringifies_object() {
        let mut params = Params::new().with("publish", 1);
        params
            .insert_json("entry", &json!({ "title": "Hello" }))
            .unwrap();
        assert_eq!(params.get("entry"), Some(r#"{"title":"Hello"}"#));
        assert_eq!(params.get("publish"), Some("1"));
    }

    #[test]
    fn test_param_placement_by_verb() {
        assert!(RequestDescriptor::new(Method::GET, "u").params_in_query());
        assert!(RequestDescriptor::new(Method::DELETE, "u").params_in_query());
        assert!(!RequestDescriptor::new(Method::POST, "u").params_in_query());
        assert!(!RequestDescriptor::new(Method::PUT, "u").params_in_query());
    }

    #[test]
    fn test_session_flag() {
        let req = RequestDescriptor::new(Method::POST, "u");
        assert!(!req.use_session_header);
        assert!(req.with_session().use_session_header);
    }
}
