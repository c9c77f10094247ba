//! Incoming HTTP request view.

use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, Method};

/// One incoming request, with the body already collected into memory and
/// path parameters extracted by the router.
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        headers: HeaderMap,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self { method, path, headers, body, params }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The collected request body. Parse it with whatever you like —
    /// `serde_json::from_slice` in this crate's handlers.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/blogs/{key}`, `req.param("key")` on `/blogs/hello-world`
    /// returns `Some("hello-world")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
