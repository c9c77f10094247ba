//! Explicit route table and request dispatch.
//!
//! One radix tree per HTTP method, evaluated in a fixed way: exact method
//! tree first, then a probe of the other trees to tell 405 from 404. The
//! tree structure makes the collection and item routes mutually exclusive —
//! `/blogs` never matches `/blogs/{key}` and vice versa.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, Method};
use matchit::Router as PathTree;
use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;
use crate::store::MemStore;

/// The route table. Build it once at startup; share it behind an `Arc`.
///
/// Registration chains:
///
/// ```rust,no_run
/// # use blogd::{Router, Request, Response, MemStore};
/// # use std::sync::Arc;
/// # async fn list(_: Arc<MemStore>, _: Request) -> Response { Response::text("") }
/// # async fn create(_: Arc<MemStore>, _: Request) -> Response { Response::text("") }
/// let router = Router::new()
///     .get("/blogs", list)
///     .post("/blogs", create);
/// ```
pub struct Router {
    routes: HashMap<Method, PathTree<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::POST, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::PUT, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::DELETE, path, handler)
    }

    /// Registers a handler for a method + path pair. Path parameters use
    /// `{name}` syntax and are retrieved with [`Request::param`].
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting path pattern. Routes are
    /// registered once at startup, so this fails the process immediately
    /// rather than a request later.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Routes one request to completion: handler on a match, explicit 405
    /// when the path exists under a different method, explicit 404 otherwise.
    pub async fn dispatch(
        &self,
        store: Arc<MemStore>,
        method: Method,
        path: &str,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        let response = match self.lookup(&method, path) {
            Some((handler, params)) => {
                let req = Request::new(method.clone(), path.to_owned(), headers, body, params);
                handler.call(store, req).await
            }
            None if self.known_path(&method, path) => Response::method_not_allowed(),
            None => Response::not_found(),
        };

        debug!(%method, path, status = %response.status_code(), "handled");
        response
    }

    fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Whether any *other* method has a route matching `path`.
    fn known_path(&self, method: &Method, path: &str) -> bool {
        self.routes
            .iter()
            .any(|(m, tree)| m != method && tree.at(path).is_ok())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
