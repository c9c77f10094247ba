//! The blog HTTP surface: route table and handlers.
//!
//! Error mapping is deliberately blunt (see [`crate::error`]): a missing key
//! on Get/Update is 404, and every other handler failure is the uniform 500
//! with a fixed plain-text body. Diagnostics go to the log, never to the
//! caller.

use std::sync::Arc;

use http::StatusCode;
use tracing::warn;

use crate::blog::Blog;
use crate::error::StoreError;
use crate::health;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::store::MemStore;

/// Builds the full route table.
pub fn router() -> Router {
    Router::new()
        .get("/", home)
        .get("/blogs", list_blogs)
        .post("/blogs", create_blog)
        .get("/blogs/{key}", get_blog)
        .put("/blogs/{key}", update_blog)
        .delete("/blogs/{key}", delete_blog)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
}

// GET /
async fn home(_store: Arc<MemStore>, _req: Request) -> Response {
    Response::text("Hello from blogd")
}

// POST /blogs → 200 empty body. No Location header, no echoed key: the
// caller lists or knows the slug.
async fn create_blog(store: Arc<MemStore>, req: Request) -> Response {
    let blog: Blog = match serde_json::from_slice(req.body()) {
        Ok(blog) => blog,
        Err(e) => {
            warn!("rejecting unparseable blog body: {e}");
            return Response::internal_error();
        }
    };

    match store.add(blog) {
        Ok(_key) => Response::status(StatusCode::OK),
        Err(_) => Response::internal_error(),
    }
}

// GET /blogs → the full key → Blog mapping as one JSON object.
async fn list_blogs(store: Arc<MemStore>, _req: Request) -> Response {
    match serde_json::to_vec(&store.list()) {
        Ok(body) => Response::json(body),
        Err(e) => {
            warn!("encoding blog listing failed: {e}");
            Response::internal_error()
        }
    }
}

// GET /blogs/{key}
async fn get_blog(store: Arc<MemStore>, req: Request) -> Response {
    let key = match item_key(&store, &req) {
        Ok(key) => key,
        Err(resp) => return resp,
    };

    match store.get(&key) {
        Ok(blog) => match serde_json::to_vec(&blog) {
            Ok(body) => Response::json(body),
            Err(e) => {
                warn!(%key, "encoding blog failed: {e}");
                Response::internal_error()
            }
        },
        Err(StoreError::NotFound) => Response::not_found(),
    }
}

// PUT /blogs/{key} → full replacement, not a field merge.
async fn update_blog(store: Arc<MemStore>, req: Request) -> Response {
    let key = match item_key(&store, &req) {
        Ok(key) => key,
        Err(resp) => return resp,
    };

    let blog: Blog = match serde_json::from_slice(req.body()) {
        Ok(blog) => blog,
        Err(e) => {
            warn!(%key, "rejecting unparseable blog body: {e}");
            return Response::internal_error();
        }
    };

    match store.update(&key, blog) {
        Ok(()) => Response::status(StatusCode::OK),
        Err(StoreError::NotFound) => Response::not_found(),
    }
}

// DELETE /blogs/{key} → 204 whether or not the key existed.
async fn delete_blog(store: Arc<MemStore>, req: Request) -> Response {
    let key = match item_key(&store, &req) {
        Ok(key) => key,
        Err(resp) => return resp,
    };

    match store.remove(&key) {
        Ok(()) => Response::status(StatusCode::NO_CONTENT),
        Err(_) => Response::internal_error(),
    }
}

/// Extracts and shape-checks the `{key}` path parameter.
///
/// A key that fails shape validation is answered with 500, not 404: the
/// request never names a resource the store could miss on.
fn item_key(store: &MemStore, req: &Request) -> Result<String, Response> {
    let Some(key) = req.param("key") else {
        return Err(Response::internal_error());
    };
    if !store.valid_key(key) {
        warn!(key, "malformed key in path");
        return Err(Response::internal_error());
    }
    Ok(key.to_owned())
}
