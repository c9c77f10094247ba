//! End-to-end tests driving the route table directly, no sockets involved.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use uuid::Uuid;

use blogd::{Blog, Keying, MemStore, Response, Router, routes};

fn app(keying: Keying) -> (Router, Arc<MemStore>) {
    (routes::router(), Arc::new(MemStore::new(keying)))
}

async fn send(
    router: &Router,
    store: &Arc<MemStore>,
    method: Method,
    path: &str,
    body: &str,
) -> Response {
    router
        .dispatch(
            Arc::clone(store),
            method,
            path,
            HeaderMap::new(),
            Bytes::from(body.to_owned()),
        )
        .await
}

const HELLO_WORLD: &str = r#"{"title":"Hello World","author":"A","likes":0,"comments":[]}"#;

#[tokio::test]
async fn slug_mode_post_then_get_round_trips() {
    let (router, store) = app(Keying::Slug);

    let resp = send(&router, &store, Method::POST, "/blogs", HELLO_WORLD).await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert!(resp.body().is_empty(), "POST echoes nothing");

    let resp = send(&router, &store, Method::GET, "/blogs/hello-world", "").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    let blog: Blog = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(blog.id, "hello-world");
    assert_eq!(blog.title, "Hello World");
    assert_eq!(blog.author, "A");
}

#[tokio::test]
async fn absent_key_is_404_with_fixed_body() {
    let (router, store) = app(Keying::Slug);

    let resp = send(&router, &store, Method::GET, "/blogs/nonexistent-key", "").await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.body(), b"404 Not Found");
}

#[tokio::test]
async fn uuid_mode_lists_one_valid_generated_key() {
    let (router, store) = app(Keying::Uuid);

    send(&router, &store, Method::POST, "/blogs", HELLO_WORLD).await;

    let resp = send(&router, &store, Method::GET, "/blogs", "").await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let listing: HashMap<String, Blog> = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(listing.len(), 1);

    let (key, blog) = listing.iter().next().unwrap();
    assert!(Uuid::try_parse(key).is_ok(), "key {key:?} is not a uuid");
    assert_eq!(&blog.id, key);
    assert_eq!(blog.title, "Hello World");
}

#[tokio::test]
async fn malformed_key_is_500_not_404() {
    let (router, store) = app(Keying::Slug);
    let resp = send(&router, &store, Method::GET, "/blogs/Hello-World", "").await;
    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body(), b"500 Internal Server Error");

    let (router, store) = app(Keying::Uuid);
    let resp = send(&router, &store, Method::GET, "/blogs/not-a-uuid", "").await;
    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unparseable_post_body_is_500() {
    let (router, store) = app(Keying::Slug);
    let resp = send(&router, &store, Method::POST, "/blogs", "{not json").await;
    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.body(), b"500 Internal Server Error");
}

#[tokio::test]
async fn put_replaces_the_record_wholesale() {
    let (router, store) = app(Keying::Slug);
    send(&router, &store, Method::POST, "/blogs", HELLO_WORLD).await;

    let replacement = r#"{"title":"Hello World","author":"B","likes":9,"comments":[]}"#;
    let resp = send(&router, &store, Method::PUT, "/blogs/hello-world", replacement).await;
    assert_eq!(resp.status_code(), StatusCode::OK);

    let resp = send(&router, &store, Method::GET, "/blogs/hello-world", "").await;
    let blog: Blog = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(blog.author, "B");
    assert_eq!(blog.likes, 9);
}

#[tokio::test]
async fn put_absent_key_is_404_and_bad_body_is_500() {
    let (router, store) = app(Keying::Slug);

    let resp = send(&router, &store, Method::PUT, "/blogs/missing-key", HELLO_WORLD).await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);

    send(&router, &store, Method::POST, "/blogs", HELLO_WORLD).await;
    let resp = send(&router, &store, Method::PUT, "/blogs/hello-world", "{not json").await;
    assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn delete_is_204_and_idempotent() {
    let (router, store) = app(Keying::Slug);
    send(&router, &store, Method::POST, "/blogs", HELLO_WORLD).await;

    let resp = send(&router, &store, Method::DELETE, "/blogs/hello-world", "").await;
    assert_eq!(resp.status_code(), StatusCode::NO_CONTENT);

    let resp = send(&router, &store, Method::GET, "/blogs/hello-world", "").await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);

    // a second delete still succeeds
    let resp = send(&router, &store, Method::DELETE, "/blogs/hello-world", "").await;
    assert_eq!(resp.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn colliding_titles_overwrite_instead_of_duplicating() {
    let (router, store) = app(Keying::Slug);
    send(&router, &store, Method::POST, "/blogs", HELLO_WORLD).await;
    send(
        &router,
        &store,
        Method::POST,
        "/blogs",
        r#"{"title":"Hello, World!","author":"B","likes":1,"comments":[]}"#,
    )
    .await;

    let resp = send(&router, &store, Method::GET, "/blogs", "").await;
    let listing: HashMap<String, Blog> = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing["hello-world"].author, "B");
}

#[tokio::test]
async fn unrouted_requests_get_explicit_answers() {
    let (router, store) = app(Keying::Slug);

    // path known under other methods → 405
    let resp = send(&router, &store, Method::PATCH, "/blogs", "").await;
    assert_eq!(resp.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let resp = send(&router, &store, Method::POST, "/blogs/hello-world", "").await;
    assert_eq!(resp.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    // path known nowhere → 404
    let resp = send(&router, &store, Method::GET, "/nope", "").await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(resp.body(), b"404 Not Found");
}

#[tokio::test]
async fn greeting_and_probes_answer() {
    let (router, store) = app(Keying::Uuid);

    let resp = send(&router, &store, Method::GET, "/", "").await;
    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.body(), b"Hello from blogd");

    let resp = send(&router, &store, Method::GET, "/healthz", "").await;
    assert_eq!(resp.body(), b"ok");
    let resp = send(&router, &store, Method::GET, "/readyz", "").await;
    assert_eq!(resp.body(), b"ready");
}
