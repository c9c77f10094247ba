//! # blogd
//!
//! A minimal HTTP CRUD service for blog posts. In-memory storage, an
//! explicit route table, JSON at the boundary. Nothing more. Nothing less.
//!
//! ## The shape of it
//!
//! Two pieces, composed trivially:
//!
//! - [`MemStore`] — a mutex-guarded map from key to [`Blog`] with
//!   add/get/list/update/remove. Keys are either random 128-bit identifiers
//!   or slugs derived from the title, chosen once at startup
//!   ([`Keying`]).
//! - [`Router`] — one radix tree per HTTP method, dispatching each request
//!   to a handler that talks to the store and answers JSON.
//!
//! Control flow: request → route lookup → store operation → JSON response.
//! No background tasks, no queues, no persistence — the store dies with the
//! process.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use blogd::{Keying, MemStore, Server, routes};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(MemStore::new(Keying::Slug));
//!     let router = routes::router();
//!
//!     Server::bind(([0, 0, 0, 0], 8080).into())
//!         .serve(router, store)
//!         .await
//!         .expect("server error");
//! }
//! ```

mod blog;
mod config;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;
mod store;

pub mod health;
pub mod routes;
pub mod slug;

pub use blog::{Blog, Comment};
pub use config::Config;
pub use error::{Error, StoreError};
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use store::{Keying, MemStore};
