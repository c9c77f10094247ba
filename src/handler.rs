//! Handler trait and type erasure.
//!
//! The router stores handlers of *different* concrete types in one map, so
//! each registered `async fn` is erased behind `dyn ErasedHandler`:
//!
//! ```text
//! async fn get_blog(store: Arc<MemStore>, req: Request) -> Response
//!        ↓ router registration: handler.into_boxed_handler()
//! Arc<dyn ErasedHandler>      — one vtable dispatch per request
//!        ↓ call(store, req)
//! Pin<Box<dyn Future<Output = Response>>>
//! ```
//!
//! Handlers receive the store explicitly — it is constructed once in `main`
//! and threaded through; there is no ambient global.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::store::MemStore;

/// A heap-allocated, type-erased future resolving to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of [`Handler::into_boxed_handler`].
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, store: Arc<MemStore>, req: Request) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid route handler.
///
/// You never implement this yourself; it is automatically satisfied for any
///
/// ```text
/// async fn name(store: Arc<MemStore>, req: Request) -> impl IntoResponse
/// ```
///
/// The trait is sealed: only the blanket impl below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Arc<MemStore>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Arc<MemStore>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Newtype bridging a concrete handler `F` into the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Arc<MemStore>, Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, store: Arc<MemStore>, req: Request) -> BoxFuture {
        let fut = (self.0)(store, req);
        Box::pin(async move { fut.await.into_response() })
    }
}
