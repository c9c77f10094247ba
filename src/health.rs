//! Liveness and readiness probe handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can it serve traffic? |

use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;
use crate::store::MemStore;

/// Always `200 OK` with body `"ok"`. If the process can answer HTTP at all,
/// it is alive.
pub async fn liveness(_store: Arc<MemStore>, _req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"`. The store has no warm-up or external
/// dependencies, so readiness follows liveness.
pub async fn readiness(_store: Arc<MemStore>, _req: Request) -> Response {
    Response::text("ready")
}
