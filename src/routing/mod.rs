//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! http::Request (from the gateway adapter or the local listener)
//!     → TraceLayer (request/response log lines)
//!     → CatchPanicLayer (recovery.rs: panic → 500 JSON)
//!     → router.rs (route table)
//!     → handlers.rs (health / hello)
//!     → http::Response
//! ```
//!
//! # Design Decisions
//! - Two fixed routes, compiled at startup, immutable at runtime
//! - Deterministic: same input always yields the same response
//! - Unknown routes get the framework's 404, never a 500

pub mod handlers;
pub mod recovery;
pub mod router;

pub use router::{build_router, with_middleware, HEALTH_PATH, HELLO_PATH};
