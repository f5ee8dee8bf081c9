//! Gateway adapter subsystem.
//!
//! # Data Flow
//! ```text
//! Lambda runtime (LambdaEvent<GatewayEvent>)
//!     → adapter.rs (failure barrier, initialization check, logging)
//!     → request.rs (event → http::Request, context as extension)
//!     → [routing layer]
//!     → response.rs (http::Response → GatewayResponse)
//!     → Lambda runtime
//! ```
//!
//! # Design Decisions
//! - One invocation in, exactly one envelope out
//! - Adapter error paths always answer with `application/json`
//! - Router responses pass through with the framework's own headers

pub mod adapter;
pub mod request;
pub mod response;
pub mod types;

pub use adapter::InvocationHandler;
pub use response::{NOT_INITIALIZED, PROCESSING_FAILED};
pub use types::{GatewayError, GatewayEvent, GatewayResponse};
