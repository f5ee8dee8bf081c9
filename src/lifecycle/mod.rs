//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Cold start (startup.rs):
//!     Load config → Init logging → Build router behind barrier → App
//!
//! Inside Lambda:
//!     App → InvocationHandler → lambda_runtime::run (invocation loop)
//!
//! Outside Lambda (local.rs):
//!     App → axum::serve on local.bind_address → shutdown.rs (Ctrl+C)
//! ```
//!
//! # Design Decisions
//! - Router construction happens-before the first invocation
//! - Construction faults degrade to 500 responses, never a crash

pub mod local;
pub mod shutdown;
pub mod startup;

pub use startup::{bootstrap, try_bootstrap, App, InitError};
