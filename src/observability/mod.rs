//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing macros (structured log events)
//!     → logging.rs (subscriber: filter + text/JSON formatter)
//!     → stdout → CloudWatch Logs
//! ```
//!
//! # Design Decisions
//! - Line-oriented logging only; no metrics or span export
//! - Every invocation logs method + path on entry and status on exit

pub mod logging;
