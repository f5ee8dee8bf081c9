//! API Gateway → Axum adapter library.

pub mod config;
pub mod gateway;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServiceConfig;
pub use gateway::{GatewayEvent, GatewayResponse, InvocationHandler};
pub use lifecycle::App;
