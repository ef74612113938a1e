//! rterm server library
//!
//! Configuration, logging, session management and the HTTP routes behind
//! the `rtermd` binary.

pub mod config;
pub mod http;
pub mod logging;
pub mod session;

pub use config::{LoggingConfig, ServerConfig, SessionMode};
pub use http::{router, serve, serve_on, AppState};
pub use session::Sessions;
