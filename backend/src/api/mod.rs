//! HTTP API module.
//!
//! This module provides the relay HTTP server, its request types and the
//! relay activity log.

pub mod server;
pub mod types;
pub mod logs;

pub use server::{router, start_server};
pub use types::*;
pub use logs::*;
