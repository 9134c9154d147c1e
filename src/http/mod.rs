//! Dashboard HTTP API

pub mod handler;
pub mod server;

pub use handler::{AppState, NetworkRequest};
pub use server::{router, HttpServer};
