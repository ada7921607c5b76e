//! Application layer

pub mod commands;
mod handler;
mod request_log;

pub use handler::ServiceHandler;
pub use request_log::*;
