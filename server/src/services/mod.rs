//! HTTP surface of the static host.
//!
//! - `config`: `GET /config.json`, the runtime settings read by the app.
//! - `embedded`: every other path, answered from the compiled frontend
//!   bundled into the binary.

pub mod config;
pub mod embedded;
