//! Shared, browser-independent core of the Paddler admin front end.
//!
//! Everything in this crate compiles natively so it can be unit tested
//! without a browser: the backend data model, the request catalogue, the
//! tabular data model and its grid layout, formatting helpers, the debounce
//! state machine, and the page controllers that turn form state into backend
//! requests and form reports. The `frontend` crate wires these into Yew
//! components; the `server` crate reuses the runtime configuration types.

pub mod api;
pub mod config;
pub mod dashboard;
pub mod debounce;
pub mod form;
pub mod format;
pub mod model;
pub mod pages;
pub mod report;
pub mod route;
pub mod table;
pub mod theme;
