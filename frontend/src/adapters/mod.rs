//! Browser implementations of the seams defined in `common`.

pub mod http;
pub mod storage;
pub mod timer;

pub use http::HttpBackend;
pub use storage::LocalStorageThemeStore;
pub use timer::TimeoutScheduler;
