//! The shared library for Mergington, the extracurricular activity signup service.
//!
//! This library holds the pieces the backend and any client agree on: wire data
//! structures, typed keys, error types and logging setup.

pub mod data;
pub mod errors;
pub mod id;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
