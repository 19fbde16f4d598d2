//! Backend services for activity and participant management.
//!
//! This module provides the service layer abstraction over the activity
//! directory and an in-memory implementation seeded at startup.

pub mod activities;
pub mod seed;

pub use activities::*;
