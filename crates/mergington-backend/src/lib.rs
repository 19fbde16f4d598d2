//! The Mergington activity directory service.
//!
//! Students list extracurricular activities, sign up for them and
//! unregister from them over a small JSON API. State is held in memory and
//! seeded at startup.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

use services::ActivityServiceInMemory;

/// State shared by every request handler.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(activities: ActivityServiceInMemory) -> Self {
        Self {
            activities,
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ActivityServiceInMemory::default())
    }
}
