//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures of the activity directory operations.
///
/// Every variant is a client error; the messages are returned verbatim to
/// callers in the `detail` field of the error body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Email is required")]
    EmailRequired,
    #[error("Participant not found for this activity")]
    ParticipantNotFound,
}

impl ActivityError {
    /// Whether the error means the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ActivityError::ActivityNotFound | ActivityError::ParticipantNotFound)
    }
}
