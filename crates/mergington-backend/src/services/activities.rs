use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activities, Activity};
use mergington::errors::ActivityError;
use mergington::id::{ActivityName, Email};

/// A trait for reading the activity directory and managing rosters.
///
/// The set of activities is fixed for the lifetime of the service; only the
/// participant lists change. The trait is implementation-agnostic so the
/// in-memory store can be replaced by a persistent one.
///
/// # Examples
///
/// ```rust,ignore
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     let name = ActivityName::from("Chess Club");
///     let email = Email::from("tester@example.com");
///
///     service.signup(&name, &email).await?;
///     let activity = service.get(&name).await?;
///     assert!(activity.has_participant(&email));
///
///     service.unregister(&name, &email).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity keyed by name, in a stable order.
    async fn list(&self) -> Result<Activities, Self::Error>;

    /// Retrieves a single activity by its exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if no activity has that name.
    async fn get(&self, name: &ActivityName) -> Result<Activity, Self::Error>;

    /// Appends `email` to the activity's roster.
    ///
    /// Membership is checked with an exact, case-sensitive comparison.
    /// Capacity is not enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the exact email is
    /// already on the roster.
    async fn signup(&self, name: &ActivityName, email: &Email) -> Result<(), Self::Error>;

    /// Removes every roster entry matching `email` case-insensitively and
    /// returns the normalized (trimmed, lower-cased) email that was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, the email is blank, or
    /// nothing on the roster matched.
    async fn unregister(&self, name: &ActivityName, email: &Email) -> Result<Email, Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`, so each roster mutation holds the entry's
/// shard lock for the whole check-and-update. The names are captured once at
/// construction to keep listings in seed order.
pub struct ActivityServiceInMemory {
    order: Vec<ActivityName>,
    activities: DashMap<ActivityName, Activity>,
}

impl ActivityServiceInMemory {
    /// Creates a service holding the default activity seed.
    pub fn new() -> Self {
        Self::with_activities(super::seed::activities())
    }

    /// Creates a service holding the given activities. Later duplicates of a
    /// name replace earlier ones but keep the first position.
    pub fn with_activities(seed: impl IntoIterator<Item = (ActivityName, Activity)>) -> Self {
        let activities = DashMap::new();
        let mut order = Vec::new();
        for (name, activity) in seed {
            if activities.insert(name.clone(), activity).is_none() {
                order.push(name);
            }
        }
        Self { order, activities }
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = ActivityError;

    async fn list(&self) -> Result<Activities, Self::Error> {
        Ok(Activities::new(
            self.order
                .iter()
                .filter_map(|name| {
                    self.activities
                        .get(name)
                        .map(|entry| (name.clone(), entry.value().clone()))
                })
                .collect(),
        ))
    }

    async fn get(&self, name: &ActivityName) -> Result<Activity, Self::Error> {
        self.activities
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or(ActivityError::ActivityNotFound)
    }

    async fn signup(&self, name: &ActivityName, email: &Email) -> Result<(), Self::Error> {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or(ActivityError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp);
        }

        activity.add_participant(email.clone());
        Ok(())
    }

    async fn unregister(&self, name: &ActivityName, email: &Email) -> Result<Email, Self::Error> {
        let mut activity = self
            .activities
            .get_mut(name)
            .ok_or(ActivityError::ActivityNotFound)?;

        if email.is_blank() {
            return Err(ActivityError::EmailRequired);
        }

        let normalized = email.normalized();
        if activity.remove_participant(&normalized) == 0 {
            return Err(ActivityError::ParticipantNotFound);
        }

        Ok(normalized)
    }
}
