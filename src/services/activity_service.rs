use tracing::{info, warn};

use crate::database::activity_store::{ActivityMap, ActivityStore, AddParticipant, RemoveParticipant};
use crate::error::ActivityError;

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.snapshot().await
}

/// Adds `email` to the roster of `activity_name`.
///
/// Capacity is tracked but not enforced: a signup past `max_participants`
/// still succeeds and is only logged.
pub async fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    match store.add_participant(activity_name, email).await {
        AddParticipant::Added(activity) => {
            if activity.is_over_capacity() {
                warn!(
                    activity = %activity_name,
                    participants = activity.participants.len(),
                    max_participants = activity.max_participants,
                    "signup took activity over capacity"
                );
            }
            info!(activity = %activity_name, email = %email, "signup");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        AddParticipant::AlreadyPresent => {
            warn!(activity = %activity_name, email = %email, "signup rejected: already signed up");
            Err(ActivityError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })
        }
        AddParticipant::UnknownActivity => {
            warn!(activity = %activity_name, "signup rejected: unknown activity");
            Err(ActivityError::NotFound {
                activity: activity_name.to_string(),
            })
        }
    }
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    match store.remove_participant(activity_name, email).await {
        RemoveParticipant::Removed => {
            info!(activity = %activity_name, email = %email, "unregister");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        RemoveParticipant::NotPresent => {
            warn!(activity = %activity_name, email = %email, "unregister rejected: not registered");
            Err(ActivityError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })
        }
        RemoveParticipant::UnknownActivity => {
            warn!(activity = %activity_name, "unregister rejected: unknown activity");
            Err(ActivityError::NotFound {
                activity: activity_name.to_string(),
            })
        }
    }
}
