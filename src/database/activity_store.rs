use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::seed;
use crate::error::ConfigError;
use crate::models::Activity;

pub type ActivityMap = BTreeMap<String, Activity>;

/// In-memory activity directory shared by all request handlers.
///
/// Cloning is cheap and yields a handle to the same map. Writers hold the
/// lock for the whole check-then-mutate step.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddParticipant {
    Added(Activity),
    AlreadyPresent,
    UnknownActivity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveParticipant {
    Removed,
    NotPresent,
    UnknownActivity,
}

impl ActivityStore {
    pub fn from_activities(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Store holding the built-in Mergington catalog.
    pub fn seeded() -> Self {
        Self::from_activities(seed::default_activities())
    }

    /// Store holding the catalog read from a JSON file shaped like the
    /// `GET /activities` response.
    pub fn load_seed_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let activities: ActivityMap =
            serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_activities(
            activities
                .into_iter()
                .map(|(name, activity)| (name, dedup_participants(activity)))
                .collect(),
        ))
    }

    pub async fn snapshot(&self) -> ActivityMap {
        self.inner.read().await.clone()
    }

    pub async fn add_participant(&self, name: &str, email: &str) -> AddParticipant {
        let mut activities = self.inner.write().await;
        let Some(activity) = activities.get_mut(name) else {
            return AddParticipant::UnknownActivity;
        };
        if activity.has_participant(email) {
            return AddParticipant::AlreadyPresent;
        }
        activity.participants.push(email.to_string());
        AddParticipant::Added(activity.clone())
    }

    pub async fn remove_participant(&self, name: &str, email: &str) -> RemoveParticipant {
        let mut activities = self.inner.write().await;
        let Some(activity) = activities.get_mut(name) else {
            return RemoveParticipant::UnknownActivity;
        };
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return RemoveParticipant::NotPresent;
        };
        activity.participants.remove(pos);
        RemoveParticipant::Removed
    }
}

// Seed files are hand-edited; keep the first occurrence of each email.
fn dedup_participants(mut activity: Activity) -> Activity {
    let mut seen = std::collections::HashSet::new();
    activity.participants.retain(|p| seen.insert(p.clone()));
    activity
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store_with_chess() -> ActivityStore {
        let mut map = ActivityMap::new();
        map.insert(
            "Chess Club".to_string(),
            Activity::new("Chess", "Fridays", 2, &["a@mergington.edu"]),
        );
        ActivityStore::from_activities(map)
    }

    #[tokio::test]
    async fn add_participant_appends_in_order() {
        let store = store_with_chess();
        let outcome = store.add_participant("Chess Club", "b@mergington.edu").await;
        let AddParticipant::Added(activity) = outcome else {
            panic!("expected Added, got {:?}", outcome);
        };
        assert_eq!(activity.participants, vec!["a@mergington.edu", "b@mergington.edu"]);
    }

    #[tokio::test]
    async fn add_participant_rejects_duplicates_and_unknown_names() {
        let store = store_with_chess();
        assert_eq!(
            store.add_participant("Chess Club", "a@mergington.edu").await,
            AddParticipant::AlreadyPresent
        );
        assert_eq!(
            store.add_participant("Knitting", "a@mergington.edu").await,
            AddParticipant::UnknownActivity
        );
        assert_eq!(store.snapshot().await["Chess Club"].participants.len(), 1);
    }

    #[tokio::test]
    async fn remove_participant_outcomes() {
        let store = store_with_chess();
        assert_eq!(
            store.remove_participant("Chess Club", "z@mergington.edu").await,
            RemoveParticipant::NotPresent
        );
        assert_eq!(
            store.remove_participant("Knitting", "a@mergington.edu").await,
            RemoveParticipant::UnknownActivity
        );
        assert_eq!(
            store.remove_participant("Chess Club", "a@mergington.edu").await,
            RemoveParticipant::Removed
        );
        assert!(store.snapshot().await["Chess Club"].participants.is_empty());
    }

    #[tokio::test]
    async fn remove_participant_keeps_signup_order_of_the_rest() {
        let store = store_with_chess();
        store.add_participant("Chess Club", "b@mergington.edu").await;
        store.add_participant("Chess Club", "c@mergington.edu").await;

        assert_eq!(
            store.remove_participant("Chess Club", "b@mergington.edu").await,
            RemoveParticipant::Removed
        );
        assert_eq!(
            store.snapshot().await["Chess Club"].participants,
            vec!["a@mergington.edu", "c@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = store_with_chess();
        let other = store.clone();
        other.add_participant("Chess Club", "b@mergington.edu").await;
        assert!(store.snapshot().await["Chess Club"].has_participant("b@mergington.edu"));
    }

    #[tokio::test]
    async fn load_seed_file_reads_json_and_drops_duplicate_emails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"Robotics": {{"description": "Build robots", "schedule": "Mondays",
                "max_participants": 5,
                "participants": ["x@mergington.edu", "x@mergington.edu", "y@mergington.edu"]}}}}"#
        )
        .unwrap();

        let store = ActivityStore::load_seed_file(file.path()).unwrap();
        let activities = store.snapshot().await;
        assert_eq!(activities["Robotics"].participants, vec!["x@mergington.edu", "y@mergington.edu"]);
    }

    #[test]
    fn load_seed_file_reports_missing_and_malformed_files() {
        let missing = ActivityStore::load_seed_file(Path::new("/nonexistent/seed.json"));
        assert!(matches!(missing, Err(ConfigError::SeedRead { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let malformed = ActivityStore::load_seed_file(file.path());
        assert!(matches!(malformed, Err(ConfigError::SeedParse { .. })));
    }
}
