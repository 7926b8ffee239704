//! User records and the client-side user cache.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

use crate::services;

/// A CodeBros member record as served by `/api/users/{id}`.
///
/// Everything beyond the identity fields is optional: freshly registered
/// members start with an almost empty profile and fill it in over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub profile_image: Option<String>,
    pub experience_level: Option<String>,
    pub open_to_collaborate: Option<bool>,
    pub is_online: Option<bool>,
    /// Unix seconds of the member's last activity
    pub last_seen: Option<i64>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Initials for the avatar placeholder (first letter of each name)
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Cache entry: the record plus its fetch time for TTL checks
#[derive(Debug, Clone)]
pub struct CachedUser {
    pub user: User,
    pub fetched_at: DateTime<Utc>,
}

/// Global user cache (id -> record). LRU-bounded so a long browsing session
/// cannot grow memory without limit.
pub static USER_CACHE: GlobalSignal<LruCache<i64, CachedUser>> =
    Signal::global(|| LruCache::new(NonZeroUsize::new(500).unwrap()));

/// Cache TTL in seconds (5 minutes)
const CACHE_TTL_SECONDS: i64 = 300;

/// Get a user from cache only, ignoring stale entries (synchronous)
pub fn get_cached_user(id: i64) -> Option<User> {
    USER_CACHE.read().peek(&id).and_then(|cached| {
        let age = Utc::now().signed_duration_since(cached.fetched_at);
        if age.num_seconds() < CACHE_TTL_SECONDS {
            Some(cached.user.clone())
        } else {
            None
        }
    })
}

/// Put a freshly fetched record into the cache
pub fn insert_user(user: User) {
    let id = user.id;
    let entry = CachedUser {
        user,
        fetched_at: Utc::now(),
    };
    USER_CACHE.write().put(id, entry);
}

/// Two-tier load: fresh cache hit first (instant, no network), then the API.
pub async fn get_or_fetch_user(id: i64) -> Result<User, String> {
    if let Some(user) = get_cached_user(id) {
        log::debug!("Loaded user {} from cache", id);
        return Ok(user);
    }

    log::info!("Fetching user {} from API", id);
    let user = services::users::fetch_user(id).await?;
    insert_user(user.clone());
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "username": "adal",
            "email": "ada@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "title": "Engine Developer",
            "bio": "Working notes on the Analytical Engine",
            "skills": ["Rust", "Analysis"],
            "profileImage": "https://example.com/ada.png",
            "experienceLevel": "senior",
            "openToCollaborate": true,
            "isOnline": false,
            "lastSeen": 1700000000
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(
            user.profile_image.as_deref(),
            Some("https://example.com/ada.png")
        );
        assert_eq!(user.experience_level.as_deref(), Some("senior"));
        assert_eq!(user.open_to_collaborate, Some(true));
        assert_eq!(user.last_seen, Some(1_700_000_000));
    }

    #[test]
    fn test_user_tolerates_sparse_records() {
        // Fresh members have little more than a name
        let json = r#"{"id": 3, "firstName": "Sam", "lastName": "Lee"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, None);
        assert_eq!(user.skills, None);
        assert_eq!(user.is_online, None);
        assert_eq!(user.full_name(), "Sam Lee");
    }

    #[test]
    fn test_initials_uppercased() {
        let json = r#"{"id": 3, "firstName": "sam", "lastName": "lee"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.initials(), "SL");
    }
}
