//! Read-through cache of user profiles.

use crate::records::UserProfile;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;
use tracing::debug;

/// Profiles keyed by handle, shared for the lifetime of the fetcher.
///
/// Entries are never evicted. Concurrent lookups of the same handle share a
/// single in-flight fetch; a failed fetch leaves the entry empty so the next
/// lookup retries.
#[derive(Debug, Default)]
pub struct ProfileCache {
    entries: Mutex<HashMap<String, Arc<OnceCell<UserProfile>>>>,
}

impl ProfileCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached profile for `handle`, calling `fetch` on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `fetch`.
    pub async fn get_or_fetch<F, Fut, E>(&self, handle: &str, fetch: F) -> Result<UserProfile, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<UserProfile, E>>,
    {
        let cell = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(entries.entry(handle.to_string()).or_default())
        };

        if let Some(profile) = cell.get() {
            debug!(handle, "Profile cache hit");
            return Ok(profile.clone());
        }

        let profile = cell
            .get_or_try_init(|| {
                debug!(handle, "Fetching profile");
                fetch()
            })
            .await?;
        Ok(profile.clone())
    }

    /// Number of resolved profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|cell| cell.initialized())
            .count()
    }

    /// Returns true if no profile has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn profile(handle: &str) -> UserProfile {
        UserProfile {
            handle: handle.to_string(),
            name: handle.to_uppercase(),
            avatar_url: format!("https://avatars.example.com/{handle}"),
            profile_url: format!("https://github.com/{handle}"),
        }
    }

    #[tokio::test]
    async fn second_lookup_is_a_hit() {
        let cache = ProfileCache::new();
        let calls = &AtomicUsize::new(0);
        let fetch = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, String>(profile("octocat"))
        };

        let first = cache.get_or_fetch("octocat", fetch).await.unwrap();
        let second = cache.get_or_fetch("octocat", fetch).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_lookups_share_one_fetch() {
        let cache = ProfileCache::new();
        let calls = &AtomicUsize::new(0);
        let fetch = move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok::<_, String>(profile("hubot"))
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch("hubot", fetch),
            cache.get_or_fetch("hubot", fetch)
        );

        assert_eq!(a.unwrap().handle, "hubot");
        assert_eq!(b.unwrap().handle, "hubot");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let cache = ProfileCache::new();

        let failed = cache
            .get_or_fetch("octocat", || async { Err::<UserProfile, _>("offline") })
            .await;
        assert_eq!(failed, Err("offline"));
        assert!(cache.is_empty());

        let recovered = cache
            .get_or_fetch("octocat", || async { Ok::<_, &str>(profile("octocat")) })
            .await
            .unwrap();
        assert_eq!(recovered.handle, "octocat");
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn handles_are_cached_separately() {
        let cache = ProfileCache::new();
        cache
            .get_or_fetch("a", || async { Ok::<_, String>(profile("a")) })
            .await
            .unwrap();
        let b = cache
            .get_or_fetch("b", || async { Ok::<_, String>(profile("b")) })
            .await
            .unwrap();
        assert_eq!(b.handle, "b");
        assert_eq!(cache.len(), 2);
    }
}
