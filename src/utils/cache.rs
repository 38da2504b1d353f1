use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Small TTL cache shared by the API clients so repeated fetches within
/// the window reuse the last response instead of hitting the provider.
#[derive(Debug, Clone)]
pub struct TtlCache<T> {
    entries: Arc<Mutex<HashMap<String, (T, Instant)>>>,
    ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.lock().await;
        entries.get(key).and_then(|(value, inserted)| {
            if inserted.elapsed() < self.ttl {
                Some(value.clone())
            } else {
                None
            }
        })
    }

    pub async fn set(&self, key: &str, value: T) {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), (value, Instant::now()));
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_within_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.set("gold", 265_333.0).await;
        assert_eq!(cache.get("gold").await, Some(265_333.0));
        assert_eq!(cache.get("silver").await, None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_gone() {
        let cache = TtlCache::new(Duration::from_millis(0));
        cache.set("gold", 1.0).await;
        assert_eq!(cache.get("gold").await, None);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = TtlCache::new(Duration::from_secs(60));
        cache.set("gold", 1.0).await;
        cache.clear().await;
        assert_eq!(cache.get("gold").await, None);
    }
}
