//! Optional Redis memo for the flattened website text.
//!
//! Disabled when no Redis URL is configured or the TTL is zero, in which case
//! every chat request re-fetches the page. All cache failures are soft: they
//! are logged and treated as a miss.

use redis::Client as RedisClient;
use tracing::{debug, warn};

const KEY_PREFIX: &str = "sahay:knowledge:";

#[derive(Clone)]
pub struct PageCache {
    redis: Option<RedisClient>,
    ttl_secs: u64,
}

impl PageCache {
    pub fn new(redis: Option<RedisClient>, ttl_secs: u64) -> Self {
        Self { redis, ttl_secs }
    }

    pub fn disabled() -> Self {
        Self::new(None, 0)
    }

    pub fn is_enabled(&self) -> bool {
        self.redis.is_some() && self.ttl_secs > 0
    }

    pub async fn get(&self, url: &str) -> Option<String> {
        let client = self.redis.as_ref().filter(|_| self.is_enabled())?;

        let result: redis::RedisResult<Option<String>> = async {
            let mut conn = client.get_multiplexed_async_connection().await?;
            redis::cmd("GET")
                .arg(cache_key(url))
                .query_async::<_, Option<String>>(&mut conn)
                .await
        }
        .await;

        match result {
            Ok(hit) => {
                debug!("Knowledge cache {} for {url}", if hit.is_some() { "hit" } else { "miss" });
                hit
            }
            Err(e) => {
                warn!("Knowledge cache read failed for {url}: {e}");
                None
            }
        }
    }

    pub async fn put(&self, url: &str, text: &str) {
        let Some(client) = self.redis.as_ref().filter(|_| self.is_enabled()) else {
            return;
        };

        let result: redis::RedisResult<()> = async {
            let mut conn = client.get_multiplexed_async_connection().await?;
            redis::cmd("SET")
                .arg(cache_key(url))
                .arg(text)
                .arg("EX")
                .arg(self.ttl_secs)
                .query_async::<_, ()>(&mut conn)
                .await
        }
        .await;

        if let Err(e) = result {
            warn!("Knowledge cache write failed for {url}: {e}");
        }
    }
}

fn cache_key(url: &str) -> String {
    format!("{KEY_PREFIX}{url}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_cache_reports_disabled() {
        assert!(!PageCache::disabled().is_enabled());
    }

    #[test]
    fn test_zero_ttl_disables_cache() {
        let client = RedisClient::open("redis://127.0.0.1:6379").unwrap();
        assert!(!PageCache::new(Some(client.clone()), 0).is_enabled());
        assert!(PageCache::new(Some(client), 60).is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_cache_always_misses() {
        let cache = PageCache::disabled();
        cache.put("https://example.org/", "text").await;
        assert!(cache.get("https://example.org/").await.is_none());
    }

    #[test]
    fn test_cache_key_is_namespaced() {
        assert_eq!(
            cache_key("https://www.upay.org.in/"),
            "sahay:knowledge:https://www.upay.org.in/"
        );
    }
}
