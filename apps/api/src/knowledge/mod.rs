//! Knowledge sources for the chatbot: a static text file shipped with the
//! service and the organisation's live website, flattened to plain text.
//!
//! The static file is re-read on every call. The website is re-fetched on every
//! call unless the Redis page cache is enabled.

pub mod cache;
pub mod scrape;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

use crate::errors::AppError;

pub use cache::PageCache;
pub use scrape::fetch_auxiliary_knowledge;

#[derive(Clone)]
pub struct KnowledgeBase {
    http: Client,
    page_url: String,
    static_path: PathBuf,
    cache: PageCache,
}

impl KnowledgeBase {
    pub fn new(
        page_url: String,
        static_path: PathBuf,
        fetch_timeout: Duration,
        cache: PageCache,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(fetch_timeout)
            .build()
            .context("Failed to build knowledge HTTP client")?;

        Ok(Self {
            http,
            page_url,
            static_path,
            cache,
        })
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Contents of the static knowledge file. A missing file is an internal error.
    pub async fn static_text(&self) -> Result<String, AppError> {
        let text = tokio::fs::read_to_string(&self.static_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to read knowledge base file {}",
                    self.static_path.display()
                )
            })?;
        Ok(text)
    }

    /// Flattened website text, or empty when the page cannot be fetched.
    pub async fn dynamic_text(&self) -> String {
        if let Some(hit) = self.cache.get(&self.page_url).await {
            return hit;
        }

        let text = fetch_auxiliary_knowledge(&self.http, &self.page_url).await;
        // Failed fetches are not memoized so the next request retries the page.
        if !text.is_empty() {
            self.cache.put(&self.page_url, &text).await;
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn knowledge_base(static_path: PathBuf) -> KnowledgeBase {
        KnowledgeBase::new(
            "http://127.0.0.1:9/".to_string(),
            static_path,
            Duration::from_secs(2),
            PageCache::disabled(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_static_text_reads_bundled_file() {
        let kb = knowledge_base(Config::for_tests().knowledge_base_path);
        let text = kb.static_text().await.unwrap();
        assert!(!text.trim().is_empty());
    }

    #[tokio::test]
    async fn test_missing_static_file_is_internal_error() {
        let kb = knowledge_base(PathBuf::from("/nonexistent/knowledge.txt"));
        assert!(matches!(kb.static_text().await, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_dynamic_text_is_empty_when_site_unreachable() {
        let kb = knowledge_base(Config::for_tests().knowledge_base_path);
        assert_eq!(kb.dynamic_text().await, "");
    }
}
