use crate::domain::models::ElementId;
use crate::domain::typeahead::TypeaheadClient;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Candidate strings for the jump dialog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SymbolSource: Send + Sync {
    async fn candidates(&self, query: &str) -> Result<Vec<String>>;
}

/// Identifiers that look exported: no leading underscore, no hyphen.
pub fn is_exported(id: &str) -> bool {
    !id.is_empty() && !id.starts_with('_') && !id.contains('-')
}

/// Identifiers found on the current page.
#[derive(Debug, Clone, Default)]
pub struct LocalSymbols {
    ids: Vec<String>,
}

impl LocalSymbols {
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a ElementId>) -> Self {
        Self {
            ids: ids
                .into_iter()
                .map(ElementId::as_str)
                .filter(|id| is_exported(id))
                .map(str::to_string)
                .collect(),
        }
    }
}

#[async_trait]
impl SymbolSource for LocalSymbols {
    async fn candidates(&self, _query: &str) -> Result<Vec<String>> {
        Ok(self.ids.clone())
    }
}

/// Remote typeahead lookups, fetched at most once per page life.
///
/// Concurrent callers share the one in-flight request. A failed request
/// leaves the cache empty so the next call tries again.
pub struct RemoteSymbols {
    client: Arc<dyn TypeaheadClient>,
    cache: OnceCell<Vec<String>>,
}

impl RemoteSymbols {
    pub fn new(client: Arc<dyn TypeaheadClient>) -> Self {
        Self {
            client,
            cache: OnceCell::new(),
        }
    }

    pub fn is_cached(&self) -> bool {
        self.cache.initialized()
    }
}

#[async_trait]
impl SymbolSource for RemoteSymbols {
    async fn candidates(&self, query: &str) -> Result<Vec<String>> {
        let items = self
            .cache
            .get_or_try_init(|| async {
                let items = self.client.lookup(query).await;
                match &items {
                    Ok(items) => tracing::info!(count = items.len(), "symbol index cached"),
                    Err(e) => tracing::warn!("symbol lookup failed: {e}"),
                }
                items
            })
            .await?;
        Ok(items.clone())
    }
}

/// Orders candidates for `query`, case-insensitively:
/// 1. the part after the last `/` starts with the query,
/// 2. that part contains the query elsewhere,
/// 3. the query occurs anywhere else.
///
/// Non-matching items are dropped. Relative order within a tier is kept.
#[must_use]
pub fn rank_candidates(query: &str, items: &[String]) -> Vec<String> {
    let query = query.to_lowercase();
    let mut prefix = Vec::new();
    let mut in_tail = Vec::new();
    let mut anywhere = Vec::new();

    for item in items {
        let lower = item.to_lowercase();
        let tail = lower.rsplit('/').next().unwrap_or(&lower);
        match tail.find(&query) {
            Some(0) => prefix.push(item.clone()),
            Some(_) => in_tail.push(item.clone()),
            None if lower.contains(&query) => anywhere.push(item.clone()),
            None => {}
        }
    }

    prefix.extend(in_tail);
    prefix.extend(anywhere);
    prefix
}
