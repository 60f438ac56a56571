// ABOUTME: In-memory translation cache with LRU eviction and TTL expiry
// ABOUTME: Tracks hit/miss counters and runs an optional background sweep of expired entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use lru::LruCache;
use tokio::sync::{mpsc, RwLock};
use tokio::time::Instant;
use tracing::debug;

use super::CacheKey;
use crate::config::TranslationCacheConfig;
use crate::models::{CacheStats, HealthLabelsForProvider};

type Store = Arc<RwLock<LruCache<String, CacheEntry>>>;

/// Cached translation with expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    result: HealthLabelsForProvider,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(result: HealthLabelsForProvider, ttl: Duration) -> Self {
        Self {
            result,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Process-local memo of translation results
///
/// Entries are immutable once written. Expired entries are evicted lazily on
/// read and, when enabled, by a background sweep. `clear` is the only
/// invalidation primitive.
pub struct TranslationCache {
    store: Store,
    ttl: Duration,
    capacity: NonZeroUsize,
    hits: AtomicU64,
    misses: AtomicU64,
    shutdown_tx: Option<mpsc::Sender<()>>,
}

impl TranslationCache {
    /// Capacity used when the configuration asks for zero entries
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache; spawns the sweep task when background cleanup is enabled,
    /// which requires a running Tokio runtime
    #[must_use]
    pub fn new(config: &TranslationCacheConfig) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);
        let store: Store = Arc::new(RwLock::new(LruCache::new(capacity)));

        let shutdown_tx = if config.enable_background_cleanup {
            let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
            let store_clone = Arc::clone(&store);
            let cleanup_interval = config.cleanup_interval();

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(cleanup_interval);
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            Self::cleanup_expired(&store_clone).await;
                        }
                        _ = shutdown_rx.recv() => {
                            debug!("Translation cache cleanup task received shutdown signal");
                            break;
                        }
                    }
                }
            });

            Some(shutdown_tx)
        } else {
            None
        };

        Self {
            store,
            ttl: config.ttl(),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            shutdown_tx,
        }
    }

    /// Cached result for the key, evicting it if expired
    pub async fn get(&self, key: &CacheKey) -> Option<HealthLabelsForProvider> {
        let key = key.to_string();
        let mut store = self.store.write().await;

        let hit = match store.get(&key) {
            Some(entry) if !entry.is_expired() => Some(entry.result.clone()),
            Some(_) => {
                store.pop(&key);
                None
            }
            None => None,
        };
        drop(store);

        if hit.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        hit
    }

    /// Store a result with `expiry = now + ttl`
    pub async fn put(&self, key: &CacheKey, result: HealthLabelsForProvider) {
        let entry = CacheEntry::new(result, self.ttl);
        // LruCache evicts the least recently used entry when full
        self.store.write().await.push(key.to_string(), entry);
    }

    /// Drop every entry; returns how many were removed
    pub async fn clear(&self) -> usize {
        let mut store = self.store.write().await;
        let removed = store.len();
        store.clear();
        drop(store);
        debug!(removed, "Translation cache cleared");
        removed
    }

    /// Current size and hit/miss counters
    pub async fn stats(&self) -> CacheStats {
        let size = self.store.read().await.len();
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };

        CacheStats {
            size,
            capacity: self.capacity.get(),
            hits,
            misses,
            hit_rate,
            ttl_secs: self.ttl.as_secs(),
        }
    }

    /// Remove expired entries now; returns how many were removed
    pub async fn purge_expired(&self) -> usize {
        Self::cleanup_expired(&self.store).await
    }

    async fn cleanup_expired(store: &Store) -> usize {
        let mut store_guard = store.write().await;

        // Collect expired keys first (can't modify while iterating)
        let expired_keys: Vec<String> = store_guard
            .iter()
            .filter_map(|(k, v)| v.is_expired().then(|| k.clone()))
            .collect();

        for key in &expired_keys {
            store_guard.pop(key);
        }
        drop(store_guard);

        let removed = expired_keys.len();
        if removed > 0 {
            debug!("Cleaned up {} expired translation cache entries", removed);
        }
        removed
    }
}

impl Drop for TranslationCache {
    fn drop(&mut self) {
        if let Some(tx) = &self.shutdown_tx {
            // Errors are expected if the task already exited
            if let Err(e) = tx.try_send(()) {
                debug!(error = ?e, "Cache shutdown signal send failed (channel likely closed)");
            }
        }
    }
}
