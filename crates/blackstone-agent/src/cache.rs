//! Per-document result cache with TTL and bounded size

use crate::config::CacheConfig;
use blackstone_domain::DocumentId;
use std::collections::HashMap;
use std::time::Instant;

struct CacheEntry<T> {
    value: T,
    inserted_at: Instant,
    hits: u64,
}

/// Bounded TTL cache keyed by document id
///
/// Expiry is lazy: a stale entry is dropped when the next access touches
/// it. Size pressure is handled eagerly on insert by evicting the entry
/// with the fewest hits, breaking ties toward the oldest insertion.
pub struct ResultCache<T> {
    entries: HashMap<DocumentId, CacheEntry<T>>,
    config: CacheConfig,
}

impl<T: Clone> ResultCache<T> {
    /// Create a cache with the given settings
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::new(),
            config,
        }
    }

    /// Look up a fresh entry, bumping its hit count
    pub fn get(&mut self, id: &DocumentId) -> Option<T> {
        let ttl = self.config.ttl();
        match self.entries.get_mut(id) {
            Some(entry) if entry.inserted_at.elapsed() < ttl => {
                entry.hits += 1;
                Some(entry.value.clone())
            }
            Some(_) => {
                self.entries.remove(id);
                None
            }
            None => None,
        }
    }

    /// Insert a result, evicting under size pressure
    pub fn insert(&mut self, id: DocumentId, value: T) {
        if !self.entries.contains_key(&id) {
            while self.entries.len() >= self.config.max_size {
                match self.eviction_victim() {
                    Some(victim) => {
                        self.entries.remove(&victim);
                    }
                    None => break,
                }
            }
        }
        self.entries.insert(
            id,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
                hits: 0,
            },
        );
    }

    /// Number of live entries (stale ones included until touched)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn eviction_victim(&self) -> Option<DocumentId> {
        self.entries
            .iter()
            .min_by(|(_, a), (_, b)| {
                a.hits
                    .cmp(&b.hits)
                    .then(a.inserted_at.cmp(&b.inserted_at))
            })
            .map(|(id, _)| id.clone())
    }
}
