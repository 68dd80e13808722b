//! Read-through registry cache over the domain service

use crate::error::RegistryError;
use crate::service::DomainService;
use blackstone_domain::traits::DomainStore;
use blackstone_domain::LegalDomain;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for the registry cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// How long a cached domain stays fresh (seconds)
    /// Default: 300 (5 minutes)
    pub ttl_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { ttl_secs: 300 }
    }
}

impl RegistryConfig {
    /// Get the TTL as a Duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

struct CachedDomain {
    domain: LegalDomain,
    cached_at: Instant,
}

/// Authoritative in-memory domain map with TTL read-through
///
/// Every write goes through the [`DomainService`] and updates the map, so
/// consumers observe their own writes immediately. Reads of a fresh entry
/// never touch the backing store; a stale or missing entry is re-fetched
/// and re-cached. Staleness is checked lazily, on the access itself.
pub struct DomainRegistry<S: DomainStore> {
    service: DomainService<S>,
    config: RegistryConfig,
    entries: RwLock<HashMap<String, CachedDomain>>,
}

impl<S: DomainStore> DomainRegistry<S> {
    /// Create a registry over the given store with the given cache config
    pub fn new(store: S, config: RegistryConfig) -> Self {
        Self {
            service: DomainService::new(store),
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with the default 5-minute TTL
    pub fn with_default_config(store: S) -> Self {
        Self::new(store, RegistryConfig::default())
    }

    /// Register a new domain (write-through)
    pub async fn register(&self, domain: LegalDomain) -> Result<(), RegistryError> {
        let domain = self.service.create_domain(domain).await?;
        self.cache_insert(domain);
        Ok(())
    }

    /// Update an existing domain (write-through)
    pub async fn update(&self, domain: LegalDomain) -> Result<(), RegistryError> {
        let domain = self.service.update_domain(domain).await?;
        self.cache_insert(domain);
        Ok(())
    }

    /// Deactivate a domain (write-through)
    pub async fn deactivate(&self, code: &str) -> Result<(), RegistryError> {
        let domain = self.service.deactivate_domain(code).await?;
        self.cache_insert(domain);
        Ok(())
    }

    /// Get a domain by code
    ///
    /// Served from the cache while the entry is fresh; otherwise read
    /// through to the store and re-cached.
    pub async fn get(&self, code: &str) -> Result<Option<LegalDomain>, RegistryError> {
        if let Some(domain) = self.cache_get_fresh(code) {
            return Ok(Some(domain));
        }

        debug!(code, "registry cache miss, reading through");
        match self.service.get_domain(code).await? {
            Some(domain) => {
                self.cache_insert(domain.clone());
                Ok(Some(domain))
            }
            None => {
                self.entries.write().unwrap().remove(code);
                Ok(None)
            }
        }
    }

    /// List all active domains (always reads the store)
    pub async fn list_active(&self) -> Result<Vec<LegalDomain>, RegistryError> {
        let domains = self.service.list_active().await?;
        for domain in &domains {
            self.cache_insert(domain.clone());
        }
        Ok(domains)
    }

    /// Number of cached entries (fresh or stale)
    pub fn cached_len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    fn cache_get_fresh(&self, code: &str) -> Option<LegalDomain> {
        let entries = self.entries.read().unwrap();
        let entry = entries.get(code)?;
        if entry.cached_at.elapsed() < self.config.ttl() {
            Some(entry.domain.clone())
        } else {
            None
        }
    }

    fn cache_insert(&self, domain: LegalDomain) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(
            domain.code.clone(),
            CachedDomain {
                domain,
                cached_at: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use blackstone_domain::traits::DomainStore;
    use blackstone_domain::StoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // Mock store that counts reads
    #[derive(Default)]
    struct CountingStore {
        domains: Mutex<HashMap<String, LegalDomain>>,
        fetches: Arc<AtomicUsize>,
    }

    impl CountingStore {
        fn with_counter() -> (Self, Arc<AtomicUsize>) {
            let store = Self::default();
            let counter = store.fetches.clone();
            (store, counter)
        }
    }

    #[async_trait]
    impl DomainStore for CountingStore {
        async fn insert_domain(&self, domain: &LegalDomain) -> Result<(), StoreError> {
            self.domains
                .lock()
                .unwrap()
                .insert(domain.code.clone(), domain.clone());
            Ok(())
        }

        async fn fetch_domain(&self, code: &str) -> Result<Option<LegalDomain>, StoreError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.domains.lock().unwrap().get(code).cloned())
        }

        async fn update_domain(&self, domain: &LegalDomain) -> Result<(), StoreError> {
            self.domains
                .lock()
                .unwrap()
                .insert(domain.code.clone(), domain.clone());
            Ok(())
        }

        async fn list_domains(&self, active_only: bool) -> Result<Vec<LegalDomain>, StoreError> {
            let domains = self.domains.lock().unwrap();
            Ok(domains
                .values()
                .filter(|d| !active_only || d.active)
                .cloned()
                .collect())
        }
    }

    fn sample_domain() -> LegalDomain {
        LegalDomain::new("tax", "Taxation", "Tax statutes and decrees")
    }

    #[tokio::test]
    async fn test_write_through_read_skips_store() {
        let (store, fetches) = CountingStore::with_counter();
        let registry = DomainRegistry::with_default_config(store);
        registry.register(sample_domain()).await.unwrap();

        let fetched = registry.get("tax").await.unwrap().unwrap();
        assert_eq!(fetched.name, "Taxation");
        // Registration cached the record; the read never hit the store.
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_stale_entry_reads_through() {
        let (store, fetches) = CountingStore::with_counter();
        let config = RegistryConfig { ttl_secs: 0 };
        let registry = DomainRegistry::new(store, config);
        registry.register(sample_domain()).await.unwrap();

        registry.get("tax").await.unwrap().unwrap();
        registry.get("tax").await.unwrap().unwrap();
        // TTL of zero: every read goes to the store.
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unknown_code() {
        let registry = DomainRegistry::with_default_config(CountingStore::default());
        assert!(registry.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_own_writes_visible() {
        let registry = DomainRegistry::with_default_config(CountingStore::default());
        registry.register(sample_domain()).await.unwrap();

        let mut updated = sample_domain();
        updated.description = "Tax statutes, decrees, and rulings".to_string();
        registry.update(updated).await.unwrap();

        let fetched = registry.get("tax").await.unwrap().unwrap();
        assert!(fetched.description.contains("rulings"));

        registry.deactivate("tax").await.unwrap();
        let fetched = registry.get("tax").await.unwrap().unwrap();
        assert!(!fetched.active);
    }
}
