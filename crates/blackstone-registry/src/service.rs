//! Domain CRUD against the external persistence store

use crate::error::RegistryError;
use blackstone_domain::traits::DomainStore;
use blackstone_domain::LegalDomain;
use tracing::info;

/// Validated CRUD operations over the external domain store
///
/// Validation runs before any persistence call, so a malformed record can
/// never partially land in storage.
pub struct DomainService<S: DomainStore> {
    store: S,
}

impl<S: DomainStore> DomainService<S> {
    /// Create a new service over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new domain
    pub async fn create_domain(&self, domain: LegalDomain) -> Result<LegalDomain, RegistryError> {
        domain.validate().map_err(RegistryError::Validation)?;
        self.store.insert_domain(&domain).await?;
        info!(code = %domain.code, "domain registered");
        Ok(domain)
    }

    /// Fetch a domain by code
    pub async fn get_domain(&self, code: &str) -> Result<Option<LegalDomain>, RegistryError> {
        Ok(self.store.fetch_domain(code).await?)
    }

    /// Replace an existing domain
    pub async fn update_domain(&self, domain: LegalDomain) -> Result<LegalDomain, RegistryError> {
        domain.validate().map_err(RegistryError::Validation)?;
        if self.store.fetch_domain(&domain.code).await?.is_none() {
            return Err(RegistryError::NotFound(domain.code.clone()));
        }
        self.store.update_domain(&domain).await?;
        info!(code = %domain.code, "domain updated");
        Ok(domain)
    }

    /// Mark a domain inactive
    ///
    /// Domains are never deleted, only deactivated.
    pub async fn deactivate_domain(&self, code: &str) -> Result<LegalDomain, RegistryError> {
        let mut domain = self
            .store
            .fetch_domain(code)
            .await?
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))?;
        domain.active = false;
        self.store.update_domain(&domain).await?;
        info!(code = %domain.code, "domain deactivated");
        Ok(domain)
    }

    /// List all active domains
    pub async fn list_active(&self) -> Result<Vec<LegalDomain>, RegistryError> {
        Ok(self.store.list_domains(true).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use blackstone_domain::StoreError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // Mock store for testing
    #[derive(Default)]
    struct MockDomainStore {
        domains: Mutex<HashMap<String, LegalDomain>>,
        inserts: AtomicUsize,
    }

    #[async_trait]
    impl DomainStore for MockDomainStore {
        async fn insert_domain(&self, domain: &LegalDomain) -> Result<(), StoreError> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            let mut domains = self.domains.lock().unwrap();
            if domains.contains_key(&domain.code) {
                return Err(StoreError(format!("duplicate code: {}", domain.code)));
            }
            domains.insert(domain.code.clone(), domain.clone());
            Ok(())
        }

        async fn fetch_domain(&self, code: &str) -> Result<Option<LegalDomain>, StoreError> {
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
        LegalDomain::new("labor", "Labor Law", "Employment statutes and decrees")
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = DomainService::new(MockDomainStore::default());
        service.create_domain(sample_domain()).await.unwrap();

        let fetched = service.get_domain("labor").await.unwrap().unwrap();
        assert_eq!(fetched.name, "Labor Law");
        assert!(fetched.active);
    }

    #[tokio::test]
    async fn test_validation_runs_before_store() {
        let service = DomainService::new(MockDomainStore::default());
        let mut domain = sample_domain();
        domain.description = String::new();

        let result = service.create_domain(domain).await;
        assert!(matches!(result, Err(RegistryError::Validation(_))));
        // The store was never touched.
        assert_eq!(service.store.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_domain() {
        let service = DomainService::new(MockDomainStore::default());
        let result = service.update_domain(sample_domain()).await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_deactivate_keeps_record() {
        let service = DomainService::new(MockDomainStore::default());
        service.create_domain(sample_domain()).await.unwrap();

        let deactivated = service.deactivate_domain("labor").await.unwrap();
        assert!(!deactivated.active);

        // Still fetchable, no longer listed as active.
        assert!(service.get_domain("labor").await.unwrap().is_some());
        assert!(service.list_active().await.unwrap().is_empty());
    }
}
