//! Mapping impacted documents to contracts requiring review

use async_trait::async_trait;
use blackstone_domain::{
    ContractKind, ContractReview, DocumentId, ImpactChain, ImpactSeverity, ReviewPriority,
    StoreError,
};
use std::collections::HashMap;
use tracing::debug;

/// A contract as known to the external contract store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRecord {
    /// Contract identifier
    pub id: String,

    /// Kind of contract
    pub kind: ContractKind,
}

/// Trait for the external contract store
#[async_trait]
pub trait ContractStore {
    /// Contracts that reference the given document
    async fn contracts_referencing(
        &self,
        document: &DocumentId,
    ) -> Result<Vec<ContractRecord>, StoreError>;
}

/// Maps impact chains to contract review work items
///
/// Every affected document is looked up in the contract store; each
/// referencing contract becomes one review item whose priority follows the
/// severity of the strongest chain that reached it.
pub struct ContractReviewMapper<S: ContractStore> {
    store: S,
}

impl<S: ContractStore> ContractReviewMapper<S> {
    /// Create a mapper over the given contract store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Build review items for a set of impact chains
    pub async fn reviews_for(
        &self,
        chains: &[ImpactChain],
    ) -> Result<Vec<ContractReview>, StoreError> {
        let mut by_contract: HashMap<String, ContractReview> = HashMap::new();

        for chain in chains {
            let risk = 1.0 / chain.chain_len().max(1) as f64;
            let severity = ImpactSeverity::from_chain(chain.impact_level, risk);
            let priority = ReviewPriority::from_severity(severity);

            for contract in self.store.contracts_referencing(&chain.affected).await? {
                match by_contract.get_mut(&contract.id) {
                    Some(existing) if existing.priority >= priority => {}
                    _ => {
                        by_contract.insert(
                            contract.id.clone(),
                            ContractReview {
                                contract_id: contract.id,
                                contract_kind: contract.kind,
                                triggered_by: chain.affected.clone(),
                                priority,
                            },
                        );
                    }
                }
            }
        }

        let mut reviews: Vec<ContractReview> = by_contract.into_values().collect();
        reviews.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.contract_id.cmp(&b.contract_id)));
        debug!(reviews = reviews.len(), "contract reviews mapped");
        Ok(reviews)
    }
}
