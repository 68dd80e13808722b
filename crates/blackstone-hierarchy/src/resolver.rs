//! Dependency resolution strategies

use async_trait::async_trait;
use blackstone_domain::traits::{CitationStore, DependencyResolver};
use blackstone_domain::{CitationFetchError, DocumentId};
use std::collections::HashSet;
use tracing::trace;

/// Production resolver: walks the external citation graph
///
/// `dependent` depends on `dependency` when the citation graph contains a
/// directed path from `dependent` to `dependency`. The walk keeps a global
/// visited set, so it terminates on cyclic graphs and touches each
/// document at most once.
pub struct CitationDependencyResolver<C: CitationStore> {
    store: C,
}

impl<C: CitationStore> CitationDependencyResolver<C> {
    /// Create a resolver over the given citation store
    pub fn new(store: C) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<C: CitationStore + Send + Sync> DependencyResolver for CitationDependencyResolver<C> {
    async fn depends_on(
        &self,
        dependent: &DocumentId,
        dependency: &DocumentId,
    ) -> Result<bool, CitationFetchError> {
        if dependent == dependency {
            return Ok(false);
        }

        let mut visited: HashSet<DocumentId> = HashSet::new();
        visited.insert(dependent.clone());
        let mut frontier = vec![dependent.clone()];

        while let Some(current) = frontier.pop() {
            let edges = self.store.outgoing_citations(&current).await?;
            for edge in edges {
                if edge.target == *dependency {
                    trace!(%dependent, %dependency, "dependency path found");
                    return Ok(true);
                }
                if visited.insert(edge.target.clone()) {
                    frontier.push(edge.target);
                }
            }
        }

        Ok(false)
    }
}

/// Test/bootstrap resolver over an explicit list of direct dependencies
pub struct StaticDependencyResolver {
    edges: HashSet<(DocumentId, DocumentId)>,
}

impl StaticDependencyResolver {
    /// Create a resolver from `(dependent, dependency)` pairs
    pub fn new(edges: impl IntoIterator<Item = (DocumentId, DocumentId)>) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }

    /// A resolver with no dependencies at all
    pub fn empty() -> Self {
        Self {
            edges: HashSet::new(),
        }
    }
}

#[async_trait]
impl DependencyResolver for StaticDependencyResolver {
    async fn depends_on(
        &self,
        dependent: &DocumentId,
        dependency: &DocumentId,
    ) -> Result<bool, CitationFetchError> {
        Ok(self
            .edges
            .contains(&(dependent.clone(), dependency.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackstone_domain::CitationRelationship;
    use std::collections::HashMap;

    // Mock citation store over a fixed edge map
    struct MockCitationStore {
        edges: HashMap<DocumentId, Vec<CitationRelationship>>,
    }

    impl MockCitationStore {
        fn new(pairs: &[(&str, &str)]) -> Self {
            let mut edges: HashMap<DocumentId, Vec<CitationRelationship>> = HashMap::new();
            for (source, target) in pairs {
                edges
                    .entry(DocumentId::new(*source))
                    .or_default()
                    .push(CitationRelationship::new(*source, *target));
            }
            Self { edges }
        }
    }

    #[async_trait]
    impl CitationStore for MockCitationStore {
        async fn outgoing_citations(
            &self,
            id: &DocumentId,
        ) -> Result<Vec<CitationRelationship>, CitationFetchError> {
            Ok(self.edges.get(id).cloned().unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_direct_dependency() {
        let resolver = CitationDependencyResolver::new(MockCitationStore::new(&[("a", "b")]));
        assert!(resolver
            .depends_on(&DocumentId::new("a"), &DocumentId::new("b"))
            .await
            .unwrap());
        assert!(!resolver
            .depends_on(&DocumentId::new("b"), &DocumentId::new("a"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_transitive_dependency() {
        let resolver = CitationDependencyResolver::new(MockCitationStore::new(&[
            ("a", "b"),
            ("b", "c"),
        ]));
        assert!(resolver
            .depends_on(&DocumentId::new("a"), &DocumentId::new("c"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_cycle_terminates() {
        let resolver = CitationDependencyResolver::new(MockCitationStore::new(&[
            ("a", "b"),
            ("b", "a"),
        ]));
        // No path from the cycle to "z": the walk must still terminate.
        assert!(!resolver
            .depends_on(&DocumentId::new("a"), &DocumentId::new("z"))
            .await
            .unwrap());
        assert!(resolver
            .depends_on(&DocumentId::new("a"), &DocumentId::new("b"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_self_dependency_is_false() {
        let resolver = CitationDependencyResolver::new(MockCitationStore::new(&[("a", "a")]));
        assert!(!resolver
            .depends_on(&DocumentId::new("a"), &DocumentId::new("a"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_static_resolver() {
        let resolver = StaticDependencyResolver::new([(
            DocumentId::new("decree"),
            DocumentId::new("law"),
        )]);
        assert!(resolver
            .depends_on(&DocumentId::new("decree"), &DocumentId::new("law"))
            .await
            .unwrap());
        assert!(!resolver
            .depends_on(&DocumentId::new("law"), &DocumentId::new("decree"))
            .await
            .unwrap());
    }
}
