//! Citation-graph impact traversal

use blackstone_domain::traits::CitationStore;
use blackstone_domain::{CitationFetchError, DocumentId, ImpactChain};
use std::collections::HashSet;
use tracing::debug;

/// Depth-first impact traversal over the external citation graph
///
/// The visited set is traversal-global, not per-path: once a document has
/// been reached, later edges into it record nothing. Each reachable
/// document therefore yields exactly one terminal chain - the first path
/// found wins - trading path-enumeration completeness for guaranteed
/// termination on cyclic graphs and bounded output size.
///
/// The analyzer performs no retries; a citation fetch failure propagates
/// with its retry hint.
pub struct ImpactAnalyzer<C: CitationStore> {
    store: C,
}

impl<C: CitationStore> ImpactAnalyzer<C> {
    /// Create an analyzer over the given citation store
    pub fn new(store: C) -> Self {
        Self { store }
    }

    /// Collect one impact chain per document reachable from `root`
    pub async fn analyze(&self, root: &DocumentId) -> Result<Vec<ImpactChain>, CitationFetchError> {
        let mut visited: HashSet<DocumentId> = HashSet::new();
        visited.insert(root.clone());

        let mut chains = Vec::new();
        // Stack entries carry the path from the root up to and including
        // the entry's document.
        let mut stack: Vec<(DocumentId, Vec<DocumentId>)> =
            vec![(root.clone(), vec![root.clone()])];

        while let Some((current, path)) = stack.pop() {
            let edges = self.store.outgoing_citations(&current).await?;
            for edge in edges {
                if !visited.insert(edge.target.clone()) {
                    continue;
                }
                if let Some(chain) =
                    ImpactChain::new(root.clone(), edge.target.clone(), path.clone())
                {
                    chains.push(chain);
                }
                let mut next_path = path.clone();
                next_path.push(edge.target.clone());
                stack.push((edge.target, next_path));
            }
        }

        debug!(root = %root, affected = chains.len(), "impact traversal finished");
        Ok(chains)
    }
}
