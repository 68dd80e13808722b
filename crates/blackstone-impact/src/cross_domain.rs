//! Cross-domain impact discovery via semantic similarity

use crate::analyzer::ImpactAnalyzer;
use crate::graph::{EdgeKind, ImpactGraph, VisualizationSink};
use async_trait::async_trait;
use blackstone_agent::{AgentError, DocumentAgent};
use blackstone_domain::traits::{CitationStore, EmbeddingProvider, SimilaritySearch};
use blackstone_domain::{AnalysisError, CrossDomainImpact, LegalDocument};
use std::collections::HashMap;
use tracing::{debug, info};

/// Tuning for cross-domain discovery
#[derive(Debug, Clone)]
pub struct CrossDomainConfig {
    /// Minimum similarity for a candidate to be considered
    /// Default: 0.8
    pub similarity_threshold: f64,

    /// Maximum candidates retrieved from the vector index
    /// Default: 10
    pub top_k: usize,

    /// Importance weight per domain code; unlisted domains weigh 1.0
    pub domain_weights: HashMap<String, f64>,
}

impl Default for CrossDomainConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.8,
            top_k: 10,
            domain_weights: HashMap::new(),
        }
    }
}

impl CrossDomainConfig {
    /// Set the importance weight of a domain
    pub fn with_domain_weight(mut self, domain: impl Into<String>, weight: f64) -> Self {
        self.domain_weights.insert(domain.into(), weight);
        self
    }
}

/// Full result of one cross-domain analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CrossDomainAnalysis {
    /// Discovered impacts, one per (candidate, affected) chain
    pub impacts: Vec<CrossDomainImpact>,

    /// Node/edge picture handed to the visualization collaborator
    pub graph: ImpactGraph,
}

/// Agent discovering impact across domains without explicit citations
///
/// For a changed document: embed its content, retrieve similar documents
/// corpus-wide, keep those in other domains, and run the citation impact
/// traversal from each. Risk per chain is the inverse chain length scaled
/// by the candidate domain's importance weight.
///
/// Collaborator failures surface as errors from `process`; the agent
/// runtime maps them to recorded failure results, and nothing shared is
/// mutated on a partial run.
pub struct CrossDomainImpactAgent<C, E, S, V>
where
    C: CitationStore,
    E: EmbeddingProvider,
    S: SimilaritySearch,
    V: VisualizationSink,
{
    impact: ImpactAnalyzer<C>,
    embeddings: E,
    index: S,
    visualization: V,
    config: CrossDomainConfig,
}

impl<C, E, S, V> CrossDomainImpactAgent<C, E, S, V>
where
    C: CitationStore,
    E: EmbeddingProvider,
    S: SimilaritySearch,
    V: VisualizationSink,
{
    /// Create an agent from its collaborators
    pub fn new(
        citations: C,
        embeddings: E,
        index: S,
        visualization: V,
        config: CrossDomainConfig,
    ) -> Self {
        Self {
            impact: ImpactAnalyzer::new(citations),
            embeddings,
            index,
            visualization,
            config,
        }
    }

    fn domain_weight(&self, domain: &str) -> f64 {
        self.config.domain_weights.get(domain).copied().unwrap_or(1.0)
    }
}

#[async_trait]
impl<C, E, S, V> DocumentAgent for CrossDomainImpactAgent<C, E, S, V>
where
    C: CitationStore + Send + Sync + 'static,
    E: EmbeddingProvider + Send + Sync + 'static,
    S: SimilaritySearch + Send + Sync + 'static,
    V: VisualizationSink + Send + Sync + 'static,
{
    type Output = CrossDomainAnalysis;

    fn name(&self) -> &str {
        "cross-domain-impact"
    }

    async fn process(&self, document: &LegalDocument) -> Result<CrossDomainAnalysis, AgentError> {
        if document.content.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "document content is empty".to_string(),
            )
            .into());
        }

        let embedding = self.embeddings.embed(&document.content).await?;
        let candidates = self
            .index
            .search(&embedding, self.config.top_k, self.config.similarity_threshold)
            .await?;

        // Cross-domain only: drop candidates sharing the source's domain.
        let candidates: Vec<_> = candidates
            .into_iter()
            .filter(|c| c.document.domain != document.domain)
            .collect();
        debug!(
            document = %document.id,
            candidates = candidates.len(),
            "cross-domain candidates after filtering"
        );

        let mut impacts = Vec::new();
        let mut graph = ImpactGraph::new();
        graph.add_document(document);

        for candidate in &candidates {
            graph.add_document(&candidate.document);
            graph.add_edge(&document.id, &candidate.document.id, EdgeKind::Similarity);

            let weight = self.domain_weight(&candidate.document.domain);
            let chains = self.impact.analyze(&candidate.document.id).await?;

            for chain in chains {
                let risk_score = (1.0 / chain.chain_len().max(1) as f64) * weight;

                graph.add_reference(&chain.affected);
                for hop in &chain.path {
                    graph.add_reference(hop);
                }
                for pair in chain.path.windows(2) {
                    graph.add_edge(&pair[0], &pair[1], EdgeKind::Citation);
                }
                if let Some(last) = chain.path.last() {
                    graph.add_edge(last, &chain.affected, EdgeKind::Citation);
                }

                impacts.push(CrossDomainImpact {
                    source: document.id.clone(),
                    impacted: chain.affected,
                    path: chain.path,
                    risk_score,
                    domain: candidate.document.domain.clone(),
                });
            }
        }

        self.visualization.render(&graph).await?;
        info!(
            document = %document.id,
            impacts = impacts.len(),
            "cross-domain analysis finished"
        );
        Ok(CrossDomainAnalysis { impacts, graph })
    }
}
