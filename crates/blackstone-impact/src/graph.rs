//! Abstract node/edge description handed to the visualization collaborator

use async_trait::async_trait;
use blackstone_domain::{AnalysisError, DocumentId, LegalDocument};
use serde::{Deserialize, Serialize};

/// How two nodes are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Discovered via semantic similarity, no explicit citation
    Similarity,

    /// An explicit citation edge
    Citation,
}

/// A document node in the impact picture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactNode {
    /// Document id
    pub id: String,

    /// Domain code, when known
    pub domain: Option<String>,

    /// Display label
    pub label: String,
}

/// A directed edge in the impact picture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactEdge {
    /// Source node id
    pub from: String,

    /// Target node id
    pub to: String,

    /// Connection kind
    pub kind: EdgeKind,
}

/// Node/edge description of one cross-domain impact analysis
///
/// Nodes are deduplicated by id; the first insertion wins, so nodes added
/// with full document context keep their domain and label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactGraph {
    /// Documents involved in the analysis
    pub nodes: Vec<ImpactNode>,

    /// Similarity and citation connections between them
    pub edges: Vec<ImpactEdge>,
}

impl ImpactGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node from a full document record
    pub fn add_document(&mut self, document: &LegalDocument) {
        self.add_node(ImpactNode {
            id: document.id.to_string(),
            domain: Some(document.domain.clone()),
            label: document.title.clone(),
        });
    }

    /// Add a node known only by id (an intermediate chain hop)
    pub fn add_reference(&mut self, id: &DocumentId) {
        self.add_node(ImpactNode {
            id: id.to_string(),
            domain: None,
            label: id.to_string(),
        });
    }

    /// Add a directed edge, skipping exact duplicates
    pub fn add_edge(&mut self, from: &DocumentId, to: &DocumentId, kind: EdgeKind) {
        let edge = ImpactEdge {
            from: from.to_string(),
            to: to.to_string(),
            kind,
        };
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }

    fn add_node(&mut self, node: ImpactNode) {
        if !self.nodes.iter().any(|n| n.id == node.id) {
            self.nodes.push(node);
        }
    }
}

/// Trait for the external visualization collaborator
#[async_trait]
pub trait VisualizationSink {
    /// Hand over a finished impact picture for rendering
    async fn render(&self, graph: &ImpactGraph) -> Result<(), AnalysisError>;
}
