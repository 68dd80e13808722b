//! Agent runtime: processing, batching, and the debounced queue

use crate::cache::ResultCache;
use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::metrics::AgentMetrics;
use crate::security::SecurityGate;
use async_trait::async_trait;
use blackstone_domain::traits::{AuthorityVerifier, CallerIdentity};
use blackstone_domain::{DocumentId, LegalDocument};
use futures::future::join_all;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// The one operation every concrete document-processing agent implements
///
/// Implementations hold their own collaborators and configuration; the
/// runtime wraps them with the shared capabilities (enable gate, result
/// cache, batching, security).
#[async_trait]
pub trait DocumentAgent: Send + Sync + 'static {
    /// Result type produced per document
    type Output: Clone + Send + Sync + 'static;

    /// Agent kind name, used in logs and error messages
    fn name(&self) -> &str;

    /// Process a single document
    async fn process(&self, document: &LegalDocument) -> Result<Self::Output, AgentError>;
}

/// Outcome of processing one document
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingOutcome<T> {
    /// The agent produced a result
    Succeeded(T),

    /// The agent failed; the error is recorded, not propagated
    Failed {
        /// Human-readable failure description
        error: String,
        /// Whether the caller may retry the document
        retryable: bool,
    },
}

/// Uniform per-document result used by single and batch processing
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResult<T> {
    /// Document the result belongs to
    pub document: DocumentId,

    /// Success or recorded failure
    pub outcome: ProcessingOutcome<T>,

    /// Whether the result came from the cache
    pub from_cache: bool,
}

impl<T> ProcessingResult<T> {
    /// Whether the document was processed successfully
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ProcessingOutcome::Succeeded(_))
    }
}

/// Aggregated outcome of a batch call
#[derive(Debug, Clone)]
pub struct BatchSummary<T> {
    /// Per-document results in input order
    pub results: Vec<ProcessingResult<T>>,

    /// Number of successful documents
    pub succeeded: usize,

    /// Number of failed documents
    pub failed: usize,
}

impl<T> BatchSummary<T> {
    fn from_results(results: Vec<ProcessingResult<T>>) -> Self {
        let succeeded = results.iter().filter(|r| r.is_success()).count();
        let failed = results.len() - succeeded;
        Self {
            results,
            succeeded,
            failed,
        }
    }
}

/// Shared state between the runtime handle and the queue consumer task
struct AgentCore<A: DocumentAgent> {
    agent: A,
    config: AgentConfig,
    gate: SecurityGate,
    cache: Mutex<ResultCache<A::Output>>,
    metrics: AgentMetrics,
}

impl<A: DocumentAgent> AgentCore<A> {
    /// Process one document through cache and agent, mapping any failure
    /// to a recorded result
    async fn process_one(&self, document: &LegalDocument) -> ProcessingResult<A::Output> {
        if let Some(value) = self.cache.lock().unwrap().get(&document.id) {
            self.metrics.record_cache_hit();
            return ProcessingResult {
                document: document.id.clone(),
                outcome: ProcessingOutcome::Succeeded(value),
                from_cache: true,
            };
        }

        match self.agent.process(document).await {
            Ok(output) => {
                self.cache
                    .lock()
                    .unwrap()
                    .insert(document.id.clone(), output.clone());
                self.metrics.record_success();
                ProcessingResult {
                    document: document.id.clone(),
                    outcome: ProcessingOutcome::Succeeded(output),
                    from_cache: false,
                }
            }
            Err(error) => self.handle_error(error, document),
        }
    }

    /// Map a processing failure to a uniform result so batch aggregation
    /// counts consistently
    fn handle_error(&self, error: AgentError, document: &LegalDocument) -> ProcessingResult<A::Output> {
        self.metrics.record_failure();
        warn!(
            agent = self.agent.name(),
            document = %document.id,
            error = %error,
            "document processing failed"
        );
        ProcessingResult {
            document: document.id.clone(),
            outcome: ProcessingOutcome::Failed {
                error: error.to_string(),
                retryable: error.retryable(),
            },
            from_cache: false,
        }
    }

    /// Process the documents of one chunk concurrently
    async fn process_chunk(&self, documents: &[LegalDocument]) -> Vec<ProcessingResult<A::Output>> {
        join_all(documents.iter().map(|d| self.process_one(d))).await
    }
}

enum QueueCommand {
    Enqueue(LegalDocument),
    Drain(oneshot::Sender<()>),
    Stop(oneshot::Sender<()>),
}

/// Runtime wrapping a [`DocumentAgent`] with the shared capability set
///
/// Construction spawns the queue consumer task, so a runtime must be
/// created inside a tokio context. Call [`AgentRuntime::cleanup`] before
/// dropping the runtime; otherwise documents still sitting in the queue
/// are silently dropped.
pub struct AgentRuntime<A: DocumentAgent> {
    core: Arc<AgentCore<A>>,
    queue_tx: mpsc::Sender<QueueCommand>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl<A: DocumentAgent> AgentRuntime<A> {
    /// Create a runtime with no authority verifier
    pub fn new(agent: A, config: AgentConfig) -> Self {
        Self::with_verifier(agent, config, None)
    }

    /// Create a runtime with an authority verifier for the security gate
    pub fn with_verifier(
        agent: A,
        config: AgentConfig,
        verifier: Option<Arc<dyn AuthorityVerifier + Send + Sync>>,
    ) -> Self {
        let gate = SecurityGate::new(config.security.clone(), verifier);
        let queue_capacity = config.batch.max_batch_size.max(1) * 2;
        let core = Arc::new(AgentCore {
            gate,
            cache: Mutex::new(ResultCache::new(config.cache.clone())),
            metrics: AgentMetrics::default(),
            config,
            agent,
        });

        let (queue_tx, queue_rx) = mpsc::channel(queue_capacity);
        let worker = tokio::spawn(Self::run_queue(core.clone(), queue_rx));

        Self {
            core,
            queue_tx,
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Agent kind name
    pub fn name(&self) -> &str {
        self.core.agent.name()
    }

    /// Whether the agent accepts work
    pub fn is_enabled(&self) -> bool {
        self.core.config.enabled
    }

    /// Lifetime processing metrics
    pub fn metrics(&self) -> &AgentMetrics {
        &self.core.metrics
    }

    /// Process a single document
    ///
    /// Security and enablement failures are returned as errors (fatal to
    /// the call); agent processing failures are recorded inside the result.
    pub async fn process_document(
        &self,
        document: &LegalDocument,
        caller: Option<&CallerIdentity>,
    ) -> Result<ProcessingResult<A::Output>, AgentError> {
        self.admit(caller).await?;
        Ok(self.core.process_one(document).await)
    }

    /// Process a batch of documents
    ///
    /// Input is chunked to the configured max batch size. Documents within
    /// a chunk run concurrently; chunks run sequentially to bound peak
    /// resource use. One document's failure never aborts its siblings.
    pub async fn process_batch(
        &self,
        documents: Vec<LegalDocument>,
        caller: Option<&CallerIdentity>,
    ) -> Result<BatchSummary<A::Output>, AgentError> {
        self.admit(caller).await?;

        let chunk_size = self.core.config.batch.max_batch_size.max(1);
        let mut results = Vec::with_capacity(documents.len());
        for chunk in documents.chunks(chunk_size) {
            results.extend(self.core.process_chunk(chunk).await);
        }

        let summary = BatchSummary::from_results(results);
        info!(
            agent = self.name(),
            succeeded = summary.succeeded,
            failed = summary.failed,
            "batch processed"
        );
        Ok(summary)
    }

    /// Add a document to the debounced batch queue
    ///
    /// The queue flushes when it reaches the max batch size or when the
    /// batch timeout elapses since the first queued document, whichever
    /// comes first.
    pub async fn queue_for_batch_processing(
        &self,
        document: LegalDocument,
        caller: Option<&CallerIdentity>,
    ) -> Result<(), AgentError> {
        self.admit(caller).await?;
        self.queue_tx
            .send(QueueCommand::Enqueue(document))
            .await
            .map_err(|_| AgentError::Queue("queue consumer stopped".to_string()))
    }

    /// Flush the queue immediately, waiting for the flush to finish
    pub async fn flush_queue(&self) -> Result<(), AgentError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.queue_tx
            .send(QueueCommand::Drain(ack_tx))
            .await
            .map_err(|_| AgentError::Queue("queue consumer stopped".to_string()))?;
        ack_rx
            .await
            .map_err(|_| AgentError::Queue("queue consumer stopped".to_string()))
    }

    /// Flush pending queued work, stop the consumer, and clear the cache
    ///
    /// Must be called before disposal; afterwards queue operations fail
    /// with [`AgentError::Queue`].
    pub async fn cleanup(&self) -> Result<(), AgentError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.queue_tx.send(QueueCommand::Stop(ack_tx)).await.is_ok() {
            let _ = ack_rx.await;
        }

        let worker = self.worker.lock().unwrap().take();
        if let Some(handle) = worker {
            let _ = handle.await;
        }

        self.core.cache.lock().unwrap().clear();
        info!(agent = self.name(), "agent cleaned up: {}", self.core.metrics.summary());
        Ok(())
    }

    async fn admit(&self, caller: Option<&CallerIdentity>) -> Result<(), AgentError> {
        if !self.core.config.enabled {
            return Err(AgentError::Disabled(self.core.config.name.clone()));
        }
        self.core.gate.authorize(caller).await?;
        Ok(())
    }

    /// Queue consumer: the single owner of the pending batch
    ///
    /// Enqueue and flush are mutually exclusive by construction - both are
    /// commands handled by this one task, so a flush in progress can never
    /// be re-entered by a concurrent enqueue.
    async fn run_queue(core: Arc<AgentCore<A>>, mut rx: mpsc::Receiver<QueueCommand>) {
        let max = core.config.batch.max_batch_size.max(1);
        let timeout = core.config.batch.batch_timeout();
        let mut pending: Vec<LegalDocument> = Vec::new();
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                command = rx.recv() => match command {
                    Some(QueueCommand::Enqueue(document)) => {
                        if pending.is_empty() {
                            deadline = Some(Instant::now() + timeout);
                        }
                        pending.push(document);
                        if pending.len() >= max {
                            Self::flush_pending(&core, &mut pending).await;
                            deadline = None;
                        }
                    }
                    Some(QueueCommand::Drain(ack)) => {
                        Self::flush_pending(&core, &mut pending).await;
                        deadline = None;
                        let _ = ack.send(());
                    }
                    Some(QueueCommand::Stop(ack)) => {
                        Self::flush_pending(&core, &mut pending).await;
                        let _ = ack.send(());
                        break;
                    }
                    None => {
                        // All senders gone: drain what is left and exit.
                        Self::flush_pending(&core, &mut pending).await;
                        break;
                    }
                },
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    Self::flush_pending(&core, &mut pending).await;
                    deadline = None;
                }
            }
        }
    }

    async fn flush_pending(core: &Arc<AgentCore<A>>, pending: &mut Vec<LegalDocument>) {
        if pending.is_empty() {
            return;
        }
        let documents = std::mem::take(pending);
        debug!(
            agent = core.agent.name(),
            count = documents.len(),
            "flushing queued batch"
        );
        let _ = core.process_chunk(&documents).await;
        core.metrics.record_flush();
    }
}
