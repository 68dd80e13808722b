//! Configuration for document-processing agents

use crate::error::AgentError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Result cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a cached result stays fresh (seconds)
    /// Default: 300
    pub ttl_secs: u64,

    /// Maximum number of cached results before eviction kicks in
    /// Default: 1000
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 300,
            max_size: 1000,
        }
    }
}

impl CacheConfig {
    /// Get the TTL as a Duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Batch processing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum documents per processed chunk; the debounced queue also
    /// flushes when it reaches this size
    /// Default: 10
    pub max_batch_size: usize,

    /// How long an incomplete queued batch waits before flushing anyway
    /// (milliseconds)
    /// Default: 1000
    pub batch_timeout_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 10,
            batch_timeout_ms: 1000,
        }
    }
}

impl BatchConfig {
    /// Get the batch timeout as a Duration
    pub fn batch_timeout(&self) -> Duration {
        Duration::from_millis(self.batch_timeout_ms)
    }
}

/// Security gate settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Whether document-accessing calls must carry a caller identity
    #[serde(default)]
    pub require_auth: bool,

    /// Roles allowed to call the agent (empty = any verified caller)
    #[serde(default)]
    pub allowed_roles: Vec<String>,

    /// Domain codes allowed to call the agent (empty = any)
    #[serde(default)]
    pub allowed_domains: Vec<String>,
}

/// Full configuration of one agent instance
///
/// # Examples
///
/// ```
/// use blackstone_agent::AgentConfig;
///
/// let config = AgentConfig::new("impact-1", "cross-domain-impact", "privacy");
/// assert!(config.enabled);
/// assert_eq!(config.batch.max_batch_size, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Unique agent instance id
    pub id: String,

    /// Agent name (shared by instances of the same kind)
    pub name: String,

    /// Legal domain this agent is scoped to
    pub domain_code: String,

    /// Whether the agent accepts work
    /// Default: true
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Result cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Batch processing settings
    #[serde(default)]
    pub batch: BatchConfig,

    /// Security gate settings
    #[serde(default)]
    pub security: SecurityConfig,
}

fn default_enabled() -> bool {
    true
}

impl AgentConfig {
    /// Create a default-valued configuration for the given instance
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        domain_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain_code: domain_code.into(),
            enabled: true,
            cache: CacheConfig::default(),
            batch: BatchConfig::default(),
            security: SecurityConfig::default(),
        }
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, AgentError> {
        let config: AgentConfig =
            toml::from_str(text).map_err(|e| AgentError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AgentError> {
        let text = std::fs::read_to_string(path).map_err(|e| AgentError::Config(e.to_string()))?;
        Self::from_toml_str(&text)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AgentError> {
        if self.id.trim().is_empty() {
            return Err(AgentError::Config("agent id must not be empty".into()));
        }
        if self.batch.max_batch_size == 0 {
            return Err(AgentError::Config(
                "max_batch_size must be greater than 0".into(),
            ));
        }
        if self.cache.max_size == 0 {
            return Err(AgentError::Config("cache max_size must be greater than 0".into()));
        }
        Ok(())
    }
}
