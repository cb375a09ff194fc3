use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Point-in-time snapshot of a client configuration.
///
/// `current_context` is treated as a candidate key into `clusters`; it may be
/// empty or name nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConfiguration {
    #[serde(rename = "current-context", default)]
    pub current_context: String,
    #[serde(default)]
    pub clusters: HashMap<String, ClusterEntry>,
}

/// One named cluster endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterEntry {
    #[serde(default)]
    pub server: String,
}

impl ClusterEntry {
    pub fn new(server: impl Into<String>) -> Self {
        Self { server: server.into() }
    }
}

impl RawConfiguration {
    pub fn new(current_context: impl Into<String>) -> Self {
        Self { current_context: current_context.into(), clusters: HashMap::new() }
    }

    /// Builder-style insert, handy for tests and in-memory configs.
    pub fn with_cluster(mut self, name: impl Into<String>, server: impl Into<String>) -> Self {
        self.clusters.insert(name.into(), ClusterEntry::new(server));
        self
    }

    /// The entry selected by `current_context`, if it resolves.
    pub fn current_cluster(&self) -> Option<&ClusterEntry> {
        self.clusters.get(&self.current_context)
    }
}
