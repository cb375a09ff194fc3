use crate::errors::Result;
use crate::raw::RawConfiguration;

/// Source of configuration snapshots consumed by the resolver.
pub trait ClientConfig: Send + Sync {
    fn raw_config(&self) -> Result<RawConfiguration>;
}

/// Environment probe for in-cluster mode. `Ok(None)` means not in a cluster.
pub trait InClusterProbe: Send + Sync {
    fn in_cluster_host(&self) -> Result<Option<String>>;
}

/// In-memory configuration, optionally with the current context overridden.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    raw: RawConfiguration,
    context_override: Option<String>,
}

impl StaticConfig {
    pub fn new(raw: RawConfiguration) -> Self {
        Self { raw, context_override: None }
    }

    pub fn with_current_context(mut self, name: impl Into<String>) -> Self {
        self.context_override = Some(name.into());
        self
    }
}

impl ClientConfig for StaticConfig {
    fn raw_config(&self) -> Result<RawConfiguration> {
        let mut raw = self.raw.clone();
        if let Some(name) = &self.context_override {
            raw.current_context = name.clone();
        }
        Ok(raw)
    }
}

/// Configuration held as a JSON document; parsed on every read.
#[derive(Debug, Clone)]
pub struct JsonConfig {
    doc: String,
    context_override: Option<String>,
}

impl JsonConfig {
    pub fn new(doc: impl Into<String>) -> Self {
        Self { doc: doc.into(), context_override: None }
    }

    pub fn with_current_context(mut self, name: impl Into<String>) -> Self {
        self.context_override = Some(name.into());
        self
    }
}

impl ClientConfig for JsonConfig {
    fn raw_config(&self) -> Result<RawConfiguration> {
        let mut raw: RawConfiguration = serde_json::from_str(&self.doc)?;
        if let Some(name) = &self.context_override {
            raw.current_context = name.clone();
        }
        Ok(raw)
    }
}

/// Probe that never reports in-cluster mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotInCluster;

impl InClusterProbe for NotInCluster {
    fn in_cluster_host(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Probe that always reports in-cluster mode with a known host.
#[derive(Debug, Clone)]
pub struct FixedInCluster(pub String);

impl InClusterProbe for FixedInCluster {
    fn in_cluster_host(&self) -> Result<Option<String>> {
        Ok(Some(self.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ResolveError;
    use pretty_assertions::assert_eq;

    #[test]
    fn static_config_applies_context_override() {
        let cfg = StaticConfig::new(RawConfiguration::new("a").with_cluster("b", "host-b"))
            .with_current_context("b");
        let raw = cfg.raw_config().unwrap();
        assert_eq!(raw.current_context, "b");
        assert_eq!(raw.current_cluster().map(|c| c.server.as_str()), Some("host-b"));
    }

    #[test]
    fn json_config_rejects_malformed_document() {
        let err = JsonConfig::new("{not json").raw_config().unwrap_err();
        assert!(matches!(err, ResolveError::ConfigUnavailable(_)), "got {err:?}");
    }

    #[test]
    fn json_config_applies_context_override() {
        let cfg = JsonConfig::new(r#"{"current-context":"a","clusters":{"b":{"server":"host-b"}}}"#)
            .with_current_context("b");
        let raw = cfg.raw_config().unwrap();
        assert_eq!(raw.current_context, "b");
        assert_eq!(raw.current_cluster().map(|c| c.server.as_str()), Some("host-b"));
    }

    #[test]
    fn probes_report_their_mode() {
        assert_eq!(NotInCluster.in_cluster_host().unwrap(), None);
        assert_eq!(
            FixedInCluster("https://10.96.0.1:443".into()).in_cluster_host().unwrap(),
            Some("https://10.96.0.1:443".to_string())
        );
    }
}
