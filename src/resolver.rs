use crate::errors::{ResolveError, Result};
use crate::provider::{ClientConfig, InClusterProbe, NotInCluster};
use crate::raw::RawConfiguration;
use itertools::Itertools;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolved host together with the snapshot it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub host: String,
    pub raw: RawConfiguration,
}

/// =========================
/// Core decision (no probe)
/// =========================

/// Pick a host from `cfg` without consulting the environment.
///
/// The cluster named by the current context wins. Otherwise the first entry
/// yielded by map iteration is used; which one that is when several exist is
/// unspecified and callers must not rely on it.
pub fn resolve_host(cfg: &dyn ClientConfig) -> Result<Resolution> {
    let raw = cfg.raw_config()?;

    if let Some(entry) = raw.current_cluster() {
        debug!(context = %raw.current_context, host = %entry.server, "resolved current context");
        let host = entry.server.clone();
        return Ok(Resolution { host, raw });
    }

    let host = match raw.clusters.iter().next() {
        Some((name, entry)) => {
            warn!(
                context = %raw.current_context,
                cluster = %name,
                candidates = raw.clusters.len(),
                "current context has no cluster, falling back to an arbitrary one"
            );
            entry.server.clone()
        }
        None => return Err(ResolveError::NoClusterFound),
    };
    Ok(Resolution { host, raw })
}

/// Every distinct server the fallback could return, sorted.
pub fn candidate_hosts(raw: &RawConfiguration) -> Vec<String> {
    raw.clusters
        .values()
        .map(|c| c.server.clone())
        .sorted()
        .dedup()
        .collect()
}

/// =========================
/// Resolver with in-cluster probe
/// =========================

#[derive(Clone)]
pub struct HostResolver {
    probe: Arc<dyn InClusterProbe>,
}

impl Default for HostResolver {
    fn default() -> Self {
        Self::new(NotInCluster)
    }
}

impl HostResolver {
    pub fn new<P: InClusterProbe + 'static>(probe: P) -> Self {
        Self { probe: Arc::new(probe) }
    }

    /// In-cluster host if the probe fires, otherwise [`resolve_host`].
    pub fn resolve(&self, cfg: &dyn ClientConfig) -> Result<Resolution> {
        if let Some(host) = self.probe.in_cluster_host()? {
            debug!(host = %host, "in-cluster mode");
            return Ok(Resolution { host, raw: RawConfiguration::default() });
        }
        resolve_host(cfg)
    }
}
