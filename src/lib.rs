pub mod errors;
pub mod raw;
pub mod provider;
pub mod resolver;

use errors::Result;

/// Convenience: resolve with no in-cluster probe.
pub fn resolve(cfg: &dyn ClientConfig) -> Result<Resolution> {
    HostResolver::default().resolve(cfg)
}

/// Re-export the types most callers need.
pub use errors::ResolveError;
pub use provider::{ClientConfig, FixedInCluster, InClusterProbe, JsonConfig, NotInCluster, StaticConfig};
pub use raw::{ClusterEntry, RawConfiguration};
pub use resolver::{candidate_hosts, resolve_host, HostResolver, Resolution};
