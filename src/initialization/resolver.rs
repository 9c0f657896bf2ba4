//! DNS resolver initialization.

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for forward lookups.
///
/// Uses the default upstream configuration and default timeouts. `ndots` is set
/// to 0 so the queried name is never expanded with local search domains.
pub fn init_resolver() -> TokioAsyncResolver {
    let mut opts = ResolverOpts::default();
    opts.ndots = 0;

    TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}
