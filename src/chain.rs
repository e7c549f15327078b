use crate::filter::Verdict;

/// Priority of this filter within a chain; lower runs earlier.
pub const CHAIN_PRIORITY: u32 = 10;

/// Static metadata the filter-chain arbiter reads once at attach time.
/// Never consulted on the per-packet path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    pub priority: u32,
    /// Verdict for packets this filter declines to judge.
    pub default_action: Verdict,
}

/// Returns the descriptor to register with the chain arbiter.
pub const fn chain_config() -> ChainConfig {
    ChainConfig {
        priority: CHAIN_PRIORITY,
        default_action: Verdict::Pass,
    }
}
