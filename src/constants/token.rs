//! Bounds and defaults for on-chain token state reads.

/// Largest `decimals` value a token may report and still produce a balance
/// record. ERC-20 tokens in practice use 18 or fewer.
pub const MAX_TOKEN_DECIMALS: u8 = 18;

/// Contract reads issued per token: balanceOf, decimals, symbol, name.
pub const READS_PER_TOKEN: usize = 4;

/// Timeout applied to outbound RPC requests when none is configured.
pub const DEFAULT_RPC_TIMEOUT_MS: u64 = 30_000;
