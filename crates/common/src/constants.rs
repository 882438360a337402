use fancy_regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    /// The following regex is used to validate Ethereum addresses.
    pub static ref ADDRESS_REGEX: Regex = Regex::new("^(0x)?[0-9a-fA-F]{40}$").expect("failed to compile regex");
}

/// The default block tag used for `eth_call` when none is given.
pub const DEFAULT_BLOCK_TAG: &str = "latest";

/// The default timeout, in seconds, for a single RPC round trip.
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;
