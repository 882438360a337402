/// A thin wrapper around the `alloy` provider.
pub mod provider;

/// Convenience functions for the RPC calls viewcall makes.
pub mod rpc;

/// Helpers for converting ABI types and values to their JSON forms.
pub mod types;
