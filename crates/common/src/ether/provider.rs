//! Create a provider for whichever transport the rpc url points at.
use alloy::{
    eips::BlockId,
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::TransactionRequest,
};
use eyre::{eyre, Result};

/// [`MultiTransportProvider`] is a convenience wrapper around the different transport types
/// supported by the [`Provider`].
#[derive(Clone, Debug)]
pub struct MultiTransportProvider {
    provider: RootProvider<Ethereum>,
}

// `ProviderBuilder::connect` picks the transport from the url: http(s), ws(s), or an ipc path.
impl MultiTransportProvider {
    /// Connect to a provider using the given rpc_url.
    pub async fn connect(rpc_url: &str) -> Result<Self> {
        if rpc_url.is_empty() {
            return Err(eyre!("No RPC URL provided"));
        }

        let provider = ProviderBuilder::new()
            .connect(rpc_url)
            .await
            .map_err(|e| eyre!("failed to connect to '{}': {}", rpc_url, e))?
            .root()
            .clone();
        Ok(Self { provider })
    }

    /// Get the bytecode at the given address.
    pub async fn get_code_at(&self, address: Address, block: BlockId) -> Result<Vec<u8>> {
        Ok(self.provider.get_code_at(address).block_id(block).await?.to_vec())
    }

    /// Execute a read-only `eth_call` of `input` against `to` at the given block.
    pub async fn call(&self, to: Address, input: Bytes, block: BlockId) -> Result<Bytes> {
        let tx = TransactionRequest::default().with_to(to).with_input(input);
        Ok(self.provider.call(tx).block(block).await?)
    }
}
