use crate::{error::Error, ether::provider::MultiTransportProvider};
use alloy::{
    eips::BlockId,
    primitives::{Address, Bytes},
};
use std::{future::Future, time::Duration};
use tracing::{debug, trace};

/// Get the bytecode of the provided contract address at the given block
///
/// ```no_run
/// use viewcall_common::ether::rpc::get_code;
///
/// // let bytecode = get_code(Address::ZERO, BlockId::latest(), "https://eth.llamarpc.com", 30).await;
/// // assert!(bytecode.is_ok());
/// ```
pub async fn get_code(
    contract_address: Address,
    block: BlockId,
    rpc_url: &str,
    timeout_secs: u64,
) -> Result<Vec<u8>, Error> {
    let provider = connect(rpc_url, timeout_secs).await?;
    with_timeout(timeout_secs, provider.get_code_at(contract_address, block))
        .await?
        .map_err(|e| Error::RpcError(format!("failed to get account code: {e}")))
}

/// Perform a read-only `eth_call` of `calldata` against `contract_address`, returning the raw
/// return data.
///
/// ```no_run
/// use viewcall_common::ether::rpc::call;
///
/// // let output = call(address, calldata.into(), BlockId::latest(), "https://eth.llamarpc.com", 30).await?;
/// ```
pub async fn call(
    contract_address: Address,
    calldata: Bytes,
    block: BlockId,
    rpc_url: &str,
    timeout_secs: u64,
) -> Result<Bytes, Error> {
    let provider = connect(rpc_url, timeout_secs).await?;

    debug!("calling {} at block {} with {} bytes of calldata", contract_address, block, calldata.len());
    trace!("calldata: {}", calldata);

    let output = with_timeout(timeout_secs, provider.call(contract_address, calldata, block))
        .await?
        .map_err(|e| Error::RpcError(format!("eth_call failed: {e}")))?;

    trace!("eth_call returned {} bytes: {}", output.len(), output);
    Ok(output)
}

/// Connect within the same bound as the request itself; ws and ipc transports handshake here.
async fn connect(rpc_url: &str, timeout_secs: u64) -> Result<MultiTransportProvider, Error> {
    with_timeout(timeout_secs, MultiTransportProvider::connect(rpc_url))
        .await?
        .map_err(|e| Error::RpcError(format!("failed to connect to provider '{rpc_url}': {e}")))
}

/// Bound a single round trip. A timeout of `0` disables the bound.
async fn with_timeout<F: Future>(timeout_secs: u64, future: F) -> Result<F::Output, Error> {
    if timeout_secs == 0 {
        return Ok(future.await);
    }

    tokio::time::timeout(Duration::from_secs(timeout_secs), future)
        .await
        .map_err(|_| Error::Timeout(timeout_secs))
}
