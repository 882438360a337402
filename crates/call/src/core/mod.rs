use std::time::Instant;

use tracing::{debug, info, warn};
use viewcall_abi::{decode_output, encode, MethodSignature};
use viewcall_common::{ether::rpc, utils::strings::encode_hex_prefixed};

use crate::{error::Error, interfaces::CallArgs, CallResult};

/// Calls the view function described by `args` with a single `eth_call`.
///
/// The return data is decoded with the signature's outputs if any are declared. An empty result
/// for a function that declares outputs triggers a code lookup, so that calling an address
/// without a contract is reported as such instead of as truncated return data.
pub async fn call(args: CallArgs) -> Result<CallResult, Error> {
    let start_time = Instant::now();

    let signature = MethodSignature::parse(&args.signature)?;
    let address = args.target_address()?;
    let block = args.block_id()?;
    if args.rpc_url.is_empty() {
        return Err(Error::RpcError(
            "no RPC endpoint given. pass --rpc-url or set one with `viewcall config rpc_url <URL>`"
                .to_string(),
        ));
    }

    let calldata = encode(&signature, &args.args, true)?;
    debug!("calling {} on {} at block {}", signature.canonical(), address, block);

    let return_data =
        rpc::call(address, calldata.to_bytes(), block, &args.rpc_url, args.timeout).await?;
    debug!("call returned {}", encode_hex_prefixed(&return_data));

    if return_data.is_empty() && !signature.outputs.is_empty() {
        let code = rpc::get_code(address, block, &args.rpc_url, args.timeout).await?;
        if code.is_empty() {
            return Err(Error::NoContractCode(address));
        }
        warn!("{} returned no data although it declares outputs", signature.canonical());
    }

    let decoded = if signature.outputs.is_empty() {
        None
    } else {
        Some(decode_output(&signature, &return_data)?)
    };

    info!("called {} on {}", signature.canonical(), address);
    debug!("call took {:?}", start_time.elapsed());

    Ok(CallResult { signature, address, block, calldata, return_data, decoded })
}
