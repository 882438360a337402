use std::time::Instant;

use tracing::{debug, info};
use viewcall_abi::{encode as encode_calldata, MethodSignature};

use crate::{error::Error, interfaces::EncodeArgs, EncodeResult};

/// Encodes the arguments in `args` against the function signature.
///
/// The selector is prepended unless `no_selector` is set.
pub async fn encode(args: EncodeArgs) -> Result<EncodeResult, Error> {
    let start_time = Instant::now();

    let signature = MethodSignature::parse(&args.signature)?;
    debug!("encoding {} argument(s) for {}", args.args.len(), signature.canonical());

    let calldata = encode_calldata(&signature, &args.args, !args.no_selector)?;

    info!("encoded {} bytes of calldata", calldata.len());
    debug!("encoding took {:?}", start_time.elapsed());

    Ok(EncodeResult { signature, calldata })
}
