use std::time::Instant;

use eyre::eyre;
use tracing::{debug, info};
use viewcall_abi::{decode_output, decode_str, DecodeError, MethodSignature};
use viewcall_common::utils::strings::decode_hex;

use crate::{error::Error, interfaces::DecodeArgs, DecodeResult};

/// Decodes hex-encoded calldata against the signature in `args`.
///
/// With `returns` set the data is treated as the return value of the function and decoded with
/// its output types, which the signature must declare.
pub async fn decode(args: DecodeArgs) -> Result<DecodeResult, Error> {
    let start_time = Instant::now();

    let signature = MethodSignature::parse(&args.signature)?;

    let decoded = if args.returns {
        if signature.outputs.is_empty() {
            return Err(Error::Eyre(eyre!(
                "signature '{}' declares no outputs to decode return data with",
                signature
            )));
        }
        let data = decode_hex(&args.calldata)
            .map_err(|e| viewcall_abi::Error::from(DecodeError::InvalidHex(e.to_string())))?;
        debug!("decoding {} bytes of return data", data.len());
        decode_output(&signature, &data)?
    } else {
        decode_str(&signature, &args.calldata, !args.no_selector)?
    };

    info!("decoded {} value(s) for {}", decoded.len(), signature.canonical());
    debug!("decoding took {:?}", start_time.elapsed());

    Ok(DecodeResult { signature, returns: args.returns, decoded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecodeArgsBuilder;
    use alloy::primitives::U256;
    use viewcall_abi::DynSolValue;

    fn args(signature: &str, calldata: &str) -> DecodeArgsBuilder {
        let mut builder = DecodeArgsBuilder::new();
        builder.signature(signature.to_string()).calldata(calldata.to_string());
        builder
    }

    #[tokio::test]
    async fn test_decode_with_selector() {
        let result = decode(
            args(
                "call_this_view_function(uint256 arg1)",
                "0x1e4f420d00000000000000000000000000000000000000000000000000000000000004d2",
            )
            .build()
            .expect("failed to build args"),
        )
        .await
        .expect("failed to decode");

        assert_eq!(
            result.decoded.get("arg1"),
            Some(&DynSolValue::Uint(U256::from(1234), 256))
        );
    }

    #[tokio::test]
    async fn test_decode_without_selector() {
        let calldata = concat!(
            "00000000000000000000000000000000000000000000000000000000000004d2",
            "0000000000000000000000000000000000000000000000000000000000000040",
            "000000000000000000000000000000000000000000000000000000000000000a",
            "3078646561646265656600000000000000000000000000000000000000000000",
        );
        let result = decode(
            args("g(uint256 arg1, string addr)", calldata)
                .no_selector(true)
                .build()
                .expect("failed to build args"),
        )
        .await
        .expect("failed to decode");

        assert_eq!(result.decoded.get("addr"), Some(&DynSolValue::String("0xdeadbeef".into())));
        assert_eq!(result.decoded.selector, None);
    }

    #[tokio::test]
    async fn test_decode_returns() {
        let result = decode(
            args(
                "balanceOf(address)(uint256 balance)",
                "0x0000000000000000000000000000000000000000000000000000000000000064",
            )
            .returns(true)
            .build()
            .expect("failed to build args"),
        )
        .await
        .expect("failed to decode");

        assert_eq!(result.decoded.to_json(), serde_json::json!({ "balance": "100" }));
        let json: serde_json::Value =
            serde_json::from_str(&result.to_json().expect("serializes")).expect("valid json");
        assert_eq!(json["decoded_outputs"]["balance"], "100");
        assert_eq!(json["function"]["name"], "balanceOf");
    }

    #[tokio::test]
    async fn test_decode_returns_without_outputs() {
        let err = decode(
            args("balanceOf(address)", "0x00").returns(true).build().expect("failed to build args"),
        )
        .await
        .expect_err("no outputs");
        assert!(matches!(err, Error::Eyre(_)));
    }

    #[tokio::test]
    async fn test_decode_selector_mismatch() {
        let err = decode(
            args(
                "gsr_query(uint256 arg1)",
                "0x1e4f420d00000000000000000000000000000000000000000000000000000000000004d2",
            )
            .build()
            .expect("failed to build args"),
        )
        .await
        .expect_err("mismatched selector");
        assert!(matches!(
            err,
            Error::AbiError(viewcall_abi::Error::Decode(DecodeError::SelectorMismatch { .. }))
        ));
    }

    #[tokio::test]
    async fn test_decode_truncated() {
        let err = decode(args("f(uint256)", "0xb3de648b0000").build().expect("failed to build args"))
            .await
            .expect_err("truncated");
        assert!(matches!(
            err,
            Error::AbiError(viewcall_abi::Error::Decode(DecodeError::Truncated {
                expected: 32,
                actual: 2
            }))
        ));
    }
}
