//! Integration tests for decode functionality.

mod integration_tests {
    use alloy::primitives::U256;
    use viewcall_abi::DynSolValue;
    use viewcall_decoder::{DecodeArgs, DecodeArgsBuilder};

    #[tokio::test]
    async fn test_decode_set_name() {
        let args = DecodeArgs {
            signature: String::from("setName(string name)"),
            calldata: String::from("0xc47f00270000000000000000000000000000000000000000000000000000000000000020000000000000000000000000000000000000000000000000000000000000000b6a6265636b65722e657468000000000000000000000000000000000000000000"),
            no_selector: false,
            returns: false,
            output: String::from("print"),
        };

        let result = viewcall_decoder::decode(args).await.expect("failed to decode");
        assert_eq!(result.decoded.get("name"), Some(&DynSolValue::String("jbecker.eth".into())));
    }

    #[tokio::test]
    async fn test_decode_quoted_signature() {
        let args = DecodeArgsBuilder::new()
            .signature(String::from("'call_this_view_function(uint256 arg1)'"))
            .calldata(String::from(
                "1e4f420d00000000000000000000000000000000000000000000000000000000000004d2",
            ))
            .build()
            .expect("failed to build args");

        let result = viewcall_decoder::decode(args).await.expect("failed to decode");
        assert_eq!(result.decoded.get("arg1"), Some(&DynSolValue::Uint(U256::from(1234), 256)));
        assert_eq!(result.decoded.to_json(), serde_json::json!({ "arg1": "1234" }));
    }

    #[tokio::test]
    async fn test_encode_then_decode() {
        let signature = "submit(address to, (uint256 amount, bytes memo)[] items, bool urgent)";
        let values = vec![
            String::from("0x000000000000000000000000000000000000dEaD"),
            String::from("[(1, 0x01), (2, 0x0202)]"),
            String::from("true"),
        ];

        let encoded = viewcall_encoder::encode(
            viewcall_encoder::EncodeArgsBuilder::new()
                .signature(signature.to_string())
                .args(values)
                .build()
                .expect("failed to build args"),
        )
        .await
        .expect("failed to encode");

        let decoded = viewcall_decoder::decode(
            DecodeArgsBuilder::new()
                .signature(signature.to_string())
                .calldata(encoded.calldata.to_string())
                .build()
                .expect("failed to build args"),
        )
        .await
        .expect("failed to decode");

        assert_eq!(decoded.decoded.len(), 3);
        assert_eq!(decoded.decoded.get("urgent"), Some(&DynSolValue::Bool(true)));
        match decoded.decoded.get("items") {
            Some(DynSolValue::Array(items)) => assert_eq!(items.len(), 2),
            other => panic!("unexpected items {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decode_truncated_calldata() {
        let args = DecodeArgsBuilder::new()
            .signature(String::from("setName(string name)"))
            .calldata(String::from("0xc47f0027000000"))
            .build()
            .expect("failed to build args");

        let err = viewcall_decoder::decode(args).await.expect_err("should fail");
        assert!(matches!(
            err,
            viewcall_decoder::Error::AbiError(viewcall_abi::Error::Decode(
                viewcall_abi::DecodeError::Truncated { .. }
            ))
        ));
    }
}
