//! Helper functions for converting ABI types and values to their JSON representations.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use serde_json::{Map, Value};

use crate::utils::strings::encode_hex_prefixed;

/// Convert a given DynSolType to its abi-safe "type" string representation, i.e. the form used
/// in JSON ABI files where tuples are spelled `tuple` and carry their members as components.
///
/// ```
/// use viewcall_common::ether::types::to_abi_string;
/// use alloy_dyn_abi::DynSolType;
///
/// let ty = DynSolType::Array(Box::new(DynSolType::Tuple(vec![DynSolType::Bool])));
/// assert_eq!(to_abi_string(&ty), "tuple[]");
/// ```
pub fn to_abi_string(param_type: &DynSolType) -> String {
    match param_type {
        DynSolType::Array(inner) => format!("{}[]", to_abi_string(inner)),
        DynSolType::FixedArray(inner, size) => format!("{}[{}]", to_abi_string(inner), size),
        DynSolType::Tuple(_) => "tuple".to_string(),
        _ => param_type.to_string(),
    }
}

/// an extension on DynSolValue which allows serialization to a [`serde_json::Value`]
pub trait DynSolValueExt {
    /// Serialize the value to a serde_json::Value
    fn serialize(&self) -> Value;
}

impl DynSolValueExt for DynSolValue {
    fn serialize(&self) -> Value {
        match self {
            DynSolValue::Address(addr) => Value::String(addr.to_string()),
            DynSolValue::Bool(b) => Value::Bool(*b),
            DynSolValue::String(s) => Value::String(s.to_owned()),
            DynSolValue::Bytes(b) => Value::String(encode_hex_prefixed(b)),
            DynSolValue::Uint(u, _) => Value::String(u.to_string()),
            DynSolValue::Int(i, _) => Value::String(i.to_string()),
            DynSolValue::FixedBytes(b, size) => Value::String(encode_hex_prefixed(&b[..*size])),
            DynSolValue::Function(f) => Value::String(encode_hex_prefixed(f.as_slice())),
            DynSolValue::Array(arr) | DynSolValue::FixedArray(arr) => {
                Value::Array(arr.iter().map(|v| v.serialize()).collect())
            }
            DynSolValue::Tuple(t) => {
                let mut map = Map::new();
                for (i, v) in t.iter().enumerate() {
                    map.insert(format!("component{i}"), v.serialize());
                }
                Value::Object(map)
            }
            _ => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, Function, B256, I256, U256};
    use serde_json::json;

    #[test]
    fn test_to_abi_string_simple() {
        let input = DynSolType::String;
        assert_eq!(super::to_abi_string(&input), "string");
    }

    #[test]
    fn test_to_abi_string_array() {
        let input = DynSolType::Array(Box::new(DynSolType::Uint(8)));
        assert_eq!(super::to_abi_string(&input), "uint8[]");
    }

    #[test]
    fn test_to_abi_string_fixed_array() {
        let input = DynSolType::FixedArray(Box::new(DynSolType::Uint(8)), 2);
        assert_eq!(super::to_abi_string(&input), "uint8[2]");
    }

    #[test]
    fn test_to_abi_string_tuple() {
        let input = DynSolType::Tuple(vec![DynSolType::Uint(8), DynSolType::Uint(256)]);
        assert_eq!(super::to_abi_string(&input), "tuple");
    }

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(DynSolValue::Uint(U256::from(1234), 256).serialize(), json!("1234"));
        assert_eq!(DynSolValue::Int("-5".parse::<I256>().expect("valid int"), 8).serialize(), json!("-5"));
        assert_eq!(DynSolValue::Bool(true).serialize(), json!(true));
        assert_eq!(
            DynSolValue::Address(Address::ZERO).serialize(),
            json!("0x0000000000000000000000000000000000000000")
        );
        assert_eq!(DynSolValue::Bytes(vec![0xde, 0xad]).serialize(), json!("0xdead"));
    }

    #[test]
    fn test_serialize_function() {
        let mut raw = [0u8; 24];
        raw[0] = 0xab;
        raw[23] = 0x01;
        let value = DynSolValue::Function(Function::new(raw));
        assert_eq!(value.serialize(), json!(format!("0xab{}01", "00".repeat(22))));
    }

    #[test]
    fn test_serialize_fixed_bytes_is_truncated_to_size() {
        let mut word = B256::ZERO;
        word[0] = 0xab;
        word[1] = 0xcd;
        assert_eq!(DynSolValue::FixedBytes(word, 2).serialize(), json!("0xabcd"));
    }

    #[test]
    fn test_serialize_tuple() {
        let value = DynSolValue::Tuple(vec![
            DynSolValue::String("hi".into()),
            DynSolValue::Array(vec![DynSolValue::Bool(false)]),
        ]);
        assert_eq!(value.serialize(), json!({"component0": "hi", "component1": [false]}));
    }
}
