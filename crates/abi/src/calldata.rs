use std::fmt;

use alloy::primitives::{Bytes, Selector};
use alloy_dyn_abi::{DynSolType, DynSolValue};
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};
use viewcall_common::{
    ether::types::DynSolValueExt,
    utils::strings::{decode_hex, encode_hex_prefixed},
};

use crate::{
    error::{DecodeError, Error},
    signature::{MethodSignature, Param},
};

/// ABI-encoded call arguments, optionally prefixed by the function selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calldata {
    selector: Option<Selector>,
    arguments: Vec<u8>,
}

impl Calldata {
    /// The selector prefix, if the calldata carries one.
    pub fn selector(&self) -> Option<Selector> {
        self.selector
    }

    /// The encoded arguments without the selector.
    pub fn arguments(&self) -> &[u8] {
        &self.arguments
    }

    /// The total length in bytes, including the selector.
    pub fn len(&self) -> usize {
        self.selector.map_or(0, |_| 4) + self.arguments.len()
    }

    /// Whether the calldata has neither a selector nor arguments.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full byte sequence: selector (if any) followed by the arguments.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        if let Some(selector) = self.selector {
            bytes.extend_from_slice(selector.as_slice());
        }
        bytes.extend_from_slice(&self.arguments);
        bytes
    }

    /// The full byte sequence as [`Bytes`], ready to be used as transaction input.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::from(self.to_vec())
    }
}

impl fmt::Display for Calldata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_hex_prefixed(&self.to_vec()))
    }
}

/// A single decoded value together with the parameter it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedParam {
    /// The parameter label, or its position when unlabeled.
    pub key: String,
    /// The declared type.
    pub ty: DynSolType,
    /// The labelled tuple components of the declared type. Empty unless its base type is a tuple.
    pub components: Vec<Param>,
    /// The decoded value.
    pub value: DynSolValue,
}

impl DecodedParam {
    /// The value as JSON, with tuple members keyed by their labels.
    pub fn to_json(&self) -> Value {
        labelled_json(&self.value, &self.components)
    }
}

/// The result of decoding calldata or return data against a [`MethodSignature`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedArgs {
    /// The selector that was stripped from the input, if any.
    pub selector: Option<Selector>,
    /// The decoded values, in declaration order.
    pub params: Vec<DecodedParam>,
}

impl DecodedArgs {
    /// Looks up a decoded value by label or positional key.
    pub fn get(&self, key: &str) -> Option<&DynSolValue> {
        self.params.iter().find(|param| param.key == key).map(|param| &param.value)
    }

    /// The decoded values, in declaration order.
    pub fn values(&self) -> Vec<DynSolValue> {
        self.params.iter().map(|param| param.value.clone()).collect()
    }

    /// Number of decoded values.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `(key, value)` pairs, in declaration order.
    pub fn labelled(&self) -> Vec<(String, DynSolValue)> {
        self.params.iter().map(|param| (param.key.clone(), param.value.clone())).collect()
    }

    /// A JSON object mapping each key to its serialized value.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.params
                .iter()
                .map(|param| (param.key.clone(), param.to_json()))
                .collect::<Map<_, _>>(),
        )
    }
}

/// Encodes string arguments against the signature's inputs.
///
/// ```
/// use viewcall_abi::{encode, MethodSignature};
///
/// let sig = MethodSignature::parse("balanceOf(address)").unwrap();
/// let calldata = encode(&sig, &["0x00000000219ab540356cBB839Cbe05303d7705Fa"], true).unwrap();
/// assert!(calldata.to_string().starts_with("0x70a08231"));
/// assert_eq!(calldata.len(), 36);
/// ```
pub fn encode<S: AsRef<str>>(
    signature: &MethodSignature,
    args: &[S],
    with_selector: bool,
) -> Result<Calldata, Error> {
    check_arity(signature, args.len())?;

    let values = signature
        .inputs
        .iter()
        .zip(args)
        .enumerate()
        .map(|(i, (param, arg))| {
            let arg = arg.as_ref();
            param.ty.coerce_str(arg).map_err(|e| Error::Type {
                param: param.key(i),
                ty: param.canonical_type(),
                value: arg.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(frame(signature, values, with_selector))
}

/// Encodes already-typed values against the signature's inputs.
pub fn encode_values(
    signature: &MethodSignature,
    values: &[DynSolValue],
    with_selector: bool,
) -> Result<Calldata, Error> {
    check_arity(signature, values.len())?;

    for (i, (param, value)) in signature.inputs.iter().zip(values).enumerate() {
        if !param.ty.matches(value) {
            return Err(Error::Type {
                param: param.key(i),
                ty: param.canonical_type(),
                value: format!("{value:?}"),
                reason: "value does not match the declared type".to_string(),
            });
        }
    }

    Ok(frame(signature, values.to_vec(), with_selector))
}

/// Decodes calldata against the signature's inputs. When `has_selector` is set, the leading four
/// bytes must equal the signature's selector.
pub fn decode(
    signature: &MethodSignature,
    data: &[u8],
    has_selector: bool,
) -> Result<DecodedArgs, Error> {
    let (selector, body) = if has_selector {
        if data.len() < 4 {
            return Err(DecodeError::Truncated { expected: 4, actual: data.len() }.into());
        }
        let (head, body) = data.split_at(4);
        let actual = Selector::from_slice(head);
        let expected = signature.selector();
        if actual != expected {
            return Err(DecodeError::SelectorMismatch { expected, actual }.into());
        }
        (Some(actual), body)
    } else {
        (None, data)
    };

    Ok(DecodedArgs { selector, params: decode_params(&signature.inputs, body)? })
}

/// Same as [`decode`], but takes the calldata as a hex string (the `0x` prefix is optional).
pub fn decode_str(
    signature: &MethodSignature,
    calldata: &str,
    has_selector: bool,
) -> Result<DecodedArgs, Error> {
    let data = decode_hex(calldata).map_err(|e| DecodeError::InvalidHex(e.to_string()))?;
    decode(signature, &data, has_selector)
}

/// Decodes return data against the signature's outputs.
pub fn decode_output(signature: &MethodSignature, data: &[u8]) -> Result<DecodedArgs, Error> {
    Ok(DecodedArgs { selector: None, params: decode_params(&signature.outputs, data)? })
}

fn check_arity(signature: &MethodSignature, actual: usize) -> Result<(), Error> {
    let expected = signature.inputs.len();
    if expected != actual {
        return Err(Error::Arity { expected, actual });
    }
    Ok(())
}

fn frame(signature: &MethodSignature, values: Vec<DynSolValue>, with_selector: bool) -> Calldata {
    let arguments = DynSolValue::Tuple(values).abi_encode_params();
    debug!("encoded {} bytes of arguments for {}", arguments.len(), signature.canonical());
    trace!("arguments: {}", encode_hex_prefixed(&arguments));

    Calldata { selector: with_selector.then(|| signature.selector()), arguments }
}

fn decode_params(params: &[Param], data: &[u8]) -> Result<Vec<DecodedParam>, DecodeError> {
    trace!("decoding {} bytes against {} parameter(s)", data.len(), params.len());

    if params.is_empty() {
        if !data.is_empty() {
            warn!("ignoring {} bytes of data, no parameters were declared", data.len());
        }
        return Ok(Vec::new());
    }

    let minimum = params.iter().fold(0usize, |size, param| size.saturating_add(head_size(&param.ty)));
    if data.len() < minimum {
        return Err(DecodeError::Truncated { expected: minimum, actual: data.len() });
    }

    let ty = DynSolType::Tuple(params.iter().map(|param| param.ty.clone()).collect());
    let values = match ty.abi_decode_params(data) {
        Ok(DynSolValue::Tuple(values)) => values,
        Ok(other) => {
            return Err(DecodeError::Malformed(format!("expected a tuple, decoded {other:?}")))
        }
        Err(e) => return Err(DecodeError::Malformed(e.to_string())),
    };

    let consumed = DynSolValue::Tuple(values.clone()).abi_encode_params().len();
    if consumed < data.len() {
        warn!("ignoring {} trailing bytes after the decoded values", data.len() - consumed);
    }

    Ok(params
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (param, value))| DecodedParam {
            key: param.key(i),
            ty: param.ty.clone(),
            components: param.components.clone(),
            value,
        })
        .collect())
}

/// Serializes `value`, keying the members of tuples by the matching component labels. Arrays
/// pass the components through to their elements.
fn labelled_json(value: &DynSolValue, components: &[Param]) -> Value {
    match value {
        DynSolValue::Tuple(members) if members.len() == components.len() && !members.is_empty() => {
            Value::Object(
                components
                    .iter()
                    .zip(members)
                    .enumerate()
                    .map(|(i, (component, member))| {
                        (component.key(i), labelled_json(member, &component.components))
                    })
                    .collect::<Map<_, _>>(),
            )
        }
        DynSolValue::Array(elements) | DynSolValue::FixedArray(elements) => {
            Value::Array(elements.iter().map(|element| labelled_json(element, components)).collect())
        }
        other => other.serialize(),
    }
}

/// The number of bytes a type occupies in the head of an encoding.
fn head_size(ty: &DynSolType) -> usize {
    if ty.is_dynamic() {
        return 32;
    }
    match ty {
        DynSolType::Tuple(members) => {
            members.iter().fold(0usize, |size, member| size.saturating_add(head_size(member)))
        }
        DynSolType::FixedArray(inner, len) => head_size(inner).saturating_mul(*len),
        _ => 32,
    }
}
