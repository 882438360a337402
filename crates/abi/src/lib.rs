//! Human-readable function signatures and the calldata they describe.
//!
//! A signature such as `balanceOf(address owner)(uint256)` is parsed into a [`MethodSignature`],
//! which can then frame arguments into [`Calldata`] or unpack raw bytes back into
//! [`DecodedArgs`]. The ABI rules themselves are delegated to `alloy-dyn-abi`.

/// Error types for parsing, encoding and decoding.
pub mod error;

mod calldata;
mod signature;

pub use calldata::{
    decode, decode_output, decode_str, encode, encode_values, Calldata, DecodedArgs, DecodedParam,
};
pub use error::{DecodeError, Error, ParseError};
pub use signature::{MethodSignature, Param};

// re-export the value types callers need to work with decoded data
pub use alloy_dyn_abi::{DynSolType, DynSolValue};
