use colored::Colorize;
use serde_json::json;
use viewcall_abi::{Calldata, MethodSignature};
use viewcall_common::utils::strings::encode_hex_prefixed;

use crate::error::Error;

/// Result of a successful encode operation
#[derive(Debug, Clone)]
pub struct EncodeResult {
    /// The parsed signature
    pub signature: MethodSignature,
    /// The encoded calldata
    pub calldata: Calldata,
}

impl EncodeResult {
    /// Prints the signature, selector and calldata
    pub fn display(&self) {
        println!("{} {}", "signature:".bold(), self.signature);
        if let Some(selector) = self.calldata.selector() {
            println!("{}  {}", "selector:".bold(), encode_hex_prefixed(selector.as_slice()));
        }
        println!("{}  {}", "calldata:".bold(), self.calldata.to_string().green());
    }

    /// Converts the result to a pretty-printed JSON document
    pub fn to_json(&self) -> Result<String, Error> {
        let value = json!({
            "signature": self.signature.to_string(),
            "canonical": self.signature.canonical(),
            "selector": self.calldata.selector().map(|s| encode_hex_prefixed(s.as_slice())),
            "calldata": self.calldata.to_string(),
        });
        serde_json::to_string_pretty(&value).map_err(|e| Error::Eyre(e.into()))
    }
}
