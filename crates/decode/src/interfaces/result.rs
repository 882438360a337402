use colored::Colorize;
use serde_json::json;
use viewcall_abi::{DecodedArgs, MethodSignature};
use viewcall_common::utils::{io::types::display, strings::encode_hex_prefixed};

use crate::error::Error;

#[derive(Debug, Clone)]
/// Result of a successful decode operation
pub struct DecodeResult {
    /// The parsed signature
    pub signature: MethodSignature,
    /// Whether the data was decoded as return data
    pub returns: bool,
    /// The decoded values
    pub decoded: DecodedArgs,
}

impl DecodeResult {
    /// Prints the signature followed by one line (or block) per decoded value
    pub fn display(&self) {
        println!("{} {}", "signature:".bold(), self.signature);
        if let Some(selector) = self.decoded.selector {
            println!("{}  {}", "selector:".bold(), encode_hex_prefixed(selector.as_slice()));
        }

        if self.decoded.is_empty() {
            println!("{}", "no values decoded".dimmed());
            return;
        }

        let heading = if self.returns { "outputs:" } else { "inputs:" };
        println!("{}", heading.bold());
        for line in display(&self.decoded.labelled(), "  ") {
            println!("{line}");
        }
    }

    /// Converts the decode result to JSON: the function in JSON ABI form together with the
    /// decoded values keyed by parameter label
    pub fn to_json(&self) -> Result<String, Error> {
        let mut result = json!({
            "function": self.signature.to_function(),
            "signature": self.signature.to_string(),
            "selector": self.decoded.selector.map(|s| encode_hex_prefixed(s.as_slice())),
        });
        let key = if self.returns { "decoded_outputs" } else { "decoded_inputs" };
        result[key] = self.decoded.to_json();

        serde_json::to_string_pretty(&result)
            .map_err(|e| Error::Eyre(eyre::eyre!("Failed to serialize to JSON: {}", e)))
    }
}
