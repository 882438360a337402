use alloy::{
    eips::BlockId,
    primitives::{Address, Bytes},
};
use colored::Colorize;
use serde_json::{json, Value};
use viewcall_abi::{Calldata, DecodedArgs, MethodSignature};
use viewcall_common::utils::{io::types::display, strings::encode_hex_prefixed};

use crate::error::Error;

/// Result of a successful call
#[derive(Debug, Clone)]
pub struct CallResult {
    /// The parsed signature
    pub signature: MethodSignature,
    /// The contract that was called
    pub address: Address,
    /// The block the call was executed at
    pub block: BlockId,
    /// The calldata that was sent
    pub calldata: Calldata,
    /// The raw return data
    pub return_data: Bytes,
    /// The return data decoded with the signature's outputs, if any were declared
    pub decoded: Option<DecodedArgs>,
}

impl CallResult {
    /// Prints the decoded return values, or the raw return data when the signature declares no
    /// outputs
    pub fn display(&self) {
        println!("{} {}", "signature:".bold(), self.signature);
        println!("{}    {}", "target:".bold(), self.address);
        println!("{}     {}", "block:".bold(), self.block);
        println!("{}  {}", "calldata:".bold(), self.calldata);

        match &self.decoded {
            Some(decoded) => {
                println!("{}", "outputs:".bold());
                for line in display(&decoded.labelled(), "  ") {
                    println!("{line}");
                }
            }
            None => println!(
                "{}   {}",
                "returns:".bold(),
                encode_hex_prefixed(&self.return_data).green()
            ),
        }
    }

    /// Converts the call result to a pretty-printed JSON document
    pub fn to_json(&self) -> Result<String, Error> {
        let result = json!({
            "function": self.signature.to_function(),
            "signature": self.signature.to_string(),
            "address": self.address.to_string(),
            "block": self.block.to_string(),
            "calldata": self.calldata.to_string(),
            "return_data": encode_hex_prefixed(&self.return_data),
            "decoded_outputs": self.decoded.as_ref().map_or(Value::Null, DecodedArgs::to_json),
        });

        serde_json::to_string_pretty(&result)
            .map_err(|e| Error::Eyre(eyre::eyre!("Failed to serialize to JSON: {}", e)))
    }
}
