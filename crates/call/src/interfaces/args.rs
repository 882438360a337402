use std::str::FromStr;

use alloy::{eips::BlockId, primitives::Address};
use clap::Parser;
use derive_builder::Builder;
use viewcall_common::constants::{ADDRESS_REGEX, DEFAULT_BLOCK_TAG, DEFAULT_RPC_TIMEOUT_SECS};
use viewcall_config::parse_url_arg;

use crate::error::Error;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Calls a view function on a contract and decodes its return data",
    override_usage = "viewcall call --signature <SIGNATURE> --address <ADDRESS> [ARGS]... [OPTIONS]"
)]
/// Arguments for the call operation
///
/// The arguments are encoded with the signature's inputs, and the return data is decoded with its
/// outputs when any are declared.
pub struct CallArgs {
    /// The function signature, e.g. `balanceOf(address owner)(uint256)`.
    #[clap(long, short, visible_alias = "function-sig", required = true)]
    pub signature: String,

    /// The address of the contract to call.
    #[clap(long, short, required = true)]
    pub address: String,

    /// The arguments to call the function with, one per input of the signature.
    #[clap(allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// The RPC provider to use. This can be an explicit URL or a reference to a MESC endpoint.
    /// Falls back to the configured `rpc_url`, then `local_rpc_url`.
    #[clap(long, short, visible_alias = "network", value_parser = parse_url_arg, default_value = "", hide_default_value = true)]
    pub rpc_url: String,

    /// The block to call at: a tag (`latest`, `pending`, ...), a number or a block hash.
    #[clap(long, short, default_value = DEFAULT_BLOCK_TAG)]
    pub block: String,

    /// Seconds to wait for the RPC provider. 0 waits indefinitely.
    #[clap(long, default_value_t = DEFAULT_RPC_TIMEOUT_SECS)]
    pub timeout: u64,

    /// 'print' to print to the console, 'json' to print JSON, or a file path to write JSON to.
    #[clap(long = "output", short = 'o', default_value = "print", hide_default_value = true)]
    pub output: String,
}

impl CallArgs {
    /// Parses the target address
    pub fn target_address(&self) -> Result<Address, Error> {
        if !ADDRESS_REGEX.is_match(&self.address).unwrap_or(false) {
            return Err(Error::ParseError(format!("invalid address '{}'", self.address)));
        }
        Address::from_str(&self.address)
            .map_err(|e| Error::ParseError(format!("invalid address '{}': {e}", self.address)))
    }

    /// Parses the block to call at. Decimal numbers are accepted alongside tags, hex numbers and
    /// block hashes.
    pub fn block_id(&self) -> Result<BlockId, Error> {
        let block = self.block.trim();
        if let Ok(number) = block.parse::<u64>() {
            return Ok(BlockId::number(number));
        }
        BlockId::from_str(block)
            .map_err(|e| Error::ParseError(format!("invalid block '{}': {e}", self.block)))
    }
}

impl CallArgsBuilder {
    /// Creates a new CallArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            signature: Some(String::new()),
            address: Some(String::new()),
            args: Some(Vec::new()),
            rpc_url: Some(String::new()),
            block: Some(DEFAULT_BLOCK_TAG.to_string()),
            timeout: Some(DEFAULT_RPC_TIMEOUT_SECS),
            output: Some(String::from("print")),
        }
    }
}
