use clap::{Parser, Subcommand};

use viewcall_config::ConfigArgs;
use viewcall_core::{
    viewcall_caller::CallArgs, viewcall_decoder::DecodeArgs, viewcall_encoder::EncodeArgs,
};

use crate::log_args::LogArgs;

#[derive(Debug, Parser)]
#[clap(name = "viewcall", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    pub(crate) logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "viewcall calls Ethereum view functions and encodes or decodes calldata using human-readable function signatures."
)]
pub(crate) enum Subcommands {
    #[clap(name = "call", about = "Call a view function and decode its return data")]
    Call(CallArgs),

    #[clap(name = "encode", about = "Encode arguments into calldata")]
    Encode(EncodeArgs),

    #[clap(name = "decode", about = "Decode calldata or return data into readable types")]
    Decode(DecodeArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),

    #[clap(name = "version", about = "Print the current version")]
    Version,
}
