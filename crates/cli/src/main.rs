pub(crate) mod args;
pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use args::{Arguments, Subcommands};
use clap::Parser;
use error::Error;
use output::emit;
use tracing::debug;

use viewcall_common::utils::version::current_version;
use viewcall_config::{config, Configuration};
use viewcall_core::{
    viewcall_caller::call, viewcall_decoder::decode, viewcall_encoder::encode,
};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let args = Arguments::parse();

    // the guard flushes the log file when dropped, so it lives until the command finishes
    let _guard = args
        .logs
        .init_tracing()
        .map_err(|e| Error::Generic(format!("failed to initialize tracing: {e}")))?;
    args.logs.color.apply();

    match args.sub {
        Subcommands::Call(mut cmd) => {
            cmd.rpc_url = Configuration::load()?.resolve_rpc_url(&cmd.rpc_url);
            debug!("using rpc endpoint '{}'", cmd.rpc_url);

            let output = cmd.output.clone();
            let result = call(cmd).await?;
            emit(&output, || result.display(), || result.to_json())?;
        }

        Subcommands::Encode(cmd) => {
            let output = cmd.output.clone();
            let result = encode(cmd).await?;
            emit(&output, || result.display(), || result.to_json())?;
        }

        Subcommands::Decode(cmd) => {
            let output = cmd.output.clone();
            let result = decode(cmd).await?;
            emit(&output, || result.display(), || result.to_json())?;
        }

        Subcommands::Config(cmd) => {
            config(cmd)?;
        }

        Subcommands::Version => {
            println!("viewcall {}", current_version());
        }
    }

    Ok(())
}
