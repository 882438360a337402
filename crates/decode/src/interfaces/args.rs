use clap::Parser;
use derive_builder::Builder;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Decodes calldata or return data using a function signature",
    override_usage = "viewcall decode --signature <SIGNATURE> <CALLDATA> [OPTIONS]"
)]
/// Arguments for the decode operation
///
/// The calldata is decoded against the inputs of the signature, or against its outputs when
/// `returns` is set.
pub struct DecodeArgs {
    /// The function signature, e.g. `transfer(address to, uint256 amount)(bool)`.
    #[clap(long, short, visible_alias = "function-sig", required = true)]
    pub signature: String,

    /// The hex-encoded data to decode, with or without the `0x` prefix.
    #[clap(required = true)]
    pub calldata: String,

    /// The calldata does not start with the 4-byte selector.
    #[clap(long)]
    pub no_selector: bool,

    /// Decode the data as the return value of the function, using its output types.
    #[clap(long)]
    pub returns: bool,

    /// 'print' to print to the console, 'json' to print JSON, or a file path to write JSON to.
    #[clap(long = "output", short = 'o', default_value = "print", hide_default_value = true)]
    pub output: String,
}

impl DecodeArgsBuilder {
    /// Creates a new DecodeArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            signature: Some(String::new()),
            calldata: Some(String::new()),
            no_selector: Some(false),
            returns: Some(false),
            output: Some(String::from("print")),
        }
    }
}
