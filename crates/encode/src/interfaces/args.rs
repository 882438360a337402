use clap::Parser;
use derive_builder::Builder;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Encodes arguments into calldata using a function signature",
    override_usage = "viewcall encode --signature <SIGNATURE> [ARGS]... [OPTIONS]"
)]
/// Arguments for the encode operation
pub struct EncodeArgs {
    /// The function signature, e.g. `transfer(address to, uint256 amount)`.
    #[clap(long, short, visible_alias = "function-sig", required = true)]
    pub signature: String,

    /// The arguments to encode, one per input of the signature.
    #[clap(allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Encode only the arguments, without the 4-byte selector.
    #[clap(long)]
    pub no_selector: bool,

    /// 'print' to print to the console, 'json' to print JSON, or a file path to write JSON to.
    #[clap(long = "output", short = 'o', default_value = "print", hide_default_value = true)]
    pub output: String,
}

impl EncodeArgsBuilder {
    /// Creates a new EncodeArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            signature: Some(String::new()),
            args: Some(Vec::new()),
            no_selector: Some(false),
            output: Some(String::from("print")),
        }
    }
}
