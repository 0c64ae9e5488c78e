use std::path::PathBuf;

use clap::{crate_version, Parser, Subcommand, ValueEnum};
use diamond_primitives::Address;

#[derive(Parser, Debug)]
#[command(
    name = "diamond-cli",
    about = "Derive selectors and simulate cuts of a diamond router",
    version = crate_version!()
)]
pub(crate) struct Cli {
    #[arg(
        long,
        value_enum,
        global = true,
        env = "DIAMOND_OUTPUT_FORMAT",
        default_value_t = OutputFormat::Text,
        help = "how to print results"
    )]
    pub(crate) format: OutputFormat,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    Selectors(SelectorsArgs),

    Inspect(InspectArgs),

    Cut(CutArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text.
    Text,

    /// Pretty-printed JSON.
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Print the selector of each function signature", version)]
pub(crate) struct SelectorsArgs {
    #[arg(required = true, help = "canonical signatures such as `transfer(address,uint256)`")]
    pub(crate) signatures: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Print the selector table a router starts with", version)]
pub(crate) struct InspectArgs {
    #[arg(long, env = "DIAMOND_PARAMS", help = "the path to the params file")]
    pub(crate) params: PathBuf,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Apply a cut manifest on top of the initial selector table", version)]
pub(crate) struct CutArgs {
    #[arg(long, env = "DIAMOND_PARAMS", help = "the path to the params file")]
    pub(crate) params: PathBuf,

    #[arg(long, help = "the path to the cut manifest")]
    pub(crate) manifest: PathBuf,

    #[arg(long, help = "the account performing the cut, defaults to the owner")]
    pub(crate) caller: Option<Address>,
}
