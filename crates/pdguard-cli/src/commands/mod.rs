//! Command implementations for pdguardctl

pub mod normalize;
pub mod replay;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Invocation document (JSON, or YAML by extension)
    pub invocation: PathBuf,

    /// Hook configuration file (JSON, or YAML by extension)
    #[arg(short, long, env = "PDGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log document values unmasked
    #[arg(long)]
    pub show_values: bool,
}
