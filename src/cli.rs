//! CLI argument definitions.

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(name = "clipjpg")]
#[command(about = "Save the current clipboard image to a JPEG file", long_about = None)]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Output file name. Defaults to a timestamped name in the current
    /// directory; a `.jpg` suffix is appended unless the name already
    /// carries one.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print version information.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}
