use std::path::PathBuf;

use clap::Parser;

/// levelcheck — validate TLN Power level files.
#[derive(Parser, Debug)]
#[command(name = "levelcheck", version, about)]
pub struct Args {
    /// Level JSON files to check.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
