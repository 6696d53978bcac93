//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for parley
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(version, about = "Script-driven chat in your terminal")]
#[command(long_about = r#"
Parley runs a chat session driven by an embedded Lua script. The script
receives each line you type and replies into the transcript; it can also
open modal popups and pick images from your media library.

Configuration files are loaded from (in priority order):
1. --config <path>    Explicit config file
2. ./parley.toml      Project-level config
3. ~/.config/parley/config.toml   Global config

Example:
  parley scripts/hit_and_blow.lua
  parley scripts/photo_booth.lua --library ~/Pictures
"#)]
pub struct Cli {
    /// Path to the chat script to run
    pub script: PathBuf,

    /// Media library directory for the image picker
    #[arg(short, long, value_name = "DIR")]
    pub library: Option<PathBuf>,

    /// Maximum width of rendered images, in terminal columns
    #[arg(long, value_name = "COLS")]
    pub image_width: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the welcome banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Disable transcript logging for this session
    #[arg(long)]
    pub no_transcript: bool,
}
