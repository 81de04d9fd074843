use std::path::PathBuf;

use clap::Parser;

/// HTTP service generating form field configurations from plain-language
/// descriptions.
#[derive(Parser, Debug, Clone)]
#[command(name = "formai-proxy", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMAI_CONFIG", default_value = "formai.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMAI_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMAI_PORT")]
    pub port: Option<u16>,
}
