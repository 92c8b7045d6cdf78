//! confscope - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `confscope` | Run the admin server |
//! | `confscope --dump diff` | Print a config view and exit |

use clap::Parser;
use confscope_domain::ConfigMode;
use confscope_server::{dump_config, run};

/// Command line interface for confscope
#[derive(Parser, Debug)]
#[command(name = "confscope")]
#[command(about = "confscope - Configuration introspection and admin index server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Print a config view (full, diff or defaults) to stdout and exit
    #[arg(long, value_name = "MODE")]
    pub dump: Option<ConfigMode>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(mode) = cli.dump {
        print!("{}", dump_config(cli.config.as_deref(), mode)?);
        return Ok(());
    }

    run(cli.config.as_deref()).await
}
