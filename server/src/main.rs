use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate};
use tictactoe_common::{log, logger};
use tictactoe_server::server_config::{DEFAULT_CONFIG_PATH, ServerConfig};
use tictactoe_server::web_server::{ctrl_c_signal, run_web_server};

#[derive(Parser)]
#[command(name = "tictactoe_server", about = "Unbeatable tic-tac-toe opponent over HTTP")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Overrides `address` from the config file.
    #[arg(long)]
    address: Option<String>,

    /// Overrides `static_dir` from the config file.
    #[arg(long)]
    static_dir: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Write the effective config to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

impl Args {
    fn apply_overrides(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(address) = &self.address {
            config.address = address.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager: ConfigManager<FileContentConfigProvider, ServerConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = args.apply_overrides(config_manager.get_config()?);
    config.validate()?;

    if args.write_default_config {
        config_manager.set_config(&config)?;
        log!("Config written to {}", config_manager.source());
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(config.socket_addr()?).await?;
    run_web_server(listener, PathBuf::from(&config.static_dir), ctrl_c_signal()).await?;

    log!("Server shut down gracefully");

    Ok(())
}
