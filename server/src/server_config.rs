use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;

pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_server.yaml";
pub const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.address
            .parse()
            .map_err(|e| format!("invalid address '{}': {}", self.address, e))
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.address.is_empty() {
            return Err("address must not be empty".to_string());
        }
        self.socket_addr()?;
        if self.static_dir.is_empty() {
            return Err("static_dir must not be empty".to_string());
        }
        Ok(())
    }
}
