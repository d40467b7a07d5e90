use crate::config::ServerConfig;
use crate::utils::error::{QrError, Result};
use serde::Deserialize;

/// TOML overlay for [`ServerConfig`]. Present values win over CLI values.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    pub listen_addr: Option<String>,
    pub static_root: Option<String>,
    pub artifact_dir: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| QrError::Config {
            message: format!("cannot read config file '{}': {}", path, e),
        })?;
        toml::from_str(&raw).map_err(|e| QrError::Config {
            message: format!("cannot parse config file '{}': {}", path, e),
        })
    }

    pub fn apply(&self, config: &mut ServerConfig) {
        let Some(server) = &self.server else {
            return;
        };
        if let Some(listen_addr) = &server.listen_addr {
            config.listen_addr = listen_addr.clone();
        }
        if let Some(static_root) = &server.static_root {
            config.static_root = static_root.clone();
        }
        if let Some(artifact_dir) = &server.artifact_dir {
            config.artifact_dir = artifact_dir.clone();
        }
    }
}
