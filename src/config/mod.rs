pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{QrError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "qrsmith")]
#[command(about = "HTTP service generating styled QR code images")]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[arg(long, default_value = "0.0.0.0:3000")]
    pub listen_addr: String,

    /// Publicly served static root; artifacts are written beneath it.
    #[arg(long, default_value = "./public")]
    pub static_root: String,

    /// Subdirectory of the static root receiving generated artifacts.
    #[arg(long, default_value = "qrcodes")]
    pub artifact_dir: String,

    /// Optional TOML file overlaying these settings.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerConfig {
    /// Parses CLI arguments and applies the TOML overlay when given.
    pub fn load() -> Result<Self> {
        let mut config = Self::parse();
        if let Some(path) = config.config.clone() {
            let overlay = file::FileConfig::from_file(&path)?;
            overlay.apply(&mut config);
        }
        Ok(config)
    }
}

impl ConfigProvider for ServerConfig {
    fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    fn static_root(&self) -> &str {
        &self.static_root
    }

    fn artifact_dir(&self) -> &str {
        &self.artifact_dir
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        self.listen_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|e| QrError::Config {
                message: format!("invalid listen_addr '{}': {}", self.listen_addr, e),
            })?;

        validate_path("static_root", &self.static_root)?;
        validate_path("artifact_dir", &self.artifact_dir)?;

        // The artifact directory doubles as the public URL prefix, so it must
        // stay a relative path inside the static root.
        if self.artifact_dir.starts_with('/') || self.artifact_dir.contains("..") {
            return Err(QrError::Config {
                message: format!(
                    "artifact_dir '{}' must be a relative path inside static_root",
                    self.artifact_dir
                ),
            });
        }

        Ok(())
    }
}
