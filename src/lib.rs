pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalStorage;
pub use app::create_router;
pub use config::ServerConfig;
pub use core::engine::{ArtifactSet, GenerateEngine};
pub use domain::model::{Color, FrameSpec, GenerateRequest};
pub use utils::error::{QrError, Result};
