pub mod model;
pub mod ports;

pub use model::{ArtifactFormat, Color, FrameSpec, GenerateRequest, OutputArtifact};
pub use ports::{ConfigProvider, Storage};
