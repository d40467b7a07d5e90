pub mod engine;
pub mod frame;
pub mod logo;
pub mod raster;
pub mod render;
pub mod svg;

pub use engine::{ArtifactSet, GenerateEngine};
pub use render::{ImagePair, CANVAS_SIZE};
