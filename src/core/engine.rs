use crate::core::{frame, logo, render};
use crate::domain::model::{ArtifactFormat, GenerateRequest, OutputArtifact};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{QrError, Result};
use image::RgbaImage;
use std::io::Cursor;
use uuid::Uuid;

/// The two artifacts produced by one request.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub png: OutputArtifact,
    pub svg: OutputArtifact,
}

/// Drives the compositing pipeline for one request:
/// base render -> optional logo -> optional frame -> write both artifacts.
pub struct GenerateEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GenerateEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub async fn run(&self, request: &GenerateRequest) -> Result<ArtifactSet> {
        tracing::info!(text_len = request.text.len(), "rendering base QR image");
        let mut pair = render::render_base(&request.text, request.foreground, request.background)?;

        if let Some(logo_bytes) = &request.logo {
            tracing::debug!(bytes = logo_bytes.len(), "compositing logo");
            pair = logo::apply_logo(pair, logo_bytes, request.background)?;
        }

        if let Some(spec) = &request.frame {
            tracing::debug!(
                distance = spec.distance_px,
                thickness = spec.thickness_px,
                radius = spec.corner_radius_px,
                "compositing frame"
            );
            pair = frame::apply_frame(pair, spec, request.background);
        }

        let id = Uuid::new_v4();
        let dir = self.config.artifact_dir();
        let png_rel = format!("{}/{}.png", dir, id);
        let svg_rel = format!("{}/{}.svg", dir, id);

        let png_bytes = encode_png(&pair.raster)?;
        self.storage.write_file(&png_rel, &png_bytes).await?;
        self.storage
            .write_file(&svg_rel, pair.vector.render().as_bytes())
            .await?;

        tracing::info!(%id, size = pair.size(), "artifacts written");
        Ok(ArtifactSet {
            png: OutputArtifact {
                format: ArtifactFormat::Png,
                path: format!("/{}", png_rel),
            },
            svg: OutputArtifact {
                format: ArtifactFormat::Svg,
                path: format!("/{}", svg_rel),
            },
        })
    }
}

fn encode_png(raster: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    raster
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| QrError::Write(std::io::Error::other(e)))?;
    Ok(buf)
}
