use crate::domain::model::{Color, FrameSpec, GenerateRequest};
use crate::utils::error::{QrError, Result};
use crate::utils::validation::{parse_color, parse_flag, parse_pixel_field, validate_non_empty_string};
use async_trait::async_trait;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Form;
use std::collections::HashMap;

/// Request fields exactly as they arrive over the wire, still string-typed.
/// Validation into [`GenerateRequest`] happens once, before the pipeline.
#[derive(Debug, Default)]
pub struct GenerateForm {
    pub text: Option<String>,
    pub qr_color: Option<String>,
    pub bg_color: Option<String>,
    pub include_frame: Option<String>,
    pub frame_distance: Option<String>,
    pub frame_thickness: Option<String>,
    pub frame_color: Option<String>,
    pub frame_radius: Option<String>,
    pub logo: Option<Vec<u8>>,
}

impl GenerateForm {
    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "text" => self.text = Some(value),
            "qrColor" => self.qr_color = Some(value),
            "bgColor" => self.bg_color = Some(value),
            "includeFrame" => self.include_frame = Some(value),
            "frameDistance" => self.frame_distance = Some(value),
            "frameThickness" => self.frame_thickness = Some(value),
            "frameColor" => self.frame_color = Some(value),
            "frameRadius" => self.frame_radius = Some(value),
            // Unknown fields are ignored.
            _ => {}
        }
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await.map_err(body_error)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            if name == "logo" {
                let data = field.bytes().await.map_err(body_error)?;
                // Browsers submit an empty part when no file was chosen.
                if !data.is_empty() {
                    form.logo = Some(data.to_vec());
                }
            } else {
                let value = field.text().await.map_err(body_error)?;
                form.set_field(&name, value);
            }
        }
        Ok(form)
    }

    fn from_fields(fields: HashMap<String, String>) -> Self {
        let mut form = Self::default();
        for (name, value) in fields {
            form.set_field(&name, value);
        }
        form
    }

    /// Validates every string-typed field and produces the pipeline request.
    pub fn into_request(self) -> Result<GenerateRequest> {
        let text = self.text.unwrap_or_default();
        validate_non_empty_string("text", &text)?;

        let foreground = match self.qr_color.as_deref() {
            Some(value) if !value.trim().is_empty() => parse_color("qrColor", value)?,
            _ => Color::BLACK,
        };
        let background = match self.bg_color.as_deref() {
            Some(value) if !value.trim().is_empty() => parse_color("bgColor", value)?,
            _ => Color::WHITE,
        };

        let frame = if parse_flag(self.include_frame.as_deref()) {
            let color = match self.frame_color.as_deref() {
                Some(value) if !value.trim().is_empty() => parse_color("frameColor", value)?,
                _ => Color::BLACK,
            };
            Some(FrameSpec {
                distance_px: parse_pixel_field("frameDistance", self.frame_distance.as_deref())?,
                thickness_px: parse_pixel_field("frameThickness", self.frame_thickness.as_deref())?,
                color,
                corner_radius_px: parse_pixel_field("frameRadius", self.frame_radius.as_deref())?,
            })
        } else {
            None
        };

        Ok(GenerateRequest {
            text,
            foreground,
            background,
            logo: self.logo,
            frame,
        })
    }
}

fn body_error(err: axum::extract::multipart::MultipartError) -> QrError {
    QrError::InvalidRequest {
        field: "body".to_string(),
        reason: err.to_string(),
    }
}

#[async_trait]
impl<S> FromRequest<S> for GenerateForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| body_error_response(e.to_string()))?;
            Self::from_multipart(multipart)
                .await
                .map_err(IntoResponse::into_response)
        } else {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| body_error_response(e.to_string()))?;
            Ok(Self::from_fields(fields))
        }
    }
}

fn body_error_response(reason: String) -> Response {
    QrError::InvalidRequest {
        field: "body".to_string(),
        reason,
    }
    .into_response()
}
