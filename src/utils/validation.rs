use crate::domain::model::{Color, FrameSpec};
use crate::utils::error::{QrError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QrError::InvalidRequest {
            field: field_name.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QrError::Config {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(QrError::Config {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}

/// Boolean-as-string request fields: only the literal `"true"` enables.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(value, Some("true"))
}

/// Parses a pixel-count field. Omitted or blank fields default to zero;
/// anything present must be a non-negative integer no larger than
/// [`FrameSpec::MAX_PX`].
pub fn parse_pixel_field(field_name: &str, value: Option<&str>) -> Result<u32> {
    let raw = match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => raw,
        None => return Ok(0),
    };

    let parsed = raw.parse::<u32>().map_err(|_| QrError::InvalidFrameSpec {
        field: field_name.to_string(),
        value: raw.to_string(),
        reason: "must be a non-negative integer".to_string(),
    })?;

    if parsed > FrameSpec::MAX_PX {
        return Err(QrError::InvalidFrameSpec {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: format!("must be at most {}", FrameSpec::MAX_PX),
        });
    }

    Ok(parsed)
}

pub fn parse_color(field_name: &str, value: &str) -> Result<Color> {
    Color::parse(value).ok_or_else(|| QrError::InvalidRequest {
        field: field_name.to_string(),
        reason: format!("'{}' is not a hex color (#RRGGBB)", value),
    })
}
