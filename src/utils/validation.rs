use crate::utils::error::{Result, SimError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_positive_f64(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_f64(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite_values(field_name: &str, values: &[f64]) -> Result<()> {
    for value in values {
        if !value.is_finite() {
            return Err(SimError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "All values must be finite".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_file_extension(
    field_name: &str,
    file: &str,
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    if let Some(extension) = std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        if !allowed_set.contains(extension) {
            return Err(SimError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.to_string(),
                reason: format!(
                    "Unsupported file extension: {}. Allowed extensions: {}",
                    extension,
                    allowed_extensions.join(", ")
                ),
            });
        }
        Ok(())
    } else {
        Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        })
    }
}

/// Sampling frequency must be an integer multiple of the frame rate so
/// every frame lands exactly on a solution sample.
pub fn validate_frame_stride(field_name: &str, freq: f64, fps: u32) -> Result<()> {
    let ratio = freq / fps as f64;
    if !ratio.is_finite() || ratio < 1.0 - 1e-9 || (ratio - ratio.round()).abs() > 1e-9 {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: freq.to_string(),
            reason: format!("Sampling frequency must be an integer multiple of fps ({})", fps),
        });
    }
    Ok(())
}

pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    crate::render::color::parse_hex(value).map_err(|_| SimError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Expected a color like '#f086dc'".to_string(),
    })?;
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SimError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_f64() {
        assert!(validate_positive_f64("duration", 10.0).is_ok());
        assert!(validate_positive_f64("duration", 0.0).is_err());
        assert!(validate_positive_f64("duration", -1.0).is_err());
        assert!(validate_positive_f64("duration", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("output", "anim.gif", &["gif"]).is_ok());
        assert!(validate_file_extension("output", "anim.avi", &["gif", "png"]).is_err());
        assert!(validate_file_extension("output", "anim", &["gif"]).is_err());
    }

    #[test]
    fn test_validate_frame_stride() {
        assert!(validate_frame_stride("freq", 50.0, 25).is_ok());
        assert!(validate_frame_stride("freq", 50.0, 50).is_ok());
        assert!(validate_frame_stride("freq", 50.0, 30).is_err());
        // fps above the sampling frequency can never land on samples
        assert!(validate_frame_stride("freq", 25.0, 50).is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("color", "#f086dc").is_ok());
        assert!(validate_hex_color("color", "f086dc").is_err());
        assert!(validate_hex_color("color", "#zzzzzz").is_err());
        assert!(validate_hex_color("color", "#€€").is_err());
    }
}
