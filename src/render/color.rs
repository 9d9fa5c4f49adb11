use crate::utils::error::{Result, SimError};
use image::Rgba;

/// Default pendulum color, as drawn by the reference scenes.
pub const PENDULUM_PINK: &str = "#f086dc";

pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const AXIS: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Parse a `#rrggbb` hex color.
pub fn parse_hex(value: &str) -> Result<Rgba<u8>> {
    let invalid = || SimError::RenderError {
        message: format!("invalid hex color '{value}'"),
    };

    let digits = value.strip_prefix('#').ok_or_else(invalid)?;
    // Length is in bytes; non-ASCII input must be rejected before slicing
    // or the byte ranges below can split a character and panic.
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
    Ok(Rgba([r, g, b, 255]))
}

/// Diverging blue–white–red map over [-1, 1], white at zero.
pub fn diverging(value: f64) -> Rgba<u8> {
    let v = value.clamp(-1.0, 1.0);
    if v >= 0.0 {
        let fade = ((1.0 - v) * 255.0).round() as u8;
        Rgba([255, fade, fade, 255])
    } else {
        let fade = ((1.0 + v) * 255.0).round() as u8;
        Rgba([fade, fade, 255, 255])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#f086dc").unwrap(), Rgba([0xf0, 0x86, 0xdc, 255]));
        assert_eq!(parse_hex("#000000").unwrap(), Rgba([0, 0, 0, 255]));
        assert!(parse_hex("f086dc").is_err());
        assert!(parse_hex("#f08").is_err());
        assert!(parse_hex("#gggggg").is_err());
    }

    #[test]
    fn test_parse_hex_rejects_multibyte_input() {
        // Six bytes but only two characters; must error, not panic.
        assert!(parse_hex("#€€").is_err());
        assert!(parse_hex("#ff€").is_err());
    }

    #[test]
    fn test_diverging_endpoints() {
        assert_eq!(diverging(1.0), Rgba([255, 0, 0, 255]));
        assert_eq!(diverging(-1.0), Rgba([0, 0, 255, 255]));
        assert_eq!(diverging(0.0), Rgba([255, 255, 255, 255]));
        // out-of-range values clamp instead of wrapping
        assert_eq!(diverging(3.0), Rgba([255, 0, 0, 255]));
    }
}
