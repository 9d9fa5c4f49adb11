use crate::utils::error::Result;
use image::RgbaImage;
use std::io::Cursor;

/// Encode a single frame as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, image::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// File name of the `index`-th frame in a PNG sequence.
pub fn frame_name(index: usize) -> String {
    format!("frame_{:04}.png", index)
}
