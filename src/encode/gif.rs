use crate::domain::model::FrameSet;
use crate::utils::error::Result;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

/// Encode frames to an in-memory looping GIF.
///
/// The frame delay is `1000/fps` ms; GIF stores delays in 10 ms units,
/// so frame rates that divide 100 (25, 50, ...) reproduce exactly.
pub fn encode_gif(frames: FrameSet) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut buffer, 10);
        encoder.set_repeat(Repeat::Infinite)?;

        let delay = Delay::from_numer_denom_ms(1000, frames.fps);
        for image in frames.frames {
            encoder.encode_frame(Frame::from_parts(image, 0, 0, delay))?;
        }
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, RgbaImage};
    use std::io::Cursor;

    fn solid_frames(count: usize) -> FrameSet {
        let frames = (0..count)
            .map(|i| RgbaImage::from_pixel(16, 16, image::Rgba([(i * 40) as u8, 0, 0, 255])))
            .collect();
        FrameSet { frames, fps: 25 }
    }

    #[test]
    fn test_gif_roundtrips_frame_count() {
        let bytes = encode_gif(solid_frames(5)).unwrap();
        assert!(!bytes.is_empty());

        let decoder = GifDecoder::new(Cursor::new(bytes)).unwrap();
        let decoded = decoder.into_frames().collect_frames().unwrap();
        assert_eq!(decoded.len(), 5);
    }

    #[test]
    fn test_gif_starts_with_magic_bytes() {
        let bytes = encode_gif(solid_frames(1)).unwrap();
        assert_eq!(&bytes[0..3], b"GIF");
    }
}
