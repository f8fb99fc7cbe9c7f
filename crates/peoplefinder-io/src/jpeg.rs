//! JPEG image format support (decode only)

use crate::{GrayImage, IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image as 8-bit grayscale.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<GrayImage> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let rows = info.height as u32;
    let cols = info.width as u32;
    match info.pixel_format {
        PixelFormat::L8 => GrayImage::from_interleaved(rows, cols, 1, &pixels),
        // 16-bit big-endian samples; keep the high byte.
        PixelFormat::L16 => GrayImage::from_interleaved(rows, cols, 2, &pixels),
        PixelFormat::RGB24 => GrayImage::from_interleaved(rows, cols, 3, &pixels),
        PixelFormat::CMYK32 => {
            let rgb: Vec<u8> = pixels
                .chunks_exact(4)
                .flat_map(|px| {
                    let k = 255 - px[3] as u32;
                    [
                        ((255 - px[0] as u32) * k / 255) as u8,
                        ((255 - px[1] as u32) * k / 255) as u8,
                        ((255 - px[2] as u32) * k / 255) as u8,
                    ]
                })
                .collect();
            GrayImage::from_interleaved(rows, cols, 3, &rgb)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_jpeg_rejects_garbage() {
        let data = vec![0xFF, 0xD8, 0xFF, 0x00, 0x01, 0x02];
        assert!(matches!(
            read_jpeg(Cursor::new(data)),
            Err(IoError::DecodeError(_))
        ));
    }
}
