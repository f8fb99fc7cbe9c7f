//! PNG image format support

use crate::gray::canvas_rgb_bytes;
use crate::{GrayImage, IoError, IoResult};
use peoplefinder_core::Canvas;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as 8-bit grayscale.
///
/// Palettes and sub-byte depths are expanded and 16-bit samples are
/// stripped to 8 bits before the colour reduction.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<GrayImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    let channels = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    // Rows may carry padding beyond width * channels.
    let row_bytes = width as usize * channels;
    let mut packed = Vec::with_capacity(row_bytes * height as usize);
    for y in 0..height as usize {
        let row_start = y * bytes_per_row;
        packed.extend_from_slice(&data[row_start..row_start + row_bytes]);
    }

    GrayImage::from_interleaved(height, width, channels, &packed)
}

/// Write a canvas as an 8-bit RGB PNG.
pub fn write_png<W: Write>(canvas: &Canvas, writer: W) -> IoResult<()> {
    let width = canvas.cols();
    let height = canvas.rows();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let data = canvas_rgb_bytes(canvas);

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
