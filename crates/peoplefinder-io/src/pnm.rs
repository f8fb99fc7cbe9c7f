//! Binary PNM (PBM/PGM/PPM) support
//!
//! Reads `P4`, `P5` and `P6`; writes canvases as `P6`.

use crate::gray::canvas_rgb_bytes;
use crate::{GrayImage, IoError, IoResult};
use peoplefinder_core::Canvas;
use std::io::{BufRead, Read, Write};

/// Read a binary PNM image as 8-bit grayscale.
///
/// PBM set bits are black, so they decode to 0 and clear bits to 255.
/// PGM/PPM samples are rescaled from `maxval` to 0..=255.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<GrayImage> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut header = HeaderCursor::new(&bytes);
    let magic = header.token()?;
    let kind = match magic.as_slice() {
        b"P4" => PnmKind::Bitmap,
        b"P5" => PnmKind::Graymap,
        b"P6" => PnmKind::Pixmap,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {}",
                String::from_utf8_lossy(other)
            )));
        }
    };
    let cols = header.number()?;
    let rows = header.number()?;
    let maxval = match kind {
        PnmKind::Bitmap => 1,
        _ => header.number()?,
    };
    if maxval == 0 || maxval > u16::MAX as u32 {
        return Err(IoError::InvalidData(format!("PNM maxval {}", maxval)));
    }
    // Exactly one whitespace byte separates the header from the raster.
    let body = header.body()?;

    match kind {
        PnmKind::Bitmap => {
            let row_bytes = (cols as usize).div_ceil(8);
            check_len(body, row_bytes * rows as usize)?;
            let mut gray = Vec::with_capacity(rows as usize * cols as usize);
            for y in 0..rows as usize {
                let row = &body[y * row_bytes..(y + 1) * row_bytes];
                for x in 0..cols as usize {
                    let bit = (row[x / 8] >> (7 - (x % 8))) & 1;
                    gray.push(if bit == 1 { 0 } else { 255 });
                }
            }
            GrayImage::from_raw(rows, cols, gray)
        }
        PnmKind::Graymap | PnmKind::Pixmap => {
            let channels = if kind == PnmKind::Pixmap { 3 } else { 1 };
            let samples = rows as usize * cols as usize * channels;
            let scaled = scale_samples(body, samples, maxval)?;
            GrayImage::from_interleaved(rows, cols, channels, &scaled)
        }
    }
}

/// Write a canvas as a binary `P6` pixmap.
pub fn write_pnm<W: Write>(canvas: &Canvas, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", canvas.cols(), canvas.rows())
        .map_err(|e| IoError::EncodeError(format!("PNM header error: {}", e)))?;
    writer
        .write_all(&canvas_rgb_bytes(canvas))
        .map_err(|e| IoError::EncodeError(format!("PNM write error: {}", e)))?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PnmKind {
    Bitmap,
    Graymap,
    Pixmap,
}

fn check_len(body: &[u8], needed: usize) -> IoResult<()> {
    if body.len() < needed {
        return Err(IoError::InvalidData(format!(
            "PNM raster too short: {} < {}",
            body.len(),
            needed
        )));
    }
    Ok(())
}

/// Rescale `count` samples to 8 bits. Samples are two bytes big-endian
/// when `maxval` exceeds 255.
fn scale_samples(body: &[u8], count: usize, maxval: u32) -> IoResult<Vec<u8>> {
    if maxval > 255 {
        check_len(body, count * 2)?;
        Ok(body
            .chunks_exact(2)
            .take(count)
            .map(|s| {
                let v = (((s[0] as u32) << 8) | s[1] as u32).min(maxval);
                ((v * 255 + maxval / 2) / maxval) as u8
            })
            .collect())
    } else {
        check_len(body, count)?;
        Ok(body[..count]
            .iter()
            .map(|&s| {
                let v = (s as u32).min(maxval);
                ((v * 255 + maxval / 2) / maxval) as u8
            })
            .collect())
    }
}

/// Tokenizer over the ASCII PNM header.
struct HeaderCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'#' => {
                    while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                c if c.is_ascii_whitespace() => self.pos += 1,
                _ => break,
            }
        }
    }

    fn token(&mut self) -> IoResult<Vec<u8>> {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData("truncated PNM header".to_string()));
        }
        Ok(self.bytes[start..self.pos].to_vec())
    }

    fn number(&mut self) -> IoResult<u32> {
        let token = self.token()?;
        std::str::from_utf8(&token)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "bad PNM header field: {}",
                    String::from_utf8_lossy(&token)
                ))
            })
    }

    fn body(self) -> IoResult<&'a [u8]> {
        match self.bytes.get(self.pos) {
            Some(c) if c.is_ascii_whitespace() => Ok(&self.bytes[self.pos + 1..]),
            _ => Err(IoError::InvalidData("missing PNM raster".to_string())),
        }
    }
}
