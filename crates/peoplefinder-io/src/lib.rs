//! peoplefinder-io - Silhouette image I/O
//!
//! Decodes silhouette images into binary [`Mask`]s sized for the labelled
//! grid, loads whole dataset directories, and encodes annotated
//! [`Canvas`]es.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | yes  | yes   | `png-format` |
//! | PNM    | P4/P5/P6 | P6 | `pnm` |
//! | JPEG   | yes  | no    | `jpeg` |
//!
//! # Loading pipeline
//!
//! decode → grayscale → nearest-neighbour resample to
//! [`LoadOptions::rows`] × [`LoadOptions::cols`] → binarize at
//! [`LoadOptions::threshold`] (foreground where gray ≥ threshold).

mod error;
pub mod format;
mod gray;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use gray::GrayImage;

#[cfg(feature = "jpeg")]
pub use crate::jpeg::read_jpeg;
#[cfg(feature = "png-format")]
pub use crate::png::{read_png, write_png};
#[cfg(feature = "pnm")]
pub use crate::pnm::{read_pnm, write_pnm};

use log::{debug, warn};
use peoplefinder_core::{Canvas, Mask, REFERENCE_COLS, REFERENCE_ROWS};
use std::fs::{self, File};
use std::io::{BufReader, Cursor, Write};
use std::path::{Path, PathBuf};

/// Options for turning decoded images into grid-sized masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Target mask height
    pub rows: u32,
    /// Target mask width
    pub cols: u32,
    /// Gray level at or above which a pixel is foreground
    pub threshold: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            rows: REFERENCE_ROWS,
            cols: REFERENCE_COLS,
            threshold: 128,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    fn validate(&self) -> IoResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(IoError::InvalidData(format!(
                "target size {}x{}",
                self.rows, self.cols
            )));
        }
        Ok(())
    }
}

/// Decode an image file to grayscale, detecting the format from its header.
pub fn read_gray<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    read_gray_with_format(BufReader::new(file), format)
}

/// Decode in-memory image bytes to grayscale.
pub fn read_gray_mem(data: &[u8]) -> IoResult<GrayImage> {
    let format = detect_format_from_bytes(data)?;
    read_gray_with_format(Cursor::new(data), format)
}

#[allow(unused_variables)]
fn read_gray_with_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<GrayImage> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => crate::pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Resample and binarize a decoded image into a grid-sized mask.
pub fn gray_to_mask(gray: &GrayImage, options: &LoadOptions) -> IoResult<Mask> {
    options.validate()?;
    let mask = gray.binarize(options.threshold)?;
    if mask.rows() == options.rows && mask.cols() == options.cols {
        return Ok(mask);
    }
    Ok(mask.resize_nearest(options.rows, options.cols)?)
}

/// Read an image file as a grid-sized silhouette mask.
pub fn read_mask<P: AsRef<Path>>(path: P, options: &LoadOptions) -> IoResult<Mask> {
    gray_to_mask(&read_gray(path)?, options)
}

/// Read in-memory image bytes as a grid-sized silhouette mask.
pub fn read_mask_from_bytes(data: &[u8], options: &LoadOptions) -> IoResult<Mask> {
    gray_to_mask(&read_gray_mem(data)?, options)
}

/// Load every decodable image in `dir` as a mask.
///
/// Entries are visited in sorted file-name order. Subdirectories are
/// ignored; files that fail to decode are skipped with a warning. The
/// returned paths line up with the masks.
pub fn load_masks_from_dir<P: AsRef<Path>>(
    dir: P,
    options: &LoadOptions,
) -> IoResult<Vec<(PathBuf, Mask)>> {
    options.validate()?;
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut masks = Vec::with_capacity(paths.len());
    for path in paths {
        match read_mask(&path, options) {
            Ok(mask) => masks.push((path, mask)),
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }
    debug!(
        "loaded {} masks from {}",
        masks.len(),
        dir.as_ref().display()
    );
    Ok(masks)
}

/// Encode a canvas in the given format to a writer.
#[allow(unused_variables)]
pub fn write_image_to<W: Write>(canvas: &Canvas, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::write_png(canvas, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => crate::pnm::write_pnm(canvas, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot write {:?}",
            other
        ))),
    }
}

/// Write a canvas to a file.
pub fn write_image<P: AsRef<Path>>(canvas: &Canvas, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_image_to(canvas, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode a canvas into memory.
pub fn write_image_mem(canvas: &Canvas, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(canvas, &mut buffer, format)?;
    Ok(buffer)
}
