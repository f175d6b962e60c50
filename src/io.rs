//! Decoding image files into [`Bitmap`]s and writing them back out.
//!
//! Any color type the `image` crate can decode is converted to 8-bit RGB;
//! alpha is dropped.

use std::path::{Path, PathBuf};
use std::string::{String, ToString};
use std::vec::Vec;

use image::{DynamicImage, RgbImage};
use imgref::ImgRef;
use rgb::Rgb;
use tracing::{debug, info, instrument};

use crate::{Bitmap, Filter};

/// The source image could not be read or decoded.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode {origin}")]
pub struct DecodeError {
    origin: String,
    #[source]
    source: image::ImageError,
}

impl DecodeError {
    /// The path (or `<memory>`) that failed to decode.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

/// A bitmap could not be encoded or written.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {}", path.display())]
pub struct EncodeError {
    path: PathBuf,
    #[source]
    source: image::ImageError,
}

/// Decode the image at `path`.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<Bitmap, DecodeError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| DecodeError {
        origin: path.display().to_string(),
        source,
    })?;
    info!(width = img.width(), height = img.height(), "image loaded");
    Ok(from_dynamic(img))
}

/// Decode an encoded image (PNG, JPEG, ...) held in memory.
#[instrument(skip(data), fields(data_len = data.len()))]
pub fn decode(data: &[u8]) -> Result<Bitmap, DecodeError> {
    let img = image::load_from_memory(data).map_err(|source| DecodeError {
        origin: "<memory>".into(),
        source,
    })?;
    debug!(width = img.width(), height = img.height(), "image decoded from bytes");
    Ok(from_dynamic(img))
}

/// Convert an already-decoded image to a tightly packed RGB bitmap.
pub fn from_dynamic(img: DynamicImage) -> Bitmap {
    let rgb = img.into_rgb8();
    let w = rgb.width() as usize;
    let h = rgb.height() as usize;
    // Reuses the decoder's allocation unless its capacity is not a whole number of pixels.
    let pixels: Vec<Rgb<u8>> = bytemuck::allocation::try_cast_vec(rgb.into_raw())
        .unwrap_or_else(|(_, raw)| bytemuck::cast_slice(&raw).to_vec());
    crate::img::packed(pixels, w, h)
}

/// Copy `bitmap` into an `image` crate buffer, dropping any stride padding.
pub fn to_rgb_image(bitmap: ImgRef<'_, Rgb<u8>>) -> RgbImage {
    let w = bitmap.width();
    let h = bitmap.height();
    let mut raw = Vec::with_capacity(w * h * 3);
    for row in bitmap.rows() {
        raw.extend_from_slice(bytemuck::cast_slice::<Rgb<u8>, u8>(row));
    }
    RgbImage::from_raw(w as u32, h as u32, raw).expect("buffer holds exactly width * height pixels")
}

/// Encode `bitmap` to `path`; the format follows the file extension.
#[instrument(
    skip(bitmap),
    fields(path = %path.as_ref().display(), width = bitmap.width(), height = bitmap.height())
)]
pub fn save(path: impl AsRef<Path>, bitmap: ImgRef<'_, Rgb<u8>>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    to_rgb_image(bitmap).save(path).map_err(|source| EncodeError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("image written");
    Ok(())
}

/// Decode `path` and return a filtered copy. The decoded source is discarded.
#[instrument(skip_all, fields(path = %path.as_ref().display(), filter = %filter))]
pub fn load_filtered(path: impl AsRef<Path>, filter: Filter) -> Result<Bitmap, DecodeError> {
    let source = load(path)?;
    let out = crate::img::apply(filter, source.as_ref());
    debug!(width = out.width(), height = out.height(), "filter applied");
    Ok(out)
}
