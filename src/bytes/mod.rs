// ---------------------------------------------------------------------------
// Row-level color filters with SIMD dispatch.
//
// Architecture: #[rite] row functions hold the per-tier loops.
// #[arcane] wrappers dispatch via incant!: contiguous (single call),
// copy (src → dst), and strided (loop over rows, single dispatch).
// Every layout takes `bpp` (3 for RGB, 4 for RGBA with alpha left alone).
// ---------------------------------------------------------------------------

use crate::{Filter, SizeError};
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;


const RGB: usize = 3;
const RGBA: usize = 4;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize, bpp: usize) -> Result<(), SizeError> {
    if len == 0 || !len.is_multiple_of(bpp) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_copy(src_len: usize, dst_len: usize, bpp: usize) -> Result<(), SizeError> {
    if src_len == 0 || !src_len.is_multiple_of(bpp) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < src_len {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Dispatch by bytes-per-pixel
// ===========================================================================

fn grayscale_inplace(buf: &mut [u8], bpp: usize) -> Result<(), SizeError> {
    check_inplace(buf.len(), bpp)?;
    incant!(grayscale_impl(buf, bpp), [v3, neon, scalar]);
    Ok(())
}

fn grayscale_copy(src: &[u8], dst: &mut [u8], bpp: usize) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len(), bpp)?;
    incant!(grayscale_copy_impl(src, dst, bpp), [v3, neon, scalar]);
    Ok(())
}

fn grayscale_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride, bpp)?;
    incant!(
        grayscale_strided(buf, width, height, stride, bpp),
        [v3, neon, scalar]
    );
    Ok(())
}

fn invert_inplace(buf: &mut [u8], bpp: usize) -> Result<(), SizeError> {
    check_inplace(buf.len(), bpp)?;
    incant!(invert_impl(buf, bpp), [v3, neon, scalar]);
    Ok(())
}

fn invert_copy(src: &[u8], dst: &mut [u8], bpp: usize) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len(), bpp)?;
    incant!(invert_copy_impl(src, dst, bpp), [v3, neon, scalar]);
    Ok(())
}

fn invert_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride, bpp)?;
    incant!(
        invert_strided(buf, width, height, stride, bpp),
        [v3, neon, scalar]
    );
    Ok(())
}

fn sepia_inplace(buf: &mut [u8], bpp: usize) -> Result<(), SizeError> {
    check_inplace(buf.len(), bpp)?;
    incant!(sepia_impl(buf, bpp), [v3, neon, scalar]);
    Ok(())
}

fn sepia_copy(src: &[u8], dst: &mut [u8], bpp: usize) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len(), bpp)?;
    incant!(sepia_copy_impl(src, dst, bpp), [v3, neon, scalar]);
    Ok(())
}

fn sepia_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride, bpp)?;
    incant!(
        sepia_strided(buf, width, height, stride, bpp),
        [v3, neon, scalar]
    );
    Ok(())
}

// ===========================================================================
// Public API: grayscale
// ===========================================================================

/// Grayscale RGB (3 bytes/px) pixels in place.
///
/// Each pixel becomes `floor(0.21 R + 0.72 G + 0.07 B)` in all three channels.
pub fn grayscale_rgb_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    grayscale_inplace(buf, RGB)
}

/// Grayscale RGBA (4 bytes/px) pixels in place. Alpha is left as is.
pub fn grayscale_rgba_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    grayscale_inplace(buf, RGBA)
}

/// Copy RGB pixels from `src` into `dst`, grayscaled.
///
/// `dst` must hold at least as many bytes as `src`; extra bytes are untouched.
pub fn grayscale_rgb(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    grayscale_copy(src, dst, RGB)
}

/// Copy RGBA pixels from `src` into `dst`, grayscaled. Alpha is copied through.
pub fn grayscale_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    grayscale_copy(src, dst, RGBA)
}

/// Grayscale a strided RGB image in place.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 3`. Padding bytes between rows are never read or written.
/// The buffer must be at least `(height - 1) * stride + width * 3` bytes.
pub fn grayscale_rgb_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    grayscale_inplace_strided(buf, width, height, stride, RGB)
}

/// Grayscale a strided RGBA image in place. See [`grayscale_rgb_inplace_strided`].
pub fn grayscale_rgba_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    grayscale_inplace_strided(buf, width, height, stride, RGBA)
}

// ===========================================================================
// Public API: invert
// ===========================================================================

/// Invert RGB (3 bytes/px) pixels in place: every channel becomes `255 - c`.
pub fn invert_rgb_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    invert_inplace(buf, RGB)
}

/// Invert RGBA (4 bytes/px) pixels in place. Alpha is left as is.
pub fn invert_rgba_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    invert_inplace(buf, RGBA)
}

/// Copy RGB pixels from `src` into `dst`, inverted.
pub fn invert_rgb(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    invert_copy(src, dst, RGB)
}

/// Copy RGBA pixels from `src` into `dst`, inverted. Alpha is copied through.
pub fn invert_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    invert_copy(src, dst, RGBA)
}

/// Invert a strided RGB image in place. Padding bytes are never touched.
pub fn invert_rgb_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    invert_inplace_strided(buf, width, height, stride, RGB)
}

/// Invert a strided RGBA image in place. Padding bytes are never touched.
pub fn invert_rgba_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    invert_inplace_strided(buf, width, height, stride, RGBA)
}

// ===========================================================================
// Public API: sepia
// ===========================================================================

/// Sepia-tone RGB (3 bytes/px) pixels in place.
///
/// ```text
/// R' = min(255, floor(0.393 R + 0.769 G + 0.189 B))
/// G' = min(255, floor(0.349 R + 0.686 G + 0.168 B))
/// B' = min(255, floor(0.272 R + 0.534 G + 0.131 B))
/// ```
pub fn sepia_rgb_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    sepia_inplace(buf, RGB)
}

/// Sepia-tone RGBA (4 bytes/px) pixels in place. Alpha is left as is.
pub fn sepia_rgba_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    sepia_inplace(buf, RGBA)
}

/// Copy RGB pixels from `src` into `dst`, sepia-toned.
pub fn sepia_rgb(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    sepia_copy(src, dst, RGB)
}

/// Copy RGBA pixels from `src` into `dst`, sepia-toned. Alpha is copied through.
pub fn sepia_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    sepia_copy(src, dst, RGBA)
}

/// Sepia-tone a strided RGB image in place. Padding bytes are never touched.
pub fn sepia_rgb_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    sepia_inplace_strided(buf, width, height, stride, RGB)
}

/// Sepia-tone a strided RGBA image in place. Padding bytes are never touched.
pub fn sepia_rgba_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    sepia_inplace_strided(buf, width, height, stride, RGBA)
}

// ===========================================================================
// Public API: by Filter
// ===========================================================================

/// Apply `filter` to RGB pixels in place.
pub fn filter_rgb_inplace(filter: Filter, buf: &mut [u8]) -> Result<(), SizeError> {
    match filter {
        Filter::Grayscale => grayscale_inplace(buf, RGB),
        Filter::Invert => invert_inplace(buf, RGB),
        Filter::Sepia => sepia_inplace(buf, RGB),
    }
}

/// Apply `filter` to RGBA pixels in place, leaving alpha alone.
pub fn filter_rgba_inplace(filter: Filter, buf: &mut [u8]) -> Result<(), SizeError> {
    match filter {
        Filter::Grayscale => grayscale_inplace(buf, RGBA),
        Filter::Invert => invert_inplace(buf, RGBA),
        Filter::Sepia => sepia_inplace(buf, RGBA),
    }
}

/// Copy RGB pixels from `src` into `dst` with `filter` applied.
pub fn filter_rgb(filter: Filter, src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    match filter {
        Filter::Grayscale => grayscale_copy(src, dst, RGB),
        Filter::Invert => invert_copy(src, dst, RGB),
        Filter::Sepia => sepia_copy(src, dst, RGB),
    }
}

/// Copy RGBA pixels from `src` into `dst` with `filter` applied.
pub fn filter_rgba(filter: Filter, src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    match filter {
        Filter::Grayscale => grayscale_copy(src, dst, RGBA),
        Filter::Invert => invert_copy(src, dst, RGBA),
        Filter::Sepia => sepia_copy(src, dst, RGBA),
    }
}

/// Apply `filter` to a strided RGB image in place.
pub fn filter_rgb_inplace_strided(
    filter: Filter,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    match filter {
        Filter::Grayscale => grayscale_inplace_strided(buf, width, height, stride, RGB),
        Filter::Invert => invert_inplace_strided(buf, width, height, stride, RGB),
        Filter::Sepia => sepia_inplace_strided(buf, width, height, stride, RGB),
    }
}

/// Apply `filter` to a strided RGBA image in place.
pub fn filter_rgba_inplace_strided(
    filter: Filter,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    match filter {
        Filter::Grayscale => grayscale_inplace_strided(buf, width, height, stride, RGBA),
        Filter::Invert => invert_inplace_strided(buf, width, height, stride, RGBA),
        Filter::Sepia => sepia_inplace_strided(buf, width, height, stride, RGBA),
    }
}
