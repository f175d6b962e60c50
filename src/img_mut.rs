//! In-place and caller-allocated whole-image filters using [`imgref`] types.
//!
//! No allocation; the caller owns every buffer. Padding between rows is
//! never read or written.
//!
//! ```rust
//! use rgb::Rgb;
//! use ::imgref::{ImgRefMut, ImgVec};
//! use tinct::{Filter, img_mut};
//!
//! let mut img = ImgVec::new(vec![Rgb::new(100u8, 150, 200); 4], 2, 2);
//! img_mut::apply_inplace(Filter::Invert, img.as_mut());
//! assert_eq!(img.buf()[0], Rgb::new(155, 105, 55));
//!
//! let mut dst_buf = vec![Rgb::default(); 4];
//! img_mut::apply_into(Filter::Invert, img.as_ref(), ImgRefMut::new(&mut dst_buf, 2, 2)).unwrap();
//! assert_eq!(dst_buf[3], Rgb::new(100, 150, 200));
//! ```

use imgref::{ImgRef, ImgRefMut};
use rgb::{Rgb, Rgba};

use crate::{Filter, SizeError};

// ---------------------------------------------------------------------------
// Dimension check
// ---------------------------------------------------------------------------

fn check_dims(sw: usize, sh: usize, dw: usize, dh: usize) -> Result<(), SizeError> {
    if sw != dw || sh != dh {
        Err(SizeError::PixelCountMismatch)
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In place
// ---------------------------------------------------------------------------

/// Apply `filter` to every pixel of `img` in place.
pub fn apply_inplace(filter: Filter, mut img: ImgRefMut<'_, Rgb<u8>>) {
    if img.width() == 0 {
        return;
    }
    for row in img.rows_mut() {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(row);
        crate::filter_rgb_inplace(filter, bytes).expect("row is always valid");
    }
}

/// Apply `filter` to the color channels of an RGBA `img` in place.
pub fn apply_rgba_inplace(filter: Filter, mut img: ImgRefMut<'_, Rgba<u8>>) {
    if img.width() == 0 {
        return;
    }
    for row in img.rows_mut() {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(row);
        crate::filter_rgba_inplace(filter, bytes).expect("row is always valid");
    }
}

// ---------------------------------------------------------------------------
// Copy into caller-provided destination
// ---------------------------------------------------------------------------

/// Write `src` with `filter` applied into `dst`. Dimensions must match.
pub fn apply_into(
    filter: Filter,
    src: ImgRef<'_, Rgb<u8>>,
    mut dst: ImgRefMut<'_, Rgb<u8>>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    if src.width() == 0 {
        return Ok(());
    }
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        let s: &[u8] = bytemuck::cast_slice(src_row);
        let d: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        crate::filter_rgb(filter, s, d)?;
    }
    Ok(())
}

/// Write RGBA `src` with `filter` applied into `dst`. Alpha is copied through.
pub fn apply_rgba_into(
    filter: Filter,
    src: ImgRef<'_, Rgba<u8>>,
    mut dst: ImgRefMut<'_, Rgba<u8>>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    if src.width() == 0 {
        return Ok(());
    }
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        let s: &[u8] = bytemuck::cast_slice(src_row);
        let d: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        crate::filter_rgba(filter, s, d)?;
    }
    Ok(())
}
