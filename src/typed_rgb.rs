//! Type-safe color filters over [`rgb`] crate pixel slices via bytemuck.
//!
//! Slices are reinterpreted as bytes without copying and run through the
//! SIMD-dispatched core operations.
//!
//! ```rust
//! use rgb::Rgb;
//! use tinct::{Filter, typed_rgb};
//!
//! let mut pixels: Vec<Rgb<u8>> = vec![Rgb::new(100, 150, 200); 64];
//! typed_rgb::apply_rgb_mut(Filter::Sepia, &mut pixels);
//! assert_eq!(pixels[0], Rgb::new(192, 171, 133));
//! ```

use crate::{Filter, SizeError};
use rgb::{Rgb, Rgba};

// ---------------------------------------------------------------------------
// In-place
// ---------------------------------------------------------------------------

/// Apply `filter` to every pixel of `pixels` in place. Empty slices are a no-op.
pub fn apply_rgb_mut(filter: Filter, pixels: &mut [Rgb<u8>]) {
    if pixels.is_empty() {
        return;
    }
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::filter_rgb_inplace(filter, bytes).expect("typed slice is always valid");
}

/// Apply `filter` to every pixel of `pixels` in place, leaving alpha alone.
pub fn apply_rgba_mut(filter: Filter, pixels: &mut [Rgba<u8>]) {
    if pixels.is_empty() {
        return;
    }
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::filter_rgba_inplace(filter, bytes).expect("typed slice is always valid");
}

/// Grayscale `pixels` in place.
pub fn grayscale_mut(pixels: &mut [Rgb<u8>]) {
    apply_rgb_mut(Filter::Grayscale, pixels);
}

/// Invert `pixels` in place.
pub fn invert_mut(pixels: &mut [Rgb<u8>]) {
    apply_rgb_mut(Filter::Invert, pixels);
}

/// Sepia-tone `pixels` in place.
pub fn sepia_mut(pixels: &mut [Rgb<u8>]) {
    apply_rgb_mut(Filter::Sepia, pixels);
}

// ---------------------------------------------------------------------------
// Copy
// ---------------------------------------------------------------------------

/// Copy `src` into `dst` with `filter` applied.
///
/// `dst` must hold at least `src.len()` pixels. Empty `src` is a no-op.
pub fn apply_rgb_buf(
    filter: Filter,
    src: &[Rgb<u8>],
    dst: &mut [Rgb<u8>],
) -> Result<(), SizeError> {
    if src.is_empty() {
        return Ok(());
    }
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::filter_rgb(filter, src_bytes, dst_bytes)
}

/// Copy `src` into `dst` with `filter` applied, alpha copied through.
pub fn apply_rgba_buf(
    filter: Filter,
    src: &[Rgba<u8>],
    dst: &mut [Rgba<u8>],
) -> Result<(), SizeError> {
    if src.is_empty() {
        return Ok(());
    }
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::filter_rgba(filter, src_bytes, dst_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_named_helpers() {
        let mut px = vec![Rgb::new(100u8, 150, 200); 3];
        grayscale_mut(&mut px);
        assert_eq!(px[2], Rgb::new(143, 143, 143));

        let mut px = vec![Rgb::new(100u8, 150, 200); 3];
        invert_mut(&mut px);
        assert_eq!(px[0], Rgb::new(155, 105, 55));

        let mut px = vec![Rgb::new(100u8, 150, 200); 3];
        sepia_mut(&mut px);
        assert_eq!(px[1], Rgb::new(192, 171, 133));
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let mut px = vec![Rgba::new(100u8, 150, 200, 42); 20];
        apply_rgba_mut(Filter::Invert, &mut px);
        assert!(px.iter().all(|p| *p == Rgba::new(155, 105, 55, 42)));
    }

    #[test]
    fn test_empty_is_noop() {
        let mut none: [Rgb<u8>; 0] = [];
        apply_rgb_mut(Filter::Sepia, &mut none);
        assert_eq!(apply_rgb_buf(Filter::Sepia, &[], &mut []), Ok(()));
    }

    #[test]
    fn test_buf_too_small() {
        let src = [Rgba::new(1u8, 2, 3, 4); 4];
        let mut dst = [Rgba::default(); 3];
        assert_eq!(
            apply_rgba_buf(Filter::Grayscale, &src, &mut dst),
            Err(SizeError::PixelCountMismatch)
        );
    }
}
