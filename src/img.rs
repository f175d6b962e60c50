//! Whole-image color filters using [`imgref`] types.
//!
//! Every function here reads an [`ImgRef`] (any stride) and returns a new,
//! tightly packed [`ImgVec`] of the same width and height. The source is never
//! modified; for in-place filtering see [`crate::img_mut`].
//!
//! ```rust
//! use rgb::Rgb;
//! use imgref::ImgVec;
//! use tinct::{Bitmap, Filter, img};
//!
//! let src: Bitmap = ImgVec::new(vec![Rgb::new(100u8, 150, 200); 12], 4, 3);
//! let gray = img::grayscale(src.as_ref());
//! assert_eq!((gray.width(), gray.height()), (4, 3));
//! assert_eq!(gray.buf()[0], Rgb::new(143, 143, 143));
//! assert_eq!(img::apply(Filter::Invert, src.as_ref()).buf()[5], Rgb::new(155, 105, 55));
//! ```

use alloc::vec;

use imgref::{ImgRef, ImgVec};
use rgb::{Rgb, Rgba};

use crate::Filter;

/// An owned 8-bit RGB image, row-major.
pub type Bitmap = ImgVec<Rgb<u8>>;

/// Wrap a tightly packed buffer. imgref rejects a zero stride, so a
/// zero-width image gets stride 1 over an empty buffer.
pub(crate) fn packed<T>(buf: alloc::vec::Vec<T>, w: usize, h: usize) -> ImgVec<T> {
    ImgVec::new_stride(buf, w, h, w.max(1))
}

// ---------------------------------------------------------------------------
// RGB
// ---------------------------------------------------------------------------

/// Grayscale copy of `img`.
pub fn grayscale(img: ImgRef<'_, Rgb<u8>>) -> Bitmap {
    apply(Filter::Grayscale, img)
}

/// Inverted copy of `img`.
pub fn invert(img: ImgRef<'_, Rgb<u8>>) -> Bitmap {
    apply(Filter::Invert, img)
}

/// Sepia-toned copy of `img`.
pub fn sepia(img: ImgRef<'_, Rgb<u8>>) -> Bitmap {
    apply(Filter::Sepia, img)
}

/// Copy of `img` with `filter` applied.
pub fn apply(filter: Filter, img: ImgRef<'_, Rgb<u8>>) -> Bitmap {
    let w = img.width();
    let h = img.height();
    let mut dst = packed(vec![Rgb::default(); w * h], w, h);
    if w == 0 {
        return dst;
    }
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        let src_bytes: &[u8] = bytemuck::cast_slice(src_row);
        let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        crate::filter_rgb(filter, src_bytes, dst_bytes).expect("rows share a non-zero width");
    }
    dst
}

// ---------------------------------------------------------------------------
// RGBA (alpha copied through)
// ---------------------------------------------------------------------------

/// Copy of an RGBA `img` with `filter` applied to the color channels.
pub fn apply_rgba(filter: Filter, img: ImgRef<'_, Rgba<u8>>) -> ImgVec<Rgba<u8>> {
    let w = img.width();
    let h = img.height();
    let mut dst = packed(vec![Rgba::default(); w * h], w, h);
    if w == 0 {
        return dst;
    }
    for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
        let src_bytes: &[u8] = bytemuck::cast_slice(src_row);
        let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        crate::filter_rgba(filter, src_bytes, dst_bytes).expect("rows share a non-zero width");
    }
    dst
}

// ---------------------------------------------------------------------------
// Row-parallel
// ---------------------------------------------------------------------------

/// Same result as [`apply`], with rows split across the rayon thread pool.
#[cfg(feature = "rayon")]
pub fn par_apply(filter: Filter, img: ImgRef<'_, Rgb<u8>>) -> Bitmap {
    use rayon::prelude::*;

    let w = img.width();
    let h = img.height();
    let stride = img.stride();
    let mut buf = vec![Rgb::default(); w * h];
    if w > 0 {
        let src = img.buf();
        buf.par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, dst_row)| {
                let src_row = &src[y * stride..][..w];
                let src_bytes: &[u8] = bytemuck::cast_slice(src_row);
                let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
                crate::filter_rgb(filter, src_bytes, dst_bytes)
                    .expect("rows share a non-zero width");
            });
    }
    packed(buf, w, h)
}

impl Filter {
    /// Copy of `img` with this filter applied. Same as [`apply`].
    pub fn apply_to(self, img: ImgRef<'_, Rgb<u8>>) -> Bitmap {
        apply(self, img)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn sample(w: usize, h: usize) -> Bitmap {
        let buf: Vec<Rgb<u8>> = (0..w * h)
            .map(|i| Rgb::new((i * 7) as u8, (i * 13 + 50) as u8, (i * 29 + 100) as u8))
            .collect();
        ImgVec::new(buf, w, h)
    }

    #[test]
    fn test_dimensions_preserved() {
        let src = sample(17, 5);
        for f in Filter::ALL {
            let out = apply(f, src.as_ref());
            assert_eq!(out.width(), 17);
            assert_eq!(out.height(), 5);
            assert_eq!(out.stride(), 17);
        }
    }

    #[test]
    fn test_matches_pixel_formula() {
        let src = sample(9, 4);
        for f in Filter::ALL {
            let out = apply(f, src.as_ref());
            for (s, d) in src.pixels().zip(out.pixels()) {
                let want = f.apply_pixel([s.r, s.g, s.b]);
                assert_eq!([d.r, d.g, d.b], want, "{f}");
            }
        }
    }

    #[test]
    fn test_source_untouched() {
        let src = sample(6, 6);
        let before = src.buf().clone();
        let _ = sepia(src.as_ref());
        assert_eq!(src.buf(), &before);
    }

    #[test]
    fn test_strided_source() {
        // 3 pixels wide with stride 4; the padding pixel must not leak into the output
        let buf = vec![
            Rgb::new(100u8, 150, 200),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(1, 2, 3),
            Rgb::new(10, 20, 30),
            Rgb::new(40, 50, 60),
            Rgb::new(70, 80, 90),
            Rgb::new(4, 5, 6),
        ];
        let img = ImgVec::new_stride(buf, 3, 2, 4);
        let out = invert(img.as_ref());
        assert_eq!(out.stride(), 3);
        assert_eq!(out.buf().len(), 6);
        assert_eq!(out.buf()[0], Rgb::new(155, 105, 55));
        assert_eq!(out.buf()[3], Rgb::new(245, 235, 225));
    }

    #[test]
    fn test_rgba_alpha_copied() {
        let img = ImgVec::new(vec![Rgba::new(100u8, 150, 200, 9); 8], 4, 2);
        let out = apply_rgba(Filter::Sepia, img.as_ref());
        assert!(out.pixels().all(|p| p == Rgba::new(192, 171, 133, 9)));
    }

    #[test]
    fn test_grayscale_idempotent() {
        let src = sample(32, 8);
        let once = grayscale(src.as_ref());
        let twice = grayscale(once.as_ref());
        assert_eq!(once.buf(), twice.buf());
    }

    #[test]
    fn test_invert_involution() {
        let src = sample(32, 8);
        let back = invert(invert(src.as_ref()).as_ref());
        assert_eq!(back.buf(), src.buf());
    }

    #[test]
    fn test_apply_to_matches_apply() {
        let src = sample(5, 5);
        assert_eq!(
            Filter::Sepia.apply_to(src.as_ref()).buf(),
            apply(Filter::Sepia, src.as_ref()).buf()
        );
    }

    #[test]
    fn test_zero_width_keeps_dimensions() {
        let img = ImgVec::new_stride(vec![Rgb::default(); 4], 0, 2, 2);
        for f in Filter::ALL {
            let out = apply(f, img.as_ref());
            assert_eq!((out.width(), out.height()), (0, 2));
            assert!(out.buf().is_empty());
        }
        let rgba = ImgVec::new_stride(vec![Rgba::default(); 3], 0, 3, 1);
        let out = apply_rgba(Filter::Invert, rgba.as_ref());
        assert_eq!((out.width(), out.height()), (0, 3));
    }

    #[test]
    fn test_zero_height_keeps_dimensions() {
        let img: Bitmap = ImgVec::new(Vec::new(), 4, 0);
        let out = sepia(img.as_ref());
        assert_eq!((out.width(), out.height()), (4, 0));
        assert!(out.buf().is_empty());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_apply_zero_sized() {
        let img = ImgVec::new_stride(vec![Rgb::default(); 2], 0, 2, 1);
        let out = par_apply(Filter::Grayscale, img.as_ref());
        assert_eq!((out.width(), out.height()), (0, 2));
        let img: Bitmap = ImgVec::new(Vec::new(), 5, 0);
        assert_eq!(par_apply(Filter::Invert, img.as_ref()).height(), 0);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_apply_matches_apply() {
        let buf = (0..40 * 30)
            .map(|i| Rgb::new(i as u8, (i >> 3) as u8, 255 - i as u8))
            .collect();
        let img = ImgVec::new_stride(buf, 30, 30, 40);
        for f in Filter::ALL {
            assert_eq!(par_apply(f, img.as_ref()).buf(), apply(f, img.as_ref()).buf());
        }
    }
}
