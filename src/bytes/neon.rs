use archmage::prelude::*;

use crate::kernel;

const INVERT_RGB_MASK: [u8; 16] = [0xFF; 16];
const INVERT_RGBA_MASK: [u8; 16] = [
    0xFF, 0xFF, 0xFF, 0, 0xFF, 0xFF, 0xFF, 0, 0xFF, 0xFF, 0xFF, 0, 0xFF, 0xFF, 0xFF, 0,
];

// ===========================================================================
// ARM NEON: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn grayscale_row_neon(_token: NeonToken, row: &mut [u8], bpp: usize) {
    kernel::grayscale_row(row, bpp);
}

#[rite]
pub(super) fn grayscale_copy_row_neon(_token: NeonToken, src: &[u8], dst: &mut [u8], bpp: usize) {
    kernel::grayscale_copy_row(src, dst, bpp);
}

#[rite]
pub(super) fn sepia_row_neon(_token: NeonToken, row: &mut [u8], bpp: usize) {
    kernel::sepia_row(row, bpp);
}

#[rite]
pub(super) fn sepia_copy_row_neon(_token: NeonToken, src: &[u8], dst: &mut [u8], bpp: usize) {
    kernel::sepia_copy_row(src, dst, bpp);
}

#[rite]
pub(super) fn invert_row_neon(_token: NeonToken, row: &mut [u8], bpp: usize) {
    use core::arch::aarch64::veorq_u8;
    let mask_bytes = if bpp == 4 { &INVERT_RGBA_MASK } else { &INVERT_RGB_MASK };
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(mask_bytes);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(arr);
        let inverted = veorq_u8(v, mask);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(out, inverted);
        i += 16;
    }
    kernel::invert_row(&mut row[i..], bpp);
}

#[rite]
pub(super) fn invert_copy_row_neon(_token: NeonToken, src: &[u8], dst: &mut [u8], bpp: usize) {
    use core::arch::aarch64::veorq_u8;
    let mask_bytes = if bpp == 4 { &INVERT_RGBA_MASK } else { &INVERT_RGB_MASK };
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(mask_bytes);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        let inverted = veorq_u8(v, mask);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(d, inverted);
        i += 16;
    }
    kernel::invert_copy_row(&src[i..], &mut dst[i..], bpp);
}

// ===========================================================================
// ARM arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn grayscale_impl_neon(t: NeonToken, b: &mut [u8], bpp: usize) {
    grayscale_row_neon(t, b, bpp);
}
#[arcane]
pub(super) fn grayscale_copy_impl_neon(t: NeonToken, s: &[u8], d: &mut [u8], bpp: usize) {
    grayscale_copy_row_neon(t, s, d, bpp);
}
#[arcane]
pub(super) fn invert_impl_neon(t: NeonToken, b: &mut [u8], bpp: usize) {
    invert_row_neon(t, b, bpp);
}
#[arcane]
pub(super) fn invert_copy_impl_neon(t: NeonToken, s: &[u8], d: &mut [u8], bpp: usize) {
    invert_copy_row_neon(t, s, d, bpp);
}
#[arcane]
pub(super) fn sepia_impl_neon(t: NeonToken, b: &mut [u8], bpp: usize) {
    sepia_row_neon(t, b, bpp);
}
#[arcane]
pub(super) fn sepia_copy_impl_neon(t: NeonToken, s: &[u8], d: &mut [u8], bpp: usize) {
    sepia_copy_row_neon(t, s, d, bpp);
}

// ===========================================================================
// ARM arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn grayscale_strided_neon(
    t: NeonToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        grayscale_row_neon(t, &mut buf[y * stride..][..w * bpp], bpp);
    }
}
#[arcane]
pub(super) fn invert_strided_neon(
    t: NeonToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        invert_row_neon(t, &mut buf[y * stride..][..w * bpp], bpp);
    }
}
#[arcane]
pub(super) fn sepia_strided_neon(
    t: NeonToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        sepia_row_neon(t, &mut buf[y * stride..][..w * bpp], bpp);
    }
}
