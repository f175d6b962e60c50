use archmage::prelude::*;
use core::arch::x86_64::{_mm256_set1_epi8, _mm256_xor_si256};
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

use crate::kernel;

// ===========================================================================
// SIMD constants
// ===========================================================================

// XOR with 0xFF is 255 - c. Alpha lanes (byte 3 of each pixel) get 0.
const INVERT_RGBA_MASK_AVX: [i8; 32] = [
    -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1, -1, -1, 0, -1,
    -1, -1, 0, -1, -1, -1, 0,
];

// ===========================================================================
// x86-64 AVX2: rite row implementations
// ===========================================================================

// Grayscale and sepia are integer multiply-add per pixel; the kernel loop is
// compiled here with the v3 feature set so LLVM vectorizes it.

#[rite]
pub(super) fn grayscale_row_v3(_token: X64V3Token, row: &mut [u8], bpp: usize) {
    kernel::grayscale_row(row, bpp);
}

#[rite]
pub(super) fn grayscale_copy_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], bpp: usize) {
    kernel::grayscale_copy_row(src, dst, bpp);
}

#[rite]
pub(super) fn sepia_row_v3(_token: X64V3Token, row: &mut [u8], bpp: usize) {
    kernel::sepia_row(row, bpp);
}

#[rite]
pub(super) fn sepia_copy_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], bpp: usize) {
    kernel::sepia_copy_row(src, dst, bpp);
}

#[rite]
pub(super) fn invert_row_v3(_token: X64V3Token, row: &mut [u8], bpp: usize) {
    let mask = if bpp == 4 {
        _mm256_loadu_si256(&INVERT_RGBA_MASK_AVX)
    } else {
        _mm256_set1_epi8(-1)
    };
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let inverted = _mm256_xor_si256(v, mask);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, inverted);
        i += 32;
    }
    // 32 is a multiple of 4, and 3bpp inversion is bytewise, so the tail
    // needs no realignment.
    kernel::invert_row(&mut row[i..], bpp);
}

#[rite]
pub(super) fn invert_copy_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8], bpp: usize) {
    let mask = if bpp == 4 {
        _mm256_loadu_si256(&INVERT_RGBA_MASK_AVX)
    } else {
        _mm256_set1_epi8(-1)
    };
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let inverted = _mm256_xor_si256(v, mask);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, inverted);
        i += 32;
    }
    kernel::invert_copy_row(&src[i..], &mut dst[i..], bpp);
}

// ===========================================================================
// x86-64 arcane contiguous wrappers
// ===========================================================================

#[arcane]
pub(super) fn grayscale_impl_v3(t: X64V3Token, b: &mut [u8], bpp: usize) {
    grayscale_row_v3(t, b, bpp);
}
#[arcane]
pub(super) fn grayscale_copy_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], bpp: usize) {
    grayscale_copy_row_v3(t, s, d, bpp);
}
#[arcane]
pub(super) fn invert_impl_v3(t: X64V3Token, b: &mut [u8], bpp: usize) {
    invert_row_v3(t, b, bpp);
}
#[arcane]
pub(super) fn invert_copy_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], bpp: usize) {
    invert_copy_row_v3(t, s, d, bpp);
}
#[arcane]
pub(super) fn sepia_impl_v3(t: X64V3Token, b: &mut [u8], bpp: usize) {
    sepia_row_v3(t, b, bpp);
}
#[arcane]
pub(super) fn sepia_copy_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], bpp: usize) {
    sepia_copy_row_v3(t, s, d, bpp);
}

// ===========================================================================
// x86-64 arcane strided wrappers
// ===========================================================================

#[arcane]
pub(super) fn grayscale_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        grayscale_row_v3(t, &mut buf[y * stride..][..w * bpp], bpp);
    }
}
#[arcane]
pub(super) fn invert_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        invert_row_v3(t, &mut buf[y * stride..][..w * bpp], bpp);
    }
}
#[arcane]
pub(super) fn sepia_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        sepia_row_v3(t, &mut buf[y * stride..][..w * bpp], bpp);
    }
}
