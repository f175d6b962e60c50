use archmage::prelude::*;

use crate::kernel;

// ===========================================================================
// Scalar contiguous wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn grayscale_impl_scalar(_t: ScalarToken, b: &mut [u8], bpp: usize) {
    kernel::grayscale_row(b, bpp);
}
pub(super) fn grayscale_copy_impl_scalar(_t: ScalarToken, s: &[u8], d: &mut [u8], bpp: usize) {
    kernel::grayscale_copy_row(s, d, bpp);
}
pub(super) fn invert_impl_scalar(_t: ScalarToken, b: &mut [u8], bpp: usize) {
    kernel::invert_row(b, bpp);
}
pub(super) fn invert_copy_impl_scalar(_t: ScalarToken, s: &[u8], d: &mut [u8], bpp: usize) {
    kernel::invert_copy_row(s, d, bpp);
}
pub(super) fn sepia_impl_scalar(_t: ScalarToken, b: &mut [u8], bpp: usize) {
    kernel::sepia_row(b, bpp);
}
pub(super) fn sepia_copy_impl_scalar(_t: ScalarToken, s: &[u8], d: &mut [u8], bpp: usize) {
    kernel::sepia_copy_row(s, d, bpp);
}

// ===========================================================================
// Scalar strided wrappers
// ===========================================================================

pub(super) fn grayscale_strided_scalar(
    _t: ScalarToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        kernel::grayscale_row(&mut buf[y * stride..][..w * bpp], bpp);
    }
}
pub(super) fn invert_strided_scalar(
    _t: ScalarToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        kernel::invert_row(&mut buf[y * stride..][..w * bpp], bpp);
    }
}
pub(super) fn sepia_strided_scalar(
    _t: ScalarToken,
    buf: &mut [u8],
    w: usize,
    h: usize,
    stride: usize,
    bpp: usize,
) {
    for y in 0..h {
        kernel::sepia_row(&mut buf[y * stride..][..w * bpp], bpp);
    }
}
