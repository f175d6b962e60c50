// ---------------------------------------------------------------------------
// Per-pixel arithmetic shared by every dispatch tier.
//
// Weights are exact hundredths (luma) and thousandths (sepia), so the integer
// quotient is the floor of the real-valued weighted sum. Worst-case sums:
// 100 * 255 = 25_500 and 1_351 * 255 = 344_505, both well inside u32.
// ---------------------------------------------------------------------------

pub(crate) const LUMA_WEIGHTS: [u32; 3] = [21, 72, 7];
pub(crate) const LUMA_SCALE: u32 = 100;

pub(crate) const SEPIA_WEIGHTS: [[u32; 3]; 3] = [
    [393, 769, 189],
    [349, 686, 168],
    [272, 534, 131],
];
pub(crate) const SEPIA_SCALE: u32 = 1000;

#[inline(always)]
fn weighted(w: &[u32; 3], r: u8, g: u8, b: u8) -> u32 {
    w[0] * r as u32 + w[1] * g as u32 + w[2] * b as u32
}

#[inline(always)]
pub(crate) fn luma(r: u8, g: u8, b: u8) -> u8 {
    // Weights sum to the scale, so the quotient never exceeds 255.
    (weighted(&LUMA_WEIGHTS, r, g, b) / LUMA_SCALE) as u8
}

#[inline(always)]
pub(crate) fn sepia(r: u8, g: u8, b: u8) -> [u8; 3] {
    let ch = |w: &[u32; 3]| (weighted(w, r, g, b) / SEPIA_SCALE).min(255) as u8;
    [
        ch(&SEPIA_WEIGHTS[0]),
        ch(&SEPIA_WEIGHTS[1]),
        ch(&SEPIA_WEIGHTS[2]),
    ]
}

// ===========================================================================
// Row loops
// ===========================================================================

#[inline(always)]
pub(crate) fn grayscale_row(row: &mut [u8], bpp: usize) {
    for px in row.chunks_exact_mut(bpp) {
        let y = luma(px[0], px[1], px[2]);
        px[0] = y;
        px[1] = y;
        px[2] = y;
    }
}

#[inline(always)]
pub(crate) fn grayscale_copy_row(src: &[u8], dst: &mut [u8], bpp: usize) {
    for (s, d) in src.chunks_exact(bpp).zip(dst.chunks_exact_mut(bpp)) {
        let y = luma(s[0], s[1], s[2]);
        d[0] = y;
        d[1] = y;
        d[2] = y;
        d[3..].copy_from_slice(&s[3..]);
    }
}

/// With 3 bytes/px every byte is a color byte, so the row need not be
/// pixel aligned. SIMD tails rely on this.
#[inline(always)]
pub(crate) fn invert_row(row: &mut [u8], bpp: usize) {
    if bpp == 3 {
        for v in row.iter_mut() {
            *v = 255 - *v;
        }
        return;
    }
    for px in row.chunks_exact_mut(bpp) {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}

#[inline(always)]
pub(crate) fn invert_copy_row(src: &[u8], dst: &mut [u8], bpp: usize) {
    if bpp == 3 {
        for (&s, d) in src.iter().zip(dst.iter_mut()) {
            *d = 255 - s;
        }
        return;
    }
    for (s, d) in src.chunks_exact(bpp).zip(dst.chunks_exact_mut(bpp)) {
        d[0] = 255 - s[0];
        d[1] = 255 - s[1];
        d[2] = 255 - s[2];
        d[3..].copy_from_slice(&s[3..]);
    }
}

#[inline(always)]
pub(crate) fn sepia_row(row: &mut [u8], bpp: usize) {
    for px in row.chunks_exact_mut(bpp) {
        let [r, g, b] = sepia(px[0], px[1], px[2]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}

#[inline(always)]
pub(crate) fn sepia_copy_row(src: &[u8], dst: &mut [u8], bpp: usize) {
    for (s, d) in src.chunks_exact(bpp).zip(dst.chunks_exact_mut(bpp)) {
        let [r, g, b] = sepia(s[0], s[1], s[2]);
        d[0] = r;
        d[1] = g;
        d[2] = b;
        d[3..].copy_from_slice(&s[3..]);
    }
}
