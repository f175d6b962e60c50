//! Whole-image properties of the three filters.
#![cfg(feature = "imgref")]

use imgref::ImgVec;
use rgb::Rgb;
use tinct::{Bitmap, Filter, img, img_mut};

/// Deterministic pseudo-random image (xorshift) so the tests cover the full channel range.
fn noise(w: usize, h: usize, mut seed: u32) -> Bitmap {
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        seed
    };
    let buf = (0..w * h)
        .map(|_| {
            let v = next();
            Rgb::new(v as u8, (v >> 8) as u8, (v >> 16) as u8)
        })
        .collect();
    ImgVec::new(buf, w, h)
}

#[test]
fn grayscale_has_equal_channels_and_floor_luma() {
    let src = noise(64, 48, 0x9E37_79B9);
    let out = img::grayscale(src.as_ref());
    for (s, d) in src.pixels().zip(out.pixels()) {
        assert_eq!(d.r, d.g);
        assert_eq!(d.g, d.b);
        let exact = (21 * s.r as u32 + 72 * s.g as u32 + 7 * s.b as u32) / 100;
        assert_eq!(d.r as u32, exact, "src={s:?}");
    }
}

#[test]
fn invert_complements_every_channel() {
    let src = noise(33, 17, 12345);
    let out = img::invert(src.as_ref());
    for (s, d) in src.pixels().zip(out.pixels()) {
        assert_eq!((d.r, d.g, d.b), (255 - s.r, 255 - s.g, 255 - s.b));
    }
}

#[test]
fn sepia_channels_are_truncated_and_capped() {
    let src = noise(40, 40, 777);
    let out = img::sepia(src.as_ref());
    for (s, d) in src.pixels().zip(out.pixels()) {
        let (r, g, b) = (s.r as u32, s.g as u32, s.b as u32);
        let sums = [
            (393 * r + 769 * g + 189 * b) / 1000,
            (349 * r + 686 * g + 168 * b) / 1000,
            (272 * r + 534 * g + 131 * b) / 1000,
        ];
        for (sum, got) in sums.into_iter().zip([d.r, d.g, d.b]) {
            if sum <= 255 {
                assert_eq!(got as u32, sum, "src={s:?}");
            } else {
                assert_eq!(got, 255, "src={s:?}");
            }
        }
    }
}

#[test]
fn grayscale_is_idempotent() {
    let src = noise(50, 20, 42);
    let once = img::grayscale(src.as_ref());
    let twice = img::grayscale(once.as_ref());
    assert_eq!(once.buf(), twice.buf());
}

#[test]
fn invert_is_an_involution() {
    let src = noise(50, 20, 4242);
    let back = img::invert(img::invert(src.as_ref()).as_ref());
    assert_eq!(back.buf(), src.buf());
}

#[test]
fn reference_pixel() {
    let src: Bitmap = ImgVec::new(vec![Rgb::new(100, 150, 200)], 1, 1);
    assert_eq!(img::grayscale(src.as_ref()).buf()[0], Rgb::new(143, 143, 143));
    assert_eq!(img::invert(src.as_ref()).buf()[0], Rgb::new(155, 105, 55));
    assert_eq!(img::sepia(src.as_ref()).buf()[0], Rgb::new(192, 171, 133));
}

#[test]
fn dimensions_are_preserved() {
    for (w, h) in [(1, 1), (1, 9), (9, 1), (31, 7), (100, 3)] {
        let src = noise(w, h, 99);
        for f in Filter::ALL {
            let out = img::apply(f, src.as_ref());
            assert_eq!((out.width(), out.height()), (w, h), "{f}");
        }
    }
}

#[test]
fn inplace_matches_pure() {
    let src = noise(23, 11, 31337);
    for f in Filter::ALL {
        let pure = img::apply(f, src.as_ref());
        let mut copy = src.clone();
        img_mut::apply_inplace(f, copy.as_mut());
        assert_eq!(copy.buf(), pure.buf(), "{f}");
    }
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_matches_sequential() {
    let src = noise(257, 129, 2024);
    for f in Filter::ALL {
        assert_eq!(
            img::par_apply(f, src.as_ref()).buf(),
            img::apply(f, src.as_ref()).buf(),
            "{f}"
        );
    }
}
