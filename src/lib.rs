//! # tinct
//!
//! *A little color for your pixels, or a lot less of it.*
//!
//! Three fixed per-pixel color filters for 8-bit RGB images: grayscale,
//! invert, and sepia. Every output pixel depends only on the input pixel at
//! the same position, so the filters run over rows of raw bytes with SIMD
//! dispatch for x86-64 AVX2 and ARM NEON and a scalar fallback.
//!
//! ```rust
//! use tinct::{Filter, sepia_rgb_inplace};
//!
//! let mut px = vec![100u8, 150, 200];
//! sepia_rgb_inplace(&mut px).unwrap();
//! assert_eq!(px, [192, 171, 133]);
//! assert_eq!(Filter::Invert.apply_pixel([100, 150, 200]), [155, 105, 55]);
//! ```
//!
//! ## Core operations (always available)
//!
//! All functions in the crate root operate on raw `&[u8]` / `&mut [u8]` slices
//! holding RGB (3 bytes/px) or RGBA (4 bytes/px) pixels. RGBA variants never
//! touch the alpha byte.
//!
//! ## Feature flags
//!
//! - **`rgb`**: typed filters over [`rgb`] crate pixel slices.
//! - **`imgref`**: whole-image filters over [`imgref`] buffers, including the
//!   [`Bitmap`] type. Implies `rgb`.
//! - **`rayon`**: row-parallel whole-image filtering.
//! - **`decode`**: load and save files through the `image` crate.
//! - **`cli`**: the `tinct` command-line tool.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod bytes;
mod filter;
mod kernel;

pub use bytes::*;
pub use filter::{Filter, UnknownFilter};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod img;

#[cfg(feature = "imgref")]
pub mod img_mut;

#[cfg(feature = "imgref")]
pub use img::Bitmap;

#[cfg(feature = "decode")]
pub mod io;

/// Buffer size or geometry rejected by a raw-buffer filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SizeError {
    /// Length is zero or not a multiple of the bytes-per-pixel.
    #[error("buffer length is zero or not a multiple of the pixel size")]
    NotPixelAligned,
    /// Destination holds fewer pixels than the source, or image dimensions differ.
    #[error("destination does not match the source pixel count")]
    PixelCountMismatch,
    /// Width, height, or stride are inconsistent with the buffer.
    #[error("width, height, or stride does not fit the buffer")]
    InvalidStride,
}
