use core::fmt;
use core::str::FromStr;

use crate::kernel;

/// One of the three fixed color filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Luma `floor(0.21 R + 0.72 G + 0.07 B)` replicated into all channels.
    Grayscale,
    /// `255 - c` for every color channel.
    Invert,
    /// Classic sepia tone matrix, each channel truncated and capped at 255.
    Sepia,
}

impl Filter {
    /// Every filter, in display order.
    pub const ALL: [Filter; 3] = [Filter::Grayscale, Filter::Invert, Filter::Sepia];

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Invert => "invert",
            Filter::Sepia => "sepia",
        }
    }

    /// One-line summary for listings.
    pub const fn description(self) -> &'static str {
        match self {
            Filter::Grayscale => "luma-weighted gray (0.21 R + 0.72 G + 0.07 B)",
            Filter::Invert => "photographic negative (255 - channel)",
            Filter::Sepia => "warm brown sepia tone",
        }
    }

    /// Apply the filter to a single `[r, g, b]` pixel.
    #[inline]
    pub fn apply_pixel(self, [r, g, b]: [u8; 3]) -> [u8; 3] {
        match self {
            Filter::Grayscale => {
                let y = kernel::luma(r, g, b);
                [y, y, y]
            }
            Filter::Invert => [255 - r, 255 - g, 255 - b],
            Filter::Sepia => kernel::sepia(r, g, b),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A filter name that matches none of [`Filter::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter {name:?} (expected grayscale, invert, or sepia)")]
pub struct UnknownFilter {
    name: alloc::string::String,
}

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("greyscale") {
            return Ok(Filter::Grayscale);
        }
        Filter::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFilter { name: s.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("grayscale".parse::<Filter>(), Ok(Filter::Grayscale));
        assert_eq!("Greyscale".parse::<Filter>(), Ok(Filter::Grayscale));
        assert_eq!(" INVERT ".parse::<Filter>(), Ok(Filter::Invert));
        assert_eq!("sepia".parse::<Filter>(), Ok(Filter::Sepia));
        assert!("blur".parse::<Filter>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for f in Filter::ALL {
            assert_eq!(f.name().parse::<Filter>(), Ok(f));
        }
    }

    #[test]
    fn reference_pixel() {
        let px = [100, 150, 200];
        assert_eq!(Filter::Grayscale.apply_pixel(px), [143, 143, 143]);
        assert_eq!(Filter::Invert.apply_pixel(px), [155, 105, 55]);
        assert_eq!(Filter::Sepia.apply_pixel(px), [192, 171, 133]);
    }

    #[test]
    fn invert_is_involution_per_pixel() {
        for v in 0..=255u8 {
            let px = [v, v.wrapping_mul(7), v.wrapping_add(91)];
            assert_eq!(Filter::Invert.apply_pixel(Filter::Invert.apply_pixel(px)), px);
        }
    }
}
