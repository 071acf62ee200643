//! Munsell colors and the colors derived from them.

use std::fmt;

use rgb::RGB8;

use crate::converter::Converter;
use crate::error::Result;
use crate::hue::Hue;
use crate::RGBColor;

/// Largest meaningful value (white).
pub const MAX_VALUE: f32 = 10.;
/// Largest chroma considered valid.
pub const MAX_CHROMA: f32 = 40.;

/// A color given by its hue, value (lightness in \[0, 10\]) and chroma
/// (saturation in \[0, 40\]).
///
/// Colors are plain values: operations deriving colors from another
/// one always build new colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MunsellColor {
    hue: Hue,
    value: f32,
    chroma: f32,
}

/// Pair of colors found at the same hue distance on both sides of a
/// color.  See [`MunsellColor::analogous`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Analogous {
    /// Hue distance to the original color, in 1 ..= 5.
    pub distance: u8,
    /// Color with the lower hue number, if still in the sector.
    pub lower: Option<MunsellColor>,
    /// Color with the higher hue number, if still in the sector.
    pub upper: Option<MunsellColor>,
}

impl MunsellColor {
    /// Return the color with the given components.  They are not
    /// checked; see [`MunsellColor::is_valid`].
    pub fn new(hue: Hue, value: f32, chroma: f32) -> Self {
        MunsellColor { hue, value, chroma }
    }

    /// Achromatic color with value `value`.
    pub fn n(value: f32) -> Self {
        MunsellColor { hue: Hue::NEUTRAL, value, chroma: 0. }
    }

    /// The hue (`0N` for grays).
    #[inline]
    pub fn hue(&self) -> Hue { self.hue }

    /// Lightness, from 0 (black) to 10 (white).
    #[inline]
    pub fn value(&self) -> f32 { self.value }

    /// Saturation, 0 for grays.
    #[inline]
    pub fn chroma(&self) -> f32 { self.chroma }

    /// Says whether `self` is a gray.
    #[inline]
    pub fn is_achromatic(&self) -> bool { self.hue.is_achromatic() }

    /// Says whether the value is at most 10 and the chroma at most 40.
    pub fn is_valid(&self) -> bool {
        self.value <= MAX_VALUE && self.chroma <= MAX_CHROMA
    }

    /// Return the RGB color of `self`.
    ///
    /// Achromatic colors follow a linear gray ramp, the others are
    /// looked up in the table of `conv` (nearest sampled entry).
    pub fn to_rgb(&self, conv: &Converter) -> Result<RGB8> {
        if self.is_achromatic() {
            let x = (1. - (MAX_VALUE - self.value) / MAX_VALUE).clamp(0., 1.);
            let c = (x * 255. + 0.5) as u8;
            Ok(RGB8::new(c, c, c))
        } else {
            conv.to_rgb(self)
        }
    }

    /// Return the Munsell color of `rgb`.
    ///
    /// Grays give an achromatic color of value `r / 255 * 10`.  Note
    /// that this is not the inverse of the ramp used by
    /// [`MunsellColor::to_rgb`].
    pub fn from_rgb(rgb: RGB8, conv: &Converter) -> Result<Self> {
        if rgb.r == rgb.g && rgb.g == rgb.b {
            Ok(MunsellColor::n(rgb.r as f32 / 255. * MAX_VALUE))
        } else {
            conv.to_munsell(rgb)
        }
    }

    /// Same as [`MunsellColor::to_rgb`] for any RGB encoding.
    pub fn to_color<C: RGBColor>(&self, conv: &Converter) -> Result<C> {
        let rgb = self.to_rgb(conv)?;
        Ok(C::from_rgba(rgb.to_rgba()))
    }

    /// Same as [`MunsellColor::from_rgb`] for any RGB encoding.
    pub fn from_color<C: RGBColor>(c: &C, conv: &Converter) -> Result<Self> {
        Self::from_rgb(c.to_rgb8(), conv)
    }

    /// The complementary color: same value and chroma, hue on the
    /// opposite side of the hue circle.
    pub fn complement(&self) -> MunsellColor {
        let hue = Hue::wrap((self.hue.total() + 50.) % 100.);
        MunsellColor { hue, ..*self }
    }

    /// The colors at hue distance 1 to 5 from `self`, on both sides,
    /// without leaving the sector of `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use munsell::{Hue, HuePrefix, MunsellColor};
    /// let c = MunsellColor::new(Hue::new(HuePrefix::R, 3.)?, 2., 2.);
    /// let pairs = c.analogous();
    /// assert_eq!(pairs[1].lower.unwrap().hue().to_string(), "1R");
    /// assert_eq!(pairs[3].lower, None); // would be -1R
    /// # Ok::<(), munsell::Error>(())
    /// ```
    pub fn analogous(&self) -> [Analogous; 5] {
        let prefix = self.hue.prefix();
        let number = self.hue.number();
        let at = |n: f32| {
            // Out of [0, 10] means out of the sector.
            Hue::new(prefix, n).ok()
                .map(|hue| MunsellColor { hue, ..*self })
        };
        std::array::from_fn(|i| {
            let d = i as u8 + 1;
            Analogous { distance: d,
                        lower: at(number - d as f32),
                        upper: at(number + d as f32) }
        })
    }

    /// The colors analogous to the complement of `self`.
    pub fn split_complementary(&self) -> [Analogous; 5] {
        self.complement().analogous()
    }
}

impl fmt::Display for MunsellColor {
    /// `N4` for achromatic colors, `2.5PB, 2, 22` for the others
    /// (value and chroma truncated).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_achromatic() {
            write!(f, "N{}", self.value as i32)
        } else {
            write!(f, "{}, {}, {}", self.hue, self.value as i32,
                   self.chroma as i32)
        }
    }
}
