//! The Munsell color system and its conversion to and from RGB.
//!
//! - [`Hue`] and [`MunsellColor`] model colors by hue, value
//!   (lightness, 0 to 10) and chroma (saturation, 0 to 40).
//! - [`Converter`] translates between Munsell and RGB using measured
//!   tables and nearest-key lookups: no closed formula links the two
//!   spaces.
//! - [`MixSolver`] searches for the weights with which a set of
//!   colors must be mixed to approach a wanted one.
//! - [`Palette`] keeps a short list of recently chosen colors.
//!
//! # Example
//!
//! ```
//! use rgb::RGB8;
//! use munsell::{Converter, ForwardRow, ReverseRow, Hue, HuePrefix,
//!               MunsellColor};
//! let red = Hue::new(HuePrefix::R, 5.)?;
//! let forward = [ForwardRow { hue: red, value: 4, chroma: 14,
//!                             rgb: RGB8::new(176, 48, 62) }];
//! let reverse = [ReverseRow { rgb: RGB8::new(176, 48, 62),
//!                             color: MunsellColor::new(red, 4., 14.) }];
//! let conv = Converter::new(forward, reverse)?;
//! // Nearest sampled entry: value 4, chroma 14.
//! let c = MunsellColor::new(red, 4.2, 13.);
//! assert_eq!(c.to_rgb(&conv)?, RGB8::new(176, 48, 62));
//! assert_eq!(MunsellColor::from_rgb(RGB8::new(180, 50, 60), &conv)?
//!                .to_string(),
//!            "5R, 4, 14");
//! # Ok::<(), munsell::Error>(())
//! ```

use rgb::{RGB, RGBA, RGB8};

mod error;
mod hue;
mod munsell;
mod converter;
mod mix;
mod palette;
#[cfg(test)]
mod fixture;

pub use error::{Error, Result};
pub use hue::{Hue, HuePrefix};
pub use munsell::{Analogous, MunsellColor};
pub use converter::{Converter, ForwardRow, ReverseRow, load::{self, CsvOptions}};
pub use mix::{color_distance, mix, mix_rgb, rgb_distance, MixSolver, Solution};
pub use palette::Palette;

/// Specifies the methods a RGB color encoding must provide to be
/// converted to and from Munsell colors.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// The 8 bits RGB color the conversion tables work with.  The
    /// components are truncated, as when mixing.
    fn to_rgb8(&self) -> RGB8 {
        let RGBA { r, g, b, .. } = self.to_rgba();
        RGB8 { r: r as u8, g: g as u8, b: b as u8 }
    }
}

// Components are taken as they are, whatever their width; only the
// alpha channel defaults to opaque.
macro_rules! rgb_encodings {
    ($($t: ty),*) => { $(
        impl RGBColor for RGB<$t> {
            #[inline]
            fn to_rgba(&self) -> RGBA<f64> {
                let RGB { r, g, b } = *self;
                RGBA { r: r.into(), g: g.into(), b: b.into(), a: 255. }
            }

            #[inline]
            fn from_rgba(c: RGBA<f64>) -> Self {
                RGB { r: c.r as $t, g: c.g as $t, b: c.b as $t }
            }
        }

        impl RGBColor for RGBA<$t> {
            #[inline]
            fn to_rgba(&self) -> RGBA<f64> {
                let RGBA { r, g, b, a } = *self;
                RGBA { r: r.into(), g: g.into(), b: b.into(), a: a.into() }
            }

            #[inline]
            fn from_rgba(c: RGBA<f64>) -> Self {
                RGBA { r: c.r as $t, g: c.g as $t, b: c.b as $t, a: c.a as $t }
            }
        }
    )* }
}

rgb_encodings!(u8, u16, f64);
