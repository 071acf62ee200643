//! Munsell hues.
//!
//! The hue circle is cut in 10 sectors of 10 units each, laid end to
//! end on \[0, 100\] in the order R, YR, Y, GY, G, BG, B, PB, P, RP.
//! A hue is a sector together with a position in \[0, 10\] inside it.
//! The extra sector [`HuePrefix::N`] marks achromatic (gray) colors.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Sector of the hue circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HuePrefix {
    /// Red.
    R,
    /// Yellow-red.
    YR,
    /// Yellow.
    Y,
    /// Green-yellow.
    GY,
    /// Green.
    G,
    /// Blue-green.
    BG,
    /// Blue.
    B,
    /// Purple-blue.
    PB,
    /// Purple.
    P,
    /// Red-purple.
    RP,
    /// Neutral, i.e. no hue at all.
    N,
}

impl HuePrefix {
    /// All prefixes, in canonical order, the achromatic one last.
    pub const ALL: [HuePrefix; 11] = {
        use HuePrefix::*;
        [R, YR, Y, GY, G, BG, B, PB, P, RP, N]
    };

    /// Position of the prefix in [`HuePrefix::ALL`].
    #[inline]
    pub fn index(self) -> usize { self as usize }

    /// The symbol of the prefix, e.g. `"PB"`.
    pub fn symbol(self) -> &'static str {
        use HuePrefix::*;
        match self {
            R => "R", YR => "YR", Y => "Y", GY => "GY", G => "G",
            BG => "BG", B => "B", PB => "PB", P => "P", RP => "RP",
            N => "N",
        }
    }

    /// Says whether this is the gray marker `N`.
    #[inline]
    pub fn is_achromatic(self) -> bool { self == HuePrefix::N }
}

impl fmt::Display for HuePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for HuePrefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HuePrefix::ALL.iter().copied()
            .find(|p| p.symbol() == s)
            .ok_or_else(|| Error::InvalidHue(format!("unknown prefix “{s}”")))
    }
}

/// A Munsell hue such as `2.5PB`.
///
/// Equality and hashing are structural on the (prefix, number) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hue {
    prefix: HuePrefix,
    number: f32, // Invariant: in [0, 10], not NaN
}

// `number` is never NaN.
impl Eq for Hue {}

impl Hash for Hue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.prefix.hash(state);
        // -0. and 0. compare equal, they must hash the same.
        let n = if self.number == 0. { 0f32 } else { self.number };
        n.to_bits().hash(state);
    }
}

impl Hue {
    /// The hue of achromatic colors, written `0N`.
    pub const NEUTRAL: Hue = Hue { prefix: HuePrefix::N, number: 0. };

    /// Return the hue with the given `prefix` and position `number`
    /// ∈ \[0, 10\] within the sector.
    pub fn new(prefix: HuePrefix, number: f32) -> Result<Self> {
        if !(0. ..= 10.).contains(&number) {
            return Err(Error::InvalidHue(
                format!("number {number} of {prefix} hue not in [0, 10]")));
        }
        Ok(Hue { prefix, number })
    }

    /// Return the hue at position `total` ∈ \[0, 100\] on the hue circle.
    ///
    /// Edge positions belong to the sector that *ends* there, so
    /// `Hue::from_total(10.)` is `10R` and not `0YR`.
    pub fn from_total(total: f32) -> Result<Self> {
        if !(0. ..= 100.).contains(&total) {
            return Err(Error::OutOfRange(total));
        }
        Ok(Self::wrap(total))
    }

    /// Same as [`Hue::from_total`] for `total` already known to lie
    /// in \[0, 100\].
    pub(crate) fn wrap(total: f32) -> Self {
        let mut sector = (total / 10.).floor() as i32;
        if sector > 0 && total == (sector * 10) as f32 { sector -= 1 }
        let sector = sector.clamp(0, 9);
        // Rounded to the precision of `Display` so that
        // `from_total(h.total()) == h` despite the f32 sum.
        let number = total - (sector * 10) as f32;
        let number = ((number * 1e5).round() / 1e5).clamp(0., 10.);
        Hue { prefix: HuePrefix::ALL[sector as usize], number }
    }

    /// Parse a hue name such as `"1.36G"`: a number made of digits and
    /// at most one decimal point immediately followed by a prefix.
    pub fn from_name(name: &str) -> Result<Self> {
        let split = name.find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(name.len());
        let (number, prefix) = name.split_at(split);
        let number: f32 = number.parse().map_err(|_| {
            Error::InvalidHue(format!("no hue number in “{name}”")) })?;
        Hue::new(prefix.parse()?, number)
    }

    /// The hue sector.
    #[inline]
    pub fn prefix(&self) -> HuePrefix { self.prefix }

    /// Position within the sector, in \[0, 10\].
    #[inline]
    pub fn number(&self) -> f32 { self.number }

    /// Says whether the hue is the one of grays (`0N`).
    #[inline]
    pub fn is_achromatic(&self) -> bool { self.prefix.is_achromatic() }

    /// Position on the hue circle, in \[0, 100\].  Achromatic hues are
    /// at 0.
    pub fn total(&self) -> f32 {
        if self.is_achromatic() { 0. }
        else { (self.prefix.index() * 10) as f32 + self.number }
    }
}

impl fmt::Display for Hue {
    /// Integral numbers are written without decimals (`2R`), others
    /// with at most 5 of them (`2.5PB`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.number;
        if n == n.trunc() {
            write!(f, "{}{}", n as i64, self.prefix)
        } else {
            let s = format!("{:.5}", n as f64);
            let s = s.trim_end_matches('0').trim_end_matches('.');
            write!(f, "{s}{}", self.prefix)
        }
    }
}

impl FromStr for Hue {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self> { Hue::from_name(s) }
}
