//! A short list of chosen colors.

use rgb::RGB8;

use crate::converter::Converter;
use crate::error::{Error, Result};
use crate::mix::{MixSolver, Solution};
use crate::munsell::MunsellColor;

/// An ordered list of distinct colors holding at most
/// [`capacity`][Palette::capacity] of them.
///
/// Adding a color to a full palette evicts the one before last, so
/// the newest color slides in at the end while the oldest ones stay.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<MunsellColor>,
    capacity: usize,
}

impl Default for Palette {
    fn default() -> Self { Self::with_capacity(10) }
}

impl Palette {
    /// An empty palette holding up to 10 colors.
    pub fn new() -> Self { Self::default() }

    /// An empty palette holding up to `capacity` colors (at least 2).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Palette { colors: Vec::with_capacity(capacity), capacity }
    }

    /// Maximum number of colors.
    #[inline]
    pub fn capacity(&self) -> usize { self.capacity }

    /// The colors, oldest first.
    #[inline]
    pub fn colors(&self) -> &[MunsellColor] { &self.colors }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize { self.colors.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Says whether `c` is one of the colors.
    pub fn contains(&self, c: &MunsellColor) -> bool {
        self.colors.contains(c)
    }

    /// Append `c` unless it is already present, in which case return
    /// `false`.  When the palette is full, the color before last is
    /// removed first.
    pub fn add(&mut self, c: MunsellColor) -> bool {
        if self.contains(&c) { return false }
        if self.colors.len() >= self.capacity {
            self.colors.remove(self.colors.len() - 2);
        }
        self.colors.push(c);
        true
    }

    /// Remove `c`, keeping the order of the other colors.  Return
    /// `false` if `c` was not present.
    pub fn remove(&mut self, c: &MunsellColor) -> bool {
        match self.colors.iter().position(|x| x == c) {
            Some(i) => { self.colors.remove(i); true }
            None => false,
        }
    }

    /// Return the palette color whose RGB color is the closest to the
    /// one of `c` (sum of the absolute component differences).  The
    /// first of equally close colors is returned.
    pub fn closest(&self, c: &MunsellColor, conv: &Converter)
                   -> Result<Option<MunsellColor>> {
        let target = c.to_rgb(conv)?;
        let mut best: Option<(MunsellColor, i32)> = None;
        for &p in &self.colors {
            let d = l1_distance(target, p.to_rgb(conv)?);
            match best {
                Some((_, bd)) if bd <= d => (),
                _ => best = Some((p, d)),
            }
        }
        Ok(best.map(|(p, _)| p))
    }

    /// Replace every pixel by the RGB color of the closest palette
    /// color (see [`Palette::closest`]).
    pub fn posterize(&self, pixels: &[RGB8], conv: &Converter)
                     -> Result<Vec<RGB8>> {
        if self.is_empty() {
            return Err(Error::InvalidArguments("empty palette".into()));
        }
        pixels.iter().map(|&px| {
            let c = MunsellColor::from_rgb(px, conv)?;
            match self.closest(&c, conv)? {
                Some(p) => p.to_rgb(conv),
                None => Err(Error::InvalidArguments("empty palette".into())),
            }
        }).collect()
    }

    /// The weights to mix the palette colors with to approach `wanted`,
    /// using the default [`MixSolver`].
    pub fn solve(&self, wanted: &MunsellColor, conv: &Converter)
                 -> Result<Solution> {
        MixSolver::default().solve(&self.colors, wanted, conv)
    }
}

fn l1_distance(c1: RGB8, c2: RGB8) -> i32 {
    (c1.r as i32 - c2.r as i32).abs()
        + (c1.g as i32 - c2.g as i32).abs()
        + (c1.b as i32 - c2.b as i32).abs()
}
