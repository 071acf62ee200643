//! Table driven conversion between Munsell colors and RGB.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rgb::RGB8;
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::hue::Hue;
use crate::munsell::MunsellColor;

pub mod load;
mod table;

use load::CsvOptions;
use table::{nearest, NearestMap};

/// One sample of the Munsell → RGB table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForwardRow {
    pub hue: Hue,
    /// Sampled value, 1 to 10; rows with 0 are sentinels.
    pub value: i32,
    /// Sampled chroma, 0 for sentinel rows as well.
    pub chroma: i32,
    pub rgb: RGB8,
}

/// One sample of the RGB → Munsell table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReverseRow {
    pub rgb: RGB8,
    pub color: MunsellColor,
}

/// Converts between Munsell colors and RGB by looking up the nearest
/// entries of two sampled tables.
///
/// A `Converter` is immutable once built; share it by reference (or
/// in an `Arc`) and build a new one to change the tables.
pub struct Converter {
    // hue → value → chroma
    forward: NearestMap<Hue, RGB8>,
    // red → green → blue
    reverse: NearestMap<i32, MunsellColor>,
}

impl Converter {
    /// Build the converter from the rows of both tables.
    ///
    /// Munsell → RGB rows with a value or chroma of 0 are discarded.
    /// When several rows share a key, the first one is kept.  Fail if
    /// a table ends up empty.
    pub fn new<F, R>(forward: F, reverse: R) -> Result<Self>
    where F: IntoIterator<Item = ForwardRow>,
          R: IntoIterator<Item = ReverseRow> {
        let mut fwd = NearestMap::new();
        for row in forward {
            if row.value == 0 || row.chroma == 0 {
                trace!(hue = %row.hue, value = row.value, chroma = row.chroma,
                       "discarding sentinel row");
                continue
            }
            if !fwd.insert(row.hue, row.value, row.chroma, row.rgb) {
                trace!(hue = %row.hue, value = row.value, chroma = row.chroma,
                       "ignoring duplicate row");
            }
        }
        let mut rev = NearestMap::new();
        for ReverseRow { rgb, color } in reverse {
            if !rev.insert(rgb.r as i32, rgb.g as i32, rgb.b as i32, color) {
                trace!(r = rgb.r, g = rgb.g, b = rgb.b, "ignoring duplicate row");
            }
        }
        if fwd.is_empty() { return Err(Error::EmptyTable("munsell→rgb")) }
        if rev.is_empty() { return Err(Error::EmptyTable("rgb→munsell")) }
        debug!(forward = fwd.len(), reverse = rev.len(),
               "built conversion tables");
        Ok(Converter { forward: fwd, reverse: rev })
    }

    /// Build the converter from CSV sources, see [`load`].
    pub fn from_csv(forward: impl Read, reverse: impl Read) -> Result<Self> {
        Self::from_csv_with(forward, reverse, &CsvOptions::default())
    }

    /// Same as [`Converter::from_csv`] with explicit CSV options.
    pub fn from_csv_with(forward: impl Read, reverse: impl Read,
                         opts: &CsvOptions) -> Result<Self> {
        let forward = load::read_forward(forward, opts)?;
        let reverse = load::read_reverse(reverse, opts)?;
        Self::new(forward, reverse)
    }

    /// Build the converter from the CSV files at the given paths.
    pub fn open(forward: impl AsRef<Path>, reverse: impl AsRef<Path>)
                -> Result<Self> {
        let forward = BufReader::new(File::open(forward)?);
        let reverse = BufReader::new(File::open(reverse)?);
        Self::from_csv(forward, reverse)
    }

    /// Number of entries of the Munsell → RGB table.
    #[inline]
    pub fn forward_len(&self) -> usize { self.forward.len() }

    /// Number of entries of the RGB → Munsell table.
    #[inline]
    pub fn reverse_len(&self) -> usize { self.reverse.len() }

    /// Return the RGB color of the table entry nearest to `c`.
    ///
    /// The hue is matched exactly or else replaced by the table hue
    /// with the same prefix and the closest number; then the value,
    /// then the chroma, are matched the same way.  Achromatic colors
    /// are not in the table: use [`MunsellColor::to_rgb`].
    pub fn to_rgb(&self, c: &MunsellColor) -> Result<RGB8> {
        let hue = self.nearest_hue(&c.hue())?;
        self.forward.lookup(&hue, c.value(), c.chroma()).copied()
            .ok_or(Error::EmptyTable("munsell→rgb"))
    }

    /// Return the Munsell color of the table entry nearest to `rgb`,
    /// matching red, then green, then blue.
    pub fn to_munsell(&self, rgb: RGB8) -> Result<MunsellColor> {
        let red = nearest(self.reverse.keys().copied(), rgb.r as f32);
        red.and_then(|r| self.reverse.lookup(&r, rgb.g as f32, rgb.b as f32))
            .copied()
            .ok_or(Error::EmptyTable("rgb→munsell"))
    }

    fn nearest_hue(&self, hue: &Hue) -> Result<Hue> {
        if self.forward.contains_key(hue) {
            return Ok(*hue)
        }
        let closest = self.forward.keys()
            .filter(|h| h.prefix() == hue.prefix())
            .fold(None, |best: Option<&Hue>, h| match best {
                Some(b) if (hue.number() - b.number()).abs()
                    <= (hue.number() - h.number()).abs() => Some(b),
                _ => Some(h),
            });
        match closest {
            Some(h) => Ok(*h),
            None => {
                warn!(%hue, "no table hue with this prefix");
                Err(Error::UnknownHue(*hue))
            }
        }
    }

    /// The hues of the Munsell → RGB table, in table order.
    pub fn hues(&self) -> impl Iterator<Item = Hue> + '_ {
        self.forward.keys().copied()
    }

    /// Number of distinct hues of the Munsell → RGB table.
    pub fn hue_count(&self) -> usize { self.forward.keys().count() }

    /// Return all colors sampled for `hue`, one row per value with the
    /// highest value first.  Each row starts with a gray of value
    /// `row + 1` counting from the bottom, followed by the colors of
    /// that value in table order (ascending chroma for sorted
    /// tables).  `None` if `hue` is not a table hue.
    pub fn color_grid(&self, hue: &Hue) -> Option<Vec<Vec<MunsellColor>>> {
        let mut grid: Vec<Vec<MunsellColor>> = self.forward.levels(hue)?
            .enumerate()
            .map(|(i, (value, chromas))| {
                std::iter::once(MunsellColor::n((i + 1) as f32))
                    .chain(chromas.iter().map(|&chroma| {
                        MunsellColor::new(*hue, value as f32, chroma as f32) }))
                    .collect()
            })
            .collect();
        grid.reverse();
        Some(grid)
    }

    /// Return the sampled color of `hue` with the highest chroma (the
    /// last one in table order on ties).  `None` if `hue` is not a
    /// table hue.
    pub fn highest_chroma(&self, hue: &Hue) -> Option<MunsellColor> {
        self.forward.levels(hue)?
            .flat_map(|(value, chromas)| {
                chromas.iter().map(move |&chroma| (value, chroma)) })
            .fold(None, |best, (value, chroma)| match best {
                Some((_, c)) if c > chroma => best,
                _ => Some((value, chroma)),
            })
            .map(|(v, c)| MunsellColor::new(*hue, v as f32, c as f32))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{self, CONVERTER};
    use crate::hue::HuePrefix::{self, *};

    fn hue(prefix: HuePrefix, number: f32) -> Hue {
        Hue::new(prefix, number).unwrap()
    }

    #[test]
    fn from_munsell_and_rgb() {
        let conv = &*CONVERTER;
        let c = MunsellColor::new(hue(R, 2.5), 1., 2.);
        assert_eq!(conv.to_rgb(&c).unwrap(), RGB8::new(45, 21, 31));
        assert_eq!(conv.to_munsell(RGB8::new(0, 34, 17)).unwrap(),
                   MunsellColor::new(hue(G, 1.36), 1., 3.83));
    }

    #[test]
    fn sentinels_duplicates_and_bad_rows() {
        let conv = &*CONVERTER;
        assert_eq!(conv.forward_len(), fixture::FORWARD_ENTRIES);
        assert_eq!(conv.reverse_len(), fixture::REVERSE_ENTRIES);
        // The duplicate 2.5R 1/2 row does not replace the first one.
        let c = MunsellColor::new(hue(R, 2.5), 1., 2.);
        assert_eq!(conv.to_rgb(&c).unwrap(), RGB8::new(45, 21, 31));
        // Same for the duplicate (0, 34, 17) row.
        assert_eq!(conv.to_munsell(RGB8::new(0, 34, 17)).unwrap().hue(),
                   hue(G, 1.36));
    }

    #[test]
    fn nearest_hue() {
        let conv = &*CONVERTER;
        // 9.79BG is closer to 10BG than to 2.5BG.
        let c = MunsellColor::new(hue(BG, 9.79), 5., 6.);
        assert_eq!(conv.to_rgb(&c).unwrap(), RGB8::new(0, 95, 129));
        // 6.25R is as close to 5R as to 7.5R: the first table hue wins.
        let a = MunsellColor::new(hue(R, 6.25), 5., 2.);
        let b = MunsellColor::new(hue(R, 5.), 5., 2.);
        assert_eq!(conv.to_rgb(&a).unwrap(), conv.to_rgb(&b).unwrap());
    }

    #[test]
    fn nearest_value_and_chroma() {
        let conv = &*CONVERTER;
        // Value 5.7 truncates to 5, chroma 3 is as close to 2 as to 4.
        let c = MunsellColor::new(hue(R, 2.5), 5.7, 3.);
        assert_eq!(conv.to_rgb(&c).unwrap(), RGB8::new(151, 120, 124));
        let c = MunsellColor::new(hue(R, 2.5), 5., 16.);
        assert_eq!(conv.to_rgb(&c).unwrap(), RGB8::new(255, 0, 80));
    }

    #[test]
    fn unknown_hue() {
        let conv = &*CONVERTER;
        let c = MunsellColor::new(hue(PB, 5.), 5., 6.);
        assert!(matches!(conv.to_rgb(&c), Err(Error::UnknownHue(h))
                         if h == hue(PB, 5.)));
    }

    #[test]
    fn nearest_rgb() {
        let conv = &*CONVERTER;
        assert_eq!(conv.to_munsell(RGB8::new(254, 1, 1)).unwrap(),
                   conv.to_munsell(RGB8::new(255, 0, 0)).unwrap());
        assert_eq!(conv.to_munsell(RGB8::new(3, 93, 131)).unwrap().to_string(),
                   "9.79BG, 5, 6");
    }

    #[test]
    fn lookups_are_repeatable() {
        let conv = &*CONVERTER;
        let c = MunsellColor::new(hue(R, 6.), 17., 22.);
        let first = conv.to_rgb(&c).unwrap();
        for _ in 0 .. 3 {
            assert_eq!(conv.to_rgb(&c).unwrap(), first);
        }
        let m = conv.to_munsell(RGB8::new(100, 0, 40)).unwrap();
        assert_eq!(conv.to_munsell(RGB8::new(100, 0, 40)).unwrap(), m);
    }

    #[test]
    fn hues() {
        let conv = &*CONVERTER;
        let hues: Vec<String> = conv.hues().map(|h| h.to_string()).collect();
        assert_eq!(hues, ["2.5R", "5R", "7.5R", "10R", "2.5Y", "7.5G",
                          "2.5BG", "10BG", "7.5B"]);
        assert_eq!(conv.hue_count(), 9);
    }

    #[test]
    fn color_grid() {
        let conv = &*CONVERTER;
        let grid = conv.color_grid(&hue(R, 5.)).unwrap();
        assert_eq!(grid.len(), 9);
        assert_eq!(grid[0].len(), 4);
        assert_eq!(grid[0][0], MunsellColor::n(9.));
        assert_eq!(grid[0][1], MunsellColor::new(hue(R, 5.), 9., 2.));
        assert_eq!(grid[0][3], MunsellColor::new(hue(R, 5.), 9., 6.));
        assert_eq!(grid[8][0], MunsellColor::n(1.));
        assert_eq!(grid[8].len(), 2);
        assert_eq!(conv.color_grid(&hue(R, 2.5)).unwrap().len(), 9);
        assert!(conv.color_grid(&hue(R, 6.)).is_none());
    }

    #[test]
    fn highest_chroma() {
        let conv = &*CONVERTER;
        assert_eq!(conv.highest_chroma(&hue(R, 2.5)),
                   Some(MunsellColor::new(hue(R, 2.5), 5., 20.)));
        assert_eq!(conv.highest_chroma(&hue(R, 5.)).unwrap().chroma(), 20.);
        // Ties go to the last entry.
        assert_eq!(conv.highest_chroma(&hue(R, 7.5)),
                   Some(MunsellColor::new(hue(R, 7.5), 6., 4.)));
        assert_eq!(conv.highest_chroma(&hue(PB, 5.)), None);
    }

    #[test]
    fn empty_tables() {
        let row = ForwardRow { hue: hue(R, 5.), value: 0, chroma: 2,
                               rgb: RGB8::new(1, 2, 3) };
        let rev = ReverseRow { rgb: RGB8::new(1, 2, 3),
                               color: MunsellColor::n(1.) };
        assert!(matches!(Converter::new([row], [rev]),
                         Err(Error::EmptyTable("munsell→rgb"))));
        let row = ForwardRow { value: 5, ..row };
        assert!(matches!(Converter::new([row], Vec::new()),
                         Err(Error::EmptyTable("rgb→munsell"))));
        assert!(Converter::new([row], [rev]).is_ok());
    }

    #[test]
    fn open_missing_file() {
        let err = Converter::open("/nonexistent/m.csv", "/nonexistent/r.csv");
        assert!(matches!(err, Err(Error::Io { .. })));
    }

    #[test]
    fn shared_between_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Converter>();
    }
}
