//! Mixing colors and finding how to mix them.
//!
//! Mixing is a weighted average of the RGB components, so it models
//! lights more than paints, but it is what the tables allow.

use rgb::RGB8;

use crate::converter::Converter;
use crate::error::{Error, Result};
use crate::munsell::MunsellColor;

/// Return the weighted average of `colors`, components truncated.
///
/// Fail if the slices are empty or of different lengths.  Return
/// `None` if a weight is negative or if they sum to 0.
pub fn mix_rgb(colors: &[RGB8], weights: &[f64]) -> Result<Option<RGB8>> {
    if colors.is_empty() || colors.len() != weights.len() {
        return Err(Error::InvalidArguments(format!(
            "{} colors for {} weights", colors.len(), weights.len())));
    }
    let (mut r, mut g, mut b, mut total) = (0., 0., 0., 0.);
    for (c, &w) in colors.iter().zip(weights) {
        if w < 0. { return Ok(None) }
        r += c.r as f64 * w;
        g += c.g as f64 * w;
        b += c.b as f64 * w;
        total += w;
    }
    if total == 0. { return Ok(None) }
    Ok(Some(RGB8 { r: (r / total) as u8,
                   g: (g / total) as u8,
                   b: (b / total) as u8 }))
}

/// Mix `colors` with the given `weights` (see [`mix_rgb`]) and return
/// the Munsell color of the result.
pub fn mix(colors: &[MunsellColor], weights: &[f64], conv: &Converter)
           -> Result<Option<MunsellColor>> {
    let rgb = colors.iter().map(|c| c.to_rgb(conv))
        .collect::<Result<Vec<_>>>()?;
    match mix_rgb(&rgb, weights)? {
        Some(m) => Ok(Some(MunsellColor::from_rgb(m, conv)?)),
        None => Ok(None),
    }
}

/// Euclidean distance between two colors, components in \[0, 255\].
pub fn rgb_distance(c1: RGB8, c2: RGB8) -> f64 {
    let dr = c1.r as f64 - c2.r as f64;
    let dg = c1.g as f64 - c2.g as f64;
    let db = c1.b as f64 - c2.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Distance between the RGB colors of `c1` and `c2`.
pub fn color_distance(c1: &MunsellColor, c2: &MunsellColor, conv: &Converter)
                      -> Result<f64> {
    Ok(rgb_distance(c1.to_rgb(conv)?, c2.to_rgb(conv)?))
}

/// Outcome of [`MixSolver::solve`].
#[derive(Clone, Debug, PartialEq)]
pub enum Solution {
    /// One weight per palette color, in palette order.
    Weights(Vec<f64>),
    /// No tried combination gave a mix.
    Unsolved,
}

impl Solution {
    /// The weights, if a mix was found.
    pub fn weights(&self) -> Option<&[f64]> {
        match self {
            Solution::Weights(w) => Some(w),
            Solution::Unsolved => None,
        }
    }
}

/// Searches for the weights mixing a palette into a wanted color.
///
/// Every combination of the coarse grid weights is tried, then every
/// combination of a finer grid centered on the best coarse weights.
/// Each pass thus evaluates (grid length)ⁿ mixes for n palette colors:
/// keep the palette small.
#[derive(Clone, Debug)]
pub struct MixSolver {
    coarse: Vec<f64>,
    fine_zero: Vec<f64>,
    fine_offsets: Vec<f64>,
}

impl Default for MixSolver {
    fn default() -> Self {
        MixSolver {
            coarse: vec![0., 2., 5., 8., 14.],
            fine_zero: vec![0., 0.2, 0.5, 1., 2.],
            fine_offsets: vec![-2., -1., 0., 1., 2.],
        }
    }
}

impl MixSolver {
    /// A solver with the default grids, see [`MixSolver::default`].
    pub fn new() -> Self { Self::default() }

    /// Weights tried for every color in the first pass.
    pub fn coarse(mut self, grid: Vec<f64>) -> Self {
        self.coarse = grid;
        self
    }

    /// Weights tried in the second pass for a color whose best first
    /// pass weight is 0.
    pub fn fine_zero(mut self, grid: Vec<f64>) -> Self {
        self.fine_zero = grid;
        self
    }

    /// Offsets added, in the second pass, to a nonzero best first pass
    /// weight.
    pub fn fine_offsets(mut self, offsets: Vec<f64>) -> Self {
        self.fine_offsets = offsets;
        self
    }

    /// Return the weights for which `palette` mixes into the color
    /// closest to `wanted` (RGB distance).
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use munsell::{Converter, ForwardRow, ReverseRow, Hue, HuePrefix,
    ///               MunsellColor, MixSolver, Solution};
    /// let row = |p, n, v, c, rgb| ForwardRow {
    ///     hue: Hue::new(p, n).unwrap(), value: v, chroma: c, rgb };
    /// let forward = [row(HuePrefix::R, 5., 5, 10, RGB8::new(200, 40, 40)),
    ///                row(HuePrefix::B, 5., 5, 10, RGB8::new(40, 40, 200)),
    ///                row(HuePrefix::P, 5., 5, 10, RGB8::new(120, 40, 120))];
    /// let reverse = [ReverseRow { rgb: RGB8::new(120, 40, 120),
    ///                             color: MunsellColor::n(5.) }];
    /// let conv = Converter::new(forward, reverse)?;
    /// let red = MunsellColor::new(Hue::new(HuePrefix::R, 5.)?, 5., 10.);
    /// let blue = MunsellColor::new(Hue::new(HuePrefix::B, 5.)?, 5., 10.);
    /// let purple = MunsellColor::new(Hue::new(HuePrefix::P, 5.)?, 5., 10.);
    /// let s = MixSolver::default().solve(&[red, blue], &purple, &conv)?;
    /// assert_eq!(s, Solution::Weights(vec![2., 2.]));
    /// # Ok::<(), munsell::Error>(())
    /// ```
    pub fn solve(&self, palette: &[MunsellColor], wanted: &MunsellColor,
                 conv: &Converter) -> Result<Solution> {
        if palette.is_empty() {
            return Err(Error::InvalidArguments("empty palette".into()));
        }
        let target = wanted.to_rgb(conv)?;
        let colors = palette.iter().map(|c| c.to_rgb(conv))
            .collect::<Result<Vec<_>>>()?;
        let mut best = Best { distance: f64::INFINITY, weights: None };

        let coarse = vec![self.coarse.clone(); colors.len()];
        best.search(&coarse, &colors, target)?;
        let Some(weights) = best.weights.clone() else {
            return Ok(Solution::Unsolved)
        };

        let fine: Vec<Vec<f64>> = weights.iter().map(|&w| {
            if w == 0. { self.fine_zero.clone() }
            else { self.fine_offsets.iter().map(|d| w + d).collect() }
        }).collect();
        best.search(&fine, &colors, target)?;
        Ok(best.weights.map_or(Solution::Unsolved, Solution::Weights))
    }
}

/// Best mix found so far.
struct Best {
    distance: f64,
    weights: Option<Vec<f64>>,
}

impl Best {
    /// Try every combination of one weight per grid, the last color
    /// varying fastest.  Only strictly closer mixes replace `self`.
    fn search(&mut self, grids: &[Vec<f64>], colors: &[RGB8], target: RGB8)
              -> Result<()> {
        if grids.iter().any(|g| g.is_empty()) { return Ok(()) }
        let mut idx = vec![0; grids.len()];
        let mut weights: Vec<f64> = grids.iter().map(|g| g[0]).collect();
        loop {
            if let Some(m) = mix_rgb(colors, &weights)? {
                let d = rgb_distance(target, m);
                if d < self.distance {
                    self.distance = d;
                    self.weights = Some(weights.clone());
                }
            }
            // Odometer step.
            let mut i = grids.len();
            loop {
                if i == 0 { return Ok(()) }
                i -= 1;
                if idx[i] + 1 < grids[i].len() {
                    idx[i] += 1;
                    weights[i] = grids[i][idx[i]];
                    break
                }
                idx[i] = 0;
                weights[i] = grids[i][0];
            }
        }
    }
}
