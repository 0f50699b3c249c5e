//! The "jet" colormap used to tell markers apart.
//!
//! Colors come from a 256-entry lookup table built by linear interpolation
//! of jet's per-channel control points, so a given sample always lands on
//! the same 8-bit color.

use std::fmt::Display;

use crate::utility::linspace;

/// Entries in the lookup table.
const LUT_SIZE: usize = 256;

// (x, value) control points per channel
const RED: [(f64, f64); 5] = [(0., 0.), (0.35, 0.), (0.66, 1.), (0.89, 1.), (1., 0.5)];
const GREEN: [(f64, f64); 6] = [(0., 0.), (0.125, 0.), (0.375, 1.), (0.64, 1.), (0.91, 0.), (1., 0.)];
const BLUE: [(f64, f64); 5] = [(0., 0.5), (0.11, 1.), (0.34, 1.), (0.65, 0.), (1., 0.)];

/// An opaque 8-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`, lowercase.
    ///
    /// ```
    /// use utmconvert::Rgb;
    ///
    /// assert_eq!(Rgb(0, 0, 128).to_hex(), "#000080");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.0, self.1, self.2, u8::MAX]
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Interpolates one channel at `x`. Segments are searched so that `x`
/// falls in `(x[i-1], x[i]]`; the first and last entries are pinned to
/// the end values.
fn channel_lut(points: &[(f64, f64)]) -> [f64; LUT_SIZE] {
    let mut lut = [0_f64; LUT_SIZE];
    let xs = linspace(0., 1., LUT_SIZE);

    for (entry, &x) in lut.iter_mut().zip(&xs).skip(1).take(LUT_SIZE - 2) {
        let upper = points.partition_point(|&(px, _)| px < x);
        let (x0, y0) = points[upper - 1];
        let (x1, y1) = points[upper];
        *entry = ((x - x0) / (x1 - x0) * (y1 - y0) + y0).clamp(0., 1.);
    }
    lut[0] = points[0].1;
    lut[LUT_SIZE - 1] = points[points.len() - 1].1;

    lut
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(value: f64) -> u8 {
    (value * 255.).round_ties_even() as u8
}

/// Precomputed jet lookup table.
pub struct Jet {
    red: [f64; LUT_SIZE],
    green: [f64; LUT_SIZE],
    blue: [f64; LUT_SIZE],
}

impl Default for Jet {
    fn default() -> Self {
        Self::new()
    }
}

impl Jet {
    pub fn new() -> Jet {
        Self {
            red: channel_lut(&RED),
            green: channel_lut(&GREEN),
            blue: channel_lut(&BLUE),
        }
    }

    /// Color at `x`, clamped to `[0, 1]`.
    ///
    /// ```
    /// use utmconvert::{colormap::Jet, Rgb};
    ///
    /// let jet = Jet::new();
    /// assert_eq!(jet.sample(0.0), Rgb(0, 0, 128));
    /// assert_eq!(jet.sample(1.0), Rgb(128, 0, 0));
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn sample(&self, x: f64) -> Rgb {
        let scaled = (x.clamp(0., 1.) * LUT_SIZE as f64) as usize;
        let index = scaled.min(LUT_SIZE - 1);

        Rgb(
            to_byte(self.red[index]),
            to_byte(self.green[index]),
            to_byte(self.blue[index]),
        )
    }

    /// `count` colors evenly spread over the whole map, first to last.
    ///
    /// ```
    /// use utmconvert::colormap::Jet;
    ///
    /// let colors = Jet::new().spread(3);
    /// let hex = colors.iter().map(|c| c.to_hex()).collect::<Vec<_>>();
    /// assert_eq!(hex, ["#000080", "#7dff7a", "#800000"]);
    /// ```
    pub fn spread(&self, count: usize) -> Vec<Rgb> {
        linspace(0., 1., count)
            .into_iter()
            .map(|x| self.sample(x))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(colors: &[Rgb]) -> Vec<String> {
        colors.iter().map(|c| c.to_hex()).collect()
    }

    #[test]
    fn spread_five() {
        let colors = Jet::new().spread(5);
        assert_eq!(
            hex(&colors),
            ["#000080", "#0080ff", "#7dff7a", "#ff9400", "#800000"]
        );
    }

    #[test]
    fn spread_small_batches() {
        let jet = Jet::new();
        assert!(jet.spread(0).is_empty());
        assert_eq!(hex(&jet.spread(1)), ["#000080"]);
        assert_eq!(hex(&jet.spread(2)), ["#000080", "#800000"]);
    }

    #[test]
    fn lut_ends() {
        let jet = Jet::new();
        assert_eq!(jet.blue[0], 0.5);
        assert_eq!(jet.red[LUT_SIZE - 1], 0.5);
        assert!(jet.green.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn sample_clamps() {
        let jet = Jet::new();
        assert_eq!(jet.sample(-1.0), jet.sample(0.0));
        assert_eq!(jet.sample(2.0), jet.sample(1.0));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb(255, 148, 0).to_string(), "#ff9400");
    }
}
