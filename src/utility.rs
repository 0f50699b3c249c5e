pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Degrees of longitude spanned by one UTM zone
    pub const ZONE_WIDTH: i32 = 6;
}

pub(crate) trait GeoMath {
    fn round_to(&self, decimals: usize) -> Self;
}

impl GeoMath for f64 {
    /// Rounds the exact binary value to `decimals` places, ties to even.
    ///
    /// Scaling by `10^decimals` first can itself round onto a tie the
    /// stored value does not have, so this goes through the exact decimal
    /// expansion `{:.N}` produces instead.
    fn round_to(&self, decimals: usize) -> f64 {
        format!("{:.*}", decimals, self).parse().unwrap_or(*self)
    }
}

/// Shortest text that reads back as the same `f64`, always with a fraction
/// or exponent (`500000.0`).
pub(crate) fn fmt_f64(value: f64) -> String {
    let mut buf = ryu::Buffer::new();
    buf.format(value).to_owned()
}

/// `num` evenly spaced samples over `[start, stop]`, both ends included.
///
/// A single sample is `start`; zero samples give an empty vector.
///
/// ```
/// use utmconvert::utility::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut out = (0..num)
                .map(|i| start + i as f64 * step)
                .collect::<Vec<_>>();
            // Pin the last sample so rounding never undershoots `stop`
            out[num - 1] = stop;
            out
        }
    }
}
