//! Small round color swatches used to key table rows to map markers.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tracing::info;

use crate::{colormap::Rgb, record::ResultRecord, Result};

/// Side of a marker icon, in pixels.
pub const ICON_SIZE: u32 = 18;

/// A `size`×`size` transparent image with a filled circle inscribed in the
/// box `(1, 1)..=(size - 2, size - 2)`.
///
/// ```
/// use utmconvert::{marker::circle_icon, Rgb};
///
/// let icon = circle_icon(Rgb(0, 0, 128), 18);
/// assert_eq!(icon.dimensions(), (18, 18));
/// assert_eq!(icon.get_pixel(9, 9).0, [0, 0, 128, 255]);
/// assert_eq!(icon.get_pixel(0, 0).0[3], 0);
/// ```
pub fn circle_icon(color: Rgb, size: u32) -> RgbaImage {
    let mut icon = RgbaImage::new(size, size);
    if size < 3 {
        return icon;
    }

    let (lo, hi) = (1_f64, f64::from(size - 2));
    let center = (lo + hi) / 2.;
    // Outline runs along the outer edge of the box's border pixels
    let radius = (hi - lo) / 2. + 0.5;
    let fill = Rgba(color.to_rgba());

    for (x, y, pixel) in icon.enumerate_pixels_mut() {
        let dx = f64::from(x) - center;
        let dy = f64::from(y) - center;
        if dx * dx + dy * dy <= radius * radius {
            *pixel = fill;
        }
    }

    icon
}

/// Writes one [`ICON_SIZE`] PNG per record into `dir` as `marker_000.png`,
/// `marker_001.png`, ... and returns the written paths in record order.
///
/// # Errors
///
/// Fails if `dir` cannot be created or an image cannot be written.
pub fn write_icons(records: &[ResultRecord], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let path = dir.join(format!("marker_{index:03}.png"));
        circle_icon(record.color, ICON_SIZE).save(&path)?;
        paths.push(path);
    }

    info!(count = paths.len(), dir = %dir.display(), "wrote marker icons");
    Ok(paths)
}
