//! Plate carrée world map with UTM zone boundaries and one marker per
//! converted point.

use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::info;

use crate::{
    constants::{MAX_LATITUDE, MIN_LATITUDE},
    record::ResultRecord,
    utility::dms,
    Result,
};

const BACKGROUND: Rgba<u8> = Rgba([214, 230, 242, 255]);
const GRATICULE: Rgba<u8> = Rgba([190, 200, 210, 255]);
const ZONE_LINE: Rgba<u8> = Rgba([128, 128, 128, 255]);
const EQUATOR: Rgba<u8> = Rgba([90, 90, 90, 255]);

/// Spacing of the lat/lon graticule, degrees.
const GRATICULE_STEP: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapOptions {
    /// Image width in pixels. Height is always half of it.
    pub width: u32,
    /// Marker radius in pixels.
    pub marker_radius: u32,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            width: 1440,
            marker_radius: 5,
        }
    }
}

/// A rendered map, ready to be saved.
pub struct MapView {
    image: RgbaImage,
}

impl MapView {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Writes the map as PNG, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        info!(path = %path.display(), "wrote map");
        Ok(())
    }
}

/// Pixel position of `lon`/`lat` on an equirectangular image of
/// `width`×`height`. The top-left corner is (-180, 90).
///
/// ```
/// use utmconvert::map::to_pixel;
///
/// assert_eq!(to_pixel(-180.0, 90.0, 360, 180), (0.0, 0.0));
/// assert_eq!(to_pixel(0.0, 0.0, 360, 180), (180.0, 90.0));
/// ```
pub fn to_pixel(lon: f64, lat: f64, width: u32, height: u32) -> (f64, f64) {
    let hd = f64::from(dms::HD);
    let qd = f64::from(dms::QD);
    let x = (lon + hd) / (2. * hd) * f64::from(width);
    let y = (qd - lat) / (2. * qd) * f64::from(height);
    (x, y)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_px(value: f64, limit: u32) -> u32 {
    (value.round().max(0.) as u32).min(limit.saturating_sub(1))
}

fn vertical_line(image: &mut RgbaImage, lon: f64, lat_from: f64, lat_to: f64, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let (x, y0) = to_pixel(lon, lat_to, width, height);
    let (_, y1) = to_pixel(lon, lat_from, width, height);
    let x = clamp_px(x, width);
    for y in clamp_px(y0, height)..=clamp_px(y1, height) {
        image.put_pixel(x, y, color);
    }
}

fn horizontal_line(image: &mut RgbaImage, lat: f64, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let (_, y) = to_pixel(0., lat, width, height);
    let y = clamp_px(y, height);
    for x in 0..width {
        image.put_pixel(x, y, color);
    }
}

#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn disc(image: &mut RgbaImage, cx: f64, cy: f64, radius: u32, color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let r = f64::from(radius);
    let x_range = (cx - r).floor().max(0.) as u32..=((cx + r).ceil() as u32).min(width.saturating_sub(1));
    let y_range = (cy - r).floor().max(0.) as u32..=((cy + r).ceil() as u32).min(height.saturating_sub(1));

    for y in y_range {
        for x in x_range.clone() {
            let dx = f64::from(x) - cx;
            let dy = f64::from(y) - cy;
            if dx * dx + dy * dy <= r * r {
                image.put_pixel(x, y, color);
            }
        }
    }
}

/// Draws the world map: background, a 30° graticule, every UTM zone
/// boundary from -180° to 180° over the [-80°, 84°] band, the equator, and a
/// filled marker per record in its color. Records are drawn in order, so
/// later markers cover earlier ones.
///
/// ```
/// use utmconvert::{build_records, map::{render_world_map, MapOptions}, LatLon};
///
/// let records = build_records(vec![LatLon::create(0.0, 3.0).unwrap().to_utm()]);
/// let map = render_world_map(&records, MapOptions::default());
/// assert_eq!(map.image().dimensions(), (1440, 720));
/// ```
#[allow(clippy::cast_sign_loss)]
pub fn render_world_map(records: &[ResultRecord], options: MapOptions) -> MapView {
    let width = options.width.max(2);
    let height = width / 2;
    let mut image = RgbaImage::from_pixel(width, height, BACKGROUND);

    for lon in (-dms::HD..=dms::HD).step_by(GRATICULE_STEP) {
        vertical_line(&mut image, f64::from(lon), -f64::from(dms::QD), f64::from(dms::QD), GRATICULE);
    }
    for lat in (-dms::QD..=dms::QD).step_by(GRATICULE_STEP) {
        horizontal_line(&mut image, f64::from(lat), GRATICULE);
    }

    for lon in (-dms::HD..=dms::HD).step_by(dms::ZONE_WIDTH as usize) {
        vertical_line(&mut image, f64::from(lon), MIN_LATITUDE, MAX_LATITUDE, ZONE_LINE);
    }
    horizontal_line(&mut image, 0., EQUATOR);

    for record in records {
        let (x, y) = to_pixel(record.longitude(), record.latitude(), width, height);
        disc(&mut image, x, y, options.marker_radius, Rgba(record.color.to_rgba()));
    }

    MapView { image }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_records, LatLon};

    fn records(points: &[(f64, f64)]) -> Vec<ResultRecord> {
        build_records(
            points
                .iter()
                .map(|&(lat, lon)| LatLon::create(lat, lon).unwrap().to_utm())
                .collect(),
        )
    }

    #[test]
    fn markers_use_record_colors() {
        let records = records(&[(45.0, -90.0), (-45.0, 90.0)]);
        let map = render_world_map(&records, MapOptions { width: 720, marker_radius: 4 });

        let (x, y) = to_pixel(-90.0, 45.0, 720, 360);
        assert_eq!(map.image().get_pixel(x.round() as u32, y.round() as u32).0, records[0].color.to_rgba());
        let (x, y) = to_pixel(90.0, -45.0, 720, 360);
        assert_eq!(map.image().get_pixel(x.round() as u32, y.round() as u32).0, records[1].color.to_rgba());
    }

    #[test]
    fn zone_lines_stop_at_band() {
        let map = render_world_map(&[], MapOptions { width: 720, marker_radius: 4 });
        // 174°E is a zone boundary but not on the graticule
        let (x, _) = to_pixel(174.0, 0.0, 720, 360);
        let (_, inside) = to_pixel(174.0, 40.0, 720, 360);
        let (_, polar) = to_pixel(174.0, 87.0, 720, 360);
        assert_eq!(*map.image().get_pixel(x.round() as u32, inside.round() as u32), ZONE_LINE);
        assert_eq!(*map.image().get_pixel(x.round() as u32, polar.round() as u32), BACKGROUND);
    }

    #[test]
    fn markers_at_the_edge_are_clipped() {
        let records = records(&[(84.0, 180.0), (-80.0, -180.0)]);
        let map = render_world_map(&records, MapOptions::default());
        assert_eq!(map.image().dimensions(), (1440, 720));
    }

    #[test]
    fn saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        let map = render_world_map(&records(&[(-6.2, 106.8)]), MapOptions { width: 360, marker_radius: 3 });
        map.save(&path).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (360, 180));
    }
}
