use crate::{colormap::{Jet, Rgb}, Hemisphere, Utm};

/// One converted point as shown in the table, on the map and in the
/// spreadsheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultRecord {
    pub point: Utm,
    pub color: Rgb,
}

impl ResultRecord {
    pub fn latitude(&self) -> f64 {
        self.point.source().latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.point.source().longitude()
    }

    pub fn easting(&self) -> f64 {
        self.point.easting()
    }

    pub fn northing(&self) -> f64 {
        self.point.northing()
    }

    pub fn zone(&self) -> i32 {
        self.point.zone()
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.point.hemisphere()
    }
}

/// Pairs every point with its marker color. The i-th of N points gets the
/// jet colormap at the i-th of N evenly spaced samples over `[0, 1]`, so
/// colors depend only on position in the batch.
///
/// ```
/// use utmconvert::{build_records, LatLon};
///
/// let points = [(0.0, 3.0), (-6.2, 106.8)]
///     .iter()
///     .map(|&(lat, lon)| LatLon::create(lat, lon).unwrap().to_utm())
///     .collect::<Vec<_>>();
///
/// let records = build_records(points);
/// assert_eq!(records[0].color.to_hex(), "#000080");
/// assert_eq!(records[1].color.to_hex(), "#800000");
/// assert_eq!(records[1].zone(), 48);
/// ```
pub fn build_records(points: Vec<Utm>) -> Vec<ResultRecord> {
    let colors = Jet::new().spread(points.len());

    points
        .into_iter()
        .zip(colors)
        .map(|(point, color)| ResultRecord { point, color })
        .collect()
}
