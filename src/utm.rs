use std::fmt::Display;

use tracing::debug;

use crate::{
    constants::{CONVERGENCE, FALSE_EASTING, FALSE_NORTHING_NORTH, FALSE_NORTHING_SOUTH, POINT_SCALE},
    latlon::LatLon,
    projections::transverse_mercator::TransverseMercator,
    utility::{dms, GeoMath},
    ThisOrThat,
};

pub(crate) mod zonespec {
    pub(crate) const MINUTMZONE: i32 = 1;
    pub(crate) const MAXUTMZONE: i32 = 60;
}

/// Hemisphere of a point, decided by the sign of its latitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// `North` for `lat >= 0` (including `-0.0`), `South` otherwise.
    ///
    /// ```
    /// use utmconvert::Hemisphere;
    ///
    /// assert_eq!(Hemisphere::of(0.0), Hemisphere::North);
    /// assert_eq!(Hemisphere::of(-0.0), Hemisphere::North);
    /// assert_eq!(Hemisphere::of(-1e-9), Hemisphere::South);
    /// ```
    pub fn of(lat: f64) -> Hemisphere {
        (lat >= 0.).ternary(Hemisphere::North, Hemisphere::South)
    }

    pub fn is_north(self) -> bool {
        self == Hemisphere::North
    }

    /// False northing added to every northing in this hemisphere.
    pub fn false_northing(self) -> f64 {
        self.is_north().ternary(FALSE_NORTHING_NORTH, FALSE_NORTHING_SOUTH)
    }

    /// Label written to the table and the spreadsheet.
    pub fn label(self) -> &'static str {
        match self {
            Hemisphere::North => "Belahan Bumi Utara",
            Hemisphere::South => "Belahan Bumi Selatan",
        }
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// UTM zone containing `lon`: `trunc((lon + 180) / 6) + 1`.
///
/// Expects a longitude already validated to `[-180, 180]`. The antimeridian
/// itself (`lon == 180`) belongs to zone 60.
///
/// ```
/// use utmconvert::zone_of;
///
/// assert_eq!(zone_of(-180.0), 1);
/// assert_eq!(zone_of(3.0), 31);
/// assert_eq!(zone_of(106.8), 48);
/// assert_eq!(zone_of(179.9999), 60);
/// assert_eq!(zone_of(180.0), 60);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn zone_of(lon: f64) -> i32 {
    let zone = ((lon + f64::from(dms::HD)) / f64::from(dms::ZONE_WIDTH)) as i32 + 1;
    zone.clamp(zonespec::MINUTMZONE, zonespec::MAXUTMZONE)
}

/// Longitude of the central meridian of `zone`, in degrees.
///
/// ```
/// use utmconvert::central_meridian;
///
/// assert_eq!(central_meridian(1), -177.0);
/// assert_eq!(central_meridian(31), 3.0);
/// assert_eq!(central_meridian(60), 177.0);
/// ```
pub fn central_meridian(zone: i32) -> f64 {
    f64::from((zone - 1) * dms::ZONE_WIDTH - (dms::HD - dms::ZONE_WIDTH / 2))
}

/// Representation of a projected WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point, together with the lat/lon it was projected from.
///
/// Easting and northing are rounded to the millimeter. The convergence and
/// point scale values are fixed placeholders ([`CONVERGENCE`],
/// [`POINT_SCALE`]) and are not derived from the point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) zone: i32,
    pub(crate) hemisphere: Hemisphere,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
    pub(crate) convergence: f64,
    pub(crate) scale_factor: f64,
    pub(crate) source: LatLon,
}

impl Utm {
    /// Projects `point` in the zone derived from its longitude.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{LatLon, Utm, Hemisphere};
    ///
    /// let coord = LatLon::create(-6.2, 106.8).unwrap();
    /// let converted = Utm::from_latlon(&coord);
    ///
    /// assert_eq!(converted.zone(), 48);
    /// assert_eq!(converted.hemisphere(), Hemisphere::South);
    /// assert_eq!(converted.source(), coord);
    /// ```
    pub fn from_latlon(value: &LatLon) -> Utm {
        Self::project(value, value.zone())
    }

    /// Projects `point` on the transverse Mercator plane of `zone`.
    ///
    /// `zone` is normally [`zone_of`] the point's longitude; any zone in
    /// `[1, 60]` is accepted and simply moves the central meridian.
    pub fn project(value: &LatLon, zone: i32) -> Utm {
        let hemisphere = value.hemisphere();
        let lon0 = central_meridian(zone);

        let (x, y) = TransverseMercator::utm().forward(
            lon0,
            value.latitude,
            value.longitude,
            hemisphere.false_northing(),
        );

        let easting = (FALSE_EASTING + x).round_to(3);
        let northing = y.round_to(3);
        debug_assert!(
            easting.is_finite() && northing.is_finite(),
            "non-finite projection for validated point {value}"
        );

        debug!(
            lat = value.latitude,
            lon = value.longitude,
            zone,
            easting,
            northing,
            "projected point"
        );

        Utm {
            zone,
            hemisphere,
            easting,
            northing,
            convergence: CONVERGENCE,
            scale_factor: POINT_SCALE,
            source: *value,
        }
    }

    pub fn zone(&self) -> i32 {
        self.zone
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn is_north(&self) -> bool {
        self.hemisphere.is_north()
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Always `0.0`.
    pub fn convergence(&self) -> f64 {
        self.convergence
    }

    /// Always `0.0016`.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// The lat/lon this point was projected from.
    pub fn source(&self) -> LatLon {
        self.source
    }
}

impl Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            self.zone,
            self.is_north().ternary("n", "s"),
            self.easting,
            self.northing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utm(lat: f64, lon: f64) -> Utm {
        LatLon::create(lat, lon).unwrap().to_utm()
    }

    #[test]
    fn zone_is_monotonic_and_bounded() {
        let mut last = 0;
        let mut lon = -180.0;
        while lon < 180.0 {
            let zone = zone_of(lon);
            assert!((1..=60).contains(&zone), "zone {zone} for lon {lon}");
            assert!(zone >= last);
            last = zone;
            lon += 0.25;
        }
        assert_eq!(last, 60);
    }

    #[test]
    fn zone_edges() {
        assert_eq!(zone_of(-180.0), 1);
        assert_eq!(zone_of(-174.000_001), 1);
        assert_eq!(zone_of(-174.0), 2);
        assert_eq!(zone_of(0.0), 31);
        assert_eq!(zone_of(-0.000_001), 30);
    }

    #[test]
    fn central_meridian_is_zone_center() {
        for zone in 1..=60 {
            let cm = central_meridian(zone);
            assert_eq!(zone_of(cm), zone);
        }
    }

    #[test]
    fn equator_on_central_meridian() {
        let converted = utm(0.0, 3.0);
        assert_eq!(converted.zone(), 31);
        assert_eq!(converted.hemisphere(), Hemisphere::North);
        assert_eq!(converted.easting(), 500_000.0);
        assert_eq!(converted.northing(), 0.0);
    }

    #[test]
    fn jakarta() {
        let converted = utm(-6.2, 106.8);
        assert_eq!(converted.zone(), 48);
        assert_eq!(converted.hemisphere(), Hemisphere::South);
        assert_eq!(converted.easting(), 699_163.549);
        assert_eq!(converted.northing(), 9_310_356.122);
    }

    #[test]
    fn new_york() {
        let converted = utm(40.748_333, -73.985_278);
        assert_eq!(converted.zone(), 18);
        assert!(converted.is_north());
        assert_eq!(converted.easting(), 585_666.020);
        assert_eq!(converted.northing(), 4_511_310.559);
    }

    #[test]
    fn sydney() {
        let converted = utm(-33.8688, 151.2093);
        assert_eq!(converted.zone(), 56);
        assert_eq!(converted.easting(), 334_360.344);
        assert_eq!(converted.northing(), 6_246_960.424);
    }

    #[test]
    fn northing_just_above_a_half_millimeter() {
        // Unrounded northing is 6225756.93250000011...
        let converted = utm(56.175, -81.646_46);
        assert_eq!(converted.zone(), 17);
        assert_eq!(converted.easting(), 459_863.815);
        assert_eq!(converted.northing(), 6_225_756.933);
    }

    #[test]
    fn band_corners_are_finite() {
        for (lat, lon) in [(84.0, 180.0), (84.0, -180.0), (-80.0, 180.0), (-80.0, -180.0)] {
            let converted = utm(lat, lon);
            assert!(converted.easting().is_finite());
            assert!(converted.northing().is_finite());
        }
    }

    #[test]
    fn placeholder_auxiliary_outputs() {
        for (lat, lon) in [(0.0, 3.0), (-6.2, 106.8), (84.0, -179.0), (-80.0, 42.0)] {
            let converted = utm(lat, lon);
            assert_eq!(converted.convergence(), 0.0);
            assert_eq!(converted.scale_factor(), 0.0016);
        }
    }

    #[test]
    fn millimeter_precision() {
        let converted = utm(51.5, -0.12);
        let scaled = converted.easting() * 1000.0;
        assert!((scaled - scaled.round()).abs() < 1e-3);
        let scaled = converted.northing() * 1000.0;
        assert!((scaled - scaled.round()).abs() < 1e-3);
    }

    #[test]
    fn explicit_zone_moves_central_meridian() {
        let coord = LatLon::create(0.0, 9.0).unwrap();
        assert_eq!(Utm::project(&coord, 32).easting(), 500_000.0);
        assert!(Utm::project(&coord, 31).easting() > 500_000.0);
    }

    #[test]
    fn display() {
        assert_eq!(utm(0.0, 3.0).to_string(), "31n 500000 0");
        assert_eq!(Hemisphere::South.to_string(), "Belahan Bumi Selatan");
    }
}
