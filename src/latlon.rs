use std::fmt::Display;

use crate::{
    constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE},
    utm::{zone_of, Hemisphere, Utm},
    InvalidCoordinate,
};

/// Checks that a lat/lon pair lies in the domain the UTM projector supports:
/// * Latitude must be in range [-80, 84]
/// * Longitude must be in range [-180, 180]
///
/// Both bounds are inclusive. Latitude is checked first.
///
/// # Errors
///
/// Returns [`InvalidCoordinate::LatitudeOutOfRange`] or
/// [`InvalidCoordinate::LongitudeOutOfRange`] naming the offending value.
///
/// # Usage
///
/// ```
/// use utmconvert::{validate, InvalidCoordinate};
///
/// assert!(validate(84.0, -180.0).is_ok());
/// assert_eq!(validate(85.0, 0.0), Err(InvalidCoordinate::LatitudeOutOfRange(85.0)));
/// assert_eq!(validate(0.0, 181.0), Err(InvalidCoordinate::LongitudeOutOfRange(181.0)));
/// ```
pub fn validate(lat: f64, lon: f64) -> Result<(), InvalidCoordinate> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&lat) {
        Err(InvalidCoordinate::LatitudeOutOfRange(lat))
    } else if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&lon) {
        Err(InvalidCoordinate::LongitudeOutOfRange(lon))
    } else {
        Ok(())
    }
}

/// Representation of a WGS84 Latitude/Longitude point inside the UTM band.
/// Can only be built through [`LatLon::create`], so every instance has
/// passed [`validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid, see [`validate`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinate`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(-6.2, 106.8);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), -6.2);
    /// assert_eq!(coord.longitude(), 106.8);
    ///
    /// let polar = LatLon::create(85.0, 0.0);
    /// assert!(polar.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, InvalidCoordinate> {
        validate(lat, lon)?;

        Ok(Self {
            latitude: lat,
            longitude: lon,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the hemisphere the point belongs to. The equator counts as north.
    ///
    /// ```
    /// use utmconvert::{LatLon, Hemisphere};
    ///
    /// assert_eq!(LatLon::create(0.0, 3.0).unwrap().hemisphere(), Hemisphere::North);
    /// assert_eq!(LatLon::create(-0.5, 3.0).unwrap().hemisphere(), Hemisphere::South);
    /// ```
    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::of(self.latitude)
    }

    /// Returns the UTM zone the longitude falls in.
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// assert_eq!(LatLon::create(-6.2, 106.8).unwrap().zone(), 48);
    /// ```
    pub fn zone(&self) -> i32 {
        zone_of(self.longitude)
    }

    /// Converts from [`LatLon`] to [`Utm`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(0.0, 3.0).unwrap();
    /// let converted = coord.to_utm();
    ///
    /// assert_eq!(converted.zone(), 31);
    /// assert_eq!(converted.easting(), 500_000.0);
    /// assert_eq!(converted.northing(), 0.0);
    /// ```
    pub fn to_utm(&self) -> Utm {
        Utm::from_latlon(self)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok};

    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_ok!(validate(84.0, 0.0));
        assert_ok!(validate(-80.0, 0.0));
        assert_ok!(validate(0.0, 180.0));
        assert_ok!(validate(0.0, -180.0));
    }

    #[test]
    fn rejects_outside_band() {
        assert_eq!(assert_err!(validate(85.0, 0.0)), InvalidCoordinate::LatitudeOutOfRange(85.0));
        assert_eq!(assert_err!(validate(-81.0, 0.0)), InvalidCoordinate::LatitudeOutOfRange(-81.0));
        assert_eq!(assert_err!(validate(0.0, 181.0)), InvalidCoordinate::LongitudeOutOfRange(181.0));
        assert_eq!(assert_err!(validate(0.0, -181.0)), InvalidCoordinate::LongitudeOutOfRange(-181.0));
    }

    #[test]
    fn latitude_checked_first() {
        assert_eq!(assert_err!(validate(90.0, 200.0)), InvalidCoordinate::LatitudeOutOfRange(90.0));
    }

    #[test]
    fn rejects_nan() {
        assert_err!(validate(f64::NAN, 0.0));
        assert_err!(validate(0.0, f64::NAN));
        assert_err!(LatLon::create(f64::INFINITY, 0.0));
    }

    #[test]
    fn error_messages_name_the_bound() {
        let msg = InvalidCoordinate::LatitudeOutOfRange(85.0).to_string();
        assert_eq!(msg, "Latitude 85 outside of valid range [-80, 84].");
        let msg = InvalidCoordinate::LongitudeOutOfRange(-181.5).to_string();
        assert_eq!(msg, "Longitude -181.5 outside of valid range [-180, 180].");
    }

    #[test]
    fn display_uses_shortest_repr() {
        let coord = LatLon::create(-6.2, 106.8).unwrap();
        assert_eq!(coord.to_string(), "-6.2 106.8");
    }
}
