//! WGS84 and UTM parameters used by the projector.

// Semi-major axis a
pub const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub const WGS84_F: f64 = 1.0 / 298.257223563;

// UTM central scale factor
pub const UTM_K0: f64 = 9996.0 / 10_000.;

pub const FALSE_EASTING: f64 = 500_000.;
pub const FALSE_NORTHING_NORTH: f64 = 0.;
pub const FALSE_NORTHING_SOUTH: f64 = 10_000_000.;

/// Meridian convergence reported for every projected point. The series
/// does not compute it.
pub const CONVERGENCE: f64 = 0.0;
/// Point scale factor reported for every projected point. The series
/// does not compute it.
pub const POINT_SCALE: f64 = 0.0016;

/// Supported latitude band, degrees.
pub const MIN_LATITUDE: f64 = -80.;
pub const MAX_LATITUDE: f64 = 84.;
pub const MIN_LONGITUDE: f64 = -180.;
pub const MAX_LONGITUDE: f64 = 180.;
