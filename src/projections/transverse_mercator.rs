use crate::constants::{UTM_K0, WGS84_A, WGS84_F};

// ================================
// Transverse Mercator Constants
// ================================

const A: f64 = WGS84_A;
const F: f64 = WGS84_F;
const E2: f64 = 2. * F - F * F;
const E4: f64 = E2 * E2;

// Meridional arc series, truncated after the sin(2φ) term
const A1: f64 = 1. - E2 / 4. - 3. * E4 / 64.;
const A2: f64 = 3. * E2 / 8. + 3. * E4 / 32.;

/// Forward transverse Mercator on the WGS84 ellipsoid using a short
/// Redfearn-style series: third order in the longitude difference for x,
/// second order for y. Accuracy degrades away from the central meridian.
pub(crate) struct TransverseMercator {
    a: f64,
    k0: f64,
    e2: f64,
    a1: f64,
    a2: f64,
}

impl TransverseMercator {
    pub fn utm() -> TransverseMercator {
        Self {
            a: A,
            k0: UTM_K0,
            e2: E2,
            a1: A1,
            a2: A2,
        }
    }

    /// Meridional arc length from the equator to latitude `phi` (radians).
    fn meridional_arc(&self, phi: f64) -> f64 {
        self.a * (self.a1 * phi - self.a2 * (2. * phi).sin())
    }

    /// Radius of curvature in the prime vertical at latitude `phi` (radians).
    fn prime_vertical_radius(&self, phi: f64) -> f64 {
        self.a / (1. - self.e2 * phi.sin().powi(2)).sqrt()
    }

    /// Projects `lat`/`lon` (degrees) relative to the central meridian `lon0`
    /// (degrees). Returns `(x, y)` where `x` excludes the false easting and
    /// `y` already includes `false_northing`, scaled by k0 with the rest of
    /// the northing.
    pub fn forward(&self, lon0: f64, lat: f64, lon: f64, false_northing: f64) -> (f64, f64) {
        let phi = lat.to_radians();
        let p = lon.to_radians() - lon0.to_radians();

        let m = self.meridional_arc(phi);
        let nu = self.prime_vertical_radius(phi);
        let (sin_phi, cos_phi) = (phi.sin(), phi.cos());

        let x = self.k0 * nu * (p * cos_phi + (p.powi(3) * cos_phi.powi(3)) / 6.);
        let y = self.k0 * (m + false_northing + nu * sin_phi * cos_phi * p.powi(2) / 2.);

        (x, y)
    }
}
