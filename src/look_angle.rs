// Copyright (c) 2026 The sat-look-angle developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `look_angle` module contains functions for calculating the azimuth,
//! elevation and LNB skew from an antenna site to a geostationary satellite.
//!
//! Two azimuth/elevation methods are provided and deliberately kept under
//! distinct names:
//!
//! - the rigorous ellipsoidal vector method of Soler et al. (1995),
//!   [Determination of Look Angles to Geostationary Communication Satellites](https://www.ngs.noaa.gov/CORS/Articles/SolerEisemannJSE.pdf),
//!   which transforms the site to Earth-centred Cartesian coordinates and
//!   rotates the line of sight into the local East-North-Up frame;
//! - a legacy spherical-trigonometry approximation working directly on
//!   latitude/longitude differences.
//!
//! The two are *not* numerically identical - the paper quotes differences up
//! to ~0.02° - so callers must choose one rather than assume equivalence.
//!
//! All functions here are total over finite inputs and perform no input
//! validation, matching the legacy behaviour: [`calculate_skew`] divides by
//! `tan(latitude)` and so produces non-finite results at the equator, which
//! are returned to the caller rather than masked.

#![allow(clippy::suboptimal_flops)]
#![allow(clippy::similar_names)]

use crate::{Angle, Degrees, Ellipsoid, GeoPosition, Metres};
use unit_sphere::Vector3d;

/// The orbital radius of a geostationary satellite: the distance from the
/// centre of the Earth to the satellite, in metres.
pub const GEOSTATIONARY_RADIUS: Metres = Metres(42_200_000.0);

/// The empirical constant subtracted in the spherical elevation formula.
///
/// Inherited from the legacy implementation, where its provenance was never
/// established. It is suggestively close to the ratio of the equatorial
/// radius to the geostationary orbital radius (6378/42164 ≈ 0.1513), but
/// that derivation is unconfirmed so the value is kept as-is.
pub const SPHERICAL_ELEVATION_RATIO: f64 = 0.1512;

/// An antenna pointing solution: azimuth and elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LookAngle {
    /// The azimuth: degrees clockwise from true North, in [0, 360).
    azimuth: Degrees,
    /// The elevation above the local horizon, in degrees.
    elevation: Degrees,
}

impl LookAngle {
    /// Constructor.
    /// * `azimuth` - degrees clockwise from true North.
    /// * `elevation` - degrees above the local horizon.
    #[must_use]
    pub const fn new(azimuth: Degrees, elevation: Degrees) -> Self {
        Self { azimuth, elevation }
    }

    /// The azimuth: degrees clockwise from true North.
    #[must_use]
    pub const fn azimuth(&self) -> Degrees {
        self.azimuth
    }

    /// The elevation above the local horizon in degrees.
    #[must_use]
    pub const fn elevation(&self) -> Degrees {
        self.elevation
    }
}

/// Calculate the look angle to a geostationary satellite using Soler's
/// rigorous ellipsoidal method.
///
/// The antenna site is transformed from geodetic curvilinear coordinates to
/// Earth-centred Cartesian coordinates using the radius of curvature in the
/// prime vertical; the satellite is placed on the equatorial circle of
/// radius [`GEOSTATIONARY_RADIUS`] at `satellite_longitude`; and the
/// line-of-sight vector is rotated into the East-North-Up frame at the site.
///
/// The quadrant of the azimuth is resolved exactly as in the legacy
/// implementation: a full turn is added when the raw azimuth is negative at
/// a southern or equatorial site, and half a turn is added unconditionally
/// at a northern site. The asymmetry between the two branches is a
/// long-standing quirk of that implementation, preserved for compatibility.
///
/// Note: near the geographic poles the East-North-Up rotation degrades
/// numerically (the `cos(latitude)` terms vanish); results there are
/// returned as computed, without special-casing.
///
/// * `site` - the antenna site.
/// * `satellite_longitude` - the sub-satellite longitude.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// # Examples
/// ```
/// use angle_sc::{is_within_tolerance, Degrees};
/// use icao_units::si::Metres;
/// use sat_look_angle::look_angle::calculate_ellipsoidal_look_angle;
/// use sat_look_angle::{GeoPosition, WGS84_ELLIPSOID};
///
/// let site = GeoPosition::new(Degrees(38.9), Degrees(-77.0), Metres(100.0));
/// let look = calculate_ellipsoidal_look_angle(&site, Degrees(-101.0), &WGS84_ELLIPSOID);
///
/// assert!(is_within_tolerance(215.36016101833195, look.azimuth().0, 1e-6));
/// assert!(is_within_tolerance(38.54801796747668, look.elevation().0, 1e-6));
/// ```
#[must_use]
pub fn calculate_ellipsoidal_look_angle(
    site: &GeoPosition,
    satellite_longitude: Degrees,
    ellipsoid: &Ellipsoid,
) -> LookAngle {
    let lat = Angle::from(site.latitude());
    let lon = Angle::from(site.longitude());
    let sat_lon = Angle::from(satellite_longitude);
    let altitude = site.altitude().0;

    // Step 1: transform the site from curvilinear to Cartesian coordinates
    let nu = ellipsoid.prime_vertical_radius(lat.sin().0).0;
    let site_ecef = Vector3d::new(
        (nu + altitude) * lon.cos().0 * lat.cos().0,
        (nu + altitude) * lon.sin().0 * lat.cos().0,
        (nu * (1.0 - ellipsoid.e_2()) + altitude) * lat.sin().0,
    );

    // the satellite lies on the equatorial plane, z = 0
    let sat_ecef = Vector3d::new(
        GEOSTATIONARY_RADIUS.0 * sat_lon.cos().0,
        GEOSTATIONARY_RADIUS.0 * sat_lon.sin().0,
        0.0,
    );

    // Step 2: line-of-sight vector from site to satellite
    let los = sat_ecef - site_ecef;

    // Step 3: rotate into the local East-North-Up frame,
    // R1(pi/2 - lat) * R3(lon + pi/2)
    let east = -lon.sin().0 * los.x + lon.cos().0 * los.y;
    let north =
        -lat.sin().0 * lon.cos().0 * los.x - lat.sin().0 * lon.sin().0 * los.y
            + lat.cos().0 * los.z;
    let up = lat.cos().0 * lon.cos().0 * los.x
        + lat.cos().0 * lon.sin().0 * los.y
        + lat.sin().0 * los.z;

    // Step 4: look angles from the ENU components
    let mut alpha = libm::atan(east / north);
    let nu_elev = libm::atan(up / libm::sqrt(east * east + north * north));

    // flip negative azimuth in the southern hemisphere
    if alpha < 0.0 && site.latitude().0 <= 0.0 {
        alpha += 2.0 * core::f64::consts::PI;
    }
    // add a half circle in the northern hemisphere
    if site.latitude().0 > 0.0 {
        alpha += core::f64::consts::PI;
    }

    LookAngle::new(Degrees(alpha.to_degrees()), Degrees(nu_elev.to_degrees()))
}

/// Calculate the **TRUE** azimuth to a geostationary satellite using the
/// legacy spherical approximation: the right spherical triangle from the
/// antenna site to the sub-satellite point.
///
/// Callers wanting the magnetic azimuth subtract the local declination, see
/// [`magnetic_azimuth`](crate::providers::magnetic_azimuth).
///
/// * `site` - the antenna site.
/// * `satellite_longitude` - the sub-satellite longitude.
///
/// returns the azimuth in degrees, in [0, 360).
#[must_use]
pub fn calculate_spherical_azimuth(site: &GeoPosition, satellite_longitude: Degrees) -> Degrees {
    let site_lat = Angle::from(site.latitude());
    let delta_lon = Angle::from(Degrees(satellite_longitude.0 - site.longitude().0));

    // the beta angle of the triangle from the antenna to the sub-satellite spot
    let beta = (delta_lon.sin().0 / delta_lon.cos().0) / site_lat.sin().0;

    // azimuth is the supplement of the beta angle
    let mut azimuth = if libm::fabs(beta) < core::f64::consts::PI {
        core::f64::consts::PI - libm::atan(beta)
    } else {
        core::f64::consts::PI + libm::atan(beta)
    };

    // manage N/S hemispheres
    if site.latitude().0 < 0.0 {
        azimuth -= core::f64::consts::PI;
    }
    if azimuth < 0.0 {
        azimuth += 2.0 * core::f64::consts::PI;
    }

    Degrees(azimuth.to_degrees())
}

/// Calculate the elevation above the horizon of a geostationary satellite
/// using the legacy spherical approximation.
///
/// The formula subtracts [`SPHERICAL_ELEVATION_RATIO`] from the great-circle
/// cosine between the site and the sub-satellite point.
///
/// * `site` - the antenna site.
/// * `satellite_longitude` - the sub-satellite longitude.
#[must_use]
pub fn calculate_spherical_elevation(site: &GeoPosition, satellite_longitude: Degrees) -> Degrees {
    let site_lat = Angle::from(site.latitude());
    let delta_lon = Angle::from(Degrees(satellite_longitude.0 - site.longitude().0));

    let cos_core = delta_lon.cos().0 * site_lat.cos().0;
    let elevation = libm::atan(
        (cos_core - SPHERICAL_ELEVATION_RATIO) / libm::sqrt(1.0 - cos_core * cos_core),
    );

    Degrees(elevation.to_degrees())
}

/// Calculate the look angle to a geostationary satellite using the legacy
/// spherical approximation: [`calculate_spherical_azimuth`] and
/// [`calculate_spherical_elevation`] combined.
/// * `site` - the antenna site.
/// * `satellite_longitude` - the sub-satellite longitude.
#[must_use]
pub fn calculate_spherical_look_angle(
    site: &GeoPosition,
    satellite_longitude: Degrees,
) -> LookAngle {
    LookAngle::new(
        calculate_spherical_azimuth(site, satellite_longitude),
        calculate_spherical_elevation(site, satellite_longitude),
    )
}

/// Calculate the LNB/dish skew angle: the rotation of the antenna feed
/// around its boresight axis to match the satellite polarisation.
///
/// Positive values are clockwise, negative anti-clockwise.
///
/// At the equator `tan(latitude)` is zero and the division produces a
/// non-finite result per IEEE semantics: ±90° after the arctangent when the
/// longitude difference is non-zero, `NaN` when it is also zero. Callers
/// must check [`f64::is_finite`] on the returned value rather than rely on it.
///
/// * `site` - the antenna site.
/// * `satellite_longitude` - the sub-satellite longitude.
#[must_use]
pub fn calculate_skew(site: &GeoPosition, satellite_longitude: Degrees) -> Degrees {
    let long_diff = Angle::from(Degrees(site.longitude().0 - satellite_longitude.0));
    let site_lat = Angle::from(site.latitude());
    let tan_lat = site_lat.sin().0 / site_lat.cos().0;

    Degrees(libm::atan(long_diff.sin().0 / tan_lat).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WGS84_ELLIPSOID;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_ellipsoidal_look_angle_northern_site() {
        // Washington DC area, satellite at 101° W
        let site = GeoPosition::new(Degrees(38.9), Degrees(-77.0), Metres(100.0));
        let look = calculate_ellipsoidal_look_angle(&site, Degrees(-101.0), &WGS84_ELLIPSOID);

        assert!(is_within_tolerance(
            215.36016101833195,
            look.azimuth().0,
            1e-6
        ));
        assert!(is_within_tolerance(
            38.54801796747668,
            look.elevation().0,
            1e-6
        ));
    }

    #[test]
    fn test_ellipsoidal_look_angle_southern_site() {
        // Cape Town area, satellite at 28.2° E
        let site = GeoPosition::new(Degrees(-33.9), Degrees(18.4), Metres(50.0));
        let look = calculate_ellipsoidal_look_angle(&site, Degrees(28.2), &WGS84_ELLIPSOID);

        assert!(is_within_tolerance(
            17.221233268334547,
            look.azimuth().0,
            1e-6
        ));
        assert!(is_within_tolerance(
            49.23719409560438,
            look.elevation().0,
            1e-6
        ));
    }

    #[test]
    fn test_ellipsoidal_look_angle_due_south() {
        // site due north of the satellite points due south
        let site = GeoPosition::new(Degrees(45.0), Degrees(7.0), Metres(200.0));
        let look = calculate_ellipsoidal_look_angle(&site, Degrees(7.0), &WGS84_ELLIPSOID);

        assert!(is_within_tolerance(180.0, look.azimuth().0, 1e-9));
        assert!(is_within_tolerance(38.2088, look.elevation().0, 1e-3));
    }

    #[test]
    fn test_spherical_look_angle() {
        let site = GeoPosition::new(Degrees(38.9), Degrees(-77.0), Metres(100.0));
        let look = calculate_spherical_look_angle(&site, Degrees(-101.0));

        assert!(is_within_tolerance(
            215.33681550759323,
            look.azimuth().0,
            1e-6
        ));
        assert!(is_within_tolerance(
            38.519184057506614,
            look.elevation().0,
            1e-6
        ));
    }

    #[test]
    fn test_spherical_and_ellipsoidal_methods_agree() {
        // the two methods differ by a few hundredths of a degree at
        // mid-latitude sites
        let site = GeoPosition::new(Degrees(-33.9), Degrees(18.4), Metres(50.0));
        let sat_lon = Degrees(28.2);

        let rigorous = calculate_ellipsoidal_look_angle(&site, sat_lon, &WGS84_ELLIPSOID);
        let spherical = calculate_spherical_look_angle(&site, sat_lon);

        assert!(is_within_tolerance(
            rigorous.azimuth().0,
            spherical.azimuth().0,
            0.1
        ));
        assert!(is_within_tolerance(
            rigorous.elevation().0,
            spherical.elevation().0,
            0.1
        ));
    }

    #[test]
    fn test_skew() {
        // satellite west of a northern site: clockwise skew
        let site = GeoPosition::new(Degrees(38.9), Degrees(-77.0), Metres(100.0));
        let skew = calculate_skew(&site, Degrees(-101.0));
        assert!(is_within_tolerance(26.75149641640992, skew.0, 1e-6));

        // southern site
        let site = GeoPosition::new(Degrees(-33.9), Degrees(18.4), Metres(50.0));
        let skew = calculate_skew(&site, Degrees(28.2));
        assert!(is_within_tolerance(14.213975686545977, skew.0, 1e-6));
    }

    #[test]
    fn test_skew_at_the_equator_is_non_finite_or_saturated() {
        // tan(0) divides to +/- infinity: the arctangent saturates at +/- 90°
        let site = GeoPosition::new(Degrees(0.0), Degrees(10.0), Metres(0.0));
        let skew = calculate_skew(&site, Degrees(30.0));
        assert_eq!(-90.0, skew.0);

        let skew = calculate_skew(&site, Degrees(-10.0));
        assert_eq!(90.0, skew.0);

        // 0/0 surfaces as NaN, it must be detectable by the caller
        let skew = calculate_skew(&site, Degrees(10.0));
        assert!(skew.0.is_nan());
    }

    #[test]
    fn test_look_angle_accessors() {
        let look = LookAngle::new(Degrees(215.4), Degrees(38.5));
        assert_eq!(Degrees(215.4), look.azimuth());
        assert_eq!(Degrees(38.5), look.elevation());

        println!("LookAngle: {look:?}");
    }
}
