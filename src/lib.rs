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

//! sat-look-angle
//!
//! A library for pointing a fixed ground antenna at a geostationary
//! satellite, and for converting geodetic coordinates to the Universal
//! Transverse Mercator (UTM) projection, on the
//! [WGS-84](https://en.wikipedia.org/wiki/World_Geodetic_System) ellipsoid.
//!
//! ## Look angles
//!
//! A geostationary satellite sits at a fixed longitude over the equator at
//! roughly 42 200 km from the centre of the Earth, so the pointing problem
//! reduces to pure geometry between the antenna site and the sub-satellite
//! point. The [`look_angle`] module provides:
//!
//! - [`calculate_ellipsoidal_look_angle`](look_angle::calculate_ellipsoidal_look_angle) -
//!   the rigorous vector method of Soler et al. (1995),
//!   [Determination of Look Angles to Geostationary Communication Satellites](https://www.ngs.noaa.gov/CORS/Articles/SolerEisemannJSE.pdf):
//!   the site is transformed from curvilinear to Earth-centred Cartesian
//!   coordinates, and the line of sight is rotated into the local
//!   East-North-Up frame;
//! - [`calculate_spherical_azimuth`](look_angle::calculate_spherical_azimuth) and
//!   [`calculate_spherical_elevation`](look_angle::calculate_spherical_elevation) -
//!   a legacy spherical-trigonometry approximation, retained because both
//!   variants remain in use and they are *not* numerically identical
//!   (they differ by a few hundredths of a degree);
//! - [`calculate_skew`](look_angle::calculate_skew) - the LNB/dish rotation
//!   angle, positive clockwise.
//!
//! ## Datum transform
//!
//! The [`datum_transform`] module converts geodetic latitude and longitude to
//! a [`UtmCoordinate`](datum_transform::UtmCoordinate) using the standard
//! Transverse Mercator forward series with the meridional arc coefficients
//! from [`ellipsoid::coefficients`]. The reverse UTM and MGRS conversions are
//! declared but fail with [`Error::NotImplemented`] until they are written.
//!
//! ## Design
//!
//! The [`Ellipsoid`] struct holds the Semimajor and Semiminor axes together
//! with the derived eccentricities and meridional arc coefficients, computed
//! once. The static [`WGS84_ELLIPSOID`](static@WGS84_ELLIPSOID) is the WGS-84 instance shared by
//! every calculation; it is never mutated.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define
//!   `LatLong` and the `Vector3d` used for Cartesian line-of-sight vectors;
//! - [icao-units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [thiserror](https://crates.io/crates/thiserror) - to define the
//!   crate [`Error`] type.
//!
//! External collaborators (a magnetic declination model and a satellite
//! ephemeris lookup) are consumed through the traits in [`providers`]; they
//! are not part of the numeric core and may be mocked in tests.

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod datum_transform;
pub mod ellipsoid;
mod error;
pub mod look_angle;
pub mod providers;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use error::Error;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use once_cell::sync::Lazy;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,

    /// The (first) Eccentricity of the ellipsoid.
    e: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,

    /// The meridional arc series coefficients A0..A8 of the ellipsoid.
    meridional_coeffs: [f64; 5],
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `b` - the Semiminor axis of the `Ellipsoid`.
    #[must_use]
    pub fn new(a: Metres, b: Metres) -> Self {
        let e = ellipsoid::calculate_eccentricity(a, b);
        let e_2 = e * e;
        Self {
            a,
            b,
            e,
            e_2,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(e_2),
            meridional_coeffs: ellipsoid::coefficients::evaluate_meridional_coeffs(e_2),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::B)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The (first) Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e(&self) -> f64 {
        self.e
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The meridional arc series coefficients A0..A8 of the ellipsoid.
    #[must_use]
    pub const fn meridional_coeffs(&self) -> &[f64; 5] {
        &self.meridional_coeffs
    }

    /// Calculate the radius of curvature in the prime vertical at the
    /// given latitude.
    /// * `sin_lat` - the sine of the geodetic latitude.
    #[must_use]
    pub fn prime_vertical_radius(&self, sin_lat: f64) -> Metres {
        ellipsoid::calculate_prime_vertical_radius(self.a, self.e, sin_lat)
    }

    /// Calculate the meridional arc: the distance along the meridian from
    /// the equator to the given latitude.
    /// * `lat` - the geodetic latitude.
    #[must_use]
    pub fn meridional_arc(&self, lat: Radians) -> Metres {
        ellipsoid::coefficients::meridional_arc(self.a, &self.meridional_coeffs, lat)
    }
}

/// A static instance of the WGS-84 `Ellipsoid`.
#[allow(clippy::non_std_lazy_statics)]
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// A geodetic position: latitude, longitude and altitude above the
/// ellipsoid, with an optional horizontal accuracy estimate.
///
/// A `GeoPosition` describes the antenna site. Degenerately, with only its
/// longitude significant, it can also describe the sub-satellite point of a
/// geostationary satellite: latitude implicitly zero, distance from the
/// centre of the Earth fixed at
/// [`GEOSTATIONARY_RADIUS`](look_angle::GEOSTATIONARY_RADIUS).
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPosition {
    /// The geodetic latitude.
    lat: Degrees,
    /// The geodetic longitude.
    lon: Degrees,
    /// The altitude above the ellipsoid.
    altitude: Metres,
    /// The horizontal accuracy estimate of the position, where known.
    horizontal_accuracy: Option<Metres>,
}

impl GeoPosition {
    /// Constructor.
    /// * `lat`, `lon` - the geodetic latitude and longitude.
    /// * `altitude` - the altitude above the ellipsoid.
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees, altitude: Metres) -> Self {
        Self {
            lat,
            lon,
            altitude,
            horizontal_accuracy: None,
        }
    }

    /// Attach a horizontal accuracy estimate to the position.
    #[must_use]
    pub const fn with_horizontal_accuracy(mut self, accuracy: Metres) -> Self {
        self.horizontal_accuracy = Some(accuracy);
        self
    }

    /// The geodetic latitude.
    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        self.lat
    }

    /// The geodetic longitude.
    #[must_use]
    pub const fn longitude(&self) -> Degrees {
        self.lon
    }

    /// The altitude above the ellipsoid.
    #[must_use]
    pub const fn altitude(&self) -> Metres {
        self.altitude
    }

    /// The horizontal accuracy estimate, where known.
    #[must_use]
    pub const fn horizontal_accuracy(&self) -> Option<Metres> {
        self.horizontal_accuracy
    }
}

impl Validate for GeoPosition {
    /// Test whether a `GeoPosition` is valid.
    /// Whether -90° <= `latitude` <= 90° and -180° <= `longitude` <= 180°.
    ///
    /// Note: the calculations in this crate do **not** require valid
    /// positions; they are total over finite inputs, matching the behaviour
    /// of the original algorithms. Callers wanting a stricter contract can
    /// check validity first.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat.0) && (-180.0..=180.0).contains(&self.lon.0)
    }
}

impl From<&LatLong> for GeoPosition {
    /// Construct a `GeoPosition` from a `LatLong` at zero altitude.
    fn from(value: &LatLong) -> Self {
        Self::new(value.lat(), value.lon(), Metres(0.0))
    }
}
