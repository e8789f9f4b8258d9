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

//! The `datum_transform` module converts geodetic coordinates to the
//! Universal Transverse Mercator (UTM) projection.
//!
//! The forward conversion follows the Army Corps of Engineers Transverse
//! Mercator series: the globe is divided into 60 longitude zones of 6° and
//! lettered latitude bands of 8°, and positions are projected onto the
//! transverse cylinder tangent to the central meridian of their zone.
//!
//! The reverse (UTM to geodetic) and MGRS conversions are part of the
//! declared surface but their implementations are outstanding; they fail
//! with [`Error::NotImplemented`] rather than returning empty results.
//!
//! Latitude/longitude sign convention: North and East positive, South and
//! West negative.

#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]

use crate::{Degrees, Ellipsoid, Error, GeoPosition, Radians};
use core::fmt;
use core::str::FromStr;

/// The UTM point scale factor on the central meridian, `k0`.
pub const POINT_SCALE_FACTOR: f64 = 0.9996;

/// The false easting added to every UTM easting, in metres.
pub const FALSE_EASTING: f64 = 500_000.0;

/// The false northing added to southern hemisphere UTM northings, in metres.
pub const FALSE_NORTHING: f64 = 10_000_000.0;

/// The latitude bands: band letter to the lowest latitude of the band, in
/// degrees.
///
/// Bands are 8° wide from 80°S with the letters 'I' and 'O' skipped to
/// avoid confusion with the digits 1 and 0, and 'X'/'Z' covering the polar
/// remainders. A single ordered mapping; lookup selects the band with the
/// largest lower bound not exceeding the (truncated) latitude.
const LATITUDE_BANDS: [(char, i32); 22] = [
    ('A', -90),
    ('C', -84),
    ('D', -72),
    ('E', -64),
    ('F', -56),
    ('G', -48),
    ('H', -40),
    ('J', -32),
    ('K', -24),
    ('L', -16),
    ('M', -8),
    ('N', 0),
    ('P', 8),
    ('Q', 16),
    ('R', 24),
    ('S', 32),
    ('T', 40),
    ('U', 48),
    ('V', 56),
    ('W', 64),
    ('X', 72),
    ('Z', 84),
];

/// A position on the Universal Transverse Mercator grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UtmCoordinate {
    /// The longitude zone, 1..=60.
    zone: u8,
    /// The latitude band letter.
    band: char,
    /// The easting in metres, from the zone's false origin.
    easting: f64,
    /// The northing in metres, from the equator (northern hemisphere) or
    /// the false southern origin.
    northing: f64,
}

impl UtmCoordinate {
    /// The longitude zone, 1..=60.
    #[must_use]
    pub const fn zone(&self) -> u8 {
        self.zone
    }

    /// The latitude band letter.
    #[must_use]
    pub const fn band(&self) -> char {
        self.band
    }

    /// The easting in metres.
    #[must_use]
    pub const fn easting(&self) -> f64 {
        self.easting
    }

    /// The northing in metres.
    #[must_use]
    pub const fn northing(&self) -> f64 {
        self.northing
    }
}

impl fmt::Display for UtmCoordinate {
    /// Format as `"ZZ B EEEEEE NNNNNNN"`: zone zero-padded to 2 digits,
    /// band letter, then easting and northing truncated to whole metres
    /// with minimum widths of 6 and 7 digits.
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02} {} {:06} {:07}",
            self.zone, self.band, self.easting as i64, self.northing as i64
        )
    }
}

impl FromStr for UtmCoordinate {
    type Err = Error;

    /// Parse a `"ZZ B EEEEEE NNNNNNN"` UTM string.
    ///
    /// # Errors
    ///
    /// `Error::Parse` with the offending input when the string does not
    /// have four fields, the zone is not in 1..=60, the band letter is not
    /// in the UTM alphabet, or easting/northing are not numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = |reason| Error::Parse {
            text: s.to_string(),
            reason,
        };

        let fields: Vec<&str> = s.split_whitespace().collect();
        let [zone, band, easting, northing] = fields.as_slice() else {
            return Err(parse_error("expected 4 fields: zone band easting northing"));
        };

        let zone: u8 = zone
            .parse()
            .map_err(|_| parse_error("longitude zone is not an integer"))?;
        if !(1..=60).contains(&zone) {
            return Err(parse_error("longitude zone is not in 1..=60"));
        }

        let mut band_chars = band.chars();
        let (Some(band), None) = (band_chars.next(), band_chars.next()) else {
            return Err(parse_error("latitude band is not a single letter"));
        };
        if !LATITUDE_BANDS.iter().any(|(letter, _)| *letter == band) {
            return Err(parse_error("latitude band is not a UTM band letter"));
        }

        let easting: f64 = easting
            .parse()
            .map_err(|_| parse_error("easting is not a number"))?;
        let northing: f64 = northing
            .parse()
            .map_err(|_| parse_error("northing is not a number"))?;

        Ok(Self {
            zone,
            band,
            easting,
            northing,
        })
    }
}

/// Determine the UTM longitude zone of a normalized longitude.
/// * `lon` - the longitude in [0, 2π).
///
/// returns the zone, 1..=60. The formula is asymmetric about the
/// antimeridian to handle the wraparound of the normalized longitude.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn longitude_zone(lon: Radians) -> u8 {
    if (0.0..=core::f64::consts::PI).contains(&lon.0) {
        libm::floor(31.0 + (180.0 * lon.0) / (6.0 * core::f64::consts::PI)) as u8
    } else {
        libm::floor((180.0 * lon.0) / (6.0 * core::f64::consts::PI) - 29.0) as u8
    }
}

/// The central meridian of a UTM longitude zone.
/// * `zone` - the longitude zone, 1..=60.
#[must_use]
fn central_meridian(zone: u8) -> Radians {
    let zone = f64::from(zone);
    if zone >= 31.0 {
        Radians((6.0 * zone - 183.0).to_radians())
    } else {
        Radians((6.0 * zone + 177.0).to_radians())
    }
}

/// Determine the latitude band letter of a latitude.
///
/// The latitude is truncated toward zero before lookup, matching the legacy
/// table semantics; latitudes above the top boundary fall back to the last
/// band ('Z') and below the bottom boundary to the first ('A').
/// * `latitude` - the geodetic latitude.
#[must_use]
fn latitude_band(latitude: Degrees) -> char {
    #[allow(clippy::cast_possible_truncation)]
    let lat = latitude.0 as i32;
    LATITUDE_BANDS
        .iter()
        .rev()
        .find(|(_, lower)| *lower <= lat)
        .map_or('A', |(letter, _)| *letter)
}

/// Convert a geodetic latitude and longitude to UTM.
///
/// The Transverse Mercator x and y coordinates are computed from the
/// 5th/6th-order series expansions in the longitude offset from the zone's
/// central meridian, with the meridional arc supplying the constant
/// northing term; the point scale factor and false origins are then applied.
///
/// The conversion is total over finite inputs: a latitude outside [-90, 90]
/// is not rejected but produces a coordinate without geodetic meaning.
///
/// * `lat`, `lon` - the geodetic latitude and longitude.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use sat_look_angle::datum_transform::convert_ll_to_utm;
/// use sat_look_angle::WGS84_ELLIPSOID;
///
/// let utm = convert_ll_to_utm(Degrees(-45.6456), Degrees(23.3545), &WGS84_ELLIPSOID);
/// assert_eq!("34 G 683473 4942631", utm.to_string());
/// ```
#[must_use]
pub fn convert_ll_to_utm(lat: Degrees, lon: Degrees, ellipsoid: &Ellipsoid) -> UtmCoordinate {
    // handle hemispheres of input: normalize longitude to [0, 360) degrees
    // and convert to radians
    let lon_rad = if lon.0 < 0.0 {
        (360.0 - libm::fabs(lon.0)).to_radians()
    } else {
        lon.0.to_radians()
    };
    let lat_rad = lat.0.to_radians();

    let zone = longitude_zone(Radians(lon_rad));
    // the longitude offset from the zone's central meridian
    let lambda = lon_rad - central_meridian(zone).0;

    // auxiliary terms for the Transverse Mercator series
    let sin_lat = libm::sin(lat_rad);
    let cos_lat = libm::cos(lat_rad);
    let nu = ellipsoid.prime_vertical_radius(sin_lat).0;
    let t = libm::tan(lat_rad);
    let eta = libm::sqrt(ellipsoid.ep_2()) * cos_lat;

    let t_2 = t * t;
    let t_4 = t_2 * t_2;
    let eta_2 = eta * eta;
    let lambda_2 = lambda * lambda;
    let cos_2 = cos_lat * cos_lat;

    // Transverse Mercator x and y
    let x_tm = nu * lambda * cos_lat
        + (nu * lambda * lambda_2 * cos_lat * cos_2 / 6.0) * (1.0 - t_2 + eta_2)
        + (nu * lambda * lambda_2 * lambda_2 * cos_lat * cos_2 * cos_2 / 120.0)
            * (5.0 - 18.0 * t_2 + t_4 + 14.0 * eta_2 - 58.0 * t_2 * eta_2);

    let y_tm = ellipsoid.meridional_arc(Radians(lat_rad)).0
        + (nu * lambda_2 / 2.0) * (sin_lat * cos_lat)
        + (nu * lambda_2 * lambda_2 / 24.0)
            * (sin_lat * cos_lat * cos_2)
            * (5.0 - t_2 + 9.0 * eta_2 + 4.0 * eta_2 * eta_2)
        + (nu * lambda_2 * lambda_2 * lambda_2 / 720.0)
            * (sin_lat * cos_lat * cos_2 * cos_2)
            * (61.0 - 58.0 * t_2 + t_4 + 270.0 * eta_2 - 330.0 * t_2 * eta_2);

    // transform TM to UTM
    let easting = POINT_SCALE_FACTOR * x_tm + FALSE_EASTING;
    let northing = if lat_rad >= 0.0 {
        POINT_SCALE_FACTOR * y_tm
    } else {
        POINT_SCALE_FACTOR * y_tm + FALSE_NORTHING
    };

    UtmCoordinate {
        zone,
        band: latitude_band(lat),
        easting,
        northing,
    }
}

/// Convert a UTM string to a geodetic position: the reverse transform.
///
/// # Errors
///
/// `Error::Parse` when `utm` is not a well-formed UTM string;
/// `Error::NotImplemented` otherwise - the reverse series is outstanding.
pub fn convert_utm_to_ll(utm: &str) -> Result<GeoPosition, Error> {
    let _coordinate = UtmCoordinate::from_str(utm)?;
    Err(Error::NotImplemented("UTM to geodetic conversion"))
}

/// Convert a geodetic latitude and longitude to an MGRS grid reference.
///
/// # Errors
///
/// `Error::NotImplemented` - the MGRS conversion is outstanding.
pub fn convert_ll_to_mgrs(_lat: Degrees, _lon: Degrees) -> Result<String, Error> {
    Err(Error::NotImplemented("geodetic to MGRS conversion"))
}

/// Convert an MGRS grid reference to a geodetic position.
///
/// # Errors
///
/// `Error::NotImplemented` - the MGRS conversion is outstanding.
pub fn convert_mgrs_to_ll(_mgrs: &str) -> Result<GeoPosition, Error> {
    Err(Error::NotImplemented("MGRS to geodetic conversion"))
}
