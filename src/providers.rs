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

//! The providers module contains the trait seams for the external
//! collaborators of the look angle calculations: the magnetic declination
//! model and the satellite ephemeris lookup.
//!
//! Both are opaque numeric services outside the numeric core of this crate:
//! the declination comes from a geomagnetic field model and the satellite
//! longitude from whatever catalogue the application carries. Implementations
//! may be backed by anything from a constant to a database; tests mock them.

use crate::{Degrees, GeoPosition};

/// A source of magnetic declination: the angle between true North and
/// magnetic North at a position and time. Positive values are east
/// declination, negative west.
pub trait MagneticDeclinationModel {
    /// The magnetic declination at `site`.
    /// * `site` - the position at which the declination is required.
    /// * `epoch_millis` - the time of interest, in milliseconds since the
    ///   Unix epoch (the geomagnetic field drifts over years).
    fn declination(&self, site: &GeoPosition, epoch_millis: i64) -> Degrees;
}

/// A lookup of geostationary satellite positions by identifier.
pub trait SatelliteEphemeris {
    /// The sub-satellite longitude of the satellite with `id`, or `None`
    /// when the satellite is unknown.
    fn satellite_longitude(&self, id: &str) -> Option<Degrees>;
}

/// Convert a **TRUE** azimuth to a **MAGNETIC** azimuth by subtracting the
/// local declination, wrapping the result to [0, 360).
/// * `true_azimuth` - degrees clockwise from true North.
/// * `declination` - the local magnetic declination.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use sat_look_angle::providers::magnetic_azimuth;
///
/// // 10° west declination swings a due-north pointing to 10°
/// assert_eq!(Degrees(10.0), magnetic_azimuth(Degrees(0.0), Degrees(-10.0)));
/// ```
#[must_use]
pub const fn magnetic_azimuth(true_azimuth: Degrees, declination: Degrees) -> Degrees {
    let mut azimuth = true_azimuth.0 - declination.0;
    if azimuth < 0.0 {
        azimuth += 360.0;
    } else if azimuth >= 360.0 {
        azimuth -= 360.0;
    }
    Degrees(azimuth)
}
