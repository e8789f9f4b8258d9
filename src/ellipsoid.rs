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

//! The ellipsoid module contains functions for defining an ellipsoid given
//! its Semimajor and Semiminor axes, as quoted for WGS 84.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod wgs84;

use crate::Metres;

/// Calculate the (first) Eccentricity of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
/// # Examples
/// ```
/// use sat_look_angle::ellipsoid::{calculate_eccentricity, wgs84};
///
/// // The WGS 84 first eccentricity.
/// assert_eq!(0.08181919092890633, calculate_eccentricity(wgs84::A, wgs84::B));
/// ```
#[must_use]
pub fn calculate_eccentricity(a: Metres, b: Metres) -> f64 {
    libm::sqrt((a.0 * a.0 - b.0 * b.0) / (a.0 * a.0))
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `e_2` - the square of the (first) Eccentricity of the ellipsoid.
/// # Examples
/// ```
/// use sat_look_angle::ellipsoid::{
///     calculate_eccentricity, calculate_sq_2nd_eccentricity, wgs84,
/// };
///
/// let e = calculate_eccentricity(wgs84::A, wgs84::B);
/// // The WGS 84 sq 2nd eccentricity.
/// assert_eq!(0.006739496756586904, calculate_sq_2nd_eccentricity(e * e));
/// ```
#[must_use]
pub const fn calculate_sq_2nd_eccentricity(e_2: f64) -> f64 {
    e_2 / (1.0 - e_2)
}

/// Calculate the radius of curvature in the prime vertical, `N`:
/// the radius of the ellipsoid normal section perpendicular to the meridian.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e` - the (first) Eccentricity of the ellipsoid.
/// * `sin_lat` - the sine of the geodetic latitude.
/// # Examples
/// ```
/// use sat_look_angle::ellipsoid::{
///     calculate_eccentricity, calculate_prime_vertical_radius, wgs84,
/// };
///
/// let e = calculate_eccentricity(wgs84::A, wgs84::B);
/// // N equals the Semimajor axis at the equator
/// assert_eq!(wgs84::A, calculate_prime_vertical_radius(wgs84::A, e, 0.0));
/// ```
#[must_use]
pub fn calculate_prime_vertical_radius(a: Metres, e: f64, sin_lat: f64) -> Metres {
    let e_sin_lat = e * sin_lat;
    Metres(a.0 / libm::sqrt(1.0 - e_sin_lat * e_sin_lat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_calculate_eccentricity() {
        let e = calculate_eccentricity(wgs84::A, wgs84::B);
        assert!(is_within_tolerance(
            0.006694380004260828,
            e * e,
            f64::EPSILON
        ));

        // a sphere has zero eccentricity
        assert_eq!(0.0, calculate_eccentricity(wgs84::A, wgs84::A));
    }

    #[test]
    fn test_calculate_prime_vertical_radius() {
        let e = calculate_eccentricity(wgs84::A, wgs84::B);

        // N is largest at the poles: a / sqrt(1 - e^2)
        let polar = calculate_prime_vertical_radius(wgs84::A, e, 1.0);
        assert!(is_within_tolerance(6_399_593.625, polar.0, 1.0e-2));

        // monotonically increasing from equator to pole
        let mid = calculate_prime_vertical_radius(wgs84::A, e, 0.5);
        assert!(wgs84::A.0 < mid.0 && mid.0 < polar.0);
    }
}
