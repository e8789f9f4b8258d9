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

//! This module contains the coefficients of the truncated power series for
//! the meridional arc: the distance along a meridian from the equator to a
//! given latitude.
//!
//! The series is the standard Army Corps of Engineers / Transverse Mercator
//! expansion in even powers of the first eccentricity, see
//! [Transverse Mercator projection](https://en.wikipedia.org/wiki/Transverse_Mercator_projection).

use crate::ellipsoid::Metres;
use angle_sc::Radians;

/// The coefficients `A0`, `A2`, `A4`, `A6` and `A8` of the meridional arc
/// series for an ellipsoid.
/// * `e_2` - the square of the (first) Eccentricity of the ellipsoid.
/// # Examples
/// ```
/// use sat_look_angle::ellipsoid::coefficients::evaluate_meridional_coeffs;
/// use sat_look_angle::ellipsoid::{calculate_eccentricity, wgs84};
///
/// let e = calculate_eccentricity(wgs84::A, wgs84::B);
/// let coeffs = evaluate_meridional_coeffs(e * e);
///
/// // A0 is slightly below one, the higher coefficients fall off rapidly.
/// assert!(coeffs[0] > 0.998 && coeffs[0] < 1.0);
/// assert!(coeffs[1] > coeffs[2] && coeffs[2] > coeffs[3].abs());
/// ```
#[must_use]
pub const fn evaluate_meridional_coeffs(e_2: f64) -> [f64; 5] {
    let e_4 = e_2 * e_2;
    let e_6 = e_4 * e_2;
    let e_8 = e_4 * e_4;

    [
        1.0 - e_2 / 4.0 - 3.0 * e_4 / 64.0 - 5.0 * e_6 / 256.0 - 175.0 * e_8 / 16384.0,
        3.0 * (e_2 + e_4 / 4.0 + 15.0 * e_6 / 128.0 - 455.0 * e_8 / 4096.0) / 8.0,
        15.0 * (e_4 + 3.0 * e_6 / 4.0 - 77.0 * e_8 / 128.0) / 256.0,
        35.0 * (e_6 - 41.0 * e_8 / 32.0) / 3072.0,
        -315.0 * e_8 / 131_072.0,
    ]
}

/// Evaluate the meridional arc: the distance along the meridian from the
/// equator to `lat`.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `coeffs` - the meridional arc series coefficients A0..A8.
/// * `lat` - the geodetic latitude.
#[must_use]
pub fn meridional_arc(a: Metres, coeffs: &[f64; 5], lat: Radians) -> Metres {
    let phi = lat.0;
    Metres(
        a.0 * (coeffs[0] * phi - coeffs[1] * libm::sin(2.0 * phi)
            + coeffs[2] * libm::sin(4.0 * phi)
            - coeffs[3] * libm::sin(6.0 * phi)
            + coeffs[4] * libm::sin(8.0 * phi)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ellipsoid::{calculate_eccentricity, wgs84};
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_meridional_coeffs_wgs84() {
        let e = calculate_eccentricity(wgs84::A, wgs84::B);
        let coeffs = evaluate_meridional_coeffs(e * e);

        assert!(is_within_tolerance(
            0.9983242984278048,
            coeffs[0],
            f64::EPSILON
        ));
        assert!(is_within_tolerance(
            0.0025146069821701134,
            coeffs[1],
            f64::EPSILON
        ));
        assert!(is_within_tolerance(
            2.638975815239874e-6,
            coeffs[2],
            f64::EPSILON
        ));
        assert!(is_within_tolerance(
            3.3887289307127126e-9,
            coeffs[3],
            f64::EPSILON
        ));
        // A8 is negative and tiny
        assert!(coeffs[4] < 0.0 && coeffs[4].abs() < 1.0e-11);
    }

    #[test]
    fn test_meridional_arc() {
        let e = calculate_eccentricity(wgs84::A, wgs84::B);
        let coeffs = evaluate_meridional_coeffs(e * e);

        // arc length is zero at the equator
        assert_eq!(0.0, meridional_arc(wgs84::A, &coeffs, Radians(0.0)).0);

        // the quarter meridian, equator to pole
        let quarter = meridional_arc(
            wgs84::A,
            &coeffs,
            Radians(core::f64::consts::FRAC_PI_2),
        );
        assert!(is_within_tolerance(10_001_965.73, quarter.0, 1.0));

        // arc is an odd function of latitude
        let north = meridional_arc(wgs84::A, &coeffs, Radians(0.8));
        let south = meridional_arc(wgs84::A, &coeffs, Radians(-0.8));
        assert_eq!(north.0, -south.0);
    }
}
