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

// extern crate we're testing, same as any other code would do.
extern crate sat_look_angle;

use angle_sc::Degrees;
use sat_look_angle::datum_transform::convert_ll_to_utm;
use sat_look_angle::WGS84_ELLIPSOID;

/// The legacy self-test conversion table:
/// latitude, longitude, zone, band, easting, northing.
const SELF_TEST_TABLE: [(f64, f64, u8, char, f64, f64); 11] = [
    (0.0000, 0.0000, 31, 'N', 166_021.0, 0.0),
    (0.1300, -0.2324, 30, 'N', 808_084.0, 14_385.0),
    (-45.6456, 23.3545, 34, 'G', 683_473.0, 4_942_631.0),
    (-12.7650, -33.8765, 25, 'L', 404_859.0, 8_588_690.0),
    (-80.5434, -170.6540, 2, 'C', 506_346.0, 1_057_742.0),
    (90.0000, 177.0000, 60, 'Z', 500_000.0, 9_997_964.0),
    (-90.0000, -177.0000, 1, 'A', 500_000.0, 2_035.0),
    (90.0000, 3.0000, 31, 'Z', 500_000.0, 9_997_964.0),
    (23.4578, -135.4545, 8, 'Q', 453_580.0, 2_594_272.0),
    (77.3450, 156.9876, 57, 'X', 450_793.0, 8_586_116.0),
    (-89.3454, -48.9306, 22, 'A', 502_639.0, 75_072.0),
];

#[test]
fn test_utm_reference_table() {
    for (lat, lon, zone, band, easting, northing) in SELF_TEST_TABLE {
        let utm = convert_ll_to_utm(Degrees(lat), Degrees(lon), &WGS84_ELLIPSOID);

        assert_eq!(zone, utm.zone(), "zone at ({lat}, {lon})");
        assert_eq!(band, utm.band(), "band at ({lat}, {lon})");

        // the reference values are truncated to whole metres
        let delta_easting = (easting - utm.easting()).abs();
        let delta_northing = (northing - utm.northing()).abs();
        assert!(
            delta_easting < 1.5,
            "easting at ({lat}, {lon}): {} expected {easting}",
            utm.easting()
        );
        assert!(
            delta_northing < 1.5,
            "northing at ({lat}, {lon}): {} expected {northing}",
            utm.northing()
        );
    }
}

#[test]
fn test_utm_formatted_strings() {
    // vectors where truncation and padding are unambiguous
    let cases = [
        (-45.6456, 23.3545, "34 G 683473 4942631"),
        (90.0000, 3.0000, "31 Z 500000 9997964"),
        (-80.5434, -170.6540, "02 C 506346 1057742"),
        (-90.0000, -177.0000, "01 A 500000 0002035"),
    ];
    for (lat, lon, expected) in cases {
        let utm = convert_ll_to_utm(Degrees(lat), Degrees(lon), &WGS84_ELLIPSOID);
        assert_eq!(expected, utm.to_string());
    }
}

#[test]
fn test_utm_zone_and_band_invariants() {
    // zones stay in 1..=60 and bands never use 'I' or 'O' across the globe.
    // The antimeridian itself is excluded: at exactly 180° the legacy zone
    // formula overflows to 61, a long-standing quirk kept for compatibility.
    let mut lat = -90.0;
    while lat <= 90.0 {
        let mut lon = -179.95;
        while lon < 180.0 {
            let utm = convert_ll_to_utm(Degrees(lat), Degrees(lon), &WGS84_ELLIPSOID);
            assert!((1..=60).contains(&utm.zone()), "zone at ({lat}, {lon})");
            assert_ne!('I', utm.band());
            assert_ne!('O', utm.band());
            lon += 7.3;
        }
        lat += 5.7;
    }
}
