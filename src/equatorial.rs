//! Apparent Sun longitude, sidereal time, and geocentric equatorial coordinates.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{normalize_degrees_360, to_degrees, to_radians};
use crate::time::J2000_EPOCH_JD;
use crate::types::{EclipticObliquity, EquatorialPosition, GeocentricPosition, HeliocentricPosition, JulianDate, Nutation};

/// Aberration constant in arcseconds
const ABERRATION_CONSTANT: f64 = 20.4898;

/// Greenwich mean sidereal time at the J2000.0 epoch, degrees
const GREENWICH_MEAN_SIDEREAL_TIME_BASE: f64 = 280.460_618_37;

/// Sidereal rotation in degrees per solar day
const SIDEREAL_TIME_RATE: f64 = 360.985_647_366_29;

/// Aberration correction (Δτ) in degrees for an Earth–Sun distance in AU.
pub fn aberration_correction(earth_radius_vector: f64) -> f64 {
    -ABERRATION_CONSTANT / (3600.0 * earth_radius_vector)
}

/// Apparent Sun longitude (λ) in degrees: geocentric longitude plus nutation in
/// longitude plus aberration.
pub fn apparent_sun_longitude(geocentric_longitude: f64, nutation_longitude: f64, aberration: f64) -> f64 {
    geocentric_longitude + nutation_longitude + aberration
}

/// Greenwich mean sidereal time (ν0) in degrees, in [0, 360).
///
/// # Arguments
/// * `julian_day` - Julian Day (UT)
/// * `julian_century` - Julian Century (UT)
pub fn greenwich_mean_sidereal_time(julian_day: f64, julian_century: f64) -> f64 {
    normalize_degrees_360(
        GREENWICH_MEAN_SIDEREAL_TIME_BASE
            + SIDEREAL_TIME_RATE * (julian_day - J2000_EPOCH_JD)
            + julian_century * julian_century * (0.000_387_933 - julian_century / 38_710_000.0),
    )
}

/// Greenwich apparent sidereal time (ν): the mean sidereal time corrected by the
/// equation of the equinoxes. Not normalized.
pub fn greenwich_sidereal_time(mean_sidereal_time: f64, nutation_longitude: f64, true_obliquity: f64) -> f64 {
    mean_sidereal_time + nutation_longitude * to_radians(true_obliquity).cos()
}

/// Geocentric Sun right ascension (α) in degrees, in [0, 360).
///
/// # Arguments
/// * `apparent_longitude` - Apparent Sun longitude (λ) in degrees
/// * `true_obliquity` - True obliquity of the ecliptic (ε) in degrees
/// * `geocentric_latitude` - Geocentric latitude (β) in degrees
pub fn geocentric_right_ascension(apparent_longitude: f64, true_obliquity: f64, geocentric_latitude: f64) -> f64 {
    let lambda = to_radians(apparent_longitude);
    let epsilon = to_radians(true_obliquity);
    let beta = to_radians(geocentric_latitude);

    normalize_degrees_360(to_degrees(
        (lambda.sin() * epsilon.cos() - beta.tan() * epsilon.sin()).atan2(lambda.cos()),
    ))
}

/// Geocentric Sun declination (δ) in degrees, in [-90, 90].
pub fn geocentric_declination(geocentric_latitude: f64, true_obliquity: f64, apparent_longitude: f64) -> f64 {
    let beta = to_radians(geocentric_latitude);
    let epsilon = to_radians(true_obliquity);
    let lambda = to_radians(apparent_longitude);

    to_degrees((beta.sin() * epsilon.cos() + beta.cos() * epsilon.sin() * lambda.sin()).asin())
}

impl EquatorialPosition {
    /// Reduces the geocentric ecliptic position to apparent equatorial
    /// coordinates, along with the sidereal time needed by the observer stage.
    pub fn new(
        time: &JulianDate,
        heliocentric: &HeliocentricPosition,
        geocentric: &GeocentricPosition,
        nutation: &Nutation,
        obliquity: &EclipticObliquity,
    ) -> Self {
        let aberration_correction = aberration_correction(heliocentric.radius);
        let apparent_sun_longitude =
            apparent_sun_longitude(geocentric.longitude, nutation.longitude, aberration_correction);
        let greenwich_mean_sidereal_time = greenwich_mean_sidereal_time(time.jd, time.jc);

        Self {
            aberration_correction,
            apparent_sun_longitude,
            greenwich_mean_sidereal_time,
            greenwich_sidereal_time: greenwich_sidereal_time(
                greenwich_mean_sidereal_time,
                nutation.longitude,
                obliquity.true_obliquity,
            ),
            right_ascension: geocentric_right_ascension(
                apparent_sun_longitude,
                obliquity.true_obliquity,
                geocentric.latitude,
            ),
            declination: geocentric_declination(geocentric.latitude, obliquity.true_obliquity, apparent_sun_longitude),
        }
    }
}
