//! Observer-centred corrections: parallax, refraction, zenith and azimuth.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{normalize_degrees_360, to_degrees, to_radians};
use crate::observation::ObservationInput;
use crate::types::{EquatorialPosition, TopocentricPosition};

/// Apparent solar radius in degrees
pub const SUN_RADIUS: f64 = 0.26667;

const EARTH_EQUATORIAL_RADIUS_METERS: f64 = 6_378_140.0;

/// Ratio of the polar to the equatorial Earth radius
const EARTH_FLATTENING_FACTOR: f64 = 0.996_647_19;

/// Solar parallax at 1 AU in arcseconds
const PARALLAX_CONSTANT: f64 = 8.794;

/// Observer local hour angle (H) in degrees, in [0, 360).
///
/// * `greenwich_sidereal_time` - Greenwich apparent sidereal time (ν) in degrees
/// * `longitude` - Observer longitude in degrees, positive east
/// * `right_ascension` - Geocentric Sun right ascension (α) in degrees
pub fn observer_hour_angle(greenwich_sidereal_time: f64, longitude: f64, right_ascension: f64) -> f64 {
    normalize_degrees_360(greenwich_sidereal_time + longitude - right_ascension)
}

/// Equatorial horizontal parallax of the Sun (ξ) in degrees.
pub fn equatorial_horizontal_parallax(earth_radius_vector: f64) -> f64 {
    PARALLAX_CONSTANT / (3600.0 * earth_radius_vector)
}

/// Parallax in the Sun right ascension (Δα) and topocentric declination (δ').
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `elevation` - Observer elevation in meters
/// * `parallax` - Equatorial horizontal parallax (ξ) in degrees
/// * `hour_angle` - Observer local hour angle (H) in degrees
/// * `declination` - Geocentric declination (δ) in degrees
///
/// # Returns
/// `(Δα, δ')` in degrees
pub fn right_ascension_parallax_and_topocentric_declination(
    latitude: f64,
    elevation: f64,
    parallax: f64,
    hour_angle: f64,
    declination: f64,
) -> (f64, f64) {
    let phi = to_radians(latitude);
    let xi = to_radians(parallax);
    let h = to_radians(hour_angle);
    let delta = to_radians(declination);

    let u = (EARTH_FLATTENING_FACTOR * phi.tan()).atan();
    let x = u.cos() + elevation * phi.cos() / EARTH_EQUATORIAL_RADIUS_METERS;
    let y = EARTH_FLATTENING_FACTOR * u.sin() + elevation * phi.sin() / EARTH_EQUATORIAL_RADIUS_METERS;

    let denominator = delta.cos() - x * xi.sin() * h.cos();
    let delta_alpha = (-x * xi.sin() * h.sin()).atan2(denominator);
    let delta_prime = ((delta.sin() - y * xi.sin()) * delta_alpha.cos()).atan2(denominator);

    (to_degrees(delta_alpha), to_degrees(delta_prime))
}

/// Topocentric Sun right ascension (α'). Not normalized.
pub fn topocentric_right_ascension(right_ascension: f64, right_ascension_parallax: f64) -> f64 {
    right_ascension + right_ascension_parallax
}

/// Topocentric local hour angle (H').
pub fn topocentric_hour_angle(hour_angle: f64, right_ascension_parallax: f64) -> f64 {
    hour_angle - right_ascension_parallax
}

/// Topocentric elevation angle without refraction (e0) in degrees.
pub fn topocentric_elevation(latitude: f64, topocentric_declination: f64, topocentric_hour_angle: f64) -> f64 {
    let phi = to_radians(latitude);
    let delta = to_radians(topocentric_declination);
    let h = to_radians(topocentric_hour_angle);

    to_degrees((phi.sin() * delta.sin() + phi.cos() * delta.cos() * h.cos()).asin())
}

/// Atmospheric refraction correction (Δe) in degrees.
///
/// Zero once the Sun's upper limb is below the refracted horizon, that is when
/// `elevation < -(SUN_RADIUS + horizon_refraction)`.
///
/// # Arguments
/// * `pressure` - Annual average local pressure in millibars
/// * `temperature` - Annual average local temperature in °C
/// * `horizon_refraction` - Atmospheric refraction at sunrise and sunset in degrees
/// * `elevation` - Topocentric elevation angle without refraction (e0) in degrees
pub fn atmospheric_refraction(pressure: f64, temperature: f64, horizon_refraction: f64, elevation: f64) -> f64 {
    if elevation >= -(SUN_RADIUS + horizon_refraction) {
        (pressure / 1010.0) * (283.0 / (273.0 + temperature)) * 1.02
            / (60.0 * to_radians(elevation + 10.3 / (elevation + 5.11)).tan())
    } else {
        0.0
    }
}

/// Topocentric zenith angle (θ) from the corrected elevation angle.
pub fn zenith_angle(elevation_corrected: f64) -> f64 {
    90.0 - elevation_corrected
}

/// Topocentric astronomical azimuth (Γ), measured westward from south, in [0, 360).
pub fn topocentric_azimuth_astronomical(
    topocentric_hour_angle: f64,
    latitude: f64,
    topocentric_declination: f64,
) -> f64 {
    let h = to_radians(topocentric_hour_angle);
    let phi = to_radians(latitude);
    let delta = to_radians(topocentric_declination);

    normalize_degrees_360(to_degrees(
        h.sin().atan2(h.cos() * phi.sin() - delta.tan() * phi.cos()),
    ))
}

/// Topocentric azimuth (Φ) for navigators and solar radiation users, measured
/// eastward from north, in [0, 360).
pub fn topocentric_azimuth(azimuth_astronomical: f64) -> f64 {
    normalize_degrees_360(azimuth_astronomical + 180.0)
}

impl TopocentricPosition {
    /// Applies the observer's location and atmosphere to the geocentric
    /// equatorial position.
    pub fn new(
        equatorial: &EquatorialPosition,
        earth_radius_vector: f64,
        observer: &ObservationInput,
        horizon_refraction: f64,
    ) -> Self {
        let observer_hour_angle = observer_hour_angle(
            equatorial.greenwich_sidereal_time,
            observer.longitude,
            equatorial.right_ascension,
        );
        let equatorial_horizontal_parallax = equatorial_horizontal_parallax(earth_radius_vector);
        let (right_ascension_parallax, declination) = right_ascension_parallax_and_topocentric_declination(
            observer.latitude,
            observer.elevation,
            equatorial_horizontal_parallax,
            observer_hour_angle,
            equatorial.declination,
        );
        let hour_angle = topocentric_hour_angle(observer_hour_angle, right_ascension_parallax);
        let elevation = topocentric_elevation(observer.latitude, declination, hour_angle);
        let refraction_correction =
            atmospheric_refraction(observer.pressure, observer.temperature, horizon_refraction, elevation);
        let elevation_corrected = elevation + refraction_correction;
        let azimuth_astronomical = topocentric_azimuth_astronomical(hour_angle, observer.latitude, declination);

        Self {
            observer_hour_angle,
            equatorial_horizontal_parallax,
            right_ascension_parallax,
            right_ascension: topocentric_right_ascension(equatorial.right_ascension, right_ascension_parallax),
            declination,
            hour_angle,
            elevation,
            refraction_correction,
            elevation_corrected,
            zenith: zenith_angle(elevation_corrected),
            azimuth_astronomical,
            azimuth: topocentric_azimuth(azimuth_astronomical),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::DEFAULT_HORIZON_REFRACTION;
    use approx::assert_abs_diff_eq;

    // Golden, Colorado: 2003-10-17 12:30:30 -07:00
    const LATITUDE: f64 = 39.742_476;
    const LONGITUDE: f64 = -105.1786;
    const ELEVATION: f64 = 1830.14;
    const RADIUS: f64 = 0.996_542_297_353_970_8;
    const SIDEREAL_TIME: f64 = 318.511_909_841_120_7;
    const RIGHT_ASCENSION: f64 = 202.227_407_827_207_26;
    const DECLINATION: f64 = -9.314_340_090_849_106;

    #[test]
    fn parallax_checkpoints() {
        let h = observer_hour_angle(SIDEREAL_TIME, LONGITUDE, RIGHT_ASCENSION);
        assert_abs_diff_eq!(h, 11.105_900, epsilon = 5e-5);

        let xi = equatorial_horizontal_parallax(RADIUS);
        assert_abs_diff_eq!(xi, 0.002_451_253, epsilon = 1e-9);

        let (delta_alpha, delta_prime) =
            right_ascension_parallax_and_topocentric_declination(LATITUDE, ELEVATION, xi, h, DECLINATION);
        assert_abs_diff_eq!(topocentric_right_ascension(RIGHT_ASCENSION, delta_alpha), 202.227_04, epsilon = 5e-6);
        assert_abs_diff_eq!(delta_prime, -9.316_179, epsilon = 5e-7);
        assert_abs_diff_eq!(topocentric_hour_angle(h, delta_alpha), 11.106_29, epsilon = 5e-5);
    }

    #[test]
    fn zenith_and_azimuth_checkpoints() {
        let h_prime = 11.106_270_548_897_603;
        let delta_prime = -9.316_178_699_714_907;

        let e0 = topocentric_elevation(LATITUDE, delta_prime, h_prime);
        assert_abs_diff_eq!(e0, 39.872_045_9, epsilon = 1e-7);

        let refraction = atmospheric_refraction(820.0, 11.0, DEFAULT_HORIZON_REFRACTION, e0);
        assert_abs_diff_eq!(refraction, 0.016_332_07, epsilon = 1e-8);

        assert_abs_diff_eq!(zenith_angle(e0 + refraction), 50.111_62, epsilon = 5e-6);

        let gamma = topocentric_azimuth_astronomical(h_prime, LATITUDE, delta_prime);
        assert_abs_diff_eq!(gamma, 14.340_24, epsilon = 5e-6);
        assert_abs_diff_eq!(topocentric_azimuth(gamma), 194.340_24, epsilon = 5e-6);
    }

    #[test]
    fn refraction_applies_down_to_the_refracted_horizon() {
        let threshold = -(SUN_RADIUS + DEFAULT_HORIZON_REFRACTION);
        assert!(atmospheric_refraction(1013.25, 15.0, DEFAULT_HORIZON_REFRACTION, threshold) > 0.0);
        assert_eq!(atmospheric_refraction(1013.25, 15.0, DEFAULT_HORIZON_REFRACTION, threshold - 1e-9), 0.0);
        assert_eq!(atmospheric_refraction(1013.25, 15.0, DEFAULT_HORIZON_REFRACTION, -20.0), 0.0);
    }

    #[test]
    fn refraction_scales_with_pressure() {
        let sea_level = atmospheric_refraction(1010.0, 10.0, DEFAULT_HORIZON_REFRACTION, 10.0);
        let vacuum = atmospheric_refraction(0.0, 10.0, DEFAULT_HORIZON_REFRACTION, 10.0);
        assert_eq!(vacuum, 0.0);
        assert_abs_diff_eq!(
            atmospheric_refraction(505.0, 10.0, DEFAULT_HORIZON_REFRACTION, 10.0),
            sea_level / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn azimuth_conventions_are_half_a_turn_apart() {
        assert_eq!(topocentric_azimuth(0.0), 180.0);
        assert_eq!(topocentric_azimuth(180.0), 0.0);
        assert_eq!(topocentric_azimuth(270.0), 90.0);
    }
}
