//! Earth heliocentric position from the periodic term series, and its geocentric
//! counterpart.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{normalize_degrees_360, to_degrees};
use crate::terms::{PeriodicTerm, B_TERMS, L_TERMS, R_TERMS};
use crate::types::{GeocentricPosition, HeliocentricPosition};

/// Scaling factor of the tabulated amplitudes (10^8)
const EARTH_POSITION_SCALE_FACTOR: f64 = 1.0e8;

/// Sums one bucket of periodic terms, `Σ A·cos(B + C·JME)`.
pub(crate) fn sum_periodic_terms(terms: &[PeriodicTerm], jme: f64) -> f64 {
    terms
        .iter()
        .fold(0.0, |sum, term| sum + term.amplitude * (term.phase + term.frequency * jme).cos())
}

/// Combines the bucket sums of a term family as `Σ bucket[i]·JME^i / 10^8`.
fn evaluate_series(family: &[&[PeriodicTerm]], jme: f64) -> f64 {
    let sum = family
        .iter()
        .enumerate()
        .fold(0.0, |total, (power, terms)| total + sum_periodic_terms(terms, jme) * jme.powi(power as i32));
    sum / EARTH_POSITION_SCALE_FACTOR
}

/// Earth heliocentric longitude in degrees, in [0, 360).
pub fn earth_heliocentric_longitude(jme: f64) -> f64 {
    normalize_degrees_360(to_degrees(evaluate_series(&L_TERMS, jme)))
}

/// Earth heliocentric latitude in degrees.
pub fn earth_heliocentric_latitude(jme: f64) -> f64 {
    to_degrees(evaluate_series(&B_TERMS, jme))
}

/// Earth radius vector (Earth–Sun distance) in astronomical units.
pub fn earth_radius_vector(jme: f64) -> f64 {
    evaluate_series(&R_TERMS, jme)
}

/// Geocentric longitude: the heliocentric longitude seen from the opposite side.
///
/// The input is already in [0, 360), so one conditional subtraction keeps the
/// result in range.
pub fn geocentric_longitude(heliocentric_longitude: f64) -> f64 {
    let mut geocentric = heliocentric_longitude + 180.0;
    if geocentric >= 360.0 {
        geocentric -= 360.0;
    }
    geocentric
}

/// Geocentric latitude, the negated heliocentric latitude.
pub fn geocentric_latitude(heliocentric_latitude: f64) -> f64 {
    -heliocentric_latitude
}

impl HeliocentricPosition {
    /// Evaluates the L, B and R series at the given Julian Ephemeris Millennium.
    pub fn new(jme: f64) -> Self {
        Self {
            longitude: earth_heliocentric_longitude(jme),
            latitude: earth_heliocentric_latitude(jme),
            radius: earth_radius_vector(jme),
        }
    }
}

impl From<&HeliocentricPosition> for GeocentricPosition {
    fn from(heliocentric: &HeliocentricPosition) -> Self {
        Self {
            longitude: geocentric_longitude(heliocentric.longitude),
            latitude: geocentric_latitude(heliocentric.latitude),
        }
    }
}
