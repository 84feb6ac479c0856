//! # Solar Part of Day
//!
//! Topocentric solar position after the NREL Solar Position Algorithm (Reda &
//! Andreas, 2004), and a coarse day / dawn / dusk / night classifier built on it.
//!
//! The reduction runs in fixed stages, each with its own module and result
//! record: Julian time scales, Earth heliocentric position, nutation and
//! obliquity, geocentric equatorial coordinates, then parallax, refraction,
//! zenith and azimuth for the observer. The returned [`SolarPosition`] keeps
//! every intermediate value. Angles are in degrees throughout.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use solar_part_of_day::{classify_part_of_day, compute_solar_position, ObservationInput, PartOfDay};
//!
//! let timestamp = NaiveDate::from_ymd_opt(2016, 6, 10).unwrap().and_hms_opt(12, 30, 0).unwrap();
//!
//! // Moscow, local time UTC+4
//! let input = ObservationInput::new(timestamp, 4.0, 55.7558, 37.6173)
//!     .with_delta_t(67.0)
//!     .with_elevation(151.0)
//!     .with_temperature(5.8);
//!
//! let position = compute_solar_position(&input).unwrap();
//! println!("Zenith: {:.4}°", position.zenith());
//! println!("Azimuth: {:.4}°", position.azimuth());
//!
//! assert_eq!(classify_part_of_day(&timestamp, 4.0, 55.7558, 37.6173), PartOfDay::Day);
//! ```
#![no_std]

pub mod equatorial;
mod error;
pub mod heliocentric;
mod math;
pub mod nutation;
mod observation;
mod part_of_day;
pub mod terms;
mod time;
pub mod topocentric;
mod types;


pub use crate::error::{InvalidObservationInput, ObservationField};
pub use crate::math::{eval_cubic, normalize_degrees_360, to_degrees, to_radians};
pub use crate::observation::{
    ObservationInput, DEFAULT_HORIZON_REFRACTION, DEFAULT_PRESSURE, DEFAULT_TEMPERATURE,
};
pub use crate::part_of_day::{
    classify_observation, classify_observation_with_twilight, classify_part_of_day, PartOfDay, Twilight,
    TWILIGHT_ELEVATION,
};
pub use crate::time::{
    estimate_delta_t, julian_century, julian_day, julian_ephemeris_century, julian_ephemeris_day,
    julian_ephemeris_millennium,
};
pub use crate::types::{
    EclipticObliquity, EquatorialPosition, FundamentalArguments, GeocentricPosition, HeliocentricPosition,
    JulianDate, Nutation, SolarPosition, TopocentricPosition,
};

/// Computes the topocentric position of the Sun for one observation.
///
/// The input is validated first; on failure nothing is computed and the first
/// offending field is reported. Otherwise the stages run in order and every
/// intermediate result is returned.
///
/// # Errors
///
/// Returns [`InvalidObservationInput`] when a field is outside its physical
/// range, see [`ObservationInput::validate`].
pub fn compute_solar_position(input: &ObservationInput) -> Result<SolarPosition, InvalidObservationInput> {
    if let Err(error) = input.validate() {
        log::debug!("rejected observation at {}: {}", input.timestamp, error);
        return Err(error);
    }

    let horizon_refraction = input.horizon_refraction_or_default();

    let time = JulianDate::new(&input.timestamp, input.timezone, input.delta_ut1, input.delta_t);
    let heliocentric = HeliocentricPosition::new(time.jme);
    let geocentric = GeocentricPosition::from(&heliocentric);
    let fundamental_arguments = FundamentalArguments::new(time.jce);
    let nutation = nutation::nutation_longitude_and_obliquity(time.jce, &fundamental_arguments);
    let obliquity = EclipticObliquity::new(time.jme, &nutation);
    let equatorial = EquatorialPosition::new(&time, &heliocentric, &geocentric, &nutation, &obliquity);
    let topocentric = TopocentricPosition::new(&equatorial, heliocentric.radius, input, horizon_refraction);

    log::trace!(
        "solar position at {} (jd {}): zenith {}, azimuth {}",
        input.timestamp,
        time.jd,
        topocentric.zenith,
        topocentric.azimuth
    );

    Ok(SolarPosition {
        time,
        heliocentric,
        geocentric,
        fundamental_arguments,
        nutation,
        obliquity,
        equatorial,
        topocentric,
        horizon_refraction,
    })
}
