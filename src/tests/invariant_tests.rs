//! Property tests over realistic observers and dates.

extern crate std;

use chrono::{NaiveDateTime, TimeDelta};
use proptest::prelude::*;

use super::at;
use crate::*;

/// Two centuries of seconds starting at 1900-01-01T00:00:00
const SPAN_SECONDS: i64 = 200 * 365 * 86_400;

fn timestamp_from(offset_seconds: i64) -> NaiveDateTime {
    at(1900, 1, 1, 0, 0, 0) + TimeDelta::seconds(offset_seconds)
}

prop_compose! {
    fn observation()(
        offset in 0..SPAN_SECONDS,
        timezone in -12.0_f64..=14.0,
        latitude in -90.0_f64..=90.0,
        longitude in -180.0_f64..=180.0,
        elevation in -400.0_f64..=8_000.0,
        temperature in -90.0_f64..=60.0,
        pressure in 0.0_f64..=1_100.0,
    ) -> ObservationInput {
        ObservationInput::new(timestamp_from(offset), timezone, latitude, longitude)
            .with_elevation(elevation)
            .with_temperature(temperature)
            .with_pressure(pressure)
    }
}

proptest! {
    #[test]
    fn zenith_and_azimuth_stay_in_range(input in observation()) {
        let position = compute_solar_position(&input).unwrap();
        prop_assert!((0.0..=180.0).contains(&position.zenith()), "zenith {}", position.zenith());
        prop_assert!((0.0..360.0).contains(&position.azimuth()), "azimuth {}", position.azimuth());
        prop_assert!((0.0..360.0).contains(&position.azimuth_astronomical()));
    }

    #[test]
    fn azimuth_conventions_differ_by_half_a_turn(input in observation()) {
        let position = compute_solar_position(&input).unwrap();
        prop_assert_eq!(position.azimuth(), normalize_degrees_360(position.azimuth_astronomical() + 180.0));
    }

    #[test]
    fn zenith_complements_corrected_elevation(input in observation()) {
        let topocentric = compute_solar_position(&input).unwrap().topocentric;
        prop_assert_eq!(topocentric.zenith, 90.0 - topocentric.elevation_corrected);
        prop_assert_eq!(
            topocentric.elevation_corrected,
            topocentric.elevation + topocentric.refraction_correction
        );
    }

    #[test]
    fn no_refraction_below_the_refracted_horizon(input in observation()) {
        let observed = compute_solar_position(&input).unwrap().topocentric;
        if observed.elevation < -(crate::topocentric::SUN_RADIUS + DEFAULT_HORIZON_REFRACTION) {
            prop_assert_eq!(observed.refraction_correction, 0.0);
        }
    }

    #[test]
    fn angles_stay_normalized(input in observation()) {
        let position = compute_solar_position(&input).unwrap();
        for angle in [
            position.heliocentric.longitude,
            position.geocentric.longitude,
            position.equatorial.greenwich_mean_sidereal_time,
            position.equatorial.right_ascension,
            position.topocentric.observer_hour_angle,
        ] {
            prop_assert!((0.0..360.0).contains(&angle), "angle {}", angle);
        }
    }

    #[test]
    fn julian_day_increases_with_time(offset in 0..SPAN_SECONDS, step in 1_i64..86_400) {
        let earlier = julian_day(&timestamp_from(offset), 0.0, 0.0);
        let later = julian_day(&timestamp_from(offset + step), 0.0, 0.0);
        prop_assert!(later > earlier);
    }

    #[test]
    fn classification_matches_angles(input in observation()) {
        let position = compute_solar_position(&input).unwrap();
        let expected = PartOfDay::from_angles(position.zenith(), position.azimuth_astronomical(), Twilight::Nautical);
        prop_assert_eq!(classify_observation(&input), expected);
    }
}
