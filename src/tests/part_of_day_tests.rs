extern crate std;

use chrono::TimeDelta;

use super::at;
use crate::*;

fn sofia(timestamp: chrono::NaiveDateTime) -> ObservationInput {
    ObservationInput::new(timestamp, 3.0, 42.722_752_53, 23.299_295_6)
        .with_delta_t(67.0)
        .with_elevation(540.0)
        .with_temperature(10.0)
        .with_pressure(940.0)
}

#[test]
fn full_day_sweep_agrees_with_angles() {
    let twilight_zenith = 90.0 + TWILIGHT_ELEVATION;
    let end = at(2016, 6, 29, 0, 0, 0);
    let mut timestamp = at(2016, 6, 28, 0, 0, 0);
    let mut seen = [false; 4];

    while timestamp <= end {
        let input = sofia(timestamp);
        let position = compute_solar_position(&input).unwrap();
        let zenith = position.zenith();
        let azimuth = position.azimuth_astronomical();

        assert!((0.0..=180.0).contains(&zenith), "{timestamp}: zenith {zenith}");
        assert!((0.0..360.0).contains(&azimuth), "{timestamp}: azimuth {azimuth}");

        match classify_observation(&input) {
            PartOfDay::Day => {
                assert!(zenith < 90.0, "{timestamp}");
                seen[0] = true;
            }
            PartOfDay::Dawn => {
                assert!(zenith >= 90.0 && zenith < twilight_zenith, "{timestamp}");
                assert!(azimuth > 180.0, "{timestamp}");
                seen[1] = true;
            }
            PartOfDay::Dusk => {
                assert!(zenith >= 90.0 && zenith < twilight_zenith, "{timestamp}");
                assert!(azimuth <= 180.0, "{timestamp}");
                seen[2] = true;
            }
            PartOfDay::Night => {
                assert!(zenith >= twilight_zenith, "{timestamp}");
                seen[3] = true;
            }
            PartOfDay::Unknown => std::panic!("{timestamp}: valid input classified as unknown"),
        }

        timestamp += TimeDelta::minutes(10);
    }

    assert_eq!(seen, [true; 4], "a midsummer day in Sofia has all four parts");
}

#[test]
fn sweep_order_through_the_day() {
    let at_hour = |hour| classify_observation(&sofia(at(2016, 6, 28, hour, 0, 0)));
    assert_eq!(at_hour(1), PartOfDay::Night);
    assert_eq!(at_hour(12), PartOfDay::Day);
    assert_eq!(at_hour(23), PartOfDay::Night);
}

#[test]
fn minimal_form_uses_sea_level_defaults() {
    let timestamp = at(2016, 6, 28, 12, 0, 0);
    let minimal = classify_part_of_day(&timestamp, 3.0, 42.722_752_53, 23.299_295_6);
    let explicit = classify_observation(&ObservationInput::new(timestamp, 3.0, 42.722_752_53, 23.299_295_6));
    assert_eq!(minimal, explicit);
    assert_eq!(minimal, PartOfDay::Day);
}

#[test]
fn twilight_choice_changes_evening_classification() {
    // Sun about 7° below the horizon: past civil twilight, inside nautical
    let input = ObservationInput::new(at(2016, 6, 10, 23, 30, 0), 4.0, 55.7558, 37.6173)
        .with_delta_t(67.0)
        .with_elevation(151.0)
        .with_temperature(5.8);
    assert_eq!(classify_observation_with_twilight(&input, Twilight::Civil), PartOfDay::Night);
    assert_eq!(classify_observation_with_twilight(&input, Twilight::Nautical), PartOfDay::Dusk);
    assert_eq!(classify_observation_with_twilight(&input, Twilight::Astronomical), PartOfDay::Dusk);
}
