//! Day, night and twilight classification from the solar zenith and azimuth.

use core::fmt;

use chrono::NaiveDateTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::compute_solar_position;
use crate::observation::ObservationInput;

/// Sun depression below the horizon, in degrees, where twilight ends for
/// [`classify_part_of_day`]
pub const TWILIGHT_ELEVATION: f64 = 12.0;

/// Zenith angle of the geometric horizon
const HORIZON_ZENITH: f64 = 90.0;

/// Coarse part of the day as seen by an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartOfDay {
    /// The Sun is above the horizon.
    Day,
    /// Twilight with the Sun in the eastern half of the sky.
    Dawn,
    /// Twilight with the Sun in the western half of the sky.
    Dusk,
    /// The Sun is below the twilight limit.
    Night,
    /// The observation could not be evaluated.
    Unknown,
}

/// Twilight definitions by how far the Sun is below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Twilight {
    /// 6° below the horizon
    Civil,
    /// 12° below the horizon
    #[default]
    Nautical,
    /// 18° below the horizon
    Astronomical,
}

impl Twilight {
    /// Depression of the Sun below the horizon in degrees.
    pub fn elevation(self) -> f64 {
        match self {
            Self::Civil => 6.0,
            Self::Nautical => TWILIGHT_ELEVATION,
            Self::Astronomical => 18.0,
        }
    }
}

impl PartOfDay {
    /// Classifies a topocentric zenith angle and astronomical azimuth (westward
    /// from south).
    ///
    /// Below 90° zenith it is day; at or beyond `90 + twilight` it is night. In
    /// between, an astronomical azimuth above 180° puts the Sun in the east
    /// (dawn), anything else in the west (dusk).
    ///
    /// ```
    /// use solar_part_of_day::{PartOfDay, Twilight};
    ///
    /// assert_eq!(PartOfDay::from_angles(45.0, 10.0, Twilight::Nautical), PartOfDay::Day);
    /// assert_eq!(PartOfDay::from_angles(95.0, 200.0, Twilight::Nautical), PartOfDay::Dawn);
    /// assert_eq!(PartOfDay::from_angles(95.0, 160.0, Twilight::Nautical), PartOfDay::Dusk);
    /// assert_eq!(PartOfDay::from_angles(102.0, 0.0, Twilight::Nautical), PartOfDay::Night);
    /// ```
    pub fn from_angles(zenith: f64, azimuth_astronomical: f64, twilight: Twilight) -> Self {
        if zenith < HORIZON_ZENITH {
            Self::Day
        } else if zenith >= HORIZON_ZENITH + twilight.elevation() {
            Self::Night
        } else if azimuth_astronomical > 180.0 {
            Self::Dawn
        } else {
            Self::Dusk
        }
    }
}

impl fmt::Display for PartOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Day => "day",
            Self::Dawn => "dawn",
            Self::Dusk => "dusk",
            Self::Night => "night",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Classifies the part of day at sea level under average conditions.
///
/// Never fails: an out-of-range argument yields [`PartOfDay::Unknown`].
///
/// ```
/// use chrono::NaiveDate;
/// use solar_part_of_day::{classify_part_of_day, PartOfDay};
///
/// let noon = NaiveDate::from_ymd_opt(2016, 6, 10).unwrap().and_hms_opt(12, 30, 0).unwrap();
/// assert_eq!(classify_part_of_day(&noon, 4.0, 55.7558, 37.6173), PartOfDay::Day);
/// assert_eq!(classify_part_of_day(&noon, 4.0, 100.0, 37.6173), PartOfDay::Unknown);
/// ```
pub fn classify_part_of_day(timestamp: &NaiveDateTime, timezone: f64, latitude: f64, longitude: f64) -> PartOfDay {
    classify_observation(&ObservationInput::new(*timestamp, timezone, latitude, longitude))
}

/// Classifies an observation using nautical twilight.
pub fn classify_observation(input: &ObservationInput) -> PartOfDay {
    classify_observation_with_twilight(input, Twilight::Nautical)
}

/// Classifies an observation with the given twilight limit.
pub fn classify_observation_with_twilight(input: &ObservationInput, twilight: Twilight) -> PartOfDay {
    match compute_solar_position(input) {
        Ok(position) => PartOfDay::from_angles(position.zenith(), position.azimuth_astronomical(), twilight),
        Err(error) => {
            log::debug!("part of day unknown for {}: {}", error.field(), error);
            PartOfDay::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_half_open() {
        assert_eq!(PartOfDay::from_angles(89.999, 0.0, Twilight::Nautical), PartOfDay::Day);
        assert_eq!(PartOfDay::from_angles(90.0, 0.0, Twilight::Nautical), PartOfDay::Dusk);
        assert_eq!(PartOfDay::from_angles(101.999, 270.0, Twilight::Nautical), PartOfDay::Dawn);
        assert_eq!(PartOfDay::from_angles(102.0, 270.0, Twilight::Nautical), PartOfDay::Night);
    }

    #[test]
    fn azimuth_of_exactly_south_is_dusk() {
        assert_eq!(PartOfDay::from_angles(95.0, 180.0, Twilight::Nautical), PartOfDay::Dusk);
        assert_eq!(PartOfDay::from_angles(95.0, 180.000_001, Twilight::Nautical), PartOfDay::Dawn);
    }

    #[test]
    fn twilight_limit_moves_the_night_boundary() {
        assert_eq!(PartOfDay::from_angles(97.0, 90.0, Twilight::Civil), PartOfDay::Night);
        assert_eq!(PartOfDay::from_angles(97.0, 90.0, Twilight::Nautical), PartOfDay::Dusk);
        assert_eq!(PartOfDay::from_angles(105.0, 90.0, Twilight::Astronomical), PartOfDay::Dusk);
        assert_eq!(PartOfDay::from_angles(108.0, 90.0, Twilight::Astronomical), PartOfDay::Night);
    }

    #[test]
    fn nautical_is_the_default_twilight() {
        assert_eq!(Twilight::default(), Twilight::Nautical);
        assert_eq!(Twilight::default().elevation(), TWILIGHT_ELEVATION);
    }
}
