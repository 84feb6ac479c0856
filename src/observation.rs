//! The observation record and its validation.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InvalidObservationInput;

/// Annual average local temperature assumed by [`ObservationInput::new`], °C
pub const DEFAULT_TEMPERATURE: f64 = 15.0;

/// Annual average local pressure assumed by [`ObservationInput::new`], millibars
pub const DEFAULT_PRESSURE: f64 = 1013.25;

/// Atmospheric refraction at sunrise and sunset used when none is given, degrees
pub const DEFAULT_HORIZON_REFRACTION: f64 = 0.5667;

const MAX_TIMEZONE_HOURS: f64 = 18.0;
const MAX_DELTA_UT1_SECONDS: f64 = 1.0;
const MAX_DELTA_T_SECONDS: f64 = 8000.0;
const MIN_ELEVATION_METERS: f64 = -6_500_000.0;
const MIN_TEMPERATURE: f64 = -273.0;
const MAX_TEMPERATURE: f64 = 6000.0;
const MAX_PRESSURE: f64 = 5000.0;
const MAX_HORIZON_REFRACTION: f64 = 5.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Open interval test; false for NaN.
fn strictly_between(value: f64, min: f64, max: f64) -> bool {
    value > min && value < max
}

/// Everything needed to locate the Sun for one observer at one instant.
///
/// `timestamp` is a local civil time; `timezone` is its offset from UTC in
/// hours. Use [`ObservationInput::new`] for sea-level defaults and the `with_*`
/// methods to describe the site more precisely.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationInput {
    /// Local calendar date and time
    pub timestamp: NaiveDateTime,
    /// Offset from UTC in hours, negative west of Greenwich
    pub timezone: f64,
    /// UT1 − UTC in seconds
    pub delta_ut1: f64,
    /// TT − UT1 in seconds; estimated from the date when absent
    pub delta_t: Option<f64>,
    /// Degrees, positive north
    pub latitude: f64,
    /// Degrees, positive east
    pub longitude: f64,
    /// Meters above sea level
    pub elevation: f64,
    /// Annual average local temperature in °C
    pub temperature: f64,
    /// Annual average local pressure in millibars
    pub pressure: f64,
    /// Atmospheric refraction at sunrise and sunset in degrees; 0.5667 when absent
    pub horizon_refraction: Option<f64>,
}

impl ObservationInput {
    /// An observation at sea level with average atmospheric conditions.
    pub fn new(timestamp: NaiveDateTime, timezone: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            timestamp,
            timezone,
            delta_ut1: 0.0,
            delta_t: None,
            latitude,
            longitude,
            elevation: 0.0,
            temperature: DEFAULT_TEMPERATURE,
            pressure: DEFAULT_PRESSURE,
            horizon_refraction: None,
        }
    }

    /// Takes the local time and the UTC offset from a zoned timestamp.
    ///
    /// ```
    /// use chrono::{FixedOffset, TimeZone};
    /// use solar_part_of_day::ObservationInput;
    ///
    /// let offset = FixedOffset::west_opt(7 * 3600 + 1800).unwrap();
    /// let zoned = offset.with_ymd_and_hms(2003, 10, 17, 12, 30, 30).unwrap();
    /// let input = ObservationInput::from_zoned(&zoned, 39.742476, -105.1786);
    /// assert_eq!(input.timezone, -7.5);
    /// ```
    pub fn from_zoned(timestamp: &DateTime<FixedOffset>, latitude: f64, longitude: f64) -> Self {
        let offset_seconds = timestamp.offset().local_minus_utc();
        Self::new(
            timestamp.naive_local(),
            f64::from(offset_seconds) / SECONDS_PER_HOUR,
            latitude,
            longitude,
        )
    }

    /// Sets UT1 − UTC in seconds.
    pub fn with_delta_ut1(mut self, delta_ut1: f64) -> Self {
        self.delta_ut1 = delta_ut1;
        self
    }

    /// Sets TT − UT1 in seconds instead of estimating it.
    pub fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = Some(delta_t);
        self
    }

    /// Sets the observer elevation in meters.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Sets the annual average temperature in °C.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the annual average pressure in millibars.
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = pressure;
        self
    }

    /// Sets the atmospheric refraction at the horizon in degrees.
    pub fn with_horizon_refraction(mut self, horizon_refraction: f64) -> Self {
        self.horizon_refraction = Some(horizon_refraction);
        self
    }

    /// The horizon refraction to apply, falling back to [`DEFAULT_HORIZON_REFRACTION`].
    pub fn horizon_refraction_or_default(&self) -> f64 {
        self.horizon_refraction.unwrap_or(DEFAULT_HORIZON_REFRACTION)
    }

    /// Checks every field against its physical bounds.
    ///
    /// Fields are checked in declaration order of the error variants and the
    /// first violation is returned. Optional fields are only checked when present.
    pub fn validate(&self) -> Result<(), InvalidObservationInput> {
        if !(-MAX_TIMEZONE_HOURS..=MAX_TIMEZONE_HOURS).contains(&self.timezone) {
            return Err(InvalidObservationInput::Timezone(self.timezone));
        }
        if !strictly_between(self.delta_ut1, -MAX_DELTA_UT1_SECONDS, MAX_DELTA_UT1_SECONDS) {
            return Err(InvalidObservationInput::DeltaUt1(self.delta_ut1));
        }
        if let Some(delta_t) = self.delta_t {
            if !(-MAX_DELTA_T_SECONDS..=MAX_DELTA_T_SECONDS).contains(&delta_t) {
                return Err(InvalidObservationInput::DeltaT(delta_t));
            }
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(InvalidObservationInput::Latitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(InvalidObservationInput::Longitude(self.longitude));
        }
        if !(MIN_ELEVATION_METERS..).contains(&self.elevation) {
            return Err(InvalidObservationInput::Elevation(self.elevation));
        }
        if !strictly_between(self.temperature, MIN_TEMPERATURE, MAX_TEMPERATURE) {
            return Err(InvalidObservationInput::Temperature(self.temperature));
        }
        if !(0.0..=MAX_PRESSURE).contains(&self.pressure) {
            return Err(InvalidObservationInput::Pressure(self.pressure));
        }
        if let Some(refraction) = self.horizon_refraction {
            if !(..=MAX_HORIZON_REFRACTION).contains(&refraction) {
                return Err(InvalidObservationInput::HorizonRefraction(refraction));
            }
        }
        Ok(())
    }
}
