use core::fmt;

use thiserror::Error;

/// Rejection of an [`ObservationInput`](crate::ObservationInput) field.
///
/// Fields are checked in a fixed order and only the first violation is
/// reported. Every variant carries the offending value. A NaN field is never
/// inside its range and is rejected like any other out-of-range value.
///
/// - `Timezone`: must be in [-18, 18] hours
/// - `DeltaUt1`: must be in (-1, 1) seconds
/// - `DeltaT`: when given, must be in [-8000, 8000] seconds
/// - `Latitude`: must be in [-90, 90] degrees
/// - `Longitude`: must be in [-180, 180] degrees
/// - `Elevation`: must be at least -6,500,000 meters
/// - `Temperature`: must be in (-273, 6000) °C
/// - `Pressure`: must be in [0, 5000] millibars
/// - `HorizonRefraction`: when given, must be at most 5 degrees
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidObservationInput {
    #[error("The timezone {0} is invalid. It should be between -18 and 18 hours.")]
    Timezone(f64),

    #[error("The delta UT1 {0} is invalid. It should be strictly between -1 and 1 seconds.")]
    DeltaUt1(f64),

    #[error("The delta T {0} is invalid. It should be between -8000 and 8000 seconds.")]
    DeltaT(f64),

    #[error("The latitude {0} is invalid. It should be between -90 and 90 degrees.")]
    Latitude(f64),

    #[error("The longitude {0} is invalid. It should be between -180 and 180 degrees.")]
    Longitude(f64),

    #[error("The elevation {0} is invalid. It should be at least -6500000 meters.")]
    Elevation(f64),

    #[error("The temperature {0} is invalid. It should be strictly between -273 and 6000 °C.")]
    Temperature(f64),

    #[error("The pressure {0} is invalid. It should be between 0 and 5000 millibars.")]
    Pressure(f64),

    #[error("The refraction at the horizon {0} is invalid. It should be at most 5 degrees.")]
    HorizonRefraction(f64),
}

/// Input field named by an [`InvalidObservationInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservationField {
    Timezone,
    DeltaUt1,
    DeltaT,
    Latitude,
    Longitude,
    Elevation,
    Temperature,
    Pressure,
    HorizonRefraction,
}

impl InvalidObservationInput {
    /// The field that failed validation.
    pub fn field(&self) -> ObservationField {
        match self {
            Self::Timezone(_) => ObservationField::Timezone,
            Self::DeltaUt1(_) => ObservationField::DeltaUt1,
            Self::DeltaT(_) => ObservationField::DeltaT,
            Self::Latitude(_) => ObservationField::Latitude,
            Self::Longitude(_) => ObservationField::Longitude,
            Self::Elevation(_) => ObservationField::Elevation,
            Self::Temperature(_) => ObservationField::Temperature,
            Self::Pressure(_) => ObservationField::Pressure,
            Self::HorizonRefraction(_) => ObservationField::HorizonRefraction,
        }
    }

    /// The rejected value.
    pub fn value(&self) -> f64 {
        match *self {
            Self::Timezone(v)
            | Self::DeltaUt1(v)
            | Self::DeltaT(v)
            | Self::Latitude(v)
            | Self::Longitude(v)
            | Self::Elevation(v)
            | Self::Temperature(v)
            | Self::Pressure(v)
            | Self::HorizonRefraction(v) => v,
        }
    }
}

impl fmt::Display for ObservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Timezone => "timezone",
            Self::DeltaUt1 => "delta_ut1",
            Self::DeltaT => "delta_t",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Elevation => "elevation",
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
            Self::HorizonRefraction => "horizon_refraction",
        };
        f.write_str(name)
    }
}
