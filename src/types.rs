//! Records produced by each stage of the solar position reduction.
//!
//! Every record is a plain `Copy` value built once by its stage and handed to the
//! next one; [`SolarPosition`] keeps all of them so individual checkpoints of the
//! algorithm can be inspected. All angles are in degrees.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Julian date and related time scales.
///
/// All values are relative to the J2000.0 epoch (JD 2451545.0) where applicable.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JulianDate {
    /// Julian Day (UT)
    pub jd: f64,
    /// Julian Century from J2000.0 (UT)
    pub jc: f64,
    /// Julian Ephemeris Day (TT)
    pub jde: f64,
    /// Julian Ephemeris Century from J2000.0 (TT)
    pub jce: f64,
    /// Julian Ephemeris Millennium from J2000.0 (TT)
    pub jme: f64,
    /// ΔT (TT − UT) in seconds that was applied, either given or estimated
    pub delta_t: f64,
}

/// Earth position relative to the Sun.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeliocentricPosition {
    /// Heliocentric longitude (L), in [0, 360)
    pub longitude: f64,
    /// Heliocentric latitude (B)
    pub latitude: f64,
    /// Earth radius vector (R) in astronomical units
    pub radius: f64,
}

/// Sun position relative to the Earth's center, in ecliptic coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeocentricPosition {
    /// Geocentric longitude (Θ), in [0, 360)
    pub longitude: f64,
    /// Geocentric latitude (β)
    pub latitude: f64,
}

/// The five fundamental arguments of the nutation series.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FundamentalArguments {
    /// Mean elongation of the Moon from the Sun (X0)
    pub mean_elongation_moon_sun: f64,
    /// Mean anomaly of the Sun (X1)
    pub mean_anomaly_sun: f64,
    /// Mean anomaly of the Moon (X2)
    pub mean_anomaly_moon: f64,
    /// Moon's argument of latitude (X3)
    pub argument_latitude_moon: f64,
    /// Longitude of the ascending node of the Moon's mean orbit (X4)
    pub ascending_longitude_moon: f64,
}

impl FundamentalArguments {
    /// The arguments in series order, X0 through X4.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.mean_elongation_moon_sun,
            self.mean_anomaly_sun,
            self.mean_anomaly_moon,
            self.argument_latitude_moon,
            self.ascending_longitude_moon,
        ]
    }
}

/// Nutation in longitude and obliquity.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nutation {
    /// Nutation in longitude (Δψ)
    pub longitude: f64,
    /// Nutation in obliquity (Δε)
    pub obliquity: f64,
}

/// Obliquity of the ecliptic.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticObliquity {
    /// Mean obliquity (ε0) in **arcseconds**
    pub mean: f64,
    /// True obliquity (ε) in degrees
    pub true_obliquity: f64,
}

/// Apparent geocentric position of the Sun in equatorial coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialPosition {
    /// Aberration correction (Δτ)
    pub aberration_correction: f64,
    /// Apparent Sun longitude (λ)
    pub apparent_sun_longitude: f64,
    /// Greenwich mean sidereal time (ν0), in [0, 360)
    pub greenwich_mean_sidereal_time: f64,
    /// Greenwich apparent sidereal time (ν)
    pub greenwich_sidereal_time: f64,
    /// Geocentric right ascension (α), in [0, 360)
    pub right_ascension: f64,
    /// Geocentric declination (δ)
    pub declination: f64,
}

/// Position of the Sun as seen by the observer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopocentricPosition {
    /// Observer local hour angle (H), in [0, 360)
    pub observer_hour_angle: f64,
    /// Equatorial horizontal parallax of the Sun (ξ)
    pub equatorial_horizontal_parallax: f64,
    /// Parallax in the Sun right ascension (Δα)
    pub right_ascension_parallax: f64,
    /// Topocentric right ascension (α')
    pub right_ascension: f64,
    /// Topocentric declination (δ')
    pub declination: f64,
    /// Topocentric local hour angle (H')
    pub hour_angle: f64,
    /// Elevation angle without refraction (e0)
    pub elevation: f64,
    /// Atmospheric refraction correction (Δe)
    pub refraction_correction: f64,
    /// Elevation angle with refraction (e)
    pub elevation_corrected: f64,
    /// Topocentric zenith angle (θ), within [0, 180] for physically realistic
    /// atmospheres. Temperatures near absolute zero blow up the refraction term.
    pub zenith: f64,
    /// Astronomical azimuth (Γ), westward from south, in [0, 360)
    pub azimuth_astronomical: f64,
    /// Azimuth (Φ), eastward from north, in [0, 360)
    pub azimuth: f64,
}

/// Output of [`compute_solar_position`](crate::compute_solar_position).
///
/// Holds every intermediate value of the reduction, grouped by stage, together
/// with the resolved horizon refraction.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use solar_part_of_day::{compute_solar_position, ObservationInput};
///
/// let timestamp = NaiveDate::from_ymd_opt(2003, 10, 17).unwrap().and_hms_opt(12, 30, 30).unwrap();
/// let input = ObservationInput::new(timestamp, -7.0, 39.742476, -105.1786)
///     .with_delta_t(67.0)
///     .with_elevation(1830.14)
///     .with_temperature(11.0)
///     .with_pressure(820.0);
///
/// let position = compute_solar_position(&input).unwrap();
/// assert!((position.zenith() - 50.11162).abs() < 5e-6);
/// assert!((position.azimuth() - 194.34024).abs() < 5e-6);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarPosition {
    /// Julian time scales and the ΔT applied
    pub time: JulianDate,
    /// Earth heliocentric longitude, latitude and radius vector
    pub heliocentric: HeliocentricPosition,
    /// Geocentric ecliptic longitude and latitude of the Sun
    pub geocentric: GeocentricPosition,
    /// Arguments of the nutation series
    pub fundamental_arguments: FundamentalArguments,
    /// Nutation in longitude and obliquity
    pub nutation: Nutation,
    /// Mean and true obliquity of the ecliptic
    pub obliquity: EclipticObliquity,
    /// Apparent geocentric right ascension, declination and sidereal time
    pub equatorial: EquatorialPosition,
    /// Observer-relative coordinates, zenith and azimuth
    pub topocentric: TopocentricPosition,
    /// Atmospheric refraction at the horizon that was applied, either given or the default
    pub horizon_refraction: f64,
}

impl SolarPosition {
    /// Topocentric zenith angle in degrees (0 = overhead, 90 = horizon).
    pub fn zenith(&self) -> f64 {
        self.topocentric.zenith
    }

    /// Topocentric azimuth in degrees, eastward from north.
    pub fn azimuth(&self) -> f64 {
        self.topocentric.azimuth
    }

    /// Astronomical topocentric azimuth in degrees, westward from south.
    pub fn azimuth_astronomical(&self) -> f64 {
        self.topocentric.azimuth_astronomical
    }

    /// Refraction-corrected elevation angle in degrees.
    pub fn elevation(&self) -> f64 {
        self.topocentric.elevation_corrected
    }
}
