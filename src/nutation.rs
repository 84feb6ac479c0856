//! Nutation in longitude and obliquity, and the obliquity of the ecliptic.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{eval_cubic, polynomial, to_radians};
use crate::terms::NUTATION_TERMS;
use crate::types::{EclipticObliquity, FundamentalArguments, Nutation};

/// Series coefficients are in 0.0001 arcseconds; dividing by this yields degrees
const NUTATION_SCALE_FACTOR: f64 = 36_000_000.0;

const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

/// Mean obliquity polynomial in U = JME/10, arcseconds, lowest power first
const ECLIPTIC_MEAN_OBLIQUITY: [f64; 11] = [
    84381.448, -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];

/// Mean elongation of the Moon from the Sun (X0), degrees.
pub fn mean_elongation_moon_sun(jce: f64) -> f64 {
    eval_cubic(1.0 / 189_474.0, -0.0019142, 445_267.111_48, 297.85036, jce)
}

/// Mean anomaly of the Sun (X1), degrees.
pub fn mean_anomaly_sun(jce: f64) -> f64 {
    eval_cubic(-1.0 / 300_000.0, -0.0001603, 35_999.050_34, 357.52772, jce)
}

/// Mean anomaly of the Moon (X2), degrees.
pub fn mean_anomaly_moon(jce: f64) -> f64 {
    eval_cubic(1.0 / 56_250.0, 0.0086972, 477_198.867_398, 134.96298, jce)
}

/// Moon's argument of latitude (X3), degrees.
pub fn argument_latitude_moon(jce: f64) -> f64 {
    eval_cubic(1.0 / 327_270.0, -0.0036825, 483_202.017_538, 93.27191, jce)
}

/// Longitude of the ascending node of the Moon's mean orbit (X4), degrees.
pub fn ascending_longitude_moon(jce: f64) -> f64 {
    eval_cubic(1.0 / 450_000.0, 0.0020708, -1934.136_261, 125.04452, jce)
}

impl FundamentalArguments {
    /// Evaluates the five arguments at the given Julian Ephemeris Century.
    pub fn new(jce: f64) -> Self {
        Self {
            mean_elongation_moon_sun: mean_elongation_moon_sun(jce),
            mean_anomaly_sun: mean_anomaly_sun(jce),
            mean_anomaly_moon: mean_anomaly_moon(jce),
            argument_latitude_moon: argument_latitude_moon(jce),
            ascending_longitude_moon: ascending_longitude_moon(jce),
        }
    }
}

/// Sums the 63-term nutation series.
///
/// Each row's argument is `Σ Xj·Yij` converted to radians; the longitude term
/// accumulates `(a + b·JCE)·sin` and the obliquity term `(c + d·JCE)·cos`.
pub fn nutation_longitude_and_obliquity(jce: f64, arguments: &FundamentalArguments) -> Nutation {
    let x = arguments.as_array();
    let mut sum_longitude = 0.0;
    let mut sum_obliquity = 0.0;

    for row in NUTATION_TERMS.iter() {
        let argument = to_radians(
            x.iter()
                .zip(row.multipliers)
                .fold(0.0, |sum, (value, multiplier)| sum + value * f64::from(multiplier)),
        );

        sum_longitude += (row.longitude[0] + jce * row.longitude[1]) * argument.sin();
        sum_obliquity += (row.obliquity[0] + jce * row.obliquity[1]) * argument.cos();
    }

    Nutation {
        longitude: sum_longitude / NUTATION_SCALE_FACTOR,
        obliquity: sum_obliquity / NUTATION_SCALE_FACTOR,
    }
}

/// Mean obliquity of the ecliptic (ε0) in arcseconds.
pub fn ecliptic_mean_obliquity(jme: f64) -> f64 {
    polynomial(&ECLIPTIC_MEAN_OBLIQUITY, jme / 10.0)
}

/// True obliquity of the ecliptic (ε) in degrees.
///
/// * `nutation_obliquity` - Nutation in obliquity in degrees
/// * `mean_obliquity` - Mean obliquity in arcseconds
pub fn ecliptic_true_obliquity(nutation_obliquity: f64, mean_obliquity: f64) -> f64 {
    nutation_obliquity + mean_obliquity / ARCSECONDS_PER_DEGREE
}

impl EclipticObliquity {
    /// Mean and true obliquity at `jme` Julian Ephemeris Millennia.
    pub fn new(jme: f64, nutation: &Nutation) -> Self {
        let mean = ecliptic_mean_obliquity(jme);
        Self {
            mean,
            true_obliquity: ecliptic_true_obliquity(nutation.obliquity, mean),
        }
    }
}
