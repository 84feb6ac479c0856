use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::types::JulianDate;

/// Julian Day of the J2000.0 epoch
pub(crate) const J2000_EPOCH_JD: f64 = 2_451_545.0;

/// First Julian Day of the Gregorian calendar (1582-10-15)
const GREGORIAN_CUTOVER_JD: f64 = 2_299_160.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Compute the astronomical Julian Day for a civil date/time.
///
/// - `timestamp`: Local calendar date/time, without an embedded zone.
/// - `timezone`: Offset of `timestamp` from UTC in **hours** (negative west of Greenwich).
/// - `delta_ut1`: UT1 − UTC in **seconds**, added to the seconds of the timestamp.
///
/// Dates before 1582-10-15 are interpreted in the proleptic Julian calendar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use solar_part_of_day::julian_day;
///
/// let noon = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert_eq!(julian_day(&noon, 0.0, 0.0), 2_451_545.0);
/// ```
pub fn julian_day(timestamp: &NaiveDateTime, timezone: f64, delta_ut1: f64) -> f64 {
    let mut year = timestamp.year();
    let mut month = timestamp.month();
    let seconds = f64::from(timestamp.second()) + f64::from(timestamp.nanosecond()) / 1_000_000_000.0;

    let decimal_day = f64::from(timestamp.day())
        + (f64::from(timestamp.hour()) - timezone + (f64::from(timestamp.minute()) + (seconds + delta_ut1) / 60.0) / 60.0)
            / 24.0;

    // January and February count as months 13 and 14 of the previous year
    if month < 3 {
        month += 12;
        year -= 1;
    }

    let mut julian_day = (365.25 * (f64::from(year) + 4716.0)) as i32 as f64
        + (30.6001 * f64::from(month + 1)) as i32 as f64
        + decimal_day
        - 1524.5;

    if julian_day > GREGORIAN_CUTOVER_JD {
        let century = year / 100;
        julian_day += f64::from(2 - century + century / 4);
    }
    julian_day
}

/// Estimates ΔT (TT − UT) in seconds from a Julian Day.
///
/// Quadratic fit over the 1973–2016 observations; an approximation that degrades
/// quickly outside the late 20th and early 21st centuries.
pub fn estimate_delta_t(julian_day: f64) -> f64 {
    -0.000_000_078_65 * julian_day * julian_day + 0.38682 * julian_day - 475_550.0
}

/// Julian Ephemeris Day (JDE) from Julian Day (JD) and ΔT in **seconds**.
pub fn julian_ephemeris_day(julian_day: f64, delta_t: f64) -> f64 {
    julian_day + delta_t / SECONDS_PER_DAY
}

/// Julian century (JC) since J2000.0 from a Julian Day.
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_EPOCH_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian Ephemeris Century (JCE) since J2000.0 from a Julian Ephemeris Day.
pub fn julian_ephemeris_century(julian_ephemeris_day: f64) -> f64 {
    (julian_ephemeris_day - J2000_EPOCH_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian Ephemeris Millennium (JME) from a Julian Ephemeris Century.
pub fn julian_ephemeris_millennium(julian_ephemeris_century: f64) -> f64 {
    julian_ephemeris_century / 10.0
}

impl JulianDate {
    /// Builds every time scale used by the reduction.
    ///
    /// An absent `delta_t` is replaced by [`estimate_delta_t`]; the value actually
    /// used is kept in [`JulianDate::delta_t`].
    pub fn new(timestamp: &NaiveDateTime, timezone: f64, delta_ut1: f64, delta_t: Option<f64>) -> Self {
        let jd = julian_day(timestamp, timezone, delta_ut1);
        let delta_t = delta_t.unwrap_or_else(|| estimate_delta_t(jd));
        let jde = julian_ephemeris_day(jd, delta_t);
        let jce = julian_ephemeris_century(jde);
        Self {
            jd,
            jc: julian_century(jd),
            jde,
            jce,
            jme: julian_ephemeris_millennium(jce),
            delta_t,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
    }

    #[test]
    fn j2000_epoch() {
        assert_eq!(julian_day(&at(2000, 1, 1, 12, 0, 0), 0.0, 0.0), 2_451_545.0);
    }

    #[test]
    fn gregorian_reference_dates() {
        assert_eq!(julian_day(&at(1999, 1, 1, 0, 0, 0), 0.0, 0.0), 2_451_179.5);
        assert_eq!(julian_day(&at(1987, 1, 27, 0, 0, 0), 0.0, 0.0), 2_446_822.5);
        assert_eq!(julian_day(&at(1987, 6, 19, 12, 0, 0), 0.0, 0.0), 2_446_966.0);
        assert_eq!(julian_day(&at(1988, 1, 27, 0, 0, 0), 0.0, 0.0), 2_447_187.5);
        assert_eq!(julian_day(&at(1988, 6, 19, 12, 0, 0), 0.0, 0.0), 2_447_332.0);
        assert_eq!(julian_day(&at(1900, 1, 1, 0, 0, 0), 0.0, 0.0), 2_415_020.5);
        assert_eq!(julian_day(&at(1600, 1, 1, 0, 0, 0), 0.0, 0.0), 2_305_447.5);
        assert_eq!(julian_day(&at(1600, 12, 31, 0, 0, 0), 0.0, 0.0), 2_305_812.5);
    }

    #[test]
    fn julian_calendar_date_before_cutover() {
        assert_abs_diff_eq!(julian_day(&at(837, 4, 10, 7, 12, 0), 0.0, 0.0), 2_026_871.8, epsilon = 1e-1);
    }

    #[test]
    fn timezone_and_delta_ut1_shift_the_day() {
        let local = at(2003, 10, 17, 12, 30, 30);
        assert_abs_diff_eq!(julian_day(&local, -7.0, 0.0), 2_452_930.312_847, epsilon = 5e-7);
        let utc = at(2003, 10, 17, 19, 30, 30);
        assert_eq!(julian_day(&local, -7.0, 0.0), julian_day(&utc, 0.0, 0.0));

        let shifted = julian_day(&utc, 0.0, 0.5) - julian_day(&utc, 0.0, 0.0);
        assert_abs_diff_eq!(shifted, 0.5 / SECONDS_PER_DAY, epsilon = 1e-9);
    }

    #[test]
    fn delta_t_estimate_is_about_a_minute_around_2000() {
        let estimate = estimate_delta_t(J2000_EPOCH_JD);
        assert!((55.0..75.0).contains(&estimate), "ΔT estimate {estimate}");
    }

    #[test]
    fn ephemeris_scales() {
        let date = JulianDate::new(&at(2003, 10, 17, 12, 30, 30), -7.0, 0.0, Some(67.0));
        assert_eq!(date.delta_t, 67.0);
        assert_abs_diff_eq!(date.jde - date.jd, 67.0 / SECONDS_PER_DAY, epsilon = 1e-9);
        assert_abs_diff_eq!(date.jc, 0.037_927_798_692, epsilon = 1e-11);
        assert_abs_diff_eq!(date.jme * 10.0, date.jce, epsilon = 1e-15);
    }

    #[test]
    fn missing_delta_t_is_estimated() {
        let date = JulianDate::new(&at(2016, 6, 10, 12, 0, 0), 0.0, 0.0, None);
        assert_eq!(date.delta_t, estimate_delta_t(date.jd));
    }
}
