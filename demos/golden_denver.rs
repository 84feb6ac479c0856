#![allow(missing_docs)]
use chrono::{NaiveDate, TimeDelta};
use solar_part_of_day::{classify_observation, compute_solar_position, ObservationInput, PartOfDay};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // NREL SPA worked example, Golden, Colorado
    let timestamp = NaiveDate::from_ymd_opt(2003, 10, 17)
        .and_then(|date| date.and_hms_opt(12, 30, 30))
        .ok_or("invalid date")?;
    let input = ObservationInput::new(timestamp, -7.0, 39.742476, -105.1786)
        .with_delta_t(67.0)
        .with_elevation(1830.14)
        .with_temperature(11.0)
        .with_pressure(820.0);

    let position = compute_solar_position(&input)?;

    println!("Solar position - Golden, CO");
    println!("Local time: {} (UTC{:+})", input.timestamp, input.timezone);
    println!("{:=<60}", "");
    println!("  Julian Day:                    {:.6}", position.time.jd);
    println!("  Heliocentric longitude (L):    {:.10}°", position.heliocentric.longitude);
    println!("  Heliocentric latitude (B):     {:.10}°", position.heliocentric.latitude);
    println!("  Earth radius vector (R):       {:.10} AU", position.heliocentric.radius);
    println!("  Nutation in longitude (Δψ):    {:.8}°", position.nutation.longitude);
    println!("  Nutation in obliquity (Δε):    {:.8}°", position.nutation.obliquity);
    println!("  True obliquity (ε):            {:.6}°", position.obliquity.true_obliquity);
    println!("  Apparent Sun longitude (λ):    {:.10}°", position.equatorial.apparent_sun_longitude);
    println!("  Right ascension (α):           {:.6}°", position.equatorial.right_ascension);
    println!("  Declination (δ):               {:.6}°", position.equatorial.declination);
    println!("  Topocentric hour angle (H'):   {:.6}°", position.topocentric.hour_angle);
    println!("  Zenith angle:                  {:.6}°", position.zenith());
    println!("  Azimuth:                       {:.6}°", position.azimuth());
    println!();

    // Part-of-day transitions through the same day
    println!("Part of day on {}:", timestamp.date());
    let mut current = timestamp.date().and_hms_opt(0, 0, 0).ok_or("invalid time")?;
    let end = current + TimeDelta::days(1);
    let mut previous: Option<PartOfDay> = None;
    while current < end {
        let part_of_day = classify_observation(&ObservationInput { timestamp: current, ..input });
        if previous != Some(part_of_day) {
            println!("  {}  {}", current.time(), part_of_day);
            previous = Some(part_of_day);
        }
        current += TimeDelta::minutes(5);
    }

    Ok(())
}
