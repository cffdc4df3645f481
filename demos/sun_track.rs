use std::thread;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone};
use chrono_tz::Europe::Stockholm;

use solar_lighting::{
    generate_daily_track, EngineConfig, GeoCoordinate, Instant, SolarPositionEngine, Strategy,
    SunriseSunset,
};

const CONFIG: &str = r#"
strategy = "ephemeris"
location_refresh_secs = 1
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = EngineConfig::from_toml_str(CONFIG)?;
    let engine = SolarPositionEngine::from_config(&config)?;

    let dt = Stockholm.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
    let instant = Instant::from_datetime(&dt);

    // No location published yet: the engine sweeps on time of day alone.
    let angles = engine.compute(&instant)?;
    println!("=== Before first location fix ===");
    println!("Elevation: {:.2}°  Azimuth: {:.2}°", angles.elevation, angles.azimuth);

    let slot = engine.location_slot();
    let refresh = Duration::from_secs(config.location_refresh_secs);
    let provider = thread::spawn(move || {
        for (lon, lat) in [(11.97, 57.71), (11.97, 57.71), (18.07, 59.33)] {
            let coord = GeoCoordinate::clamped(lon, lat).expect("finite reading");
            println!("provider: {coord} -> changed = {}", slot.publish(coord));
            thread::sleep(refresh / 4);
        }
    });
    provider.join().expect("provider thread");

    let location = engine.location().expect("location published");
    println!();
    println!("=== {} ===", location);
    println!("Date/Time: {}", dt);
    for strategy in Strategy::ALL {
        let angles = strategy.compute(&instant, &location)?;
        println!(
            "{:<17} elevation {:>7.2}°  azimuth {:>7.2}°  light euler {:?}",
            strategy.name(),
            angles.elevation,
            angles.azimuth,
            angles.light_euler()
        );
    }

    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let track = generate_daily_track(engine.strategy(), date, 2.0, &location, 10)?;
    println!();
    println!("--- Daily track ({} samples) ---", track.samples.len());
    if let SunriseSunset::RegularDay { sunrise, sunset } = track.sunrise_sunset() {
        println!(
            "Sunrise {:02}:{:02}  Sunset {:02}:{:02}",
            (sunrise / 60.0) as i32,
            (sunrise % 60.0) as i32,
            (sunset / 60.0) as i32,
            (sunset % 60.0) as i32
        );
    }
    if let Some(peak) = track.max_elevation() {
        println!(
            "Highest sample at {:02}:{:02}: {:.2}°",
            peak.minutes / 60,
            peak.minutes % 60,
            peak.angles.elevation
        );
    }
    Ok(())
}
