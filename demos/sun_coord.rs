//! Where is the Sun right now, as seen from a given site?
//!
//! ```text
//! cargo run --example sun_coord -- <latitude> <longitude>
//! ```
//! Both in degrees, longitude positive **east**. Set `RUST_LOG=debug` for the library diagnostics.
use std::env;
use std::process::ExitCode;

use meeus::constants::Accuracy;
use meeus::conversion::Dms;
use meeus::observers::Observer;
use meeus::time::{Clock, SystemClock};
use meeus::MeeusError;

fn parse_degrees(arg: &str, what: &str) -> Result<f64, MeeusError> {
    arg.trim()
        .parse::<f64>()
        .or_else(|_| meeus::conversion::parse_dms(arg))
        .map_err(|_| MeeusError::InvalidParameter(format!("{what}: cannot read {arg:?}")))
}

fn run(latitude: &str, longitude: &str) -> Result<(), MeeusError> {
    let site = Observer::new(
        parse_degrees(longitude, "longitude")?,
        parse_degrees(latitude, "latitude")?,
        None,
    )?;

    let clock = SystemClock;
    let now = clock.now()?;
    // Low accuracy is well below the uncertainty of the refraction.
    let sun = site.sun_position(now.to_julian_day()?, Accuracy::Low)?;

    println!("{now} UTC");
    println!(
        "altitude = {:.2}° ({}), azimuth = {:.2}° from south ({})",
        sun.lat,
        Dms::from_degrees(sun.lat),
        sun.lon,
        Dms::from_degrees(sun.lon)
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <latitude> <longitude>", args[0]);
        eprintln!("degrees, longitude positive towards east");
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
