//! Command-line front end for the Cartesian-to-geographic conversion.

use std::process;

use clap::Parser;

use geoconv::errors::Result;
use geoconv::great_circle::distance_meters;
use geoconv::{GeoPoint, LocalFrame};

/// Convert a local Cartesian offset (meters east/north) to geographic
/// coordinates.
///
/// With no arguments, runs a demonstration conversion of the offset (3, 2)
/// from the built-in reference origin.
#[derive(Debug, Parser)]
#[command(name = "geoconv", version, about)]
struct Cli {
    /// Reference origin and offset, overriding the built-in origin.
    #[arg(
        num_args = 4,
        value_names = ["START_LAT", "START_LON", "X", "Y"],
        allow_negative_numbers = true
    )]
    frame: Option<Vec<f64>>,
}

fn run(cli: &Cli) -> Result<()> {
    let (frame, x, y) = match &cli.frame {
        Some(v) => (LocalFrame::new(GeoPoint::new(v[0], v[1])), v[2], v[3]),
        None => (LocalFrame::default(), 3.0, 2.0),
    };

    let origin = frame.origin();
    let end = frame.to_geographic(x, y)?;

    println!("original latitude: {:.6}", origin.latitude);
    println!("original longitude: {:.6}", origin.longitude);
    println!("the calculated latitude is: {:.6}", end.latitude);
    println!("the calculated longitude is: {:.6}", end.longitude);
    println!(
        "distance calculated again is: {:.6}",
        distance_meters(&origin, &end)
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("geoconv: {err}");
        process::exit(1);
    }
}
