mod logging;

use clap::{Parser, Subcommand};
use galcoord_rs::{
    AngleUnit, CoordError, Distance, DistanceUnit, Frame, FrameUnitConverter, GalactocentricFrame,
    GalactocentricPosition, UnitSpec, euclidean_distance, format_sexagesimal,
    heliocentric_to_galactocentric_in,
};
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "galcoord",
    about = "Galactic, galactocentric and equatorial coordinate helpers",
    version
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Euclidean distance of a Cartesian triple
    #[command(allow_negative_numbers = true)]
    Distance { x: f64, y: f64, z: f64 },
    /// Heliocentric galactic position to galactocentric Cartesian (kpc)
    #[command(allow_negative_numbers = true)]
    Helio {
        /// Heliocentric distance
        distance: f64,
        /// Galactic longitude in degrees
        glon: f64,
        /// Galactic latitude in degrees
        #[arg(long, default_value = "0.0")]
        glat: f64,
        /// Unit of the distance argument: pc, kpc, Mpc or lyr
        #[arg(long, default_value = "kpc")]
        distance_unit: String,
        /// Print only the distance from the Galactic center
        #[arg(long)]
        distance_only: bool,
        /// Sun to Galactic center distance in kpc
        #[arg(long, default_value = "8.15")]
        galcen_distance: f64,
        /// Sun height above the mid-plane in pc
        #[arg(long, default_value = "5.5")]
        z_sun: f64,
    },
    /// Convert coordinates between frames, output in decimal degrees
    Convert {
        /// First coordinate: RA or longitude (repeat for a batch)
        #[arg(long, required = true, allow_hyphen_values = true)]
        x: Vec<String>,
        /// Second coordinate: Dec or latitude (repeat for a batch)
        #[arg(long, required = true, allow_hyphen_values = true)]
        y: Vec<String>,
        /// Input unit(s), one or two, comma separated
        #[arg(long, default_value = "hourangle,deg")]
        unit: String,
        /// Frame of the input coordinates
        #[arg(long, default_value = "icrs")]
        frame: String,
        /// Output frame: eq, gal, icrs, fk5, fk4 or galactic
        #[arg(long, default_value = "eq")]
        to: String,
        /// Print sexagesimal strings instead of decimal degrees
        #[arg(long)]
        sexagesimal: bool,
    },
}

fn parse_or_exit<T, E>(value: &str, what: &str) -> T
where
    T: std::str::FromStr<Err = E>,
    E: std::fmt::Display,
{
    match value.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid {what}: {e}");
            std::process::exit(1);
        }
    }
}

fn output_frame(to: &str) -> Frame {
    match to.trim().to_ascii_lowercase().as_str() {
        "eq" => Frame::Icrs,
        "gal" => Frame::Galactic,
        other => parse_or_exit(other, "output frame"),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to serialise result: {e}");
            std::process::exit(1);
        }
    }
}

/// RA-like longitudes print as hours, everything else as degrees.
fn sexagesimal_pair(frame: Frame, lon: f64, lat: f64) -> (String, String) {
    let lon = if frame.is_equatorial() {
        format_sexagesimal(AngleUnit::HourAngle.from_degrees(lon), 3)
    } else {
        format_sexagesimal(lon, 2)
    };
    let lat = format_sexagesimal(lat, 2);
    let lat = if lat.starts_with('-') { lat } else { format!("+{lat}") };
    (lon, lat)
}

fn distance_output(json: bool, x: f64, y: f64, z: f64) -> String {
    let d = euclidean_distance(x, y, z);
    if json { to_json(&d) } else { format!("{d:.6}") }
}

fn helio_output(
    json: bool,
    galcen: &GalactocentricFrame,
    distance: Distance,
    glon: f64,
    glat: f64,
    distance_only: bool,
) -> Result<String, CoordError> {
    let xyz = heliocentric_to_galactocentric_in(galcen, distance.to_kpc(), glon, glat)?;
    let result = if distance_only {
        GalactocentricPosition::Distance(euclidean_distance(xyz.x, xyz.y, xyz.z))
    } else {
        GalactocentricPosition::Cartesian(xyz)
    };
    if json {
        return Ok(to_json(&result));
    }
    Ok(match result {
        GalactocentricPosition::Cartesian(v) => {
            format!("x = {:.6} kpc\ny = {:.6} kpc\nz = {:.6} kpc", v.x, v.y, v.z)
        }
        GalactocentricPosition::Distance(d) => format!("{d:.6} kpc"),
    })
}

fn convert_output(
    json: bool,
    conv: &FrameUnitConverter,
    target: Frame,
    sexagesimal: bool,
) -> String {
    let pair = match target {
        Frame::Icrs => conv.to_eq_deg(),
        Frame::Galactic => conv.to_gal_deg(),
        other => conv.to_frame_deg(other),
    };
    let (lon_name, lat_name) = target.component_names();

    if sexagesimal {
        let rows: Vec<(String, String)> = pair
            .iter()
            .map(|(lon, lat)| sexagesimal_pair(target, lon, lat))
            .collect();
        if json {
            return to_json(&rows);
        }
        return rows
            .iter()
            .map(|(lon, lat)| format!("{lon_name} = {lon}  {lat_name} = {lat}"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    if json {
        return to_json(&pair);
    }
    pair.iter()
        .map(|(lon, lat)| format!("{lon_name} = {lon:.6}  {lat_name} = {lat:.6}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn run_distance(json: bool, x: f64, y: f64, z: f64) {
    println!("{}", distance_output(json, x, y, z));
}

#[allow(clippy::too_many_arguments)]
fn run_helio(
    json: bool,
    distance: f64,
    glon: f64,
    glat: f64,
    distance_unit: &str,
    distance_only: bool,
    galcen_distance: f64,
    z_sun: f64,
) {
    let unit: DistanceUnit = parse_or_exit(distance_unit, "distance unit");
    let galcen = match GalactocentricFrame::new(galcen_distance, z_sun) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    info!("galactocentric frame: {galcen:?}");

    match Distance::new(distance, unit)
        .and_then(|d| helio_output(json, &galcen, d, glon, glat, distance_only))
    {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn run_convert(
    json: bool,
    x: Vec<String>,
    y: Vec<String>,
    unit: &str,
    frame: &str,
    to: &str,
    sexagesimal: bool,
) {
    let unit: UnitSpec = parse_or_exit(unit, "unit");
    let frame: Frame = parse_or_exit(frame, "frame");
    let target = output_frame(to);

    // A single value on each axis is treated as a scalar.
    let conv = if x.len() == 1 && y.len() == 1 {
        FrameUnitConverter::with_options(x[0].as_str(), y[0].as_str(), unit, frame)
    } else {
        FrameUnitConverter::with_options(x, y, unit, frame)
    };
    let conv = match conv {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    info!("converting {frame} -> {target}");

    let out = convert_output(json, &conv, target, sexagesimal);
    if !out.is_empty() {
        println!("{out}");
    }
}

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::start_logger(cli.verbose) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start logger: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Distance { x, y, z } => run_distance(cli.json, x, y, z),

        Commands::Helio {
            distance,
            glon,
            glat,
            distance_unit,
            distance_only,
            galcen_distance,
            z_sun,
        } => run_helio(
            cli.json,
            distance,
            glon,
            glat,
            &distance_unit,
            distance_only,
            galcen_distance,
            z_sun,
        ),

        Commands::Convert {
            x,
            y,
            unit,
            frame,
            to,
            sexagesimal,
        } => run_convert(cli.json, x, y, &unit, &frame, &to, sexagesimal),
    }
}
