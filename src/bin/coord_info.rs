//! Coordinate Information Tool
//!
//! Prints every derived quantity of a Cartesian point, along with its polar
//! and cylindrical-eta forms.
//!
//! Usage:
//!   cargo run --bin coord_info -- [--single] X Y Z
//!
//! Set `RUST_LOG=trace` to see which pseudorapidity branch was taken.

use std::fmt::Display;

use clap::Parser;
use genvector::{Cartesian3D, CylindricalEta3D, Polar3D, Scalar};

/// Coordinate Information Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Displays the derived quantities of a 3D point given by its Cartesian components",
    long_about = None,
    allow_negative_numbers = true
)]
struct Args {
    /// Evaluate in single precision instead of double precision
    #[arg(short, long)]
    single: bool,

    /// X component
    x: f64,

    /// Y component
    y: f64,

    /// Z component
    z: f64,
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl Display) {
    println!("{:<12}: {}", name, value);
}

/// Displays everything there is to know about one point
fn display_point<T: Scalar + Display>(point: Cartesian3D<T>) {
    print_section_header("Cartesian");
    print_named_value("x", point.x());
    print_named_value("y", point.y());
    print_named_value("z", point.z());

    print_section_header("Derived quantities");
    print_named_value("mag2", point.mag2());
    print_named_value("perp2", point.perp2());
    print_named_value("rho", point.rho());
    print_named_value("r", point.r());
    print_named_value("theta", point.theta());
    print_named_value("phi", point.phi());
    print_named_value("eta", point.eta());

    let polar = Polar3D::from(point);
    print_section_header("Polar (r, theta, phi)");
    print_named_value("r", polar.r());
    print_named_value("theta", polar.theta());
    print_named_value("phi", polar.phi());

    let cylindrical = CylindricalEta3D::from(point);
    print_section_header("Cylindrical (rho, eta, phi)");
    print_named_value("rho", cylindrical.rho());
    print_named_value("eta", cylindrical.eta());
    print_named_value("phi", cylindrical.phi());
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    if args.single {
        println!("Precision: single (f32)");
        display_point(Cartesian3D::new(args.x as f32, args.y as f32, args.z as f32));
    } else {
        println!("Precision: double (f64)");
        display_point(Cartesian3D::new(args.x, args.y, args.z));
    }
}
